// File: crates/phase-render-skia/src/palette.rs
// Summary: The ten phase colors and the legend-slot-to-color mapping.

use phase_core::PALETTE_SIZE;
use skia_safe as skia;

/// red, blue, gray, brown, black, purple, orange, yellow, pink, green.
pub const PHASE_COLORS: [skia::Color; PALETTE_SIZE] = [
    skia::Color::new(0xFFFF_0000), // red
    skia::Color::new(0xFF00_00FF), // blue
    skia::Color::new(0xFF80_8080), // gray
    skia::Color::new(0xFFA5_2A2A), // brown
    skia::Color::new(0xFF00_0000), // black
    skia::Color::new(0xFF80_0080), // purple
    skia::Color::new(0xFFFF_A500), // orange
    skia::Color::new(0xFFFF_FF00), // yellow
    skia::Color::new(0xFFFF_C0CB), // pink
    skia::Color::new(0xFF00_8000), // green
];

/// Palette index for legend `slot` out of `n` entries.
///
/// Slots are spread evenly over the palette, so the last slot (where the
/// sentinel phase lives) always maps to the last color.
pub fn palette_index(slot: usize, n: usize) -> usize {
    if n <= 1 {
        return 0;
    }
    let x = slot as f64 / (n - 1) as f64;
    ((x * PALETTE_SIZE as f64) as usize).min(PALETTE_SIZE - 1)
}

pub fn slot_color(slot: usize, n: usize) -> skia::Color {
    PHASE_COLORS[palette_index(slot, n)]
}
