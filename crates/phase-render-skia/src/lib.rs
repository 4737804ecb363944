// File: crates/phase-render-skia/src/lib.rs
// Summary: Skia renderer for phase index grids: palette, theme, layout and PNG/PDF output.

pub mod diagram;
pub mod layout;
pub mod palette;
pub mod text;
pub mod theme;

pub use diagram::{DiagramChart, OutputFormat, RenderOptions};
pub use layout::Insets;
pub use palette::{palette_index, slot_color, PHASE_COLORS};
pub use text::TextShaper;
pub use theme::Theme;
