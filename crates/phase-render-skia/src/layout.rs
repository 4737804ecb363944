// File: crates/phase-render-skia/src/layout.rs
// Summary: Margins, plot rectangle and tick placement helpers.

/// Screen margins, in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(110, 40, 70, 90)
    }
}

/// Plot area inside the surface, in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotRect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl PlotRect {
    pub fn from_insets(width: i32, height: i32, insets: &Insets) -> Self {
        let left = insets.left as f32;
        let top = insets.top as f32;
        let right = (width as f32 - insets.right as f32).max(left + 1.0);
        let bottom = (height as f32 - insets.bottom as f32).max(top + 1.0);
        Self { left, top, right, bottom }
    }
    pub fn width(&self) -> f32 { self.right - self.left }
    pub fn height(&self) -> f32 { self.bottom - self.top }
}

pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// Tick label with precision chosen from the axis span.
pub fn format_tick(v: f64, span: f64) -> String {
    if span >= 10.0 {
        format!("{:.0}", v)
    } else if span >= 1.0 {
        format!("{:.1}", v)
    } else {
        format!("{:.2}", v)
    }
}
