// File: crates/phase-render-skia/src/theme.rs
// Summary: Light/Dark theming for the frame, labels and legend around the phase raster.

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub frame: skia::Color,
    pub tick: skia::Color,
    pub axis_label: skia::Color,
    pub title: skia::Color,
    pub legend_fill: skia::Color,
    pub legend_border: skia::Color,
    pub legend_text: skia::Color,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 255, 255, 255),
            frame: skia::Color::from_argb(255, 20, 20, 20),
            tick: skia::Color::from_argb(255, 40, 40, 40),
            axis_label: skia::Color::from_argb(255, 10, 10, 10),
            title: skia::Color::from_argb(255, 0, 0, 0),
            legend_fill: skia::Color::from_argb(220, 255, 255, 255),
            legend_border: skia::Color::from_argb(255, 200, 200, 200),
            legend_text: skia::Color::from_argb(255, 10, 10, 10),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            frame: skia::Color::from_argb(255, 180, 180, 190),
            tick: skia::Color::from_argb(255, 150, 150, 160),
            axis_label: skia::Color::from_argb(255, 235, 235, 245),
            title: skia::Color::from_argb(255, 245, 245, 250),
            legend_fill: skia::Color::from_argb(220, 30, 30, 34),
            legend_border: skia::Color::from_argb(255, 90, 90, 100),
            legend_text: skia::Color::from_argb(255, 235, 235, 245),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::light()
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`.
pub fn find(name: &str) -> Option<Theme> {
    presets().into_iter().find(|t| t.name.eq_ignore_ascii_case(name))
}
