// File: crates/phase-render-skia/src/diagram.rs
// Summary: Draws a PhaseDiagram (raster + frame + ticks + legend) onto Skia canvases and writes PNG/PDF.

use std::path::Path;

use anyhow::{Context, Result};
use phase_core::PhaseDiagram;
use skia_safe as skia;

use crate::layout::{format_tick, linspace, Insets, PlotRect};
use crate::palette::slot_color;
use crate::text::TextShaper;
use crate::theme::Theme;

/// Output container, picked from the file extension.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Png,
    Pdf,
}

impl OutputFormat {
    pub fn from_path(path: impl AsRef<Path>) -> Option<Self> {
        let ext = path.as_ref().extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "png" => Some(Self::Png),
            "pdf" => Some(Self::Pdf),
            _ => None,
        }
    }
}

pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    /// Skip all text; keeps pixel output independent of installed fonts.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: 1600,
            height: 1200,
            insets: Insets::default(),
            theme: Theme::default(),
            title: "Phase Diagram".into(),
            x_label: "Temperature (K)".into(),
            y_label: "Pressure (GPa)".into(),
            draw_labels: true,
        }
    }
}

const TICK_COUNT: usize = 7;
const TICK_LEN: f32 = 6.0;
const TICK_FONT: f32 = 15.0;
const LABEL_FONT: f32 = 18.0;
const TITLE_FONT: f32 = 22.0;
const LEGEND_FONT: f32 = 15.0;

pub struct DiagramChart<'a> {
    diagram: &'a PhaseDiagram,
}

impl<'a> DiagramChart<'a> {
    pub fn new(diagram: &'a PhaseDiagram) -> Self {
        Self { diagram }
    }

    /// Render to whichever format the extension of `path` names.
    pub fn render_to_path(&self, opts: &RenderOptions, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let bytes = match OutputFormat::from_path(path) {
            Some(OutputFormat::Png) => self.render_to_png_bytes(opts)?,
            Some(OutputFormat::Pdf) => self.render_to_pdf_bytes(opts)?,
            None => anyhow::bail!("unsupported output format: {} (use .png or .pdf)", path.display()),
        };
        write_output(path, &bytes)
    }

    /// Render to a PNG at `output_png_path` using a CPU raster surface.
    pub fn render_to_png(&self, opts: &RenderOptions, output_png_path: impl AsRef<Path>) -> Result<()> {
        let bytes = self.render_to_png_bytes(opts)?;
        write_output(output_png_path.as_ref(), &bytes)
    }

    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
        self.draw(surface.canvas(), opts);

        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render to a single-page PDF at `output_pdf_path`.
    pub fn render_to_pdf(&self, opts: &RenderOptions, output_pdf_path: impl AsRef<Path>) -> Result<()> {
        let bytes = self.render_to_pdf_bytes(opts)?;
        write_output(output_pdf_path.as_ref(), &bytes)
    }

    pub fn render_to_pdf_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let mut out: Vec<u8> = Vec::new();
        {
            let document = skia::pdf::new_document(&mut out, None);
            let mut page = document.begin_page((opts.width as f32, opts.height as f32), None);
            self.draw(page.canvas(), opts);
            page.end_page().close();
        }
        if out.is_empty() {
            anyhow::bail!("PDF backend produced no output");
        }
        Ok(out)
    }

    /// Draw the full diagram onto `canvas`.
    pub fn draw(&self, canvas: &skia::Canvas, opts: &RenderOptions) {
        let plot = PlotRect::from_insets(opts.width, opts.height, &opts.insets);
        canvas.clear(opts.theme.background);

        draw_cells(canvas, &plot, self.diagram);
        draw_frame(canvas, &plot, &opts.theme);

        if opts.draw_labels {
            let shaper = TextShaper::new();
            draw_ticks(canvas, &plot, self.diagram, &opts.theme, &shaper);
            draw_labels(canvas, &plot, opts, &shaper);
            draw_legend(canvas, &plot, self.diagram, &opts.theme, &shaper);
        }
    }
}

fn write_output(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    std::fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))?;
    log::info!("Wrote {} ({} bytes)", path.display(), bytes.len());
    Ok(())
}

// ---- helpers ----------------------------------------------------------------

fn draw_cells(canvas: &skia::Canvas, plot: &PlotRect, diagram: &PhaseDiagram) {
    let grid = &diagram.grid;
    let n = diagram.legend.len();
    let cw = plot.width() / grid.width() as f32;
    let ch = plot.height() / grid.height() as f32;

    let mut paint = skia::Paint::default();
    paint.set_anti_alias(false);
    paint.set_style(skia::paint::Style::Fill);

    for (r, row) in grid.rows().enumerate() {
        let top = plot.top + r as f32 * ch;
        for (c, &slot) in row.iter().enumerate() {
            let left = plot.left + c as f32 * cw;
            paint.set_color(slot_color(slot, n));
            canvas.draw_rect(skia::Rect::from_xywh(left, top, cw, ch), &paint);
        }
    }
}

fn draw_frame(canvas: &skia::Canvas, plot: &PlotRect, theme: &Theme) {
    let mut paint = skia::Paint::default();
    paint.set_color(theme.frame);
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(1.5);
    canvas.draw_rect(skia::Rect::from_ltrb(plot.left, plot.top, plot.right, plot.bottom), &paint);
}

fn draw_ticks(canvas: &skia::Canvas, plot: &PlotRect, diagram: &PhaseDiagram, theme: &Theme, shaper: &TextShaper) {
    let b = diagram.bounds;
    let mut paint = skia::Paint::default();
    paint.set_color(theme.tick);
    paint.set_anti_alias(true);
    paint.set_stroke_width(1.0);

    // Temperature along the bottom edge
    let t_span = b.t_max - b.t_min;
    let x_ticks = if t_span.abs() < 1e-9 { vec![b.t_min] } else { linspace(b.t_min, b.t_max, TICK_COUNT) };
    for t in x_ticks {
        let frac = if t_span.abs() < 1e-9 { 0.5 } else { (t - b.t_min) / t_span };
        let x = plot.left + frac as f32 * plot.width();
        canvas.draw_line((x, plot.bottom), (x, plot.bottom + TICK_LEN), &paint);
        shaper.draw_centered(canvas, &format_tick(t, t_span), x, plot.bottom + TICK_LEN + TICK_FONT + 4.0, TICK_FONT, theme.tick);
    }

    // Pressure along the left edge, increasing upwards
    let p_span = b.p_max - b.p_min;
    let y_ticks = if p_span.abs() < 1e-9 { vec![b.p_min] } else { linspace(b.p_min, b.p_max, TICK_COUNT) };
    for p in y_ticks {
        let frac = if p_span.abs() < 1e-9 { 0.5 } else { (p - b.p_min) / p_span };
        let y = plot.bottom - frac as f32 * plot.height();
        canvas.draw_line((plot.left - TICK_LEN, y), (plot.left, y), &paint);
        shaper.draw_right(canvas, &format_tick(p, p_span), plot.left - TICK_LEN - 4.0, y + TICK_FONT * 0.35, TICK_FONT, theme.tick);
    }
}

fn draw_labels(canvas: &skia::Canvas, plot: &PlotRect, opts: &RenderOptions, shaper: &TextShaper) {
    let theme = &opts.theme;
    let cx = plot.left + plot.width() * 0.5;
    let cy = plot.top + plot.height() * 0.5;

    shaper.draw_centered(canvas, &opts.title, cx, plot.top - 24.0, TITLE_FONT, theme.title);
    shaper.draw_centered(canvas, &opts.x_label, cx, plot.bottom + 62.0, LABEL_FONT, theme.axis_label);

    // Y label rotated about its own anchor
    let anchor = skia::Point::new(plot.left - 72.0, cy);
    canvas.save();
    canvas.rotate(-90.0, Some(anchor));
    shaper.draw_centered(canvas, &opts.y_label, anchor.x, anchor.y, LABEL_FONT, theme.axis_label);
    canvas.restore();
}

fn draw_legend(canvas: &skia::Canvas, plot: &PlotRect, diagram: &PhaseDiagram, theme: &Theme, shaper: &TextShaper) {
    let names = diagram.legend.names();
    if names.is_empty() {
        return;
    }
    let n = names.len();
    let pad = 10.0;
    let swatch_w = 28.0;
    let row_h = LEGEND_FONT + 10.0;
    let text_w = names
        .iter()
        .map(|name| shaper.measure_width(name, LEGEND_FONT))
        .fold(0.0_f32, f32::max);

    let box_w = pad * 3.0 + swatch_w + text_w;
    let box_h = pad * 2.0 + row_h * n as f32;
    let right = plot.right - pad;
    let top = plot.top + pad;
    let frame = skia::Rect::from_ltrb(right - box_w, top, right, top + box_h);

    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_color(theme.legend_fill);
    canvas.draw_rect(frame, &fill);

    let mut border = skia::Paint::default();
    border.set_anti_alias(true);
    border.set_style(skia::paint::Style::Stroke);
    border.set_stroke_width(1.0);
    border.set_color(theme.legend_border);
    canvas.draw_rect(frame, &border);

    let mut swatch = skia::Paint::default();
    swatch.set_anti_alias(true);
    swatch.set_style(skia::paint::Style::Stroke);
    swatch.set_stroke_width(4.0);

    for (slot, name) in names.iter().enumerate() {
        let row_mid = top + pad + row_h * (slot as f32 + 0.5);
        let x0 = frame.left + pad;
        swatch.set_color(slot_color(slot, n));
        canvas.draw_line((x0, row_mid), (x0 + swatch_w, row_mid), &swatch);
        shaper.draw_left(canvas, name, x0 + swatch_w + pad, row_mid + LEGEND_FONT * 0.35, LEGEND_FONT, theme.legend_text);
    }
}
