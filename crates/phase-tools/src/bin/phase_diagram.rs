// File: crates/phase-tools/src/bin/phase_diagram.rs
// Summary: Reads a T/P phase table and renders it as a phase diagram image (PNG or PDF).

use anyhow::{Context, Result};
use phase_core::{build_phase_diagram, read_dataset};
use phase_render_skia::{theme, DiagramChart, OutputFormat, RenderOptions};
use phase_tools::args::parse_builder_args;
use phase_tools::{exit_on_usage, logging};

/// Environment variable naming the theme preset.
const THEME_ENV: &str = "PHASE_THEME";

fn main() -> Result<()> {
    logging::init();
    exit_on_usage(run())
}

fn run() -> Result<()> {
    let args = parse_builder_args(std::env::args().skip(1))?;
    log::info!("Using input file: {}", args.input.display());

    let dataset = read_dataset(&args.input)
        .with_context(|| format!("failed to load phase data from '{}'", args.input.display()))?;
    let diagram = build_phase_diagram(&dataset)?;
    println!(
        "Phases ({}): {}",
        diagram.legend.len(),
        diagram.legend.names().join(", ")
    );

    let mut opts = RenderOptions::default();
    if let Ok(name) = std::env::var(THEME_ENV) {
        match theme::find(&name) {
            Some(t) => opts.theme = t,
            None => log::warn!("unknown theme '{}', using {}", name, opts.theme.name),
        }
    }

    log::debug!("output format {:?}", args.format);
    let chart = DiagramChart::new(&diagram);
    match args.format {
        OutputFormat::Png => chart.render_to_png(&opts, &args.output),
        OutputFormat::Pdf => chart.render_to_pdf(&opts, &args.output),
    }
    .with_context(|| format!("failed to render '{}'", args.output.display()))?;
    println!("Wrote {}", args.output.display());
    Ok(())
}
