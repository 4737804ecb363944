// File: crates/phase-tools/src/bin/fake_diagram.rs
// Summary: Writes fake_diagram_with_<n>_phases.out, a synthetic T/P phase table over the default grid.

use std::fs::File;
use std::io::BufWriter;

use anyhow::{Context, Result};
use phase_core::generator::output_file_name;
use phase_core::{generate, write_dataset, GridSpec};
use phase_tools::args::parse_generator_args;
use phase_tools::{exit_on_usage, logging};

fn main() -> Result<()> {
    logging::init();
    exit_on_usage(run())
}

fn run() -> Result<()> {
    let args = parse_generator_args(std::env::args().skip(1))?;

    let dataset = generate(args.num_phases, &GridSpec::default())?;

    let out = output_file_name(args.num_phases);
    let file = File::create(&out).with_context(|| format!("creating {}", out))?;
    write_dataset(BufWriter::new(file), &dataset).with_context(|| format!("writing {}", out))?;

    println!("Wrote {} ({} samples)", out, dataset.len());
    Ok(())
}
