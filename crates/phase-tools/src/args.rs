// File: crates/phase-tools/src/args.rs
// Summary: Positional argument parsing for the two binaries.

use std::path::PathBuf;

use phase_core::{Error, Result};
use phase_render_skia::OutputFormat;

pub const GENERATOR_USAGE: &str = "fake-diagram <num_phases>";
pub const BUILDER_USAGE: &str = "phase-diagram <input_file> [output_file]";

/// Default image written by the builder when no output path is given.
pub const DEFAULT_OUTPUT: &str = "AGL_pT_phase_diagram.pdf";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratorArgs {
    pub num_phases: usize,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BuilderArgs {
    pub input: PathBuf,
    pub output: PathBuf,
    pub format: OutputFormat,
}

/// `args` excludes the program name.
pub fn parse_generator_args<I, S>(args: I) -> Result<GeneratorArgs>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let args: Vec<S> = args.into_iter().collect();
    if args.len() != 1 {
        return Err(Error::Usage(GENERATOR_USAGE.into()));
    }
    let raw = args[0].as_ref();
    match raw.trim().parse::<usize>() {
        Ok(n) if n >= 1 => Ok(GeneratorArgs { num_phases: n }),
        _ => Err(Error::Usage(format!(
            "{} (num_phases must be a positive integer, got '{}')",
            GENERATOR_USAGE, raw
        ))),
    }
}

/// `args` excludes the program name.
pub fn parse_builder_args<I, S>(args: I) -> Result<BuilderArgs>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut it = args.into_iter();
    let input = it
        .next()
        .map(|s| PathBuf::from(s.as_ref()))
        .ok_or_else(|| Error::Usage(BUILDER_USAGE.into()))?;
    let output = it
        .next()
        .map(|s| PathBuf::from(s.as_ref()))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));
    if it.next().is_some() {
        return Err(Error::Usage(BUILDER_USAGE.into()));
    }
    let format = OutputFormat::from_path(&output).ok_or_else(|| {
        Error::Usage(format!(
            "{} (output must end in .png or .pdf, got '{}')",
            BUILDER_USAGE,
            output.display()
        ))
    })?;
    Ok(BuilderArgs { input, output, format })
}
