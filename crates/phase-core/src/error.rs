// File: crates/phase-core/src/error.rs
// Summary: Error taxonomy shared by the generator, parser and grid builder.

use std::io;
use thiserror::Error;

/// Every failure is terminal: callers report it and stop.
#[derive(Error, Debug)]
pub enum Error {
    /// Missing or invalid command line arguments.
    #[error("usage: {0}")]
    Usage(String),

    /// Empty or unparseable dataset.
    #[error("data error: {0}")]
    Data(String),

    /// Configuration the pipeline cannot honour (too many phases, bad grid).
    #[error("config error: {0}")]
    Config(String),

    /// Bands of unequal length; the samples do not form a rectangle.
    #[error("shape error: band {band} at T={temperature} has {found} samples, expected {expected}")]
    Shape {
        band: usize,
        temperature: f64,
        expected: usize,
        found: usize,
    },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
