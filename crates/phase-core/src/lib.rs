// File: crates/phase-core/src/lib.rs
// Summary: Core library entry point; exports the dataset model, parser, generator and grid builder.

pub mod error;
pub mod types;
pub mod sample;
pub mod parser;
pub mod generator;
pub mod grid;

pub use error::{Error, Result};
pub use sample::{Dataset, PhaseSample};
pub use parser::{parse_dataset, parse_str, read_dataset};
pub use generator::{generate, write_dataset, GridAxis, GridSpec};
pub use grid::{build_phase_diagram, build_phase_diagram_with, BoundingBox, Legend, PhaseDiagram, PhaseIndexGrid};
pub use types::{is_close, BAND_TOL, CLOSE_TOL, ENDPOINT_TOL, PALETTE_SIZE, SENTINEL_PHASE};
