// File: crates/phase-core/src/generator.rs
// Summary: Synthetic phase-stability dataset over a rectangular temperature x pressure grid.

use std::io::Write;

use crate::error::{Error, Result};
use crate::sample::{Dataset, PhaseSample};
use crate::types::{is_close, ENDPOINT_TOL};

/// Placeholder energy written for every synthetic sample.
pub const PLACEHOLDER_ENERGY: f64 = -1.0;

/// Fixed-width header line of the generated table.
pub const HEADER: &str = "#  T(K)        P(GPa)                   PhaseName             G(eV/atom)";

const FIELD_SEP: &str = "     ";

/// One grid axis: `min..=max` sampled every `step`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridAxis {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl GridAxis {
    pub const fn new(min: f64, max: f64, step: f64) -> Self {
        Self { min, max, step }
    }

    fn validate(&self, name: &str) -> Result<()> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(Error::Config(format!(
                "{} bounds must be finite, got {}..{}",
                name, self.min, self.max
            )));
        }
        if !self.is_stepped() {
            return Err(Error::Config(format!("{} step must be positive, got {}", name, self.step)));
        }
        if !(self.max >= self.min) {
            return Err(Error::Config(format!(
                "{} range is empty: min {} > max {}",
                name, self.min, self.max
            )));
        }
        Ok(())
    }

    fn is_stepped(&self) -> bool {
        self.step > 0.0 && self.step.is_finite()
    }

    /// Whole steps between `min` and `max` (truncated).
    pub fn intervals(&self) -> usize {
        ((self.max - self.min) / self.step) as usize
    }

    /// Axis values `min + i * step`, including `max` when it is reached
    /// within [`ENDPOINT_TOL`]. Empty for an axis that would fail validation.
    pub fn values(&self) -> Vec<f64> {
        if !self.is_stepped() || !self.min.is_finite() || !self.max.is_finite() {
            return Vec::new();
        }
        let mut out = Vec::new();
        for i in 0..self.intervals().saturating_add(2) {
            let v = self.min + i as f64 * self.step;
            if v < self.max || is_close(v, self.max, ENDPOINT_TOL) {
                out.push(v);
            } else {
                break;
            }
        }
        out
    }
}

/// Grid covered by a synthetic dataset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridSpec {
    /// Kelvin; slow-varying (outer) axis.
    pub temperature: GridAxis,
    /// GPa; fast-varying (inner) axis.
    pub pressure: GridAxis,
}

impl Default for GridSpec {
    fn default() -> Self {
        Self {
            temperature: GridAxis::new(0.0, 3000.0, 10.0),
            pressure: GridAxis::new(0.0, 100.0, 1.0),
        }
    }
}

impl GridSpec {
    pub fn validate(&self) -> Result<()> {
        self.temperature.validate("temperature")?;
        self.pressure.validate("pressure")
    }

    /// Number of samples a full sweep emits.
    pub fn point_count(&self) -> usize {
        self.temperature.values().len() * self.pressure.values().len()
    }
}

/// `test1`, `test2`, ..., `test{num_phases}`.
pub fn phase_names(num_phases: usize) -> Vec<String> {
    (1..=num_phases).map(|i| format!("test{}", i)).collect()
}

/// Default output file name for a generated table.
pub fn output_file_name(num_phases: usize) -> String {
    format!("fake_diagram_with_{}_phases.out", num_phases)
}

/// Sweep the grid (pressure inner, temperature outer), handing out phase
/// labels in contiguous blocks of roughly `intervals_T * intervals_P / num_phases`
/// points. The last phase never advances and absorbs any remainder.
pub fn generate(num_phases: usize, spec: &GridSpec) -> Result<Dataset> {
    if num_phases == 0 {
        return Err(Error::Config("number of phases must be at least 1".into()));
    }
    spec.validate()?;

    let names = phase_names(num_phases);
    let total = spec.temperature.intervals() * spec.pressure.intervals();
    let points_per_phase = total as f64 / num_phases as f64;

    let temps = spec.temperature.values();
    let presses = spec.pressure.values();
    log::debug!(
        "generating {} x {} grid, {:.3} points per phase",
        temps.len(),
        presses.len(),
        points_per_phase
    );

    let mut samples = Vec::with_capacity(temps.len() * presses.len());
    let mut phase_index = 0usize;
    let mut counter = 0usize;
    let last = num_phases - 1;

    for &t in &temps {
        for &p in &presses {
            if counter as f64 > points_per_phase && phase_index != last {
                phase_index += 1;
                counter = 0;
            }
            samples.push(PhaseSample::new(t, p, names[phase_index].as_str(), PLACEHOLDER_ENERGY));
            counter += 1;
        }
    }

    log::info!("Generated {} samples across {} phase(s)", samples.len(), num_phases);
    Ok(Dataset::new(samples))
}

/// Write `dataset` as a header line plus one space-separated line per sample.
pub fn write_dataset<W: Write>(mut w: W, dataset: &Dataset) -> std::io::Result<()> {
    writeln!(w, "{}", HEADER)?;
    for s in dataset {
        writeln!(
            w,
            "{:?}{sep}{:?}{sep}{}{sep}{:?}",
            s.temperature,
            s.pressure,
            s.phase_name,
            s.energy,
            sep = FIELD_SEP
        )?;
    }
    w.flush()
}
