// File: crates/phase-core/src/grid.rs
// Summary: Band grouping, legend construction and the image-oriented phase index grid.

use std::collections::{BTreeSet, HashMap};
use std::ops::Range;

use crate::error::{Error, Result};
use crate::sample::{Dataset, PhaseSample};
use crate::types::{is_close, BAND_TOL, PALETTE_SIZE, SENTINEL_PHASE};

/// Ordered phase names; a name's position is its color slot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Legend {
    names: Vec<String>,
}

impl Legend {
    /// Distinct names sorted alphabetically, with the sentinel moved last.
    pub fn from_dataset(dataset: &Dataset) -> Self {
        let distinct: BTreeSet<&str> = dataset.iter().map(|s| s.phase_name.as_str()).collect();
        let mut names: Vec<String> = distinct
            .into_iter()
            .filter(|n| *n != SENTINEL_PHASE)
            .map(str::to_owned)
            .collect();
        if dataset.iter().any(|s| s.phase_name == SENTINEL_PHASE) {
            names.push(SENTINEL_PHASE.to_owned());
        }
        Self { names }
    }

    pub fn names(&self) -> &[String] { &self.names }
    pub fn len(&self) -> usize { self.names.len() }
    pub fn is_empty(&self) -> bool { self.names.is_empty() }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }

    pub fn has_sentinel(&self) -> bool {
        self.names.last().map(|n| n == SENTINEL_PHASE).unwrap_or(false)
    }
}

/// Temperature and pressure extent covered by the samples.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox {
    pub t_min: f64,
    pub t_max: f64,
    pub p_min: f64,
    pub p_max: f64,
}

impl BoundingBox {
    fn empty() -> Self {
        Self {
            t_min: f64::INFINITY,
            t_max: f64::NEG_INFINITY,
            p_min: f64::INFINITY,
            p_max: f64::NEG_INFINITY,
        }
    }

    fn include(&mut self, s: &PhaseSample) {
        self.t_min = self.t_min.min(s.temperature);
        self.t_max = self.t_max.max(s.temperature);
        self.p_min = self.p_min.min(s.pressure);
        self.p_max = self.p_max.max(s.pressure);
    }
}

/// Legend indices laid out for a raster: row 0 is the highest pressure,
/// columns run from lowest to highest temperature.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PhaseIndexGrid {
    width: usize,
    height: usize,
    cells: Vec<usize>,
}

impl PhaseIndexGrid {
    /// Build from temperature-major rows (one row per band, pressure
    /// increasing along each row). Transposes to pressure-major and flips
    /// vertically. Fails with [`Error::Shape`] unless every band has the
    /// same length.
    pub fn from_band_rows(rows: &[Vec<usize>], band_temperatures: &[f64]) -> Result<Self> {
        let Some(first) = rows.first() else {
            return Err(Error::Data("no temperature bands to lay out".into()));
        };
        let height = first.len();
        for (band, row) in rows.iter().enumerate() {
            if row.len() != height {
                return Err(Error::Shape {
                    band,
                    temperature: band_temperatures.get(band).copied().unwrap_or(f64::NAN),
                    expected: height,
                    found: row.len(),
                });
            }
        }

        let width = rows.len();
        let mut cells = Vec::with_capacity(width * height);
        for r in 0..height {
            let k = height - 1 - r;
            cells.extend(rows.iter().map(|band| band[k]));
        }
        Ok(Self { width, height, cells })
    }

    /// Number of columns (temperature bands).
    pub fn width(&self) -> usize { self.width }
    /// Number of rows (pressure points per band).
    pub fn height(&self) -> usize { self.height }

    pub fn get(&self, row: usize, col: usize) -> Option<usize> {
        if row < self.height && col < self.width {
            Some(self.cells[row * self.width + col])
        } else {
            None
        }
    }

    pub fn row(&self, row: usize) -> Option<&[usize]> {
        if row < self.height {
            Some(&self.cells[row * self.width..(row + 1) * self.width])
        } else {
            None
        }
    }

    pub fn rows(&self) -> std::slice::Chunks<'_, usize> {
        self.cells.chunks(self.width.max(1))
    }

    pub fn to_rows(&self) -> Vec<Vec<usize>> {
        self.rows().map(<[usize]>::to_vec).collect()
    }

    pub fn cells(&self) -> &[usize] { &self.cells }
}

/// Everything a renderer needs: raster, extent and legend.
#[derive(Clone, Debug, PartialEq)]
pub struct PhaseDiagram {
    pub grid: PhaseIndexGrid,
    pub bounds: BoundingBox,
    pub legend: Legend,
    /// Temperature of each band, i.e. of each grid column.
    pub band_temperatures: Vec<f64>,
}

/// Split samples into maximal runs whose temperature matches the run's first
/// sample within `tol`.
pub fn band_ranges(samples: &[PhaseSample], tol: f64) -> Vec<Range<usize>> {
    let mut out = Vec::new();
    let mut start = 0;
    while start < samples.len() {
        let t_ref = samples[start].temperature;
        let mut end = start + 1;
        while end < samples.len() && is_close(t_ref, samples[end].temperature, tol) {
            end += 1;
        }
        out.push(start..end);
        start = end;
    }
    out
}

/// Temperature-major index rows (one per band, in dataset order), the band
/// temperatures and the bounding box.
pub fn band_rows(dataset: &Dataset, legend: &Legend) -> Result<(Vec<Vec<usize>>, Vec<f64>, BoundingBox)> {
    let lookup: HashMap<&str, usize> = legend
        .names()
        .iter()
        .enumerate()
        .map(|(i, n)| (n.as_str(), i))
        .collect();

    let samples = dataset.samples();
    let mut bounds = BoundingBox::empty();
    let mut rows = Vec::new();
    let mut temps = Vec::new();

    for range in band_ranges(samples, BAND_TOL) {
        let band = &samples[range];
        temps.push(band[0].temperature);
        let mut row = Vec::with_capacity(band.len());
        for s in band {
            bounds.include(s);
            let idx = lookup.get(s.phase_name.as_str()).copied().ok_or_else(|| {
                Error::Data(format!("phase '{}' missing from legend", s.phase_name))
            })?;
            row.push(idx);
        }
        rows.push(row);
    }
    Ok((rows, temps, bounds))
}

/// Build the diagram with the default color budget ([`PALETTE_SIZE`]).
pub fn build_phase_diagram(dataset: &Dataset) -> Result<PhaseDiagram> {
    build_phase_diagram_with(dataset, PALETTE_SIZE)
}

/// Build the diagram allowing at most `max_phases` distinct phase names.
pub fn build_phase_diagram_with(dataset: &Dataset, max_phases: usize) -> Result<PhaseDiagram> {
    if dataset.is_empty() {
        return Err(Error::Data("no phase data found".into()));
    }

    let legend = Legend::from_dataset(dataset);
    if legend.len() > max_phases {
        return Err(Error::Config(format!(
            "{} distinct phases found; at most {} phases fit on a single diagram",
            legend.len(),
            max_phases
        )));
    }
    log::debug!("legend: {:?}", legend.names());

    let (rows, band_temperatures, bounds) = band_rows(dataset, &legend)?;
    let grid = PhaseIndexGrid::from_band_rows(&rows, &band_temperatures)?;
    log::info!(
        "Built {} x {} phase grid (T {}..{} K, P {}..{} GPa)",
        grid.height(),
        grid.width(),
        bounds.t_min,
        bounds.t_max,
        bounds.p_min,
        bounds.p_max
    );

    Ok(PhaseDiagram { grid, bounds, legend, band_temperatures })
}
