// File: crates/phase-core/src/sample.rs
// Summary: PhaseSample record and the ordered Dataset container.

/// One (temperature, pressure) point and the phase stable there.
#[derive(Clone, Debug, PartialEq)]
pub struct PhaseSample {
    /// Kelvin.
    pub temperature: f64,
    /// GPa.
    pub pressure: f64,
    pub phase_name: String,
    /// eV/atom. Carried through but never used for grouping.
    pub energy: f64,
}

impl PhaseSample {
    pub fn new(temperature: f64, pressure: f64, phase_name: impl Into<String>, energy: f64) -> Self {
        Self { temperature, pressure, phase_name: phase_name.into(), energy }
    }
}

/// Samples ordered by temperature, then by pressure within a temperature band.
///
/// The ordering is a property of whoever produced the dataset (the generator
/// or the input file); it is not re-checked here. A non-rectangular layout is
/// caught later by the grid builder.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dataset {
    samples: Vec<PhaseSample>,
}

impl Dataset {
    pub fn new(samples: Vec<PhaseSample>) -> Self {
        Self { samples }
    }

    pub fn samples(&self) -> &[PhaseSample] { &self.samples }
    pub fn len(&self) -> usize { self.samples.len() }
    pub fn is_empty(&self) -> bool { self.samples.is_empty() }
    pub fn iter(&self) -> std::slice::Iter<'_, PhaseSample> { self.samples.iter() }

    pub fn into_samples(self) -> Vec<PhaseSample> { self.samples }
}

impl From<Vec<PhaseSample>> for Dataset {
    fn from(samples: Vec<PhaseSample>) -> Self {
        Self::new(samples)
    }
}

impl FromIterator<PhaseSample> for Dataset {
    fn from_iter<I: IntoIterator<Item = PhaseSample>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a PhaseSample;
    type IntoIter = std::slice::Iter<'a, PhaseSample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}
