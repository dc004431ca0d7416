mod error;
pub use error::PopulationError;

use ahash::AHashMap;

use crate::allele::Allele;

/// Per-marker, per-allele occurrence probabilities within a reference
/// population.
///
/// The table is treated as a read-only lookup service once populated:
/// frequencies for a marker need not sum to one (rare alleles may be omitted
/// from published tables), and completeness with respect to a given profile
/// pair is only checked at lookup time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PopulationTable {
    frequencies: AHashMap<String, AHashMap<Allele, f64>>,
}

impl PopulationTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, marker: impl Into<String>, allele: Allele, frequency: f64) {
        self.frequencies.entry(marker.into()).or_default().insert(allele, frequency);
    }

    /// Opaque lookup: `Some(frequency)`, or `None` when the entry is missing.
    #[must_use]
    pub fn lookup(&self, marker: &str, allele: Allele) -> Option<f64> {
        self.frequencies.get(marker)?.get(&allele).copied()
    }

    /// Checked lookup, for use within likelihood computations: a missing
    /// marker or allele entry aborts the calculation.
    pub fn frequency(&self, marker: &str, allele: Allele) -> Result<f64, PopulationError> {
        self.frequencies
            .get(marker)
            .ok_or_else(|| PopulationError::MissingMarker(marker.to_string()))?
            .get(&allele)
            .copied()
            .ok_or_else(|| PopulationError::MissingFrequency { marker: marker.to_string(), allele })
    }

    /// Number of markers covered by the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.frequencies.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }
}
