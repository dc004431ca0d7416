use log::debug;

use genotype::{PopulationError, PopulationTable, Profile, RawProfile};

use crate::index::{self, PaternityIndex};
use crate::mendel;
use crate::validate::{self, InputError};

/// A paternity test over a single parent-child duo.
///
/// Construction validates both raw profiles (diploid pairs, identical marker
/// panels), strips the sex-typing marker, and keeps the two marker-aligned
/// profiles together with the injected, read-only population table.
///
/// The analysis accessors are computed on demand and never cached: the case
/// holds no mutable state, so one instance per caller is safe to evaluate
/// concurrently as long as the population table is shared immutably.
#[derive(Debug)]
pub struct DuoCase<'p> {
    parent    : Profile,
    child     : Profile,
    population: &'p PopulationTable,
}

impl<'p> DuoCase<'p> {
    pub fn new(
        parent    : &RawProfile,
        child     : &RawProfile,
        population: &'p PopulationTable,
    ) -> Result<Self, InputError> {
        let (parent, child) = validate::validated_pair(parent, child)?;
        debug!("DuoCase over {} shared marker(s)", parent.len());
        Ok(Self { parent, child, population })
    }

    /// Shared marker panel, sorted lexicographically. The sex-typing marker
    /// never appears here.
    #[must_use]
    pub fn markers(&self) -> &[String] {
        self.parent.markers()
    }

    #[must_use]
    pub fn parent(&self) -> &Profile {
        &self.parent
    }

    #[must_use]
    pub fn child(&self) -> &Profile {
        &self.child
    }

    /// Markers whose child genotype fails the Mendelian-transmission check.
    #[must_use]
    pub fn inconsistent_markers(&self) -> Vec<String> {
        mendel::inconsistent_markers(&self.parent, &self.child)
    }

    /// Evaluate the paternity index for this duo. Inconsistent markers are
    /// re-checked internally and short-circuit into a diagnostic variant.
    pub fn paternity_index(&self) -> Result<PaternityIndex, PopulationError> {
        index::paternity_index(&self.parent, &self.child, self.population)
    }
}
