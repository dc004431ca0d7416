use std::fmt;

use log::trace;

use genotype::{Allele, Genotype, PopulationError, PopulationTable, Profile};

use crate::mendel;

/// Outcome of a paternity-index evaluation.
///
/// An exclusion is not an error: it is a normal, typed result stating that
/// the hypothesis "this parent is a biological parent" is contradicted by
/// the genotype data.
#[derive(Debug, Clone, PartialEq)]
pub enum PaternityIndex {
    /// Likelihood ratio of "the tested individual is a biological parent"
    /// against "an unrelated individual is", as a product over all markers.
    Ratio(f64),

    /// Markers that failed the Mendelian-transmission check, in sorted order.
    Inconsistent(Vec<String>),
}

impl PaternityIndex {
    #[must_use]
    pub fn is_inconsistent(&self) -> bool {
        matches!(self, Self::Inconsistent(_))
    }
}

impl fmt::Display for PaternityIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ratio(ratio) => write!(f, "Paternity index: {ratio}"),
            Self::Inconsistent(markers) => {
                write!(f, "There are {} inconsistent marker(s): {}", markers.len(), markers.join(", "))
            }
        }
    }
}

/// Combined likelihood ratio across all shared markers, in marker order.
///
/// Markers failing the Mendelian check short-circuit the computation into the
/// `Inconsistent` variant before any frequency is looked up. The running
/// product is deterministic (sorted marker order), though multiplication
/// makes the numeric result order-independent anyway.
pub fn paternity_index(
    parent    : &Profile,
    child     : &Profile,
    population: &PopulationTable,
) -> Result<PaternityIndex, PopulationError> {
    let inconsistent = mendel::inconsistent_markers(parent, child);
    if !inconsistent.is_empty() {
        return Ok(PaternityIndex::Inconsistent(inconsistent));
    }

    let mut index = 1.0;
    for ((marker, parent_genotype), (_, child_genotype)) in parent.loci().zip(child.loci()) {
        let ratio = marker_ratio(marker, parent_genotype, child_genotype, population)?;
        trace!("{marker}: {parent_genotype} x {child_genotype} -> LR {ratio}");
        index *= ratio;
    }
    Ok(PaternityIndex::Ratio(index))
}

/// Likelihood-ratio contribution of a single marker, classified by the
/// zygosity pattern of the parent pair P and child pair C:
///
/// - P heterozygous, C heterozygous sharing both alleles: `(f(a) + f(b)) / (4*f(a)*f(b))`
/// - P heterozygous, C heterozygous sharing one allele  : `0.25 / f(shared)`
/// - one side heterozygous, the other homozygous        : `0.5 / f(p1)`
/// - both homozygous                                    : `1 / f(p1)`
///
/// where `p1` is the parent's first reported allele and `f` the population
/// frequency at this marker.
pub fn marker_ratio(
    marker    : &str,
    parent    : &Genotype,
    child     : &Genotype,
    population: &PopulationTable,
) -> Result<f64, PopulationError> {
    let frequency = |allele: Allele| population.frequency(marker, allele);

    let ratio = match (parent.is_heterozygous(), child.is_heterozygous()) {
        (true, true) => {
            let shared: Vec<Allele> = child
                .alleles()
                .into_iter()
                .filter(|allele| parent.contains(*allele))
                .collect();
            match shared.as_slice() {
                [_, _] => {
                    let (a, b) = (frequency(parent.first())?, frequency(parent.second())?);
                    (a + b) / (4.0 * a * b)
                }
                [shared_allele] => 0.25 / frequency(*shared_allele)?,
                // No transmissible allele: the marker excludes the tested
                // parent outright and nullifies the whole product.
                _ => 0.0,
            }
        }
        (true, false) | (false, true) => 0.5 / frequency(parent.first())?,
        (false, false) => 1.0 / frequency(parent.first())?,
    };
    Ok(ratio)
}
