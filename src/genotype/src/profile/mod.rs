use ahash::AHashMap;
use itertools::Itertools;

use crate::allele::Allele;
use crate::genotype::Genotype;

/// An unvalidated, caller-supplied STR profile: marker name => observed alleles.
///
/// Allele collections are kept as vectors at this stage so that malformed
/// entries (one allele, three alleles...) survive until validation and can be
/// reported with a precise message.
pub type RawProfile = AHashMap<String, Vec<Allele>>;

/// The validated STR profile of a single individual.
///
/// - `markers`   : marker names, sorted lexicographically for deterministic
///                 alignment between profiles.
/// - `genotypes` : allele pairs, index-aligned with `markers`.
///
/// Construction is a pure transformation: pair-length validation is the
/// responsibility of the caller (see `duo::validate`). Immutable afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    markers  : Vec<String>,
    genotypes: Vec<Genotype>,
}

impl Profile {
    pub fn new(loci: impl IntoIterator<Item = (String, Genotype)>) -> Self {
        let (markers, genotypes) = loci
            .into_iter()
            .sorted_by(|a, b| a.0.cmp(&b.0))
            .unzip();
        Self { markers, genotypes }
    }

    #[must_use]
    pub fn markers(&self) -> &[String] {
        &self.markers
    }

    #[must_use]
    pub fn genotypes(&self) -> &[Genotype] {
        &self.genotypes
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.markers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    /// Iterate over `(marker, genotype)` pairs, in sorted marker order.
    pub fn loci(&self) -> impl Iterator<Item = (&str, &Genotype)> {
        self.markers.iter().map(String::as_str).zip(self.genotypes.iter())
    }
}
