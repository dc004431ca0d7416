use genotype::{Genotype, Profile};

/// Mendelian-transmission check for a single marker: the child must carry
/// exactly one allele slot whose value is absent from the parent pair (one
/// allele received from the tested parent, one from the untested one).
///
/// The rule counts slot membership, not transmission paths. Consequence: a
/// child sharing both allele values with the parent yields zero absent slots
/// and is classified inconsistent, as is a homozygous child whose repeated
/// value appears in the parent pair.
#[must_use]
pub fn is_consistent(parent: &Genotype, child: &Genotype) -> bool {
    child.alleles_absent_from(parent) == 1
}

/// Collect the markers whose child genotype fails the transmission check,
/// in sorted marker order. Both profiles must be marker-aligned
/// (see `validate::validated_pair`).
#[must_use]
pub fn inconsistent_markers(parent: &Profile, child: &Profile) -> Vec<String> {
    parent
        .loci()
        .zip(child.loci())
        .filter(|((_, parent_genotype), (_, child_genotype))| !is_consistent(parent_genotype, child_genotype))
        .map(|((marker, _), _)| marker.to_string())
        .collect()
}
