mod error;
pub use error::InputError;

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use genotype::{Allele, Genotype, Profile, RawProfile};

/// Conventional label of the sex-typing marker (amelogenin). Diagnostic, not
/// probative: it carries no autosomal-inheritance information and is stripped
/// from both profiles before analysis.
pub const SEX_TYPING_MARKER: &str = "AMEL";

/// Which side of the duo an input profile belongs to. Used to point error
/// messages at the offending file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Parent,
    Child,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parent => write!(f, "parent"),
            Self::Child  => write!(f, "child"),
        }
    }
}

/// Check a raw profile pair and promote it to marker-aligned `Profile`s.
///
/// Fails with an `InputError` when any marker reports a number of alleles
/// other than two, or when the two marker-name sets differ. The sex-typing
/// marker is stripped from both sides *after* the set-equality check: a kit
/// mismatch is a data error even when confined to amelogenin.
pub fn validated_pair(parent: &RawProfile, child: &RawProfile) -> Result<(Profile, Profile), InputError> {
    let parent_loci = checked_genotypes(Role::Parent, parent)?;
    let child_loci  = checked_genotypes(Role::Child, child)?;

    let parent_markers: BTreeSet<&String> = parent.keys().collect();
    let child_markers : BTreeSet<&String> = child.keys().collect();
    if parent_markers != child_markers {
        let unique = parent_markers
            .symmetric_difference(&child_markers)
            .map(|marker| (*marker).clone())
            .collect();
        return Err(InputError::MismatchedPanels(unique));
    }

    Ok((strip_sex_typing(parent_loci), strip_sex_typing(child_loci)))
}

/// Ensure every marker carries a diploid pair. Markers are visited in sorted
/// order so that the reported offender is deterministic.
fn checked_genotypes(role: Role, profile: &RawProfile) -> Result<Vec<(String, Genotype)>, InputError> {
    let ordered: BTreeMap<&String, &Vec<Allele>> = profile.iter().collect();
    ordered
        .into_iter()
        .map(|(marker, alleles)| match alleles.as_slice() {
            &[a, b] => Ok((marker.clone(), Genotype::new([a, b]))),
            _ => Err(InputError::MalformedGenotype {
                role,
                marker: marker.clone(),
                found : alleles.len(),
            }),
        })
        .collect()
}

fn strip_sex_typing(loci: Vec<(String, Genotype)>) -> Profile {
    Profile::new(loci.into_iter().filter(|(marker, _)| marker != SEX_TYPING_MARKER))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::common::raw_profile;

    #[test]
    fn accepts_matching_panels() -> Result<(), InputError> {
        let parent = raw_profile(&[("CSF1PO", &["13", "14"]), ("TH01", &["6", "9.3"])]);
        let child  = raw_profile(&[("TH01", &["9.3", "7"]), ("CSF1PO", &["13", "15"])]);

        let (parent, child) = validated_pair(&parent, &child)?;
        assert_eq!(parent.markers(), ["CSF1PO", "TH01"]);
        assert_eq!(parent.markers(), child.markers());
        Ok(())
    }

    #[test]
    fn rejects_mismatched_panels() {
        let parent = raw_profile(&[("CSF1PO", &["13", "14"]), ("TH01", &["6", "9.3"])]);
        let child  = raw_profile(&[("CSF1PO", &["13", "15"]), ("D21S11", &["29", "30"])]);

        let err = validated_pair(&parent, &child).unwrap_err();
        assert_eq!(err, InputError::MismatchedPanels(vec!["D21S11".to_string(), "TH01".to_string()]));
    }

    #[test]
    fn rejects_malformed_genotypes() {
        for alleles in [&["13"] as &[&str], &["13", "14", "15"]] {
            let parent = raw_profile(&[("CSF1PO", alleles)]);
            let child  = raw_profile(&[("CSF1PO", &["13", "14"])]);

            let err = validated_pair(&parent, &child).unwrap_err();
            assert_eq!(
                err,
                InputError::MalformedGenotype {
                    role  : Role::Parent,
                    marker: "CSF1PO".to_string(),
                    found : alleles.len(),
                }
            );
        }
    }

    #[test]
    fn strips_sex_typing_marker() -> Result<(), InputError> {
        let parent = raw_profile(&[("AMEL", &["X", "Y"]), ("CSF1PO", &["13", "14"])]);
        let child  = raw_profile(&[("AMEL", &["X", "X"]), ("CSF1PO", &["13", "15"])]);

        let (parent, child) = validated_pair(&parent, &child)?;
        assert_eq!(parent.markers(), ["CSF1PO"]);
        assert_eq!(child.markers(), ["CSF1PO"]);
        Ok(())
    }

    #[test]
    fn sex_typing_marker_still_counts_towards_panel_equality() {
        // AMEL is only stripped after the set-equality check.
        let parent = raw_profile(&[("AMEL", &["X", "Y"]), ("CSF1PO", &["13", "14"])]);
        let child  = raw_profile(&[("CSF1PO", &["13", "15"])]);

        let err = validated_pair(&parent, &child).unwrap_err();
        assert_eq!(err, InputError::MismatchedPanels(vec!["AMEL".to_string()]));
    }

    #[test]
    fn malformed_sex_typing_genotype_is_still_an_error() {
        // Length validation happens before AMEL is stripped.
        let parent = raw_profile(&[("AMEL", &["X"]), ("CSF1PO", &["13", "14"])]);
        let child  = raw_profile(&[("AMEL", &["X"]), ("CSF1PO", &["13", "15"])]);

        let err = validated_pair(&parent, &child).unwrap_err();
        assert_eq!(
            err,
            InputError::MalformedGenotype { role: Role::Parent, marker: "AMEL".to_string(), found: 1 }
        );
    }
}
