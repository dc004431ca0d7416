use thiserror::Error;

use super::Role;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputError {
    #[error("Parent and child profiles were not typed with the same marker panel (markers unique to one profile: {}). Both individuals must be genotyped with compatible kits", .0.join(", "))]
    MismatchedPanels(Vec<String>),

    #[error("Marker '{marker}' of the {role} profile reports {found} allele(s) where exactly 2 were expected. STR genotypes are diploid pairs")]
    MalformedGenotype { role: Role, marker: String, found: usize },
}
