use thiserror::Error;

use crate::allele::Allele;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PopulationError {
    #[error("Marker '{0}' is absent from the population frequency table. Ensure the table covers every marker of the genotyping kit")]
    MissingMarker(String),

    #[error("No population frequency for allele '{allele}' at marker '{marker}'. The supplied table does not cover this profile")]
    MissingFrequency { marker: String, allele: Allele },
}
