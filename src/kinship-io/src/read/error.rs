use thiserror::Error;

use genotype::{Allele, ParseAlleleError};

#[derive(Error, Debug)]
pub enum ReadError {
    #[error("Failed to open input file")]
    OpenFile(#[source] std::io::Error),

    #[error("Input file is not valid JSON, or does not match the expected shape")]
    ParseJson(#[source] serde_json::Error),

    #[error("Invalid allele designation at marker '{marker}'")]
    InvalidAllele {
        marker: String,
        #[source]
        source: ParseAlleleError,
    },

    #[error("Frequency {frequency} for allele '{allele}' at marker '{marker}' does not lie within (0, 1]")]
    InvalidFrequency { marker: String, allele: Allele, frequency: f64 },
}
