pub mod allele;
pub use allele::Allele;
pub use allele::ParseAlleleError;

pub mod genotype;
pub use genotype::Genotype;

pub mod profile;
pub use profile::{Profile, RawProfile};

pub mod population;
pub use population::{PopulationError, PopulationTable};
