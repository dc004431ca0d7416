mod error;
pub use error::ReadError;

use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use log::debug;

use genotype::{Allele, PopulationTable, RawProfile};

/// On-disk shape of a population frequency file:
/// `{"CSF1PO": {"13": 0.2, "9.3": 0.1, ...}, ...}`
/// JSON object keys are always strings; allele designations are re-parsed
/// into their canonical representation on load.
type PopulationFile = HashMap<String, HashMap<String, f64>>;

/// On-disk shape of a genotype profile file:
/// `{"AMEL": ["X", "Y"], "CSF1PO": [13, 14], ...}`
/// Allele values may be spelled as JSON numbers or strings.
type ProfileFile = HashMap<String, Vec<Allele>>;

/// Load a population frequency table from a JSON file.
///
/// Published tables may omit rare alleles, so no completeness check is
/// performed here; frequencies must however be probabilities within (0, 1].
pub fn population_from_json(path: &Path) -> Result<PopulationTable> {
    let loc_msg = || format!("While loading population frequencies from '{}'", path.display());

    let file = File::open(path).map_err(ReadError::OpenFile).with_context(loc_msg)?;
    let raw: PopulationFile = serde_json::from_reader(BufReader::new(file))
        .map_err(ReadError::ParseJson)
        .with_context(loc_msg)?;

    let mut table = PopulationTable::new();
    for (marker, frequencies) in raw {
        for (token, frequency) in frequencies {
            let allele = token
                .parse::<Allele>()
                .map_err(|source| ReadError::InvalidAllele { marker: marker.clone(), source })
                .with_context(loc_msg)?;
            if !frequency.is_finite() || frequency <= 0.0 || frequency > 1.0 {
                return Err(ReadError::InvalidFrequency { marker, allele, frequency })
                    .with_context(loc_msg);
            }
            table.insert(marker.clone(), allele, frequency);
        }
    }

    debug!("Loaded allele frequencies for {} marker(s) from '{}'", table.len(), path.display());
    Ok(table)
}

/// Load a raw, unvalidated STR profile from a JSON file.
///
/// Allele collections are kept at whatever length the file reports:
/// diploid-pair validation belongs to the analysis layer, which can point
/// at the offending marker.
pub fn profile_from_json(path: &Path) -> Result<RawProfile> {
    let loc_msg = || format!("While loading genotype profile from '{}'", path.display());

    let file = File::open(path).map_err(ReadError::OpenFile).with_context(loc_msg)?;
    let raw: ProfileFile = serde_json::from_reader(BufReader::new(file))
        .map_err(ReadError::ParseJson)
        .with_context(loc_msg)?;

    debug!("Loaded {} marker(s) from '{}'", raw.len(), path.display());
    Ok(raw.into_iter().collect())
}
