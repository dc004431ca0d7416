use anyhow::{Context, Result};

use duo::{DuoCase, PaternityIndex};

#[macro_use]
extern crate log;

/// Main entrypoint: load the population table and both genotype profiles,
/// assemble the duo case, and evaluate it.
pub fn run(cli: &parser::Cli) -> Result<PaternityIndex> {
    // ----------------------------- Load population frequencies.
    info!("Loading population frequency table...");
    let population = kinship_io::read::population_from_json(&cli.population)?;

    // ----------------------------- Load genotype profiles.
    info!("Loading genotype profiles...");
    let parent = kinship_io::read::profile_from_json(&cli.parent)?;
    let child  = kinship_io::read::profile_from_json(&cli.child)?;

    // ----------------------------- Assemble and evaluate the duo.
    let case = DuoCase::new(&parent, &child, &population)
        .context("While assembling the paternity case")?;
    debug!("Shared markers: {:?}", case.markers());

    let outcome = case
        .paternity_index()
        .context("While evaluating the paternity index")?;

    if let PaternityIndex::Inconsistent(markers) = &outcome {
        warn!("Genetic inconsistencies detected at: {}", markers.join(", "));
    }
    Ok(outcome)
}
