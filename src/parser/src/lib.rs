use std::{
    ffi::OsStr,
    path::{Path, PathBuf},
};

use anyhow::Result;
use clap::Parser;

mod error;
pub use error::ParserError;

/// kinship-rs: STR-based paternity index estimation for parent-child duos.
#[derive(Parser, Debug)]
#[clap(name="kinship-rs", version, about, long_about = None)]
pub struct Cli {
    /// Set the verbosity level (-v -vv -vvv)
    ///
    /// Set the verbosity level of this program. Multiple levels allowed {n}
    ///
    /// -v: Info  |  -vv: Debug  | -vvv: Trace {n}
    ///
    /// Note that the program will still output warnings by default, even when this flag is off.
    /// Use the --quiet/-q flag to disable them.
    #[clap(short='v', long, parse(from_occurrences))]
    pub verbose: u8,

    /// Disable warnings.
    ///
    /// By default, warnings are emitted and redirected to the console, even when verbose mode is off.
    /// Use this argument to disable this. Only errors will be displayed.
    #[clap(short='q', long)]
    pub quiet: bool,

    /// Genotype profile of the alleged parent (JSON).
    ///
    /// Expected shape: one object mapping marker names to two-allele arrays, e.g.{n}
    ///     {"AMEL": ["X", "Y"], "CSF1PO": [13, 14], "TH01": [6, 9.3]}
    #[clap(short, long, parse(try_from_os_str=valid_input_file))]
    pub parent: PathBuf,

    /// Genotype profile of the child (JSON). Same shape as --parent.
    #[clap(short, long, parse(try_from_os_str=valid_input_file))]
    pub child: PathBuf,

    /// Population allele-frequency table (JSON).
    ///
    /// Expected shape: one object mapping marker names to allele=>frequency objects, e.g.{n}
    ///     {"CSF1PO": {"13": 0.2, "14": 0.3}, "TH01": {"9.3": 0.15}}{n}
    ///
    /// Frequencies are probabilities within (0, 1] and need not sum to one,
    /// as published tables may omit rare alleles.
    #[clap(short='P', long, parse(try_from_os_str=valid_input_file))]
    pub population: PathBuf,
}

/// Ensure a user-provided input path points to an existing regular file.
fn valid_input_file(s: &OsStr) -> Result<PathBuf> {
    let path = Path::new(s);
    if !path.is_file() {
        return Err(ParserError::MissingInputFile(path.to_path_buf()).into());
    }
    Ok(PathBuf::from(s))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mock_args(dir: &Path) -> Result<[String; 7]> {
        let mut paths = Vec::new();
        for name in ["parent.json", "child.json", "population.json"] {
            let path = dir.join(name);
            std::fs::write(&path, "{}")?;
            paths.push(path.to_str().expect("non UTF-8 tempdir").to_string());
        }
        Ok([
            "kinship-rs".to_string(),
            "--parent".to_string(),     paths[0].clone(),
            "--child".to_string(),      paths[1].clone(),
            "--population".to_string(), paths[2].clone(),
        ])
    }

    #[test]
    fn parse_valid_arguments() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let cli = Cli::try_parse_from(mock_args(dir.path())?)?;

        assert_eq!(cli.parent, dir.path().join("parent.json"));
        assert_eq!(cli.child, dir.path().join("child.json"));
        assert_eq!(cli.population, dir.path().join("population.json"));
        assert_eq!(cli.verbose, 0);
        assert!(!cli.quiet);
        Ok(())
    }

    #[test]
    fn verbosity_accumulates() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let mut args = mock_args(dir.path())?.to_vec();
        args.push("-vvv".to_string());

        let cli = Cli::try_parse_from(args)?;
        assert_eq!(cli.verbose, 3);
        Ok(())
    }

    #[test]
    fn missing_input_file_is_rejected() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let mut args = mock_args(dir.path())?;
        args[2] = dir.path().join("nonexistent.json").to_str().unwrap().to_string();

        assert!(Cli::try_parse_from(args).is_err());
        Ok(())
    }

    #[test]
    fn input_files_are_required() {
        assert!(Cli::try_parse_from(["kinship-rs"]).is_err());
    }
}
