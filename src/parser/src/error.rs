use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParserError {
    #[error("'{}' does not exist, or is not a regular file", .0.display())]
    MissingInputFile(PathBuf),
}
