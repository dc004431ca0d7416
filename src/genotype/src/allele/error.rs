use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseAlleleError {
    #[error("'{0}' is not a valid STR allele. Expected a repeat count (e.g. '12', '9.3') or a sex-typing letter (e.g. 'X')")]
    InvalidToken(String),

    #[error("'{0}' cannot be expressed as an STR repeat count")]
    InvalidRepeat(f64),
}
