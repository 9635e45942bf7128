use std::num::ParseIntError;

use thiserror::Error;

/// Everything that can go wrong while converting a codepoint designator.
#[derive(Error, Debug, Eq, PartialEq)]
pub enum ConvertError {
    #[error("specified codepoint was not valid")]
    InvalidCodepoint,
    #[error("an invalid width was specified")]
    InvalidWidth,
    #[error(transparent)]
    Parse(#[from] ParseIntError),
}
