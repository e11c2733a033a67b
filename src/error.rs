use std::error::Error;
use std::fmt::{Display, Formatter};

/// Possible errors that arise due to issues with the input points or solver configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum MstError {
    WrongDimension(String),
    CoordinateOutOfRange(String),
    SeedOutOfRange(String),
    CostOverflow(String),
}

impl Error for MstError {}

impl Display for MstError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let message = match self {
            MstError::WrongDimension(msg) => format!("Input rows have wrong dimensions: {msg}"),
            MstError::CoordinateOutOfRange(msg) => format!("Coordinate out of range: {msg}"),
            MstError::SeedOutOfRange(msg) => format!("Seed out of range: {msg}"),
            MstError::CostOverflow(msg) => format!("Cost overflow: {msg}"),
        };
        write!(f, "{message}")
    }
}
