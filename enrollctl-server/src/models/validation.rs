//! Validation error types

use std::fmt;

/// Validation error for request payloads
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// One or more required fields were absent, null or zero-valued
    Required { fields: &'static [&'static str] },

    /// Field was supplied but is blank
    Empty { field: &'static str },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Required { fields } => {
                let verb = if fields.len() == 1 { "is" } else { "are" };
                write!(f, "{} {} required", fields.join(" and "), verb)
            }
            Self::Empty { field } => write!(f, "{} cannot be empty", field),
        }
    }
}

impl std::error::Error for ValidationError {}
