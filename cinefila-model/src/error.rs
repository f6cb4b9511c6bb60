use std::fmt::{self, Display};

/// Errors produced by model constructors and validation routines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    InvalidSlug(String),
    InvalidOption {
        dimension: &'static str,
        value: String,
    },
}

impl Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::InvalidSlug(raw) => write!(f, "invalid slug: {raw}"),
            ModelError::InvalidOption { dimension, value } => {
                write!(f, "invalid {dimension} option: {value}")
            }
        }
    }
}

impl std::error::Error for ModelError {}

pub type Result<T> = std::result::Result<T, ModelError>;
