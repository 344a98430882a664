//! Error types for the AQ learner.

use core::fmt;

/// # Overview
///
/// Errors that can occur when building or using an AQ learner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    InvalidBeamWidth,
    NoDomains,
    EmptyDomain { attribute: usize },
    UnknownValue { attribute: usize },
    ArityMismatch { expected: usize, got: usize },
    EmptyDataset
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidBeamWidth => write!(f, "beam width must be at least 1"),
            Self::NoDomains => write!(f, "at least one attribute domain is required"),
            Self::EmptyDomain {
                attribute
            } => {
                write!(f, "domain for attribute {attribute} is empty")
            }
            Self::UnknownValue {
                attribute
            } => {
                write!(f, "value not in the domain of attribute {attribute}")
            }
            Self::ArityMismatch {
                expected,
                got
            } => {
                write!(f, "arity mismatch: expected {expected} attributes, got {got}")
            }
            Self::EmptyDataset => write!(f, "training set cannot be empty")
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// # Overview
///
/// Result type for AQ learner operations.
pub type Result<T> = core::result::Result<T, Error>;
