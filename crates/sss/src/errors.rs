//! Error types for secret sharing operations.

use num_bigint_dig::BigUint;
use thiserror::Error;

/// The Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;

/// Enum encapsulating all the possible errors from this library.
///
/// Every error is local to the call that produced it; nothing is retried.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// Prime or random generation failed.
    #[error("Generation failed: {0}")]
    Generation(String),

    /// A parameter was rejected before any sampling took place.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Participant identifiers are not pairwise distinct, or one is zero.
    #[error("Duplicate or zero identifier: {0}")]
    DuplicateOrZeroIdentifier(BigUint),

    /// Fewer shares than the threshold were supplied.
    #[error("Insufficient shares: {provided} provided, {required} required")]
    InsufficientShares {
        /// Number of shares supplied.
        provided: usize,
        /// Number of shares required.
        required: usize,
    },

    /// A modular inverse needed for interpolation does not exist.
    #[error("Non-invertible element: {0} has no inverse modulo {1}")]
    NonInvertibleElement(BigUint, BigUint),
}

impl From<sss_math::Error> for Error {
    fn from(e: sss_math::Error) -> Self {
        match e {
            sss_math::Error::Generation(msg) => Self::Generation(msg),
            sss_math::Error::NotInvertible(a, p) => Self::NonInvertibleElement(a, p),
            e @ (sss_math::Error::InvalidModulus(_)
            | sss_math::Error::InvalidBitLength(..)
            | sss_math::Error::ZeroModulus) => {
                Self::InvalidParameter(e.to_string())
            }
        }
    }
}

impl Error {
    /// Create an invalid parameter error.
    pub fn invalid_parameter<S: Into<String>>(msg: S) -> Self {
        Self::InvalidParameter(msg.into())
    }

    /// Create an insufficient shares error.
    pub fn insufficient_shares(provided: usize, required: usize) -> Self {
        Self::InsufficientShares { provided, required }
    }

    /// Create a threshold too large error.
    pub fn threshold_too_large(threshold: usize, share_count: usize) -> Self {
        Self::invalid_parameter(format!(
            "Threshold {} exceeds the number of participants {}",
            threshold, share_count
        ))
    }

    /// Create a secret out of range error.
    pub fn secret_out_of_range(modulus: &BigUint) -> Self {
        Self::invalid_parameter(format!("Secret must be smaller than the prime {}", modulus))
    }

    /// Create a length mismatch error.
    pub fn length_mismatch(expected: usize, found: usize) -> Self {
        Self::invalid_parameter(format!(
            "Length mismatch: expected {} values, found {}",
            expected, found
        ))
    }
}
