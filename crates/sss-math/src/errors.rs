use num_bigint_dig::BigUint;
use thiserror::Error;

/// The Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;

/// Enum encapsulating all the possible errors from this library.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// Indicates that a modulus is not a prime of at least two.
    #[error("Invalid modulus: {0} is not a prime")]
    InvalidModulus(BigUint),

    /// Indicates that a requested prime bit length is too small.
    #[error("Invalid bit length: {0} is below the minimum of {1} bits")]
    InvalidBitLength(usize, usize),

    /// Indicates that a sampling bound is zero.
    #[error("Sampling modulus must be nonzero")]
    ZeroModulus,

    /// Indicates that the random source failed to deliver entropy.
    #[error("Random generation failed: {0}")]
    Generation(String),

    /// Indicates that an element has no inverse modulo the prime.
    #[error("{0} is not invertible modulo {1}")]
    NotInvertible(BigUint, BigUint),
}
