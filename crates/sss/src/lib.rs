#![crate_name = "sss"]
#![crate_type = "lib"]
#![warn(missing_docs, unused_imports)]

//! Shamir secret sharing over prime fields.
//!
//! A secret `S` in `Z/pZ` is hidden as the constant term of a random polynomial
//! of degree `k - 1`. Each of the `n` participants receives the evaluation of
//! that polynomial at its public identifier. Any `k` shares recover `S` by
//! Lagrange interpolation at zero; fewer reveal nothing about it.
//!
//! ```
//! use rand::rngs::OsRng;
//! use sss::{SecretSharer, ShamirSecretSharing, SharingParametersBuilder};
//!
//! # fn main() -> Result<(), sss::Error> {
//! let params = SharingParametersBuilder::new()
//!     .set_threshold(3)
//!     .set_share_count(5)
//!     .set_prime_bits(128)
//!     .build_arc(&mut OsRng)?;
//! let sss = ShamirSecretSharing::new(params);
//!
//! let secret = sss.generate_secret(&mut OsRng)?;
//! let shares = sss.split(&secret, &mut OsRng)?;
//! assert_eq!(sss.recover(&shares[2..])?, *secret);
//! # Ok(())
//! # }
//! ```

pub mod config;
mod errors;
pub mod identifiers;
pub mod lagrange;
pub mod parameters;
pub mod polynomial;
pub mod shamir;
pub mod share;
mod traits;

pub use errors::{Error, Result};
pub use identifiers::ParticipantIds;
pub use lagrange::{compute_lagrange_coefficients, reconstruct, reconstruct_from_shares};
pub use parameters::{generate_prime, SharingParameters, SharingParametersBuilder, DEFAULT_PRIME_BITS};
pub use polynomial::{build_polynomial, Polynomial};
pub use shamir::ShamirSecretSharing;
pub use share::{compute_all_shares, compute_share, Share};
pub use sss_math::sample_uniform_mod;
pub use sss_math::zq::FieldPrime;
pub use traits::SecretSharer;
