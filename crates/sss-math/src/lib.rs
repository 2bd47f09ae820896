#![crate_name = "sss_math"]
#![crate_type = "lib"]
#![warn(missing_docs, unused_imports)]

//! Prime field arithmetic and sampling for the sss library.
//!
//! Field elements are plain [`BigUint`](num_bigint_dig::BigUint) values; every
//! operation goes through a [`zq::FieldPrime`] which keeps them reduced in `[0, p)`.

mod errors;
pub mod sampling;
pub mod zq;

pub use errors::{Error, Result};
pub use sampling::{sample_uniform_mod, sample_uniform_vec};
