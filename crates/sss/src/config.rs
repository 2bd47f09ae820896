/// Configuration and validation for secret sharing.
///
/// These checks run eagerly, before any randomness is consumed.
use crate::{Error, Result};
use num_bigint_dig::BigUint;
use num_traits::Zero;
use sss_math::zq::FieldPrime;
use std::collections::HashSet;

/// Validates the threshold `k` against the participant count `n`.
///
/// A threshold of one is accepted: every share then equals the secret. Callers
/// that need secrecy must reject `k < 2` themselves.
pub fn validate_threshold_config(share_count: usize, threshold: usize) -> Result<()> {
    if threshold == 0 {
        return Err(Error::invalid_parameter("Threshold must be at least 1"));
    }
    if share_count < threshold {
        return Err(Error::threshold_too_large(threshold, share_count));
    }
    Ok(())
}

/// Validates that the secret is an element of the field.
pub fn validate_secret(secret: &BigUint, prime: &FieldPrime) -> Result<()> {
    if !prime.contains(secret) {
        return Err(Error::secret_out_of_range(prime.modulus()));
    }
    Ok(())
}

/// Validates participant identifiers for share evaluation.
///
/// Identifiers must be nonzero and pairwise distinct modulo p: two identifiers
/// congruent modulo p would receive the same share.
pub fn validate_identifiers(xs: &[BigUint], prime: &FieldPrime) -> Result<()> {
    let mut seen = HashSet::with_capacity(xs.len());
    for x in xs {
        let reduced = prime.reduce(x);
        if reduced.is_zero() || !seen.insert(reduced) {
            return Err(Error::DuplicateOrZeroIdentifier(x.clone()));
        }
    }
    Ok(())
}

/// Validates the x-coordinates of a share set handed to reconstruction.
///
/// Only literal duplicates and identifiers congruent to zero are rejected here;
/// distinct identifiers that collide modulo p surface later as
/// [`Error::NonInvertibleElement`].
pub fn validate_share_identifiers(xs: &[BigUint], prime: &FieldPrime) -> Result<()> {
    let mut seen = HashSet::with_capacity(xs.len());
    for x in xs {
        if prime.reduce(x).is_zero() || !seen.insert(x) {
            return Err(Error::DuplicateOrZeroIdentifier(x.clone()));
        }
    }
    Ok(())
}
