//! Lagrange interpolation at zero.
//!
//! Given `k` points with distinct x-coordinates, the basis polynomial
//! `L_i(X) = Π_{j≠i} (X − x_j) / (x_i − x_j)` equals 1 at `x_i` and 0 at every
//! other `x_j`. Evaluated at `X = 0` it becomes
//!
//! ```text
//! α_i = Π_{j≠i} x_j · (x_j − x_i)^{-1}  (mod p)
//! ```
//!
//! and `Σ α_i · y_i ≡ P(0) (mod p)` recovers the secret.

use crate::config::validate_share_identifiers;
use crate::share::Share;
use crate::{Error, Result};
use itertools::Itertools;
use num_bigint_dig::BigUint;
use num_traits::{One, Zero};
use rayon::prelude::*;
use sss_math::zq::FieldPrime;
use tracing::debug;

/// Compute the Lagrange coefficients at zero for the x-coordinates `xs`.
///
/// Every coefficient is computed independently, in parallel. Fails with
/// [`Error::DuplicateOrZeroIdentifier`] on a repeated or zero coordinate and
/// with [`Error::NonInvertibleElement`] when two coordinates coincide modulo p.
pub fn compute_lagrange_coefficients(xs: &[BigUint], prime: &FieldPrime) -> Result<Vec<BigUint>> {
    if xs.is_empty() {
        return Err(Error::insufficient_shares(0, 1));
    }
    validate_share_identifiers(xs, prime)?;

    (0..xs.len())
        .into_par_iter()
        .map(|i| {
            let x_i = &xs[i];
            xs.iter()
                .enumerate()
                .filter(|(j, _)| *j != i)
                .try_fold(BigUint::one(), |alpha, (_, x_j)| -> Result<BigUint> {
                    let inv = prime.try_inv(&prime.sub(x_j, x_i))?;
                    Ok(prime.mul(&prime.mul(&alpha, x_j), &inv))
                })
        })
        .collect()
}

/// Combine Lagrange coefficients with share values: `Σ α_i · y_i mod p`.
///
/// The sum is an order-independent parallel reduction.
pub fn reconstruct(alphas: &[BigUint], ys: &[BigUint], prime: &FieldPrime) -> Result<BigUint> {
    if alphas.is_empty() {
        return Err(Error::insufficient_shares(0, 1));
    }
    if alphas.len() != ys.len() {
        return Err(Error::length_mismatch(alphas.len(), ys.len()));
    }

    Ok(alphas
        .par_iter()
        .zip(ys.par_iter())
        .map(|(alpha, y)| prime.mul(alpha, y))
        .reduce(BigUint::zero, |acc, term| prime.add(&acc, &term)))
}

/// Reconstruct the secret from a share set with threshold `k`.
///
/// The first `k` shares are used; supplying fewer is rejected with
/// [`Error::InsufficientShares`] and no partial result is computed.
pub fn reconstruct_from_shares(shares: &[Share], k: usize, prime: &FieldPrime) -> Result<BigUint> {
    if k == 0 {
        return Err(Error::invalid_parameter("Threshold must be at least 1"));
    }
    if shares.len() < k {
        return Err(Error::insufficient_shares(shares.len(), k));
    }

    let (xs, ys): (Vec<BigUint>, Vec<BigUint>) = shares[..k]
        .iter()
        .map(|share| (share.x.clone(), share.y.clone()))
        .unzip();
    debug!(
        threshold = k,
        identifiers = %render_identifiers(&xs),
        "reconstructing secret"
    );

    let alphas = compute_lagrange_coefficients(&xs, prime)?;
    reconstruct(&alphas, &ys, prime)
}

/// Render identifiers as a decimal list for logging.
fn render_identifiers(xs: &[BigUint]) -> String {
    format!("[{}]", xs.iter().join(", "))
}
