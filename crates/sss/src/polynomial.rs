//! Secret polynomials.

use crate::config::validate_secret;
use crate::{Error, Result};
use num_bigint_dig::BigUint;
use num_traits::Zero;
use rand::{CryptoRng, RngCore};
use sss_math::{sample_uniform_vec, zq::FieldPrime};
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// A polynomial of degree `k - 1` over Z/pZ whose constant term is the secret.
///
/// Coefficients are stored highest degree first, so `coefficients()[k - 1]` is
/// the constant term. The coefficients are erased when the polynomial is
/// dropped and never appear in its `Debug` output.
#[derive(Clone, PartialEq, Eq)]
pub struct Polynomial {
    coefficients: Vec<BigUint>,
}

impl Zeroize for Polynomial {
    fn zeroize(&mut self) {
        self.coefficients.zeroize();
    }
}

impl ZeroizeOnDrop for Polynomial {}

impl Drop for Polynomial {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl fmt::Debug for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Polynomial")
            .field("degree", &self.degree())
            .finish_non_exhaustive()
    }
}

impl Polynomial {
    /// Create a polynomial from explicit coefficients, highest degree first.
    ///
    /// Returns an error if there are no coefficients or if one is not reduced
    /// modulo the prime.
    pub fn from_coefficients(coefficients: Vec<BigUint>, prime: &FieldPrime) -> Result<Self> {
        if coefficients.is_empty() {
            return Err(Error::invalid_parameter(
                "A polynomial needs at least one coefficient",
            ));
        }
        if let Some(c) = coefficients.iter().find(|c| !prime.contains(c)) {
            return Err(Error::invalid_parameter(format!(
                "Coefficient {} is not reduced modulo {}",
                c, prime
            )));
        }
        Ok(Self { coefficients })
    }

    /// Number of coefficients, i.e. the reconstruction threshold `k`.
    pub fn threshold(&self) -> usize {
        self.coefficients.len()
    }

    /// Degree of the polynomial, `k - 1`.
    pub fn degree(&self) -> usize {
        self.coefficients.len().saturating_sub(1)
    }

    /// The coefficients, highest degree first.
    pub fn coefficients(&self) -> &[BigUint] {
        &self.coefficients
    }

    /// The constant term `P(0)`, which holds the secret.
    ///
    /// Panics if the polynomial has been zeroized.
    pub fn constant_term(&self) -> &BigUint {
        &self.coefficients[self.coefficients.len() - 1]
    }

    /// Evaluate the polynomial at `x` modulo p using Horner's rule.
    pub fn evaluate(&self, x: &BigUint, prime: &FieldPrime) -> BigUint {
        let x = prime.reduce(x);
        self.coefficients.iter().fold(BigUint::zero(), |acc, c| {
            prime.add(&prime.mul(&acc, &x), c)
        })
    }
}

/// Build a random polynomial of degree `k - 1` hiding `secret`.
///
/// The `k - 1` non-constant coefficients are drawn uniformly from the field and
/// the secret is placed as the constant term. With `k == 1` the polynomial is
/// the constant secret: every share equals the secret, which offers no secrecy.
///
/// Fails with [`Error::InvalidParameter`] on `k == 0` or a secret outside the
/// field, and with [`Error::Generation`] when `rng` cannot deliver entropy.
pub fn build_polynomial<R: RngCore + CryptoRng + ?Sized>(
    secret: &BigUint,
    k: usize,
    prime: &FieldPrime,
    rng: &mut R,
) -> Result<Polynomial> {
    if k == 0 {
        return Err(Error::invalid_parameter("Threshold must be at least 1"));
    }
    validate_secret(secret, prime)?;

    let mut coefficients = sample_uniform_vec(prime.modulus(), k - 1, rng)?;
    coefficients.push(secret.clone());
    Ok(Polynomial { coefficients })
}
