/// Shamir Secret Sharing over a prime field.
///
/// This module ties the parameters, the secret polynomial, share evaluation and
/// Lagrange reconstruction together behind [`SecretSharer`].
use crate::lagrange::reconstruct_from_shares;
use crate::parameters::SharingParameters;
use crate::polynomial::{build_polynomial, Polynomial};
use crate::share::{compute_all_shares, Share};
use crate::traits::SecretSharer;
use crate::{Error, Result};
use num_bigint_dig::BigUint;
use rand::{CryptoRng, RngCore};
use std::sync::Arc;
use tracing::debug;
use zeroize::Zeroizing;

/// Shamir Secret Sharing for a fixed set of parameters.
#[derive(Debug, Clone)]
pub struct ShamirSecretSharing {
    params: Arc<SharingParameters>,
}

impl ShamirSecretSharing {
    /// Create a new Shamir Secret Sharing instance.
    pub fn new(params: Arc<SharingParameters>) -> Self {
        Self { params }
    }

    /// Returns the sharing parameters.
    pub fn params(&self) -> &Arc<SharingParameters> {
        &self.params
    }

    /// Draw a uniform secret from the field.
    pub fn generate_secret<R: RngCore + CryptoRng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<Zeroizing<BigUint>> {
        Ok(Zeroizing::new(self.params.prime().random(rng)?))
    }

    /// Evaluate an existing polynomial at every participant identifier.
    ///
    /// The polynomial must have exactly `threshold` coefficients.
    pub fn split_polynomial(&self, polynomial: &Polynomial) -> Result<Vec<Share>> {
        if polynomial.threshold() != self.params.threshold() {
            return Err(Error::length_mismatch(
                self.params.threshold(),
                polynomial.threshold(),
            ));
        }
        Ok(compute_all_shares(
            self.params.identifiers(),
            polynomial,
            self.params.prime(),
        ))
    }
}

impl SecretSharer for ShamirSecretSharing {
    fn split<R: RngCore + CryptoRng + ?Sized>(
        &self,
        secret: &BigUint,
        rng: &mut R,
    ) -> Result<Vec<Share>> {
        let polynomial = build_polynomial(secret, self.params.threshold(), self.params.prime(), rng)?;
        let shares = self.split_polynomial(&polynomial)?;
        debug!(
            threshold = self.params.threshold(),
            shares = shares.len(),
            "split secret"
        );
        Ok(shares)
    }

    fn recover(&self, shares: &[Share]) -> Result<BigUint> {
        reconstruct_from_shares(shares, self.params.threshold(), self.params.prime())
    }
}
