/// Traits for secret sharing operations.
///
/// This module defines the core traits for threshold secret sharing operations.
use crate::share::Share;
use crate::Result;
use num_bigint_dig::BigUint;
use rand::{CryptoRng, RngCore};

/// Trait for splitting a secret into shares and recovering it.
pub trait SecretSharer {
    /// Split `secret` into one share per participant.
    fn split<R: RngCore + CryptoRng + ?Sized>(
        &self,
        secret: &BigUint,
        rng: &mut R,
    ) -> Result<Vec<Share>>;

    /// Recover the secret from at least a threshold of shares.
    fn recover(&self, shares: &[Share]) -> Result<BigUint>;
}
