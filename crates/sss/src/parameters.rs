//! Create parameters for a secret sharing session

use crate::config::validate_threshold_config;
use crate::identifiers::ParticipantIds;
use crate::{Error, Result};
use num_bigint_dig::BigUint;
use rand::{CryptoRng, RngCore};
use sss_math::zq::FieldPrime;
use std::sync::Arc;
use tracing::debug;

/// Bit length of the field prime when none is specified.
pub const DEFAULT_PRIME_BITS: usize = 256;

/// Generate the prime `p` defining the field of a sharing session.
///
/// See [`sss_math::zq::primes::generate_prime`] for the search procedure and its
/// bias. Fails with [`Error::InvalidParameter`] on a bit length below two and
/// with [`Error::Generation`] when `rng` cannot deliver entropy.
pub fn generate_prime<R: RngCore + CryptoRng + ?Sized>(
    bit_strength: usize,
    rng: &mut R,
) -> Result<FieldPrime> {
    Ok(sss_math::zq::primes::generate_prime(bit_strength, rng)?)
}

/// Parameters of a sharing session: threshold, participants and field.
///
/// The prime must be published together with the shares; reconstruction is
/// impossible without it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharingParameters {
    threshold: usize,
    share_count: usize,
    prime: FieldPrime,
    identifiers: ParticipantIds,
}

impl SharingParameters {
    /// Returns the threshold `k`.
    pub const fn threshold(&self) -> usize {
        self.threshold
    }

    /// Returns the number of participants `n`.
    pub const fn share_count(&self) -> usize {
        self.share_count
    }

    /// Returns the field prime.
    pub fn prime(&self) -> &FieldPrime {
        &self.prime
    }

    /// Returns the participant identifiers.
    pub fn identifiers(&self) -> &ParticipantIds {
        &self.identifiers
    }
}

/// Builder for the parameters of a sharing session.
#[derive(Debug)]
pub struct SharingParametersBuilder {
    threshold: usize,
    share_count: usize,
    prime_bits: usize,
    prime: Option<FieldPrime>,
    identifiers: Option<Vec<BigUint>>,
}

impl SharingParametersBuilder {
    /// Creates a new instance of the builder
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self {
            threshold: Default::default(),
            share_count: Default::default(),
            prime_bits: DEFAULT_PRIME_BITS,
            prime: None,
            identifiers: None,
        }
    }

    /// Sets the threshold `k`, the number of shares needed to reconstruct.
    pub fn set_threshold(&mut self, threshold: usize) -> &mut Self {
        self.threshold = threshold;
        self
    }

    /// Sets the number of participants `n`.
    pub fn set_share_count(&mut self, share_count: usize) -> &mut Self {
        self.share_count = share_count;
        self
    }

    /// Sets the bit length of the prime generated by [`Self::build`].
    /// Ignored when a prime is set with [`Self::set_prime`].
    pub fn set_prime_bits(&mut self, bits: usize) -> &mut Self {
        self.prime_bits = bits;
        self
    }

    /// Sets the field prime instead of generating one.
    pub fn set_prime(&mut self, prime: FieldPrime) -> &mut Self {
        self.prime = Some(prime);
        self
    }

    /// Sets the participant identifiers. Defaults to `1, 2, ..., n`.
    pub fn set_identifiers(&mut self, identifiers: &[BigUint]) -> &mut Self {
        self.identifiers = Some(identifiers.to_vec());
        self
    }

    /// Build the parameters, generating the prime with `rng` if needed.
    ///
    /// The threshold, participant count and identifier count are checked
    /// before any randomness is drawn.
    pub fn build<R: RngCore + CryptoRng + ?Sized>(&self, rng: &mut R) -> Result<SharingParameters> {
        validate_threshold_config(self.share_count, self.threshold)?;
        if let Some(identifiers) = &self.identifiers {
            if identifiers.len() != self.share_count {
                return Err(Error::length_mismatch(self.share_count, identifiers.len()));
            }
        }

        let prime = match &self.prime {
            Some(prime) => prime.clone(),
            None => generate_prime(self.prime_bits, rng)?,
        };
        let identifiers = match &self.identifiers {
            Some(identifiers) => ParticipantIds::new(identifiers.clone(), &prime)?,
            None => ParticipantIds::sequential(self.share_count, &prime)?,
        };

        debug!(
            threshold = self.threshold,
            share_count = self.share_count,
            prime_bits = prime.bits(),
            "built sharing parameters"
        );

        Ok(SharingParameters {
            threshold: self.threshold,
            share_count: self.share_count,
            prime,
            identifiers,
        })
    }

    /// Build the parameters inside an `Arc`.
    pub fn build_arc<R: RngCore + CryptoRng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<Arc<SharingParameters>> {
        self.build(rng).map(Arc::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn default_prime_and_identifiers() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let params = SharingParametersBuilder::new()
            .set_threshold(3)
            .set_share_count(5)
            .build(&mut rng)?;

        assert_eq!(params.threshold(), 3);
        assert_eq!(params.share_count(), 5);
        assert!(params.prime().bits() > DEFAULT_PRIME_BITS / 2);
        assert!(params.prime().bits() <= DEFAULT_PRIME_BITS + 1);
        assert_eq!(
            params.identifiers().as_slice(),
            &[1u32, 2, 3, 4, 5].map(BigUint::from)[..]
        );
        Ok(())
    }

    #[test]
    fn explicit_prime_and_identifiers() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let prime = FieldPrime::from_u64(17)?;
        let ids = [2u32, 4, 6, 8].map(BigUint::from);
        let params = SharingParametersBuilder::new()
            .set_threshold(3)
            .set_share_count(4)
            .set_prime(prime.clone())
            .set_identifiers(&ids)
            .build_arc(&mut rng)?;

        assert_eq!(params.prime(), &prime);
        assert_eq!(params.identifiers().as_slice(), &ids[..]);
        Ok(())
    }

    #[test]
    fn invalid_parameters() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);

        // threshold = 0
        assert!(matches!(
            SharingParametersBuilder::new()
                .set_share_count(3)
                .build(&mut rng),
            Err(Error::InvalidParameter(_))
        ));

        // n < k
        assert_eq!(
            SharingParametersBuilder::new()
                .set_threshold(4)
                .set_share_count(3)
                .build(&mut rng),
            Err(Error::threshold_too_large(4, 3))
        );

        // prime too small
        assert!(matches!(
            SharingParametersBuilder::new()
                .set_threshold(1)
                .set_share_count(1)
                .set_prime_bits(1)
                .build(&mut rng),
            Err(Error::InvalidParameter(_))
        ));

        // identifier count mismatch
        assert_eq!(
            SharingParametersBuilder::new()
                .set_threshold(2)
                .set_share_count(3)
                .set_identifiers(&[BigUint::from(1u32)])
                .build(&mut rng),
            Err(Error::length_mismatch(3, 1))
        );

        // identifiers collide modulo p
        assert_eq!(
            SharingParametersBuilder::new()
                .set_threshold(2)
                .set_share_count(2)
                .set_prime(FieldPrime::from_u64(17).unwrap())
                .set_identifiers(&[BigUint::from(3u32), BigUint::from(20u32)])
                .build(&mut rng),
            Err(Error::DuplicateOrZeroIdentifier(BigUint::from(20u32)))
        );

        // more participants than nonzero field elements
        assert!(matches!(
            SharingParametersBuilder::new()
                .set_threshold(2)
                .set_share_count(5)
                .set_prime(FieldPrime::from_u64(5).unwrap())
                .build(&mut rng),
            Err(Error::DuplicateOrZeroIdentifier(_))
        ));
    }

    #[test]
    fn generate_prime_maps_errors() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        assert!(generate_prime(64, &mut rng).is_ok());
        assert!(matches!(
            generate_prime(0, &mut rng),
            Err(Error::InvalidParameter(_))
        ));
    }
}
