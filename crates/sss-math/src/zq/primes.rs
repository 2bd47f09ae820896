//! Generation of field primes.

use crate::sampling::random_bits;
use crate::zq::{FieldPrime, PRIMALITY_ROUNDS};
use crate::{Error, Result};
use num_bigint_dig::{
    prime::{next_prime, probably_prime},
    BigUint,
};
use num_traits::One;
use rand::{CryptoRng, RngCore};
use tracing::debug;

/// Smallest bit length accepted by [`generate_prime`].
pub const MIN_PRIME_BITS: usize = 2;

/// Generate a prime field of roughly `bit_strength` bits.
///
/// A uniform `bit_strength`-bit integer is drawn from `rng`, forced odd, and the
/// first prime greater than or equal to it is returned. The search is a
/// deterministic function of that seed, so the output is not uniform over the
/// primes of this size (primes that follow a long gap are more likely). When the seed sits just below a
/// power of two the prime may have one more bit than requested.
///
/// Returns an error if the bit length is below [`MIN_PRIME_BITS`] or if `rng`
/// fails to produce entropy.
pub fn generate_prime<R: RngCore + CryptoRng + ?Sized>(
    bit_strength: usize,
    rng: &mut R,
) -> Result<FieldPrime> {
    if bit_strength < MIN_PRIME_BITS {
        return Err(Error::InvalidBitLength(bit_strength, MIN_PRIME_BITS));
    }

    let seed = random_bits(bit_strength, rng)? | BigUint::one();
    let p = if probably_prime(&seed, PRIMALITY_ROUNDS) {
        seed
    } else {
        next_prime(&seed)
    };
    debug!(requested = bit_strength, bits = p.bits(), "generated field prime");
    FieldPrime::new(p)
}

#[cfg(test)]
mod tests {
    use super::{generate_prime, MIN_PRIME_BITS};
    use crate::sampling::tests::BrokenRng;
    use crate::Error;
    use num_bigint_dig::prime::probably_prime;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn generates_primes_of_requested_size() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        for bits in [MIN_PRIME_BITS, 8, 14, 64, 127, 256] {
            let p = generate_prime(bits, &mut rng).unwrap();
            assert!(probably_prime(p.modulus(), 20));
            assert!(p.bits() <= bits + 1, "{} has {} bits", p, p.bits());
        }
    }

    #[test]
    fn same_seed_same_prime() {
        let p1 = generate_prime(128, &mut ChaCha8Rng::seed_from_u64(42)).unwrap();
        let p2 = generate_prime(128, &mut ChaCha8Rng::seed_from_u64(42)).unwrap();
        assert_eq!(p1, p2);
    }

    #[test]
    fn rejects_tiny_bit_lengths() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        assert_eq!(
            generate_prime(0, &mut rng).err(),
            Some(Error::InvalidBitLength(0, MIN_PRIME_BITS))
        );
        assert_eq!(
            generate_prime(1, &mut rng).err(),
            Some(Error::InvalidBitLength(1, MIN_PRIME_BITS))
        );
    }

    #[test]
    fn surfaces_entropy_failure() {
        assert!(matches!(
            generate_prime(64, &mut BrokenRng),
            Err(Error::Generation(_))
        ));
    }
}
