//! Uniform sampling of field elements.
//!
//! The security of secret sharing rests entirely on these draws: the random
//! source must be unpredictable, which is why every function requires a
//! [`CryptoRng`]. A weak or seeded-from-the-clock generator breaks the scheme.

use crate::{Error, Result};
use num_bigint_dig::BigUint;
use num_traits::Zero;
use rand::{CryptoRng, RngCore};

/// Draw a uniform integer in `[0, modulus)`.
///
/// Candidates of `modulus.bits()` bits are drawn until one falls below the
/// modulus, so fewer than two draws are needed on average. Returns an error if
/// `modulus` is zero or if `rng` fails to produce entropy.
pub fn sample_uniform_mod<R: RngCore + CryptoRng + ?Sized>(
    modulus: &BigUint,
    rng: &mut R,
) -> Result<BigUint> {
    if modulus.is_zero() {
        return Err(Error::ZeroModulus);
    }
    let bits = modulus.bits();
    loop {
        let candidate = random_bits(bits, rng)?;
        if &candidate < modulus {
            return Ok(candidate);
        }
    }
}

/// Draw `n` independent uniform integers in `[0, modulus)`.
pub fn sample_uniform_vec<R: RngCore + CryptoRng + ?Sized>(
    modulus: &BigUint,
    n: usize,
    rng: &mut R,
) -> Result<Vec<BigUint>> {
    (0..n).map(|_| sample_uniform_mod(modulus, rng)).collect()
}

/// Draw a uniform integer of at most `bits` bits.
pub(crate) fn random_bits<R: RngCore + ?Sized>(bits: usize, rng: &mut R) -> Result<BigUint> {
    let mut bytes = vec![0u8; (bits + 7) / 8];
    rng.try_fill_bytes(&mut bytes)
        .map_err(|e| Error::Generation(e.to_string()))?;
    Ok(BigUint::from_bytes_be(&bytes) >> (bytes.len() * 8 - bits))
}
