//! Arithmetic in the prime field Z/pZ.

pub mod primes;

use crate::sampling::sample_uniform_mod;
use crate::{Error, Result};
use num_bigint_dig::{prime::probably_prime, BigUint, ModInverse, ToBigUint};
use num_traits::Zero;
use rand::{CryptoRng, RngCore};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of Miller-Rabin rounds used to validate a modulus.
pub const PRIMALITY_ROUNDS: usize = 20;

/// A prime modulus `p` defining the field Z/pZ.
///
/// The modulus is checked for primality on construction and is immutable
/// afterwards. Elements are plain [`BigUint`] values; every method returns
/// values reduced in `[0, p)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "BigUint", into = "BigUint")]
pub struct FieldPrime {
    p: BigUint,
}

impl FieldPrime {
    /// Create a field from a prime modulus.
    ///
    /// Returns an error if `p` is smaller than 2 or fails the primality test.
    pub fn new(p: BigUint) -> Result<Self> {
        if p < BigUint::from(2u32) || !probably_prime(&p, PRIMALITY_ROUNDS) {
            return Err(Error::InvalidModulus(p));
        }
        Ok(Self { p })
    }

    /// Create a field from a prime that fits in a `u64`.
    pub fn from_u64(p: u64) -> Result<Self> {
        Self::new(BigUint::from(p))
    }

    /// Returns the modulus.
    pub fn modulus(&self) -> &BigUint {
        &self.p
    }

    /// Returns the bit length of the modulus.
    pub fn bits(&self) -> usize {
        self.p.bits()
    }

    /// Returns whether `a` is a reduced element, i.e. `a < p`.
    pub fn contains(&self, a: &BigUint) -> bool {
        a < &self.p
    }

    /// Reduce `a` modulo p.
    pub fn reduce(&self, a: &BigUint) -> BigUint {
        a % &self.p
    }

    /// Modular addition.
    pub fn add(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (a + b) % &self.p
    }

    /// Modular subtraction; the operands need not be reduced.
    pub fn sub(&self, a: &BigUint, b: &BigUint) -> BigUint {
        let b = self.reduce(b);
        (self.reduce(a) + &self.p - b) % &self.p
    }

    /// Modular negation.
    pub fn neg(&self, a: &BigUint) -> BigUint {
        self.sub(&BigUint::zero(), a)
    }

    /// Modular multiplication.
    pub fn mul(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (a * b) % &self.p
    }

    /// Modular exponentiation `a^e mod p`.
    pub fn pow(&self, a: &BigUint, e: &BigUint) -> BigUint {
        a.modpow(e, &self.p)
    }

    /// Modular inverse, or `None` when `a ≡ 0 (mod p)`.
    pub fn inv(&self, a: &BigUint) -> Option<BigUint> {
        let a = self.reduce(a);
        if a.is_zero() {
            return None;
        }
        a.mod_inverse(&self.p).and_then(|inv| inv.to_biguint())
    }

    /// Modular inverse, failing with [`Error::NotInvertible`].
    pub fn try_inv(&self, a: &BigUint) -> Result<BigUint> {
        self.inv(a)
            .ok_or_else(|| Error::NotInvertible(self.reduce(a), self.p.clone()))
    }

    /// Draw a uniform element of the field.
    ///
    /// Fails with [`Error::Generation`] when `rng` cannot deliver entropy.
    pub fn random<R: RngCore + CryptoRng + ?Sized>(&self, rng: &mut R) -> Result<BigUint> {
        sample_uniform_mod(&self.p, rng)
    }
}

impl TryFrom<BigUint> for FieldPrime {
    type Error = Error;

    fn try_from(p: BigUint) -> Result<Self> {
        Self::new(p)
    }
}

impl From<FieldPrime> for BigUint {
    fn from(field: FieldPrime) -> Self {
        field.p
    }
}

impl fmt::Display for FieldPrime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.p)
    }
}

#[cfg(test)]
mod tests {
    use super::FieldPrime;
    use crate::sampling::tests::BrokenRng;
    use crate::Error;
    use num_bigint_dig::BigUint;
    use num_traits::{One, Zero};
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::str::FromStr;

    const P: u64 = 4611686018326724609;

    fn big(v: u64) -> BigUint {
        BigUint::from(v)
    }

    #[test]
    fn constructor() {
        assert!(FieldPrime::from_u64(2).is_ok());
        assert!(FieldPrime::from_u64(17).is_ok());
        assert!(FieldPrime::from_u64(P).is_ok());

        for composite in [0u64, 1, 4, 15, 561, P - 1] {
            assert_eq!(
                FieldPrime::from_u64(composite),
                Err(Error::InvalidModulus(big(composite)))
            );
        }

        // 2^127 - 1
        let m127 = BigUint::from_str("170141183460469231731687303715884105727").unwrap();
        assert_eq!(FieldPrime::new(m127.clone()).unwrap().bits(), 127);
    }

    #[test]
    fn small_field_arithmetic() {
        let f = FieldPrime::from_u64(17).unwrap();
        assert_eq!(f.add(&big(9), &big(10)), big(2));
        assert_eq!(f.sub(&big(3), &big(5)), big(15));
        assert_eq!(f.sub(&big(3), &big(22)), big(15));
        assert_eq!(f.neg(&big(0)), big(0));
        assert_eq!(f.neg(&big(1)), big(16));
        assert_eq!(f.mul(&big(5), &big(7)), big(1));
        assert_eq!(f.pow(&big(3), &big(16)), big(1));
        assert_eq!(f.inv(&big(2)), Some(big(9)));
        assert_eq!(f.inv(&big(19)), Some(big(9)));
        assert!(f.contains(&big(16)));
        assert!(!f.contains(&big(17)));
    }

    #[test]
    fn zero_is_not_invertible() {
        let f = FieldPrime::from_u64(17).unwrap();
        assert_eq!(f.inv(&BigUint::zero()), None);
        assert_eq!(f.inv(&big(34)), None);
        assert_eq!(
            f.try_inv(&big(34)),
            Err(Error::NotInvertible(BigUint::zero(), big(17)))
        );
    }

    #[test]
    fn random_elements_are_reduced() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let f = FieldPrime::from_u64(P).unwrap();
        for _ in 0..100 {
            assert!(f.contains(&f.random(&mut rng).unwrap()));
        }
    }

    #[test]
    fn random_surfaces_entropy_failure() {
        let f = FieldPrime::from_u64(P).unwrap();
        assert!(matches!(f.random(&mut BrokenRng), Err(Error::Generation(_))));
    }

    #[test]
    fn display() {
        assert_eq!(FieldPrime::from_u64(P).unwrap().to_string(), P.to_string());
    }

    proptest! {
        #[test]
        fn inverse_roundtrip(a in 1u64..P) {
            let f = FieldPrime::from_u64(P).unwrap();
            let a = big(a);
            let inv = f.inv(&a).unwrap();
            prop_assert!(f.contains(&inv));
            prop_assert!(f.mul(&a, &inv).is_one());
        }

        #[test]
        fn sub_undoes_add(a in 0u64..P, b in 0u64..P) {
            let f = FieldPrime::from_u64(P).unwrap();
            let (a, b) = (big(a), big(b));
            prop_assert_eq!(f.sub(&f.add(&a, &b), &b), a.clone());
            prop_assert!(f.add(&a, &f.neg(&a)).is_zero());
        }
    }
}
