//! Public x-coordinates assigned to participants.

use crate::config::validate_identifiers;
use crate::{Error, Result};
use num_bigint_dig::BigUint;
use sss_math::zq::FieldPrime;

/// A validated list of participant identifiers.
///
/// Identifiers are nonzero and pairwise distinct modulo the field prime, so
/// evaluating a polynomial at them never exposes `P(0)` and never hands two
/// participants the same share.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParticipantIds {
    ids: Box<[BigUint]>,
}

impl ParticipantIds {
    /// Validate caller-supplied identifiers against the field.
    pub fn new(ids: Vec<BigUint>, prime: &FieldPrime) -> Result<Self> {
        validate_identifiers(&ids, prime)?;
        Ok(Self {
            ids: ids.into_boxed_slice(),
        })
    }

    /// Identifiers `1, 2, ..., n`.
    pub fn sequential(n: usize, prime: &FieldPrime) -> Result<Self> {
        Self::stepped(n, 1, prime)
    }

    /// Identifiers `step, 2·step, ..., n·step`.
    pub fn stepped(n: usize, step: u64, prime: &FieldPrime) -> Result<Self> {
        if step == 0 {
            return Err(Error::DuplicateOrZeroIdentifier(BigUint::from(0u32)));
        }
        let step = BigUint::from(step);
        let ids = (1..=n as u64).map(|i| BigUint::from(i) * &step).collect();
        Self::new(ids, prime)
    }

    /// Number of participants.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Returns true when there are no participants.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// The identifiers, in assignment order.
    pub fn as_slice(&self) -> &[BigUint] {
        &self.ids
    }

    /// Iterate over the identifiers.
    pub fn iter(&self) -> impl Iterator<Item = &BigUint> {
        self.ids.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::ParticipantIds;
    use crate::Error;
    use num_bigint_dig::BigUint;
    use sss_math::zq::FieldPrime;

    #[test]
    fn sequential_and_stepped() {
        let prime = FieldPrime::from_u64(17).unwrap();

        let ids = ParticipantIds::sequential(4, &prime).unwrap();
        assert_eq!(ids.len(), 4);
        assert_eq!(
            ids.as_slice(),
            &[1u32, 2, 3, 4].map(BigUint::from)[..]
        );

        let ids = ParticipantIds::stepped(4, 2, &prime).unwrap();
        assert_eq!(
            ids.iter().cloned().collect::<Vec<_>>(),
            [2u32, 4, 6, 8].map(BigUint::from).to_vec()
        );

        assert!(ParticipantIds::sequential(0, &prime).unwrap().is_empty());
    }

    #[test]
    fn identifiers_must_fit_the_field() {
        let prime = FieldPrime::from_u64(17).unwrap();

        // 1..=16 are the only nonzero residues.
        assert!(ParticipantIds::sequential(16, &prime).is_ok());
        assert_eq!(
            ParticipantIds::sequential(17, &prime),
            Err(Error::DuplicateOrZeroIdentifier(BigUint::from(17u32)))
        );

        // 2 is invertible mod 17, so 2i covers every nonzero residue until 2·17 ≡ 0.
        assert!(ParticipantIds::stepped(16, 2, &prime).is_ok());
        assert!(ParticipantIds::stepped(17, 2, &prime).is_err());
        assert!(ParticipantIds::stepped(3, 0, &prime).is_err());
    }
}
