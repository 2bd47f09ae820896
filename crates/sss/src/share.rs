//! Shares and their evaluation.

use crate::identifiers::ParticipantIds;
use crate::polynomial::Polynomial;
use num_bigint_dig::BigUint;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use sss_math::zq::FieldPrime;
use std::fmt;
use tracing::trace;

/// A point `(x, y = P(x) mod p)` on the secret polynomial.
///
/// `x` is the participant's public identifier; `y` must only be revealed to
/// that participant.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Share {
    /// Public identifier of the participant.
    pub x: BigUint,
    /// Value of the polynomial at `x`.
    pub y: BigUint,
}

impl Share {
    /// Create a share from its coordinates.
    pub fn new(x: BigUint, y: BigUint) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Share {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(x={} ; y={})", self.x, self.y)
    }
}

/// Compute the share value `y = P(x) mod p`.
///
/// `x` is not validated: evaluating at `x ≡ 0` returns the secret itself.
/// Use [`compute_all_shares`] with validated identifiers instead.
pub fn compute_share(x: &BigUint, polynomial: &Polynomial, prime: &FieldPrime) -> BigUint {
    polynomial.evaluate(x, prime)
}

/// Compute one share per participant, in identifier order.
///
/// Participants are independent, so the evaluations run in parallel.
pub fn compute_all_shares(
    ids: &ParticipantIds,
    polynomial: &Polynomial,
    prime: &FieldPrime,
) -> Vec<Share> {
    trace!(
        participants = ids.len(),
        degree = polynomial.degree(),
        "evaluating shares"
    );
    ids.as_slice()
        .par_iter()
        .map(|x| Share::new(x.clone(), compute_share(x, polynomial, prime)))
        .collect()
}
