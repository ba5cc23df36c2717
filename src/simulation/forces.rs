//! Force contributors for the planetary engine
//!
//! A `ForceField` owns a list of `ForceLaw` terms. Each tick it zeroes every
//! body's force buffer and lets each term add its share. The default field
//! holds only direct pairwise Newtonian gravity.

use super::states::Body;

/// Collection of force terms summed into each body's force buffer
pub struct ForceField {
    terms: Vec<Box<dyn ForceLaw + Send + Sync>>,
}

impl ForceField {
    /// Create an empty force field
    pub fn new() -> Self {
        Self { terms: Vec::new() }
    }

    /// Field with pairwise gravity only
    pub fn newtonian() -> Self {
        Self::new().with(PairwiseGravity)
    }

    /// Add a force term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: ForceLaw + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    /// Clear every force buffer, then let each term accumulate into them.
    /// Positions are not touched, so all bodies see the same snapshot.
    pub fn accumulate_forces(&self, bodies: &mut [Body]) {
        for b in bodies.iter_mut() {
            b.clear_force();
        }
        for term in &self.terms {
            term.accumulate(bodies);
        }
    }
}

impl Default for ForceField {
    fn default() -> Self {
        Self::newtonian()
    }
}

/// A source of force acting on a set of bodies.
/// Implementations add into the existing buffers and never clear them.
pub trait ForceLaw {
    fn accumulate(&self, bodies: &mut [Body]);
}

/// Direct O(n^2) Newtonian gravity.
///
/// Every unordered pair is visited once and each side accumulates the pull
/// of the other, so the close-encounter guard in
/// [`Body::accumulate_force_from`] applies symmetrically.
pub struct PairwiseGravity;

impl ForceLaw for PairwiseGravity {
    fn accumulate(&self, bodies: &mut [Body]) {
        let n = bodies.len();
        for i in 0..n {
            // split so body i and the bodies after it can be borrowed together
            let (head, tail) = bodies.split_at_mut(i + 1);
            let bi = &mut head[i];
            for bj in tail.iter_mut() {
                bi.accumulate_force_from(bj);
                bj.accumulate_force_from(bi);
            }
        }
    }
}

/// Clear and accumulate pairwise gravity for one tick.
pub fn accumulate_gravity(bodies: &mut [Body]) {
    for b in bodies.iter_mut() {
        b.clear_force();
    }
    PairwiseGravity.accumulate(bodies);
}
