//! Force contributors for the n-body engine
//!
//! Defines the pairwise force trait, direct Newtonian gravity with
//! radius-based softening, and the [`GravityField`] that sums every
//! registered term over all other active bodies

use crate::simulation::states::{Body, BodyId, NVec2};

/// Collection of pairwise force terms (gravity, and anything else that acts
/// between two bodies). Each term implements [`PairForce`] and their
/// contributions are summed into one net force per body
pub struct GravityField {
    terms: Vec<Box<dyn PairForce + Send + Sync>>,
}

impl Default for GravityField {
    fn default() -> Self {
        Self::new()
    }
}

impl GravityField {
    /// Create an empty field
    pub fn new() -> Self {
        Self {
            terms: Vec::new()
        }
    }

    /// Add a force term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: PairForce + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    /// Net force on `bodies[id]` exerted by every other body listed in `active`
    ///
    /// This is the plain full pairwise sum: each pair is evaluated once from
    /// each side, and dead bodies contribute nothing. With no peers the
    /// result is the zero vector
    pub fn net_force(&self, id: BodyId, active: &[BodyId], bodies: &[Body]) -> NVec2 {
        let body = &bodies[id];
        let mut total = NVec2::zeros();
        if !body.alive {
            return total;
        }

        for &other_id in active {
            if other_id == id {
                continue;
            }
            let other = &bodies[other_id];
            for term in &self.terms {
                total += term.force(body, other);
            }
        }
        total
    }
}

/// Force exerted on `body` by `other`
pub trait PairForce {
    fn force(&self, body: &Body, other: &Body) -> NVec2;
}

/// Newtonian gravity, softened by clamping the squared separation to the
/// squared sum of the two radii
#[allow(non_snake_case)]
pub struct NewtonianGravity {
    pub G: f64, // gravitational constant
}

impl PairForce for NewtonianGravity {
    fn force(&self, body: &Body, other: &Body) -> NVec2 {
        if !body.alive || !other.alive {
            return NVec2::zeros();
        }

        // direction from body toward other
        let r = other.x - body.x;

        // coincident centers have no direction to pull along
        let Some(dir) = r.try_normalize(0.0) else {
            return NVec2::zeros();
        };

        // overlapping bodies are treated as if just touching
        let touch = (body.radius + other.radius) as f64;
        let d2 = r.norm_squared().max(touch * touch);

        // |F| = G m1 m2 / d^2
        let magnitude = self.G * body.m * other.m / d2;

        dir * magnitude
    }
}
