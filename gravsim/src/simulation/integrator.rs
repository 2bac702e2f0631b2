//! Fixed-step semi-implicit (symplectic) Euler integrator
//!
//! A tick first kicks velocities with [`apply_force`] for every body, and
//! only later drifts positions with [`update_position`] using the already
//! updated velocity. The drift also reflects bodies off the walls of the
//! plane described by `Parameters::bounds`

use super::states::{Body, NVec2};
use super::params::Parameters;

/// Kick: `v += (F / m) * dt`. Dead bodies are left untouched
pub fn apply_force(body: &mut Body, force: NVec2, params: &Parameters) {
    if !body.alive {
        return;
    }
    let a = force / body.m;
    body.v += a * params.dt;
}

/// Drift: `x += v * dt`, then bounce off any wall the body's extent crosses
///
/// Each axis is checked on its own, so a corner hit flips both velocity
/// components in the same call. Dead bodies are left untouched
pub fn update_position(body: &mut Body, params: &Parameters) {
    if !body.alive {
        return;
    }
    body.x += body.v * params.dt;

    let r = body.radius as f64;
    for axis in 0..2 {
        let bound = params.bounds[axis];
        let x = body.x[axis];
        if x - r < 0.0 || x + r > bound {
            body.v[axis] *= -params.elasticity;
            // max(r, min(bound - r, x)): stays well defined when 2r > bound
            body.x[axis] = r.max((bound - r).min(x));
        }
    }
}
