//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds the fixed per-run settings:
//! - gravitational constant `G`,
//! - step size `dt`,
//! - wall restitution `elasticity`,
//! - plane size `bounds` (width, height)

use super::states::NVec2;

#[allow(non_snake_case)]
#[derive(Debug, Clone, PartialEq)]
pub struct Parameters {
    pub G: f64, // gravitational constant
    pub dt: f64, // step size
    pub elasticity: f64, // fraction of wall-normal speed kept after a bounce, in [0, 1]
    pub bounds: NVec2, // (width, height) of the plane, origin at (0, 0)
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            G: 0.67,
            dt: 0.05,
            elasticity: 0.9,
            bounds: NVec2::new(1000.0, 800.0),
        }
    }
}
