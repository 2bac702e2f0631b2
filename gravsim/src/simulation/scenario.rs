//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! `Scenario`, containing:
//! - engine settings (`Engine`)
//! - the `Simulator`, which owns parameters, bodies and the force field
//!
//! The scenario is inserted into Bevy as a `Resource` and consumed by the
//! stepping and drawing systems of the viewer, or driven directly by the
//! headless loop

use bevy::prelude::Resource;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

use crate::configuration::config::{BodyConfig, GeneratorConfig, ScenarioConfig};
use crate::error::Result;
use crate::simulation::engine::Engine;
use crate::simulation::params::Parameters;
use crate::simulation::simulator::Simulator;
use crate::simulation::states::{Body, NVec2, Rgb};

/// Fresh random bodies drawn from `rng`
///
/// Mass is uniform in `mass_range`, position uniform inside the bounds shrunk
/// by `margin`, each velocity component uniform in `[-speed, speed]`, and the
/// color follows from the mass. The caller owns the generator, so a seeded one
/// gives the same bodies every time.
pub fn generate_bodies<R: Rng + ?Sized>(g: &GeneratorConfig, bounds: NVec2, rng: &mut R) -> Vec<Body> {
    let [m_lo, m_hi] = g.mass_range;
    (0..g.body_count)
        .map(|_| {
            let m = if m_lo < m_hi { rng.gen_range(m_lo..m_hi) } else { m_lo };
            let x = NVec2::new(
                rng.gen_range(g.margin..=bounds.x - g.margin),
                rng.gen_range(g.margin..=bounds.y - g.margin),
            );
            let v = NVec2::new(
                rng.gen_range(-g.speed..=g.speed),
                rng.gen_range(-g.speed..=g.speed),
            );
            Body::new(x, v, m, Rgb::from_mass(m))
        })
        .collect()
}

/// Bevy resource representing a fully-initialized scenario
#[derive(Resource)]
pub struct Scenario {
    pub engine: Engine,
    pub simulator: Simulator,
}

impl Scenario {
    /// Build the runtime bundle. Validates `cfg` first, so a hand-built config
    /// gets the same checks as one loaded from YAML
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self> {
        cfg.validate()?;

        // Parameters (runtime) from ParametersConfig
        let p_cfg = cfg.parameters;
        let parameters = Parameters {
            G: p_cfg.G,
            dt: p_cfg.dt,
            elasticity: p_cfg.elasticity,
            bounds: NVec2::new(p_cfg.bounds[0], p_cfg.bounds[1]),
        };

        // Engine (runtime) from EngineConfig
        let engine = Engine {
            tick_hz: cfg.engine.tick_hz,
            max_ticks: cfg.engine.max_ticks,
        };

        // Bodies: seeded random ones first, then the explicit list
        let mut bodies = match &cfg.generator {
            Some(g) => {
                let mut rng = StdRng::seed_from_u64(g.seed);
                generate_bodies(g, parameters.bounds, &mut rng)
            }
            None => Vec::new(),
        };
        bodies.extend(cfg.bodies.iter().map(|bc: &BodyConfig| {
            let color = bc.color.map(Rgb).unwrap_or_else(|| Rgb::from_mass(bc.m));
            Body::new(NVec2::new(bc.x[0], bc.x[1]), NVec2::new(bc.v[0], bc.v[1]), bc.m, color)
        }));

        let simulator = Simulator::new(bodies, parameters);
        info!(
            bodies = simulator.bodies().len(),
            total_mass = simulator.total_mass(),
            "scenario built"
        );

        Ok(Self {
            engine,
            simulator,
        })
    }
}
