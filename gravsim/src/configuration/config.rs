//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`EngineConfig`]     – driver pacing (tick rate, optional tick limit)
//! - [`ParametersConfig`] – physical constants, step size and plane bounds
//! - [`GeneratorConfig`]  – optional seeded random body generation
//! - [`BodyConfig`]       – initial state for each explicitly listed body
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! Every section and field except `generator.body_count`,
//! `generator.mass_range` and the per-body `x`, `v`, `m` has a default:
//!
//! ```yaml
//! engine:
//!   tick_hz: 60.0           # viewer ticks per second
//!   max_ticks: 3600         # optional, stop ticking after this many
//!
//! parameters:
//!   G: 0.67                 # gravitational constant
//!   dt: 0.05                # fixed step size
//!   elasticity: 0.9         # wall restitution, 0..=1
//!   bounds: [1000.0, 800.0] # width, height
//!
//! generator:
//!   body_count: 8
//!   mass_range: [10.0, 50.0]
//!   seed: 42
//!   speed: 3.0              # initial velocity components in [-speed, speed]
//!   margin: 100.0           # keep initial positions this far from the walls
//!
//! bodies:
//!   - x: [ 100.0, 100.0 ]
//!     v: [   0.0,   0.0 ]
//!     m: 10.0
//!     color: [255, 0, 0]    # optional, derived from mass when absent
//! ```
//!
//! Generated bodies come first, explicit bodies are appended after them.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;

use crate::error::{ConfigError, Result};

/// Driver pacing
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct EngineConfig {
    pub tick_hz: f64, // ticks per second in the windowed viewer
    pub max_ticks: Option<u64>, // stop after this many ticks, `None` = until the window closes
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            tick_hz: 60.0,
            max_ticks: None,
        }
    }
}

/// Global physical parameters for a scenario
#[allow(non_snake_case)]
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ParametersConfig {
    pub G: f64, // gravitational constant
    pub dt: f64, // time step size
    pub elasticity: f64, // restitution for wall bounces
    pub bounds: [f64; 2], // width, height of the plane
}

impl Default for ParametersConfig {
    fn default() -> Self {
        Self {
            G: 0.67,
            dt: 0.05,
            elasticity: 0.9,
            bounds: [1000.0, 800.0],
        }
    }
}

fn default_speed() -> f64 {
    3.0
}

fn default_margin() -> f64 {
    100.0
}

/// Seeded random generation of the initial bodies
#[derive(Deserialize, Debug, Clone)]
pub struct GeneratorConfig {
    pub body_count: usize,
    pub mass_range: [f64; 2], // [min, max) for each body's mass
    #[serde(default)]
    pub seed: u64, // deterministic seed to make runs reproducible
    #[serde(default = "default_speed")]
    pub speed: f64,
    #[serde(default = "default_margin")]
    pub margin: f64,
}

/// Configuration for a single body’s initial state
#[derive(Deserialize, Debug, Clone)]
pub struct BodyConfig {
    pub x: Vec<f64>, // initial position
    pub v: Vec<f64>, // initial velocity
    pub m: f64, // mass, radius is derived from it
    #[serde(default)]
    pub color: Option<[u8; 3]>,
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default)]
    pub parameters: ParametersConfig,
    #[serde(default)]
    pub generator: Option<GeneratorConfig>,
    #[serde(default)]
    pub bodies: Vec<BodyConfig>,
}

fn positive(field: &str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::invalid(field, format!("must be positive and finite, got {value}")))
    }
}

impl ScenarioConfig {
    /// Parse a scenario from YAML text and validate it
    pub fn from_yaml_str(text: &str) -> Result<Self> {
        let cfg: ScenarioConfig = serde_yaml::from_str(text)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Read a scenario file and validate it
    pub fn load(path: &Path) -> Result<Self> {
        let reader = BufReader::new(File::open(path)?);
        let cfg: ScenarioConfig = serde_yaml::from_reader(reader)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Reject anything the physics core assumes cannot happen
    pub fn validate(&self) -> Result<()> {
        positive("engine.tick_hz", self.engine.tick_hz)?;

        let p = &self.parameters;
        if !p.G.is_finite() || p.G < 0.0 {
            return Err(ConfigError::invalid("parameters.G", format!("must be non-negative and finite, got {}", p.G)));
        }
        positive("parameters.dt", p.dt)?;
        if !(0.0..=1.0).contains(&p.elasticity) {
            return Err(ConfigError::invalid("parameters.elasticity", format!("must lie in [0, 1], got {}", p.elasticity)));
        }
        positive("parameters.bounds[0]", p.bounds[0])?;
        positive("parameters.bounds[1]", p.bounds[1])?;

        if let Some(g) = &self.generator {
            if g.body_count == 0 {
                return Err(ConfigError::invalid("generator.body_count", "must be at least 1"));
            }
            let [lo, hi] = g.mass_range;
            positive("generator.mass_range[0]", lo)?;
            positive("generator.mass_range[1]", hi)?;
            if lo > hi {
                return Err(ConfigError::invalid("generator.mass_range", format!("min {lo} exceeds max {hi}")));
            }
            if !g.speed.is_finite() || g.speed < 0.0 {
                return Err(ConfigError::invalid("generator.speed", format!("must be non-negative and finite, got {}", g.speed)));
            }
            if !g.margin.is_finite() || g.margin < 0.0 || 2.0 * g.margin > p.bounds[0].min(p.bounds[1]) {
                return Err(ConfigError::invalid("generator.margin", format!("{} leaves no room inside the bounds", g.margin)));
            }
        }

        for (i, b) in self.bodies.iter().enumerate() {
            if b.x.len() != 2 {
                return Err(ConfigError::invalid(format!("bodies[{i}].x"), format!("expected 2 components, got {}", b.x.len())));
            }
            if b.v.len() != 2 {
                return Err(ConfigError::invalid(format!("bodies[{i}].v"), format!("expected 2 components, got {}", b.v.len())));
            }
            if b.x.iter().chain(&b.v).any(|c| !c.is_finite()) {
                return Err(ConfigError::invalid(format!("bodies[{i}]"), "position and velocity must be finite"));
            }
            positive(&format!("bodies[{i}].m"), b.m)?;
        }

        if self.generator.is_none() && self.bodies.is_empty() {
            return Err(ConfigError::Empty);
        }
        Ok(())
    }
}
