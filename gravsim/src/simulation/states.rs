//! Core state types for the 2D n-body simulation.
//!
//! Defines the `Body` entity and the `System` arena that owns every body for
//! the lifetime of a run. Bodies are never removed: a merged-away body is
//! tombstoned (`alive = false`) so that every `BodyId` stays valid.

use nalgebra::Vector2;
pub type NVec2 = Vector2<f64>;

/// Stable index of a body inside [`System::bodies`]
pub type BodyId = usize;

/// Display color, one byte per channel (the byte range is the valid range)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb(pub [u8; 3]);

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b])
    }

    /// Truncating per-channel mean of two colors
    pub fn average(self, other: Rgb) -> Rgb {
        let [r1, g1, b1] = self.0;
        let [r2, g2, b2] = other.0;
        let mean = |a: u8, b: u8| ((a as u16 + b as u16) / 2) as u8;
        Rgb([mean(r1, r2), mean(g1, g2), mean(b1, b2)])
    }

    /// Color derived from mass: heavier bodies drift from blue toward white
    pub fn from_mass(m: f64) -> Rgb {
        let c = (50.0 + (m * 4.0).floor()).clamp(0.0, 255.0) as u8;
        Rgb([c, c, 255 - c])
    }
}

/// Radius for a given mass, `floor(sqrt(m))`
pub fn radius_for_mass(m: f64) -> u32 {
    m.sqrt().floor() as u32
}

#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub x: NVec2, // position
    pub v: NVec2, // velocity
    pub m: f64, // mass, always > 0
    pub radius: u32, // floor(sqrt(m)), kept in sync by set_mass
    pub color: Rgb,
    pub alive: bool, // tombstone flag, only cleared by the collision resolver
}

impl Body {
    pub fn new(x: NVec2, v: NVec2, m: f64, color: Rgb) -> Self {
        Self {
            x,
            v,
            m,
            radius: radius_for_mass(m),
            color,
            alive: true,
        }
    }

    /// Replace the mass and recompute the derived radius
    pub fn set_mass(&mut self, m: f64) {
        self.m = m;
        self.radius = radius_for_mass(m);
    }

    /// Momentum `m * v`
    pub fn momentum(&self) -> NVec2 {
        self.m * self.v
    }

    /// Merge `other` into `self`: momentum-weighted velocity, summed mass,
    /// re-derived radius and averaged color. Does not touch `other`.
    pub fn absorb(&mut self, other: &Body) {
        let total = self.m + other.m;
        self.v = (self.momentum() + other.momentum()) / total;
        self.set_mass(total);
        self.color = self.color.average(other.color);
    }
}

#[derive(Debug, Clone)]
pub struct System {
    pub bodies: Vec<Body>, // every body ever created, dead ones included
    pub t: f64, // simulated time
    pub ticks: u64, // completed ticks
}

impl System {
    pub fn new(bodies: Vec<Body>) -> Self {
        Self {
            bodies,
            t: 0.0,
            ticks: 0,
        }
    }

    /// Ids of the currently alive bodies, in storage order
    pub fn active_ids(&self) -> Vec<BodyId> {
        self.bodies
            .iter()
            .enumerate()
            .filter(|(_, b)| b.alive)
            .map(|(i, _)| i)
            .collect()
    }
}
