//! One discrete tick of the simulation, and the read-only view drivers draw from
//!
//! A tick runs four phases in a fixed order over the set of bodies alive at
//! its start:
//! 1. snapshot the active ids,
//! 2. kick every active body with its net force, all forces taken from the
//!    pre-tick positions,
//! 3. merge overlapping bodies, still at pre-tick positions,
//! 4. drift every body that survived the merges.

use tracing::debug;

use super::collisions;
use super::forces::{GravityField, NewtonianGravity};
use super::integrator::{apply_force, update_position};
use super::params::Parameters;
use super::states::{Body, BodyId, NVec2, Rgb, System};

/// What a renderer needs to draw one alive body
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyView {
    pub id: BodyId,
    pub position: NVec2,
    pub radius: u32,
    pub color: Rgb,
}

pub struct Simulator {
    system: System,
    parameters: Parameters,
    field: GravityField,
}

impl Simulator {
    /// Simulator over `bodies` with plain Newtonian gravity
    pub fn new(bodies: Vec<Body>, parameters: Parameters) -> Self {
        let field = GravityField::new().with(NewtonianGravity {
            G: parameters.G,
        });
        Self::with_field(bodies, parameters, field)
    }

    /// Simulator over `bodies` with a caller-supplied force field
    pub fn with_field(bodies: Vec<Body>, parameters: Parameters, field: GravityField) -> Self {
        Self {
            system: System::new(bodies),
            parameters,
            field,
        }
    }

    /// Advance the simulation by one step of `dt`
    pub fn tick(&mut self) {
        let active = self.system.active_ids();

        // Forces only read position, mass and radius, none of which change
        // until the collision phase
        let forces: Vec<NVec2> = active
            .iter()
            .map(|&id| self.field.net_force(id, &active, &self.system.bodies))
            .collect();

        let bodies = &mut self.system.bodies;
        for (&id, force) in active.iter().zip(forces) {
            apply_force(&mut bodies[id], force, &self.parameters);
        }

        let merges = collisions::resolve(bodies, &active);

        for &id in &active {
            update_position(&mut bodies[id], &self.parameters);
        }

        self.system.ticks += 1;
        self.system.t += self.parameters.dt;

        if merges > 0 {
            debug!(
                tick = self.system.ticks,
                merges,
                alive = active.len() - merges,
                "resolved collisions"
            );
        }
    }

    pub fn bodies(&self) -> &[Body] {
        &self.system.bodies
    }

    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    pub fn active_ids(&self) -> Vec<BodyId> {
        self.system.active_ids()
    }

    pub fn ticks(&self) -> u64 {
        self.system.ticks
    }

    /// Simulated time, `ticks * dt`
    pub fn time(&self) -> f64 {
        self.system.t
    }

    pub fn alive_count(&self) -> usize {
        self.system.bodies.iter().filter(|b| b.alive).count()
    }

    /// Sum of the masses of all alive bodies; absorbed mass lives on in
    /// the absorbers, so this stays equal to the initial total
    pub fn total_mass(&self) -> f64 {
        self.system.bodies.iter().filter(|b| b.alive).map(|b| b.m).sum()
    }

    /// Drawable state of one body, `None` if it has been absorbed
    pub fn view(&self, id: BodyId) -> Option<BodyView> {
        let b = self.system.bodies.get(id)?;
        b.alive.then(|| BodyView {
            id,
            position: b.x,
            radius: b.radius,
            color: b.color,
        })
    }

    /// Drawable state of every alive body, in id order
    pub fn snapshot(&self) -> impl Iterator<Item = BodyView> + '_ {
        (0..self.system.bodies.len()).filter_map(|id| self.view(id))
    }
}
