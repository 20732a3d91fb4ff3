//! # Physics Simulation Core
//!
//! [`PhysicsSim`] owns the sphere arena and the run's constants and
//! advances them one tick per [`PhysicsSim::advance`] call. Each tick walks
//! the bodies in index order; a body either bounces off a wall, collides
//! with its first eligible partner, or moves freely under gravity.

use tracing::debug;

use crate::collision::{detect_wall_collision, resolve_wall_collision};
use crate::error::PhysicsError;
use crate::steps::{commit_free_motion, resolve_first_partner, TickReport};
use crate::types::{PhysParams, Sphere, SphereInstance, Vec3};

/// Main physics simulation container
#[derive(Clone, Debug)]
pub struct PhysicsSim {
    pub(crate) spheres: Vec<Sphere>,
    pub(crate) params: PhysParams,
    pub(crate) last_tick: TickReport,
}

impl PhysicsSim {
    /// Create an empty simulation with the default constants.
    #[must_use]
    pub fn new() -> Self {
        Self::with_params(PhysParams::default())
    }

    /// Create an empty simulation with the given constants.
    ///
    /// The constants are taken as-is; use [`PhysicsSim::from_config`] to
    /// validate them first.
    #[must_use]
    pub fn with_params(params: PhysParams) -> Self {
        Self {
            spheres: Vec::new(),
            params,
            last_tick: TickReport::default(),
        }
    }

    #[must_use]
    pub fn params(&self) -> &PhysParams {
        &self.params
    }

    #[must_use]
    pub fn spheres(&self) -> &[Sphere] {
        &self.spheres
    }

    /// Counters from the most recent [`PhysicsSim::advance`].
    #[must_use]
    pub fn last_tick(&self) -> TickReport {
        self.last_tick
    }

    /// Advance every sphere by one tick of `dt` simulated seconds.
    ///
    /// A non-positive or non-finite `dt` leaves the state untouched.
    pub fn advance(&mut self, dt: f32) -> TickReport {
        self.last_tick = TickReport::default();
        if !(dt.is_finite() && dt > 0.0) {
            return self.last_tick;
        }

        let params = self.params;
        let mut report = TickReport::default();
        let mut resolved = vec![false; self.spheres.len()];

        for i in 0..self.spheres.len() {
            if resolved[i] {
                continue;
            }
            let tentative = self.spheres[i].extrapolate(dt);

            if let Some(axis) = detect_wall_collision(tentative.to_array(), &params) {
                resolve_wall_collision(&mut self.spheres[i], axis, params.restitution);
                resolved[i] = true;
                report.wall_bounces += 1;
                continue;
            }

            if let Some(j) = resolve_first_partner(
                &mut self.spheres,
                i,
                tentative,
                &resolved,
                dt,
                &params,
                &mut report,
            ) {
                resolved[i] = true;
                resolved[j] = true;
                continue;
            }

            commit_free_motion(&mut self.spheres[i], tentative, params.gravity, dt);
        }

        self.last_tick = report;
        report
    }

    /// Run `steps` consecutive ticks of `dt`.
    ///
    /// # Errors
    ///
    /// Returns [`PhysicsError::NoSpheres`] if there is nothing to simulate.
    pub fn run(&mut self, dt: f32, steps: usize) -> Result<TickReport, PhysicsError> {
        if self.spheres.is_empty() {
            return Err(PhysicsError::NoSpheres);
        }

        let mut totals = TickReport::default();
        for _ in 0..steps {
            totals += self.advance(dt);
        }
        debug!(steps, dt, ?totals, "run finished");
        Ok(totals)
    }

    /// Drawing records for every sphere, in arena order.
    #[must_use]
    pub fn instances(&self) -> Vec<SphereInstance> {
        self.spheres
            .iter()
            .map(|sphere| SphereInstance {
                center: sphere.pos.to_array(),
                radius: self.params.radius,
                color: sphere.color,
                _pad: 0.0,
            })
            .collect()
    }

    /// [`PhysicsSim::instances`] as a byte buffer ready for upload.
    #[must_use]
    pub fn instance_bytes(&self) -> Vec<u8> {
        bytemuck::cast_slice(&self.instances()).to_vec()
    }

    #[must_use]
    pub fn total_kinetic_energy(&self) -> f32 {
        self.spheres
            .iter()
            .map(|s| 0.5 * self.params.mass * s.vel.length_squared())
            .sum()
    }

    #[must_use]
    pub fn total_momentum(&self) -> Vec3 {
        self.spheres
            .iter()
            .fold(Vec3::ZERO, |acc, s| acc + s.vel * self.params.mass)
    }

    /// Kinetic plus gravitational potential energy, with the potential
    /// measured from the cube's center.
    #[must_use]
    pub fn total_energy(&self) -> f32 {
        let potential: f32 = self
            .spheres
            .iter()
            .map(|s| -self.params.mass * self.params.gravity.dot(s.pos))
            .sum();
        self.total_kinetic_energy() + potential
    }

    /// Index pairs whose centers are closer than two radii.
    #[must_use]
    pub fn overlapping_pairs(&self) -> Vec<(usize, usize)> {
        let min_distance = 2.0 * self.params.radius;
        let mut pairs = Vec::new();
        for (i, a) in self.spheres.iter().enumerate() {
            for (j, b) in self.spheres.iter().enumerate().skip(i + 1) {
                if a.pos.distance(b.pos) < min_distance {
                    pairs.push((i, j));
                }
            }
        }
        pairs
    }
}

impl Default for PhysicsSim {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn free_body_moves_then_accelerates() {
        let mut sim = PhysicsSim::new();
        sim.add_sphere(Vec3::new(0.0, 0.0, 0.0), Vec3::new(0.5, 0.0, 0.0));
        let tick = sim.advance(0.1);

        assert_eq!(tick, TickReport::default());
        let sphere = sim.spheres()[0];
        assert!((sphere.pos.x - 0.05).abs() < 1e-6);
        assert!((sphere.vel.y + 0.098).abs() < 1e-6);
    }

    #[test]
    fn non_positive_dt_is_a_no_op() {
        let mut sim = PhysicsSim::new();
        sim.add_sphere(Vec3::new(0.79, 0.0, 0.0), Vec3::new(1.0, 1.0, 0.0));
        let before = sim.spheres().to_vec();
        sim.advance(0.0);
        sim.advance(-0.5);
        sim.advance(f32::NAN);
        assert_eq!(sim.spheres(), before.as_slice());
    }

    #[test]
    fn instance_buffer_matches_arena() {
        let mut sim = PhysicsSim::new();
        sim.add_sphere(Vec3::new(0.1, 0.2, 0.3), Vec3::ZERO);
        sim.add_sphere(Vec3::new(-0.1, -0.2, -0.3), Vec3::ZERO);
        let instances = sim.instances();
        assert_eq!(instances.len(), 2);
        assert_eq!(instances[1].center, [-0.1, -0.2, -0.3]);
        assert!((instances[0].radius - 0.2).abs() < f32::EPSILON);
        assert_eq!(
            sim.instance_bytes().len(),
            2 * std::mem::size_of::<SphereInstance>()
        );
    }

    #[test]
    fn run_without_spheres_fails() {
        let mut sim = PhysicsSim::new();
        assert!(matches!(sim.run(0.01, 10), Err(PhysicsError::NoSpheres)));
    }
}
