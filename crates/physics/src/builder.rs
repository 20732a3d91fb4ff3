//! # Physics Simulation Builder
//!
//! Populating a [`PhysicsSim`]: single spheres at explicit positions, or the
//! default cubic lattice with randomized velocities built from a validated
//! [`SimConfig`].

use tracing::{info, warn};

use crate::config::SimConfig;
use crate::error::PhysicsError;
use crate::types::{Sphere, Vec3};
use crate::PhysicsSim;

/// Offset of the lattice's first corner from the cube's center.
const LATTICE_ORIGIN: f32 = -0.5;

impl PhysicsSim {
    /// Validate `config` and fill the cube with `spheres_per_axis³` spheres.
    ///
    /// # Errors
    ///
    /// Returns [`PhysicsError::Config`] if the configuration is malformed.
    pub fn from_config(config: &SimConfig) -> Result<Self, PhysicsError> {
        config.validate()?;
        let mut sim = Self::with_params(config.params());
        let mut rng = match config.seed {
            Some(seed) => fastrand::Rng::with_seed(seed),
            None => fastrand::Rng::new(),
        };
        sim.add_lattice(config.spheres_per_axis, &mut rng);

        let overlaps = sim.overlapping_pairs();
        if !overlaps.is_empty() {
            warn!(
                count = overlaps.len(),
                "initial lattice places spheres inside each other; those pairs will not collide"
            );
        }
        info!(spheres = sim.spheres.len(), "simulation populated");
        Ok(sim)
    }

    /// Add a white sphere and return its index.
    pub fn add_sphere(&mut self, pos: Vec3, vel: Vec3) -> usize {
        self.push_sphere(Sphere::new(pos, vel))
    }

    pub fn add_sphere_with_color(&mut self, pos: Vec3, vel: Vec3, color: [f32; 3]) -> usize {
        self.push_sphere(Sphere::new(pos, vel).with_color(color))
    }

    fn push_sphere(&mut self, sphere: Sphere) -> usize {
        self.spheres.push(sphere);
        self.spheres.len() - 1
    }

    /// Place `per_axis³` spheres on a grid with spacing `1 / per_axis`
    /// starting at `(-0.5, -0.5, -0.5)`, colored by grid coordinate, with
    /// velocity components drawn uniformly from `[-1, 1)`.
    #[allow(clippy::cast_precision_loss)]
    pub fn add_lattice(&mut self, per_axis: usize, rng: &mut fastrand::Rng) {
        let step = 1.0 / per_axis as f32;
        self.spheres.reserve(per_axis.pow(3));
        for i in 0..per_axis {
            for j in 0..per_axis {
                for k in 0..per_axis {
                    let offset = Vec3::new(i as f32, j as f32, k as f32) * step;
                    let pos = Vec3::new(LATTICE_ORIGIN, LATTICE_ORIGIN, LATTICE_ORIGIN) + offset;
                    let vel = Vec3::new(
                        random_unit_range(rng),
                        random_unit_range(rng),
                        random_unit_range(rng),
                    );
                    self.add_sphere_with_color(pos, vel, offset.to_array());
                }
            }
        }
    }
}

fn random_unit_range(rng: &mut fastrand::Rng) -> f32 {
    rng.f32() * 2.0 - 1.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lattice_positions_and_colors() {
        let mut config = SimConfig::default();
        config.seed = Some(3);
        let sim = PhysicsSim::from_config(&config).unwrap();
        let spheres = sim.spheres();
        assert_eq!(spheres.len(), 8);

        assert_eq!(spheres[0].pos, Vec3::new(-0.5, -0.5, -0.5));
        assert_eq!(spheres[0].color, [0.0, 0.0, 0.0]);
        // k varies fastest.
        assert_eq!(spheres[1].pos, Vec3::new(-0.5, -0.5, 0.0));
        assert_eq!(spheres[7].pos, Vec3::new(0.0, 0.0, 0.0));
        assert_eq!(spheres[7].color, [0.5, 0.5, 0.5]);

        for sphere in spheres {
            for c in sphere.vel.to_array() {
                assert!((-1.0..1.0).contains(&c));
            }
        }
        assert!(sim.overlapping_pairs().is_empty());
    }

    #[test]
    fn same_seed_same_population() {
        let mut config = SimConfig::default();
        config.seed = Some(42);
        let a = PhysicsSim::from_config(&config).unwrap();
        let b = PhysicsSim::from_config(&config).unwrap();
        assert_eq!(a.spheres(), b.spheres());
    }

    #[test]
    fn dense_lattice_reports_overlap() {
        let mut config = SimConfig::default();
        config.spheres_per_axis = 3;
        config.seed = Some(1);
        let sim = PhysicsSim::from_config(&config).unwrap();
        assert_eq!(sim.spheres().len(), 27);
        assert!(!sim.overlapping_pairs().is_empty());
    }

    #[test]
    fn invalid_config_is_refused() {
        let mut config = SimConfig::default();
        config.restitution = 2.0;
        assert!(matches!(
            PhysicsSim::from_config(&config),
            Err(PhysicsError::Config(_))
        ));
    }
}
