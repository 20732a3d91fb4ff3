#![deny(clippy::all, clippy::pedantic)]
//! # Scene Descriptions
//!
//! A scene is a small JSON document holding the startup options of a run
//! and, optionally, an explicit list of spheres. Every field may be left
//! out; missing values fall back to [`SimConfig::default`]. Without a
//! `spheres` list the cube is filled with the default lattice.
//!
//! ```json
//! {
//!   "spheres_per_axis": 2,
//!   "restitution": 0.95,
//!   "gravity": [0.0, -0.98, 0.0],
//!   "seed": 7,
//!   "spheres": [
//!     { "pos": [-0.5, 0.75, 0.0], "vel": [0.1, 0.0, 0.0], "color": [0.0, 1.0, 0.0] }
//!   ]
//! }
//! ```

use std::path::Path;
use std::str::FromStr;

use anyhow::{bail, Context, Result};
use physics::{PhysicsSim, SimConfig, Vec3};
use serde::Deserialize;
use tracing::{info, warn};

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Scene {
    pub spheres_per_axis: usize,
    pub restitution: f32,
    pub gravity: [f32; 3],
    pub fast_forward: f32,
    pub radius: f32,
    pub mass: f32,
    pub half_width: f32,
    pub seed: Option<u64>,
    /// Replaces the lattice when present.
    pub spheres: Option<Vec<SphereDef>>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct SphereDef {
    pub pos: [f32; 3],
    #[serde(default = "zero_vec")]
    pub vel: [f32; 3],
    #[serde(default = "white")]
    pub color: [f32; 3],
}

fn zero_vec() -> [f32; 3] {
    [0.0, 0.0, 0.0]
}

fn white() -> [f32; 3] {
    [1.0, 1.0, 1.0]
}

impl Default for Scene {
    fn default() -> Self {
        let config = SimConfig::default();
        Self {
            spheres_per_axis: config.spheres_per_axis,
            restitution: config.restitution,
            gravity: config.gravity.to_array(),
            fast_forward: config.fast_forward,
            radius: config.radius,
            mass: config.mass,
            half_width: config.half_width,
            seed: config.seed,
            spheres: None,
        }
    }
}

impl FromStr for Scene {
    type Err = anyhow::Error;

    fn from_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl Scene {
    /// Read and parse a scene file.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read or is not a valid scene.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("reading scene {}", path.display()))?;
        json.parse()
            .with_context(|| format!("parsing scene {}", path.display()))
    }

    #[must_use]
    pub fn config(&self) -> SimConfig {
        SimConfig {
            spheres_per_axis: self.spheres_per_axis,
            restitution: self.restitution,
            gravity: Vec3::from(self.gravity),
            fast_forward: self.fast_forward,
            radius: self.radius,
            mass: self.mass,
            half_width: self.half_width,
            seed: self.seed,
        }
    }

    /// Validate the options and build the population.
    ///
    /// # Errors
    ///
    /// Fails on an invalid configuration or an empty `spheres` list.
    pub fn into_sim(self) -> Result<PhysicsSim> {
        let config = self.config();
        let Some(defs) = self.spheres else {
            return Ok(PhysicsSim::from_config(&config)?);
        };

        config.validate()?;
        if defs.is_empty() {
            bail!("scene lists no spheres");
        }

        let mut sim = PhysicsSim::with_params(config.params());
        let limit = sim.params().wall_limit();
        for (index, def) in defs.into_iter().enumerate() {
            if def.pos.iter().any(|c| c.abs() > limit) {
                warn!(index, pos = ?def.pos, "sphere starts in contact with a wall");
            }
            sim.add_sphere_with_color(def.pos.into(), def.vel.into(), def.color);
        }

        for (a, b) in sim.overlapping_pairs() {
            warn!(a, b, "spheres start inside each other and will not collide");
        }
        info!(spheres = sim.spheres().len(), "scene populated");
        Ok(sim)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_is_the_default_scene() {
        let scene: Scene = "{}".parse().unwrap();
        assert_eq!(scene, Scene::default());
        assert_eq!(scene.config(), SimConfig::default());
    }

    #[test]
    fn unknown_fields_are_rejected() {
        assert!("{\"restitusion\": 0.5}".parse::<Scene>().is_err());
    }
}
