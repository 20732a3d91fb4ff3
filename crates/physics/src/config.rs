//! # Startup Configuration
//!
//! Everything that is fixed for the lifetime of a run. A [`SimConfig`] is
//! validated exactly once, when the simulation is built; the per-tick code
//! never re-checks these values.

use thiserror::Error;

use crate::types::{PhysParams, Vec3};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("spheres_per_axis must be at least 1")]
    SpheresPerAxis,
    #[error("restitution must lie in [0, 1], got {0}")]
    Restitution(f32),
    #[error("sphere radius must be positive, got {0}")]
    Radius(f32),
    #[error("sphere mass must be positive, got {0}")]
    Mass(f32),
    #[error("domain half-width must be positive, got {0}")]
    HalfWidth(f32),
    #[error("sphere radius {radius} does not fit inside half-width {half_width}")]
    RadiusExceedsDomain { radius: f32, half_width: f32 },
    #[error("fast_forward must be positive, got {0}")]
    FastForward(f32),
    #[error("gravity must be finite")]
    Gravity,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SimConfig {
    /// Population is `spheres_per_axis³`.
    pub spheres_per_axis: usize,
    pub restitution: f32,
    pub gravity: Vec3,
    /// Simulated seconds per real second.
    pub fast_forward: f32,
    pub radius: f32,
    pub mass: f32,
    pub half_width: f32,
    /// Seed for the initial velocities; `None` draws from entropy.
    pub seed: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        let params = PhysParams::default();
        Self {
            spheres_per_axis: 2,
            restitution: params.restitution,
            gravity: params.gravity,
            fast_forward: 1.0,
            radius: params.radius,
            mass: params.mass,
            half_width: params.half_width,
            seed: None,
        }
    }
}

impl SimConfig {
    /// Reject malformed values before any body is created.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.spheres_per_axis == 0 {
            return Err(ConfigError::SpheresPerAxis);
        }
        if !(0.0..=1.0).contains(&self.restitution) {
            return Err(ConfigError::Restitution(self.restitution));
        }
        if !is_positive(self.radius) {
            return Err(ConfigError::Radius(self.radius));
        }
        if !is_positive(self.mass) {
            return Err(ConfigError::Mass(self.mass));
        }
        if !is_positive(self.half_width) {
            return Err(ConfigError::HalfWidth(self.half_width));
        }
        if self.radius >= self.half_width {
            return Err(ConfigError::RadiusExceedsDomain {
                radius: self.radius,
                half_width: self.half_width,
            });
        }
        if !is_positive(self.fast_forward) {
            return Err(ConfigError::FastForward(self.fast_forward));
        }
        if !self.gravity.is_finite() {
            return Err(ConfigError::Gravity);
        }
        Ok(())
    }

    #[must_use]
    pub fn total_spheres(&self) -> usize {
        self.spheres_per_axis.pow(3)
    }

    #[must_use]
    pub fn params(&self) -> PhysParams {
        PhysParams {
            gravity: self.gravity,
            restitution: self.restitution,
            radius: self.radius,
            mass: self.mass,
            half_width: self.half_width,
        }
    }
}

// NaN fails the comparison as well.
fn is_positive(value: f32) -> bool {
    value.is_finite() && value > 0.0
}
