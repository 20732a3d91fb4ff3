//! # Collision Detection and Response
//!
//! Two kinds of contact exist in the box: a sphere against one of the six
//! axis-aligned walls, and a sphere against another sphere. Wall contacts
//! are a velocity reflection; sphere contacts are predicted analytically
//! along straight-line trajectories by [`resolve_sphere_collision`].

mod sphere_sphere;
mod walls;

pub use sphere_sphere::*;
pub use walls::*;

use crate::types::{PhysParams, Sphere, Vec3};

/// Kinematic view of one body as seen by the resolver.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Body {
    pub pos: Vec3,
    pub vel: Vec3,
    pub radius: f32,
    pub mass: f32,
}

impl Body {
    #[must_use]
    pub const fn new(pos: Vec3, vel: Vec3, radius: f32, mass: f32) -> Self {
        Self { pos, vel, radius, mass }
    }

    /// Body built from an arena sphere and the shared radius/mass.
    #[must_use]
    pub fn from_sphere(sphere: &Sphere, params: &PhysParams) -> Self {
        Self::new(sphere.pos, sphere.vel, params.radius, params.mass)
    }

    #[must_use]
    pub fn momentum(&self) -> Vec3 {
        self.vel * self.mass
    }

    #[must_use]
    pub fn kinetic_energy(&self) -> f32 {
        0.5 * self.mass * self.vel.length_squared()
    }
}

/// Mass-weighted mean velocity of a pair.
#[must_use]
pub fn center_of_mass_velocity(a: &Body, b: &Body) -> Vec3 {
    (a.vel * a.mass + b.vel * b.mass) / (a.mass + b.mass)
}
