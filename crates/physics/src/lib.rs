#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! # Bouncing Spheres Physics Engine
//!
//! A small engine for equal spheres moving under gravity inside a cube, with
//! partially inelastic collisions against the walls and against each other.
//!
//! ## Key Components
//!
//! -   **Vector math and state:** [`Vec3`], [`Sphere`] and the run-wide
//!     [`PhysParams`] live in the [`types`] module.
//! -   **Collision resolver:** [`resolve_sphere_collision`] predicts, in
//!     closed form, whether two spheres on straight-line trajectories touch
//!     and returns their contact positions and post-collision velocities.
//! -   **Simulation step:** [`PhysicsSim::advance`] moves every sphere one
//!     tick, bouncing it off walls or off its first eligible partner. Each
//!     body takes part in at most one collision per tick.
//! -   **Configuration:** [`SimConfig`] holds the startup options and is
//!     validated once, when the simulation is built.
//!
//! ## Usage
//!
//! ```rust
//! use physics::{PhysicsSim, SimConfig};
//!
//! let config = SimConfig { seed: Some(7), ..SimConfig::default() };
//! let mut sim = PhysicsSim::from_config(&config)?;
//! for _ in 0..60 {
//!     sim.advance(1.0 / 60.0 * config.fast_forward);
//! }
//! assert_eq!(sim.instances().len(), 8);
//! # Ok::<(), physics::PhysicsError>(())
//! ```

pub mod collision;
pub mod config;
pub mod error;
pub mod simulation;
pub mod steps;
pub mod types;

mod builder;

pub use collision::{
    resolve_sphere_collision, Body, CollisionRejection, CollisionResolution, WallAxis,
};
pub use config::{ConfigError, SimConfig};
pub use error::PhysicsError;
pub use simulation::PhysicsSim;
pub use steps::TickReport;
pub use types::{PhysParams, Sphere, SphereInstance, Vec3};
