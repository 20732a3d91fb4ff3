#![deny(clippy::all, clippy::pedantic)]
//! # Bounce Runtime
//!
//! Drives the physics engine from a command line: pick a scene, step it
//! frame by frame, and log what happens.

pub mod app;
pub mod cli;
pub mod clock;

pub use app::{run, RunSummary};
pub use cli::Args;
pub use clock::FrameClock;
