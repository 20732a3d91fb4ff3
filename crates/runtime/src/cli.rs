use std::path::PathBuf;

use clap::Parser;

/// Spheres bouncing around inside a cube.
#[derive(Parser, Debug, Clone)]
#[command(name = "bounce", version)]
pub struct Args {
    /// JSON scene to load instead of the default lattice.
    #[arg(long)]
    pub scene: Option<PathBuf>,

    #[arg(long)]
    pub spheres_per_axis: Option<usize>,

    #[arg(long)]
    pub restitution: Option<f32>,

    /// Simulated seconds per wall-clock second.
    #[arg(long)]
    pub fast_forward: Option<f32>,

    /// Seed for the lattice velocities.
    #[arg(long)]
    pub seed: Option<u64>,

    #[arg(long, default_value_t = 600)]
    pub frames: u64,

    /// Frame rate to pace wall-clock runs at. Zero disables pacing.
    #[arg(long, default_value_t = 60.0)]
    pub fps: f32,

    /// Advance by this many seconds per frame, unpaced, instead of
    /// measuring the wall clock.
    #[arg(long)]
    pub fixed_dt: Option<f32>,

    /// Log progress every N frames. Zero logs only the summary.
    #[arg(long, default_value_t = 50)]
    pub log_every: u64,
}

impl Default for Args {
    fn default() -> Self {
        Self::parse_from(["bounce"])
    }
}
