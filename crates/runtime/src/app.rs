//! # Headless Frame Loop
//!
//! Builds the simulation from a scene (or the defaults), then steps it once
//! per frame with the time handed out by a [`FrameClock`]. Each frame takes
//! a snapshot of the drawing records, which is what a renderer would upload.

use std::time::{Duration, Instant};

use anyhow::{bail, Context, Result};
use physics::{PhysicsSim, TickReport};
use scene::Scene;
use tracing::{debug, info};

use crate::cli::Args;
use crate::clock::FrameClock;

/// Totals over a finished run.
#[derive(Clone, Debug, PartialEq)]
pub struct RunSummary {
    pub frames: u64,
    pub simulated_seconds: f32,
    pub spheres: usize,
    pub totals: TickReport,
    pub kinetic_energy: f32,
}

/// Load the scene named by `args` and apply the command-line overrides.
///
/// # Errors
///
/// Fails if the scene file cannot be read or parsed.
pub fn load_scene(args: &Args) -> Result<Scene> {
    let mut scene = match &args.scene {
        Some(path) => Scene::from_path(path)?,
        None => Scene::default(),
    };
    if let Some(n) = args.spheres_per_axis {
        scene.spheres_per_axis = n;
    }
    if let Some(restitution) = args.restitution {
        scene.restitution = restitution;
    }
    if let Some(fast_forward) = args.fast_forward {
        scene.fast_forward = fast_forward;
    }
    if args.seed.is_some() {
        scene.seed = args.seed;
    }
    Ok(scene)
}

fn build_clock(args: &Args, fast_forward: f32) -> Result<FrameClock> {
    match args.fixed_dt {
        Some(dt) => {
            let interval = Duration::try_from_secs_f32(dt)
                .ok()
                .filter(|d| !d.is_zero())
                .with_context(|| {
                    format!("--fixed-dt must be a positive number of seconds, got {dt}")
                })?;
            Ok(FrameClock::fixed(interval, fast_forward))
        }
        None => Ok(FrameClock::wall(fast_forward)),
    }
}

/// Run the frame loop for `args.frames` frames.
///
/// # Errors
///
/// Returns scene loading and configuration errors, or a bad frame setting.
pub fn run(args: &Args) -> Result<RunSummary> {
    if !(args.fps.is_finite() && args.fps >= 0.0) {
        bail!("--fps must be a non-negative number, got {}", args.fps);
    }

    let scene = load_scene(args)?;
    let fast_forward = scene.fast_forward;
    let source = args
        .scene
        .as_ref()
        .map_or_else(|| "defaults".to_owned(), |p| p.display().to_string());
    let mut sim = scene
        .into_sim()
        .with_context(|| format!("building simulation from {source}"))?;

    let mut clock = build_clock(args, fast_forward)?;
    let pacing = if clock.is_fixed() || args.fps <= 0.0 {
        None
    } else {
        Duration::try_from_secs_f32(args.fps.recip()).ok()
    };

    info!(
        spheres = sim.spheres().len(),
        frames = args.frames,
        fast_forward,
        "starting simulation loop"
    );

    let mut totals = TickReport::default();
    let mut simulated_seconds = 0.0_f32;
    for frame in 1..=args.frames {
        let frame_start = Instant::now();

        let dt = clock.tick();
        totals += sim.advance(dt);
        simulated_seconds += dt;

        let snapshot = sim.instance_bytes();
        debug!(frame, bytes = snapshot.len(), "frame snapshot");

        if args.log_every > 0 && frame % args.log_every == 0 {
            log_progress(frame, &sim);
        }

        if let Some(frame_duration) = pacing {
            let frame_time = frame_start.elapsed();
            if frame_time < frame_duration {
                std::thread::sleep(frame_duration - frame_time);
            }
        }
    }

    let summary = RunSummary {
        frames: args.frames,
        simulated_seconds,
        spheres: sim.spheres().len(),
        totals,
        kinetic_energy: sim.total_kinetic_energy(),
    };
    info!(
        frames = summary.frames,
        simulated_seconds = summary.simulated_seconds,
        wall_bounces = summary.totals.wall_bounces,
        sphere_collisions = summary.totals.sphere_collisions,
        rejections = summary.totals.rejections(),
        kinetic_energy = summary.kinetic_energy,
        "simulation finished"
    );
    Ok(summary)
}

fn log_progress(frame: u64, sim: &PhysicsSim) {
    let tick = sim.last_tick();
    info!(
        frame,
        kinetic_energy = sim.total_kinetic_energy(),
        total_energy = sim.total_energy(),
        wall_bounces = tick.wall_bounces,
        sphere_collisions = tick.sphere_collisions,
        rejections = tick.rejections(),
        "frame complete"
    );
}
