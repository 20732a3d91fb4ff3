//! Sphere-sphere collision prediction and response
//!
//! The resolver works in the rest frame of body `b` with body `a` at the
//! origin, rotated so that `b` sits on the local z-axis. In that frame the
//! impact parameter and time to contact have closed forms, so no stepping or
//! overlap search is needed. Velocities are exchanged elastically there,
//! rotated and boosted back, then pulled toward the pair's center-of-mass
//! velocity by the restitution coefficient.

use std::f32::consts::FRAC_PI_2;

use thiserror::Error;

use super::{center_of_mass_velocity, Body};
use crate::types::Vec3;

/// Why a pair was not resolved. None of these are faults: they are the
/// normal outcome of a broad-phase hit that is not a real contact.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionRejection {
    #[error("spheres already overlap")]
    AlreadyOverlapping,
    #[error("spheres have no relative motion")]
    NoApproach,
    #[error("trajectories do not bring the spheres into contact")]
    NoCollisionOnPath,
}

/// State of both bodies at the moment of contact, after the exchange.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CollisionResolution {
    pub pos_a: Vec3,
    pub pos_b: Vec3,
    pub vel_a: Vec3,
    pub vel_b: Vec3,
}

/// Orthonormal frame whose z-axis points along a given direction, described
/// by that direction's polar and azimuthal angles.
#[derive(Copy, Clone, Debug)]
struct PolarFrame {
    sin_theta: f32,
    cos_theta: f32,
    sin_phi: f32,
    cos_phi: f32,
}

impl PolarFrame {
    fn along(direction: Vec3, length: f32) -> Self {
        let theta = clamped_acos(direction.z / length);
        let phi = azimuth(direction.x, direction.y);
        let (sin_theta, cos_theta) = theta.sin_cos();
        let (sin_phi, cos_phi) = phi.sin_cos();
        Self { sin_theta, cos_theta, sin_phi, cos_phi }
    }

    fn to_local(&self, v: Vec3) -> Vec3 {
        let Self { sin_theta: st, cos_theta: ct, sin_phi: sp, cos_phi: cp } = *self;
        Vec3::new(
            ct * cp * v.x + ct * sp * v.y - st * v.z,
            cp * v.y - sp * v.x,
            st * cp * v.x + st * sp * v.y + ct * v.z,
        )
    }

    fn to_world(&self, v: Vec3) -> Vec3 {
        let Self { sin_theta: st, cos_theta: ct, sin_phi: sp, cos_phi: cp } = *self;
        Vec3::new(
            ct * cp * v.x - sp * v.y + st * cp * v.z,
            ct * sp * v.x + cp * v.y + st * sp * v.z,
            ct * v.z - st * v.x,
        )
    }
}

/// Predict whether `a` and `b`, each moving along its current velocity,
/// will touch, and if so where they are at contact and how they leave it.
///
/// `restitution` is 1 for a perfectly elastic exchange and 0 for one where
/// both bodies end at the common center-of-mass velocity. Momentum is
/// conserved for every value in between.
///
/// The returned positions are the contact-time positions, which may lie
/// beyond the caller's current tick.
///
/// # Errors
///
/// Returns a [`CollisionRejection`] when the bodies already overlap, have no
/// relative motion, or pass each other without touching. The inputs are
/// never modified.
pub fn resolve_sphere_collision(
    restitution: f32,
    a: &Body,
    b: &Body,
) -> Result<CollisionResolution, CollisionRejection> {
    let contact_distance = a.radius + b.radius;
    let mass_ratio = b.mass / a.mass;
    let separation = b.pos - a.pos;
    let relative_vel = b.vel - a.vel;
    let cm_vel = center_of_mass_velocity(a, b);

    let distance = separation.length();
    let speed = relative_vel.length();

    if distance < contact_distance {
        return Err(CollisionRejection::AlreadyOverlapping);
    }
    if speed <= 0.0 {
        return Err(CollisionRejection::NoApproach);
    }

    // Velocity of `a` in the rest frame of `b`, expressed with `b` on the z-axis.
    let frame = PolarFrame::along(separation, distance);
    let approach = frame.to_local(-relative_vel);

    let theta_v = clamped_acos(approach.z / speed);
    let phi_v = azimuth(approach.x, approach.y);

    let impact = distance * theta_v.sin() / contact_distance;
    if theta_v > FRAC_PI_2 || impact.abs() > 1.0 {
        return Err(CollisionRejection::NoCollisionOnPath);
    }

    let alpha = (-impact).asin();
    let time_to_contact =
        (distance * theta_v.cos() - contact_distance * (1.0 - impact * impact).sqrt()) / speed;

    let pos_a = a.pos + a.vel * time_to_contact;
    let pos_b = b.pos + b.vel * time_to_contact;

    // Elastic exchange in the local frame; `b` starts at rest there.
    let slope = (theta_v + alpha).tan();
    let (sin_beta, cos_beta) = phi_v.sin_cos();
    let dvz = 2.0 * (approach.z + slope * (cos_beta * approach.x + sin_beta * approach.y))
        / ((1.0 + slope * slope) * (1.0 + mass_ratio));

    let local_b = Vec3::new(slope * cos_beta * dvz, slope * sin_beta * dvz, dvz);
    let local_a = approach - local_b * mass_ratio;

    let vel_a = frame.to_world(local_a) + b.vel;
    let vel_b = frame.to_world(local_b) + b.vel;

    Ok(CollisionResolution {
        pos_a,
        pos_b,
        vel_a: (vel_a - cm_vel) * restitution + cm_vel,
        vel_b: (vel_b - cm_vel) * restitution + cm_vel,
    })
}

/// Rounding can push a cosine ratio just outside `[-1, 1]`.
fn clamped_acos(ratio: f32) -> f32 {
    ratio.clamp(-1.0, 1.0).acos()
}

fn azimuth(x: f32, y: f32) -> f32 {
    if x.abs() + y.abs() > 0.0 {
        y.atan2(x)
    } else {
        0.0
    }
}
