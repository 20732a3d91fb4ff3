use crate::types::{Sphere, Vec3};

/// Move a sphere that took part in no collision this tick: commit the
/// extrapolated position, then apply the gravity impulse.
pub(crate) fn commit_free_motion(sphere: &mut Sphere, tentative: Vec3, gravity: Vec3, dt: f32) {
    sphere.pos = tentative;
    sphere.vel += gravity * dt;
}
