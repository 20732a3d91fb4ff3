//! Sphere-wall contact for the axis-aligned cube around the origin

use crate::types::{PhysParams, Sphere};

/// Axis of the wall pair that was hit.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum WallAxis {
    X,
    Y,
    Z,
}

/// Find the first wall (x, then y, then z) that a sphere whose center would
/// move to `tentative` crosses.
#[must_use]
pub fn detect_wall_collision(tentative: [f32; 3], params: &PhysParams) -> Option<WallAxis> {
    let limit = params.wall_limit();
    [WallAxis::X, WallAxis::Y, WallAxis::Z]
        .into_iter()
        .zip(tentative)
        .find_map(|(axis, coord)| (coord.abs() > limit).then_some(axis))
}

/// Reflect the velocity component normal to the wall, scaled by restitution.
///
/// The position is left where it is, so the sphere may sit slightly past the
/// wall for a tick; the reversed velocity carries it back.
pub fn resolve_wall_collision(sphere: &mut Sphere, axis: WallAxis, restitution: f32) {
    let component = match axis {
        WallAxis::X => &mut sphere.vel.x,
        WallAxis::Y => &mut sphere.vel.y,
        WallAxis::Z => &mut sphere.vel.z,
    };
    *component = -restitution * *component;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Vec3;

    #[test]
    fn first_axis_wins() {
        let params = PhysParams::default();
        assert_eq!(detect_wall_collision([0.9, -0.9, 0.9], &params), Some(WallAxis::X));
        assert_eq!(detect_wall_collision([0.0, -0.9, 0.9], &params), Some(WallAxis::Y));
        assert_eq!(detect_wall_collision([0.0, 0.0, -0.85], &params), Some(WallAxis::Z));
        assert_eq!(detect_wall_collision([0.8, -0.8, 0.8], &params), None);
    }

    #[test]
    fn reflection_scales_only_the_normal_component() {
        let mut sphere = Sphere::new(Vec3::new(0.0, -0.85, 0.0), Vec3::new(0.5, -2.0, 0.25));
        resolve_wall_collision(&mut sphere, WallAxis::Y, 0.5);
        assert_eq!(sphere.vel, Vec3::new(0.5, 1.0, 0.25));
        assert_eq!(sphere.pos, Vec3::new(0.0, -0.85, 0.0));
    }
}
