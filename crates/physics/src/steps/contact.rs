use tracing::{debug, trace};

use super::TickReport;
use crate::collision::{resolve_sphere_collision, Body};
use crate::types::{PhysParams, Sphere, Vec3};

/// Scan the partners `j > i` of sphere `i` in index order and apply the
/// first collision the resolver accepts.
///
/// Partners already resolved this tick are skipped, and the scan stops at
/// the first accepted collision, so each body takes part in at most one
/// event per tick. Returns the partner index on success.
pub(crate) fn resolve_first_partner(
    spheres: &mut [Sphere],
    i: usize,
    tentative: Vec3,
    resolved: &[bool],
    dt: f32,
    params: &PhysParams,
    report: &mut TickReport,
) -> Option<usize> {
    let broad_phase_distance = 2.0 * params.radius;

    for j in (i + 1)..spheres.len() {
        if resolved[j] {
            continue;
        }
        if tentative.distance(spheres[j].extrapolate(dt)) >= broad_phase_distance {
            continue;
        }

        let (head, tail) = spheres.split_at_mut(j);
        let (sphere_a, sphere_b) = (&mut head[i], &mut tail[0]);

        match resolve_sphere_collision(
            params.restitution,
            &Body::from_sphere(sphere_a, params),
            &Body::from_sphere(sphere_b, params),
        ) {
            Ok(resolution) => {
                debug!(i, j, "sphere collision resolved");
                sphere_a.pos = resolution.pos_a;
                sphere_b.pos = resolution.pos_b;
                sphere_a.vel = resolution.vel_a;
                sphere_b.vel = resolution.vel_b;
                report.sphere_collisions += 1;
                return Some(j);
            }
            Err(rejection) => {
                trace!(i, j, %rejection, "broad-phase hit rejected");
                report.record_rejection(rejection);
            }
        }
    }

    None
}
