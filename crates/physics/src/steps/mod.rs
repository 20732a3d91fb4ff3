//! # Per-Tick Passes
//!
//! The pieces [`crate::PhysicsSim::advance`] is assembled from: free motion
//! under gravity, and the contact sweep that decides which bodies skip it.

mod contact;
mod integration;

pub(crate) use contact::resolve_first_partner;
pub(crate) use integration::commit_free_motion;

use std::ops::AddAssign;

use crate::collision::CollisionRejection;

/// What happened during one tick.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct TickReport {
    pub wall_bounces: usize,
    pub sphere_collisions: usize,
    /// Broad-phase hits rejected because the pair already overlapped.
    pub overlapping: usize,
    /// Broad-phase hits rejected for lack of relative motion.
    pub no_approach: usize,
    /// Broad-phase hits whose trajectories never touch.
    pub missed: usize,
}

impl TickReport {
    pub(crate) fn record_rejection(&mut self, rejection: CollisionRejection) {
        match rejection {
            CollisionRejection::AlreadyOverlapping => self.overlapping += 1,
            CollisionRejection::NoApproach => self.no_approach += 1,
            CollisionRejection::NoCollisionOnPath => self.missed += 1,
        }
    }

    /// Bodies taken out of free motion this tick.
    #[must_use]
    pub fn resolved_bodies(&self) -> usize {
        self.wall_bounces + 2 * self.sphere_collisions
    }

    #[must_use]
    pub fn rejections(&self) -> usize {
        self.overlapping + self.no_approach + self.missed
    }
}

impl AddAssign for TickReport {
    fn add_assign(&mut self, other: Self) {
        self.wall_bounces += other.wall_bounces;
        self.sphere_collisions += other.sphere_collisions;
        self.overlapping += other.overlapping;
        self.no_approach += other.no_approach;
        self.missed += other.missed;
    }
}
