//! # Core Physics Types
//!
//! Plain data shared by every part of the engine: the [`Vec3`] value type,
//! the per-sphere state stored in the simulation arena, the process-wide
//! [`PhysParams`] and the GPU-friendly [`SphereInstance`] handed to a
//! presentation layer.

use std::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign};

/// A 3D vector of `f32` components with value semantics.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3::new(0.0, 0.0, 0.0);

    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    #[must_use]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    #[must_use]
    pub fn length_squared(self) -> f32 {
        self.dot(self)
    }

    /// Euclidean norm.
    #[must_use]
    pub fn length(self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Unit vector pointing the same way.
    ///
    /// The zero vector has no direction: its components come back as NaN
    /// rather than being clamped, so callers must rule that case out first.
    #[must_use]
    pub fn normalize(self) -> Self {
        self / self.length()
    }

    /// Euclidean distance between two points.
    #[must_use]
    pub fn distance(self, other: Self) -> f32 {
        (self - other).length()
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    #[must_use]
    pub const fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }
}

impl From<[f32; 3]> for Vec3 {
    fn from(v: [f32; 3]) -> Self {
        Self::new(v[0], v[1], v[2])
    }
}

impl From<Vec3> for [f32; 3] {
    fn from(v: Vec3) -> Self {
        v.to_array()
    }
}

impl Add for Vec3 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl AddAssign for Vec3 {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
        self.z += rhs.z;
    }
}

impl Sub for Vec3 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl SubAssign for Vec3 {
    fn sub_assign(&mut self, rhs: Self) {
        self.x -= rhs.x;
        self.y -= rhs.y;
        self.z -= rhs.z;
    }
}

impl Mul<f32> for Vec3 {
    type Output = Self;
    fn mul(self, k: f32) -> Self {
        Self::new(self.x * k, self.y * k, self.z * k)
    }
}

impl MulAssign<f32> for Vec3 {
    fn mul_assign(&mut self, k: f32) {
        self.x *= k;
        self.y *= k;
        self.z *= k;
    }
}

impl Div<f32> for Vec3 {
    type Output = Self;
    fn div(self, k: f32) -> Self {
        Self::new(self.x / k, self.y / k, self.z / k)
    }
}

impl Neg for Vec3 {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

/// Mutable state of one sphere in the simulation arena.
///
/// Radius and mass are shared by the whole population and live in
/// [`PhysParams`]; the color is only carried through for rendering.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Sphere {
    pub pos: Vec3,
    pub vel: Vec3,
    pub color: [f32; 3],
}

impl Sphere {
    #[must_use]
    pub const fn new(pos: Vec3, vel: Vec3) -> Self {
        Self {
            pos,
            vel,
            color: [1.0, 1.0, 1.0],
        }
    }

    #[must_use]
    pub const fn with_color(mut self, color: [f32; 3]) -> Self {
        self.color = color;
        self
    }

    /// Position after moving along the current velocity for `dt`.
    #[must_use]
    pub fn extrapolate(&self, dt: f32) -> Vec3 {
        self.pos + self.vel * dt
    }
}

/// Constants shared by every body for the lifetime of a run.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PhysParams {
    pub gravity: Vec3,
    /// Fraction of relative velocity kept by a collision, in `[0, 1]`.
    pub restitution: f32,
    pub radius: f32,
    pub mass: f32,
    /// Distance from the cube's center to each of its walls.
    pub half_width: f32,
}

impl PhysParams {
    /// Largest distance a center may sit from the origin along any axis
    /// before the sphere touches a wall.
    #[must_use]
    pub fn wall_limit(&self) -> f32 {
        self.half_width - self.radius
    }
}

impl Default for PhysParams {
    fn default() -> Self {
        Self {
            gravity: Vec3::new(0.0, -0.98, 0.0),
            restitution: 0.95,
            radius: 0.2,
            mass: 1.0,
            half_width: 1.0,
        }
    }
}

/// Per-frame drawing record for one sphere, laid out for direct upload to
/// a vertex/instance buffer.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SphereInstance {
    pub center: [f32; 3],
    pub radius: f32,
    pub color: [f32; 3],
    pub _pad: f32,
}
