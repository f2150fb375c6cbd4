//! Immutable integer 3D coordinate.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An immutable point in 3D block space.
///
/// All operations return new values; a `Point3D` is never mutated in place.
/// Equality and hashing are structural, so points are usable as map keys with
/// deterministic iteration when paired with an ordered map.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Point3D {
    /// East/west coordinate.
    pub x: i32,
    /// Vertical coordinate.
    pub y: i32,
    /// North/south coordinate.
    pub z: i32,
}

impl Point3D {
    /// The origin, (0, 0, 0).
    pub const ORIGIN: Self = Self::new(0, 0, 0);

    /// Create a point at the given coordinates.
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Translate by the given deltas, returning a new point.
    pub const fn add(self, dx: i32, dy: i32, dz: i32) -> Self {
        Self::new(self.x + dx, self.y + dy, self.z + dz)
    }

    /// Squared Euclidean distance to `other`. Always >= 0.
    ///
    /// Widened to `i64` so coordinates anywhere in the `i32` range cannot
    /// overflow the intermediate squares.
    pub const fn distance_squared(self, other: Self) -> i64 {
        let dx = (other.x - self.x) as i64;
        let dy = (other.y - self.y) as i64;
        let dz = (other.z - self.z) as i64;
        dx * dx + dy * dy + dz * dz
    }
}

impl fmt::Display for Point3D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}
