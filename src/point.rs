//! Labeled 3D coordinates and frame changes.

use crate::transform::Transform;
use glam::DVec3;
use serde::{Deserialize, Serialize};

/// A 3D coordinate with an optional, purely advisory label.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    /// Not propagated by frame changes.
    pub name: Option<String>,
}

impl Point {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self {
            x,
            y,
            z,
            name: None,
        }
    }

    pub const fn origin() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// Returns a copy of this point carrying `name`.
    pub fn with_name(self, name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..self
        }
    }

    /// Re-expresses this point in the parent frame of `frame`.
    ///
    /// The receiver's coordinates are taken to be in the child frame of `frame`
    /// (the frame whose pose `frame` describes). The result is unnamed.
    pub fn with_respect_to(&self, frame: &Transform) -> Point {
        frame.transform_point3(self.to_vec3()).into()
    }

    pub fn to_vec3(&self) -> DVec3 {
        DVec3::new(self.x, self.y, self.z)
    }
}

impl Default for Point {
    fn default() -> Self {
        Self::origin()
    }
}

impl From<DVec3> for Point {
    fn from(v: DVec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<&Point> for DVec3 {
    fn from(p: &Point) -> Self {
        p.to_vec3()
    }
}
