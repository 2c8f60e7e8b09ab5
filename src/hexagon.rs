//! Static hexagonal body layout.
//!
//! ```text
//!       |-f-|
//!       *---*---*--------        x2          x1
//!      /    |    \     |          \         /
//!     /     |     \    s           *---*---*
//!    /      |      \   |          /    |    \
//!   *------cog------* ---   x3 --*----cog----*-- x0
//!    \      |      /|             \    |    /
//!     \     |     / |              *---*---*
//!      \    |    /  |             /         \
//!       *---*---*   |           x4           x5
//!           |---m---|
//! ```
//!
//! `y` points towards the head, `x` to the right. `x0..x5` are the mount headings
//! of the legs attached at each vertex.

use crate::error::{Result, check_measurement};
use crate::point::Point;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::ops::{Index, IndexMut};

/// Vertex names, in leg order.
pub const VERTEX_NAMES: [&str; 6] = [
    "right-middle",
    "right-front",
    "left-front",
    "left-middle",
    "left-back",
    "right-back",
];

/// Mount heading (degrees about body Z) of the leg at each vertex, in leg order.
pub const MOUNT_HEADINGS: [f64; 6] = [0.0, 45.0, 135.0, 180.0, 225.0, 315.0];

/// One of the six vertex slots a leg attaches to.
///
/// The discriminant is the shared index into [`VERTEX_NAMES`],
/// [`MOUNT_HEADINGS`], the body vertices and the hexapod's legs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LegPosition {
    RightMiddle = 0,
    RightFront = 1,
    LeftFront = 2,
    LeftMiddle = 3,
    LeftBack = 4,
    RightBack = 5,
}

impl LegPosition {
    pub const ALL: [LegPosition; 6] = [
        LegPosition::RightMiddle,
        LegPosition::RightFront,
        LegPosition::LeftFront,
        LegPosition::LeftMiddle,
        LegPosition::LeftBack,
        LegPosition::RightBack,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn name(self) -> &'static str {
        VERTEX_NAMES[self as usize]
    }

    pub const fn mount_heading(self) -> f64 {
        MOUNT_HEADINGS[self as usize]
    }
}

impl Display for LegPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<usize> for LegPosition {
    type Error = usize;

    fn try_from(value: usize) -> std::result::Result<Self, Self::Error> {
        Self::ALL.get(value).copied().ok_or(value)
    }
}

impl<T> Index<LegPosition> for [T; 6] {
    type Output = T;

    fn index(&self, position: LegPosition) -> &Self::Output {
        &self[position.index()]
    }
}

impl<T> IndexMut<LegPosition> for [T; 6] {
    fn index_mut(&mut self, position: LegPosition) -> &mut Self::Output {
        &mut self[position.index()]
    }
}

/// Body shape: front/back vertex offset `f`, middle vertex offset `m`, half-depth `s`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BodyDimensions {
    /// X offset of the front and back vertices from the center line.
    pub f: f64,
    /// X offset of the middle vertices.
    pub m: f64,
    /// Y offset of the front and back vertices; also the head's distance from the cog.
    pub s: f64,
}

impl BodyDimensions {
    /// Validated constructor; see [`validate`](Self::validate).
    pub fn new(f: f64, m: f64, s: f64) -> Result<Self> {
        let dims = Self { f, m, s };
        dims.validate()?;
        Ok(dims)
    }

    /// Every measurement must be finite and non-negative.
    pub fn validate(&self) -> Result<()> {
        check_measurement("f", self.f)?;
        check_measurement("m", self.m)?;
        check_measurement("s", self.s)
    }
}

/// The body: six named mount vertices, center of gravity and head point.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Hexagon {
    dims: BodyDimensions,
    cog: Point,
    head: Point,
    vertices: [Point; 6],
}

impl Hexagon {
    pub fn new(dims: BodyDimensions) -> Result<Self> {
        dims.validate()?;
        let BodyDimensions { f, m, s } = dims;

        let corners = [
            (m, 0.0),
            (f, s),
            (-f, s),
            (-m, 0.0),
            (-f, -s),
            (f, -s),
        ];
        let vertices = std::array::from_fn(|i| {
            let (x, y) = corners[i];
            Point::new(x, y, 0.0).with_name(VERTEX_NAMES[i])
        });

        Ok(Self {
            dims,
            cog: Point::origin(),
            head: Point::new(0.0, s, 0.0),
            vertices,
        })
    }

    pub fn dimensions(&self) -> &BodyDimensions {
        &self.dims
    }

    /// Center of gravity, the body origin.
    pub fn cog(&self) -> &Point {
        &self.cog
    }

    /// Head reference point at `(0, s, 0)`.
    pub fn head(&self) -> &Point {
        &self.head
    }

    /// Mount vertices in [`LegPosition`] order, each named after its slot.
    pub fn vertices(&self) -> &[Point; 6] {
        &self.vertices
    }

    pub fn vertex(&self, position: LegPosition) -> &Point {
        &self.vertices[position]
    }
}
