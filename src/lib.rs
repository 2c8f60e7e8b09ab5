//! # hexapod-robot
//!
//! Forward kinematics for six-legged walking robots.
//!
//! Given fixed body and leg measurements plus per-leg joint angles, the crate
//! places every leg segment endpoint (coxia, femur, tibia tip) in a
//! body-centered frame and estimates which feet rest on the ground plane.
//! Inverse kinematics, gait sequencing and actuation are left to the caller: they
//! supply joint angles and consume [`Linkage`] poses and [`GroundContact`] sets.
//!
//! The body frame has its origin at the center of gravity, `+y` towards the
//! head and `+z` up. Lengths are in whatever unit the measurements use; angles
//! are in degrees.

pub mod contact;
pub mod error;
pub mod hexagon;
pub mod hexapod;
pub mod linkage;
pub mod point;
pub mod transform;

pub use contact::*;
pub use error::*;
pub use hexagon::*;
pub use hexapod::*;
pub use linkage::*;
pub use point::*;
pub use transform::*;
