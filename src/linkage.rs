//! Three-segment leg chain (coxia, femur, tibia) and its forward kinematics.
//!
//! At the neutral pose (`alpha = beta = gamma = 0`) the coxia lies along the
//! mount's X axis, the femur continues it in a straight line and the tibia hangs
//! perpendicular to the femur, straight down.
//!
//! - `alpha` yaws the whole chain about the mount's Z axis.
//! - `beta` pitches the femur up, relative to the coxia.
//! - `gamma` swings the tibia relative to the line perpendicular to the femur.

use crate::error::{Result, check_angle, check_measurement, check_mount};
use crate::point::Point;
use crate::transform::{y_rotate_x_translate, z_rotate_xy_translate};
use serde::{Deserialize, Serialize};

/// Names given to `p1`, `p2` and `p3` of every pose.
pub const POINT_NAMES: [&str; 3] = ["coxia", "femur", "tibia"];

/// Segment lengths of one leg: coxia `a`, femur `b`, tibia `c`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LinkageDimensions {
    /// Coxia length, from the body-contact point to the coxia-femur joint.
    pub a: f64,
    /// Femur length, from the coxia-femur joint to the femur-tibia joint.
    pub b: f64,
    /// Tibia length, from the femur-tibia joint to the foot.
    pub c: f64,
}

impl LinkageDimensions {
    /// Validated constructor; see [`validate`](Self::validate).
    pub fn new(a: f64, b: f64, c: f64) -> Result<Self> {
        let dims = Self { a, b, c };
        dims.validate()?;
        Ok(dims)
    }

    /// Every length must be finite and non-negative.
    pub fn validate(&self) -> Result<()> {
        check_measurement("a", self.a)?;
        check_measurement("b", self.b)?;
        check_measurement("c", self.c)
    }
}

/// Joint angles in degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct JointAngles {
    /// Yaw at the body mount.
    pub alpha: f64,
    /// Pitch at the coxia-femur joint.
    pub beta: f64,
    /// Pitch at the femur-tibia joint.
    pub gamma: f64,
}

impl JointAngles {
    pub const NEUTRAL: Self = Self::new(0.0, 0.0, 0.0);

    pub const fn new(alpha: f64, beta: f64, gamma: f64) -> Self {
        Self { alpha, beta, gamma }
    }

    pub fn validate(&self) -> Result<()> {
        check_angle("alpha", self.alpha)?;
        check_angle("beta", self.beta)?;
        check_angle("gamma", self.gamma)
    }
}

/// Where and how a leg attaches to the body.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Mount {
    /// Heading of the leg's local X axis about the body Z axis, in degrees.
    pub heading: f64,
    /// Body-contact point in body coordinates.
    pub origin: Point,
}

impl Mount {
    pub fn new(heading: f64, origin: Point) -> Self {
        Self { heading, origin }
    }

    /// Heading and origin coordinates must be finite.
    pub fn validate(&self) -> Result<()> {
        check_mount("heading", self.heading)?;
        check_mount("origin.x", self.origin.x)?;
        check_mount("origin.y", self.origin.y)?;
        check_mount("origin.z", self.origin.z)
    }
}

/// Segment endpoints of one leg in body coordinates.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LegPose {
    /// Body-contact point; always the mount origin.
    pub p0: Point,
    /// Coxia tip.
    pub p1: Point,
    /// Femur tip.
    pub p2: Point,
    /// Tibia tip (the foot).
    pub p3: Point,
}

/// Computes the segment endpoints of a leg.
///
/// Pure function of its inputs; [`Linkage`] stores only the latest result.
pub fn pose(dims: &LinkageDimensions, angles: &JointAngles, mount: &Mount) -> LegPose {
    // frame_ab is the pose of frame b wrt frame a
    let frame_01 = y_rotate_x_translate(-angles.beta, dims.a);
    let frame_12 = y_rotate_x_translate(90.0 - angles.gamma, dims.b);
    let frame_23 = y_rotate_x_translate(0.0, dims.c);

    let frame_02 = frame_01 * frame_12;
    let frame_03 = frame_02 * frame_23;

    let mount_frame = z_rotate_xy_translate(
        mount.heading + angles.alpha,
        mount.origin.x,
        mount.origin.y,
    );

    // Relative to the body-contact point first, then to the body origin.
    let q0 = Point::origin();
    let q1 = q0.with_respect_to(&frame_01);
    let q2 = q0.with_respect_to(&frame_02);
    let q3 = q0.with_respect_to(&frame_03);

    let [coxia, femur, tibia] = POINT_NAMES;
    LegPose {
        p0: mount.origin.clone(),
        p1: q1.with_respect_to(&mount_frame).with_name(coxia),
        p2: q2.with_respect_to(&mount_frame).with_name(femur),
        p3: q3.with_respect_to(&mount_frame).with_name(tibia),
    }
}

/// A leg: fixed geometry and mount, mutable joint angles, derived endpoints.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Linkage {
    name: Option<String>,
    dims: LinkageDimensions,
    mount: Mount,
    angles: JointAngles,
    pose: LegPose,
}

impl Linkage {
    /// Creates a leg at `angles`, validating the lengths, the mount and the angles.
    pub fn new(dims: LinkageDimensions, angles: JointAngles, mount: Mount) -> Result<Self> {
        dims.validate()?;
        mount.validate()?;
        angles.validate()?;

        let pose = pose(&dims, &angles, &mount);
        Ok(Self {
            name: None,
            dims,
            mount,
            angles,
            pose,
        })
    }

    /// Creates a leg at the neutral pose.
    pub fn neutral(dims: LinkageDimensions, mount: Mount) -> Result<Self> {
        Self::new(dims, JointAngles::NEUTRAL, mount)
    }

    /// Labels the leg, typically with its vertex name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets all three joint angles and recomputes the endpoints.
    ///
    /// On error nothing changes.
    pub fn save_pose(&mut self, angles: JointAngles) -> Result<()> {
        angles.validate()?;

        self.angles = angles;
        self.pose = pose(&self.dims, &self.angles, &self.mount);

        log::trace!(
            "leg {} posed at {:?}: toe ({:.3}, {:.3}, {:.3})",
            self.name.as_deref().unwrap_or("<unnamed>"),
            self.angles,
            self.pose.p3.x,
            self.pose.p3.y,
            self.pose.p3.z,
        );
        Ok(())
    }

    /// Changes any subset of the joint angles; `None` keeps the current value.
    ///
    /// `Some(0.0)` is an explicit zero target, not "keep".
    pub fn re_pose(
        &mut self,
        alpha: Option<f64>,
        beta: Option<f64>,
        gamma: Option<f64>,
    ) -> Result<()> {
        let angles = JointAngles {
            alpha: alpha.unwrap_or(self.angles.alpha),
            beta: beta.unwrap_or(self.angles.beta),
            gamma: gamma.unwrap_or(self.angles.gamma),
        };
        self.save_pose(angles)
    }

    /// The foot position in body coordinates.
    pub fn toe(&self) -> &Point {
        &self.pose.p3
    }

    /// Negated foot z: larger means the foot reaches further below the body plane.
    pub fn floor_height(&self) -> f64 {
        -self.pose.p3.z
    }

    /// Label set by [`with_name`](Self::with_name), if any.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn dimensions(&self) -> &LinkageDimensions {
        &self.dims
    }

    pub fn mount(&self) -> &Mount {
        &self.mount
    }

    /// Current joint angles, in degrees.
    pub fn angles(&self) -> &JointAngles {
        &self.angles
    }

    /// Endpoints from the latest pose.
    pub fn pose(&self) -> &LegPose {
        &self.pose
    }

    /// Body-contact point (the mount origin).
    pub fn p0(&self) -> &Point {
        &self.pose.p0
    }

    /// Coxia tip.
    pub fn p1(&self) -> &Point {
        &self.pose.p1
    }

    /// Femur tip.
    pub fn p2(&self) -> &Point {
        &self.pose.p2
    }

    /// Tibia tip; same as [`toe`](Self::toe).
    pub fn p3(&self) -> &Point {
        &self.pose.p3
    }

    /// `p0` through `p3`, proximal to distal.
    pub fn points(&self) -> [&Point; 4] {
        [&self.pose.p0, &self.pose.p1, &self.pose.p2, &self.pose.p3]
    }
}
