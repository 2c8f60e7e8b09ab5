//! Full-robot model: one [`Hexagon`] body with a [`Linkage`] at each vertex.
//!
//! Construct a [`VirtualHexapod`] from a [`HexapodConfig`] (or the six raw
//! measurements), re-pose its legs through [`VirtualHexapod::re_pose`] on each
//! control tick, then ask [`VirtualHexapod::find_feet_on_ground`] which feet
//! form the support set.

use crate::contact::{ContactConfig, ContactSet, feet_on_ground};
use crate::error::{Result, check_measurement};
use crate::hexagon::{BodyDimensions, Hexagon, LegPosition};
use crate::linkage::{JointAngles, Linkage, LinkageDimensions, Mount};
use crate::point::Point;
use serde::{Deserialize, Serialize};

/// Measurements of a hexapod. Every leg shares the same segment lengths.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct HexapodConfig {
    /// Segment lengths shared by all six legs.
    pub linkage: LinkageDimensions,
    /// Shape of the body hexagon.
    pub body: BodyDimensions,
    /// Tuning for the ground-contact heuristic.
    #[serde(default)]
    pub contact: ContactConfig,
}

impl HexapodConfig {
    /// Checks every measurement and the contact tolerance are finite and non-negative.
    pub fn validate(&self) -> Result<()> {
        self.linkage.validate()?;
        self.body.validate()?;
        check_measurement("tolerance", self.contact.tolerance)
    }
}

/// Feet judged to be on the floor, with the chosen pivot.
#[derive(Clone, Debug)]
pub struct GroundContact<'a> {
    /// Lowest foot first.
    pub feet: Vec<&'a Linkage>,
    /// Anchor leg for downstream stability computations; the first of `feet`.
    pub pivot: &'a Linkage,
}

/// A six-legged robot at some pose.
///
/// Legs are indexed like the body vertices; see [`LegPosition`].
#[derive(Clone, Debug, Serialize)]
pub struct VirtualHexapod {
    config: HexapodConfig,
    body: Hexagon,
    legs: [Linkage; 6],
}

impl VirtualHexapod {
    /// Builds the body and mounts a neutral leg at every vertex.
    pub fn new(config: HexapodConfig) -> Result<Self> {
        config.validate()?;

        let body = Hexagon::new(config.body)?;
        let mount_leg = |position: LegPosition| -> Result<Linkage> {
            let mount = Mount::new(position.mount_heading(), body.vertex(position).clone());
            Ok(Linkage::neutral(config.linkage, mount)?.with_name(position.name()))
        };
        let [p0, p1, p2, p3, p4, p5] = LegPosition::ALL;
        let legs = [
            mount_leg(p0)?,
            mount_leg(p1)?,
            mount_leg(p2)?,
            mount_leg(p3)?,
            mount_leg(p4)?,
            mount_leg(p5)?,
        ];

        log::debug!(
            "hexapod built: linkage {:?}, body {:?}",
            config.linkage,
            config.body
        );

        Ok(Self { config, body, legs })
    }

    /// Convenience for [`new`](Self::new) taking the six raw measurements.
    pub fn from_measurements(a: f64, b: f64, c: f64, f: f64, m: f64, s: f64) -> Result<Self> {
        Self::new(HexapodConfig {
            linkage: LinkageDimensions::new(a, b, c)?,
            body: BodyDimensions::new(f, m, s)?,
            contact: ContactConfig::default(),
        })
    }

    pub fn config(&self) -> &HexapodConfig {
        &self.config
    }

    /// Segment lengths every leg was built with.
    pub fn linkage_dimensions(&self) -> &LinkageDimensions {
        &self.config.linkage
    }

    /// Measurements the body hexagon was built from.
    pub fn body_dimensions(&self) -> &BodyDimensions {
        &self.config.body
    }

    pub fn body(&self) -> &Hexagon {
        &self.body
    }

    /// All legs, in [`LegPosition`] order.
    pub fn legs(&self) -> &[Linkage; 6] {
        &self.legs
    }

    pub fn leg(&self, position: LegPosition) -> &Linkage {
        &self.legs[position]
    }

    /// Re-poses one leg; `None` keeps that angle. See [`Linkage::re_pose`].
    ///
    /// Legs cannot be replaced or moved, so each stays mounted at its vertex.
    pub fn re_pose(
        &mut self,
        position: LegPosition,
        alpha: Option<f64>,
        beta: Option<f64>,
        gamma: Option<f64>,
    ) -> Result<()> {
        self.legs[position].re_pose(alpha, beta, gamma)
    }

    /// Sets all three joint angles of one leg. See [`Linkage::save_pose`].
    pub fn save_pose(&mut self, position: LegPosition, angles: JointAngles) -> Result<()> {
        self.legs[position].save_pose(angles)
    }

    /// Every foot position, in leg order.
    pub fn toes(&self) -> [Point; 6] {
        self.legs.each_ref().map(|leg| leg.toe().clone())
    }

    /// Floor height of every foot, in leg order.
    pub fn floor_heights(&self) -> [f64; 6] {
        self.legs.each_ref().map(Linkage::floor_height)
    }

    /// Runs the ground-contact heuristic and reports leg positions.
    pub fn contact_set(&self) -> Option<ContactSet> {
        feet_on_ground(&self.floor_heights(), &self.config.contact)
    }

    /// Runs the ground-contact heuristic.
    ///
    /// `None` means no foot is below the body-origin plane; callers should treat
    /// the robot as airborne rather than as a fault.
    pub fn find_feet_on_ground(&self) -> Option<GroundContact<'_>> {
        let ContactSet { feet, pivot } = self.contact_set()?;
        Some(GroundContact {
            feet: feet.into_iter().map(|position| self.leg(position)).collect(),
            pivot: self.leg(pivot),
        })
    }
}
