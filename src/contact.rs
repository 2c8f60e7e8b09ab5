//! Ground-contact estimation from foot floor heights.
//!
//! This is a heuristic, not a contact solver. It assumes at least three feet sit
//! near the lowest plane and accepts every foot within a fixed absolute
//! tolerance of the third-lowest one. No ground plane is fitted.

use crate::hexagon::LegPosition;
use serde::{Deserialize, Serialize};

/// Default for [`ContactConfig::tolerance`].
pub const TOLERANCE: f64 = 2.0;

/// Tuning for [`feet_on_ground`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ContactConfig {
    /// How far above the third-lowest foot, in leg length units, a foot may sit
    /// and still count as touching the floor.
    pub tolerance: f64,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            tolerance: TOLERANCE,
        }
    }
}

/// Legs judged to be on the floor, lowest first.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSet {
    /// Never empty; ordered by floor height descending, then by leg index.
    pub feet: Vec<LegPosition>,
    /// The first entry of `feet`.
    pub pivot: LegPosition,
}

/// Estimates which feet touch the ground from each leg's floor height.
///
/// Returns `None` when no foot reaches below the body-origin plane.
///
/// 1. Order legs by floor height, highest first; ties keep leg order.
/// 2. If the highest value is `<= 0` the robot is airborne.
/// 3. `threshold = third height - tolerance`.
/// 4. Take the longest prefix of the ordering whose heights are all `>= threshold`.
/// 5. The pivot is the first foot of that prefix.
pub fn feet_on_ground(heights: &[f64; 6], config: &ContactConfig) -> Option<ContactSet> {
    // `+ 0.0` folds -0.0 into 0.0 so signed zeros tie
    let height = |leg: LegPosition| heights[leg] + 0.0;

    let mut order = LegPosition::ALL;
    // sort_by is stable, so equal heights stay in leg order
    order.sort_by(|&l, &r| height(r).total_cmp(&height(l)));

    let [first, _, third, ..] = order;
    let highest = heights[first];
    if highest <= 0.0 {
        log::debug!("no foot below the body plane (highest floor height {highest:.3})");
        return None;
    }

    let threshold = heights[third] - config.tolerance;
    let feet: Vec<LegPosition> = order
        .iter()
        .copied()
        .take_while(|&leg| heights[leg] >= threshold)
        .collect();

    // Empty only when a negative tolerance pushes the threshold above the top foot.
    let pivot = *feet.first()?;

    log::debug!(
        "contact: sorted heights {:?}, threshold {threshold:.3}, feet {:?}, pivot {pivot}",
        order.map(|leg| (leg.name(), heights[leg])),
        feet.iter().map(|leg| leg.name()).collect::<Vec<_>>(),
    );

    Some(ContactSet { feet, pivot })
}
