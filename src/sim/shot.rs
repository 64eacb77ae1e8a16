//! Shot planning
//!
//! Picks the nearer hoop and solves for a launch velocity whose ballistic arc
//! reaches rim height exactly above the rim center.

use glam::Vec3;

use super::court::{Hoop, HoopSide};
use crate::consts::MAX_POWER;
use crate::{from_horizontal, horizontal};

/// Below this court-plane distance the shot is treated as straight up
pub const MIN_SHOT_DISTANCE: f32 = 1e-4;

/// A planned shot
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShotPlan {
    pub target: HoopSide,
    /// Court-plane distance to the rim center
    pub distance: f32,
    /// Court-plane launch speed
    pub horizontal_speed: f32,
    pub velocity: Vec3,
    /// Time at which the arc reaches the target (apex time for vertical shots)
    pub flight_time: f32,
}

impl ShotPlan {
    /// Closed-form position along the arc, ignoring collisions
    pub fn position_at(&self, start: Vec3, gravity: f32, t: f32) -> Vec3 {
        start + self.velocity * t + Vec3::new(0.0, 0.5 * gravity * t * t, 0.0)
    }
}

/// Launch speed along the court plane for a given distance and power
///
/// Longer shots need more speed; power scales it from 0.8x (power 0) to
/// 1.4x (power 100).
#[inline]
pub fn horizontal_launch_speed(distance: f32, power: u32) -> f32 {
    let power = power.min(MAX_POWER) as f32;
    (8.0 + 0.3 * distance) * (0.8 + 0.6 * power / 100.0)
}

/// The hoop whose rim center is nearest to `pos`; the first wins ties
pub fn nearest_hoop(pos: Vec3, hoops: &[Hoop]) -> Option<&Hoop> {
    hoops.iter().min_by(|a, b| {
        a.rim_center
            .distance(pos)
            .partial_cmp(&b.rim_center.distance(pos))
            .unwrap_or(std::cmp::Ordering::Equal)
    })
}

/// Plan a shot from `ball_pos` at the nearest hoop
///
/// `gravity` is the (negative) vertical acceleration. Returns `None` only
/// when `hoops` is empty.
pub fn plan_shot(ball_pos: Vec3, power: u32, hoops: &[Hoop], gravity: f32) -> Option<ShotPlan> {
    let hoop = nearest_hoop(ball_pos, hoops)?;

    let to_target = horizontal(hoop.rim_center) - horizontal(ball_pos);
    let distance = to_target.length();
    let dy = hoop.rim_height() - ball_pos.y;

    if distance < MIN_SHOT_DISTANCE {
        // Directly under the rim: throw straight up so the apex sits at rim height
        let vy = (2.0 * gravity.abs() * dy.max(0.0)).sqrt();
        let flight_time = if gravity < 0.0 { vy / -gravity } else { 0.0 };
        return Some(ShotPlan {
            target: hoop.side,
            distance,
            horizontal_speed: 0.0,
            velocity: Vec3::new(0.0, vy, 0.0),
            flight_time,
        });
    }

    let horizontal_speed = horizontal_launch_speed(distance, power);
    let t = distance / horizontal_speed;
    // y(t) = y0 + vy*t + g*t^2/2 must hit rim height
    let vy = (dy - 0.5 * gravity * t * t) / t;
    let flat = to_target / distance * horizontal_speed;

    Some(ShotPlan {
        target: hoop.side,
        distance,
        horizontal_speed,
        velocity: from_horizontal(flat, vy),
        flight_time: t,
    })
}
