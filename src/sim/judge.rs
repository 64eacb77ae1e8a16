//! Made-basket detection
//!
//! A make is a downward crossing of the target rim plane close to the rim
//! center, counted at most once per attempt.

use super::court::{Hoop, HoopSide};
use super::state::{Ball, BallState};
use crate::settings::Settings;

/// Watches the ball during one attempt
#[derive(Debug, Clone, Default)]
pub struct ScoreJudge {
    target: Option<HoopSide>,
    /// Ball center height at the end of the previous step
    prev_height: f32,
}

impl ScoreJudge {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start watching a new attempt
    pub fn arm(&mut self, target: HoopSide, height: f32) {
        self.target = Some(target);
        self.prev_height = height;
    }

    /// Stop watching (attempt over or ball reset)
    pub fn disarm(&mut self) {
        self.target = None;
    }

    #[inline]
    pub fn target(&self) -> Option<HoopSide> {
        self.target
    }

    /// Check the post-collision ball state; returns `true` on a make
    ///
    /// A make flips the ball to [`BallState::AirborneScored`] so it can never
    /// be counted twice or reported as a miss when it lands.
    pub fn evaluate(&mut self, ball: &mut Ball, hoops: &[Hoop], settings: &Settings) -> bool {
        let prev_height = self.prev_height;
        self.prev_height = ball.pos.y;

        if ball.state != BallState::AirborneUnscored {
            return false;
        }
        let Some(target) = self.target else {
            return false;
        };
        let Some(hoop) = hoops.iter().find(|h| h.side == target) else {
            return false;
        };

        let rim_y = hoop.rim_height();
        let below_rim = ball.bottom() < rim_y;
        let was_above = prev_height > rim_y;
        let descending = ball.vel.y < 0.0;
        let centered =
            hoop.horizontal_distance_to(ball.pos) < settings.make_radius_factor * hoop.rim_radius;

        if was_above && below_rim && descending && centered {
            ball.state = BallState::AirborneScored;
            true
        } else {
            false
        }
    }
}
