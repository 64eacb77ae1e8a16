//! Collision detection and response for the rim ring and the court floor
//!
//! The rim is modelled in the court plane only: within reach of the ring the
//! ball either drops cleanly through the opening or gets shoved back out and
//! bounced off it. The floor is an infinite plane at court height.

use glam::Vec2;

use super::court::Hoop;
use super::state::Ball;
use crate::settings::Settings;
use crate::{from_horizontal, horizontal};

/// How the ball relates to a rim this step
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RimContact {
    /// Out of reach
    None,
    /// Dropping through the opening, left alone
    CleanPass,
    /// Touching the ring
    Strike {
        /// Court-plane normal pointing from the rim center to the ball
        normal: Vec2,
        /// How far the ball sits inside the ring's reach
        penetration: f32,
    },
}

impl RimContact {
    #[inline]
    pub fn is_strike(&self) -> bool {
        matches!(self, RimContact::Strike { .. })
    }
}

/// What the floor did to the ball this step
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GroundContact {
    /// Not touching the floor
    Airborne,
    /// Bounced; vertical speeds before and after
    Bounce { incoming: f32, outgoing: f32 },
    /// Came to rest. `scored` tells whether the attempt had already been made.
    Settled { scored: bool },
}

/// Reflect velocity off a surface
///
/// Standard reflection: v' = v - 2(v·n)n
#[inline]
pub fn reflect_velocity(velocity: Vec2, normal: Vec2) -> Vec2 {
    velocity - 2.0 * velocity.dot(normal) * normal
}

/// Classify the ball against one rim without touching it
pub fn rim_contact(ball: &Ball, hoop: &Hoop, settings: &Settings) -> RimContact {
    let offset = horizontal(ball.pos) - horizontal(hoop.rim_center);
    let r = offset.length();
    let reach = hoop.rim_radius + ball.radius;

    if r >= reach {
        return RimContact::None;
    }

    let above = ball.pos.y > hoop.rim_height() + settings.clean_pass_margin;
    let descending = ball.vel.y < 0.0;
    let centered = r < settings.clean_pass_radius_factor * hoop.rim_radius;
    if above && descending && centered {
        return RimContact::CleanPass;
    }

    let normal = if r > 1e-6 {
        offset / r
    } else {
        // Dead center: shove toward center court
        Vec2::new(-hoop.side.sign(), 0.0)
    };

    RimContact::Strike {
        normal,
        penetration: reach - r,
    }
}

/// Resolve the ball against one rim
///
/// A strike pushes the ball out to the edge of the ring's reach, reflects the
/// horizontal velocity about the contact normal and damps it. Vertical
/// velocity is untouched.
pub fn resolve_rim(ball: &mut Ball, hoop: &Hoop, settings: &Settings) -> RimContact {
    let contact = rim_contact(ball, hoop, settings);

    if let RimContact::Strike {
        normal,
        penetration,
    } = contact
    {
        let pushed = horizontal(ball.pos) + normal * penetration;
        ball.pos = from_horizontal(pushed, ball.pos.y);

        let flat = reflect_velocity(horizontal(ball.vel), normal) * settings.energy_loss;
        ball.vel = from_horizontal(flat, ball.vel.y);
    }

    contact
}

/// Resolve the ball against the floor
///
/// Hard landings bounce with damped speed and keep the ball in flight; soft
/// ones stop it dead and end the attempt.
pub fn resolve_ground(ball: &mut Ball, settings: &Settings) -> GroundContact {
    let ground_y = ball.ground_y();
    if !ball.in_flight() || ball.pos.y > ground_y {
        return GroundContact::Airborne;
    }

    ball.pos.y = ground_y;

    let incoming = ball.vel.y.abs();
    if incoming > settings.bounce_threshold {
        let outgoing = incoming * settings.energy_loss;
        ball.vel.y = outgoing;
        ball.vel.x *= settings.energy_loss;
        ball.vel.z *= settings.energy_loss;
        GroundContact::Bounce { incoming, outgoing }
    } else {
        let scored = ball.state.scored();
        ball.settle();
        GroundContact::Settled { scored }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::court::HoopSide;
    use crate::sim::state::BallState;
    use glam::Vec3;
    use proptest::prelude::*;

    fn airborne_at(pos: Vec3, vel: Vec3) -> Ball {
        let mut ball = Ball::new();
        ball.pos = pos;
        ball.launch(vel);
        ball
    }

    #[test]
    fn test_reflect_velocity() {
        // Ball moving right, hits vertical wall (normal pointing left)
        let velocity = Vec2::new(10.0, 0.0);
        let normal = Vec2::new(-1.0, 0.0);

        let reflected = reflect_velocity(velocity, normal);
        assert!((reflected.x - (-10.0)).abs() < 0.001);
        assert!(reflected.y.abs() < 0.001);
    }

    #[test]
    fn test_far_from_rim_no_contact() {
        let settings = Settings::default();
        let hoop = Hoop::new(HoopSide::Right);
        let ball = airborne_at(Vec3::new(10.0, RIM_HEIGHT, 0.0), Vec3::new(1.0, -1.0, 0.0));
        assert_eq!(rim_contact(&ball, &hoop, &settings), RimContact::None);
    }

    #[test]
    fn test_clean_pass_is_not_deflected() {
        let settings = Settings::default();
        let hoop = Hoop::new(HoopSide::Right);
        let pos = hoop.rim_center + Vec3::new(-0.1, 0.2, 0.05);
        let vel = Vec3::new(2.0, -3.0, 0.0);
        let mut ball = airborne_at(pos, vel);

        assert_eq!(resolve_rim(&mut ball, &hoop, &settings), RimContact::CleanPass);
        assert_eq!(ball.pos, pos);
        assert_eq!(ball.vel, vel);
    }

    #[test]
    fn test_rising_ball_strikes_rim() {
        let settings = Settings::default();
        let hoop = Hoop::new(HoopSide::Right);
        // Centered and above, but going up: not a pass
        let mut ball = airborne_at(hoop.rim_center + Vec3::new(-0.1, 0.2, 0.0), Vec3::new(0.0, 3.0, 0.0));
        assert!(resolve_rim(&mut ball, &hoop, &settings).is_strike());
    }

    #[test]
    fn test_rim_strike_pushes_out_and_damps() {
        let settings = Settings::default();
        let hoop = Hoop::new(HoopSide::Right);
        // Coming in from center court at rim height, 0.3 from the rim center
        let mut ball = airborne_at(
            hoop.rim_center + Vec3::new(-0.3, 0.0, 0.0),
            Vec3::new(5.0, -1.0, 0.0),
        );

        let contact = resolve_rim(&mut ball, &hoop, &settings);
        let RimContact::Strike { normal, penetration } = contact else {
            panic!("expected a strike, got {contact:?}");
        };
        assert!((normal - Vec2::new(-1.0, 0.0)).length() < 1e-5);
        assert!((penetration - (RIM_RADIUS + BALL_RADIUS - 0.3)).abs() < 1e-5);

        let r = hoop.horizontal_distance_to(ball.pos);
        assert!((r - (RIM_RADIUS + BALL_RADIUS)).abs() < 1e-4);
        // Bounced back toward center court at 70% speed
        assert!((ball.vel.x - (-3.5)).abs() < 1e-4);
        assert_eq!(ball.vel.y, -1.0);
    }

    #[test]
    fn test_dead_center_strike_pushes_toward_center_court() {
        let settings = Settings::default();
        let hoop = Hoop::new(HoopSide::Left);
        let mut ball = airborne_at(hoop.rim_center, Vec3::new(0.0, -2.0, 0.0));

        assert!(resolve_rim(&mut ball, &hoop, &settings).is_strike());
        assert!(ball.pos.x > hoop.rim_center.x);
        assert!(hoop.horizontal_distance_to(ball.pos) >= RIM_RADIUS + BALL_RADIUS - 1e-4);
    }

    #[test]
    fn test_ground_bounce_damps() {
        let settings = Settings::default();
        let mut ball = airborne_at(Vec3::new(0.0, 0.2, 0.0), Vec3::new(2.0, -5.0, 1.0));

        let contact = resolve_ground(&mut ball, &settings);
        assert_eq!(
            contact,
            GroundContact::Bounce {
                incoming: 5.0,
                outgoing: 5.0 * 0.7
            }
        );
        assert_eq!(ball.pos.y, BALL_REST_Y);
        assert!((ball.vel - Vec3::new(1.4, 3.5, 0.7)).length() < 1e-5);
        assert!(ball.in_flight());
    }

    #[test]
    fn test_soft_landing_settles() {
        let settings = Settings::default();
        let mut ball = airborne_at(Vec3::new(0.0, 0.3, 0.0), Vec3::new(1.0, -0.5, 0.0));

        assert_eq!(
            resolve_ground(&mut ball, &settings),
            GroundContact::Settled { scored: false }
        );
        assert_eq!(ball.state, BallState::Grounded);
        assert_eq!(ball.vel, Vec3::ZERO);
        assert_eq!(ball.pos.y, BALL_REST_Y);
    }

    #[test]
    fn test_settle_reports_scored_attempt() {
        let settings = Settings::default();
        let mut ball = airborne_at(Vec3::new(0.0, 0.3, 0.0), Vec3::new(0.0, -0.1, 0.0));
        ball.state = BallState::AirborneScored;
        assert_eq!(
            resolve_ground(&mut ball, &settings),
            GroundContact::Settled { scored: true }
        );
    }

    #[test]
    fn test_bounce_speeds_decay_to_rest() {
        let settings = Settings::default();
        let mut ball = airborne_at(Vec3::new(0.0, 0.0, 0.0), Vec3::new(0.0, -9.0, 0.0));

        let mut speeds = Vec::new();
        for _ in 0..64 {
            match resolve_ground(&mut ball, &settings) {
                GroundContact::Bounce { incoming, outgoing } => {
                    assert!((outgoing - incoming * settings.energy_loss).abs() < 1e-5);
                    speeds.push(outgoing);
                    // Land again with the same speed it left with
                    ball.pos.y = 0.0;
                    ball.vel.y = -outgoing;
                }
                GroundContact::Settled { .. } => break,
                GroundContact::Airborne => unreachable!(),
            }
        }

        assert!(!ball.in_flight(), "ball never settled");
        assert!(speeds.windows(2).all(|w| w[1] < w[0]));
        assert!(speeds.len() < 10);
    }

    proptest! {
        #[test]
        fn rim_strike_never_leaves_ball_inside(
            dx in -0.47f32..0.47,
            dz in -0.47f32..0.47,
            dy in -0.3f32..0.3,
            vx in -10.0f32..10.0,
            vy in -10.0f32..10.0,
            vz in -10.0f32..10.0,
        ) {
            let settings = Settings::default();
            let hoop = Hoop::new(HoopSide::Right);
            let mut ball = airborne_at(hoop.rim_center + Vec3::new(dx, dy, dz), Vec3::new(vx, vy, vz));

            if resolve_rim(&mut ball, &hoop, &settings).is_strike() {
                let r = hoop.horizontal_distance_to(ball.pos);
                prop_assert!(r >= RIM_RADIUS + BALL_RADIUS - 1e-4, "r = {}", r);
            }
        }
    }
}
