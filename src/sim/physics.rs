//! Ball integration
//!
//! Semi-implicit Euler under constant gravity. Orientation is cosmetic: the
//! ball is spun as if rolling without slipping and nothing reads it back.

use glam::{Quat, Vec3};

use super::state::Ball;

/// How close to the court the ball must be to count as rolling
const ROLL_CONTACT_EPS: f32 = 1e-3;

/// Advance an in-flight ball by one step
///
/// Grounded balls are left untouched.
pub fn integrate(ball: &mut Ball, gravity: f32, spin_threshold: f32, dt: f32) {
    if !ball.in_flight() {
        return;
    }

    ball.vel.y += gravity * dt;
    ball.pos += ball.vel * dt;

    let on_ground = ball.pos.y <= ball.ground_y() + ROLL_CONTACT_EPS;
    let spin_vel = if on_ground {
        Vec3::new(ball.vel.x, 0.0, ball.vel.z)
    } else {
        ball.vel
    };
    spin(ball, spin_vel, spin_threshold, dt);
}

/// Rotate the ball as if it moved with `vel` for `dt`
///
/// The spin axis is perpendicular to both the motion and world up, at
/// `|vel| / radius` radians per second. Purely vertical motion has no
/// such axis and leaves the orientation alone.
pub fn spin(ball: &mut Ball, vel: Vec3, threshold: f32, dt: f32) {
    let speed = vel.length();
    if speed <= threshold || ball.radius <= 0.0 {
        return;
    }

    let axis = Vec3::Y.cross(vel);
    if axis.length_squared() < 1e-12 {
        return;
    }

    let angle = speed / ball.radius * dt;
    let delta = Quat::from_axis_angle(axis.normalize(), angle);
    ball.orientation = (delta * ball.orientation).normalize();
}
