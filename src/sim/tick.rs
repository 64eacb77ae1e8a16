//! Per-frame game loop
//!
//! One call to [`tick`] does a whole frame in a fixed order: triggers and
//! movement, then integrate → rim → floor → judge for each substep, then
//! publish. Scoring always sees the post-collision ball, so a shot knocked
//! away by the rim this step is never credited.

use super::collision::{GroundContact, RimContact, resolve_ground, resolve_rim};
use super::court::{CourtBounds, Hoop};
use super::input::{InputEvent, InputState};
use super::judge::ScoreJudge;
use super::physics::{integrate, spin};
use super::shot::plan_shot;
use super::state::{Ball, Frame, GameEvent, GameState, ScoreSnapshot, ShotAttempt, ShotResult};
use crate::consts::MAX_SUBSTEPS;
use crate::from_horizontal;
use crate::settings::Settings;

/// One player's shooting session: ball, hoops, scoreboard and input
#[derive(Debug, Clone)]
pub struct Session {
    pub settings: Settings,
    pub hoops: [Hoop; 2],
    pub bounds: CourtBounds,
    pub ball: Ball,
    pub game: GameState,
    pub input: InputState,
    attempt: Option<ShotAttempt>,
    judge: ScoreJudge,
    /// Scoreboard as last published
    published: ScoreSnapshot,
    /// Events raised between ticks (power changes), flushed with the next frame
    pending_events: Vec<GameEvent>,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

impl Session {
    pub fn new(settings: Settings) -> Self {
        let settings = settings.sanitized();
        let game = GameState::new();
        Self {
            input: InputState::new(settings.default_power, settings.power_step),
            hoops: Hoop::pair(),
            bounds: CourtBounds::default(),
            ball: Ball::new(),
            published: game.snapshot(),
            game,
            attempt: None,
            judge: ScoreJudge::new(),
            pending_events: Vec::new(),
            time_ticks: 0,
            settings,
        }
    }

    /// Feed one host input event
    pub fn handle(&mut self, event: InputEvent) {
        if self.input.apply(event) {
            self.pending_events
                .push(GameEvent::PowerChanged(self.input.power()));
        }
    }

    /// The shot in the air, if any
    #[inline]
    pub fn attempt(&self) -> Option<&ShotAttempt> {
        self.attempt.as_ref()
    }

    /// Advance one frame
    pub fn tick(&mut self, dt: f32) -> Frame {
        tick(self, dt)
    }

    /// Launch a shot at the nearer hoop
    ///
    /// Ignored while a shot is already in the air.
    fn shoot(&mut self, events: &mut Vec<GameEvent>) {
        if self.ball.in_flight() {
            log::debug!("Shoot ignored: ball already in flight");
            return;
        }

        let power = self.input.power();
        let Some(plan) = plan_shot(self.ball.pos, power, &self.hoops, self.settings.gravity)
        else {
            return;
        };

        self.ball.launch(plan.velocity);
        self.judge.arm(plan.target, self.ball.pos.y);
        self.attempt = Some(ShotAttempt {
            target: plan.target,
            launch_vel: plan.velocity,
            flight_time: plan.flight_time,
        });
        let attempt = self.game.record_attempt();

        log::info!(
            "Shot #{} at {} hoop: distance {:.2}, power {}, velocity {:?}",
            attempt,
            plan.target.as_str(),
            plan.distance,
            power,
            plan.velocity
        );
        events.push(GameEvent::ShotTaken {
            target: plan.target,
            velocity: plan.velocity,
            attempt,
        });
    }

    /// Put the ball back at center court; the scoreboard is kept
    fn reset_ball(&mut self, events: &mut Vec<GameEvent>) {
        if self.attempt.is_some() {
            log::debug!("Reset abandons the shot in flight");
        }
        self.ball.reset();
        self.attempt = None;
        self.judge.disarm();

        let default_power = self.settings.default_power;
        if self.input.power() != default_power {
            self.input.set_power(default_power);
            events.push(GameEvent::PowerChanged(default_power));
        }

        log::info!("Ball reset");
        events.push(GameEvent::BallReset);
    }

    /// Walk the grounded ball, staying inside the court bounds
    fn apply_movement(&mut self, dt: f32) {
        let dir = self.input.move_direction();
        if dir == glam::Vec2::ZERO || dt <= 0.0 {
            return;
        }

        let vel = from_horizontal(dir * self.settings.move_speed, 0.0);
        self.ball.pos = self.bounds.clamp(self.ball.pos + vel * dt);
        spin(&mut self.ball, vel, self.settings.spin_threshold, dt);
    }

    /// One integration substep for a ball in flight
    fn step_flight(&mut self, dt: f32, events: &mut Vec<GameEvent>) {
        let settings = &self.settings;
        integrate(
            &mut self.ball,
            settings.gravity,
            settings.spin_threshold,
            dt,
        );

        for hoop in &self.hoops {
            if let RimContact::Strike { .. } = resolve_rim(&mut self.ball, hoop, settings) {
                log::debug!("Rim hit on {} hoop", hoop.side.as_str());
                events.push(GameEvent::RimHit { hoop: hoop.side });
            }
        }

        match resolve_ground(&mut self.ball, settings) {
            GroundContact::Airborne => {}
            GroundContact::Bounce { incoming, outgoing } => {
                log::debug!("Bounce {:.2} -> {:.2}", incoming, outgoing);
                events.push(GameEvent::Bounce { incoming, outgoing });
            }
            GroundContact::Settled { scored } => {
                self.attempt = None;
                self.judge.disarm();
                if !scored {
                    self.game.record_miss();
                    log::info!("Missed ({}/{})", self.game.makes, self.game.attempts);
                    events.push(GameEvent::Result(ShotResult::Missed));
                }
                return;
            }
        }

        if self.judge.evaluate(&mut self.ball, &self.hoops, settings) {
            self.game.record_make();
            log::info!(
                "Made it! score {} ({}/{})",
                self.game.score,
                self.game.makes,
                self.game.attempts
            );
            events.push(GameEvent::Result(ShotResult::Made));
        }
    }
}

/// Clamp a host-supplied frame time into something safe to simulate
fn sanitize_dt(dt: f32, max_frame_dt: f32) -> f32 {
    if !dt.is_finite() || dt < 0.0 {
        log::warn!("Ignoring invalid frame time {}", dt);
        return 0.0;
    }
    if dt > max_frame_dt {
        log::debug!("Frame time {:.3}s capped to {:.3}s", dt, max_frame_dt);
        return max_frame_dt;
    }
    dt
}

/// Number of integration steps for a frame, at least one and at most [`MAX_SUBSTEPS`]
fn substep_count(dt: f32, substep_dt: f32) -> u32 {
    (dt / substep_dt).ceil().clamp(1.0, MAX_SUBSTEPS as f32) as u32
}

/// Advance the session by one frame of `dt` seconds
pub fn tick(session: &mut Session, dt: f32) -> Frame {
    let mut events = std::mem::take(&mut session.pending_events);
    let dt = sanitize_dt(dt, session.settings.max_frame_dt);
    session.time_ticks += 1;

    let triggers = session.input.take_triggers();
    if triggers.reset {
        if triggers.shoot {
            log::debug!("Shoot dropped in favour of reset");
        }
        session.reset_ball(&mut events);
    } else if triggers.shoot {
        session.shoot(&mut events);
    }

    if !session.ball.in_flight() {
        session.apply_movement(dt);
    } else if dt > 0.0 {
        let substeps = substep_count(dt, session.settings.substep_dt);
        let h = dt / substeps as f32;
        for _ in 0..substeps {
            session.step_flight(h, &mut events);
            if !session.ball.in_flight() {
                break;
            }
        }
    }

    let snapshot = session.game.snapshot();
    let scoreboard = if snapshot != session.published {
        session.published = snapshot;
        Some(snapshot)
    } else {
        None
    };

    Frame {
        pose: session.ball.pose(),
        scoreboard,
        events,
    }
}
