//! Demo auto-player
//!
//! Drives a [`Session`] through the same input events a person would send:
//! walk to a random spot, dial in a random power, shoot, wait for the ball to
//! come to rest, repeat. Seeded, so the same seed replays the same session.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::horizontal;
use crate::sim::{GameEvent, InputEvent, MoveDir, Session, ShotResult};

/// Close enough to the walk target
const ARRIVE_DIST: f32 = 0.15;
/// Give up walking after this many ticks
const MAX_WALK_TICKS: u32 = 600;
/// Dead zone for deciding which movement keys to hold
const KEY_DEAD_ZONE: f32 = 0.05;
/// Keep the auto-player away from the edges of the walkable area
const SPOT_INSET: f32 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    Walking { target: Vec2, ticks: u32 },
    Aiming { power: u32 },
    /// Shoot sent; waiting for the attempt to register and finish
    Shooting { attempts_before: u32 },
}

/// Scripted shooter
#[derive(Debug, Clone)]
pub struct AutoPlayer {
    rng: Pcg32,
    phase: Phase,
    held: [bool; 4],
    shots_completed: u32,
}

const KEYS: [MoveDir; 4] = [
    MoveDir::Left,
    MoveDir::Right,
    MoveDir::Forward,
    MoveDir::Backward,
];

impl AutoPlayer {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            phase: Phase::Aiming { power: 50 },
            held: [false; 4],
            shots_completed: 0,
        }
    }

    pub fn shots_completed(&self) -> u32 {
        self.shots_completed
    }

    fn pick_spot(&mut self, session: &Session) -> Vec2 {
        let b = session.bounds;
        let x = self
            .rng
            .random_range((b.min_x + SPOT_INSET)..(b.max_x - SPOT_INSET));
        let z = self
            .rng
            .random_range((b.min_z + SPOT_INSET)..(b.max_z - SPOT_INSET));
        Vec2::new(x, z)
    }

    /// Press/release keys so the held set matches `want`
    fn set_keys(&mut self, want: [bool; 4], out: &mut Vec<InputEvent>) {
        for (i, dir) in KEYS.into_iter().enumerate() {
            if self.held[i] != want[i] {
                self.held[i] = want[i];
                out.push(InputEvent::Move {
                    dir,
                    pressed: want[i],
                });
            }
        }
    }

    /// Input events to send before the next tick
    pub fn next_inputs(&mut self, session: &Session) -> Vec<InputEvent> {
        let mut out = Vec::new();

        match self.phase {
            Phase::Walking { target, ticks } => {
                let delta = target - horizontal(session.ball.pos);
                if delta.length() < ARRIVE_DIST || ticks >= MAX_WALK_TICKS {
                    self.set_keys([false; 4], &mut out);
                    let power = self.rng.random_range(0..=50u32) * 2;
                    self.phase = Phase::Aiming { power };
                } else {
                    let forward = session.input.view_forward();
                    let right = Vec2::new(-forward.y, forward.x);
                    let f = delta.dot(forward);
                    let r = delta.dot(right);
                    self.set_keys(
                        [
                            r < -KEY_DEAD_ZONE,
                            r > KEY_DEAD_ZONE,
                            f > KEY_DEAD_ZONE,
                            f < -KEY_DEAD_ZONE,
                        ],
                        &mut out,
                    );
                    self.phase = Phase::Walking {
                        target,
                        ticks: ticks + 1,
                    };
                }
            }
            Phase::Aiming { power } => {
                let current = session.input.power();
                if current < power {
                    out.push(InputEvent::PowerUp);
                } else if current > power {
                    out.push(InputEvent::PowerDown);
                } else {
                    log::debug!("Auto-player shooting at power {}", power);
                    out.push(InputEvent::Shoot);
                    self.phase = Phase::Shooting {
                        attempts_before: session.game.attempts,
                    };
                }
            }
            Phase::Shooting { attempts_before } => {
                let registered = session.game.attempts > attempts_before;
                if registered && !session.ball.in_flight() {
                    self.shots_completed += 1;
                    let target = self.pick_spot(session);
                    self.phase = Phase::Walking { target, ticks: 0 };
                }
            }
        }

        out
    }
}

/// Play `shots` auto-player attempts at a fixed frame time
///
/// Stops early after `max_ticks` ticks. Returns the number of finished shots.
pub fn run_demo(session: &mut Session, seed: u64, shots: u32, dt: f32, max_ticks: u64) -> u32 {
    let mut player = AutoPlayer::new(seed);
    let mut ticks = 0u64;

    while player.shots_completed() < shots && ticks < max_ticks {
        for event in player.next_inputs(session) {
            session.handle(event);
        }
        let frame = session.tick(dt);
        ticks += 1;

        for event in &frame.events {
            match event {
                GameEvent::Result(ShotResult::Made) => log::info!("Demo: swish"),
                GameEvent::Result(ShotResult::Missed) => log::info!("Demo: brick"),
                _ => {}
            }
        }
    }

    if player.shots_completed() < shots {
        log::warn!(
            "Demo stopped after {} ticks with {}/{} shots",
            ticks,
            player.shots_completed(),
            shots
        );
    }
    player.shots_completed()
}
