//! Player input
//!
//! Two channels: level-triggered movement flags that stay set while a key is
//! held, and edge-triggered shoot/reset requests that the game loop consumes
//! exactly once.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::consts::MAX_POWER;
use crate::horizontal;

/// Movement directions, relative to the viewer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveDir {
    Left,
    Right,
    Forward,
    Backward,
}

/// A discrete event from the host's input handling
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    /// Movement key went down (`pressed`) or up
    Move { dir: MoveDir, pressed: bool },
    PowerUp,
    PowerDown,
    Shoot,
    Reset,
    /// Current camera look direction in world space
    ViewDirection(Vec3),
}

/// One-shot requests collected since the last tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Triggers {
    pub shoot: bool,
    pub reset: bool,
}

/// Current input state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputState {
    pub left: bool,
    pub right: bool,
    pub forward: bool,
    pub backward: bool,
    /// Shot power in [0, 100]
    power: u32,
    power_step: u32,
    /// Court-plane direction the viewer is facing (unit length)
    view_forward: Vec2,
    #[serde(skip)]
    pending: Triggers,
}

impl Default for InputState {
    fn default() -> Self {
        Self::new(50, 2)
    }
}

impl InputState {
    pub fn new(power: u32, power_step: u32) -> Self {
        Self {
            left: false,
            right: false,
            forward: false,
            backward: false,
            power: power.min(MAX_POWER),
            power_step,
            // Viewer stands at +Z looking at center court
            view_forward: Vec2::new(0.0, -1.0),
            pending: Triggers::default(),
        }
    }

    /// Apply a host input event
    ///
    /// Returns `true` when the shot power changed.
    pub fn apply(&mut self, event: InputEvent) -> bool {
        match event {
            InputEvent::Move { dir, pressed } => {
                match dir {
                    MoveDir::Left => self.left = pressed,
                    MoveDir::Right => self.right = pressed,
                    MoveDir::Forward => self.forward = pressed,
                    MoveDir::Backward => self.backward = pressed,
                }
                false
            }
            InputEvent::PowerUp => self.step_power(true),
            InputEvent::PowerDown => self.step_power(false),
            InputEvent::Shoot => {
                self.pending.shoot = true;
                false
            }
            InputEvent::Reset => {
                self.pending.reset = true;
                false
            }
            InputEvent::ViewDirection(dir) => {
                self.set_view_direction(dir);
                false
            }
        }
    }

    fn step_power(&mut self, up: bool) -> bool {
        let old = self.power;
        self.power = if up {
            self.power.saturating_add(self.power_step).min(MAX_POWER)
        } else {
            self.power.saturating_sub(self.power_step)
        };
        self.power != old
    }

    #[inline]
    pub fn power(&self) -> u32 {
        self.power
    }

    pub fn set_power(&mut self, power: u32) {
        self.power = power.min(MAX_POWER);
    }

    /// Point "forward" along the camera's look direction
    ///
    /// Vertical look directions carry no court-plane heading and are ignored.
    pub fn set_view_direction(&mut self, dir: Vec3) {
        let flat = horizontal(dir);
        if flat.is_finite() && flat.length_squared() > 1e-8 {
            self.view_forward = flat.normalize();
        }
    }

    #[inline]
    pub fn view_forward(&self) -> Vec2 {
        self.view_forward
    }

    /// Take the pending one-shot triggers, clearing them
    pub fn take_triggers(&mut self) -> Triggers {
        std::mem::take(&mut self.pending)
    }

    /// Combined movement direction on the court plane, unit length or zero
    ///
    /// Opposing keys cancel. "Forward" is away from the viewer.
    pub fn move_direction(&self) -> Vec2 {
        let forward = self.view_forward;
        // Viewer's right hand on the court plane (forward x up)
        let right = Vec2::new(-forward.y, forward.x);

        let mut dir = Vec2::ZERO;
        if self.forward {
            dir += forward;
        }
        if self.backward {
            dir -= forward;
        }
        if self.right {
            dir += right;
        }
        if self.left {
            dir -= right;
        }
        dir.normalize_or_zero()
    }
}
