//! Physics and gameplay tuning
//!
//! Loaded once at startup and shared read-only with the simulation.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Shortest integration step the simulation accepts (seconds)
pub const MIN_SUBSTEP_DT: f32 = 1e-4;

/// Tunable simulation constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Dynamics ===
    /// Vertical gravitational acceleration (negative = down)
    pub gravity: f32,
    /// Velocity multiplier on rim and ground contact
    pub energy_loss: f32,
    /// Vertical impact speed below which the ball stops bouncing
    pub bounce_threshold: f32,

    // === Hoop ===
    /// Ball center must be this far above the rim to pass cleanly
    pub clean_pass_margin: f32,
    /// Fraction of the rim radius inside which the ball passes cleanly
    pub clean_pass_radius_factor: f32,
    /// Fraction of the rim radius inside which a descent counts as a make
    pub make_radius_factor: f32,

    // === Player ===
    /// Grounded ball walking speed (units per second)
    pub move_speed: f32,
    /// Speed below which the ball is not spun
    pub spin_threshold: f32,
    /// Shot power after a reset
    pub default_power: u32,
    /// Power change per key press
    pub power_step: u32,

    // === Timing ===
    /// Longest frame the engine will simulate in one tick (seconds)
    pub max_frame_dt: f32,
    /// Longest single integration step (seconds)
    pub substep_dt: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            gravity: -9.8,
            energy_loss: 0.7,
            bounce_threshold: 0.8,

            clean_pass_margin: 0.05,
            clean_pass_radius_factor: 0.8,
            make_radius_factor: 1.3,

            move_speed: 5.0,
            spin_threshold: 0.01,
            default_power: 50,
            power_step: 2,

            max_frame_dt: 0.1,
            substep_dt: 1.0 / 120.0,
        }
    }
}

impl Settings {
    /// Parse settings from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<Self>(json).map(Self::sanitized)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load settings from a JSON file, falling back to defaults
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Could not read settings {}: {}", path.display(), e);
                return Self::default();
            }
        };

        match Self::from_json(&json) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Invalid settings {}: {} - using defaults", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save settings as pretty JSON
    pub fn save(&self, path: impl AsRef<Path>) {
        let path = path.as_ref();
        match self.to_json() {
            Ok(json) => match std::fs::write(path, json) {
                Ok(()) => log::info!("Settings saved to {}", path.display()),
                Err(e) => log::warn!("Could not write settings {}: {}", path.display(), e),
            },
            Err(e) => log::warn!("Could not serialize settings: {}", e),
        }
    }

    /// Replace values the simulation cannot run with
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();

        if !(self.gravity.is_finite() && self.gravity < 0.0) {
            self.gravity = defaults.gravity;
        }
        // A lossless (or gaining) bounce never drops below the settle threshold
        if !(self.energy_loss.is_finite() && self.energy_loss < 1.0) {
            self.energy_loss = defaults.energy_loss;
        }
        self.energy_loss = self.energy_loss.max(0.0);
        if !(self.bounce_threshold.is_finite() && self.bounce_threshold >= 0.0) {
            self.bounce_threshold = defaults.bounce_threshold;
        }
        if !(self.move_speed.is_finite() && self.move_speed >= 0.0) {
            self.move_speed = defaults.move_speed;
        }
        if !(self.max_frame_dt.is_finite() && self.max_frame_dt > 0.0) {
            self.max_frame_dt = defaults.max_frame_dt;
        }
        if !(self.substep_dt.is_finite() && self.substep_dt > 0.0) {
            self.substep_dt = defaults.substep_dt;
        }
        self.substep_dt = self.substep_dt.max(MIN_SUBSTEP_DT);
        if self.power_step == 0 {
            self.power_step = defaults.power_step;
        }
        self.default_power = self.default_power.min(crate::consts::MAX_POWER);
        self
    }
}
