//! Court geometry: hoops and the walkable area
//!
//! Built once at session start and never mutated afterwards.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::horizontal_distance;

/// Which end of the court a hoop sits at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HoopSide {
    Left,
    Right,
}

impl HoopSide {
    /// -1 for the left (negative X) end, +1 for the right
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            HoopSide::Left => -1.0,
            HoopSide::Right => 1.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HoopSide::Left => "left",
            HoopSide::Right => "right",
        }
    }
}

/// A hoop, reduced to its rim ring
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hoop {
    pub side: HoopSide,
    /// Center of the rim ring
    pub rim_center: Vec3,
    pub rim_radius: f32,
}

impl Hoop {
    /// Standard hoop at the given end of the court
    pub fn new(side: HoopSide) -> Self {
        Self {
            side,
            rim_center: Vec3::new(side.sign() * RIM_CENTER_X, RIM_HEIGHT, 0.0),
            rim_radius: RIM_RADIUS,
        }
    }

    /// Both hoops, left first, mirrored across the court center
    pub fn pair() -> [Hoop; 2] {
        [Hoop::new(HoopSide::Left), Hoop::new(HoopSide::Right)]
    }

    #[inline]
    pub fn rim_height(&self) -> f32 {
        self.rim_center.y
    }

    /// Court-plane distance from a point to the rim center
    #[inline]
    pub fn horizontal_distance_to(&self, pos: Vec3) -> f32 {
        horizontal_distance(pos, self.rim_center)
    }
}

/// Axis-aligned walkable rectangle on the court plane
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CourtBounds {
    pub min_x: f32,
    pub max_x: f32,
    pub min_z: f32,
    pub max_z: f32,
}

impl Default for CourtBounds {
    fn default() -> Self {
        Self::from_court(COURT_LENGTH, COURT_WIDTH, COURT_MARGIN)
    }
}

impl CourtBounds {
    /// Court centered on the origin, shrunk by `margin` on every side
    pub fn from_court(length: f32, width: f32, margin: f32) -> Self {
        let half_x = (length / 2.0 - margin).max(0.0);
        let half_z = (width / 2.0 - margin).max(0.0);
        Self {
            min_x: -half_x,
            max_x: half_x,
            min_z: -half_z,
            max_z: half_z,
        }
    }

    /// Clamp a world position into the rectangle (height untouched)
    pub fn clamp(&self, pos: Vec3) -> Vec3 {
        Vec3::new(
            pos.x.clamp(self.min_x, self.max_x),
            pos.y,
            pos.z.clamp(self.min_z, self.max_z),
        )
    }

    pub fn contains(&self, pos: Vec3) -> bool {
        (self.min_x..=self.max_x).contains(&pos.x) && (self.min_z..=self.max_z).contains(&pos.z)
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.max_x - self.min_x, self.max_z - self.min_z)
    }
}
