use crate::color::Color;
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Energy kept by the perpendicular velocity component on a wall bounce
pub const DEFAULT_WALL_DAMPING: f32 = 0.9;

/// Fraction of the pointer-to-center offset added to a clicked body's velocity
pub const DEFAULT_IMPULSE_SCALE: f32 = 0.1;

/// A disc on the table
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub pos: Vec2,
    pub vel: Vec2,
    pub color: Color,
    radius: f32, // fixed for the body's lifetime, doubles as mass
}

impl Body {
    pub fn new(pos: Vec2, radius: f32, color: impl Into<Color>) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            color: color.into(),
            radius,
        }
    }

    pub fn with_velocity(mut self, vel: Vec2) -> Self {
        self.vel = vel;
        self
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// True if `point` lies strictly inside the disc
    pub fn contains(&self, point: Vec2) -> bool {
        self.pos.distance(point) < self.radius
    }
}

/// The bounded rectangle bodies move within, origin at the top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Surface {
    pub width: f32,
    pub height: f32,
}

impl Surface {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}

impl Default for Surface {
    fn default() -> Self {
        Self::new(400.0, 200.0)
    }
}

/// Tunable constants of the step and the pointer impulse
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsParams {
    pub wall_damping: f32,
    pub impulse_scale: f32,
}

impl Default for PhysicsParams {
    fn default() -> Self {
        Self {
            wall_damping: DEFAULT_WALL_DAMPING,
            impulse_scale: DEFAULT_IMPULSE_SCALE,
        }
    }
}
