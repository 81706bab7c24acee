//! Table configuration loaded from YAML.
//!
//! A table describes the starting state of a session:
//!
//! - `surface` – size of the rectangle in pixels
//! - `physics` – optional wall damping and pointer impulse scale
//! - `bodies`  – the roster, in the order the simulation iterates it
//!
//! ```yaml
//! surface:
//!   width: 400
//!   height: 200
//!
//! physics:             # optional
//!   wall_damping: 0.9
//!   impulse_scale: 0.1
//!
//! bodies:
//!   - position: [50, 50]
//!     radius: 10
//!     color: red
//!   - position: [100, 100]
//!     radius: 15
//!     color: "#0000ff"
//!     velocity: [1.5, 0]  # optional, defaults to rest
//! ```

use crate::color::Color;
use crate::engine::{Body, PhysicsParams, Surface};
use crate::error::ConfigError;
use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Initial state of one body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BodyConfig {
    pub position: Vec2,
    pub radius: f32,
    pub color: Color,
    #[serde(default)]
    pub velocity: Vec2,
}

impl BodyConfig {
    fn to_body(&self) -> Body {
        Body::new(self.position, self.radius, self.color.clone()).with_velocity(self.velocity)
    }
}

/// Top-level table file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableConfig {
    pub surface: Surface,
    #[serde(default)]
    pub physics: PhysicsParams,
    #[serde(default)]
    pub bodies: Vec<BodyConfig>,
}

impl Default for TableConfig {
    /// Red, blue and yellow balls at rest on a 400 x 200 table
    fn default() -> Self {
        let ball = |x: f32, y: f32, radius: f32, color: &str| BodyConfig {
            position: Vec2::new(x, y),
            radius,
            color: Color::new(color),
            velocity: Vec2::ZERO,
        };
        Self {
            surface: Surface::default(),
            physics: PhysicsParams::default(),
            bodies: vec![
                ball(50.0, 50.0, 10.0, "red"),
                ball(100.0, 100.0, 15.0, "blue"),
                ball(150.0, 150.0, 20.0, "yellow"),
            ],
        }
    }
}

impl TableConfig {
    /// Reject tables the step cannot handle meaningfully
    pub fn validate(&self) -> Result<(), ConfigError> {
        let Surface { width, height } = self.surface;
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(ConfigError::InvalidSurface { width, height });
        }
        if !self.physics.wall_damping.is_finite() {
            return Err(ConfigError::InvalidParameter("wall_damping"));
        }
        if !self.physics.impulse_scale.is_finite() {
            return Err(ConfigError::InvalidParameter("impulse_scale"));
        }
        for (index, body) in self.bodies.iter().enumerate() {
            if !(body.radius.is_finite() && body.radius > 0.0) {
                return Err(ConfigError::InvalidRadius {
                    index,
                    radius: body.radius,
                });
            }
            if !body.position.is_finite() {
                return Err(ConfigError::NonFinite {
                    index,
                    field: "position",
                });
            }
            if !body.velocity.is_finite() {
                return Err(ConfigError::NonFinite {
                    index,
                    field: "velocity",
                });
            }
        }
        Ok(())
    }

    /// Build the roster in file order
    pub fn bodies(&self) -> Vec<Body> {
        self.bodies.iter().map(BodyConfig::to_body).collect()
    }
}

/// Parse and validate a table from YAML source
pub fn parse_table(source: &str) -> Result<TableConfig, ConfigError> {
    let table: TableConfig = serde_yaml::from_str(source)?;
    table.validate()?;
    Ok(table)
}

/// Read, parse and validate a table file
pub fn load_table(path: impl AsRef<Path>) -> Result<TableConfig, ConfigError> {
    let path = path.as_ref();
    let source = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let table = parse_table(&source)?;
    log::debug!(
        "loaded table {} ({} bodies, {}x{})",
        path.display(),
        table.bodies.len(),
        table.surface.width,
        table.surface.height
    );
    Ok(table)
}
