use crate::collision::{resolve_pairs, resolve_walls};
use crate::color::Color;
use crate::config::{parse_table, TableConfig};
use crate::driver::run_frames;
use crate::engine::{Body, PhysicsParams, Surface};
use crate::error::ConfigError;
use crate::input::{apply_pointer_impulse, assign_color};
use crate::integrator::integrate_all;
use glam::Vec2;

/// Read-only snapshot of a body handed to the presentation layer
#[derive(Debug, Clone, PartialEq)]
pub struct BodyState {
    pub index: usize,
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub color: Color,
    pub selected: bool,
}

/// What happened during one frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepReport {
    pub wall_bounces: usize,
    pub contacts: usize,
}

/// Owns the roster and everything the step mutates
#[derive(Debug, Clone)]
pub struct Simulation {
    bodies: Vec<Body>,
    surface: Surface,
    params: PhysicsParams,
    selected: Option<usize>,
    frame: u64,
}

impl Simulation {
    pub fn new(bodies: Vec<Body>, surface: Surface, params: PhysicsParams) -> Self {
        Self {
            bodies,
            surface,
            params,
            selected: None,
            frame: 0,
        }
    }

    pub fn from_config(table: &TableConfig) -> Self {
        Self::new(table.bodies(), table.surface, table.physics)
    }

    /// Advance one frame: integrate, bounce off walls, then resolve contacts
    pub fn step(&mut self) -> StepReport {
        integrate_all(&mut self.bodies);

        let mut report = StepReport::default();
        for body in self.bodies.iter_mut() {
            report.wall_bounces += resolve_walls(body, &self.surface, self.params.wall_damping);
        }
        report.contacts = resolve_pairs(&mut self.bodies);

        self.frame += 1;
        report
    }

    /// Apply a pointer press in surface coordinates; returns the new selection
    pub fn apply_pointer(&mut self, point: Vec2) -> Option<usize> {
        self.selected = apply_pointer_impulse(&mut self.bodies, point, self.params.impulse_scale);
        match self.selected {
            Some(idx) => log::debug!("pointer at {:?} selected body {}", point, idx),
            None => log::debug!("pointer at {:?} hit nothing", point),
        }
        self.selected
    }

    /// Recolor the selected body, if any, and clear the selection
    pub fn assign_color(&mut self, color: impl Into<Color>) -> Option<usize> {
        assign_color(&mut self.bodies, &mut self.selected, color.into())
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_body(&self) -> Option<&Body> {
        self.selected.and_then(|idx| self.bodies.get(idx))
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn surface(&self) -> Surface {
        self.surface
    }

    pub fn params(&self) -> PhysicsParams {
        self.params
    }

    /// Number of frames stepped so far
    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn body_states(&self) -> Vec<BodyState> {
        self.bodies
            .iter()
            .enumerate()
            .map(|(index, body)| BodyState {
                index,
                pos: body.pos,
                vel: body.vel,
                radius: body.radius(),
                color: body.color.clone(),
                selected: self.selected == Some(index),
            })
            .collect()
    }
}

/// Final state of a headless run
#[derive(Debug)]
pub struct SimulationResult {
    pub frame: u64,
    pub bodies: Vec<BodyState>,
}

/// Apply `clicks` in order, then step `frames` times
pub fn run_table(table: &TableConfig, frames: u64, clicks: &[Vec2]) -> SimulationResult {
    let mut sim = Simulation::from_config(table);
    for click in clicks {
        sim.apply_pointer(*click);
    }
    run_frames(&mut sim, frames);
    SimulationResult {
        frame: sim.frame(),
        bodies: sim.body_states(),
    }
}

/// Parse a table from YAML source and run it headless
pub fn run_table_source(
    source: &str,
    frames: u64,
    clicks: &[Vec2],
) -> Result<SimulationResult, ConfigError> {
    let table = parse_table(source)?;
    Ok(run_table(&table, frames, clicks))
}
