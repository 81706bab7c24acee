//! Per-frame driver for the simulation
//!
//! The host (a GUI repaint callback or a headless loop) calls [`FrameDriver::tick`]
//! once per displayed frame. The driver only steps while started, and a
//! dropped driver is always stopped, so tearing the view down cancels the
//! recurring step.

use crate::runtime::{Simulation, StepReport};

#[derive(Debug)]
pub struct FrameDriver {
    running: bool,
    steps_per_frame: usize,
    last_report: StepReport,
}

impl FrameDriver {
    pub fn new() -> Self {
        Self {
            running: false,
            steps_per_frame: 1,
            last_report: StepReport::default(),
        }
    }

    pub fn start(&mut self) {
        if !self.running {
            log::debug!("frame driver started");
        }
        self.running = true;
    }

    pub fn stop(&mut self) {
        if self.running {
            log::debug!("frame driver stopped");
        }
        self.running = false;
    }

    pub fn toggle(&mut self) {
        if self.running {
            self.stop();
        } else {
            self.start();
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn steps_per_frame(&self) -> usize {
        self.steps_per_frame
    }

    /// Simulation steps per displayed frame, at least one
    pub fn set_steps_per_frame(&mut self, steps: usize) {
        self.steps_per_frame = steps.max(1);
    }

    /// Report of the most recent step taken by [`tick`](Self::tick)
    pub fn last_report(&self) -> StepReport {
        self.last_report
    }

    /// Step the simulation for one displayed frame; returns the steps taken
    pub fn tick(&mut self, sim: &mut Simulation) -> usize {
        if !self.running {
            return 0;
        }
        for _ in 0..self.steps_per_frame {
            self.last_report = sim.step();
        }
        self.steps_per_frame
    }
}

impl Default for FrameDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for FrameDriver {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Drive `sim` for `frames` frames without a display
pub fn run_frames(sim: &mut Simulation, frames: u64) {
    let mut driver = FrameDriver::new();
    driver.start();
    for _ in 0..frames {
        driver.tick(sim);
    }
    driver.stop();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TableConfig;

    #[test]
    fn stopped_driver_does_not_step() {
        let mut sim = Simulation::from_config(&TableConfig::default());
        let mut driver = FrameDriver::new();
        assert_eq!(driver.tick(&mut sim), 0);
        assert_eq!(sim.frame(), 0);
    }

    #[test]
    fn running_driver_takes_configured_steps() {
        let mut sim = Simulation::from_config(&TableConfig::default());
        let mut driver = FrameDriver::new();
        driver.set_steps_per_frame(3);
        driver.start();
        assert_eq!(driver.tick(&mut sim), 3);
        driver.stop();
        assert_eq!(driver.tick(&mut sim), 0);
        assert_eq!(sim.frame(), 3);
    }

    #[test]
    fn steps_per_frame_is_at_least_one() {
        let mut driver = FrameDriver::new();
        driver.set_steps_per_frame(0);
        assert_eq!(driver.steps_per_frame(), 1);
    }

    #[test]
    fn toggle_flips_running() {
        let mut driver = FrameDriver::new();
        driver.toggle();
        assert!(driver.is_running());
        driver.toggle();
        assert!(!driver.is_running());
    }

    #[test]
    fn run_frames_steps_exactly() {
        let mut sim = Simulation::from_config(&TableConfig::default());
        run_frames(&mut sim, 7);
        assert_eq!(sim.frame(), 7);
    }
}
