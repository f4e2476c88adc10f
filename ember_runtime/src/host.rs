//! Host loop - runs systems and rules once per tick.

use ember_behavior::{Event, Scene, Simulation, UpdateSummary};
use ember_core::{bounce_system, movement_system, Bounds, World};

use crate::config::RuntimeConfig;
use crate::error::RuntimeError;

/// Scene used when the config names none.
pub const DEMO_SCENE: &str = include_str!("../scenes/demo.json");

/// Totals over a whole run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunReport {
    pub ticks: u64,
    pub events_processed: usize,
    pub rules_fired: usize,
}

/// Owns the simulation and drives it with the fixed per-tick system order.
#[derive(Debug)]
pub struct Host {
    sim: Simulation,
    bounds: Bounds,
}

impl Host {
    /// Load the configured scene (or the demo) and queue the `start` event.
    pub fn from_config(config: &RuntimeConfig) -> Result<Self, RuntimeError> {
        let json = match &config.scene {
            Some(path) => std::fs::read_to_string(path).map_err(|source| RuntimeError::Scene {
                path: path.clone(),
                source,
            })?,
            None => DEMO_SCENE.to_string(),
        };
        Self::from_scene_json(&json, config.bounds)
    }

    pub fn from_scene_json(json: &str, bounds: Bounds) -> Result<Self, RuntimeError> {
        let mut world = World::new();
        let scene = Scene::load(json, &mut world)?;
        let mut sim = Simulation::new(world, scene.rules);
        sim.emit(Event::new("start"));
        Ok(Self { sim, bounds })
    }

    /// One tick: movement, bounce, rules, then cleanup.
    pub fn tick(&mut self) -> UpdateSummary {
        movement_system(&mut self.sim.world);
        bounce_system(&mut self.sim.world, "enemy", self.bounds);
        self.sim.step()
    }

    pub fn run(&mut self, ticks: u64) -> RunReport {
        let mut report = RunReport::default();
        for tick in 0..ticks {
            let summary = self.tick();
            report.ticks += 1;
            report.events_processed += summary.events_processed;
            report.rules_fired += summary.rules_fired;
            tracing::trace!(tick, fired = summary.rules_fired, "tick complete");
        }
        report
    }

    pub fn simulation(&self) -> &Simulation {
        &self.sim
    }
}
