//! Elm-architecture Model implementation: run/pause/step control, pattern
//! seeding, and tick scheduling around the simulation.

use std::thread;
use std::time::Duration;

use lifegrid_core::{
    app::{cmd, Effect, Model},
    messages::{Key, Msg},
    sim::{Simulation, DEFAULT_LIVE_PROBABILITY},
    view::BoardView,
};

use crate::patterns;

/// Board dimension of the interactive app.
pub const BOARD_SIZE: usize = 30;

/// Default delay between generations while running.
pub const TICK_INTERVAL: Duration = Duration::from_millis(50);

/// Fastest and slowest tick intervals the speed keys can reach.
const MIN_INTERVAL: Duration = Duration::from_millis(10);
const MAX_INTERVAL: Duration = Duration::from_millis(2000);

const HELP: &str = "[space] run/pause  [n] step  [r] random  [c] clear  [1-9] seed  [+/-] speed  [q] quit";

/// The interactive Game-of-Life model.
pub struct LifeModel {
    sim: Simulation,
    running: bool,
    interval: Duration,
}

impl LifeModel {
    /// Create a paused model over an empty board.
    pub fn new() -> Self {
        Self {
            sim: Simulation::new(BOARD_SIZE),
            running: false,
            interval: TICK_INTERVAL,
        }
    }

    #[cfg(test)]
    fn with_seed(seed: u64) -> Self {
        Self {
            sim: Simulation::with_seed(BOARD_SIZE, seed),
            running: false,
            interval: TICK_INTERVAL,
        }
    }

    /// Schedule the next generation tick, tagged with the current
    /// generation so ticks that outlive a pause or reseed are discarded.
    fn tick_effect(&self) -> Option<Effect> {
        if !self.running {
            return None;
        }
        let interval = self.interval;
        let generation = self.sim.generation();
        Some(cmd(move || {
            thread::sleep(interval);
            Some(Msg::Tick { generation })
        }))
    }

    fn handle_key(&mut self, key: Key) -> Option<Effect> {
        match key {
            Key::Char('q') | Key::Escape => return Some(Effect::End),
            Key::Space | Key::Char('p') => {
                self.running = !self.running;
                return self.tick_effect();
            }
            Key::Enter | Key::Char('n') => {
                // Manual steps and reseeds move the generation counter, so
                // the tick already in flight arrives stale; reschedule under
                // the new tag or a running simulation would freeze.
                self.sim.step();
                return self.tick_effect();
            }
            Key::Char('r') => {
                self.sim.randomize(DEFAULT_LIVE_PROBABILITY);
                return self.tick_effect();
            }
            Key::Char('c') => {
                self.sim.clear();
                self.running = false;
            }
            Key::Char('+') => {
                self.interval = (self.interval / 2).max(MIN_INTERVAL);
            }
            Key::Char('-') => {
                self.interval = (self.interval * 2).min(MAX_INTERVAL);
            }
            Key::Char(c) => {
                if let Some(i) = c.to_digit(10).filter(|&d| (1..=9).contains(&d)) {
                    let pattern = patterns::ALL[i as usize - 1];
                    self.sim.seed_pattern(&pattern.stamp(BOARD_SIZE));
                    self.running = false;
                }
            }
        }
        None
    }
}

impl Default for LifeModel {
    fn default() -> Self {
        Self::new()
    }
}

impl Model for LifeModel {
    fn update(&mut self, msg: Msg) -> Option<Effect> {
        match msg {
            Msg::Init | Msg::Redraw => None,
            Msg::Key(key) => self.handle_key(key),
            Msg::ToggleCell { row, col } => {
                // A conforming driver pre-validates; out of range here is a
                // driver bug, not a reason to crash.
                if let Err(e) = self.sim.toggle_cell(row, col) {
                    log::warn!("driver sent out-of-range toggle: {e}");
                }
                None
            }
            Msg::Tick { generation } => {
                // A tick scheduled before a pause, clear, or reseed carries
                // a stale generation tag and is dropped.
                if self.running && generation == self.sim.generation() {
                    self.sim.step();
                    self.tick_effect()
                } else {
                    None
                }
            }
            Msg::Quit => Some(Effect::End),
        }
    }

    fn draw(&self, view: &mut BoardView) {
        view.copy_grid(self.sim.grid());
        let state = if self.running { "running" } else { "paused" };
        view.set_hud(format!(
            "gen {}  pop {}  {} ({}ms)  {}",
            self.sim.generation(),
            self.sim.population(),
            state,
            self.interval.as_millis(),
            HELP
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lifegrid_core::CellState;

    fn live_cells(model: &LifeModel) -> usize {
        model.sim.population()
    }

    #[test]
    fn starts_paused_and_empty() {
        let model = LifeModel::new();
        assert!(!model.running);
        assert_eq!(live_cells(&model), 0);
        assert_eq!(model.interval, TICK_INTERVAL);
    }

    #[test]
    fn space_toggles_running_and_schedules_a_tick() {
        let mut model = LifeModel::with_seed(1);
        let effect = model.update(Msg::Key(Key::Space));
        assert!(model.running);
        assert!(matches!(effect, Some(Effect::Cmd(_))));

        let effect = model.update(Msg::Key(Key::Space));
        assert!(!model.running);
        assert!(effect.is_none());
    }

    #[test]
    fn step_key_advances_one_generation() {
        let mut model = LifeModel::with_seed(2);
        model.update(Msg::Key(Key::Char('2'))); // blinker
        model.update(Msg::Key(Key::Enter));
        assert_eq!(model.sim.generation(), 1);
        model.update(Msg::Key(Key::Char('n')));
        assert_eq!(model.sim.generation(), 2);
        assert!(!model.running);
    }

    #[test]
    fn matching_tick_steps_and_reschedules() {
        let mut model = LifeModel::with_seed(3);
        model.update(Msg::Key(Key::Char('2')));
        model.update(Msg::Key(Key::Space));
        let effect = model.update(Msg::Tick { generation: 0 });
        assert_eq!(model.sim.generation(), 1);
        assert!(matches!(effect, Some(Effect::Cmd(_))));
    }

    #[test]
    fn stale_tick_is_dropped() {
        let mut model = LifeModel::with_seed(4);
        model.update(Msg::Key(Key::Char('2')));
        model.update(Msg::Key(Key::Space));
        model.update(Msg::Tick { generation: 0 });
        // A leftover tick for generation 0 arrives after the step to 1.
        let effect = model.update(Msg::Tick { generation: 0 });
        assert_eq!(model.sim.generation(), 1);
        assert!(effect.is_none());

        // Ticks are also dropped while paused.
        model.update(Msg::Key(Key::Space));
        let effect = model.update(Msg::Tick { generation: 1 });
        assert_eq!(model.sim.generation(), 1);
        assert!(effect.is_none());
    }

    #[test]
    fn manual_step_while_running_keeps_ticking() {
        let mut model = LifeModel::with_seed(11);
        model.update(Msg::Key(Key::Char('2'))); // blinker
        model.update(Msg::Key(Key::Space)); // tick tagged gen 0 in flight
        let effect = model.update(Msg::Key(Key::Char('n')));
        assert_eq!(model.sim.generation(), 1);
        assert!(model.running);
        assert!(matches!(effect, Some(Effect::Cmd(_))));
        // The old tick is stale and dropped, the rescheduled one lands.
        assert!(model.update(Msg::Tick { generation: 0 }).is_none());
        let effect = model.update(Msg::Tick { generation: 1 });
        assert_eq!(model.sim.generation(), 2);
        assert!(matches!(effect, Some(Effect::Cmd(_))));
    }

    #[test]
    fn reseed_while_running_keeps_ticking() {
        let mut model = LifeModel::with_seed(12);
        model.update(Msg::Key(Key::Space));
        let effect = model.update(Msg::Key(Key::Char('r')));
        assert!(model.running);
        assert!(matches!(effect, Some(Effect::Cmd(_))));
        let effect = model.update(Msg::Tick { generation: 0 });
        assert_eq!(model.sim.generation(), 1);
        assert!(matches!(effect, Some(Effect::Cmd(_))));
    }

    #[test]
    fn manual_step_while_paused_schedules_nothing() {
        let mut model = LifeModel::with_seed(13);
        model.update(Msg::Key(Key::Char('2')));
        assert!(model.update(Msg::Key(Key::Enter)).is_none());
        assert!(model.update(Msg::Key(Key::Char('r'))).is_none());
        assert!(!model.running);
    }

    #[test]
    fn clear_empties_the_board_and_pauses() {
        let mut model = LifeModel::with_seed(5);
        model.update(Msg::Key(Key::Char('r')));
        model.update(Msg::Key(Key::Space));
        model.update(Msg::Key(Key::Char('c')));
        assert_eq!(live_cells(&model), 0);
        assert!(!model.running);
    }

    #[test]
    fn digit_key_stamps_the_pattern_and_pauses() {
        let mut model = LifeModel::with_seed(6);
        model.update(Msg::Key(Key::Space));
        model.update(Msg::Key(Key::Char('1'))); // block
        assert_eq!(live_cells(&model), 4);
        assert_eq!(model.sim.generation(), 0);
        assert!(!model.running);
        // Zero is not a pattern key.
        model.update(Msg::Key(Key::Char('0')));
        assert_eq!(live_cells(&model), 4);
    }

    #[test]
    fn click_toggles_the_cell() {
        let mut model = LifeModel::with_seed(7);
        model.update(Msg::ToggleCell { row: 3, col: 4 });
        assert_eq!(model.sim.grid().get(3, 4), Ok(CellState::Live));
        model.update(Msg::ToggleCell { row: 3, col: 4 });
        assert_eq!(model.sim.grid().get(3, 4), Ok(CellState::Dead));
        // Out of range is logged, not a panic.
        let effect = model.update(Msg::ToggleCell { row: 99, col: 0 });
        assert!(effect.is_none());
    }

    #[test]
    fn speed_keys_halve_and_double_within_bounds() {
        let mut model = LifeModel::with_seed(8);
        model.update(Msg::Key(Key::Char('+')));
        assert_eq!(model.interval, Duration::from_millis(25));
        model.update(Msg::Key(Key::Char('-')));
        model.update(Msg::Key(Key::Char('-')));
        assert_eq!(model.interval, Duration::from_millis(100));
        for _ in 0..10 {
            model.update(Msg::Key(Key::Char('+')));
        }
        assert_eq!(model.interval, MIN_INTERVAL);
        for _ in 0..10 {
            model.update(Msg::Key(Key::Char('-')));
        }
        assert_eq!(model.interval, MAX_INTERVAL);
    }

    #[test]
    fn quit_bindings_end_the_loop() {
        for key in [Key::Char('q'), Key::Escape] {
            let mut model = LifeModel::with_seed(9);
            assert!(matches!(model.update(Msg::Key(key)), Some(Effect::End)));
        }
        let mut model = LifeModel::with_seed(9);
        assert!(matches!(model.update(Msg::Quit), Some(Effect::End)));
    }

    #[test]
    fn draw_mirrors_board_and_hud() {
        let mut model = LifeModel::with_seed(10);
        model.update(Msg::Key(Key::Char('1'))); // centered block
        let mut view = BoardView::new(BOARD_SIZE);
        model.draw(&mut view);
        assert_eq!(view.cell(14, 14), CellState::Live);
        assert_eq!(view.cell(0, 0), CellState::Dead);
        assert!(view.hud().contains("gen 0"));
        assert!(view.hud().contains("pop 4"));
        assert!(view.hud().contains("paused"));
    }
}
