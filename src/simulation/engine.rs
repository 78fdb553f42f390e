//! Simulation engine
//!
//! Owns the board, the Brian's Brain dying plane, the ant, the statistics
//! and the cycle detector for whichever automaton is active. Switching
//! automata always goes through [`Engine::seed`], which rebuilds all of it.

use crate::config::{EngineConfig, SpeedLevel};
use crate::grid::Board;
use crate::patterns::Generator;
use crate::simulation::detector::{CycleDetector, RunState};
use crate::simulation::rules::{brians_brain, life_like, Ant, CellState, LifeRule, RuleKind};
use crate::simulation::stats::Statistics;
use crate::simulation::traits::Simulation;
use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;

/// Result of advancing one generation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StepReport {
    pub cell_count: u32,
    pub generation_delta: u64,
}

/// Externally visible run status.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Status {
    pub generation: u64,
    pub cell_count: u32,
    pub max_cell_count: u32,
    /// Classification of the latest generation. Always `Running` when
    /// detection is off for the active mode.
    pub run_state: RunState,
}

/// Statistics captured the first time a run left `Running`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunSummary {
    pub state: RunState,
    pub stats: Statistics,
}

/// Whether runs of `rule` seeded by `generator` are checked for
/// termination. Only Conway's Life from a preset or an open random fill is.
pub fn detects_termination(rule: RuleKind, generator: &Generator) -> bool {
    rule == RuleKind::Conway
        && matches!(generator, Generator::Preset(_) | Generator::Random { .. })
}

/// The cellular automaton engine.
pub struct Engine {
    config: EngineConfig,
    rule: RuleKind,
    generator: Generator,
    board: Board,
    dying: Board,
    ant: Option<Ant>,
    stats: Statistics,
    detector: CycleDetector,
    detect_termination: bool,
    run_state: RunState,
    termination: Option<RunSummary>,
    rng: StdRng,
    running: bool,
}

impl Engine {
    /// Create an engine holding an empty Conway board.
    pub fn new(config: EngineConfig) -> Self {
        let rng = match config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        };
        let board = Board::new();
        Self {
            config,
            rule: RuleKind::Conway,
            generator: Generator::Empty,
            detector: CycleDetector::new(&board),
            board,
            dying: Board::new(),
            ant: None,
            stats: Statistics::new(),
            detect_termination: false,
            run_state: RunState::Running,
            termination: None,
            rng,
            running: true,
        }
    }

    /// Discard the current run and build a new one for `rule` from
    /// `generator`. Statistics and fingerprints start over.
    pub fn seed(&mut self, rule: RuleKind, generator: Generator) -> &Board {
        self.clear();
        self.rule = rule;
        self.generator = generator;
        generator.generate(&mut self.board, &mut self.rng, self.config.small_min_seeds);
        if rule == RuleKind::LangtonsAnt {
            self.ant = Some(Ant::centered());
        }
        self.detector.reset(&self.board);
        self.detect_termination = detects_termination(rule, &generator);
        self.running = true;

        debug!(
            "seeded {} from {}: {} live cells",
            rule,
            generator,
            self.board.count_live()
        );
        &self.board
    }

    /// Zero the board, planes, ant and statistics.
    pub fn clear(&mut self) {
        self.board.clear_all();
        self.dying.clear_all();
        self.ant = None;
        self.stats.reset();
        self.detector.reset(&self.board);
        self.run_state = RunState::Running;
        self.termination = None;
    }

    /// Advance the active automaton by one generation (one ant step for
    /// Langton's Ant).
    pub fn step(&mut self) -> StepReport {
        let cell_count = match self.rule {
            RuleKind::Conway => life_like::step_conway(&mut self.board),
            RuleKind::DayAndNight => {
                life_like::step_moore(&mut self.board, &LifeRule::DAY_AND_NIGHT)
            }
            RuleKind::Seeds => life_like::step_moore(&mut self.board, &LifeRule::SEEDS),
            RuleKind::BriansBrain => brians_brain::step(&mut self.board, &mut self.dying),
            RuleKind::LangtonsAnt => {
                let ant = self.ant.get_or_insert_with(Ant::centered);
                ant.step(&mut self.board);
                self.board.count_live()
            }
        };
        self.stats.record_step(cell_count);

        if self.detect_termination {
            self.run_state = self
                .detector
                .observe(&self.board, self.stats.generation, cell_count);
            if self.run_state.is_terminal() && self.termination.is_none() {
                info!(
                    "{} run ended {:?} at generation {} ({} cells, max {})",
                    self.rule,
                    self.run_state,
                    self.stats.generation,
                    self.stats.cell_count,
                    self.stats.max_cell_count
                );
                self.termination = Some(RunSummary {
                    state: self.run_state,
                    stats: self.stats,
                });
            }
        }

        StepReport {
            cell_count,
            generation_delta: 1,
        }
    }

    pub fn status(&self) -> Status {
        Status {
            generation: self.stats.generation,
            cell_count: self.stats.cell_count,
            max_cell_count: self.stats.max_cell_count,
            run_state: self.run_state,
        }
    }

    /// Every cell as `(x, y, alive)`. Read-only.
    pub fn snapshot(&self) -> impl Iterator<Item = (usize, usize, bool)> + '_ {
        self.board.cells()
    }

    /// Three-state view of a cell; only Brian's Brain ever reports `Dying`.
    pub fn cell_state(&self, x: i32, y: i32) -> CellState {
        brians_brain::cell_state(&self.board, &self.dying, x, y)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn ant(&self) -> Option<&Ant> {
        self.ant.as_ref()
    }

    pub fn rule(&self) -> RuleKind {
        self.rule
    }

    pub fn generator(&self) -> Generator {
        self.generator
    }

    pub fn detects_termination(&self) -> bool {
        self.detect_termination
    }

    /// Snapshot from the first generation that left `Running`.
    pub fn termination(&self) -> Option<RunSummary> {
        self.termination
    }

    /// Fingerprint of the latest generation checked for termination, or of
    /// the seed when detection is off.
    pub fn fingerprint(&self) -> u32 {
        self.detector.game_hash()
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl Simulation for Engine {
    fn name(&self) -> &str {
        self.rule.name()
    }

    fn tick(&mut self) -> StepReport {
        self.step()
    }

    fn tick_interval(&self, speed: SpeedLevel) -> Duration {
        match self.rule {
            RuleKind::LangtonsAnt => self.config.ant_interval,
            _ => speed.frame_delay(),
        }
    }

    fn status(&self) -> Status {
        Engine::status(self)
    }

    fn board(&self) -> &Board {
        &self.board
    }

    fn is_running(&self) -> bool {
        self.running
    }

    fn set_running(&mut self, running: bool) {
        self.running = running;
    }

    fn reset(&mut self) {
        let (rule, generator) = (self.rule, self.generator);
        self.seed(rule, generator);
    }
}
