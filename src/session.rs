//! Game session controller
//!
//! Owns everything the simulation deliberately doesn't: score, lives, the
//! current level index and the phase state machine
//!
//! ```text
//! Start --start--> Playing --life lost, lives left--> Playing
//!                  Playing --last life lost---------> GameOver
//!                  Playing --goal, more levels------> Start (next level)
//!                  Playing --goal, last level-------> Won
//! GameOver | Won --restart--> Start (level 1)
//! ```
//!
//! Commands that don't apply to the current phase are ignored.

use crate::error::ConfigError;
use crate::sim::{GameEvent, GamePhase, LevelCatalog, TickInput, World, tick};
use crate::tuning::Tuning;

/// Commands from the surrounding UI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Begin (or continue into) the current level
    Start,
    /// Back to level 1 after the run ended
    Restart,
}

/// Read-only numbers for the HUD
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HudSnapshot {
    pub score: u32,
    pub level: u32,
    pub lives: u32,
    pub phase: GamePhase,
}

/// A single player's run through the levels
#[derive(Debug, Clone)]
pub struct Session {
    catalog: LevelCatalog,
    tuning: Tuning,
    phase: GamePhase,
    score: u32,
    lives: u32,
    /// 1-based
    level: u32,
    world: World,
}

impl Session {
    /// New session at level 1, waiting for the start command
    pub fn new(catalog: LevelCatalog, tuning: Tuning) -> Result<Self, ConfigError> {
        tuning.validate()?;
        let world = World::from_layout(1, catalog.load(1));
        Ok(Self {
            lives: tuning.starting_lives,
            catalog,
            tuning,
            phase: GamePhase::Start,
            score: 0,
            level: 1,
            world,
        })
    }

    /// Session over the bundled levels with default tuning
    pub fn builtin() -> Result<Self, ConfigError> {
        Self::new(LevelCatalog::builtin()?, Tuning::default())
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    /// Direct world access for scripted scenarios and debugging
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn hud(&self) -> HudSnapshot {
        HudSnapshot {
            score: self.score,
            level: self.level,
            lives: self.lives,
            phase: self.phase,
        }
    }

    /// The frame loop should keep running. False means the host must stop
    /// scheduling frames until the next start command.
    pub fn wants_frames(&self) -> bool {
        self.phase == GamePhase::Playing
    }

    /// Handle a UI command. Returns whether it was accepted.
    pub fn handle(&mut self, command: Command) -> bool {
        match (self.phase, command) {
            (GamePhase::Start, Command::Start) => {
                self.score = 0;
                self.lives = self.tuning.starting_lives;
                self.load_level(self.level);
                self.set_phase(GamePhase::Playing);
                true
            }
            (GamePhase::GameOver | GamePhase::Won, Command::Restart) => {
                self.score = 0;
                self.lives = self.tuning.starting_lives;
                self.level = 1;
                self.load_level(1);
                self.set_phase(GamePhase::Start);
                true
            }
            (phase, command) => {
                log::debug!("Ignoring {command:?} in {phase:?}");
                false
            }
        }
    }

    /// Run one tick and apply its events. Does nothing outside `Playing`.
    ///
    /// Returns the events that were applied; anything emitted after the
    /// phase left `Playing` in the same tick is dropped.
    pub fn frame(&mut self, input: &TickInput) -> Vec<GameEvent> {
        if self.phase != GamePhase::Playing {
            return Vec::new();
        }

        let mut applied = Vec::new();
        for event in tick(&mut self.world, input, &self.tuning, self.lives) {
            if self.phase != GamePhase::Playing {
                break;
            }
            self.apply(event);
            applied.push(event);
        }
        applied
    }

    fn apply(&mut self, event: GameEvent) {
        match event {
            GameEvent::CoinCollected { points, .. } | GameEvent::EnemyDefeated { points, .. } => {
                self.score = self.score.saturating_add(points);
            }
            GameEvent::PlayerHit | GameEvent::PlayerFell => self.lose_life(),
            GameEvent::GoalReached => self.complete_level(),
        }
    }

    fn lose_life(&mut self) {
        self.lives = self.lives.saturating_sub(1);
        log::info!("Life lost, {} left", self.lives);
        if self.lives == 0 {
            self.set_phase(GamePhase::GameOver);
        }
    }

    fn complete_level(&mut self) {
        if self.catalog.is_last(self.level) {
            log::info!("Final level {} complete, score {}", self.level, self.score);
            self.set_phase(GamePhase::Won);
        } else {
            self.level += 1;
            self.load_level(self.level);
            self.set_phase(GamePhase::Start);
        }
    }

    fn load_level(&mut self, level: u32) {
        self.world = World::from_layout(level, self.catalog.load(level));
        log::info!("Loaded level {level}");
    }

    fn set_phase(&mut self, phase: GamePhase) {
        if phase != self.phase {
            log::info!("Phase {:?} -> {:?}", self.phase, phase);
            self.phase = phase;
        }
    }
}
