//! World state and core simulation types

use glam::Vec2;

use super::geometry::Rect;
use super::level::{LevelLayout, SpawnPoint};
use crate::consts::*;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GamePhase {
    /// Level intro, waiting for the start command
    #[default]
    Start,
    /// Active gameplay, ticks are running
    Playing,
    /// Out of lives
    GameOver,
    /// Last level completed
    Won,
}

/// Which way the player is looking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

/// Whether the player stands on something this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Footing {
    Grounded,
    Airborne,
}

/// The player character
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    /// Top-left corner
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: Vec2,
    pub footing: Footing,
    pub facing: Facing,
}

impl Player {
    pub fn new(spawn: SpawnPoint) -> Self {
        Self {
            pos: Vec2::new(spawn.x, spawn.y),
            vel: Vec2::ZERO,
            size: Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT),
            footing: Footing::Airborne,
            facing: Facing::Right,
        }
    }

    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.size)
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    #[inline]
    pub fn is_airborne(&self) -> bool {
        self.footing == Footing::Airborne
    }

    /// Back to the spawn point, at rest. Facing is kept.
    pub fn respawn(&mut self, spawn: SpawnPoint) {
        self.pos = Vec2::new(spawn.x, spawn.y);
        self.vel = Vec2::ZERO;
        self.footing = Footing::Airborne;
    }
}

/// A collectible coin. Stays in the list after pickup, just hidden.
#[derive(Debug, Clone, PartialEq)]
pub struct Coin {
    /// Top-left of the pickup box
    pub pos: Vec2,
    pub collected: bool,
}

impl Coin {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            collected: false,
        }
    }

    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, COIN_RADIUS * 2.0, COIN_RADIUS * 2.0)
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::splat(COIN_RADIUS)
    }
}

/// Enemy lifecycle
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EnemyState {
    /// Walking at `pos` (top-left) with horizontal speed `vx`
    Alive { pos: Vec2, vx: f32 },
    /// Stomped; never moves, collides or renders again
    Defeated,
}

/// A patrolling enemy
#[derive(Debug, Clone, PartialEq)]
pub struct Enemy {
    pub size: Vec2,
    pub state: EnemyState,
}

impl Enemy {
    pub fn new(pos: Vec2, vx: f32, size: Vec2) -> Self {
        Self {
            size,
            state: EnemyState::Alive { pos, vx },
        }
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        matches!(self.state, EnemyState::Alive { .. })
    }

    /// Collision box, if still alive
    pub fn rect(&self) -> Option<Rect> {
        match self.state {
            EnemyState::Alive { pos, .. } => Some(Rect::from_pos_size(pos, self.size)),
            EnemyState::Defeated => None,
        }
    }
}

/// Discrete outcome of a tick, applied by the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    CoinCollected { coin: usize, points: u32 },
    EnemyDefeated { enemy: usize, points: u32 },
    /// Touched an enemy without stomping it
    PlayerHit,
    /// Dropped below the world
    PlayerFell,
    GoalReached,
}

impl GameEvent {
    /// Points this event is worth
    pub fn points(&self) -> u32 {
        match self {
            GameEvent::CoinCollected { points, .. } | GameEvent::EnemyDefeated { points, .. } => {
                *points
            }
            _ => 0,
        }
    }

    /// Whether this event costs a life
    pub fn costs_life(&self) -> bool {
        matches!(self, GameEvent::PlayerHit | GameEvent::PlayerFell)
    }
}

/// One loaded level instance: fixed geometry plus the mutable entities on it
#[derive(Debug, Clone)]
pub struct World {
    /// 1-based level index this world was loaded from
    pub level: u32,
    layout: LevelLayout,
    pub player: Player,
    pub coins: Vec<Coin>,
    pub enemies: Vec<Enemy>,
    /// Horizontal scroll, recomputed every tick
    pub camera: f32,
    /// Ticks since load
    pub ticks: u64,
}

impl World {
    pub fn from_layout(level: u32, layout: LevelLayout) -> Self {
        let coins = layout.coins.iter().map(|c| Coin::new(c.x, c.y)).collect();
        let enemies = layout
            .enemies
            .iter()
            .map(|e| {
                Enemy::new(
                    Vec2::new(e.x, e.y),
                    e.vx,
                    Vec2::new(e.width, e.height),
                )
            })
            .collect();
        Self {
            level,
            player: Player::new(layout.spawn),
            coins,
            enemies,
            camera: 0.0,
            ticks: 0,
            layout,
        }
    }

    /// Read-only layout next to the mutable entities, for the tick
    pub(super) fn split_mut(&mut self) -> (&LevelLayout, &mut Player, &mut [Coin], &mut [Enemy]) {
        (
            &self.layout,
            &mut self.player,
            self.coins.as_mut_slice(),
            self.enemies.as_mut_slice(),
        )
    }

    pub fn platforms(&self) -> &[Rect] {
        &self.layout.platforms
    }

    pub fn goal(&self) -> Rect {
        self.layout.goal
    }

    pub fn spawn(&self) -> SpawnPoint {
        self.layout.spawn
    }

    pub fn coins_remaining(&self) -> usize {
        self.coins.iter().filter(|c| !c.collected).count()
    }

    pub fn enemies_alive(&self) -> usize {
        self.enemies.iter().filter(|e| e.is_alive()).count()
    }
}
