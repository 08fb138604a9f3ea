//! Simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - One fixed logical step per tick
//! - Stable iteration order (level data order)
//! - No rendering, platform or session dependencies

pub mod collision;
pub mod geometry;
pub mod input;
pub mod level;
pub mod state;
pub mod tick;

pub use geometry::Rect;
pub use input::{InputState, Intent, Key, TickInput};
pub use level::{CoinDef, EnemyDef, LevelCatalog, LevelLayout, SpawnPoint};
pub use state::{
    Coin, Enemy, EnemyState, Facing, Footing, GameEvent, GamePhase, Player, World,
};
pub use tick::{camera_offset, tick};
