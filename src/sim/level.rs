//! Level layouts
//!
//! Levels are plain data: an ordered list of descriptors bundled as JSON.
//! The catalog is validated once at startup; after that, loading a level
//! can't fail (unknown indices get level 1).

use serde::{Deserialize, Serialize};

use super::geometry::Rect;
use crate::consts::{SPAWN_X, SPAWN_Y};
use crate::error::ConfigError;

/// Coin placement (top-left of its pickup box)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoinDef {
    pub x: f32,
    pub y: f32,
}

/// A walking enemy's starting box and horizontal speed
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnemyDef {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub width: f32,
    pub height: f32,
}

impl EnemyDef {
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

/// Where the player appears at level start and after losing a life
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpawnPoint {
    pub x: f32,
    pub y: f32,
}

impl Default for SpawnPoint {
    fn default() -> Self {
        Self {
            x: SPAWN_X,
            y: SPAWN_Y,
        }
    }
}

/// One level's immutable geometry and starting entities
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelLayout {
    pub platforms: Vec<Rect>,
    #[serde(default)]
    pub coins: Vec<CoinDef>,
    #[serde(default)]
    pub enemies: Vec<EnemyDef>,
    pub goal: Rect,
    #[serde(default)]
    pub spawn: SpawnPoint,
}

impl LevelLayout {
    fn validate(&self, level: usize) -> Result<(), ConfigError> {
        let invalid = |reason: String| ConfigError::InvalidLevel { level, reason };

        if self.platforms.is_empty() {
            return Err(invalid("no platforms".into()));
        }
        if let Some(i) = self.platforms.iter().position(|p| !p.is_well_formed()) {
            return Err(invalid(format!("platform {i} has a bad size")));
        }
        if !self.goal.is_well_formed() {
            return Err(invalid("goal has a bad size".into()));
        }
        if let Some(i) = self
            .enemies
            .iter()
            .position(|e| !e.rect().is_well_formed() || !e.vx.is_finite())
        {
            return Err(invalid(format!("enemy {i} is malformed")));
        }
        if let Some(i) = self
            .coins
            .iter()
            .position(|c| !c.x.is_finite() || !c.y.is_finite())
        {
            return Err(invalid(format!("coin {i} is malformed")));
        }
        if !self.spawn.x.is_finite() || !self.spawn.y.is_finite() {
            return Err(invalid("spawn point is not finite".into()));
        }
        Ok(())
    }
}

/// All levels of the game, in play order (level 1 first)
#[derive(Debug, Clone)]
pub struct LevelCatalog {
    levels: Vec<LevelLayout>,
}

impl LevelCatalog {
    const BUILTIN_JSON: &'static str = include_str!("../../assets/levels.json");

    /// The two bundled levels
    pub fn builtin() -> Result<Self, ConfigError> {
        Self::from_json(Self::BUILTIN_JSON)
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let levels: Vec<LevelLayout> = serde_json::from_str(json)?;
        Self::new(levels)
    }

    pub fn new(levels: Vec<LevelLayout>) -> Result<Self, ConfigError> {
        if levels.is_empty() {
            return Err(ConfigError::NoLevels);
        }
        for (i, level) in levels.iter().enumerate() {
            level.validate(i + 1)?;
        }
        Ok(Self { levels })
    }

    /// Number of levels
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// Always false for a constructed catalog
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Whether `index` (1-based) is the final level
    pub fn is_last(&self, index: u32) -> bool {
        index as usize >= self.levels.len()
    }

    /// Layout for a 1-based level index. Unknown indices get level 1.
    pub fn load(&self, index: u32) -> LevelLayout {
        let layout = (index as usize)
            .checked_sub(1)
            .and_then(|i| self.levels.get(i))
            .unwrap_or(&self.levels[0]);
        layout.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_levels() {
        let catalog = LevelCatalog::builtin().unwrap();
        assert_eq!(catalog.len(), 2);

        let one = catalog.load(1);
        assert_eq!(one.platforms.len(), 7);
        assert_eq!(one.coins.len(), 6);
        assert_eq!(one.enemies.len(), 3);
        assert_eq!(one.goal, Rect::new(1800.0, 250.0, 40.0, 150.0));
        assert_eq!(one.spawn, SpawnPoint { x: 50.0, y: 300.0 });
        assert_eq!(one.platforms[0], Rect::new(0.0, 400.0, 2000.0, 50.0));
        assert_eq!(one.coins[0], CoinDef { x: 340.0, y: 270.0 });

        let two = catalog.load(2);
        assert_eq!(two.platforms.len(), 10);
        assert_eq!(two.coins.len(), 9);
        assert_eq!(two.enemies.len(), 4);
        assert_eq!(two.goal.x, 2200.0);
    }

    #[test]
    fn test_unknown_index_falls_back_to_level_one() {
        let catalog = LevelCatalog::builtin().unwrap();
        let one = catalog.load(1);
        assert_eq!(catalog.load(0), one);
        assert_eq!(catalog.load(3), one);
        assert_eq!(catalog.load(u32::MAX), one);
    }

    #[test]
    fn test_is_last() {
        let catalog = LevelCatalog::builtin().unwrap();
        assert!(!catalog.is_last(1));
        assert!(catalog.is_last(2));
    }

    #[test]
    fn test_missing_goal_is_config_error() {
        let json = r#"[{"platforms": [{"x":0,"y":400,"width":100,"height":50}]}]"#;
        assert!(matches!(
            LevelCatalog::from_json(json),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_empty_catalog_rejected() {
        assert!(matches!(
            LevelCatalog::from_json("[]"),
            Err(ConfigError::NoLevels)
        ));
    }

    #[test]
    fn test_bad_platform_reports_level() {
        let json = r#"[
            {"platforms": [{"x":0,"y":400,"width":100,"height":50}],
             "goal": {"x":90,"y":250,"width":40,"height":150}},
            {"platforms": [{"x":0,"y":400,"width":0,"height":50}],
             "goal": {"x":90,"y":250,"width":40,"height":150}}
        ]"#;
        match LevelCatalog::from_json(json) {
            Err(ConfigError::InvalidLevel { level, .. }) => assert_eq!(level, 2),
            other => panic!("expected InvalidLevel, got {other:?}"),
        }
    }

    #[test]
    fn test_no_platforms_rejected() {
        let json = r#"[{"platforms": [], "goal": {"x":90,"y":250,"width":40,"height":150}}]"#;
        assert!(matches!(
            LevelCatalog::from_json(json),
            Err(ConfigError::InvalidLevel { level: 1, .. })
        ));
    }
}
