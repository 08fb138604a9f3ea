//! Scene building: world state to a triangle list
//!
//! Read-only over the world. Draw order is back to front.

use glam::Vec2;

use super::shapes::{circle, rect, scrolled_rect, triangle};
use super::vertex::{Vertex, colors};
use crate::consts::COIN_RADIUS;
use crate::sim::{Facing, World};

const CLOUD_COUNT: usize = 5;
const CLOUD_SPACING: f32 = 400.0;
const CLOUD_WRAP: f32 = 1200.0;
const CLOUD_PARALLAX: f32 = 0.5;
const GRASS_HEIGHT: f32 = 5.0;
const COIN_INNER_RADIUS: f32 = 6.0;
const COIN_SEGMENTS: u32 = 16;
const POLE_WIDTH: f32 = 5.0;

/// Renderer switches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SceneOptions {
    pub clouds: bool,
}

impl Default for SceneOptions {
    fn default() -> Self {
        Self { clouds: true }
    }
}

/// Build the full frame for `world` in logical canvas pixels
pub fn build_scene(world: &World, options: &SceneOptions) -> Vec<Vertex> {
    let cam = world.camera;
    let mut out = Vec::with_capacity(1024);

    if options.clouds {
        for i in 0..CLOUD_COUNT {
            let fi = i as f32;
            // f32 `%` keeps the dividend's sign, so clouds slide off the left edge
            let x = (fi * CLOUD_SPACING - cam * CLOUD_PARALLAX) % CLOUD_WRAP;
            out.extend(rect(x, 50.0 + 30.0 * fi, 60.0, 30.0, colors::CLOUD));
            out.extend(rect(x + 20.0, 40.0 + 30.0 * fi, 60.0, 30.0, colors::CLOUD));
        }
    }

    for platform in world.platforms() {
        out.extend(scrolled_rect(platform, cam, colors::PLATFORM));
        out.extend(rect(
            platform.x - cam,
            platform.y,
            platform.width,
            GRASS_HEIGHT,
            colors::GRASS,
        ));
    }

    for coin in world.coins.iter().filter(|c| !c.collected) {
        let center = coin.center() - Vec2::new(cam, 0.0);
        out.extend(circle(center, COIN_RADIUS, colors::COIN_OUTER, COIN_SEGMENTS));
        out.extend(circle(
            center,
            COIN_INNER_RADIUS,
            colors::COIN_INNER,
            COIN_SEGMENTS,
        ));
    }

    for body in world.enemies.iter().filter_map(|e| e.rect()) {
        let x = body.x - cam;
        out.extend(rect(x, body.y, body.width, body.height, colors::ENEMY));
        out.extend(rect(x + 8.0, body.y + 8.0, 6.0, 6.0, colors::ENEMY_EYE));
        out.extend(rect(x + 18.0, body.y + 8.0, 6.0, 6.0, colors::ENEMY_EYE));
    }

    let goal = world.goal();
    let gx = goal.x - cam;
    out.extend(rect(gx, goal.y, POLE_WIDTH, goal.height, colors::FLAG_POLE));
    out.extend(triangle(
        Vec2::new(gx + 5.0, goal.y),
        Vec2::new(gx + 5.0, goal.y + 40.0),
        Vec2::new(gx + 35.0, goal.y + 20.0),
        colors::FLAG,
    ));

    push_player(&mut out, world, cam);
    out
}

fn push_player(out: &mut Vec<Vertex>, world: &World, cam: f32) {
    let player = &world.player;
    let x = player.pos.x - cam;
    let y = player.pos.y;

    out.extend(rect(x, y, player.size.x, player.size.y, colors::PLAYER_BODY));
    out.extend(rect(x + 8.0, y + 8.0, 16.0, 12.0, colors::PLAYER_FACE));

    let eyes = match player.facing {
        Facing::Right => [12.0, 18.0],
        Facing::Left => [10.0, 16.0],
    };
    for dx in eyes {
        out.extend(rect(x + dx, y + 12.0, 3.0, 3.0, colors::PLAYER_FEATURES));
    }
    out.extend(rect(x + 10.0, y + 18.0, 12.0, 2.0, colors::PLAYER_FEATURES));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{EnemyState, LevelCatalog};

    fn world() -> World {
        let catalog = LevelCatalog::builtin().unwrap();
        World::from_layout(1, catalog.load(1))
    }

    fn count(verts: &[Vertex], color: [f32; 4]) -> usize {
        verts.iter().filter(|v| v.color == color).count()
    }

    #[test]
    fn test_collected_coins_not_drawn() {
        let mut w = world();
        let opts = SceneOptions::default();
        let before = count(&build_scene(&w, &opts), colors::COIN_OUTER);
        assert_eq!(before, 6 * COIN_SEGMENTS as usize * 3);

        w.coins[0].collected = true;
        let after = count(&build_scene(&w, &opts), colors::COIN_OUTER);
        assert_eq!(after, 5 * COIN_SEGMENTS as usize * 3);
    }

    #[test]
    fn test_defeated_enemies_not_drawn() {
        let mut w = world();
        let opts = SceneOptions::default();
        assert_eq!(count(&build_scene(&w, &opts), colors::ENEMY), 3 * 6);

        w.enemies[1].state = EnemyState::Defeated;
        assert_eq!(count(&build_scene(&w, &opts), colors::ENEMY), 2 * 6);
    }

    #[test]
    fn test_clouds_toggle() {
        let w = world();
        let on = build_scene(&w, &SceneOptions { clouds: true });
        let off = build_scene(&w, &SceneOptions { clouds: false });
        // Clouds are the only white besides enemy eyes
        assert_eq!(count(&on, colors::CLOUD) - count(&off, colors::CLOUD), 5 * 2 * 6);
    }

    #[test]
    fn test_camera_shifts_everything() {
        let mut w = world();
        let opts = SceneOptions { clouds: false };
        let base = build_scene(&w, &opts);
        w.camera = 100.0;
        let shifted = build_scene(&w, &opts);
        assert_eq!(base.len(), shifted.len());
        for (a, b) in base.iter().zip(&shifted) {
            assert!((a.position[0] - 100.0 - b.position[0]).abs() < 1e-3);
            assert_eq!(a.position[1], b.position[1]);
        }
    }

    #[test]
    fn test_eyes_follow_facing() {
        let mut w = world();
        let opts = SceneOptions { clouds: false };
        let eye_xs = |w: &World| -> Vec<f32> {
            let verts = build_scene(w, &opts);
            let mut xs: Vec<f32> = verts
                .iter()
                .filter(|v| v.color == colors::PLAYER_FEATURES && v.position[1] == 312.0)
                .map(|v| v.position[0])
                .collect();
            xs.sort_by(f32::total_cmp);
            xs.dedup();
            xs
        };

        // Player at (50, 300); eye tops at y + 12
        assert_eq!(eye_xs(&w), vec![62.0, 65.0, 68.0, 71.0]);
        w.player.facing = Facing::Left;
        assert_eq!(eye_xs(&w), vec![60.0, 63.0, 66.0, 69.0]);
    }

    #[test]
    fn test_cloud_wrap_keeps_sign() {
        let mut w = world();
        w.camera = 900.0;
        let verts = build_scene(&w, &SceneOptions::default());
        // First cloud: (0 - 450) % 1200 = -450
        assert_eq!(verts[0].position, [-450.0, 50.0]);
    }
}
