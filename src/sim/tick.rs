//! Fixed-step simulation tick
//!
//! One call advances the world by one logical step; there is no `dt`, so game
//! speed follows the caller's frame rate. Stages run in a fixed order and each
//! one sees positions already updated by the stages before it.

use super::collision::{enemy_bounces, is_stomp, lands_on, touches_goal};
use super::geometry::Rect;
use super::input::TickInput;
use super::level::LevelLayout;
use super::state::{Coin, Enemy, EnemyState, Facing, Footing, GameEvent, Player, World};
use crate::tuning::Tuning;

/// Advance the world by one tick and report what happened.
///
/// The world is mutated in place; score, lives and phase are left to the
/// session, which applies the returned events in order. `lives` is the count
/// before this tick: a life loss respawns the player only while some remain,
/// so the losing frame shows where the run ended.
pub fn tick(
    world: &mut World,
    input: &TickInput,
    tuning: &Tuning,
    lives: u32,
) -> Vec<GameEvent> {
    let mut events = Vec::new();
    let mut lives = Lives(lives);
    world.ticks += 1;

    {
        let (layout, player, coins, enemies) = world.split_mut();

        apply_jump(player, input, tuning);
        apply_horizontal_intent(player, input, tuning);

        // Gravity is unconditional; landing cancels it below
        player.vel.y = (player.vel.y + tuning.gravity).min(tuning.max_fall_speed);
        player.pos += player.vel;

        resolve_platforms(player, &layout.platforms, tuning);
        collect_coins(player, coins, tuning, &mut events);
        update_enemies(player, enemies, layout, tuning, &mut lives, &mut events);

        if touches_goal(player, &layout.goal) {
            events.push(GameEvent::GoalReached);
        }

        if player.pos.y > tuning.fall_limit_y {
            events.push(GameEvent::PlayerFell);
            lives.lose(player, layout);
        }
    }

    world.camera = camera_offset(world.player.pos.x, tuning.camera_half_width);

    if !events.is_empty() {
        log::debug!("tick {}: {:?}", world.ticks, events);
    }
    events
}

/// Lives left as seen from inside the tick
struct Lives(u32);

impl Lives {
    /// Count a loss; back to spawn unless that was the last life
    fn lose(&mut self, player: &mut Player, layout: &LevelLayout) {
        self.0 = self.0.saturating_sub(1);
        if self.0 > 0 {
            player.respawn(layout.spawn);
        }
    }
}

/// Horizontal scroll for a player at `player_x`. Never negative, not clamped
/// on the right.
#[inline]
pub fn camera_offset(player_x: f32, half_width: f32) -> f32 {
    (player_x - half_width).max(0.0)
}

fn apply_jump(player: &mut Player, input: &TickInput, tuning: &Tuning) {
    if input.jump && !player.is_airborne() {
        player.vel.y = tuning.jump_velocity;
        player.footing = Footing::Airborne;
    }
}

fn apply_horizontal_intent(player: &mut Player, input: &TickInput, tuning: &Tuning) {
    if input.left {
        player.vel.x = -tuning.move_speed;
        player.facing = Facing::Left;
    } else if input.right {
        player.vel.x = tuning.move_speed;
        player.facing = Facing::Right;
    } else {
        // Exponential slide to a stop
        player.vel.x *= tuning.horizontal_damping;
    }
}

/// Every platform is checked; a later match overrides an earlier one.
fn resolve_platforms(player: &mut Player, platforms: &[Rect], tuning: &Tuning) {
    player.footing = Footing::Airborne;
    for platform in platforms {
        if lands_on(player, platform, tuning.landing_band) {
            player.pos.y = platform.y - player.size.y;
            player.vel.y = 0.0;
            player.footing = Footing::Grounded;
        }
    }
}

fn collect_coins(player: &Player, coins: &mut [Coin], tuning: &Tuning, events: &mut Vec<GameEvent>) {
    let player_rect = player.rect();
    for (i, coin) in coins.iter_mut().enumerate() {
        if !coin.collected && player_rect.overlaps(&coin.rect()) {
            coin.collected = true;
            events.push(GameEvent::CoinCollected {
                coin: i,
                points: tuning.coin_points,
            });
        }
    }
}

fn update_enemies(
    player: &mut Player,
    enemies: &mut [Enemy],
    layout: &LevelLayout,
    tuning: &Tuning,
    lives: &mut Lives,
    events: &mut Vec<GameEvent>,
) {
    for (i, enemy) in enemies.iter_mut().enumerate() {
        let rect = match &mut enemy.state {
            EnemyState::Alive { pos, vx } => {
                pos.x += *vx;
                let rect = Rect::from_pos_size(*pos, enemy.size);
                for platform in &layout.platforms {
                    if enemy_bounces(&rect, platform, tuning.enemy_bounce, tuning.landing_band) {
                        *vx = -*vx;
                    }
                }
                rect
            }
            EnemyState::Defeated => continue,
        };

        if !player.rect().overlaps(&rect) {
            continue;
        }

        if is_stomp(player, &rect, tuning.stomp_margin) {
            enemy.state = EnemyState::Defeated;
            player.vel.y = tuning.stomp_bounce_velocity;
            events.push(GameEvent::EnemyDefeated {
                enemy: i,
                points: tuning.stomp_points,
            });
        } else {
            events.push(GameEvent::PlayerHit);
            lives.lose(player, layout);
        }
    }
}
