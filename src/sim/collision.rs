//! Collision tests
//!
//! Everything is box-vs-box. The interesting cases are one-way landings
//! (only while falling, only within a thin band under a platform's top) and
//! the stomp test that decides whether touching an enemy kills it or you.

use super::geometry::Rect;
use super::state::Player;
use crate::tuning::BounceRule;

/// Player is falling onto `platform` this tick.
///
/// Rising through a platform or hanging below it never counts, so platforms
/// can be jumped through from underneath.
pub fn lands_on(player: &Player, platform: &Rect, landing_band: f32) -> bool {
    let bottom = player.bottom();
    player.rect().overlaps_x(platform)
        && bottom > platform.y
        && bottom < platform.y + landing_band
        && player.vel.y > 0.0
}

/// Contact with `enemy` is a stomp rather than a hit
pub fn is_stomp(player: &Player, enemy: &Rect, stomp_margin: f32) -> bool {
    player.vel.y > 0.0 && player.bottom() - stomp_margin < enemy.y
}

/// `platform` holds up an enemy box (its top sits just under the enemy's feet)
pub fn supports(platform: &Rect, enemy: &Rect, landing_band: f32) -> bool {
    let gap = platform.y - enemy.bottom();
    enemy.overlaps_x(platform) && (0.0..landing_band).contains(&gap)
}

/// Whether `platform` turns an enemy around this tick
pub fn enemy_bounces(enemy: &Rect, platform: &Rect, rule: BounceRule, landing_band: f32) -> bool {
    match rule {
        BounceRule::AnyPlatform => enemy.exits_x(platform),
        BounceRule::SupportingPlatform => {
            supports(platform, enemy, landing_band) && enemy.exits_x(platform)
        }
    }
}

/// Goal only checks horizontal overlap; jumping over the flag still counts
#[inline]
pub fn touches_goal(player: &Player, goal: &Rect) -> bool {
    player.rect().overlaps_x(goal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::level::SpawnPoint;
    use glam::Vec2;

    fn player_at(x: f32, y: f32, vy: f32) -> Player {
        let mut p = Player::new(SpawnPoint::default());
        p.pos = Vec2::new(x, y);
        p.vel.y = vy;
        p
    }

    #[test]
    fn test_lands_when_falling_into_band() {
        let ground = Rect::new(0.0, 400.0, 2000.0, 50.0);
        // Bottom at 405, inside the 20px band
        assert!(lands_on(&player_at(50.0, 373.0, 3.0), &ground, 20.0));
    }

    #[test]
    fn test_no_landing_when_rising() {
        let ground = Rect::new(0.0, 400.0, 2000.0, 50.0);
        assert!(!lands_on(&player_at(50.0, 373.0, -3.0), &ground, 20.0));
        assert!(!lands_on(&player_at(50.0, 373.0, 0.0), &ground, 20.0));
    }

    #[test]
    fn test_no_landing_below_band() {
        let platform = Rect::new(300.0, 320.0, 120.0, 20.0);
        // Bottom at 345: below top + 20
        assert!(!lands_on(&player_at(320.0, 313.0, 5.0), &platform, 20.0));
        // Bottom exactly at the top: not yet overlapping
        assert!(!lands_on(&player_at(320.0, 288.0, 5.0), &platform, 20.0));
    }

    #[test]
    fn test_no_landing_beside_platform() {
        let platform = Rect::new(300.0, 320.0, 120.0, 20.0);
        assert!(!lands_on(&player_at(268.0, 293.0, 5.0), &platform, 20.0));
        assert!(lands_on(&player_at(269.0, 293.0, 5.0), &platform, 20.0));
    }

    #[test]
    fn test_stomp_vs_hit() {
        let enemy = Rect::new(400.0, 368.0, 30.0, 30.0);
        // Feet 5px into the enemy while falling: stomp
        assert!(is_stomp(&player_at(400.0, 341.0, 4.0), &enemy, 10.0));
        // Feet 15px in: side hit
        assert!(!is_stomp(&player_at(400.0, 351.0, 4.0), &enemy, 10.0));
        // Rising into it: hit
        assert!(!is_stomp(&player_at(400.0, 341.0, -4.0), &enemy, 10.0));
    }

    #[test]
    fn test_any_platform_rule_counts_unrelated_platforms() {
        let enemy = Rect::new(400.0, 368.0, 30.0, 30.0);
        let ground = Rect::new(0.0, 400.0, 2000.0, 50.0);
        let floating = Rect::new(700.0, 200.0, 120.0, 20.0);
        assert!(!enemy_bounces(&enemy, &ground, BounceRule::AnyPlatform, 20.0));
        assert!(enemy_bounces(&enemy, &floating, BounceRule::AnyPlatform, 20.0));
    }

    #[test]
    fn test_supporting_rule_ignores_unrelated_platforms() {
        let ground = Rect::new(0.0, 400.0, 2000.0, 50.0);
        let floating = Rect::new(700.0, 200.0, 120.0, 20.0);
        let walking = Rect::new(400.0, 368.0, 30.0, 30.0);
        assert!(!enemy_bounces(&walking, &floating, BounceRule::SupportingPlatform, 20.0));
        assert!(!enemy_bounces(&walking, &ground, BounceRule::SupportingPlatform, 20.0));

        let at_edge = Rect::new(1980.0, 368.0, 30.0, 30.0);
        assert!(enemy_bounces(&at_edge, &ground, BounceRule::SupportingPlatform, 20.0));
    }

    #[test]
    fn test_goal_ignores_height() {
        let goal = Rect::new(1800.0, 250.0, 40.0, 150.0);
        assert!(touches_goal(&player_at(1800.0, 0.0, 0.0), &goal));
        assert!(touches_goal(&player_at(1769.0, 368.0, 0.0), &goal));
        assert!(!touches_goal(&player_at(1768.0, 368.0, 0.0), &goal));
    }
}
