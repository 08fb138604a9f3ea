use flag_dash::sim::{GameEvent, GamePhase, LevelCatalog, TickInput};
use flag_dash::{Command, Session, Tuning};
use glam::Vec2;

fn playing_session() -> Session {
    let mut session = Session::builtin().unwrap();
    assert!(session.handle(Command::Start));
    session
}

fn idle() -> TickInput {
    TickInput::default()
}

// ── landing ───────────────────────────────────────────────────────────────────

#[test]
fn player_falls_onto_ground_and_stops() {
    let mut session = playing_session();
    session.world_mut().player.pos = Vec2::new(0.0, 300.0);

    session.frame(&idle());
    assert!(session.world().player.pos.y > 300.0);
    assert!(session.world().player.is_airborne());

    for _ in 0..40 {
        session.frame(&idle());
    }

    let player = &session.world().player;
    assert_eq!(player.pos.y, 368.0); // ground top 400 - height 32
    assert_eq!(player.vel.y, 0.0);
    assert!(!player.is_airborne());
    assert_eq!(player.pos.x, 0.0);
    assert_eq!(session.lives(), 3);
}

// ── coins ─────────────────────────────────────────────────────────────────────

#[test]
fn overlapping_coin_scores_exactly_once() {
    let mut session = playing_session();
    session.world_mut().player.pos = Vec2::new(330.0, 260.0);

    let mut pickups = 0;
    for _ in 0..6 {
        pickups += session
            .frame(&idle())
            .iter()
            .filter(|e| matches!(e, GameEvent::CoinCollected { coin: 0, .. }))
            .count();
    }

    assert_eq!(pickups, 1);
    assert_eq!(session.score(), 100);
    assert!(session.world().coins[0].collected);
    assert_eq!(session.world().coins[0].pos, Vec2::new(340.0, 270.0));
}

// ── goal ──────────────────────────────────────────────────────────────────────

#[test]
fn reaching_flag_on_level_one_moves_to_level_two() {
    let mut session = playing_session();
    session.world_mut().player.pos = Vec2::new(1800.0, 368.0);

    let events = session.frame(&idle());

    assert!(events.contains(&GameEvent::GoalReached));
    assert_eq!(session.phase(), GamePhase::Start);
    assert_eq!(session.level(), 2);
    assert_eq!(session.world().level, 2);
    assert!(!session.wants_frames());
}

#[test]
fn walking_right_through_single_level_wins() {
    let json = r#"[{
        "platforms": [{ "x": 0, "y": 400, "width": 500, "height": 50 }],
        "goal": { "x": 200, "y": 250, "width": 40, "height": 150 }
    }]"#;
    let catalog = LevelCatalog::from_json(json).unwrap();
    let mut session = Session::new(catalog, Tuning::default()).unwrap();
    session.handle(Command::Start);

    let right = TickInput {
        right: true,
        ..Default::default()
    };
    for _ in 0..100 {
        session.frame(&right);
        if session.phase() != GamePhase::Playing {
            break;
        }
    }

    assert_eq!(session.phase(), GamePhase::Won);
    assert_eq!(session.lives(), 3);
    assert!(session.handle(Command::Restart));
    assert_eq!(session.phase(), GamePhase::Start);
}

// ── lives ─────────────────────────────────────────────────────────────────────

#[test]
fn falling_on_last_life_ends_game() {
    let tuning = Tuning {
        starting_lives: 1,
        ..Default::default()
    };
    let mut session = Session::new(LevelCatalog::builtin().unwrap(), tuning).unwrap();
    session.handle(Command::Start);
    assert_eq!(session.lives(), 1);

    // Past the end of the ground, already falling
    session.world_mut().player.pos = Vec2::new(2100.0, 499.0);
    session.world_mut().player.vel.y = 5.0;
    let events = session.frame(&idle());

    assert_eq!(events, vec![GameEvent::PlayerFell]);
    assert_eq!(session.phase(), GamePhase::GameOver);
    assert_eq!(session.lives(), 0);
    assert_eq!(session.hud().lives, 0);
    assert_eq!(session.world().player.pos.x, 2100.0);
}

#[test]
fn each_fall_costs_one_life() {
    let mut session = playing_session();
    for expected in [2, 1, 0] {
        session.world_mut().player.pos = Vec2::new(2100.0, 499.0);
        session.world_mut().player.vel.y = 5.0;
        session.frame(&idle());
        assert_eq!(session.lives(), expected);
        if expected > 0 {
            // Respawned at the level's spawn point
            assert_eq!(session.world().player.pos, Vec2::new(50.0, 300.0));
        } else {
            // Left where the run ended
            assert!(session.world().player.pos.y > 500.0);
        }
    }
    assert_eq!(session.phase(), GamePhase::GameOver);

    // Further frames change nothing
    assert!(session.frame(&idle()).is_empty());
    assert_eq!(session.lives(), 0);
}
