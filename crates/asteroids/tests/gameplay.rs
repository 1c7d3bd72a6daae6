//! End-to-end gameplay through the public API

use asteroids::{
    App, Asteroid, AsteroidClass, Autopilot, BestScores, FrameStatus, Game, GameConfig, GameEvent, Missile,
    ShipClass, Weapon,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use vector_engine::audio::{AudioBackend, AudioBackendConfig, NullBackend, SoundManager};
use vector_engine::config::Config;
use vector_engine::foundation::math::Vec2;
use vector_engine::input::InputState;
use vector_engine::render::DrawCommand;

fn config(lives: u32) -> GameConfig {
    let mut config = GameConfig::default();
    config.seed = Some(42);
    config.gameplay.lives = lives;
    config.aliens.spawn_ticks = 1_000_000;
    config
}

/// Game whose only asteroids are the given motionless ones
fn scripted(mut config: GameConfig, scores: BestScores, rocks: &[(AsteroidClass, Vec2)]) -> Game {
    config.gameplay.asteroids_per_level = 0;
    let mut game = Game::new(config, scores, Vec::new());
    let mut rng = StdRng::seed_from_u64(3);
    for (class, position) in rocks {
        let asteroid = Asteroid::new(*class, *position, Vec2::zeros(), class.base_radius(), &mut rng);
        game.add_asteroid(asteroid);
    }
    game
}

fn fire_at(game: &mut Game, owner: ShipClass, position: Vec2) {
    let mut missile = Missile::new(owner, 12.0);
    missile.arm(position, Vec2::zeros());
    game.add_missile(missile);
}

fn drain(game: &mut Game) -> Vec<GameEvent> {
    game.events_mut().drain().collect()
}

#[test]
fn test_tick_produces_frame_and_hud() {
    let rocks = [(AsteroidClass::Big, Vec2::new(700.0, 500.0))];
    let mut game = scripted(config(3), BestScores::new(10), &rocks);
    game.run();

    let commands = game.draw_list().commands();
    assert!(commands.iter().any(|c| matches!(c, DrawCommand::Lines { .. })));
    let texts: Vec<&str> = game.draw_list().texts().collect();
    assert_eq!(texts, vec!["Ships: 3", "Level: 1", "Score: 0"]);
}

#[test]
fn test_shooting_a_big_asteroid_down_to_dust() {
    let spot = Vec2::new(120.0, 80.0);
    let mut game = scripted(config(3), BestScores::new(10), &[(AsteroidClass::Big, spot)]);
    let before = game.live_asteroid_count();

    fire_at(&mut game, ShipClass::Human, spot);
    game.run();
    assert_eq!(game.score(), 5);
    assert_eq!(game.live_asteroid_count(), before + 1);

    let mediums: Vec<Vec2> = game
        .asteroids()
        .filter(|(_, a)| a.is_alive() && a.class() == AsteroidClass::Medium)
        .map(|(_, a)| a.position())
        .collect();
    assert_eq!(mediums.len(), 2);
    assert!(drain(&mut game).contains(&GameEvent::AsteroidExploded(AsteroidClass::Big)));

    // A motionless rock breaks into motionless fragments
    for position in mediums {
        assert_eq!(position, spot);
        fire_at(&mut game, ShipClass::Human, position);
    }
    game.run();

    assert_eq!(game.score(), 5 + 2 * 10);
    let smalls = game
        .asteroids()
        .filter(|(_, a)| a.is_alive() && a.class() == AsteroidClass::Small)
        .count();
    assert_eq!(smalls, 4);
}

#[test]
fn test_destroyed_entities_never_reach_the_next_tick() {
    let mut game = Game::new(config(3), BestScores::new(10), Vec::new());
    let far = Vec2::new(-50.0, -50.0);
    let mut stray = Missile::new(ShipClass::Human, 12.0);
    stray.arm(far, Vec2::zeros());
    game.add_missile(stray);

    game.run();

    assert!(game.missiles().all(|(_, m)| m.is_armed()));
    assert!(game.asteroids().all(|(_, a)| a.is_alive() || a.is_exploding()));
    assert!(game.missiles().all(|(_, m)| m.position() != far));
}

#[test]
fn test_game_over_and_best_score_persisted() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scores.txt");
    std::fs::write(&path, "old,3\n").unwrap();
    let scores = BestScores::load(&path, 10).unwrap();

    let spot = Vec2::new(120.0, 80.0);
    let rocks = [(AsteroidClass::Small, spot), (AsteroidClass::Big, Vec2::new(700.0, 500.0))];
    let mut game = scripted(config(1), scores, &rocks);
    fire_at(&mut game, ShipClass::Human, spot);
    game.run();
    assert_eq!(game.score(), 20);

    let human = game.ship(ShipClass::Human).position();
    fire_at(&mut game, ShipClass::AlienBig, human);
    game.run();

    assert!(game.is_game_over());
    assert_eq!(game.lives(), 0);
    assert_eq!(game.pending_record(), Some(20));
    assert!(!game.is_running());

    assert_eq!(game.submit_best_score("Pilot, One").unwrap(), Some(0));
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "Pilot  One,20\nold,3\n");
}

#[test]
fn test_config_file_round_trip_drives_game() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("game.toml");
    let mut written = config(5);
    written.gameplay.asteroids_per_level = 2;
    written.save_to_file(&path).unwrap();

    let loaded = GameConfig::load_from_file(&path).unwrap();
    assert_eq!(loaded, written);

    let game = Game::new(loaded, BestScores::new(10), Vec::new());
    assert_eq!(game.lives(), 5);
    assert_eq!(game.asteroid_count(), 2);
}

#[test]
fn test_autopilot_session() {
    let mut backend = NullBackend::new();
    backend.initialize(&AudioBackendConfig::default()).unwrap();
    let log = backend.log();
    let mut sounds = SoundManager::new(Box::new(backend), "sounds");
    sounds.register_silent(asteroids::sfx::SOUND_NAMES).unwrap();

    let mut app = App::new(Game::new(config(3), BestScores::new(10), Vec::new()), sounds);
    let pilot = Autopilot::default();
    let mut input = InputState::new();

    input.begin_frame();
    input.set_held([vector_engine::input::KeyCode::N]);
    assert_eq!(app.frame(&input), FrameStatus::Continue);

    for _ in 0..500 {
        input.begin_frame();
        input.set_held(pilot.keys(app.game()));
        assert_eq!(app.frame(&input), FrameStatus::Continue);
        if app.game().pending_record().is_some() {
            app.game_mut().dismiss_best_score();
        }
    }

    assert_eq!(app.game().ticks(), 501);
    assert!(log.play_count("ship_fire") > 0);
    assert!(app.game().events().is_empty());
}
