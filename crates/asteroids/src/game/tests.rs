use super::*;
use crate::asteroid::EXPLOSION_TICKS;

fn config() -> GameConfig {
    let mut config = GameConfig::default();
    config.seed = Some(7);
    // Keep saucers out of the way unless a test brings one in
    config.aliens.spawn_ticks = 1_000_000;
    config
}

/// A game with nothing on the field but the human at the centre
fn empty_game() -> Game {
    let mut game = Game::new(config(), BestScores::new(10), vec!["Help".to_string()]);
    game.asteroids.clear();
    game.missiles.clear();
    game.events.clear();
    game
}

fn rock(game: &mut Game, class: AsteroidClass, position: Vec2) -> AsteroidKey {
    let asteroid = Asteroid::new(class, position, Vec2::new(10.0, -4.0), class.base_radius(), &mut game.rng);
    game.add_asteroid(asteroid)
}

fn missile(game: &mut Game, owner: ShipClass, position: Vec2) -> MissileKey {
    let mut missile = Missile::new(owner, 12.0);
    missile.arm(position, Vec2::zeros());
    game.add_missile(missile)
}

fn bring_in(game: &mut Game, class: ShipClass, position: Vec2) {
    let saucer = game.ship_mut(class);
    saucer.reset();
    saucer.set_position(position);
    saucer.set_visible(true);
}

fn queued(game: &Game) -> Vec<GameEvent> {
    game.events().iter().copied().collect()
}

#[test]
fn test_new_game_defaults() {
    let game = Game::new(config(), BestScores::new(10), Vec::new());
    assert_eq!(game.level(), 1);
    assert_eq!(game.lives(), 3);
    assert_eq!(game.score(), 0);
    assert_eq!(game.asteroid_count(), 5);
    assert!(game.is_running());
    assert!(!game.is_game_over());
    assert!(game.events().is_empty());

    let human = game.ship(ShipClass::Human);
    assert!(human.is_active());
    assert_eq!(human.position(), game.viewport().center());
    assert_eq!(human.rotation(), SPAWN_ROTATION);
    assert!(!game.ship(ShipClass::AlienBig).is_alive());
}

#[test]
fn test_same_seed_same_field() {
    let a = Game::new(config(), BestScores::new(10), Vec::new());
    let b = Game::new(config(), BestScores::new(10), Vec::new());
    let positions = |game: &Game| -> Vec<Vec2> { game.asteroids().map(|(_, a)| a.position()).collect() };
    assert_eq!(positions(&a), positions(&b));
    assert_eq!(a.seed(), 7);
}

#[test]
fn test_human_missile_splits_and_scores() {
    let mut game = empty_game();
    let target = rock(&mut game, AsteroidClass::Big, Vec2::new(100.0, 100.0));
    missile(&mut game, ShipClass::Human, Vec2::new(100.0, 100.0));

    game.handle_collisions();

    assert_eq!(game.score(), AsteroidClass::Big.points());
    assert_eq!(game.missile_count(), 0);
    assert!(game.asteroid(target).is_some_and(Asteroid::is_exploding));

    let fragments: Vec<&Asteroid> = game.asteroids.values().filter(|a| a.is_alive()).collect();
    assert_eq!(fragments.len(), 2);
    for fragment in fragments {
        assert_eq!(fragment.class(), AsteroidClass::Medium);
        assert!((20.0..=25.0).contains(&fragment.radius()));
        assert_eq!(fragment.position(), Vec2::new(100.0, 100.0));
    }
    assert_eq!(queued(&game), vec![GameEvent::AsteroidExploded(AsteroidClass::Big)]);
}

#[test]
fn test_small_asteroid_does_not_split() {
    let mut game = empty_game();
    rock(&mut game, AsteroidClass::Small, Vec2::new(100.0, 100.0));
    missile(&mut game, ShipClass::Human, Vec2::new(102.0, 100.0));

    game.handle_collisions();

    assert_eq!(game.score(), AsteroidClass::Small.points());
    assert_eq!(game.live_asteroid_count(), 0);
}

#[test]
fn test_saucer_missile_breaks_asteroid_without_score() {
    let mut game = empty_game();
    rock(&mut game, AsteroidClass::Medium, Vec2::new(100.0, 100.0));
    missile(&mut game, ShipClass::AlienSmall, Vec2::new(100.0, 100.0));

    game.handle_collisions();

    assert_eq!(game.score(), 0);
    assert_eq!(game.live_asteroid_count(), 2);
}

#[test]
fn test_missile_destroys_one_asteroid() {
    let mut game = empty_game();
    rock(&mut game, AsteroidClass::Small, Vec2::new(100.0, 100.0));
    rock(&mut game, AsteroidClass::Small, Vec2::new(105.0, 100.0));
    missile(&mut game, ShipClass::Human, Vec2::new(102.0, 100.0));

    game.handle_collisions();

    assert_eq!(game.live_asteroid_count(), 1);
}

#[test]
fn test_missile_never_hits_its_owner() {
    let mut game = empty_game();
    let spot = Vec2::new(200.0, 200.0);
    bring_in(&mut game, ShipClass::AlienBig, spot);
    missile(&mut game, ShipClass::AlienBig, spot);

    game.handle_collisions();
    assert!(game.ship(ShipClass::AlienBig).is_alive());
    assert_eq!(game.missile_count(), 1);

    missile(&mut game, ShipClass::Human, spot);
    game.handle_collisions();
    assert!(!game.ship(ShipClass::AlienBig).is_alive());
    assert_eq!(game.score(), 100);
    assert!(queued(&game).contains(&GameEvent::SaucerGone(ShipClass::AlienBig)));
}

#[test]
fn test_small_saucer_is_worth_more() {
    let mut game = empty_game();
    let spot = Vec2::new(200.0, 200.0);
    bring_in(&mut game, ShipClass::AlienSmall, spot);
    missile(&mut game, ShipClass::Human, spot);

    game.handle_collisions();

    assert_eq!(game.score(), 500);
}

#[test]
fn test_shield_stops_missiles() {
    let mut game = empty_game();
    assert!(!game.raise_shield(), "shield must recharge first");

    let recharge = game.config.ships.shield_ticks;
    for _ in 0..=recharge {
        game.ships[ShipClass::Human.index()].update(0.0, &mut game.rng);
    }
    assert!(game.raise_shield());

    let center = game.viewport().center();
    missile(&mut game, ShipClass::AlienBig, center);
    game.handle_collisions();

    assert!(game.ship(ShipClass::Human).is_alive());
    assert_eq!(game.lives(), 3);
    assert_eq!(game.missile_count(), 1);
}

#[test]
fn test_saucer_missile_costs_a_life() {
    let mut game = empty_game();
    let center = game.viewport().center();
    missile(&mut game, ShipClass::AlienSmall, center);

    game.handle_collisions();

    assert_eq!(game.lives(), 2);
    assert!(game.ship(ShipClass::Human).is_exploding());
    assert!(!game.is_game_over());
}

#[test]
fn test_ramming_a_saucer() {
    let mut game = empty_game();
    let center = game.viewport().center();
    bring_in(&mut game, ShipClass::AlienBig, center + Vec2::new(10.0, 0.0));

    game.handle_collisions();

    assert_eq!(game.lives(), 2);
    assert!(!game.ship(ShipClass::Human).is_alive());
    assert!(!game.ship(ShipClass::AlienBig).is_alive());
}

#[test]
fn test_asteroid_takes_one_ship_without_split() {
    let mut game = empty_game();
    let center = game.viewport().center();
    rock(&mut game, AsteroidClass::Big, center);

    game.handle_collisions();

    assert_eq!(game.lives(), 2);
    assert_eq!(game.score(), 0);
    assert_eq!(game.live_asteroid_count(), 0);
    assert_eq!(game.asteroid_count(), 1);
}

#[test]
fn test_last_life_ends_the_game() {
    let mut game = empty_game();
    game.lives = 1;
    let center = game.viewport().center();
    missile(&mut game, ShipClass::AlienBig, center);

    game.handle_collisions();

    assert_eq!(game.lives(), 0);
    assert!(game.is_game_over());
    assert!(game.is_running());
    assert_eq!(game.pending_record(), None);
    assert!(queued(&game).contains(&GameEvent::GameOver));
}

#[test]
fn test_record_score_waits_for_a_name() {
    let mut game = empty_game();
    game.lives = 1;
    game.score = 250;
    let center = game.viewport().center();
    missile(&mut game, ShipClass::AlienBig, center);

    game.handle_collisions();

    assert_eq!(game.pending_record(), Some(250));
    assert!(!game.is_running());
    assert!(queued(&game).contains(&GameEvent::BestScore(250)));

    assert_eq!(game.submit_best_score("ace").unwrap(), Some(0));
    assert_eq!(game.pending_record(), None);
    assert!(game.is_running());
    assert_eq!(game.best_scores().records()[0].name, "ace");

    assert_eq!(game.submit_best_score("again").unwrap(), None);
}

#[test]
fn test_dismissed_record_is_not_kept() {
    let mut game = empty_game();
    game.pending_record = Some(10);
    game.stop_game();

    game.dismiss_best_score();

    assert!(game.best_scores().is_empty());
    assert!(game.is_running());
    assert!(!game.is_paused());
}

#[test]
fn test_bonus_life_every_thousand_points() {
    let mut game = empty_game();
    game.score = 999;
    game.award_bonus();
    assert_eq!(game.lives(), 3);

    game.score = 1000;
    game.award_bonus();
    game.award_bonus();
    assert_eq!(game.lives(), 4);
    assert_eq!(queued(&game), vec![GameEvent::BonusLife]);

    game.score = 2000;
    game.award_bonus();
    assert_eq!(game.lives(), 5);
}

#[test]
fn test_cleared_field_advances_level() {
    let mut game = empty_game();
    missile(&mut game, ShipClass::Human, Vec2::new(10.0, 10.0));

    game.advance_level();

    assert_eq!(game.level(), 2);
    assert_eq!(game.live_asteroid_count(), 10);
    assert_eq!(game.missile_count(), 0);
    assert_eq!(queued(&game), vec![GameEvent::LevelCleared(2)]);
}

#[test]
fn test_exploding_asteroid_does_not_hold_the_level() {
    let mut game = empty_game();
    let key = rock(&mut game, AsteroidClass::Big, Vec2::new(100.0, 100.0));
    game.asteroids[key].explode(&mut game.rng);

    game.advance_level();

    assert_eq!(game.level(), 2);
}

#[test]
fn test_destroyed_entities_are_swept_in_the_tick() {
    let mut game = empty_game();
    // Keeps the level from advancing
    rock(&mut game, AsteroidClass::Big, Vec2::new(700.0, 500.0));
    let burst = rock(&mut game, AsteroidClass::Small, Vec2::new(100.0, 500.0));
    game.asteroids[burst].explode(&mut game.rng);

    let mut spent = Missile::new(ShipClass::Human, 0.05);
    spent.arm(Vec2::new(10.0, 10.0), Vec2::zeros());
    game.add_missile(spent);

    game.run();
    assert_eq!(game.missile_count(), 0);

    for _ in 1..EXPLOSION_TICKS {
        game.run();
    }
    assert!(game.asteroid(burst).is_none());
    assert_eq!(game.asteroid_count(), 1);
}

#[test]
fn test_missiles_leaving_the_screen_are_removed() {
    let mut game = empty_game();
    missile(&mut game, ShipClass::Human, Vec2::new(-5.0, 100.0));
    missile(&mut game, ShipClass::Human, Vec2::new(5.0, 100.0));

    game.handle_collisions();

    assert_eq!(game.missile_count(), 1);
}

#[test]
fn test_human_and_asteroids_wrap() {
    let mut game = empty_game();
    let key = rock(&mut game, AsteroidClass::Big, Vec2::new(-1.0, 650.0));
    game.ship_mut(ShipClass::Human).set_position(Vec2::new(801.0, 300.0));

    game.force_inside_limits();

    assert_eq!(game.ship(ShipClass::Human).position(), Vec2::new(0.0, 300.0));
    assert_eq!(game.asteroids[key].position(), Vec2::new(800.0, 0.0));
}

#[test]
fn test_saucer_wraps_vertically_and_leaves_sideways() {
    let mut game = empty_game();
    bring_in(&mut game, ShipClass::AlienSmall, Vec2::new(300.0, 601.0));

    game.force_inside_limits();
    assert_eq!(game.ship(ShipClass::AlienSmall).position(), Vec2::new(300.0, 0.0));
    assert!(game.ship(ShipClass::AlienSmall).is_active());

    game.ship_mut(ShipClass::AlienSmall).set_position(Vec2::new(801.0, 300.0));
    game.force_inside_limits();

    let saucer = game.ship(ShipClass::AlienSmall);
    assert!(!saucer.is_alive());
    assert!(!saucer.is_visible());
    assert_eq!(saucer.position(), PARKING_SPOT);
    assert_eq!(queued(&game), vec![GameEvent::SaucerGone(ShipClass::AlienSmall)]);
}

#[test]
fn test_respawn_waits_for_a_clear_centre() {
    let mut game = empty_game();
    let center = game.viewport().center();
    game.ship_mut(ShipClass::Human).set_alive(false);
    let blocker = rock(&mut game, AsteroidClass::Small, center + Vec2::new(30.0, 0.0));

    game.respawn_human();
    assert!(!game.ship(ShipClass::Human).is_alive());

    game.asteroids.remove(blocker);
    game.ship_mut(ShipClass::Human).set_rotation(12.0);
    game.respawn_human();

    let human = game.ship(ShipClass::Human);
    assert!(human.is_active());
    assert_eq!(human.position(), center);
    assert_eq!(human.rotation(), SPAWN_ROTATION);
}

#[test]
fn test_shots_are_rate_limited() {
    let mut game = empty_game();
    assert!(game.shoot_missile());
    assert!(!game.shoot_missile());

    // 100 ms at 50 fps
    game.ticks += 5;
    assert!(game.shoot_missile());
    assert_eq!(game.missile_count(), 2);

    let fired = queued(&game).iter().filter(|e| **e == GameEvent::MissileFired).count();
    assert_eq!(fired, 2);
}

#[test]
fn test_dead_human_cannot_act() {
    let mut game = empty_game();
    game.ship_mut(ShipClass::Human).set_alive(false);

    assert!(!game.shoot_missile());
    game.thrust();
    assert_eq!(game.ship(ShipClass::Human).velocity(), Vec2::zeros());
    assert!(game.events().is_empty());
}

#[test]
fn test_thrust_cue_is_throttled() {
    let mut game = empty_game();
    game.thrust();
    game.thrust();
    let thrusts = |game: &Game| queued(game).iter().filter(|e| **e == GameEvent::Thrust).count();
    assert_eq!(thrusts(&game), 1);

    // 250 ms at 50 fps
    game.ticks += 13;
    game.thrust();
    assert_eq!(thrusts(&game), 2);
    assert!(game.ship(ShipClass::Human).velocity().norm() > 0.0);
}

#[test]
fn test_saucers_fire_periodically() {
    let mut game = empty_game();
    bring_in(&mut game, ShipClass::AlienBig, Vec2::new(100.0, 100.0));

    for _ in 1..game.config.gameplay.alien_shot_delay_ticks {
        game.aliens_fire();
    }
    assert_eq!(game.missile_count(), 0);

    game.aliens_fire();
    let shots: Vec<&Missile> = game.missiles.values().collect();
    assert_eq!(shots.len(), 1);
    assert_eq!(shots[0].owner(), ShipClass::AlienBig);
    assert_eq!(shots[0].position(), Vec2::new(100.0, 100.0));
}

#[test]
fn test_saucer_spawns_at_the_left_edge() {
    let mut game = empty_game();
    game.alien_countdown = 1;

    game.spawn_aliens();

    let saucer = ShipClass::ALL
        .into_iter()
        .filter(|class| class.is_alien())
        .find(|&class| game.ship(class).is_visible())
        .expect("a saucer entered");
    let ship = game.ship(saucer);
    assert_eq!(ship.position().x, 0.0);
    assert!((50.0..=550.0).contains(&ship.position().y));
    assert!((25.0..=50.0).contains(&ship.velocity().x));
    assert_eq!(queued(&game), vec![GameEvent::SaucerAppeared(saucer)]);
    assert!(game.alien_countdown > 0);
}

#[test]
fn test_game_over_hides_ships_and_cycles_splash() {
    let mut game = empty_game();
    bring_in(&mut game, ShipClass::AlienBig, Vec2::new(100.0, 100.0));

    game.game_over();

    assert!(ShipClass::ALL.iter().all(|&c| !game.ship(c).is_visible() && !game.ship(c).is_alive()));
    assert_eq!(
        queued(&game),
        vec![GameEvent::SaucerGone(ShipClass::AlienBig), GameEvent::GameOver]
    );

    assert_eq!(game.splash_page(), SplashPage::GameOver);
    game.ticks += 250;
    assert_eq!(game.splash_page(), SplashPage::Help);
    game.ticks += 250;
    assert_eq!(game.splash_page(), SplashPage::BestScores);
    game.ticks += 250;
    assert_eq!(game.splash_page(), SplashPage::GameOver);
}

#[test]
fn test_game_over_freezes_play() {
    let mut game = empty_game();
    rock(&mut game, AsteroidClass::Small, Vec2::new(100.0, 100.0));
    missile(&mut game, ShipClass::Human, Vec2::new(100.0, 100.0));
    game.game_over();

    game.run();

    assert_eq!(game.score(), 0);
    assert_eq!(game.level(), 1);
    assert!(game.draw_list().texts().any(|t| t == "Game Over"));
}

#[test]
fn test_hud_text() {
    let mut game = empty_game();
    rock(&mut game, AsteroidClass::Big, Vec2::new(700.0, 500.0));
    game.run();

    let texts: Vec<&str> = game.draw_list().texts().collect();
    assert!(texts.contains(&"Ships: 3"));
    assert!(texts.contains(&"Level: 1"));
    assert!(texts.contains(&"Score: 0"));
}

#[test]
fn test_restart_resets_progress() {
    let mut game = empty_game();
    game.score = 1234;
    game.lives = 0;
    game.level = 4;
    game.game_over();

    game.restart();

    assert_eq!(game.score(), 0);
    assert_eq!(game.lives(), 3);
    assert_eq!(game.level(), 1);
    assert!(!game.is_game_over());
    assert_eq!(game.live_asteroid_count(), 5);
    assert!(game.ship(ShipClass::Human).is_active());
}

#[test]
fn test_from_config_reads_data_dir() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("scores.txt"), "ace,900\n").unwrap();
    std::fs::write(dir.path().join("help.txt"), "Fly safe\n").unwrap();
    let mut config = config();
    config.paths.data_dir = dir.path().to_path_buf();

    let game = Game::from_config(config).unwrap();
    assert_eq!(game.best_scores().records()[0].score, 900);
    assert_eq!(game.help, vec!["Fly safe".to_string()]);
}

#[test]
fn test_from_config_reports_bad_scores() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("scores.txt"), "ace,lots\n").unwrap();
    let mut config = config();
    config.paths.data_dir = dir.path().to_path_buf();

    match Game::from_config(config) {
        Err(GameError::Scores(ScoreError::Parse { line, .. })) => assert_eq!(line, 1),
        Err(e) => panic!("unexpected error: {}", e),
        Ok(_) => panic!("malformed scores accepted"),
    }
}
