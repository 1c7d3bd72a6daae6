//! Headless Asteroids 2k runner
//!
//! Plays a short attract loop, then lets the autopilot fly a game for the
//! requested number of frames and logs how it went.

use std::path::PathBuf;

use asteroids::sfx::SOUND_NAMES;
use asteroids::{App, Autopilot, FrameStatus, Game, GameConfig, GameError};
use clap::Parser;
use vector_engine::audio::backend::create_backend;
use vector_engine::audio::{AudioBackend, AudioBackendConfig, NullBackend, SoundManager};
use vector_engine::config::Config;
use vector_engine::foundation::logging;
use vector_engine::foundation::time::{FrameLimiter, Stopwatch};
use vector_engine::input::{InputState, KeyCode};

/// Attract-mode frames before the autopilot presses N
const ATTRACT_FRAMES: u64 = 50;
/// Name registered for an autopilot best score
const AUTOPILOT_NAME: &str = "AUTOPILOT";

#[derive(Parser, Debug)]
#[command(name = "asteroids2k")]
#[command(about = "Vector Asteroids clone, flown headless by a demo autopilot")]
struct Cli {
    /// Configuration file (.toml or .ron); defaults are used when it is absent
    #[arg(long)]
    config: Option<PathBuf>,
    /// Frames to play after the attract loop
    #[arg(long, default_value_t = 3_000)]
    frames: u64,
    /// RNG seed, overrides the configuration
    #[arg(long)]
    seed: Option<u64>,
    /// Directory holding scores, help text and sounds
    #[arg(long)]
    data_dir: Option<PathBuf>,
    /// Pace frames to the configured fps instead of running flat out
    #[arg(long, default_value_t = false)]
    realtime: bool,
}

fn load_config(cli: &Cli) -> Result<GameConfig, GameError> {
    let mut config = match &cli.config {
        Some(path) => GameConfig::load_or_default(path)?,
        None => GameConfig::default(),
    };
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }
    if let Some(dir) = &cli.data_dir {
        config.paths.data_dir.clone_from(dir);
    }
    Ok(config)
}

fn sound_manager(config: &GameConfig) -> Result<SoundManager, GameError> {
    let backend: Box<dyn AudioBackend> = if config.audio.enabled {
        create_backend(&AudioBackendConfig::default())
    } else {
        let mut backend = NullBackend::new();
        backend.initialize(&AudioBackendConfig::default())?;
        Box::new(backend)
    };

    let mut sounds = SoundManager::new(backend, config.paths.sounds_path());
    if let Err(e) = sounds.load_sounds(SOUND_NAMES) {
        log::warn!("Sound assets unavailable ({}), playing silently", e);
        if let Err(e) = sounds.register_silent(SOUND_NAMES) {
            log::error!("Cannot register silent cues: {}", e);
        }
    }
    sounds.set_volume_step(config.audio.volume_step);
    sounds.set_master_volume(config.audio.master_volume);
    Ok(sounds)
}

fn main() -> Result<(), GameError> {
    logging::init(log::LevelFilter::Info);
    let cli = Cli::parse();

    let config = load_config(&cli)?;
    let fps = config.display.fps;
    let sounds = sound_manager(&config)?;

    let mut app = App::new(Game::from_config(config)?, sounds);
    let pilot = Autopilot::default();
    let mut input = InputState::new();
    let mut limiter = cli.realtime.then(|| FrameLimiter::new(fps));

    log::info!("Seed {}, {} frames", app.game().seed(), cli.frames);
    let stopwatch = Stopwatch::start_new();

    let mut frames = 0;
    let total = ATTRACT_FRAMES + cli.frames;
    while frames < total {
        input.begin_frame();
        if frames == ATTRACT_FRAMES {
            input.set_held([KeyCode::N]);
        } else {
            input.set_held(pilot.keys(app.game()));
        }

        if app.frame(&input) == FrameStatus::Quit {
            break;
        }
        frames += 1;

        if app.game().pending_record().is_some() {
            if let Some(rank) = app.game_mut().submit_best_score(AUTOPILOT_NAME)? {
                log::info!("Autopilot took rank {} in the best scores", rank + 1);
            }
        }
        if let Some(limiter) = limiter.as_mut() {
            limiter.wait();
        }
    }

    let game = app.game();
    log::info!(
        "Finished {} frames in {:.2?}: score {}, level {}, lives {}{}",
        frames,
        stopwatch.elapsed(),
        game.score(),
        game.level(),
        game.lives(),
        if game.is_game_over() { " (game over)" } else { "" }
    );
    Ok(())
}
