//! Game configuration
//!
//! Every group is `#[serde(default)]`, so a config file only needs the
//! values it changes. Defaults reproduce the classic tuning.

use std::f64::consts::PI;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use vector_engine::config::Config;
use vector_engine::render::Viewport;

/// Game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// RNG seed; a random seed is drawn when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,

    /// Client area and simulation clock
    pub display: DisplayConfig,

    /// Gameplay settings
    pub gameplay: GameplayConfig,

    /// Human ship tuning
    pub ships: ShipConfig,

    /// Saucer tuning
    pub aliens: AlienConfig,

    /// Saucer scores and the best-score table
    pub scoring: ScoringConfig,

    /// Audio settings
    pub audio: AudioConfig,

    /// Data file locations
    pub paths: PathsConfig,
}

/// Client area and simulation clock
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Client area width
    pub width: u32,

    /// Client area height
    pub height: u32,

    /// Frames (ticks) per second
    pub fps: u32,

    /// Simulated seconds per tick
    pub dt: f64,
}

/// Gameplay configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameplayConfig {
    /// Starting lives
    pub lives: u32,

    /// Starting level
    pub start_level: u32,

    /// Points per bonus life
    pub bonus_points: u32,

    /// Big asteroids spawned per level number
    pub asteroids_per_level: u32,

    /// Base asteroid speed
    pub asteroid_speed: f64,

    /// Divisor for the random velocity added to split fragments
    pub asteroid_speed_ratio: f64,

    /// Missile speed
    pub missile_speed: f64,

    /// Missile lifetime in simulated seconds
    pub missile_ttl: f64,

    /// Minimum delay between human shots
    pub human_shot_delay_ms: u64,

    /// Ticks between saucer shots
    pub alien_shot_delay_ticks: u32,

    /// Respawn needs the screen centre clear of asteroids by this distance
    pub safety_distance: f64,

    /// Game-over splash page duration
    pub splash_delay_ms: u64,

    /// Minimum delay between thrust sounds
    pub thrust_sound_delay_ms: u64,
}

/// Human ship configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShipConfig {
    /// Hull size (width and height)
    pub size: f64,

    /// Degrees turned per rotate key press
    pub rotation_step: f64,

    /// Velocity added per thrust
    pub impulse: f64,

    /// Per-axis speed limit
    pub max_velocity: f64,

    /// Ticks the engine flame stays lit after a thrust
    pub impulse_ticks: u32,

    /// Debris animation length
    pub explosion_ticks: u32,

    /// Shield duration, also its recharge time
    pub shield_ticks: u32,
}

/// Saucer configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlienConfig {
    /// Mean ticks between saucer appearances
    pub spawn_ticks: u32,

    /// Big saucer size relative to the human ship
    pub big_scale: f64,

    /// Aim error of the big saucer, radians
    pub big_inaccuracy: f64,

    /// Aim error of the small saucer, radians
    pub small_inaccuracy: f64,

    /// Base horizontal entry speed
    pub entry_speed: f64,

    /// Ticks between course changes
    pub jitter_ticks: u32,

    /// Course change magnitude
    pub jitter: f64,
}

/// Scoring configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Points for shooting the big saucer
    pub big_saucer: u32,

    /// Points for shooting the small saucer
    pub small_saucer: u32,

    /// Best-score table size
    pub best_scores: usize,
}

/// Audio configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioConfig {
    /// Audio enabled
    pub enabled: bool,

    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,

    /// Volume change per key press
    pub volume_step: f32,
}

/// File locations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Base data directory
    pub data_dir: PathBuf,

    /// Best-score file, relative to `data_dir`
    pub scores_file: PathBuf,

    /// Help text file, relative to `data_dir`
    pub help_file: PathBuf,

    /// Sound directory, relative to `data_dir`
    pub sounds_dir: PathBuf,
}

impl Config for GameConfig {}

impl GameConfig {
    /// The client area
    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.display.width, self.display.height)
    }

    /// Simulated milliseconds after `ticks` ticks
    pub fn ticks_to_ms(&self, ticks: u64) -> u64 {
        ticks * 1000 / u64::from(self.display.fps.max(1))
    }
}

impl PathsConfig {
    /// Full path of the best-score file
    pub fn scores_path(&self) -> PathBuf {
        self.data_dir.join(&self.scores_file)
    }

    /// Full path of the help file
    pub fn help_path(&self) -> PathBuf {
        self.data_dir.join(&self.help_file)
    }

    /// Full path of the sound directory
    pub fn sounds_path(&self) -> PathBuf {
        self.data_dir.join(&self.sounds_dir)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            display: DisplayConfig::default(),
            gameplay: GameplayConfig::default(),
            ships: ShipConfig::default(),
            aliens: AlienConfig::default(),
            scoring: ScoringConfig::default(),
            audio: AudioConfig::default(),
            paths: PathsConfig::default(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            fps: 50,
            dt: 0.1,
        }
    }
}

impl Default for GameplayConfig {
    fn default() -> Self {
        Self {
            lives: 3,
            start_level: 1,
            bonus_points: 1000,
            asteroids_per_level: 5,
            asteroid_speed: 10.0,
            asteroid_speed_ratio: 2.0,
            missile_speed: 100.0,
            missile_ttl: 12.0,
            human_shot_delay_ms: 100,
            alien_shot_delay_ticks: 20,
            safety_distance: 60.0,
            splash_delay_ms: 5000,
            thrust_sound_delay_ms: 250,
        }
    }
}

impl Default for ShipConfig {
    fn default() -> Self {
        Self {
            size: 16.0,
            rotation_step: 10.0,
            impulse: 4.0,
            max_velocity: 250.0,
            impulse_ticks: 20,
            explosion_ticks: 32,
            shield_ticks: 100,
        }
    }
}

impl Default for AlienConfig {
    fn default() -> Self {
        Self {
            spawn_ticks: 500,
            big_scale: 1.5,
            big_inaccuracy: PI / 16.0,
            small_inaccuracy: PI / 64.0,
            entry_speed: 25.0,
            jitter_ticks: 26,
            jitter: 5.0,
        }
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            big_saucer: 100,
            small_saucer: 500,
            best_scores: 10,
        }
    }
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            master_volume: 0.25,
            volume_step: 0.05,
        }
    }
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            scores_file: PathBuf::from("scores.txt"),
            help_file: PathBuf::from("help.txt"),
            sounds_dir: PathBuf::from("sounds"),
        }
    }
}
