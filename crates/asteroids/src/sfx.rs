//! Sound cues for game events

use vector_engine::audio::SoundManager;
use vector_engine::events::{EventHandler, EventQueue};

use crate::asteroid::AsteroidClass;
use crate::event::GameEvent;
use crate::ship::ShipClass;

/// Every cue the game uses
pub const SOUND_NAMES: [&str; 11] = [
    "bonus",
    "shield",
    "ship_fire",
    "bang_large",
    "bang_medium",
    "bang_small",
    "saucer_big",
    "saucer_small",
    "ship_thrust",
    "ship_explosion",
    THEME,
];

/// Looping game-over theme
pub const THEME: &str = "starwars-trails";

/// What an event does to the sound output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    /// Start a cue
    Play {
        /// Cue name
        name: &'static str,
        /// Loop until stopped
        looping: bool,
    },
    /// Stop a cue
    Stop(&'static str),
    /// Silence everything
    StopAll,
}

const fn play(name: &'static str) -> Cue {
    Cue::Play { name, looping: false }
}

const fn saucer_loop(class: ShipClass) -> &'static str {
    match class {
        ShipClass::AlienBig => "saucer_big",
        _ => "saucer_small",
    }
}

/// Cue for an asteroid's explosion
pub const fn bang(class: AsteroidClass) -> &'static str {
    match class {
        AsteroidClass::Big => "bang_large",
        AsteroidClass::Medium => "bang_medium",
        AsteroidClass::Small => "bang_small",
    }
}

/// Map an event to its cue, if it has one
pub fn cue_for(event: &GameEvent) -> Option<Cue> {
    match *event {
        GameEvent::Restarted => Some(Cue::StopAll),
        GameEvent::MissileFired => Some(play("ship_fire")),
        GameEvent::Thrust => Some(play("ship_thrust")),
        GameEvent::ShieldRaised => Some(play("shield")),
        GameEvent::SaucerAppeared(class) => Some(Cue::Play {
            name: saucer_loop(class),
            looping: true,
        }),
        GameEvent::SaucerGone(class) => Some(Cue::Stop(saucer_loop(class))),
        GameEvent::ShipExploded(_) => Some(play("ship_explosion")),
        GameEvent::AsteroidExploded(class) => Some(play(bang(class))),
        GameEvent::BonusLife => Some(play("bonus")),
        GameEvent::GameOver => Some(Cue::Play {
            name: THEME,
            looping: true,
        }),
        GameEvent::LevelCleared(_) | GameEvent::BestScore(_) => None,
    }
}

/// Event handler that plays the cues on a sound manager
pub struct SfxPlayer<'a> {
    sounds: &'a mut SoundManager,
}

impl<'a> SfxPlayer<'a> {
    /// Wrap a sound manager
    pub fn new(sounds: &'a mut SoundManager) -> Self {
        Self { sounds }
    }
}

impl EventHandler<GameEvent> for SfxPlayer<'_> {
    fn on_event(&mut self, event: &GameEvent) -> bool {
        match cue_for(event) {
            Some(Cue::Play { name, looping }) => {
                if let Err(e) = self.sounds.play(name, looping) {
                    log::warn!("Cannot play '{}': {}", name, e);
                }
            }
            Some(Cue::Stop(name)) => self.sounds.stop(name),
            Some(Cue::StopAll) => self.sounds.stop_all(),
            None => {}
        }
        // Other handlers may still want the event
        false
    }
}

/// Drain the queue into the sound manager; returns the number of events
pub fn play_events(events: &mut EventQueue<GameEvent>, sounds: &mut SoundManager) -> usize {
    let mut player = SfxPlayer::new(sounds);
    events.dispatch(&mut [&mut player])
}

#[cfg(test)]
mod tests {
    use super::*;
    use vector_engine::audio::{AudioBackend, AudioBackendConfig, NullBackend};

    #[test]
    fn test_saucer_cues_loop() {
        assert_eq!(
            cue_for(&GameEvent::SaucerAppeared(ShipClass::AlienBig)),
            Some(Cue::Play {
                name: "saucer_big",
                looping: true
            })
        );
        assert_eq!(
            cue_for(&GameEvent::SaucerGone(ShipClass::AlienSmall)),
            Some(Cue::Stop("saucer_small"))
        );
    }

    #[test]
    fn test_every_played_cue_is_known() {
        let events = [
            GameEvent::MissileFired,
            GameEvent::Thrust,
            GameEvent::ShieldRaised,
            GameEvent::ShipExploded(ShipClass::Human),
            GameEvent::AsteroidExploded(AsteroidClass::Medium),
            GameEvent::BonusLife,
            GameEvent::GameOver,
        ];
        for event in &events {
            if let Some(Cue::Play { name, .. }) = cue_for(event) {
                assert!(SOUND_NAMES.contains(&name), "{name} missing");
            }
        }
    }

    #[test]
    fn test_play_events_drains_queue() {
        let mut backend = NullBackend::new();
        backend.initialize(&AudioBackendConfig::default()).unwrap();
        let log = backend.log();
        let mut sounds = SoundManager::new(Box::new(backend), "sounds");
        sounds.register_silent(SOUND_NAMES).unwrap();

        let mut events = EventQueue::new();
        events.push(GameEvent::AsteroidExploded(AsteroidClass::Big));
        events.push(GameEvent::GameOver);

        assert_eq!(play_events(&mut events, &mut sounds), 2);
        assert!(events.is_empty());
        assert_eq!(log.play_count("bang_large"), 1);
        assert!(log.is_looping(THEME));
    }
}
