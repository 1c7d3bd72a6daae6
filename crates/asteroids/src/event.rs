//! Things that happened during a tick
//!
//! The game only records events; sound and any other side effects are
//! applied by whoever drains the queue.

use crate::asteroid::AsteroidClass;
use crate::ship::ShipClass;

/// Game event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// The game was restarted
    Restarted,
    /// The human fired a missile
    MissileFired,
    /// The human's engine fired (throttled)
    Thrust,
    /// The human raised the shield
    ShieldRaised,
    /// A saucer entered the screen
    SaucerAppeared(ShipClass),
    /// A saucer left the screen or was destroyed
    SaucerGone(ShipClass),
    /// A ship blew up
    ShipExploded(ShipClass),
    /// An asteroid blew up
    AsteroidExploded(AsteroidClass),
    /// Score earned an extra life
    BonusLife,
    /// Every asteroid was cleared; carries the new level
    LevelCleared(u32),
    /// The game ended
    GameOver,
    /// The final score qualifies for the best-score table
    BestScore(u32),
}
