//! Presentation-side capability ports
//!
//! This module defines the traits the game engine uses to reach the
//! outside world while a game is running: a tunnel carrying state to the
//! presentation layer and a speaker playing short audio cues. Keeping both
//! behind traits lets the engine run unchanged in a browser, a terminal, or
//! a test harness.

use thiserror::Error;

use crate::game::{SyncMessage, UpdateMessage};

/// Trait for sending messages to the presentation layer
///
/// Implementations might forward to a WebSocket, a WASM bridge into a
/// JavaScript UI, or simply redraw a terminal screen.
pub trait Tunnel {
    /// Sends an update message to the presentation layer
    ///
    /// Update messages describe a single change, such as an answer being
    /// revealed or a team scoring.
    ///
    /// # Arguments
    ///
    /// * `message` - The update message to send
    fn send_message(&self, message: &UpdateMessage);

    /// Sends a full state synchronization message
    ///
    /// Sync messages carry everything needed to render the current screen
    /// from scratch.
    ///
    /// # Arguments
    ///
    /// * `state` - The synchronization message to send
    fn send_state(&self, state: &SyncMessage);
}

/// Error reported by a [`Speaker`] that could not play a cue
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("could not play `{cue}`: {reason}")]
pub struct PlaybackError {
    /// The cue that failed
    pub cue: String,
    /// Why playback failed (denied by policy, missing file, ...)
    pub reason: String,
}

/// Trait for fire-and-forget audio playback
///
/// The engine never lets a playback failure affect game state; errors are
/// logged and dropped.
pub trait Speaker {
    /// Plays the named cue
    ///
    /// # Errors
    ///
    /// Returns a [`PlaybackError`] when the cue cannot be played.
    fn play(&self, cue: &str) -> Result<(), PlaybackError>;
}

/// A speaker that never makes a sound
#[derive(Debug, Default, Clone, Copy)]
pub struct Silent;

impl Speaker for Silent {
    fn play(&self, _cue: &str) -> Result<(), PlaybackError> {
        Ok(())
    }
}
