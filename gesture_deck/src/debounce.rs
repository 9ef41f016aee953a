//! Temporal dispatch policy: suppress flicker-driven repeats of the same
//! command while letting genuinely new commands through immediately.

use std::time::{Duration, Instant};

use hand_model::TransportCommand;

/// Cooldown for the continuous-video control loop.
pub const DEFAULT_COOLDOWN: Duration = Duration::from_secs(2);

/// Shorter window for one-shot sessions (single images, short clips),
/// where the same gesture is unlikely to flicker across many frames.
pub const SINGLE_SHOT_COOLDOWN: Duration = Duration::from_secs(1);

/// Debounce state for one control session.
///
/// A command is suppressed only when it equals the last *fired* command
/// and less than the cooldown has elapsed since that firing; at exactly
/// the cooldown it fires again.  A different command always fires
/// immediately, and a no-gesture frame never reaches this type at all —
/// absence of a command neither fires nor resets the clock.
///
/// The check and the state update are split so the session can withhold
/// the update when the transport reports that it failed: a command that
/// did not actually act must not start a cooldown window.  The command
/// and timestamp are always written together, so the state stays
/// consistent however the session is torn down.
pub struct Debouncer {
    cooldown: Duration,
    last_fired: Option<(TransportCommand, Instant)>,
}

impl Debouncer {
    pub fn new(cooldown: Duration) -> Self {
        Debouncer {
            cooldown,
            last_fired: None,
        }
    }

    /// Identity-aware debouncer with the continuous-video cooldown.
    pub fn continuous() -> Self {
        Debouncer::new(DEFAULT_COOLDOWN)
    }

    /// Debouncer with the shorter one-shot cooldown.
    pub fn single_shot() -> Self {
        Debouncer::new(SINGLE_SHOT_COOLDOWN)
    }

    /// Whether `command` may fire at `now`.  Does not mutate state.
    pub fn allows(&self, command: TransportCommand, now: Instant) -> bool {
        match self.last_fired {
            Some((last, at)) if last == command => now.duration_since(at) >= self.cooldown,
            _ => true,
        }
    }

    /// Record a dispatched command.  Call only after the transport
    /// accepted it.
    pub fn commit(&mut self, command: TransportCommand, now: Instant) {
        self.last_fired = Some((command, now));
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════
