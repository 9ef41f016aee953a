//! The transport state machine.

use std::fmt;

use anyhow::{bail, Result};
use hand_model::TransportCommand;

use crate::playlist::Playlist;
use crate::sink::MediaOut;

// ════════════════════════════════════════════════════════════════════════════
// TransportState
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransportState {
    Stopped,
    Paused,
    Playing,
}

impl fmt::Display for TransportState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TransportState::Stopped => "stopped",
            TransportState::Paused => "paused",
            TransportState::Playing => "playing",
        })
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Applied — the result reported back for display
// ════════════════════════════════════════════════════════════════════════════

/// Outcome of applying one command: the resulting state, the track under
/// the cursor, and whether anything actually changed (`false` for the
/// idempotent no-ops, e.g. `play` while already playing).
#[derive(Clone, Debug, PartialEq)]
pub struct Applied {
    pub state: TransportState,
    pub track: Option<String>,
    pub changed: bool,
}

// ════════════════════════════════════════════════════════════════════════════
// Transport
// ════════════════════════════════════════════════════════════════════════════

/// The player adapter: owns the state machine and the playlist cursor,
/// and forwards each state change to a [`MediaOut`] sink.
///
/// Transitions:
///
/// | Command | From | To |
/// |---|---|---|
/// | `play` | stopped / paused | playing (resume, else start current track) |
/// | `play` | playing | no-op |
/// | `pause` | playing | paused |
/// | `pause` | paused / stopped | no-op |
/// | `stop` | any | stopped (no-op when already stopped) |
/// | `next` / `previous` | any | playing, cursor moved circularly |
///
/// Sink errors propagate before any state is mutated, so a failed effect
/// leaves both the state and the cursor untouched.
pub struct Transport {
    out: Box<dyn MediaOut>,
    state: TransportState,
    playlist: Playlist,
}

impl Transport {
    pub fn new(playlist: Playlist, out: Box<dyn MediaOut>) -> Self {
        Transport {
            out,
            state: TransportState::Stopped,
            playlist,
        }
    }

    /// Local transport with no external effect.
    pub fn local(playlist: Playlist) -> Self {
        Transport::new(playlist, Box::new(crate::sink::NullOut))
    }

    pub fn state(&self) -> TransportState {
        self.state
    }

    pub fn current_track(&self) -> Option<&str> {
        self.playlist.current()
    }

    /// One-line status for display, e.g. `playing — 2/5 song.mp3`.
    pub fn status(&self) -> String {
        match self.playlist.current() {
            Some(track) => format!(
                "{} — {}/{} {}",
                self.state,
                self.playlist.position() + 1,
                self.playlist.len(),
                track
            ),
            None => self.state.to_string(),
        }
    }

    /// Apply one fired command.
    pub fn apply(&mut self, command: TransportCommand) -> Result<Applied> {
        match command {
            TransportCommand::Play => self.play(),
            TransportCommand::Pause => self.pause(),
            TransportCommand::Stop => self.stop(),
            TransportCommand::Next => self.next(),
            TransportCommand::Previous => self.previous(),
        }
    }

    pub fn play(&mut self) -> Result<Applied> {
        if self.state == TransportState::Playing {
            return Ok(self.applied(false));
        }
        if self.playlist.is_empty() {
            bail!("no tracks loaded");
        }
        self.out.play_pause()?;
        self.state = TransportState::Playing;
        Ok(self.applied(true))
    }

    pub fn pause(&mut self) -> Result<Applied> {
        if self.state != TransportState::Playing {
            return Ok(self.applied(false));
        }
        self.out.play_pause()?;
        self.state = TransportState::Paused;
        Ok(self.applied(true))
    }

    pub fn stop(&mut self) -> Result<Applied> {
        if self.state == TransportState::Stopped {
            return Ok(self.applied(false));
        }
        self.out.stop()?;
        self.state = TransportState::Stopped;
        Ok(self.applied(true))
    }

    pub fn next(&mut self) -> Result<Applied> {
        if self.playlist.is_empty() {
            bail!("no tracks loaded");
        }
        self.out.next()?;
        self.playlist.advance();
        self.state = TransportState::Playing;
        Ok(self.applied(true))
    }

    pub fn previous(&mut self) -> Result<Applied> {
        if self.playlist.is_empty() {
            bail!("no tracks loaded");
        }
        self.out.previous()?;
        self.playlist.retreat();
        self.state = TransportState::Playing;
        Ok(self.applied(true))
    }

    fn applied(&self, changed: bool) -> Applied {
        Applied {
            state: self.state,
            track: self.playlist.current().map(str::to_owned),
            changed,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    fn transport() -> Transport {
        Transport::local(Playlist::new(vec![
            "a.mp3".into(),
            "b.mp3".into(),
            "c.mp3".into(),
        ]))
    }

    #[test]
    fn play_from_stopped_starts_current_track() {
        let mut t = transport();
        let applied = t.play().unwrap();
        assert_eq!(applied.state, TransportState::Playing);
        assert_eq!(applied.track.as_deref(), Some("a.mp3"));
        assert!(applied.changed);
    }

    #[test]
    fn play_while_playing_is_a_noop() {
        let mut t = transport();
        t.play().unwrap();
        let applied = t.play().unwrap();
        assert_eq!(applied.state, TransportState::Playing);
        assert!(!applied.changed);
    }

    #[test]
    fn pause_only_from_playing() {
        let mut t = transport();
        assert!(!t.pause().unwrap().changed); // stopped → no-op
        t.play().unwrap();
        let applied = t.pause().unwrap();
        assert_eq!(applied.state, TransportState::Paused);
        assert!(applied.changed);
        assert!(!t.pause().unwrap().changed); // paused → no-op
    }

    #[test]
    fn play_resumes_from_paused() {
        let mut t = transport();
        t.play().unwrap();
        t.pause().unwrap();
        assert_eq!(t.play().unwrap().state, TransportState::Playing);
    }

    #[test]
    fn stop_from_any_state() {
        let mut t = transport();
        assert!(!t.stop().unwrap().changed); // already stopped
        t.play().unwrap();
        assert_eq!(t.stop().unwrap().state, TransportState::Stopped);
        t.play().unwrap();
        t.pause().unwrap();
        assert_eq!(t.stop().unwrap().state, TransportState::Stopped);
    }

    #[test]
    fn next_wraps_and_always_plays() {
        let mut t = transport();
        t.next().unwrap();
        assert_eq!(t.current_track(), Some("b.mp3"));
        assert_eq!(t.state(), TransportState::Playing);
        t.next().unwrap();
        t.next().unwrap();
        assert_eq!(t.current_track(), Some("a.mp3")); // wrapped
    }

    #[test]
    fn previous_wraps_backward() {
        let mut t = transport();
        t.previous().unwrap();
        assert_eq!(t.current_track(), Some("c.mp3"));
        assert_eq!(t.state(), TransportState::Playing);
    }

    #[test]
    fn empty_playlist_is_an_error_for_track_commands() {
        let mut t = Transport::local(Playlist::new(vec![]));
        assert!(t.play().is_err());
        assert!(t.next().is_err());
        assert!(t.previous().is_err());
        // pause/stop stay no-ops, not errors
        assert!(!t.pause().unwrap().changed);
        assert!(!t.stop().unwrap().changed);
        assert_eq!(t.state(), TransportState::Stopped);
    }

    #[test]
    fn failing_sink_leaves_state_untouched() {
        struct FailingOut;
        impl MediaOut for FailingOut {
            fn play_pause(&mut self) -> anyhow::Result<()> {
                anyhow::bail!("injection refused")
            }
            fn stop(&mut self) -> anyhow::Result<()> {
                anyhow::bail!("injection refused")
            }
            fn next(&mut self) -> anyhow::Result<()> {
                anyhow::bail!("injection refused")
            }
            fn previous(&mut self) -> anyhow::Result<()> {
                anyhow::bail!("injection refused")
            }
        }

        let mut t = Transport::new(
            Playlist::new(vec!["a.mp3".into()]),
            Box::new(FailingOut),
        );
        assert!(t.play().is_err());
        assert_eq!(t.state(), TransportState::Stopped);
        assert!(t.next().is_err());
        assert_eq!(t.current_track(), Some("a.mp3"));
    }
}
