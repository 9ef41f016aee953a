//! One control session: classify → debounce → dispatch, frame by frame.

use std::time::{Duration, Instant};

use anyhow::Result;
use hand_model::{classify, Hand, TransportCommand};
use media_transport::{Applied, Transport};

use crate::debounce::{Debouncer, DEFAULT_COOLDOWN};
use crate::source::FrameSource;

// ════════════════════════════════════════════════════════════════════════════
// SessionConfig
// ════════════════════════════════════════════════════════════════════════════

pub struct SessionConfig {
    /// Minimum gap between two firings of the same command.
    pub cooldown: Duration,
    /// Process every Nth frame (1 = every frame).  Recorded video is
    /// usually decimated; live feeds are not.
    pub frame_stride: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            cooldown: DEFAULT_COOLDOWN,
            frame_stride: 1,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Session
// ════════════════════════════════════════════════════════════════════════════

/// Owns the per-session mutable state: one [`Debouncer`] and one
/// [`Transport`].  Created when a control run starts and dropped when it
/// ends; nothing about it is global.
pub struct Session {
    debounce: Debouncer,
    transport: Transport,
    frame_stride: usize,
    /// Last status line produced by a dispatched command.
    pub status: String,
}

impl Session {
    pub fn new(cfg: SessionConfig, transport: Transport) -> Self {
        Session {
            debounce: Debouncer::new(cfg.cooldown),
            transport,
            frame_stride: cfg.frame_stride.max(1),
            status: String::from("ready"),
        }
    }

    pub fn transport(&self) -> &Transport {
        &self.transport
    }

    /// Classify one frame and dispatch the command if the debouncer allows
    /// it.  Returns what was applied, `None` when nothing fired.
    ///
    /// The debounce window opens only after the transport accepts the
    /// command; a transport error propagates and leaves the window as it
    /// was, so the gesture can retry on the next frame.
    pub fn process_frame(
        &mut self,
        hands: &[Hand],
        now: Instant,
    ) -> Result<Option<(TransportCommand, Applied)>> {
        let Some(command) = classify(hands) else {
            return Ok(None);
        };

        if !self.debounce.allows(command, now) {
            log::debug!("{command} suppressed (cooldown)");
            return Ok(None);
        }

        let applied = self.transport.apply(command)?;
        self.debounce.commit(command, now);
        self.status = format!("{} → {}", command, self.transport.status());
        Ok(Some((command, applied)))
    }

    /// Drive a frame source to exhaustion.
    ///
    /// Transport failures are logged and the run continues — one bad frame
    /// must never abort the session.  Only a frame-source I/O error ends
    /// the run early.
    pub fn run<S: FrameSource + ?Sized>(&mut self, source: &mut S) -> Result<()> {
        let mut index: u64 = 0;
        while let Some(hands) = source.next_frame()? {
            let process = index % self.frame_stride as u64 == 0;
            index += 1;
            if !process {
                continue;
            }

            match self.process_frame(&hands, Instant::now()) {
                Ok(Some(_)) => log::info!("{}", self.status),
                Ok(None) => {}
                Err(e) => log::warn!("transport error: {e:#}"),
            }
        }
        Ok(())
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use hand_model::synth::hand_with;
    use media_transport::{Playlist, TransportState};

    fn session() -> Session {
        let transport = Transport::local(Playlist::new(vec![
            "a.mp3".into(),
            "b.mp3".into(),
        ]));
        Session::new(SessionConfig::default(), transport)
    }

    #[test]
    fn open_palm_dispatches_play() {
        let mut s = session();
        let fired = s
            .process_frame(&[hand_with([true; 5])], Instant::now())
            .unwrap();
        let (command, applied) = fired.unwrap();
        assert_eq!(command, TransportCommand::Play);
        assert_eq!(applied.state, TransportState::Playing);
    }

    #[test]
    fn no_gesture_frame_fires_nothing() {
        let mut s = session();
        assert!(s.process_frame(&[], Instant::now()).unwrap().is_none());
    }

    #[test]
    fn repeat_within_cooldown_is_suppressed() {
        let mut s = session();
        let t0 = Instant::now();
        let palm = [hand_with([true; 5])];
        assert!(s.process_frame(&palm, t0).unwrap().is_some());
        assert!(s
            .process_frame(&palm, t0 + Duration::from_millis(100))
            .unwrap()
            .is_none());
    }

    #[test]
    fn none_frames_do_not_reset_the_cooldown() {
        let mut s = session();
        let t0 = Instant::now();
        let palm = [hand_with([true; 5])];
        s.process_frame(&palm, t0).unwrap();
        // A stretch of empty frames…
        for i in 1..5 {
            s.process_frame(&[], t0 + Duration::from_millis(100 * i))
                .unwrap();
        }
        // …and the same gesture still inside the original window.
        assert!(s
            .process_frame(&palm, t0 + Duration::from_millis(600))
            .unwrap()
            .is_none());
    }

    #[test]
    fn transport_error_leaves_window_open() {
        // Empty playlist: play errors, the debouncer must not open a
        // window, so a later play (after tracks appear) would still fire.
        let mut s = Session::new(
            SessionConfig::default(),
            Transport::local(Playlist::new(vec![])),
        );
        let t0 = Instant::now();
        let palm = [hand_with([true; 5])];
        assert!(s.process_frame(&palm, t0).is_err());
        // Immediately after the failure the command is still allowed.
        assert!(s.process_frame(&palm, t0 + Duration::from_millis(10)).is_err());
    }

    #[test]
    fn run_decimates_by_frame_stride() {
        // Six peace-sign frames with stride 5: frames 0 and 5 are
        // processed; frame 5 lands inside the cooldown, so next fires once.
        let peace = vec![hand_with([false, true, true, false, false])];
        let mut src = crate::source::ScriptedSource::new(vec![peace; 6]);
        let transport = Transport::local(Playlist::new(vec![
            "a.mp3".into(),
            "b.mp3".into(),
            "c.mp3".into(),
        ]));
        let mut s = Session::new(
            SessionConfig {
                frame_stride: 5,
                ..SessionConfig::default()
            },
            transport,
        );
        s.run(&mut src).unwrap();
        assert_eq!(s.transport().current_track(), Some("b.mp3"));
    }
}
