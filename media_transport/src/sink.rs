//! Output sinks — where an applied transport command actually lands.
//!
//! Mirrors the player's own bookkeeping onto an external effect.  The
//! default build ships only [`NullOut`]; the `keys` feature adds `KeyOut`,
//! which injects the VLC keyboard shortcuts into the focused window.

use anyhow::Result;

// ════════════════════════════════════════════════════════════════════════════
// MediaOut trait
// ════════════════════════════════════════════════════════════════════════════

/// The low-level effect behind each transport operation.
///
/// Implementations may fail (device gone, injection refused); the
/// [`crate::Transport`] propagates those errors without mutating its own
/// state, so a failed effect never desynchronises the state machine.
pub trait MediaOut {
    /// Toggle play/pause on the target player.
    fn play_pause(&mut self) -> Result<()>;
    fn stop(&mut self) -> Result<()>;
    fn next(&mut self) -> Result<()>;
    fn previous(&mut self) -> Result<()>;
}

// ── null backend (local state-only sessions, tests) ─────────────────────────

/// Sink with no external effect.  The transport's own state machine is the
/// whole player.
#[derive(Default)]
pub struct NullOut;

impl MediaOut for NullOut {
    fn play_pause(&mut self) -> Result<()> {
        Ok(())
    }
    fn stop(&mut self) -> Result<()> {
        Ok(())
    }
    fn next(&mut self) -> Result<()> {
        Ok(())
    }
    fn previous(&mut self) -> Result<()> {
        Ok(())
    }
}

// ── keystroke backend (feature = "keys") ────────────────────────────────────

/// Sink that sends VLC's default shortcuts to the focused window:
/// `space` toggles play/pause, `s` stops, `n`/`p` change track.
///
/// The external player must be the active window for the keystrokes to
/// land; this sink cannot verify that.
#[cfg(feature = "keys")]
pub struct KeyOut {
    enigo: enigo::Enigo,
}

#[cfg(feature = "keys")]
impl KeyOut {
    pub fn new() -> Result<Self> {
        use enigo::{Enigo, Settings};
        let enigo = Enigo::new(&Settings::default())
            .map_err(|e| anyhow::anyhow!("failed to initialise key injection: {e}"))?;
        Ok(KeyOut { enigo })
    }

    fn press(&mut self, key: enigo::Key) -> Result<()> {
        use enigo::{Direction, Keyboard};
        self.enigo
            .key(key, Direction::Click)
            .map_err(|e| anyhow::anyhow!("key injection failed: {e}"))
    }
}

#[cfg(feature = "keys")]
impl MediaOut for KeyOut {
    fn play_pause(&mut self) -> Result<()> {
        self.press(enigo::Key::Space)
    }
    fn stop(&mut self) -> Result<()> {
        self.press(enigo::Key::Unicode('s'))
    }
    fn next(&mut self) -> Result<()> {
        self.press(enigo::Key::Unicode('n'))
    }
    fn previous(&mut self) -> Result<()> {
        self.press(enigo::Key::Unicode('p'))
    }
}

// ════════════════════════════════════════════════════════════════════════════
// open_media_out — pick a sink, falling back to null
// ════════════════════════════════════════════════════════════════════════════

/// Open the requested sink, falling back to [`NullOut`] with a warning when
/// key injection is unavailable.
pub fn open_media_out(use_keys: bool) -> Box<dyn MediaOut> {
    if !use_keys {
        return Box::new(NullOut);
    }
    key_out_or_null()
}

#[cfg(feature = "keys")]
fn key_out_or_null() -> Box<dyn MediaOut> {
    match KeyOut::new() {
        Ok(out) => {
            log::info!("key-injection sink active — keep the media player focused");
            Box::new(out)
        }
        Err(e) => {
            log::warn!("{e} — using null sink");
            Box::new(NullOut)
        }
    }
}

#[cfg(not(feature = "keys"))]
fn key_out_or_null() -> Box<dyn MediaOut> {
    log::warn!("built without the `keys` feature — using null sink");
    Box::new(NullOut)
}
