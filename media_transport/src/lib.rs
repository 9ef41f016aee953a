//! # media_transport
//!
//! The player side of the gesture pipeline: a transport state machine
//! (`stopped` / `paused` / `playing`) with a circular playlist, applied
//! commands reported back for display, and a pluggable [`MediaOut`] sink
//! for the actual effect.
//!
//! ## Sinks
//!
//! * [`NullOut`] (default) — no OS side effects; the transport itself is
//!   the player state.  Used for local sessions and all tests.
//! * `KeyOut` (`keys` feature) — sends the VLC keyboard shortcuts
//!   (`space` play/pause toggle, `s` stop, `n` next, `p` previous) to the
//!   focused window, so gestures drive an external player.

pub mod playlist;
pub mod sink;
pub mod transport;

pub use playlist::Playlist;
pub use sink::{open_media_out, MediaOut, NullOut};
pub use transport::{Applied, Transport, TransportState};
