//! # hand_model
//!
//! Pure geometry core for hand-gesture media control: the fixed 21-point
//! hand-landmark model, per-finger extension extraction, and the rule-based
//! classifier that turns a detected hand into a transport command.
//!
//! ## Gesture → Command mapping
//!
//! | Gesture | Finger vector | Command |
//! |---|---|---|
//! | Open palm (all fingers up) | `[1,1,1,1,1]` | `Play` |
//! | Closed fist (all fingers down) | `[0,0,0,0,0]` | `Pause` |
//! | Palm facing down, ≥3 fingers up | wrist above middle knuckle | `Stop` |
//! | Peace sign (index + middle up) | `[0,1,1,0,0]` exactly | `Next` |
//! | Index finger only | `[0,1,0,0,0]` exactly | `Previous` |
//!
//! Everything in this crate is deterministic and side-effect free; frames,
//! clocks, and players live in the `gesture_deck` and `media_transport`
//! crates.

pub mod classify;
pub mod fingers;
pub mod hand;
pub mod synth;

pub use classify::{classify, TransportCommand};
pub use fingers::{finger_states, FingerState};
pub use hand::{Hand, Handedness, Joint, Landmark, LANDMARK_COUNT};
