//! # gesture_deck
//!
//! The gesture-to-media-control pipeline: pull landmark frames from a
//! [`source::FrameSource`], classify each frame with `hand_model`, pass the
//! result through the [`debounce::Debouncer`], and dispatch surviving
//! commands to a `media_transport::Transport`.
//!
//! ## Pipeline
//!
//! ```text
//! FrameSource → classify → Debouncer → Transport
//! ```
//!
//! Frames are processed strictly in arrival order and synchronously: frame
//! N is classified and (possibly) dispatched before frame N+1 is pulled.
//! One [`session::Session`] owns the debounce state and the transport for
//! the lifetime of a control run; there is no ambient or global state.
//!
//! ## Frame sources
//!
//! * [`source::ScriptedSource`] — finite in-memory frame list (tests, demo).
//! * [`source::JsonLinesSource`] — one JSON frame per line from any reader.
//! * [`source::TrackerSource`] — an external landmark-tracker subprocess
//!   (e.g. a MediaPipe helper) streaming frames over stdout.

pub mod debounce;
pub mod session;
pub mod source;

pub use debounce::Debouncer;
pub use session::{Session, SessionConfig};
pub use source::{Frame, FrameSource, JsonLinesSource, ScriptedSource, TrackerSource};
