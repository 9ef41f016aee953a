//! Rule-based gesture classification.
//!
//! A fixed, explainable priority chain over the finger-state vector — no
//! model, no calibration.  The ordering below is deliberate: earlier rules
//! win, so an open palm is always `Play` even though it also has ≥3 fingers
//! raised.

use std::fmt;

use crate::fingers::finger_states;
use crate::hand::{Hand, Joint};

// ════════════════════════════════════════════════════════════════════════════
// TransportCommand
// ════════════════════════════════════════════════════════════════════════════

/// A media-transport command produced by the classifier.
/// "No gesture recognized" is represented as `Option::None`, not a variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransportCommand {
    Play,
    Pause,
    Stop,
    Next,
    Previous,
}

impl TransportCommand {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransportCommand::Play => "play",
            TransportCommand::Pause => "pause",
            TransportCommand::Stop => "stop",
            TransportCommand::Next => "next",
            TransportCommand::Previous => "previous",
        }
    }
}

impl fmt::Display for TransportCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Classification
// ════════════════════════════════════════════════════════════════════════════

/// Classify the hands detected in one frame.
///
/// Only the first hand is inspected; any others are ignored.  An empty
/// frame yields `None` — the absence of a gesture is never an error.
///
/// Rules, first match wins:
/// 1. all five fingers extended → `Play`
/// 2. all five fingers folded → `Pause`
/// 3. palm facing down (wrist above the middle-finger MCP in the image)
///    and at least 3 of the 4 non-thumb fingers extended → `Stop`
/// 4. exactly index + middle extended → `Next`
/// 5. exactly index extended → `Previous`
/// 6. otherwise → `None`
///
/// Note that rule 3 never looks at the thumb, while rules 4 and 5 are
/// full-vector matches: an abducted thumb breaks them and the frame falls
/// through to `None`.  The palm-down test is a best-effort heuristic in a
/// 2-D projection and can misread tilted hands.
pub fn classify(hands: &[Hand]) -> Option<TransportCommand> {
    let hand = hands.first()?;
    let state = finger_states(hand);

    if state.all_extended() {
        return Some(TransportCommand::Play);
    }
    if state.all_folded() {
        return Some(TransportCommand::Pause);
    }

    let palm_down = hand.at(Joint::Wrist).y < hand.at(Joint::MiddleMcp).y;
    if palm_down && state.raised_fingers() >= 3 {
        return Some(TransportCommand::Stop);
    }

    match state.as_array() {
        [false, true, true, false, false] => Some(TransportCommand::Next),
        [false, true, false, false, false] => Some(TransportCommand::Previous),
        _ => None,
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════
