//! Finger-state extraction: one hand in, five extended/folded flags out.

use crate::hand::{Hand, Handedness, Joint};

// ════════════════════════════════════════════════════════════════════════════
// FingerState
// ════════════════════════════════════════════════════════════════════════════

/// Per-finger extension flags in fixed thumb/index/middle/ring/pinky order.
/// `true` = extended (up), `false` = folded (down).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FingerState {
    pub thumb: bool,
    pub index: bool,
    pub middle: bool,
    pub ring: bool,
    pub pinky: bool,
}

impl FingerState {
    /// The vector in its fixed order, for exact-pattern matching.
    pub fn as_array(&self) -> [bool; 5] {
        [self.thumb, self.index, self.middle, self.ring, self.pinky]
    }

    pub fn all_extended(&self) -> bool {
        self.as_array().iter().all(|&f| f)
    }

    pub fn all_folded(&self) -> bool {
        self.as_array().iter().all(|&f| !f)
    }

    /// How many of the four non-thumb fingers are extended.
    pub fn raised_fingers(&self) -> usize {
        [self.index, self.middle, self.ring, self.pinky]
            .iter()
            .filter(|&&f| f)
            .count()
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Extraction
// ════════════════════════════════════════════════════════════════════════════

/// Compute the finger-state vector for one hand.
///
/// Fingers 1..=4 count as extended when the fingertip sits strictly above
/// its PIP knuckle in the image (smaller y).  That is a 2-D approximation
/// which assumes a roughly upright hand facing the camera.
///
/// The thumb has no usable vertical signal in that projection, so it is
/// judged by sideways abduction instead: tip past the IP joint, with the
/// comparison direction chosen by inferred handedness.
pub fn finger_states(hand: &Hand) -> FingerState {
    let thumb_tip = hand.at(Joint::ThumbTip).x;
    let thumb_ip = hand.at(Joint::ThumbIp).x;
    let thumb = match hand.handedness() {
        Handedness::Right => thumb_tip > thumb_ip,
        Handedness::Left => thumb_tip < thumb_ip,
    };

    let up = |tip: Joint, pip: Joint| hand.at(tip).y < hand.at(pip).y;

    FingerState {
        thumb,
        index: up(Joint::IndexTip, Joint::IndexPip),
        middle: up(Joint::MiddleTip, Joint::MiddlePip),
        ring: up(Joint::RingTip, Joint::RingPip),
        pinky: up(Joint::PinkyTip, Joint::PinkyPip),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use crate::synth::hand_with;

    #[test]
    fn open_palm_all_extended() {
        let hand = hand_with([true, true, true, true, true]);
        assert!(finger_states(&hand).all_extended());
    }

    #[test]
    fn fist_all_folded() {
        let hand = hand_with([false, false, false, false, false]);
        assert!(finger_states(&hand).all_folded());
    }

    #[test]
    fn mixed_pattern_extracted_in_order() {
        let hand = hand_with([false, true, true, false, false]);
        assert_eq!(
            finger_states(&hand).as_array(),
            [false, true, true, false, false]
        );
    }

    #[test]
    fn raised_fingers_ignores_thumb() {
        let hand = hand_with([true, true, true, true, false]);
        assert_eq!(finger_states(&hand).raised_fingers(), 3);
    }

    #[test]
    fn mirroring_preserves_finger_conclusions() {
        // Mirroring flips handedness, but the handedness-corrected thumb
        // test and the y-only finger tests must agree with the original.
        for pattern in [
            [true, true, true, true, true],
            [false, false, false, false, false],
            [true, false, true, false, true],
            [false, true, true, false, false],
        ] {
            let hand = hand_with(pattern);
            let mirrored = hand.mirrored();
            assert_ne!(hand.handedness(), mirrored.handedness());
            assert_eq!(finger_states(&hand), finger_states(&mirrored));
        }
    }
}
