//! Synthetic hand fixtures.
//!
//! Hand-built landmark sets that satisfy the extractor's geometric rules,
//! used by the demo frame source and by tests in this workspace.  All
//! fixtures are right hands; call [`Hand::mirrored`] for a left hand.

use crate::hand::{Hand, Joint, Landmark, LANDMARK_COUNT};

/// An upright right hand with the given finger pattern
/// (thumb, index, middle, ring, pinky; `true` = extended).
pub fn hand_with(fingers: [bool; 5]) -> Hand {
    let mut points = [Landmark::default(); LANDMARK_COUNT];

    points[Joint::Wrist.index()] = Landmark::new(0.5, 0.9, 0.0);

    // Thumb: extension is sideways abduction, tip past the IP joint.
    points[Joint::ThumbCmc.index()] = Landmark::new(0.55, 0.8, 0.0);
    points[Joint::ThumbMcp.index()] = Landmark::new(0.6, 0.75, 0.0);
    points[Joint::ThumbIp.index()] = Landmark::new(0.65, 0.7, 0.0);
    points[Joint::ThumbTip.index()] = if fingers[0] {
        Landmark::new(0.72, 0.68, 0.0)
    } else {
        Landmark::new(0.6, 0.68, 0.0)
    };

    // Fingers 1..=4: extension is tip-y above pip-y.
    let columns = [0.45, 0.5, 0.55, 0.6];
    for f in 1..=4 {
        let x = columns[f - 1];
        let base = 4 * f + 1;
        points[base] = Landmark::new(x, 0.6, 0.0); // MCP
        points[base + 1] = Landmark::new(x, 0.5, 0.0); // PIP
        points[base + 2] = Landmark::new(x, 0.45, 0.0); // DIP
        points[base + 3] = if fingers[f] {
            Landmark::new(x, 0.35, 0.0) // tip above PIP
        } else {
            Landmark::new(x, 0.62, 0.0) // tip curled below PIP
        };
    }

    Hand::from_slice(&points).expect("fixture has exactly 21 points")
}

/// A hand tilted palm-down (wrist above the middle knuckle in the image)
/// with the first `raised` non-thumb fingers extended.
pub fn palm_down_hand(raised: usize) -> Hand {
    let mut fingers = [false; 5];
    for f in 1..=raised.min(4) {
        fingers[f] = true;
    }
    let mut points = *hand_with(fingers).landmarks();
    points[Joint::Wrist.index()] = Landmark::new(0.5, 0.3, 0.0);
    Hand::from_slice(&points).expect("fixture has exactly 21 points")
}
