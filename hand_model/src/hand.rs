//! The 21-point hand-landmark model.
//!
//! Landmarks follow the MediaPipe hand-landmark layout: wrist at index 0,
//! then four joints per finger in base-to-tip order.  For finger `f` in
//! 1..=4 (index, middle, ring, pinky) the MCP knuckle sits at `4f + 1`,
//! the PIP knuckle at `4f + 2`, and the fingertip at `4f + 4`.  The
//! extractor in [`crate::fingers`] depends on this indexing exactly.

use serde::Deserialize;

// ════════════════════════════════════════════════════════════════════════════
// Landmark
// ════════════════════════════════════════════════════════════════════════════

/// One landmark in normalized image coordinates.
///
/// `x` and `y` are 0.0–1.0 with the origin at the top-left of the frame and
/// `y` increasing downward, so *smaller* `y` means *higher* in the image.
/// `z` is a relative depth reported by the tracker; the gesture rules never
/// read it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize)]
pub struct Landmark {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Landmark {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Landmark { x, y, z }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Joint — named indices into the 21-landmark layout
// ════════════════════════════════════════════════════════════════════════════

/// Named landmark indices, so gesture rules read as anatomy rather than
/// magic numbers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(usize)]
pub enum Joint {
    Wrist = 0,
    ThumbCmc = 1,
    ThumbMcp = 2,
    ThumbIp = 3,
    ThumbTip = 4,
    IndexMcp = 5,
    IndexPip = 6,
    IndexDip = 7,
    IndexTip = 8,
    MiddleMcp = 9,
    MiddlePip = 10,
    MiddleDip = 11,
    MiddleTip = 12,
    RingMcp = 13,
    RingPip = 14,
    RingDip = 15,
    RingTip = 16,
    PinkyMcp = 17,
    PinkyPip = 18,
    PinkyDip = 19,
    PinkyTip = 20,
}

impl Joint {
    pub fn index(self) -> usize {
        self as usize
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Handedness
// ════════════════════════════════════════════════════════════════════════════

/// Left/right classification inferred from landmark geometry.
///
/// This is a proxy for mirrored camera input, not anatomical truth: a hand
/// is "right" when its thumb tip lies to the right of the wrist in the
/// image.  It exists only to pick the correct thumb-abduction test.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Handedness {
    Left,
    Right,
}

// ════════════════════════════════════════════════════════════════════════════
// Hand
// ════════════════════════════════════════════════════════════════════════════

/// Number of landmarks in one tracked hand.
pub const LANDMARK_COUNT: usize = 21;

/// One detected hand: exactly [`LANDMARK_COUNT`] landmarks in the fixed
/// anatomical order.  Construction is fallible so a truncated tracker frame
/// can never reach the gesture rules.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hand([Landmark; LANDMARK_COUNT]);

impl Hand {
    /// Build a hand from a slice of landmarks.
    ///
    /// Returns `None` unless exactly 21 points are supplied.
    pub fn from_slice(points: &[Landmark]) -> Option<Hand> {
        let points: [Landmark; LANDMARK_COUNT] = points.try_into().ok()?;
        Some(Hand(points))
    }

    /// Landmark at a named joint.
    pub fn at(&self, joint: Joint) -> Landmark {
        self.0[joint.index()]
    }

    /// All 21 landmarks in anatomical order.
    pub fn landmarks(&self) -> &[Landmark; LANDMARK_COUNT] {
        &self.0
    }

    /// Infer handedness from thumb-tip position relative to the wrist.
    pub fn handedness(&self) -> Handedness {
        if self.at(Joint::ThumbTip).x > self.at(Joint::Wrist).x {
            Handedness::Right
        } else {
            Handedness::Left
        }
    }

    /// The same hand with all x coordinates mirrored about the image
    /// center, as a selfie-flipped camera would report it.
    pub fn mirrored(&self) -> Hand {
        let mut points = self.0;
        for p in &mut points {
            p.x = 1.0 - p.x;
        }
        Hand(points)
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════
