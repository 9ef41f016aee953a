//! Frame sources — pull-based suppliers of per-frame hand lists.
//!
//! The pipeline never owns a camera.  It pulls frames from anything
//! implementing [`FrameSource`]: a scripted list, a JSON-lines recording,
//! or an external landmark-tracker subprocess streaming over stdout.
//!
//! ## Wire format
//!
//! One JSON object per line:
//!
//! ```json
//! {"hands": [[{"x": 0.5, "y": 0.9, "z": 0.0}, …21 points…]]}
//! ```
//!
//! Hands with the wrong landmark count are dropped with a warning; a
//! malformed line counts as an empty frame.  Neither aborts the stream.

use std::collections::VecDeque;
use std::io::{BufRead, BufReader};
use std::process::{Child, ChildStdout, Command, Stdio};
use std::time::Duration;

use anyhow::{Context, Result};
use hand_model::{Hand, Landmark};
use serde::Deserialize;

/// One video frame's worth of detected hands (possibly none).
pub type Frame = Vec<Hand>;

// ════════════════════════════════════════════════════════════════════════════
// FrameSource trait
// ════════════════════════════════════════════════════════════════════════════

/// A finite, restartable-per-session sequence of frames.
pub trait FrameSource {
    /// Pull the next frame.  `Ok(None)` means end of stream.
    fn next_frame(&mut self) -> Result<Option<Frame>>;
}

// ════════════════════════════════════════════════════════════════════════════
// ScriptedSource — in-memory frames (tests, demo)
// ════════════════════════════════════════════════════════════════════════════

/// Replays a fixed list of frames, optionally sleeping between pulls to
/// mimic a capture cadence.
pub struct ScriptedSource {
    frames: VecDeque<Frame>,
    frame_delay: Option<Duration>,
}

impl ScriptedSource {
    pub fn new(frames: Vec<Frame>) -> Self {
        ScriptedSource {
            frames: frames.into(),
            frame_delay: None,
        }
    }

    /// Like [`ScriptedSource::new`], but sleeps `delay` before each frame.
    pub fn paced(frames: Vec<Frame>, delay: Duration) -> Self {
        ScriptedSource {
            frames: frames.into(),
            frame_delay: Some(delay),
        }
    }
}

impl FrameSource for ScriptedSource {
    fn next_frame(&mut self) -> Result<Option<Frame>> {
        match self.frames.pop_front() {
            Some(frame) => {
                if let Some(delay) = self.frame_delay {
                    std::thread::sleep(delay);
                }
                Ok(Some(frame))
            }
            None => Ok(None),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// JsonLinesSource — frames from any buffered reader
// ════════════════════════════════════════════════════════════════════════════

#[derive(Deserialize)]
struct FrameJson {
    #[serde(default)]
    hands: Vec<Vec<Landmark>>,
}

/// Frames parsed one-per-line from a reader: a recording file, stdin, or a
/// child process's stdout.
pub struct JsonLinesSource<R> {
    reader: R,
    line_no: u64,
}

impl<R: BufRead> JsonLinesSource<R> {
    pub fn new(reader: R) -> Self {
        JsonLinesSource { reader, line_no: 0 }
    }
}

impl JsonLinesSource<BufReader<std::fs::File>> {
    /// Open a recorded frame file.
    pub fn open(path: &str) -> Result<Self> {
        let file = std::fs::File::open(path)
            .with_context(|| format!("opening frame recording {path}"))?;
        Ok(JsonLinesSource::new(BufReader::new(file)))
    }
}

impl<R: BufRead> FrameSource for JsonLinesSource<R> {
    fn next_frame(&mut self) -> Result<Option<Frame>> {
        loop {
            let mut line = String::new();
            let n = self
                .reader
                .read_line(&mut line)
                .context("reading frame line")?;
            if n == 0 {
                return Ok(None);
            }
            self.line_no += 1;

            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let parsed: FrameJson = match serde_json::from_str(line) {
                Ok(f) => f,
                Err(e) => {
                    log::warn!("line {}: unparseable frame ({e}) — treating as empty", self.line_no);
                    return Ok(Some(Vec::new()));
                }
            };

            let mut hands = Vec::with_capacity(parsed.hands.len());
            for points in &parsed.hands {
                match Hand::from_slice(points) {
                    Some(hand) => hands.push(hand),
                    None => log::warn!(
                        "line {}: dropping hand with {} landmarks (expected 21)",
                        self.line_no,
                        points.len()
                    ),
                }
            }
            return Ok(Some(hands));
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// TrackerSource — external landmark tracker over stdout
// ════════════════════════════════════════════════════════════════════════════

/// Spawns an external tracker command (e.g. a MediaPipe helper script that
/// owns the camera) and reads its stdout as JSON-lines frames.
pub struct TrackerSource {
    child: Child,
    inner: JsonLinesSource<BufReader<ChildStdout>>,
}

impl TrackerSource {
    pub fn spawn(program: &str, args: &[String]) -> Result<Self> {
        let mut child = Command::new(program)
            .args(args)
            .stdout(Stdio::piped())
            .spawn()
            .with_context(|| format!("spawning tracker `{program}`"))?;

        let stdout = child
            .stdout
            .take()
            .context("tracker has no stdout handle")?;

        Ok(TrackerSource {
            child,
            inner: JsonLinesSource::new(BufReader::new(stdout)),
        })
    }
}

impl FrameSource for TrackerSource {
    fn next_frame(&mut self) -> Result<Option<Frame>> {
        self.inner.next_frame()
    }
}

impl Drop for TrackerSource {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use hand_model::synth::hand_with;
    use std::io::Cursor;

    #[test]
    fn scripted_source_replays_in_order() {
        let mut src = ScriptedSource::new(vec![vec![hand_with([true; 5])], vec![]]);
        assert_eq!(src.next_frame().unwrap().unwrap().len(), 1);
        assert_eq!(src.next_frame().unwrap().unwrap().len(), 0);
        assert!(src.next_frame().unwrap().is_none());
    }

    #[test]
    fn json_lines_parses_hands() {
        let points: Vec<String> = (0..21)
            .map(|i| format!(r#"{{"x":0.5,"y":{},"z":0.0}}"#, i as f32 / 21.0))
            .collect();
        let line = format!(r#"{{"hands":[[{}]]}}"#, points.join(","));
        let mut src = JsonLinesSource::new(Cursor::new(line));
        let frame = src.next_frame().unwrap().unwrap();
        assert_eq!(frame.len(), 1);
        assert!(src.next_frame().unwrap().is_none());
    }

    #[test]
    fn short_hand_is_dropped_not_fatal() {
        let line = r#"{"hands":[[{"x":0.1,"y":0.2,"z":0.0}]]}"#;
        let mut src = JsonLinesSource::new(Cursor::new(line));
        let frame = src.next_frame().unwrap().unwrap();
        assert!(frame.is_empty());
    }

    #[test]
    fn garbage_line_is_an_empty_frame() {
        let mut src = JsonLinesSource::new(Cursor::new("not json\n{\"hands\":[]}\n"));
        assert!(src.next_frame().unwrap().unwrap().is_empty());
        assert!(src.next_frame().unwrap().unwrap().is_empty());
        assert!(src.next_frame().unwrap().is_none());
    }

    #[test]
    fn blank_lines_are_skipped() {
        let mut src = JsonLinesSource::new(Cursor::new("\n\n{\"hands\":[]}\n"));
        assert!(src.next_frame().unwrap().unwrap().is_empty());
        assert!(src.next_frame().unwrap().is_none());
    }
}
