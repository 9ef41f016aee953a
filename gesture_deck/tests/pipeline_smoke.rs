//! End-to-end pipeline checks: scripted landmark frames in, transport
//! state out, with the debounce clock driven explicitly.

use std::io::Cursor;
use std::time::{Duration, Instant};

use gesture_deck::{JsonLinesSource, Session, SessionConfig};
use hand_model::synth::hand_with;
use hand_model::{Hand, TransportCommand};
use media_transport::{Playlist, Transport, TransportState};

fn session_with(cooldown: Duration) -> Session {
    let transport = Transport::local(Playlist::new(vec![
        "a.mp3".into(),
        "b.mp3".into(),
        "c.mp3".into(),
    ]));
    Session::new(
        SessionConfig {
            cooldown,
            frame_stride: 1,
        },
        transport,
    )
}

#[test]
fn play_suppressed_pause_scenario() {
    // Open palm, open palm 0.1s later, fist 0.2s after that:
    // play fires, the repeat is suppressed, pause fires — two dispatches.
    let mut s = session_with(Duration::from_secs(2));
    let t0 = Instant::now();
    let palm = [hand_with([true; 5])];
    let fist = [hand_with([false; 5])];

    let first = s.process_frame(&palm, t0).unwrap();
    assert_eq!(first.unwrap().0, TransportCommand::Play);

    let second = s
        .process_frame(&palm, t0 + Duration::from_millis(100))
        .unwrap();
    assert!(second.is_none());

    let third = s
        .process_frame(&fist, t0 + Duration::from_millis(300))
        .unwrap();
    assert_eq!(third.unwrap().0, TransportCommand::Pause);

    assert_eq!(s.transport().state(), TransportState::Paused);
}

#[test]
fn alternating_commands_ignore_the_cooldown() {
    let mut s = session_with(Duration::from_secs(2));
    let t0 = Instant::now();
    let palm = [hand_with([true; 5])];
    let fist = [hand_with([false; 5])];

    let mut dispatched = 0;
    for (i, frame) in [&palm, &fist, &palm, &fist].iter().enumerate() {
        let fired = s
            .process_frame(*frame, t0 + Duration::from_millis(50 * i as u64))
            .unwrap();
        if fired.is_some() {
            dispatched += 1;
        }
    }
    assert_eq!(dispatched, 4);
}

#[test]
fn same_command_fires_again_at_the_cooldown_boundary() {
    let cooldown = Duration::from_secs(2);
    let mut s = session_with(cooldown);
    let t0 = Instant::now();
    let peace = [hand_with([false, true, true, false, false])];

    assert!(s.process_frame(&peace, t0).unwrap().is_some());
    assert!(s
        .process_frame(&peace, t0 + cooldown - Duration::from_millis(1))
        .unwrap()
        .is_none());
    assert!(s.process_frame(&peace, t0 + cooldown).unwrap().is_some());
    // Two nexts applied: a → b → c.
    assert_eq!(s.transport().current_track(), Some("c.mp3"));
}

#[test]
fn json_recording_drives_the_transport() {
    // Serialize a synthetic open palm into the wire format and run the
    // whole source → session path over it.
    let palm = hand_with([true; 5]);
    let recording = format!("{}\n{}\n", frame_json(&[palm]), frame_json(&[]));

    let mut source = JsonLinesSource::new(Cursor::new(recording));
    let mut s = session_with(Duration::from_secs(2));
    s.run(&mut source).unwrap();

    assert_eq!(s.transport().state(), TransportState::Playing);
    assert_eq!(s.transport().current_track(), Some("a.mp3"));
}

fn frame_json(hands: &[Hand]) -> String {
    let hands: Vec<String> = hands
        .iter()
        .map(|h| {
            let points: Vec<String> = h
                .landmarks()
                .iter()
                .map(|p| format!(r#"{{"x":{},"y":{},"z":{}}}"#, p.x, p.y, p.z))
                .collect();
            format!("[{}]", points.join(","))
        })
        .collect();
    format!(r#"{{"hands":[{}]}}"#, hands.join(","))
}
