//! gesture_deck — interactive entry point.

use std::io::{self, Write};
use std::time::Duration;

use anyhow::{bail, Result};
use gesture_deck::{
    Frame, FrameSource, JsonLinesSource, ScriptedSource, Session, SessionConfig, TrackerSource,
};
use hand_model::{classify, finger_states, synth};
use media_transport::{open_media_out, Playlist, Transport};

fn main() {
    println!();
    println!("╔══════════════════════════════════════════════════════════════╗");
    println!("║        Gesture Deck — Hand-Gesture Media Controller          ║");
    println!("╚══════════════════════════════════════════════════════════════╝");
    println!();

    #[cfg(feature = "keys")]
    println!("  Sink: key injection available  (pass --keys to drive VLC)");
    #[cfg(not(feature = "keys"))]
    println!("  Sink: local transport  (build with --features keys for VLC control)");
    println!();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let opts = match Options::parse(std::env::args().skip(1)) {
        Ok(opts) => opts,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("{USAGE}");
            std::process::exit(2);
        }
    };

    if let Err(e) = run(opts) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

const USAGE: &str = "\
Usage: gesture_deck [MODE] [OPTIONS]

Modes (default: ask interactively):
  --demo               replay a built-in gesture script
  --file <PATH>        classify a recorded JSON-lines frame file
  --tracker <CMD>      spawn a landmark tracker and read frames from its stdout
  --inspect <PATH>     report finger states and action for the first frame only

Options:
  --keys               drive an external player via keyboard shortcuts
  --tracks <DIR>       load the playlist from a directory of audio files
  --cooldown <SECS>    same-command debounce window (default 2)
  --stride <N>         process every Nth frame (default: 5 for --file, else 1)";

// ════════════════════════════════════════════════════════════════════════════
// Options
// ════════════════════════════════════════════════════════════════════════════

enum Mode {
    Demo,
    File(String),
    Tracker(String),
    Inspect(String),
    Interactive,
}

struct Options {
    mode: Mode,
    keys: bool,
    tracks: Option<String>,
    cooldown: Option<f64>,
    stride: Option<usize>,
}

impl Options {
    fn parse<I: Iterator<Item = String>>(mut args: I) -> Result<Options> {
        let mut opts = Options {
            mode: Mode::Interactive,
            keys: false,
            tracks: None,
            cooldown: None,
            stride: None,
        };

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--demo" => opts.mode = Mode::Demo,
                "--file" => opts.mode = Mode::File(value(&mut args, "--file")?),
                "--tracker" => opts.mode = Mode::Tracker(value(&mut args, "--tracker")?),
                "--inspect" => opts.mode = Mode::Inspect(value(&mut args, "--inspect")?),
                "--keys" => opts.keys = true,
                "--tracks" => opts.tracks = Some(value(&mut args, "--tracks")?),
                "--cooldown" => {
                    let secs: f64 = value(&mut args, "--cooldown")?.parse()?;
                    if !(secs > 0.0) {
                        bail!("--cooldown must be positive");
                    }
                    opts.cooldown = Some(secs);
                }
                "--stride" => {
                    let n: usize = value(&mut args, "--stride")?.parse()?;
                    opts.stride = Some(n.max(1));
                }
                other => bail!("unknown argument `{other}`"),
            }
        }
        Ok(opts)
    }
}

fn value<I: Iterator<Item = String>>(args: &mut I, flag: &str) -> Result<String> {
    args.next()
        .ok_or_else(|| anyhow::anyhow!("{flag} needs a value"))
}

// ════════════════════════════════════════════════════════════════════════════
// run — dispatch on mode
// ════════════════════════════════════════════════════════════════════════════

fn run(opts: Options) -> Result<()> {
    let mode = match opts.mode {
        Mode::Interactive => pick_mode_interactively(),
        other => other,
    };

    if let Mode::Inspect(path) = &mode {
        return inspect(path);
    }

    let playlist = match &opts.tracks {
        Some(dir) => {
            let pl = Playlist::from_dir(dir)?;
            if pl.is_empty() {
                bail!("no audio files found in {dir}");
            }
            println!("  Playlist: {} tracks from {dir}", pl.len());
            pl
        }
        None => {
            log::info!("no --tracks directory given — using placeholder playlist");
            Playlist::new(vec![
                "track_01.mp3".into(),
                "track_02.mp3".into(),
                "track_03.mp3".into(),
            ])
        }
    };

    let transport = Transport::new(playlist, open_media_out(opts.keys));

    let cfg = SessionConfig {
        cooldown: Duration::from_secs_f64(opts.cooldown.unwrap_or(2.0)),
        frame_stride: opts.stride.unwrap_or(match mode {
            Mode::File(_) => 5, // recorded video is decimated by default
            _ => 1,
        }),
    };
    let mut session = Session::new(cfg, transport);

    let mut source: Box<dyn FrameSource> = match &mode {
        Mode::Demo => {
            println!("  Mode: built-in demo script");
            Box::new(ScriptedSource::paced(
                demo_frames(),
                Duration::from_millis(300),
            ))
        }
        Mode::File(path) => {
            println!("  Mode: recorded frames from {path}");
            Box::new(JsonLinesSource::open(path)?)
        }
        Mode::Tracker(cmd) => {
            println!("  Mode: live tracker `{cmd}`");
            let mut parts = cmd.split_whitespace();
            let program = parts.next().ok_or_else(|| anyhow::anyhow!("empty tracker command"))?;
            let args: Vec<String> = parts.map(str::to_owned).collect();
            Box::new(TrackerSource::spawn(program, &args)?)
        }
        Mode::Inspect(_) | Mode::Interactive => unreachable!(),
    };
    println!();

    session.run(source.as_mut())?;

    println!();
    println!("  Session ended — {}", session.transport().status());
    Ok(())
}

fn pick_mode_interactively() -> Mode {
    println!("  Choose a frame source:");
    println!("    1. Built-in demo script");
    println!("    2. Recorded JSON-lines file");
    println!("    3. External tracker command");
    match read_line("  Choice (1–3, default 1): ").trim() {
        "2" => Mode::File(read_line("  Recording path: ").trim().to_string()),
        "3" => Mode::Tracker(read_line("  Tracker command: ").trim().to_string()),
        _ => Mode::Demo,
    }
}

fn read_line(prompt: &str) -> String {
    print!("{}", prompt);
    io::stdout().flush().ok();
    let mut buf = String::new();
    io::stdin().read_line(&mut buf).ok();
    buf
}

// ════════════════════════════════════════════════════════════════════════════
// inspect — one-frame report (single-image mode)
// ════════════════════════════════════════════════════════════════════════════

fn inspect(path: &str) -> Result<()> {
    let mut source = JsonLinesSource::open(path)?;
    let Some(hands) = source.next_frame()? else {
        bail!("{path} contains no frames");
    };

    println!("  Frame: {} hand(s) detected", hands.len());
    let Some(hand) = hands.first() else {
        println!("  No hand landmarks detected — no gesture");
        return Ok(());
    };

    let state = finger_states(hand);
    println!("  Handedness (image-space): {:?}", hand.handedness());
    for (name, up) in [
        ("thumb", state.thumb),
        ("index", state.index),
        ("middle", state.middle),
        ("ring", state.ring),
        ("pinky", state.pinky),
    ] {
        println!("    {:<6} {}", name, if up { "UP" } else { "DOWN" });
    }

    match classify(&hands) {
        Some(command) => println!("  Detected action: {}", command.as_str().to_uppercase()),
        None => println!("  No specific gesture action detected"),
    }
    Ok(())
}

// ════════════════════════════════════════════════════════════════════════════
// demo_frames — a scripted walk through every gesture
// ════════════════════════════════════════════════════════════════════════════

fn demo_frames() -> Vec<Frame> {
    let open_palm = vec![synth::hand_with([true; 5])];
    let fist = vec![synth::hand_with([false; 5])];
    let palm_down = vec![synth::palm_down_hand(3)];
    let peace = vec![synth::hand_with([false, true, true, false, false])];
    let pointer = vec![synth::hand_with([false, true, false, false, false])];
    let empty: Frame = Vec::new();

    // Repeated frames exercise the debouncer; distinct gestures fire
    // immediately.
    vec![
        open_palm.clone(),
        open_palm.clone(),
        open_palm,
        fist.clone(),
        fist,
        empty.clone(),
        peace.clone(),
        peace,
        pointer.clone(),
        pointer,
        palm_down.clone(),
        palm_down,
        empty,
    ]
}
