//! Pipe Flyer entry point
//!
//! Runs the simulation headless on autopilot: frames are paced by a
//! simulated 60 Hz display, draw commands are counted, cues go through the
//! audio gate, and a JSON summary is printed at the end.
//!
//! Usage: `pipe-flyer [SEED] [FRAMES]`

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;

use pipe_flyer::sim::{GameState, TickInput, TickOutcome, tick};
use pipe_flyer::{AudioManager, Cue, DrawCommand, FrameClock, Platform, Settings};

/// Simulated display refresh rate
const DISPLAY_HZ: f32 = 60.0;
/// Default run length: one minute of frames
const DEFAULT_FRAMES: u64 = 60 * 60;

/// Platform with no window: counts frames and routes cues to the audio gate
struct HeadlessPlatform {
    audio: AudioManager,
    draw_calls: u64,
    frames_drawn: u64,
    best_score: u32,
    /// Bytes of overlay text a real renderer would have drawn
    text_bytes: u64,
    /// Most recent game-over banner
    last_banner: Option<String>,
}

impl HeadlessPlatform {
    fn new(audio: AudioManager) -> Self {
        Self {
            audio,
            draw_calls: 0,
            frames_drawn: 0,
            best_score: 0,
            text_bytes: 0,
            last_banner: None,
        }
    }
}

impl Platform for HeadlessPlatform {
    fn render(&mut self, cmd: DrawCommand) {
        self.draw_calls += 1;
        if let Some(text) = cmd.text() {
            self.text_bytes += text.len() as u64;
            if matches!(cmd, DrawCommand::GameOverText { .. })
                && self.last_banner.as_deref() != Some(text.as_str())
            {
                log::debug!("{text}");
                self.last_banner = Some(text);
            }
        }
        match cmd {
            DrawCommand::Background => self.frames_drawn += 1,
            DrawCommand::ScoreText { score, .. } | DrawCommand::GameOverText { score, .. } => {
                self.best_score = self.best_score.max(score);
            }
            _ => {}
        }
    }

    fn play_sound(&mut self, cue: Cue) {
        self.audio.play(cue);
    }
}

fn parse_arg<T: std::str::FromStr>(args: &[String], index: usize, name: &str) -> Option<T> {
    let raw = args.get(index)?;
    match raw.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            eprintln!("invalid {name}: {raw:?}");
            eprintln!("usage: pipe-flyer [SEED] [FRAMES]");
            std::process::exit(2);
        }
    }
}

fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

fn main() -> Result<()> {
    env_logger::init();
    log::info!("Pipe Flyer (headless) starting...");

    let args: Vec<String> = std::env::args().collect();
    let settings = Settings::load();
    let seed = parse_arg::<u64>(&args, 1, "seed")
        .or(settings.seed)
        .unwrap_or_else(time_seed);
    let frames = parse_arg::<u64>(&args, 2, "frame count").unwrap_or(DEFAULT_FRAMES);

    let mut state = GameState::with_tuning(seed, settings.tuning.clone())?;
    let mut platform = HeadlessPlatform::new(settings.audio_manager());
    let mut clock = FrameClock::with_rate(settings.tick_rate);
    let mut input = TickInput {
        autopilot: true,
        ..Default::default()
    };

    let mut ticks_run = 0u64;
    'frames: for _ in 0..frames {
        for _ in 0..clock.advance(1.0 / DISPLAY_HZ) {
            let outcome = tick(&mut state, &input, &mut platform);
            input.clear_one_shots();
            ticks_run += 1;
            if outcome == TickOutcome::Quit {
                break 'frames;
            }
        }
    }

    log::info!(
        "Finished after {} ticks: game {} at score {}",
        ticks_run,
        state.games_played,
        state.score
    );

    let summary = serde_json::json!({
        "seed": seed,
        "frames": frames,
        "ticks": ticks_run,
        "games_played": state.games_played,
        "phase": state.phase,
        "score": state.score,
        "best_score": platform.best_score,
        "frames_drawn": platform.frames_drawn,
        "draw_calls": platform.draw_calls,
        "text_bytes": platform.text_bytes,
        "last_banner": platform.last_banner,
        "cues": {
            "flap": platform.audio.play_count(Cue::Flap),
            "score": platform.audio.play_count(Cue::Score),
            "hit": platform.audio.play_count(Cue::Hit),
        },
    });
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
