//! Fixed timestep simulation tick
//!
//! Core game loop that advances simulation deterministically and reports
//! what to draw and play through the injected platform.

use glam::Vec2;

use super::autopilot;
use super::collision::check_collision;
use super::state::{GamePhase, GameState};
use crate::audio::Cue;
use crate::consts::TICK;
use crate::platform::{DrawCommand, Platform};

/// Raw input events delivered by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Window closed / global quit
    Quit,
    /// Jump key (Space)
    JumpPressed,
    /// Restart key on the game over screen (Y)
    RestartPressed,
    /// Quit key on the game over screen (N)
    QuitConfirmed,
    /// Anything else; ignored
    Other,
}

/// Input commands for a single tick (deterministic)
///
/// Each flag is set at most once no matter how many matching events arrived,
/// so each kind of event acts at most once per tick.
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Jump (Playing only)
    pub jump: bool,
    /// Restart (GameOver only)
    pub restart: bool,
    /// End the session from any phase
    pub quit: bool,
    /// End the session from the game over screen
    pub quit_confirmed: bool,
    /// Idle/demo mode - autopilot plays the game
    pub autopilot: bool,
}

impl TickInput {
    /// Fold a tick's worth of events into flags
    pub fn from_events<I: IntoIterator<Item = InputEvent>>(events: I) -> Self {
        let mut input = Self::default();
        for event in events {
            input.push(event);
        }
        input
    }

    pub fn push(&mut self, event: InputEvent) {
        match event {
            InputEvent::Quit => self.quit = true,
            InputEvent::JumpPressed => self.jump = true,
            InputEvent::RestartPressed => self.restart = true,
            InputEvent::QuitConfirmed => self.quit_confirmed = true,
            InputEvent::Other => {}
        }
    }

    /// Clear one-shot inputs after a tick has consumed them
    pub fn clear_one_shots(&mut self) {
        self.jump = false;
        self.restart = false;
        self.quit = false;
        self.quit_confirmed = false;
    }
}

/// Whether the host should keep calling `tick`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Continue,
    Quit,
}

/// Advance the game state by one fixed timestep
pub fn tick<P: Platform + ?Sized>(
    state: &mut GameState,
    input: &TickInput,
    platform: &mut P,
) -> TickOutcome {
    match state.phase {
        GamePhase::Playing => tick_playing(state, input, platform),
        GamePhase::GameOver => tick_game_over(state, input, platform),
    }
}

fn tick_playing<P: Platform + ?Sized>(
    state: &mut GameState,
    input: &TickInput,
    platform: &mut P,
) -> TickOutcome {
    if input.quit {
        log::info!("Quit during play (score {})", state.score);
        return TickOutcome::Quit;
    }

    state.time_ticks += 1;

    let jump = input.jump || (input.autopilot && autopilot::wants_jump(state));
    if jump {
        state.flyer.jump(&state.tuning);
        platform.play_sound(Cue::Flap);
    }

    state.flyer.advance(TICK, &state.tuning);

    let flyer_x = state.tuning.flyer_x;
    for pipe in &mut state.pipes {
        pipe.advance(TICK, &state.tuning);
        if pipe.check_passage(flyer_x, &state.tuning) {
            state.score += 1;
            platform.play_sound(Cue::Score);
            log::debug!("Passed pipe {} (score {})", pipe.id, state.score);
        }
    }

    // Drop pipes that have scrolled off the left edge, keeping order
    let tuning = &state.tuning;
    let before = state.pipes.len();
    state.pipes.retain(|p| !p.is_offscreen(tuning));
    if state.pipes.len() != before {
        log::debug!("Removed {} off-screen pipe(s)", before - state.pipes.len());
    }

    let needs_spawn = match state.last_pipe() {
        Some(last) => last.x < state.tuning.spawn_threshold(),
        None => true,
    };
    if needs_spawn {
        state.spawn_pipe(state.tuning.screen_width);
    }

    if let Some(hit) = check_collision(&state.flyer, &state.pipes, &state.tuning) {
        log::info!(
            "Game over: {:?} after {} ticks, score {}",
            hit,
            state.time_ticks,
            state.score
        );
        state.phase = GamePhase::GameOver;
        platform.play_sound(Cue::Hit);
    }

    render_playing(state, platform);
    TickOutcome::Continue
}

fn tick_game_over<P: Platform + ?Sized>(
    state: &mut GameState,
    input: &TickInput,
    platform: &mut P,
) -> TickOutcome {
    if input.quit || input.quit_confirmed {
        log::info!("Quit from game over screen (score {})", state.score);
        return TickOutcome::Quit;
    }

    if input.restart || input.autopilot {
        state.restart();
        render_playing(state, platform);
        return TickOutcome::Continue;
    }

    render_game_over(state, platform);
    TickOutcome::Continue
}

/// Issue the in-game frame: background, flyer, pipes, score
pub fn render_playing<P: Platform + ?Sized>(state: &GameState, platform: &mut P) {
    let tuning = &state.tuning;

    platform.render(DrawCommand::Background);
    platform.render(DrawCommand::Flyer {
        pos: state.flyer.pos(tuning),
        angle: state.flyer.tilt,
    });
    for pipe in &state.pipes {
        platform.render(DrawCommand::PipeBottom {
            pos: pipe.bottom_sprite_pos(tuning),
        });
        platform.render(DrawCommand::PipeTop {
            pos: pipe.top_sprite_pos(tuning),
        });
    }
    let (x, y) = crate::consts::SCORE_TEXT_POS;
    platform.render(DrawCommand::ScoreText {
        score: state.score,
        pos: Vec2::new(x, y),
    });
}

/// Issue the game over frame: background and banner
pub fn render_game_over<P: Platform + ?Sized>(state: &GameState, platform: &mut P) {
    let tuning = &state.tuning;
    platform.render(DrawCommand::Background);
    platform.render(DrawCommand::GameOverText {
        score: state.score,
        pos: Vec2::new(
            (tuning.screen_width / 10.0).floor(),
            (tuning.screen_height / 2.0).floor(),
        ),
    });
}
