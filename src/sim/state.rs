//! Game state and core simulation types
//!
//! Everything a tick reads or writes lives here, including the RNG, so a
//! state can be cloned or serialized and replayed deterministically.

use anyhow::Result;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::flyer::Flyer;
use super::pipe::Pipe;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Flyer crashed, waiting for restart or quit
    GameOver,
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Gap RNG, carried across restarts so every game gets fresh pipes
    rng: Pcg32,
    /// Balance values the run was started with
    pub tuning: Tuning,
    /// Current phase
    pub phase: GamePhase,
    /// Pipes cleared this game
    pub score: u32,
    /// Ticks since the current game started
    pub time_ticks: u64,
    /// Games started with this state (1 after `new`)
    pub games_played: u32,
    /// Player flyer
    pub flyer: Flyer,
    /// Live pipes in spawn order, which is also left-to-right order
    pub pipes: Vec<Pipe>,
    /// Next pipe ID
    next_id: u32,
}

impl GameState {
    /// Create a new game state with the given seed and default tuning
    pub fn new(seed: u64) -> Self {
        Self::build(seed, Tuning::default())
    }

    /// Create a new game state with custom balance values
    ///
    /// Rejects tuning that would panic or stall the simulation, such as an
    /// empty gap range or a negative tilt limit.
    pub fn with_tuning(seed: u64, tuning: Tuning) -> Result<Self> {
        tuning.validate()?;
        Ok(Self::build(seed, tuning))
    }

    fn build(seed: u64, tuning: Tuning) -> Self {
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            flyer: Flyer::new(&tuning),
            tuning,
            phase: GamePhase::Playing,
            score: 0,
            time_ticks: 0,
            games_played: 0,
            pipes: Vec::new(),
            next_id: 1,
        };
        state.start_game();
        state
    }

    /// Throw away the current game and start a fresh one in place
    pub fn restart(&mut self) {
        log::info!(
            "Restarting after game {} (score {})",
            self.games_played,
            self.score
        );
        self.start_game();
    }

    fn start_game(&mut self) {
        self.flyer = Flyer::new(&self.tuning);
        self.pipes.clear();
        self.score = 0;
        self.time_ticks = 0;
        self.phase = GamePhase::Playing;
        self.games_played += 1;

        for i in 0..self.tuning.initial_pipes {
            let x = self.tuning.screen_width + i as f32 * self.tuning.pipe_spacing;
            self.spawn_pipe(x);
        }

        log::info!("Game {} started (seed {})", self.games_played, self.seed);
    }

    /// Allocate a new pipe ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Append a pipe with a random gap at `x`
    pub fn spawn_pipe(&mut self, x: f32) {
        let id = self.next_entity_id();
        let pipe = Pipe::new(id, x, &mut self.rng, &self.tuning);
        log::debug!("Spawned pipe {} at x={} gap_top={}", id, pipe.x, pipe.gap_top);
        self.pipes.push(pipe);
    }

    /// Rightmost (most recently spawned) pipe
    pub fn last_pipe(&self) -> Option<&Pipe> {
        self.pipes.last()
    }

    /// First pipe the flyer has not yet cleared
    pub fn next_pipe(&self) -> Option<&Pipe> {
        let flyer_x = self.tuning.flyer_x;
        self.pipes
            .iter()
            .find(|p| p.right_edge(&self.tuning) >= flyer_x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;

    #[test]
    fn test_new_state_seeds_three_pipes() {
        let state = GameState::new(12345);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score, 0);
        assert_eq!(state.games_played, 1);
        assert_eq!(state.flyer.y, 500.0);

        let xs: Vec<f32> = state.pipes.iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![1000.0, 1400.0, 1800.0]);
        assert!(state.pipes.iter().all(|p| !p.passed));
    }

    #[test]
    fn test_pipe_ids_increase() {
        let mut state = GameState::new(1);
        state.spawn_pipe(SCREEN_WIDTH);
        let ids: Vec<u32> = state.pipes.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_same_seed_same_gaps() {
        let a = GameState::new(42);
        let b = GameState::new(42);
        assert_eq!(a.pipes, b.pipes);
    }

    #[test]
    fn test_restart_resets_game_but_not_rng() {
        let mut state = GameState::new(42);
        let first_gaps: Vec<f32> = state.pipes.iter().map(|p| p.gap_top).collect();
        state.score = 7;
        state.phase = GamePhase::GameOver;
        state.flyer.y = 960.0;
        state.time_ticks = 300;

        state.restart();
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score, 0);
        assert_eq!(state.time_ticks, 0);
        assert_eq!(state.games_played, 2);
        assert_eq!(state.flyer, Flyer::new(&state.tuning));
        assert_eq!(state.pipes.len(), INITIAL_PIPES);
        // IDs keep counting and the RNG keeps its stream
        assert_eq!(state.pipes[0].id, 4);
        let second_gaps: Vec<f32> = state.pipes.iter().map(|p| p.gap_top).collect();
        assert_ne!(first_gaps, second_gaps);
    }

    #[test]
    fn test_with_tuning_accepts_valid_values() {
        let tuning = Tuning {
            pipe_speed: 4.0,
            ..Default::default()
        };
        let state = GameState::with_tuning(8, tuning).unwrap();
        assert_eq!(state.tuning.pipe_speed, 4.0);
        assert_eq!(state.pipes.len(), INITIAL_PIPES);
    }

    #[test]
    fn test_with_tuning_rejects_empty_gap_range() {
        let tuning = Tuning {
            gap_top_min: 900.0,
            ..Default::default()
        };
        let err = GameState::with_tuning(8, tuning).unwrap_err();
        assert!(format!("{err:#}").contains("gap range"));
    }

    #[test]
    fn test_with_tuning_rejects_negative_tilt() {
        let tuning = Tuning {
            max_tilt: -1.0,
            ..Default::default()
        };
        assert!(GameState::with_tuning(8, tuning).is_err());
    }

    #[test]
    fn test_next_pipe_skips_cleared() {
        let mut state = GameState::new(3);
        state.pipes[0].x = FLYER_X - PIPE_WIDTH - 1.0;
        assert_eq!(state.next_pipe().map(|p| p.id), Some(2));
    }
}
