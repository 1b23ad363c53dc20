//! Fixed-step accumulator
//!
//! Converts variable real frame times into a whole number of simulation ticks.

use crate::consts::{MAX_SUBSTEPS, SIM_DT};

/// Longest frame we are willing to catch up on (seconds)
const MAX_FRAME_TIME: f32 = 0.1;

#[derive(Debug, Clone)]
pub struct FrameClock {
    tick_dt: f32,
    max_substeps: u32,
    accumulator: f32,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(SIM_DT, MAX_SUBSTEPS)
    }
}

impl FrameClock {
    pub fn new(tick_dt: f32, max_substeps: u32) -> Self {
        Self {
            tick_dt,
            max_substeps,
            accumulator: 0.0,
        }
    }

    /// Clock ticking at `rate` ticks per second
    pub fn with_rate(rate: u32) -> Self {
        Self::new(1.0 / rate.max(1) as f32, MAX_SUBSTEPS)
    }

    /// Feed one frame's elapsed seconds, get the number of ticks to run
    pub fn advance(&mut self, frame_secs: f32) -> u32 {
        let frame_secs = frame_secs.clamp(0.0, MAX_FRAME_TIME);
        self.accumulator += frame_secs;

        let mut ticks = 0;
        while self.accumulator >= self.tick_dt && ticks < self.max_substeps {
            self.accumulator -= self.tick_dt;
            ticks += 1;
        }

        // Behind by more than we can simulate: drop the backlog
        if ticks == self.max_substeps && self.accumulator >= self.tick_dt {
            log::debug!("frame clock dropping {:.3}s of backlog", self.accumulator);
            self.accumulator = 0.0;
        }

        ticks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sixty_hz_frames_give_thirty_ticks() {
        let mut clock = FrameClock::new(1.0 / 30.0, 8);
        let total: u32 = (0..60).map(|_| clock.advance(1.0 / 60.0)).sum();
        assert!((29..=30).contains(&total), "got {total} ticks");
    }

    #[test]
    fn test_short_frame_accumulates() {
        let mut clock = FrameClock::new(0.1, 8);
        assert_eq!(clock.advance(0.05), 0);
        assert_eq!(clock.advance(0.06), 1);
    }

    #[test]
    fn test_long_frame_is_capped() {
        let mut clock = FrameClock::new(0.01, 4);
        assert_eq!(clock.advance(5.0), 4);
        // Backlog was dropped, so an empty frame runs nothing
        assert_eq!(clock.advance(0.0), 0);
    }

    #[test]
    fn test_negative_frame_ignored() {
        let mut clock = FrameClock::default();
        assert_eq!(clock.advance(-1.0), 0);
        assert_eq!(clock.advance(SIM_DT * 0.5), 0);
    }
}
