//! Pipe obstacles: a top and bottom barrier around a fixed-height gap

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::tuning::Tuning;

/// Which half of a pipe pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PipeSegment {
    Top,
    Bottom,
}

/// A pipe pair scrolling right to left
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pipe {
    pub id: u32,
    /// Left edge
    pub x: f32,
    /// Bottom edge of the top segment (the gap spans `gap_top..gap_top + pipe_gap`)
    pub gap_top: f32,
    /// Set once the flyer has cleared this pipe
    pub passed: bool,
}

impl Pipe {
    /// Spawn at `x` with a gap drawn uniformly from the tuning's integer range
    pub fn new<R: Rng>(id: u32, x: f32, rng: &mut R, tuning: &Tuning) -> Self {
        let (lo, hi) = tuning.gap_top_range();
        let gap_top = rng.random_range(lo..=hi) as f32;
        Self::with_gap(id, x, gap_top)
    }

    pub fn with_gap(id: u32, x: f32, gap_top: f32) -> Self {
        Self {
            id,
            x,
            gap_top,
            passed: false,
        }
    }

    /// Scroll left by `dt` ticks worth of pipe speed
    pub fn advance(&mut self, dt: f32, tuning: &Tuning) {
        self.x -= tuning.pipe_speed * dt;
    }

    #[inline]
    pub fn right_edge(&self, tuning: &Tuning) -> f32 {
        self.x + tuning.pipe_width
    }

    /// Screen top down to the gap
    pub fn top_box(&self, tuning: &Tuning) -> Rect {
        Rect::new(self.x, 0.0, tuning.pipe_width, self.gap_top)
    }

    /// Gap bottom down past the screen bottom
    pub fn bottom_box(&self, tuning: &Tuning) -> Rect {
        Rect::new(
            self.x,
            self.gap_top + tuning.pipe_gap,
            tuning.pipe_width,
            tuning.screen_height,
        )
    }

    pub fn segment_box(&self, segment: PipeSegment, tuning: &Tuning) -> Rect {
        match segment {
            PipeSegment::Top => self.top_box(tuning),
            PipeSegment::Bottom => self.bottom_box(tuning),
        }
    }

    /// Mark passed the first time the right edge is behind `flyer_x`.
    /// Returns true only on that transition.
    pub fn check_passage(&mut self, flyer_x: f32, tuning: &Tuning) -> bool {
        if !self.passed && self.right_edge(tuning) < flyer_x {
            self.passed = true;
            return true;
        }
        false
    }

    /// Fully scrolled off the left edge
    pub fn is_offscreen(&self, tuning: &Tuning) -> bool {
        self.x <= -tuning.pipe_width
    }

    /// Draw position of the upright bottom sprite
    pub fn bottom_sprite_pos(&self, tuning: &Tuning) -> Vec2 {
        Vec2::new(self.x, self.gap_top + tuning.pipe_gap)
    }

    /// Draw position of the mirrored top sprite (its bottom edge meets the gap)
    pub fn top_sprite_pos(&self, tuning: &Tuning) -> Vec2 {
        Vec2::new(self.x, self.gap_top - tuning.pipe_sprite_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_gap_within_range() {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(7);
        for id in 0..500 {
            let pipe = Pipe::new(id, SCREEN_WIDTH, &mut rng, &tuning);
            assert!(pipe.gap_top >= 100.0 && pipe.gap_top <= 800.0);
            assert_eq!(pipe.gap_top.fract(), 0.0);
            assert!(!pipe.passed);
        }
    }

    #[test]
    fn test_advance_scrolls_left() {
        let tuning = Tuning::default();
        let mut pipe = Pipe::with_gap(1, 500.0, 300.0);
        pipe.advance(TICK, &tuning);
        assert_eq!(pipe.x, 500.0 - PIPE_SPEED);
    }

    #[test]
    fn test_boxes_frame_the_gap() {
        let tuning = Tuning::default();
        let pipe = Pipe::with_gap(1, 400.0, 300.0);
        assert_eq!(pipe.top_box(&tuning), Rect::new(400.0, 0.0, PIPE_WIDTH, 300.0));
        assert_eq!(
            pipe.bottom_box(&tuning),
            Rect::new(400.0, 500.0, PIPE_WIDTH, SCREEN_HEIGHT)
        );
        assert_eq!(pipe.bottom_box(&tuning).top() - pipe.top_box(&tuning).bottom(), PIPE_GAP);
    }

    #[test]
    fn test_passage_fires_once() {
        let tuning = Tuning::default();
        // Right edge at 80: not yet strictly behind the flyer
        let mut pipe = Pipe::with_gap(1, FLYER_X - PIPE_WIDTH, 300.0);
        assert!(!pipe.check_passage(FLYER_X, &tuning));
        pipe.advance(TICK, &tuning);
        assert!(pipe.check_passage(FLYER_X, &tuning));
        assert!(pipe.passed);
        pipe.advance(TICK, &tuning);
        assert!(!pipe.check_passage(FLYER_X, &tuning));
        assert!(pipe.passed);
    }

    #[test]
    fn test_offscreen_boundary() {
        let tuning = Tuning::default();
        let mut pipe = Pipe::with_gap(1, -PIPE_WIDTH + 1.0, 300.0);
        assert!(!pipe.is_offscreen(&tuning));
        pipe.x = -PIPE_WIDTH;
        assert!(pipe.is_offscreen(&tuning));
    }

    #[test]
    fn test_sprite_positions() {
        let tuning = Tuning::default();
        let pipe = Pipe::with_gap(1, 400.0, 300.0);
        assert_eq!(pipe.bottom_sprite_pos(&tuning), Vec2::new(400.0, 500.0));
        assert_eq!(
            pipe.top_sprite_pos(&tuning),
            Vec2::new(400.0, 300.0 - PIPE_SPRITE_HEIGHT)
        );
    }
}
