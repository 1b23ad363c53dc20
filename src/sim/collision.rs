//! Collision detection between the flyer, the ground and the pipes
//!
//! Everything is axis-aligned: the flyer's hit box ignores its display tilt.

use serde::{Deserialize, Serialize};

use super::flyer::Flyer;
use super::pipe::{Pipe, PipeSegment};
use crate::tuning::Tuning;

/// What the flyer ran into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Collision {
    Ground,
    Pipe { id: u32, segment: PipeSegment },
}

/// First thing the flyer is touching this tick, if any.
///
/// Ground is checked first, then every pipe in spawn order (top segment
/// before bottom); the scan stops at the first hit.
pub fn check_collision(flyer: &Flyer, pipes: &[Pipe], tuning: &Tuning) -> Option<Collision> {
    if flyer.is_grounded(tuning) {
        return Some(Collision::Ground);
    }

    let flyer_box = flyer.bounding_box(tuning);
    pipes.iter().find_map(|pipe| {
        [PipeSegment::Top, PipeSegment::Bottom]
            .into_iter()
            .find(|&segment| flyer_box.intersects(&pipe.segment_box(segment, tuning)))
            .map(|segment| Collision::Pipe {
                id: pipe.id,
                segment,
            })
    })
}

/// Boolean form of [`check_collision`]
#[inline]
pub fn collides(flyer: &Flyer, pipes: &[Pipe], tuning: &Tuning) -> bool {
    check_collision(flyer, pipes, tuning).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use proptest::prelude::*;

    fn flyer_at(y: f32) -> Flyer {
        Flyer {
            y,
            vel: 0.0,
            tilt: 0.0,
        }
    }

    #[test]
    fn test_no_pipes_no_collision() {
        let tuning = Tuning::default();
        assert_eq!(check_collision(&flyer_at(500.0), &[], &tuning), None);
    }

    #[test]
    fn test_ground_collision_ignores_pipes() {
        let tuning = Tuning::default();
        let flyer = flyer_at(tuning.ground_line());
        let far = Pipe::with_gap(1, 900.0, 300.0);
        assert_eq!(check_collision(&flyer, &[far], &tuning), Some(Collision::Ground));

        let below = flyer_at(tuning.ground_line() + 50.0);
        assert!(collides(&below, &[], &tuning));
    }

    #[test]
    fn test_flyer_inside_gap_is_safe() {
        let tuning = Tuning::default();
        // Gap spans 400..600; flyer spans 450..474 and overlaps the pipe horizontally
        let pipe = Pipe::with_gap(1, FLYER_X - 10.0, 400.0);
        assert!(!collides(&flyer_at(450.0), &[pipe], &tuning));
    }

    #[test]
    fn test_top_segment_hit() {
        let tuning = Tuning::default();
        let pipe = Pipe::with_gap(3, FLYER_X, 400.0);
        let hit = check_collision(&flyer_at(390.0), &[pipe], &tuning);
        assert_eq!(
            hit,
            Some(Collision::Pipe {
                id: 3,
                segment: PipeSegment::Top
            })
        );
    }

    #[test]
    fn test_bottom_segment_hit() {
        let tuning = Tuning::default();
        let pipe = Pipe::with_gap(4, FLYER_X, 400.0);
        // Flyer bottom at 610 reaches into the bottom segment starting at 600
        let hit = check_collision(&flyer_at(586.0), &[pipe], &tuning);
        assert_eq!(
            hit,
            Some(Collision::Pipe {
                id: 4,
                segment: PipeSegment::Bottom
            })
        );
    }

    #[test]
    fn test_sub_pixel_overlap_counts() {
        let tuning = Tuning::default();
        let pipe = Pipe::with_gap(2, FLYER_X, 400.0);
        // Bottom at 600.5 is half a pixel into the segment; snapping y to 576 would miss it
        assert!(collides(&flyer_at(576.5), &[pipe.clone()], &tuning));
        assert!(!collides(&flyer_at(576.0), &[pipe], &tuning));
    }

    #[test]
    fn test_touching_gap_edge_is_safe() {
        let tuning = Tuning::default();
        let pipe = Pipe::with_gap(1, FLYER_X, 400.0);
        // Flyer top exactly at the top segment's bottom edge
        assert!(!collides(&flyer_at(400.0), &[pipe.clone()], &tuning));
        // Flyer bottom exactly at the bottom segment's top edge
        assert!(!collides(&flyer_at(600.0 - FLYER_HEIGHT), &[pipe], &tuning));
    }

    #[test]
    fn test_every_pipe_is_checked() {
        let tuning = Tuning::default();
        let flyer = flyer_at(100.0);
        let harmless = Pipe::with_gap(1, 600.0, 50.0);
        let hitting = Pipe::with_gap(2, FLYER_X - 50.0, 400.0);
        let hit = check_collision(&flyer, &[harmless, hitting], &tuning);
        assert!(matches!(hit, Some(Collision::Pipe { id: 2, .. })));
    }

    #[test]
    fn test_first_hit_wins() {
        let tuning = Tuning::default();
        let flyer = flyer_at(100.0);
        let a = Pipe::with_gap(1, FLYER_X, 400.0);
        let b = Pipe::with_gap(2, FLYER_X, 400.0);
        let hit = check_collision(&flyer, &[a, b], &tuning);
        assert!(matches!(hit, Some(Collision::Pipe { id: 1, .. })));
    }

    proptest! {
        #[test]
        fn prop_adding_overlapping_pipe_collides(
            flyer_y in 250.0f32..800.0,
            far_xs in proptest::collection::vec(300.0f32..1000.0, 0..5),
            gap in 100.0f32..800.0,
        ) {
            let tuning = Tuning::default();
            let flyer = flyer_at(flyer_y);
            // Pipes starting right of the flyer never overlap it horizontally
            let mut pipes: Vec<Pipe> = far_xs
                .iter()
                .enumerate()
                .map(|(i, &x)| Pipe::with_gap(i as u32, x, gap))
                .collect();
            prop_assert!(!collides(&flyer, &pipes, &tuning));

            // A pipe over the flyer whose gap lies entirely above it
            let top = flyer_y - tuning.pipe_gap - 10.0;
            pipes.push(Pipe::with_gap(99, FLYER_X - 20.0, top));
            prop_assert!(collides(&flyer, &pipes, &tuning));
        }
    }
}
