//! Branch generation.
//!
//! A tree is produced in two steps:
//! 1. [`draw_tree`] draws the single vertical trunk, unconditionally.
//! 2. [`grow`] expands a work stack of pending shoots from the trunk tip.
//!    Each shoot draws its segment, then either stops (possibly placing a
//!    flower) or schedules two children.
//!
//! The stack replaces the obvious recursive formulation: pushing the right
//! child below the left one makes the left subtree — segment draws and all
//! descendants — complete before the first right-subtree draw, and keeps
//! call depth flat no matter how slowly the branch length decays.

use crate::command::{CommandRecorder, DrawCommand};
use crate::config::TreeConfig;
use crate::sampler::gaussian_sample;
use crate::surface::{CanvasBounds, DrawSurface};
use crate::types::Point;
use glam::Vec2;
use rand::Rng;
use std::f32::consts::{FRAC_PI_2, PI};

/// The first growth step's length as a fraction of the trunk height.
const FIRST_BRANCH_LENGTH_RATIO: f32 = 0.37;

/// A branch shorter than `main_branch_height / SHORT_DIVISOR` stops growing.
/// The threshold is fixed by the trunk height for the whole tree, not by the
/// current branch, which bounds the number of generations independently of
/// scale.
const SHORT_DIVISOR: f32 = 8.0;

/// Flower radius before jitter is applied.
const FLOWER_RADIUS: f32 = 20.0;

/// One growth step: where a branch ended, which way it points, and the
/// length/thickness it grew with.
///
/// A state is consumed exactly once and produces zero or two children; the
/// tree itself is never materialized, it exists only as the draw calls.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BranchState {
    pub position: Point,
    /// Direction in radians; the trunk grows at `π/2`.
    pub angle: f32,
    pub length: f32,
    pub thickness: f32,
}

/// A branch whose segment has not been drawn yet: it starts at its parent's
/// position and becomes a [`BranchState`] at its endpoint once drawn.
#[derive(Clone, Copy, Debug)]
struct Shoot {
    start: Point,
    angle: f32,
    length: f32,
    thickness: f32,
}

fn segment_end(start: Point, angle: f32, length: f32) -> Point {
    start + Vec2::from_angle(angle) * length
}

/// Tests the termination conditions for `state` and, if it keeps growing,
/// schedules its two children (right first, so the left pops first).
///
/// A terminal `short` branch gets a flower with probability 1/2 when flowers
/// are enabled, sized by a fresh Gaussian sample.
fn sprout<S: DrawSurface, R: Rng + ?Sized>(
    state: &BranchState,
    cfg: &TreeConfig,
    bounds: CanvasBounds,
    surface: &mut S,
    rng: &mut R,
    pending: &mut Vec<Shoot>,
) {
    // Direction has rotated past horizontal into downward growth.
    let back = state.angle < 0.0 || state.angle > PI;
    let beyond = bounds.is_beyond(state.position);
    let short = state.length < cfg.main_branch_height / SHORT_DIVISOR;

    if back || beyond || short {
        if short && cfg.has_flower && rng.random::<f32>().round() as u32 == 1 {
            surface.draw_filled_circle(
                state.position,
                FLOWER_RADIUS * gaussian_sample(rng),
                cfg.flower_color,
            );
        }
        return;
    }

    let left_angle = state.angle + cfg.angle_delta * jitter(cfg, rng);
    let right_angle = state.angle - cfg.angle_delta * jitter(cfg, rng);
    let next_length = state.length * (1.0 - cfg.branch_length_decrease_ratio);
    let next_thickness = state.thickness * (1.0 - cfg.branch_thickness_decrease_ratio);

    pending.push(Shoot {
        start: state.position,
        angle: right_angle,
        length: next_length,
        thickness: next_thickness,
    });
    pending.push(Shoot {
        start: state.position,
        angle: left_angle,
        length: next_length,
        thickness: next_thickness,
    });
}

fn jitter<R: Rng + ?Sized>(cfg: &TreeConfig, rng: &mut R) -> f32 {
    if cfg.random { gaussian_sample(rng) } else { 1.0 }
}

/// Expands a growth step into the full subtree of draw calls.
///
/// The initial `state` has no segment of its own (its segment is the trunk,
/// drawn by the caller); it is only tested and branched. Every state after
/// that draws its segment first, then runs the termination tests at the
/// segment's endpoint.
pub fn grow<S: DrawSurface, R: Rng + ?Sized>(
    state: BranchState,
    cfg: &TreeConfig,
    bounds: CanvasBounds,
    surface: &mut S,
    rng: &mut R,
) {
    let mut pending: Vec<Shoot> = Vec::with_capacity(64);
    sprout(&state, cfg, bounds, surface, rng, &mut pending);

    while let Some(shoot) = pending.pop() {
        let end = surface.draw_segment(
            shoot.start,
            segment_end(shoot.start, shoot.angle, shoot.length),
            shoot.thickness,
            cfg.branch_color,
        );
        let state = BranchState {
            position: end,
            angle: shoot.angle,
            length: shoot.length,
            thickness: shoot.thickness,
        };
        sprout(&state, cfg, bounds, surface, rng, &mut pending);
    }
}

/// Draws one whole tree: the vertical trunk, then the branch generation
/// starting from its tip.
///
/// No termination test applies to the trunk; a zero or negative height just
/// yields a degenerate segment. The first growth step keeps the trunk's
/// thickness and starts at `main_branch_height × 0.37`.
pub fn draw_tree<S: DrawSurface, R: Rng + ?Sized>(
    cfg: &TreeConfig,
    bounds: CanvasBounds,
    surface: &mut S,
    rng: &mut R,
) {
    let tip = surface.draw_segment(
        cfg.root_position,
        segment_end(cfg.root_position, FRAC_PI_2, cfg.main_branch_height),
        cfg.main_branch_thickness,
        cfg.branch_color,
    );

    grow(
        BranchState {
            position: tip,
            angle: FRAC_PI_2,
            length: cfg.main_branch_height * FIRST_BRANCH_LENGTH_RATIO,
            thickness: cfg.main_branch_thickness,
        },
        cfg,
        bounds,
        surface,
        rng,
    );
}

/// Generates a tree as a pure, replayable command list.
///
/// This is the form hosts consume: play the list immediately, batched, or
/// paced over time, as long as the recorded order is kept.
pub fn generate<R: Rng + ?Sized>(
    cfg: &TreeConfig,
    bounds: CanvasBounds,
    rng: &mut R,
) -> Vec<DrawCommand> {
    let mut recorder = CommandRecorder::new();
    draw_tree(cfg, bounds, &mut recorder, rng);
    recorder.into_commands()
}
