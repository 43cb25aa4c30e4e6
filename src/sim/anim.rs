//! Frame-timer sprite animation shared by the hero and the slimes
//!
//! Each entity owns an `AnimationState` value and an `AnimationClip`
//! describing its frames; `advance_animation` is the only way the state moves.

use serde::{Deserialize, Serialize};

/// Which frame set is being sampled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AnimPhase {
    #[default]
    Idle,
    Moving,
}

impl AnimPhase {
    pub fn from_moving(moving: bool) -> Self {
        if moving { AnimPhase::Moving } else { AnimPhase::Idle }
    }
}

/// Per-entity animation progress
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AnimationState {
    pub phase: AnimPhase,
    /// Index into the active phase's frame set
    pub frame_index: usize,
    /// Time accumulated toward the next frame (seconds)
    pub frame_time: f32,
}

/// Named frames for both phases plus the per-frame delay
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimationClip {
    pub idle: Vec<String>,
    pub moving: Vec<String>,
    /// Seconds per frame
    pub frame_delay: f32,
}

impl AnimationClip {
    /// Build a clip from `<prefix>_idle_N` / `<prefix>_move_N` frame names
    pub fn numbered(
        prefix: &str,
        idle_frames: usize,
        move_frames: usize,
        frame_delay: f32,
    ) -> Self {
        debug_assert!(idle_frames > 0 && move_frames > 0);
        Self {
            idle: (0..idle_frames).map(|i| format!("{prefix}_idle_{i}")).collect(),
            moving: (0..move_frames).map(|i| format!("{prefix}_move_{i}")).collect(),
            frame_delay,
        }
    }

    pub fn frames(&self, phase: AnimPhase) -> &[String] {
        match phase {
            AnimPhase::Idle => &self.idle,
            AnimPhase::Moving => &self.moving,
        }
    }

    /// Image to display for `state`; empty when the phase has no frames
    pub fn frame_name(&self, state: &AnimationState) -> &str {
        let frames = self.frames(state.phase);
        frames
            .get(state.frame_index % frames.len().max(1))
            .map_or("", String::as_str)
    }

    /// All frame names, idle first
    pub fn all_frames(&self) -> impl Iterator<Item = &str> {
        self.idle.iter().chain(self.moving.iter()).map(String::as_str)
    }
}

/// Advance `state` by `dt` seconds.
///
/// A change of `moving` restarts the new phase at frame 0 with no carried
/// time. Otherwise time accumulates, and each elapsed `frame_delay` steps one
/// frame while keeping the remainder.
pub fn advance_animation(
    state: AnimationState,
    clip: &AnimationClip,
    dt: f32,
    moving: bool,
) -> AnimationState {
    let phase = AnimPhase::from_moving(moving);
    if phase != state.phase {
        return AnimationState {
            phase,
            frame_index: 0,
            frame_time: 0.0,
        };
    }

    let len = clip.frames(phase).len().max(1);
    let mut next = state;
    next.frame_time += dt;
    if next.frame_time >= clip.frame_delay {
        next.frame_time -= clip.frame_delay;
        next.frame_index = (next.frame_index + 1) % len;
    }
    next
}
