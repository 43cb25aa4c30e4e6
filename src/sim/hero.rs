//! The player-controlled hero

use glam::Vec2;

use super::anim::{AnimPhase, AnimationClip, AnimationState, advance_animation};
use super::rect::Rect;
use crate::assets::{AssetCatalog, AssetError};
use crate::clamp_to_arena;
use crate::consts::*;

/// Hero entity: seeks the last clicked point, clamped to the arena
#[derive(Debug, Clone)]
pub struct Hero {
    pub pos: Vec2,
    /// Point the hero walks toward (set by pointer clicks)
    pub target: Vec2,
    /// Hitbox size (first idle frame)
    pub size: Vec2,
    pub anim: AnimationState,
    pub clip: AnimationClip,
}

impl Hero {
    /// Create a hero at `pos`, resolving every frame against `assets`
    pub fn spawn(pos: Vec2, assets: &dyn AssetCatalog) -> Result<Self, AssetError> {
        let clip = AnimationClip::numbered("hero", 4, 6, HERO_FRAME_DELAY);
        let size = resolve_clip(&clip, assets)?;
        Ok(Self {
            pos,
            target: pos,
            size,
            anim: AnimationState::default(),
            clip,
        })
    }

    pub fn set_target(&mut self, target: Vec2) {
        self.target = target;
    }

    pub fn rect(&self) -> Rect {
        Rect::from_center(self.pos, self.size)
    }

    /// Image currently displayed
    pub fn frame(&self) -> &str {
        self.clip.frame_name(&self.anim)
    }

    /// Move toward the target by `HERO_SPEED * dt`. Returns whether the hero moved.
    pub fn update(&mut self, dt: f32) -> bool {
        let to_target = self.target - self.pos;
        let distance = to_target.length();

        let moving = distance > HERO_DEAD_ZONE;
        if moving {
            let step = HERO_SPEED * dt;
            if step >= distance {
                self.pos = self.target;
            } else {
                self.pos += to_target / distance * step;
            }
        }

        self.pos = clamp_to_arena(self.pos, HERO_MARGIN);
        self.anim = advance_animation(self.anim, &self.clip, dt, moving);
        moving
    }
}

/// Check every frame of `clip` exists; returns the first idle frame's size.
///
/// Both phases need at least one frame.
pub(crate) fn resolve_clip(
    clip: &AnimationClip,
    assets: &dyn AssetCatalog,
) -> Result<Vec2, AssetError> {
    for phase in [AnimPhase::Idle, AnimPhase::Moving] {
        if clip.frames(phase).is_empty() {
            return Err(AssetError::Load(format!("animation clip has no {phase:?} frames")));
        }
    }

    let mut size = Vec2::ZERO;
    for (i, name) in clip.all_frames().enumerate() {
        let sprite = assets.sprite(name)?;
        if i == 0 {
            size = sprite.size;
        }
    }
    Ok(size)
}
