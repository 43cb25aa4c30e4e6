//! Wandering slimes
//!
//! A slime never looks at the hero. It walks between random points inside
//! its own territory and picks a new point whenever it arrives.

use glam::Vec2;
use rand::Rng;

use super::anim::{AnimationClip, AnimationState, advance_animation};
use super::hero::resolve_clip;
use super::rect::Rect;
use crate::assets::{AssetCatalog, InitError};
use crate::consts::*;

/// Smallest territory side that leaves room for the wander inset
pub const MIN_TERRITORY_SIDE: f32 = 2.0 * TERRITORY_INSET;

#[derive(Debug, Clone)]
pub struct Enemy {
    pub pos: Vec2,
    pub target: Vec2,
    /// Wander bounds, owned by this slime alone
    pub territory: Rect,
    pub size: Vec2,
    pub anim: AnimationState,
    pub clip: AnimationClip,
}

impl Enemy {
    /// Spawn inside `territory` at a random point and pick a first target
    pub fn spawn<R: Rng>(
        territory: Rect,
        assets: &dyn AssetCatalog,
        rng: &mut R,
    ) -> Result<Self, InitError> {
        if territory.w < MIN_TERRITORY_SIDE || territory.h < MIN_TERRITORY_SIDE {
            return Err(InitError::TerritoryTooSmall {
                w: territory.w,
                h: territory.h,
            });
        }

        let clip = AnimationClip::numbered("slime", 4, 4, ENEMY_FRAME_DELAY);
        let size = resolve_clip(&clip, assets)?;

        // Small territories fall back to the wander inset for spawning
        let roomy =
            territory.w >= 2.0 * ENEMY_SPAWN_INSET && territory.h >= 2.0 * ENEMY_SPAWN_INSET;
        let spawn_inset = if roomy {
            ENEMY_SPAWN_INSET
        } else {
            TERRITORY_INSET
        };
        let pos = random_point(&territory, spawn_inset, rng);
        let target = random_point(&territory, TERRITORY_INSET, rng);

        Ok(Self {
            pos,
            target,
            territory,
            size,
            anim: AnimationState::default(),
            clip,
        })
    }

    pub fn rect(&self) -> Rect {
        Rect::from_center(self.pos, self.size)
    }

    pub fn frame(&self) -> &str {
        self.clip.frame_name(&self.anim)
    }

    /// Area the slime's position is confined to
    pub fn wander_bounds(&self) -> Rect {
        self.territory.inset(TERRITORY_INSET)
    }

    /// Advance one tick. Returns whether the slime moved.
    pub fn update<R: Rng>(&mut self, dt: f32, rng: &mut R) -> bool {
        let to_target = self.target - self.pos;
        let mut distance = to_target.length();

        if distance < ENEMY_ARRIVE_RADIUS {
            self.target = random_point(&self.territory, TERRITORY_INSET, rng);
            log::trace!("slime retarget -> ({}, {})", self.target.x, self.target.y);
            // Hold still on the retarget tick
            distance = 0.0;
        }

        let moving = distance > 0.0;
        if moving {
            let step = ENEMY_SPEED * dt;
            if step >= distance {
                self.pos = self.target;
            } else {
                self.pos += to_target / distance * step;
            }
        }

        self.anim = advance_animation(self.anim, &self.clip, dt, moving);
        moving
    }
}

/// Uniform integer point inside `rect` shrunk by `inset` (bounds inclusive).
///
/// An axis with no whole number inside the inset span uses the span's midpoint.
pub fn random_point<R: Rng>(rect: &Rect, inset: f32, rng: &mut R) -> Vec2 {
    Vec2::new(
        random_coord(rect.left() + inset, rect.right() - inset, rng),
        random_coord(rect.top() + inset, rect.bottom() - inset, rng),
    )
}

fn random_coord<R: Rng>(lo: f32, hi: f32, rng: &mut R) -> f32 {
    let first = lo.ceil() as i32;
    let last = hi.floor() as i32;
    if first > last {
        return (lo + hi) / 2.0;
    }
    rng.random_range(first..=last) as f32
}
