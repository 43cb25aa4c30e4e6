//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only (owned by the `World`)
//! - Stable iteration order (slimes and coins in spawn order)
//! - No rendering, audio or platform dependencies

pub mod anim;
pub mod autopilot;
pub mod enemy;
pub mod hero;
pub mod rect;
pub mod state;
pub mod tick;

pub use anim::{AnimPhase, AnimationClip, AnimationState, advance_animation};
pub use autopilot::autopilot_target;
pub use enemy::{Enemy, random_point};
pub use hero::Hero;
pub use rect::Rect;
pub use state::{Coin, ENEMY_TERRITORIES, GameEvent, GamePhase, Portal, World};
pub use tick::{TickOutcome, TickReport, tick};
