//! Forest Run - a small arena arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (hero, slimes, coins, portal, per-frame step)
//! - `session`: Menu/playing/win/lose/error state machine
//! - `assets`: Sprite lookup capability and world-init errors
//! - `audio`: Fault-tolerant sound/music wrapper
//! - `renderer`: Drawing capability and the read-only draw pass
//! - `settings`: User configuration

pub mod assets;
pub mod audio;
pub mod renderer;
pub mod session;
pub mod settings;
pub mod sim;

pub use assets::{AssetCatalog, AssetError, InitError, Sprite, SpriteCatalog};
pub use audio::{AudioBackend, AudioError, AudioManager, SoundEffect};
pub use session::{Command, GameSession, PointerButton};
pub use settings::Settings;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Arena dimensions
    pub const WIDTH: f32 = 900.0;
    pub const HEIGHT: f32 = 600.0;

    /// Fixed frame step used by the headless runner (60 Hz)
    pub const FRAME_DT: f32 = 1.0 / 60.0;

    /// Hero movement (units/s)
    pub const HERO_SPEED: f32 = 220.0;
    /// Hero is kept this far from every arena edge
    pub const HERO_MARGIN: f32 = 20.0;
    /// Below this distance the hero counts as arrived (avoids jitter at rest)
    pub const HERO_DEAD_ZONE: f32 = 2.0;
    pub const HERO_START: (f32, f32) = (90.0, 90.0);
    pub const HERO_FRAME_DELAY: f32 = 0.10;

    /// Slime movement (units/s)
    pub const ENEMY_SPEED: f32 = 140.0;
    /// A slime closer than this to its target picks a new one
    pub const ENEMY_ARRIVE_RADIUS: f32 = 6.0;
    /// Wander targets stay this far inside the territory
    pub const TERRITORY_INSET: f32 = 25.0;
    /// Spawn points stay this far inside the territory
    pub const ENEMY_SPAWN_INSET: f32 = 30.0;
    pub const ENEMY_FRAME_DELAY: f32 = 0.12;

    /// Coins per playthrough
    pub const COIN_COUNT: u32 = 6;
    pub const COIN_PICK_RADIUS: f32 = 28.0;
    /// Coins spawn at least this far from every arena edge
    pub const COIN_SPAWN_MARGIN: f32 = 120.0;

    /// Portal sits this far in from the bottom-right corner
    pub const PORTAL_CORNER_OFFSET: f32 = 70.0;

    /// Default background music volume
    pub const MUSIC_VOLUME: f32 = 0.6;
}

/// Clamp a point into the arena shrunk by `margin` on every side
#[inline]
pub fn clamp_to_arena(pos: Vec2, margin: f32) -> Vec2 {
    pos.clamp(
        Vec2::splat(margin),
        Vec2::new(consts::WIDTH - margin, consts::HEIGHT - margin),
    )
}
