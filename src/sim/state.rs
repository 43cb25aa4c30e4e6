//! World state and core simulation types
//!
//! Everything a single playthrough owns lives in `World`. It is built in one
//! piece by `World::build` and dropped in one piece; there is no partial reset.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::enemy::{Enemy, random_point};
use super::hero::Hero;
use super::rect::Rect;
use crate::assets::{AssetCatalog, InitError};
use crate::consts::*;

/// Top-level game mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen with Start / Audio / Exit buttons
    #[default]
    Menu,
    /// Active gameplay
    Playing,
    /// Hero reached the open portal
    Win,
    /// Hero touched a slime
    Lose,
    /// World could not be built
    Error,
}

/// Something noteworthy that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Hero collided with the slime at this index
    HeroHit { enemy: usize },
    /// A coin was picked up at this position
    CoinCollected { pos: Vec2 },
    /// All coins are in; the portal opened this tick
    PortalOpened,
    /// Hero stepped into the open portal
    PortalReached,
}

/// A collectible coin. Collected coins are removed from the world.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coin {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Coin {
    pub fn rect(&self) -> Rect {
        Rect::from_center(self.pos, self.size)
    }
}

/// The exit. Only reachable once every coin has been collected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Portal {
    pub pos: Vec2,
    pub size: Vec2,
    pub active: bool,
}

impl Portal {
    pub fn rect(&self) -> Rect {
        Rect::from_center(self.pos, self.size)
    }

    /// Open the portal. Opening an open portal changes nothing.
    pub fn activate(&mut self) -> bool {
        let was_active = self.active;
        self.active = true;
        !was_active
    }
}

/// Slime territories as (x, y, w, h)
pub const ENEMY_TERRITORIES: [Rect; 4] = [
    Rect::new(80.0, 260.0, 260.0, 260.0),
    Rect::new(360.0, 60.0, 260.0, 220.0),
    Rect::new(360.0, 320.0, 260.0, 240.0),
    Rect::new(660.0, 120.0, 200.0, 360.0),
];

/// Everything one playthrough owns
#[derive(Debug, Clone)]
pub struct World {
    /// Seed this world was built from
    pub seed: u64,
    pub hero: Hero,
    pub enemies: Vec<Enemy>,
    /// Coins still on the field
    pub coins: Vec<Coin>,
    pub portal: Portal,
    /// Coins picked up so far
    pub collected: u32,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Drives slime wandering
    pub(crate) rng: Pcg32,
}

impl World {
    /// Build a fresh world: hero at the start, four slimes, `COIN_COUNT`
    /// coins and a closed portal. Fails if any sprite is missing.
    pub fn build(assets: &dyn AssetCatalog, seed: u64) -> Result<Self, InitError> {
        let mut rng = Pcg32::seed_from_u64(seed);

        let hero = Hero::spawn(Vec2::new(HERO_START.0, HERO_START.1), assets)?;

        let portal_sprite = assets.sprite("portal")?;
        let portal = Portal {
            pos: Vec2::new(WIDTH - PORTAL_CORNER_OFFSET, HEIGHT - PORTAL_CORNER_OFFSET),
            size: portal_sprite.size,
            active: false,
        };

        let enemies = ENEMY_TERRITORIES
            .iter()
            .map(|&territory| Enemy::spawn(territory, assets, &mut rng))
            .collect::<Result<Vec<_>, _>>()?;

        let coin_sprite = assets.sprite("coin")?;
        let coin_field = Rect::new(0.0, 0.0, WIDTH, HEIGHT);
        let coins = (0..COIN_COUNT)
            .map(|_| Coin {
                pos: random_point(&coin_field, COIN_SPAWN_MARGIN, &mut rng),
                size: coin_sprite.size,
            })
            .collect();

        log::info!("World built (seed {seed})");

        Ok(Self {
            seed,
            hero,
            enemies,
            coins,
            portal,
            collected: 0,
            time_ticks: 0,
            rng,
        })
    }

    /// Coins still needed to open the portal
    pub fn coins_remaining(&self) -> u32 {
        COIN_COUNT.saturating_sub(self.collected)
    }
}
