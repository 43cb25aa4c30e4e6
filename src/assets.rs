//! Sprite lookup capability
//!
//! The simulation never touches image data. It only needs to know that each
//! named frame exists and how big it is (hitboxes are sprite-sized). Image
//! decoding is left to whoever implements `AssetCatalog`.

use std::collections::HashMap;

use glam::Vec2;
use thiserror::Error;

/// A resolved sprite: its name and pixel size
#[derive(Debug, Clone, PartialEq)]
pub struct Sprite {
    pub name: String,
    pub size: Vec2,
}

/// Failure to resolve a single asset
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AssetError {
    #[error("no image found for '{0}'")]
    MissingSprite(String),
    /// Backend-specific failure, carried verbatim
    #[error("{0}")]
    Load(String),
}

/// Failure to build a new world
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InitError {
    #[error(transparent)]
    Asset(#[from] AssetError),
    #[error("territory {w}x{h} is too small to wander in")]
    TerritoryTooSmall { w: f32, h: f32 },
}

/// Resolves sprite names to drawable images
pub trait AssetCatalog {
    fn sprite(&self, name: &str) -> Result<Sprite, AssetError>;
}

/// Every sprite a playthrough needs, with the sizes used by the bundled art
pub const REQUIRED_SPRITES: &[(&str, f32, f32)] = &[
    ("hero_idle_0", 32.0, 40.0),
    ("hero_idle_1", 32.0, 40.0),
    ("hero_idle_2", 32.0, 40.0),
    ("hero_idle_3", 32.0, 40.0),
    ("hero_move_0", 32.0, 40.0),
    ("hero_move_1", 32.0, 40.0),
    ("hero_move_2", 32.0, 40.0),
    ("hero_move_3", 32.0, 40.0),
    ("hero_move_4", 32.0, 40.0),
    ("hero_move_5", 32.0, 40.0),
    ("slime_idle_0", 36.0, 28.0),
    ("slime_idle_1", 36.0, 28.0),
    ("slime_idle_2", 36.0, 28.0),
    ("slime_idle_3", 36.0, 28.0),
    ("slime_move_0", 36.0, 28.0),
    ("slime_move_1", 36.0, 28.0),
    ("slime_move_2", 36.0, 28.0),
    ("slime_move_3", 36.0, 28.0),
    ("coin", 20.0, 20.0),
    ("portal", 48.0, 64.0),
];

/// In-memory catalog of sprite sizes
#[derive(Debug, Clone, Default)]
pub struct SpriteCatalog {
    sizes: HashMap<String, Vec2>,
}

impl SpriteCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog holding every sprite in `REQUIRED_SPRITES`
    pub fn with_default_sprites() -> Self {
        let mut catalog = Self::new();
        for &(name, w, h) in REQUIRED_SPRITES {
            catalog.insert(name, Vec2::new(w, h));
        }
        catalog
    }

    pub fn insert(&mut self, name: &str, size: Vec2) {
        self.sizes.insert(name.to_string(), size);
    }

    pub fn remove(&mut self, name: &str) -> Option<Vec2> {
        self.sizes.remove(name)
    }

    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }
}

impl AssetCatalog for SpriteCatalog {
    fn sprite(&self, name: &str) -> Result<Sprite, AssetError> {
        self.sizes
            .get(name)
            .map(|&size| Sprite {
                name: name.to_string(),
                size,
            })
            .ok_or_else(|| AssetError::MissingSprite(name.to_string()))
    }
}
