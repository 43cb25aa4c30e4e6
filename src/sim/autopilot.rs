//! Demo mode: picks where the hero should walk next
//!
//! Goes for the nearest coin still on the field, then for the portal once
//! it opens. It ignores slimes entirely, so demo runs can and do lose.

use glam::Vec2;

use super::state::World;

/// Next point the hero should be sent to, if any
pub fn autopilot_target(world: &World) -> Option<Vec2> {
    let hero = world.hero.pos;
    world
        .coins
        .iter()
        .map(|c| c.pos)
        .min_by(|a, b| {
            hero.distance_squared(*a)
                .partial_cmp(&hero.distance_squared(*b))
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .or_else(|| world.portal.active.then_some(world.portal.pos))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::SpriteCatalog;
    use crate::consts::COIN_COUNT;
    use crate::sim::state::Coin;

    #[test]
    fn test_targets_nearest_coin() {
        let mut world = World::build(&SpriteCatalog::with_default_sprites(), 5).unwrap();
        let size = world.coins[0].size;
        world.coins = vec![
            Coin { pos: Vec2::new(700.0, 400.0), size },
            Coin { pos: Vec2::new(150.0, 130.0), size },
        ];
        assert_eq!(autopilot_target(&world), Some(Vec2::new(150.0, 130.0)));
    }

    #[test]
    fn test_targets_open_portal() {
        let mut world = World::build(&SpriteCatalog::with_default_sprites(), 5).unwrap();
        world.coins.clear();
        assert_eq!(autopilot_target(&world), None);

        world.collected = COIN_COUNT;
        world.portal.activate();
        assert_eq!(autopilot_target(&world), Some(world.portal.pos));
    }
}
