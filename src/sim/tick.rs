//! Per-frame simulation step
//!
//! Order within a tick: hero, then each slime (a hit ends the tick at once),
//! then coin pickup, portal activation and finally the portal check. A hit and
//! a portal touch in the same frame therefore always resolve as a loss.

use super::state::{GameEvent, World};
use crate::consts::*;

/// How a tick ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TickOutcome {
    #[default]
    Running,
    /// Hero touched a slime
    Lost,
    /// Hero reached the open portal
    Won,
}

/// Result of one tick: the outcome plus everything that happened on the way
#[derive(Debug, Clone, Default)]
pub struct TickReport {
    pub outcome: TickOutcome,
    pub events: Vec<GameEvent>,
}

/// Advance the world by `dt` seconds
pub fn tick(world: &mut World, dt: f32) -> TickReport {
    let mut report = TickReport::default();
    world.time_ticks += 1;

    world.hero.update(dt);

    for (index, enemy) in world.enemies.iter_mut().enumerate() {
        enemy.update(dt, &mut world.rng);
        if world.hero.rect().intersects(&enemy.rect()) {
            log::debug!("hero hit by slime {index} at tick {}", world.time_ticks);
            report.events.push(GameEvent::HeroHit { enemy: index });
            report.outcome = TickOutcome::Lost;
            return report;
        }
    }

    let hero_pos = world.hero.pos;
    let mut collected_now = 0;
    world.coins.retain(|coin| {
        if hero_pos.distance(coin.pos) <= COIN_PICK_RADIUS {
            collected_now += 1;
            report.events.push(GameEvent::CoinCollected { pos: coin.pos });
            false
        } else {
            true
        }
    });
    if collected_now > 0 {
        world.collected += collected_now;
        log::debug!("collected {collected_now} coin(s), {}/{COIN_COUNT}", world.collected);
    }

    if world.collected >= COIN_COUNT && world.portal.activate() {
        log::info!("portal opened");
        report.events.push(GameEvent::PortalOpened);
    }

    if world.portal.active && world.hero.rect().intersects(&world.portal.rect()) {
        report.events.push(GameEvent::PortalReached);
        report.outcome = TickOutcome::Won;
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::SpriteCatalog;
    use crate::sim::state::Coin;
    use glam::Vec2;

    fn world() -> World {
        World::build(&SpriteCatalog::with_default_sprites(), 12345).unwrap()
    }

    /// World with the slimes out of the way
    fn quiet_world() -> World {
        let mut world = world();
        world.enemies.clear();
        world
    }

    fn coin_at(world: &World, pos: Vec2) -> Coin {
        Coin {
            pos,
            size: world.coins[0].size,
        }
    }

    #[test]
    fn test_collects_all_coins_in_one_tick() {
        let mut world = quiet_world();
        let hero = world.hero.pos;
        let coins: Vec<Coin> = (0..COIN_COUNT)
            .map(|i| coin_at(&world, hero + Vec2::new(i as f32 * 4.0, 0.0)))
            .collect();
        world.coins = coins;

        let report = tick(&mut world, 1.0 / 60.0);
        assert_eq!(world.collected, COIN_COUNT);
        assert!(world.coins.is_empty());
        assert!(world.portal.active);
        assert_eq!(report.outcome, TickOutcome::Running);

        let pickups = report
            .events
            .iter()
            .filter(|e| matches!(e, GameEvent::CoinCollected { .. }))
            .count();
        assert_eq!(pickups, COIN_COUNT as usize);
        assert!(report.events.contains(&GameEvent::PortalOpened));
    }

    #[test]
    fn test_coin_collected_once() {
        let mut world = quiet_world();
        let hero = world.hero.pos;
        let near = coin_at(&world, hero + Vec2::new(COIN_PICK_RADIUS, 0.0));
        let far = coin_at(&world, Vec2::new(600.0, 400.0));
        world.coins = vec![near, far];

        tick(&mut world, 1.0 / 60.0);
        assert_eq!(world.collected, 1);
        assert_eq!(world.coins, vec![far]);

        for _ in 0..10 {
            let report = tick(&mut world, 1.0 / 60.0);
            assert!(report.events.is_empty());
        }
        assert_eq!(world.collected, 1);
        assert!(!world.portal.active);
    }

    #[test]
    fn test_hit_ends_tick_before_coins() {
        let mut world = world();
        let hero = world.hero.pos;
        world.coins = vec![coin_at(&world, hero)];
        world.collected = COIN_COUNT - 1;

        // Park a slime on the hero and freeze it
        let enemy = &mut world.enemies[2];
        enemy.pos = hero;
        enemy.target = hero + Vec2::new(3.0, 0.0);

        let report = tick(&mut world, 0.0);
        assert_eq!(report.outcome, TickOutcome::Lost);
        assert_eq!(report.events, vec![GameEvent::HeroHit { enemy: 2 }]);
        assert_eq!(world.coins.len(), 1);
        assert_eq!(world.collected, COIN_COUNT - 1);
        assert!(!world.portal.active);
    }

    #[test]
    fn test_hit_beats_win() {
        let mut world = world();
        world.coins.clear();
        world.collected = COIN_COUNT;
        world.portal.active = true;
        world.hero.pos = world.portal.pos;
        world.hero.target = world.portal.pos;

        let enemy = &mut world.enemies[0];
        enemy.pos = world.hero.pos;
        enemy.target = world.hero.pos;

        let report = tick(&mut world, 0.0);
        assert_eq!(report.outcome, TickOutcome::Lost);
    }

    #[test]
    fn test_closed_portal_is_not_a_win() {
        let mut world = quiet_world();
        world.hero.pos = world.portal.pos;
        world.hero.target = world.portal.pos;

        let report = tick(&mut world, 1.0 / 60.0);
        assert_eq!(report.outcome, TickOutcome::Running);
        assert!(!world.portal.active);
    }

    #[test]
    fn test_win_through_open_portal() {
        let mut world = quiet_world();
        world.coins.clear();
        world.collected = COIN_COUNT;
        world.hero.pos = world.portal.pos;
        world.hero.target = world.portal.pos;

        let report = tick(&mut world, 1.0 / 60.0);
        assert_eq!(report.outcome, TickOutcome::Won);
        assert_eq!(
            report.events,
            vec![GameEvent::PortalOpened, GameEvent::PortalReached]
        );
    }

    #[test]
    fn test_portal_monotonic() {
        let mut world = quiet_world();
        world.coins.clear();
        world.collected = COIN_COUNT;
        tick(&mut world, 1.0 / 60.0);
        assert!(world.portal.active);

        for _ in 0..30 {
            let report = tick(&mut world, 1.0 / 60.0);
            assert!(world.portal.active);
            assert!(!report.events.contains(&GameEvent::PortalOpened));
        }
    }

    #[test]
    fn test_determinism() {
        // Same seed and same inputs give the same world
        let catalog = SpriteCatalog::with_default_sprites();
        let mut a = World::build(&catalog, 99999).unwrap();
        let mut b = World::build(&catalog, 99999).unwrap();

        let targets = [Vec2::new(300.0, 90.0), Vec2::new(450.0, 300.0), Vec2::new(800.0, 500.0)];
        for target in targets {
            a.hero.set_target(target);
            b.hero.set_target(target);
            for _ in 0..90 {
                let ra = tick(&mut a, 1.0 / 60.0);
                let rb = tick(&mut b, 1.0 / 60.0);
                assert_eq!(ra.outcome, rb.outcome);
                assert_eq!(ra.events, rb.events);
            }
        }

        assert_eq!(a.time_ticks, b.time_ticks);
        assert_eq!(a.hero.pos, b.hero.pos);
        assert_eq!(a.collected, b.collected);
        for (ea, eb) in a.enemies.iter().zip(&b.enemies) {
            assert_eq!(ea.pos, eb.pos);
        }
    }
}
