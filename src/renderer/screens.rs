//! Per-phase screens

use glam::Vec2;

use super::*;
use crate::consts::{COIN_COUNT, HEIGHT, WIDTH};
use crate::session::GameSession;
use crate::sim::{GamePhase, Rect, World};

/// Draw the whole frame for the session's current phase
pub fn draw(session: &GameSession, r: &mut dyn Renderer) {
    match session.phase() {
        GamePhase::Menu => draw_menu(session, r),
        GamePhase::Error => draw_error(session.error_message(), r),
        GamePhase::Playing | GamePhase::Win | GamePhase::Lose => {
            r.clear(BG_COLOR_GAME);
            if let Some(world) = session.world() {
                draw_world(world, r);
            }
            match session.phase() {
                GamePhase::Win => banner(r, "YOU WIN! (click for menu)", (235, 255, 235)),
                GamePhase::Lose => banner(r, "YOU LOSE! (click for menu)", (255, 230, 230)),
                _ => {}
            }
        }
    }
}

fn draw_menu(session: &GameSession, r: &mut dyn Renderer) {
    r.clear(BG_COLOR_MENU);
    r.draw_text("FOREST RUN", Vec2::new(WIDTH / 2.0, 120.0), TextAnchor::Center, 56.0, TEXT_COLOR);
    r.draw_text(
        "Click to walk. Grab the coins. Dodge the slimes.",
        Vec2::new(WIDTH / 2.0, 170.0),
        TextAnchor::Center,
        28.0,
        (210, 210, 220),
    );

    let menu = session.menu();
    button(r, menu.start, "Start game");
    let audio_label = if session.audio_enabled() { "Audio: ON" } else { "Audio: OFF" };
    button(r, menu.audio, audio_label);
    button(r, menu.exit, "Exit");
}

fn draw_error(message: &str, r: &mut dyn Renderer) {
    let color = (255, 230, 230);
    r.clear(BG_COLOR_ERROR);
    r.draw_text(
        "FAILED TO START",
        Vec2::new(WIDTH / 2.0, 120.0),
        TextAnchor::Center,
        60.0,
        (255, 220, 220),
    );
    r.draw_text(
        "Probably a missing asset (image/sound) or an audio problem.",
        Vec2::new(WIDTH / 2.0, 190.0),
        TextAnchor::Center,
        28.0,
        color,
    );
    r.draw_text(
        &format!("Detail: {message}"),
        Vec2::new(WIDTH / 2.0, 260.0),
        TextAnchor::Center,
        22.0,
        (255, 240, 240),
    );
    r.draw_text(
        "Click to return to the menu.",
        Vec2::new(WIDTH / 2.0, 340.0),
        TextAnchor::Center,
        28.0,
        color,
    );
}

fn draw_world(world: &World, r: &mut dyn Renderer) {
    for coin in &world.coins {
        r.draw_sprite("coin", coin.pos);
    }
    if world.portal.active {
        r.draw_sprite("portal", world.portal.pos);
    }
    for enemy in &world.enemies {
        r.draw_sprite(enemy.frame(), enemy.pos);
    }
    r.draw_sprite(world.hero.frame(), world.hero.pos);

    r.draw_text(
        &format!("Coins: {}/{COIN_COUNT}", world.collected),
        Vec2::new(16.0, 12.0),
        TextAnchor::TopLeft,
        32.0,
        TEXT_COLOR,
    );
}

fn button(r: &mut dyn Renderer, rect: Rect, label: &str) {
    r.draw_filled_rect(rect, BUTTON_FILL);
    r.draw_rect(rect, BUTTON_BORDER);
    r.draw_text(label, rect.center(), TextAnchor::Center, 34.0, TEXT_COLOR);
}

fn banner(r: &mut dyn Renderer, text: &str, color: Color) {
    r.draw_text(text, Vec2::new(WIDTH / 2.0, HEIGHT / 2.0), TextAnchor::Center, 52.0, color);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::{AssetCatalog, AssetError, Sprite, SpriteCatalog};
    use crate::audio::AudioManager;
    use crate::session::PointerButton;

    /// Records draw calls as strings
    #[derive(Default)]
    struct Recorder {
        ops: Vec<String>,
    }

    impl Recorder {
        fn texts(&self) -> Vec<&str> {
            self.ops
                .iter()
                .filter_map(|op| op.strip_prefix("text:"))
                .collect()
        }

        fn sprites(&self) -> Vec<&str> {
            self.ops
                .iter()
                .filter_map(|op| op.strip_prefix("sprite:"))
                .collect()
        }
    }

    impl Renderer for Recorder {
        fn clear(&mut self, color: Color) {
            self.ops.push(format!("clear:{color:?}"));
        }
        fn draw_text(
            &mut self,
            text: &str,
            _pos: Vec2,
            _anchor: TextAnchor,
            _size: f32,
            _color: Color,
        ) {
            self.ops.push(format!("text:{text}"));
        }
        fn draw_filled_rect(&mut self, _rect: Rect, _color: Color) {
            self.ops.push("fill".to_string());
        }
        fn draw_rect(&mut self, _rect: Rect, _color: Color) {
            self.ops.push("rect".to_string());
        }
        fn draw_sprite(&mut self, name: &str, _pos: Vec2) {
            self.ops.push(format!("sprite:{name}"));
        }
    }

    fn session(assets: Box<dyn AssetCatalog>) -> GameSession {
        let audio = AudioManager::new(Box::new(crate::audio::SilentBackend), true, 0.6);
        GameSession::new(assets, audio, 77)
    }

    fn press_start(session: &mut GameSession) {
        let start = session.menu().start.center();
        session.handle_pointer_down(start, PointerButton::Left);
    }

    #[test]
    fn test_menu_screen() {
        let session = session(Box::new(SpriteCatalog::with_default_sprites()));
        let mut r = Recorder::default();
        draw(&session, &mut r);

        assert_eq!(r.ops[0], format!("clear:{BG_COLOR_MENU:?}"));
        let texts = r.texts();
        assert!(texts.contains(&"Start game"));
        assert!(texts.contains(&"Audio: ON"));
        assert!(texts.contains(&"Exit"));
        assert_eq!(r.ops.iter().filter(|op| *op == "fill").count(), 3);
    }

    #[test]
    fn test_error_screen_shows_detail() {
        struct Broken;
        impl AssetCatalog for Broken {
            fn sprite(&self, _name: &str) -> Result<Sprite, AssetError> {
                Err(AssetError::Load("missing sprite".into()))
            }
        }

        let mut session = session(Box::new(Broken));
        press_start(&mut session);
        let mut r = Recorder::default();
        draw(&session, &mut r);
        assert!(r.texts().contains(&"Detail: missing sprite"));
        assert!(r.texts().contains(&"Click to return to the menu."));
    }

    #[test]
    fn test_playing_screen() {
        let mut session = session(Box::new(SpriteCatalog::with_default_sprites()));
        press_start(&mut session);
        let mut r = Recorder::default();
        draw(&session, &mut r);

        let sprites = r.sprites();
        assert_eq!(sprites.iter().filter(|s| **s == "coin").count(), COIN_COUNT as usize);
        assert!(!sprites.contains(&"portal"));
        assert_eq!(sprites.iter().filter(|s| s.starts_with("slime_")).count(), 4);
        assert_eq!(sprites.last(), Some(&"hero_idle_0"));
        assert!(r.texts().contains(&"Coins: 0/6"));
    }

    #[test]
    fn test_portal_drawn_once_open() {
        let mut session = session(Box::new(SpriteCatalog::with_default_sprites()));
        press_start(&mut session);
        let world = session.world_mut().unwrap();
        world.coins.clear();
        world.collected = COIN_COUNT;
        world.portal.activate();

        let mut r = Recorder::default();
        draw(&session, &mut r);
        assert!(r.sprites().contains(&"portal"));
        assert!(r.texts().contains(&"Coins: 6/6"));
    }

    #[test]
    fn test_lose_banner_over_world() {
        let mut session = session(Box::new(SpriteCatalog::with_default_sprites()));
        press_start(&mut session);
        let world = session.world_mut().unwrap();
        world.enemies[0].pos = world.hero.pos;
        world.enemies[0].target = world.hero.pos;
        session.update(0.0);
        assert_eq!(session.phase(), GamePhase::Lose);

        let mut r = Recorder::default();
        draw(&session, &mut r);
        assert!(r.texts().contains(&"YOU LOSE! (click for menu)"));
        assert!(r.sprites().iter().any(|s| s.starts_with("hero_")));
    }
}
