//! Forest Run entry point
//!
//! Runs the game headless: the menu is clicked by script, the hero is
//! steered by the autopilot, and every frame is drawn through a logging
//! renderer. `RUST_LOG=debug` shows the play-by-play.

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use glam::Vec2;

    use forest_run::audio::SilentBackend;
    use forest_run::consts::FRAME_DT;
    use forest_run::renderer::{Color, Renderer, TextAnchor, draw};
    use forest_run::sim::{GamePhase, Rect, autopilot_target};
    use forest_run::{Command, GameSession, PointerButton, Settings, SpriteCatalog};

    /// Renderer that only traces what it is asked to draw
    #[derive(Default)]
    struct LogRenderer {
        ops: usize,
    }

    impl Renderer for LogRenderer {
        fn clear(&mut self, color: Color) {
            self.ops = 0;
            log::trace!("clear {color:?}");
        }

        fn draw_text(
            &mut self,
            text: &str,
            pos: Vec2,
            _anchor: TextAnchor,
            _size: f32,
            _color: Color,
        ) {
            self.ops += 1;
            log::trace!("text '{text}' at ({:.0}, {:.0})", pos.x, pos.y);
        }

        fn draw_filled_rect(&mut self, rect: Rect, _color: Color) {
            self.ops += 1;
            log::trace!("fill {rect:?}");
        }

        fn draw_rect(&mut self, rect: Rect, _color: Color) {
            self.ops += 1;
            log::trace!("rect {rect:?}");
        }

        fn draw_sprite(&mut self, name: &str, pos: Vec2) {
            self.ops += 1;
            log::trace!("sprite {name} at ({:.0}, {:.0})", pos.x, pos.y);
        }
    }

    pub fn run() {
        let settings = Settings::load_from_env();
        let mut session = GameSession::from_settings(
            &settings,
            Box::new(SpriteCatalog::with_default_sprites()),
            Box::new(SilentBackend),
        );
        let mut renderer = LogRenderer::default();
        let mut played = false;

        for frame in 0..settings.max_frames {
            let click = match session.phase() {
                GamePhase::Menu if played => Some(session.menu().exit.center()),
                GamePhase::Menu => Some(session.menu().start.center()),
                GamePhase::Playing => session
                    .world()
                    .filter(|_| settings.autopilot)
                    .and_then(|world| autopilot_target(world).filter(|t| *t != world.hero.target)),
                GamePhase::Win | GamePhase::Lose | GamePhase::Error => {
                    if let Some(world) = session.world() {
                        log::info!(
                            "{:?} after {} ticks with {} coin(s)",
                            session.phase(),
                            world.time_ticks,
                            world.collected
                        );
                    } else {
                        log::info!("{:?}: {}", session.phase(), session.error_message());
                    }
                    played = true;
                    Some(Vec2::ZERO)
                }
            };

            if let Some(pos) = click {
                if session.handle_pointer_down(pos, PointerButton::Left) == Command::Exit {
                    log::info!("Exiting after {frame} frames");
                    return;
                }
            }

            session.update(FRAME_DT);
            draw(&session, &mut renderer);
            log::trace!("frame {frame}: {} draw ops", renderer.ops);
        }

        log::warn!("Frame cap of {} reached, stopping", settings.max_frames);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Forest Run (headless) starting...");
    headless::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // No web front end; the library is embedded by the host page
}
