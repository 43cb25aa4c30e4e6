//! Top-level game state machine
//!
//! `GameSession` owns the current phase, the world (while one exists), the
//! audio manager and the asset catalog. Input arrives between frames through
//! `handle_pointer_down`; `update` advances the simulation while playing.
//!
//! | From           | Trigger                      | To      |
//! |----------------|------------------------------|---------|
//! | Menu           | Start, world built           | Playing |
//! | Menu           | Start, world build failed    | Error   |
//! | Menu           | Audio                        | Menu    |
//! | Menu           | Exit                         | (`Command::Exit`) |
//! | Playing        | hero touches a slime         | Lose    |
//! | Playing        | hero enters the open portal  | Win     |
//! | Win/Lose/Error | any click                    | Menu    |

use glam::Vec2;

use crate::assets::{AssetCatalog, InitError};
use crate::audio::{AudioBackend, AudioManager, SoundEffect};
use crate::consts::{HEIGHT, WIDTH};
use crate::settings::Settings;
use crate::sim::{GameEvent, GamePhase, Rect, TickOutcome, World, tick};

/// Mouse button of a pointer-down event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PointerButton {
    #[default]
    Left,
    Middle,
    Right,
}

/// What the outer run loop should do after an input event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Continue,
    /// Player chose Exit from the menu
    Exit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuButton {
    Start,
    Audio,
    Exit,
}

/// Menu button rectangles
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MenuLayout {
    pub start: Rect,
    pub audio: Rect,
    pub exit: Rect,
}

pub const BUTTON_WIDTH: f32 = 320.0;
pub const BUTTON_HEIGHT: f32 = 56.0;
/// Vertical distance between button tops
pub const BUTTON_SPACING: f32 = 80.0;

impl Default for MenuLayout {
    fn default() -> Self {
        Self::centered()
    }
}

impl MenuLayout {
    /// Three buttons stacked in the middle of the screen
    pub fn centered() -> Self {
        let x = (WIDTH / 2.0).floor() - (BUTTON_WIDTH / 2.0).floor();
        let y = (HEIGHT / 2.0).floor() - 70.0;
        let button = |row: f32| Rect::new(x, y + row * BUTTON_SPACING, BUTTON_WIDTH, BUTTON_HEIGHT);
        Self {
            start: button(0.0),
            audio: button(1.0),
            exit: button(2.0),
        }
    }

    /// Button under `pos`, if any
    pub fn hit(&self, pos: Vec2) -> Option<MenuButton> {
        if self.start.contains_point(pos) {
            Some(MenuButton::Start)
        } else if self.audio.contains_point(pos) {
            Some(MenuButton::Audio)
        } else if self.exit.contains_point(pos) {
            Some(MenuButton::Exit)
        } else {
            None
        }
    }
}

/// One game session: menu, playthroughs, and everything in between
pub struct GameSession {
    phase: GamePhase,
    world: Option<World>,
    audio: AudioManager,
    assets: Box<dyn AssetCatalog>,
    /// Set only while in `GamePhase::Error`
    error_message: String,
    menu: MenuLayout,
    base_seed: u64,
    /// Playthroughs started so far (each gets its own seed)
    runs: u64,
}

impl GameSession {
    pub fn new(assets: Box<dyn AssetCatalog>, audio: AudioManager, seed: u64) -> Self {
        Self {
            phase: GamePhase::Menu,
            world: None,
            audio,
            assets,
            error_message: String::new(),
            menu: MenuLayout::centered(),
            base_seed: seed,
            runs: 0,
        }
    }

    /// Session configured from `settings`
    pub fn from_settings(
        settings: &Settings,
        assets: Box<dyn AssetCatalog>,
        backend: Box<dyn AudioBackend>,
    ) -> Self {
        let audio = AudioManager::new(backend, settings.audio_enabled, settings.music_volume);
        Self::new(assets, audio, settings.resolve_seed())
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Current world; present while playing and on the win/lose screens
    pub fn world(&self) -> Option<&World> {
        self.world.as_ref()
    }

    pub fn world_mut(&mut self) -> Option<&mut World> {
        self.world.as_mut()
    }

    pub fn error_message(&self) -> &str {
        &self.error_message
    }

    pub fn audio_enabled(&self) -> bool {
        self.audio.is_enabled()
    }

    pub fn menu(&self) -> &MenuLayout {
        &self.menu
    }

    /// Coins collected in the current playthrough
    pub fn collected(&self) -> u32 {
        self.world.as_ref().map_or(0, |w| w.collected)
    }

    /// Handle a pointer press delivered between frames
    pub fn handle_pointer_down(&mut self, pos: Vec2, _button: PointerButton) -> Command {
        match self.phase {
            GamePhase::Menu => match self.menu.hit(pos) {
                Some(MenuButton::Start) => {
                    self.audio.play(SoundEffect::Click);
                    self.start_game();
                }
                Some(MenuButton::Audio) => {
                    self.audio.play(SoundEffect::Click);
                    self.audio.toggle();
                    log::info!("Audio {}", if self.audio.is_enabled() { "on" } else { "off" });
                }
                Some(MenuButton::Exit) => {
                    log::info!("Exit requested");
                    return Command::Exit;
                }
                None => {}
            },
            GamePhase::Win | GamePhase::Lose | GamePhase::Error => {
                self.audio.play(SoundEffect::Click);
                self.return_to_menu();
            }
            GamePhase::Playing => {
                if let Some(world) = self.world.as_mut() {
                    world.hero.set_target(pos);
                }
            }
        }
        Command::Continue
    }

    /// Advance one frame. Does nothing outside `GamePhase::Playing`.
    pub fn update(&mut self, dt: f32) {
        if self.phase != GamePhase::Playing {
            return;
        }
        let Some(world) = self.world.as_mut() else {
            return;
        };

        let report = tick(world, dt);
        for event in &report.events {
            match event {
                GameEvent::HeroHit { .. } => self.audio.play(SoundEffect::Hit),
                GameEvent::CoinCollected { .. } => self.audio.play(SoundEffect::Pickup),
                GameEvent::PortalOpened | GameEvent::PortalReached => {}
            }
        }

        match report.outcome {
            TickOutcome::Running => {}
            TickOutcome::Lost => self.set_phase(GamePhase::Lose),
            TickOutcome::Won => self.set_phase(GamePhase::Win),
        }
    }

    /// Build a fresh world and start playing, or land on the error screen
    fn start_game(&mut self) {
        let seed = self.base_seed.wrapping_add(self.runs);
        self.runs += 1;
        let result = World::build(self.assets.as_ref(), seed);
        self.finish_reset(result);
    }

    fn finish_reset(&mut self, result: Result<World, InitError>) {
        match result {
            Ok(world) => {
                self.world = Some(world);
                self.error_message.clear();
                self.set_phase(GamePhase::Playing);
                if self.audio.is_enabled() {
                    self.audio.set_music(true);
                }
            }
            Err(err) => {
                log::error!("World init failed: {err}");
                self.world = None;
                self.error_message = err.to_string();
                self.set_phase(GamePhase::Error);
            }
        }
    }

    fn return_to_menu(&mut self) {
        self.world = None;
        self.error_message.clear();
        self.set_phase(GamePhase::Menu);
    }

    fn set_phase(&mut self, phase: GamePhase) {
        if phase != self.phase {
            log::info!("{:?} -> {:?}", self.phase, phase);
        }
        self.phase = phase;
    }
}
