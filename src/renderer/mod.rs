//! Rendering capability
//!
//! The game never draws pixels itself. A platform implements `Renderer`
//! and `screens::draw` walks the session state through it, read-only.

pub mod screens;

use glam::Vec2;

pub use screens::draw;

/// RGB color, 0-255 per channel
pub type Color = (u8, u8, u8);

pub const BG_COLOR_MENU: Color = (18, 18, 28);
pub const BG_COLOR_GAME: Color = (20, 35, 30);
pub const BG_COLOR_ERROR: Color = (40, 10, 10);
pub const TEXT_COLOR: Color = (235, 235, 240);
pub const BUTTON_FILL: Color = (55, 60, 90);
pub const BUTTON_BORDER: Color = (180, 190, 220);

/// Where a text position sits relative to the text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    Center,
    TopLeft,
}

/// Drawing primitives a platform must provide
pub trait Renderer {
    fn clear(&mut self, color: Color);
    fn draw_text(&mut self, text: &str, pos: Vec2, anchor: TextAnchor, size: f32, color: Color);
    fn draw_filled_rect(&mut self, rect: crate::sim::Rect, color: Color);
    fn draw_rect(&mut self, rect: crate::sim::Rect, color: Color);
    /// Draw the named sprite centered on `pos`
    fn draw_sprite(&mut self, name: &str, pos: Vec2);
}
