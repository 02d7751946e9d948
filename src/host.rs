//! Collaborator interfaces the overlay depends on.
//!
//! The core never draws pixels, reads files, touches the clipboard or plays
//! audio itself; the host (or the default system implementations in
//! [`crate::clipboard`], [`crate::sound`] and [`crate::storage`]) supplies
//! these narrow traits.

use anyhow::Result;

use crate::color::Argb;
use crate::geometry::Rect;

/// Rendering primitives plus screen geometry.
///
/// `formatted` mirrors the host's markup-aware text path (color codes etc.);
/// implementations that don't distinguish may ignore it.
pub trait RenderSurface {
    fn fill_rect(&mut self, color: Argb, rect: Rect);
    fn text_width(&self, text: &str, formatted: bool) -> f32;
    fn draw_text(&mut self, text: &str, x: f32, y: f32, color: Argb, formatted: bool);
    fn screen_width(&self) -> f32;
    fn screen_height(&self) -> f32;
}

/// Chainable text draw, so call sites read in draw order:
/// `Text::new(surface, "on", x, y).color(c).draw()`.
///
/// Dropping the builder without calling [`Text::draw`] draws nothing.
pub struct Text<'a> {
    surface: &'a mut dyn RenderSurface,
    text: String,
    x: f32,
    y: f32,
    color: Argb,
    formatted: bool,
}

impl<'a> Text<'a> {
    pub fn new(
        surface: &'a mut dyn RenderSurface,
        text: impl Into<String>,
        x: f32,
        y: f32,
    ) -> Self {
        Self {
            surface,
            text: text.into(),
            x,
            y,
            color: Argb::WHITE,
            formatted: false,
        }
    }

    pub fn color(mut self, color: Argb) -> Self {
        self.color = color;
        self
    }

    pub fn formatted(mut self, formatted: bool) -> Self {
        self.formatted = formatted;
        self
    }

    pub fn draw(self) {
        self.surface
            .draw_text(&self.text, self.x, self.y, self.color, self.formatted);
    }
}

/// A key event after the host has mapped raw keycodes and modifier state.
///
/// The platform paste shortcut arrives as [`Key::Paste`]; keycodes the host
/// does not recognize are simply never delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Left,
    Right,
    Home,
    End,
    Backspace,
    Delete,
    Paste,
}

/// Clipboard text access. Failures surface as `None` (paste becomes a no-op).
pub trait ClipboardAccess {
    fn contents(&mut self) -> Option<String>;
}

/// Fire-and-forget sound cues.
pub trait SoundCue {
    /// Played when a text input gains selection.
    fn play_select(&mut self);
}

/// A [`SoundCue`] that stays silent.
pub struct NoSound;

impl SoundCue for NoSound {
    fn play_select(&mut self) {}
}

/// Text persistence, one file per owning module.
pub trait SettingsStore {
    fn read_text(&self, module: &str, file: &str) -> Result<Option<String>>;
    fn write_text(&mut self, module: &str, file: &str, content: &str) -> Result<()>;
}
