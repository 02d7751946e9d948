//! The six control variants and their shared update/click/draw contract.
//!
//! Each widget is a self-contained state machine: persisted data fields plus
//! a presentation record (`anim`) that is mutated every frame while the panel
//! is open and never serialized. Dispatch is a closed match over [`Setting`].

mod button;
mod color_picker;
mod slider;
mod string_selector;
mod text_input;
mod toggle;

pub use button::Button;
pub use color_picker::ColorPicker;
pub use slider::Slider;
pub use string_selector::StringSelector;
pub use text_input::TextInput;
pub use toggle::Toggle;

use crate::actions::ActionRegistry;
use crate::color::Argb;
use crate::ease::ease;
use crate::geometry::{Point, Rect};
use crate::host::{ClipboardAccess, Key, RenderSurface, SoundCue};

/// Alpha at which a row is fully visible and therefore interactive.
///
/// [`ease`] clamps onto its target, so a fading-in row reaches exactly 255
/// and the gate opens; anything mid-fade (including every unselected tab's
/// overlapping column) rejects hover and clicks.
pub(crate) const OPAQUE: f32 = 255.0;

/// Read-only geometry handed to `draw`.
#[derive(Debug, Clone, Copy)]
pub struct DrawCtx {
    /// Row width, i.e. the owning panel's width.
    pub width: f32,
    /// Accent color for highlighted chrome.
    pub accent: Argb,
}

/// Capabilities handed to input handlers: panel width for hit geometry, a
/// save request flag, and the action/clipboard/sound collaborators.
///
/// This replaces the original design's mutable back-reference to the owning
/// container; widgets can request persistence but cannot reach the panel.
pub struct PanelCtx<'a> {
    pub(crate) width: f32,
    pub(crate) dirty: &'a mut bool,
    pub(crate) actions: &'a mut ActionRegistry,
    pub(crate) clipboard: &'a mut dyn ClipboardAccess,
    pub(crate) sound: &'a mut dyn SoundCue,
}

impl PanelCtx<'_> {
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Flag that a data value changed; the panel saves once dispatch returns.
    pub fn request_save(&mut self) {
        *self.dirty = true;
    }
}

/// Per-row presentation state every variant carries: the position recorded at
/// the last draw (the anchor for hit testing) and the hover highlight.
#[derive(Debug, Clone, Default)]
pub(crate) struct RowAnim {
    pub pos: Point,
    pub hover: bool,
    pub hover_alpha: f32,
    pub hover_height: f32,
}

impl RowAnim {
    /// Ease the hover highlight toward its raised or rest shape.
    pub fn advance(&mut self, raised: f32) {
        if self.hover {
            self.hover_alpha = ease(self.hover_alpha, 130.0, 10.0, 1.0);
            self.hover_height = ease(self.hover_height, raised, 10.0, 0.1);
        } else {
            self.hover_alpha = ease(self.hover_alpha, 0.0, 10.0, 1.0);
            self.hover_height = ease(self.hover_height, 0.0, 10.0, 0.1);
        }
    }

    /// Draw-time prologue: record the row position and recompute hover
    /// against the row rectangle, gated on full opacity.
    pub fn begin(&mut self, mouse: Point, x: f32, y: f32, width: f32, row_h: f32, alpha: f32) {
        self.pos = Point::new(x, y);
        self.hover = Rect::new(x - 5.0, y, width, row_h).contains(mouse) && alpha >= OPAQUE;
    }

    /// The hover highlight bar, expanding vertically around `midline`.
    pub fn highlight(&self, surface: &mut dyn RenderSurface, x: f32, width: f32, midline: f32) {
        surface.fill_rect(
            Argb::of(0.0, 0.0, 0.0, self.hover_alpha),
            Rect::new(
                x - 5.0,
                self.pos.y + midline - self.hover_height,
                width,
                self.hover_height * 2.0,
            ),
        );
    }
}

/// A settings control: the closed sum over the six variants.
#[derive(Debug, Clone)]
pub enum Setting {
    Toggle(Toggle),
    Slider(Slider),
    ColorPicker(ColorPicker),
    StringSelector(StringSelector),
    Button(Button),
    TextInput(TextInput),
}

impl Setting {
    /// Serialization tag, also used in diagnostics.
    pub fn type_tag(&self) -> &'static str {
        match self {
            Setting::Toggle(_) => "toggle",
            Setting::Slider(_) => "slider",
            Setting::ColorPicker(_) => "color_picker",
            Setting::StringSelector(_) => "string_selector",
            Setting::Button(_) => "button",
            Setting::TextInput(_) => "text_input",
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Setting::Toggle(w) => &w.name,
            Setting::Slider(w) => &w.name,
            Setting::ColorPicker(w) => &w.name,
            Setting::StringSelector(w) => &w.name,
            Setting::Button(w) => &w.name,
            Setting::TextInput(w) => &w.name,
        }
    }

    pub fn hidden(&self) -> bool {
        match self {
            Setting::Toggle(w) => w.hidden(),
            Setting::Slider(w) => w.hidden(),
            Setting::ColorPicker(w) => w.hidden(),
            Setting::StringSelector(w) => w.hidden(),
            Setting::Button(w) => w.hidden(),
            Setting::TextInput(w) => w.hidden(),
        }
    }

    pub fn set_hidden(&mut self, hidden: bool) -> &mut Self {
        match self {
            Setting::Toggle(w) => {
                w.set_hidden(hidden);
            }
            Setting::Slider(w) => {
                w.set_hidden(hidden);
            }
            Setting::ColorPicker(w) => {
                w.set_hidden(hidden);
            }
            Setting::StringSelector(w) => {
                w.set_hidden(hidden);
            }
            Setting::Button(w) => {
                w.set_hidden(hidden);
            }
            Setting::TextInput(w) => {
                w.set_hidden(hidden);
            }
        }
        self
    }

    /// Advance animation-only state one frame. Never mutates values.
    pub fn update(&mut self) {
        match self {
            Setting::Toggle(w) => w.update(),
            Setting::Slider(w) => w.update(),
            Setting::ColorPicker(w) => w.update(),
            Setting::StringSelector(w) => w.update(),
            Setting::Button(w) => w.update(),
            Setting::TextInput(w) => w.update(),
        }
    }

    /// Pointer click at `mouse`. Every variant hit-tests internally, so the
    /// panel dispatches to all of them without a per-type filter.
    pub fn click(&mut self, mouse: Point, ctx: &mut PanelCtx) {
        match self {
            Setting::Toggle(w) => w.click(mouse, ctx),
            Setting::Slider(w) => w.click(mouse, ctx),
            Setting::ColorPicker(w) => w.click(mouse, ctx),
            Setting::StringSelector(w) => w.click(mouse, ctx),
            Setting::Button(w) => w.click(mouse, ctx),
            Setting::TextInput(w) => w.click(mouse, ctx),
        }
    }

    /// Key dispatch; only the text input reacts.
    pub fn key(&mut self, key: Key, ctx: &mut PanelCtx) {
        if let Setting::TextInput(w) = self {
            w.key(key, ctx);
        }
    }

    /// Draw the row at `(x, y)` and return the vertical space consumed.
    #[allow(clippy::too_many_arguments)]
    pub fn draw(
        &mut self,
        mouse: Point,
        x: f32,
        y: f32,
        alpha: f32,
        ctx: &DrawCtx,
        surface: &mut dyn RenderSurface,
        selected: bool,
    ) -> f32 {
        match self {
            Setting::Toggle(w) => w.draw(mouse, x, y, alpha, ctx, surface),
            Setting::Slider(w) => w.draw(mouse, x, y, alpha, ctx, surface),
            Setting::ColorPicker(w) => w.draw(mouse, x, y, alpha, ctx, surface),
            Setting::StringSelector(w) => w.draw(mouse, x, y, alpha, ctx, surface, selected),
            Setting::Button(w) => w.draw(mouse, x, y, alpha, ctx, surface),
            Setting::TextInput(w) => w.draw(mouse, x, y, alpha, ctx, surface),
        }
    }

    pub fn is_color_picker(&self) -> bool {
        matches!(self, Setting::ColorPicker(_))
    }

    pub fn is_text_input(&self) -> bool {
        matches!(self, Setting::TextInput(_))
    }
}

impl From<Toggle> for Setting {
    fn from(w: Toggle) -> Self {
        Setting::Toggle(w)
    }
}

impl From<Slider> for Setting {
    fn from(w: Slider) -> Self {
        Setting::Slider(w)
    }
}

impl From<ColorPicker> for Setting {
    fn from(w: ColorPicker) -> Self {
        Setting::ColorPicker(w)
    }
}

impl From<StringSelector> for Setting {
    fn from(w: StringSelector) -> Self {
        Setting::StringSelector(w)
    }
}

impl From<Button> for Setting {
    fn from(w: Button) -> Self {
        Setting::Button(w)
    }
}

impl From<TextInput> for Setting {
    fn from(w: TextInput) -> Self {
        Setting::TextInput(w)
    }
}
