//! Push button bound to a registered action id.
//!
//! The persisted tree stores only the id; if nothing is registered under it
//! at load time the panel disables the button rather than running anything.

use tracing::warn;

use crate::color::Argb;
use crate::geometry::{Point, Rect};
use crate::host::{RenderSurface, Text};

use super::{DrawCtx, PanelCtx, RowAnim};

const ROW_H: f32 = 15.0;

#[derive(Debug, Clone)]
pub struct Button {
    pub name: String,
    /// Caption drawn inside the button box.
    pub text: String,
    /// Action id resolved against the panel's [`crate::actions::ActionRegistry`].
    pub action: String,
    enabled: bool,
    hidden: bool,
    anim: ButtonAnim,
}

#[derive(Debug, Clone, Default)]
struct ButtonAnim {
    row: RowAnim,
    /// Caption width measured at the last draw; sizes the click box.
    label_w: f32,
}

impl Button {
    pub fn new(
        name: impl Into<String>,
        text: impl Into<String>,
        action: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
            action: action.into(),
            enabled: true,
            hidden: false,
            anim: ButtonAnim::default(),
        }
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) -> &mut Self {
        self.enabled = enabled;
        self
    }

    pub fn hidden(&self) -> bool {
        self.hidden
    }

    pub fn set_hidden(&mut self, hidden: bool) -> &mut Self {
        self.hidden = hidden;
        self
    }

    pub fn update(&mut self) {
        self.anim.row.advance(8.0);
    }

    /// Invoke the bound action when the click lands inside the button box.
    /// No persisted value, so no save request.
    pub fn click(&mut self, mouse: Point, ctx: &mut PanelCtx) {
        let pos = self.anim.row.pos;
        let hit = Rect::new(
            pos.x + ctx.width() - self.anim.label_w - 60.0,
            pos.y,
            self.anim.label_w + 50.0,
            13.0,
        );
        if !hit.contains(mouse) {
            return;
        }
        if !self.enabled {
            warn!("button '{}' is disabled (action '{}')", self.name, self.action);
            return;
        }
        ctx.actions.run(&self.action);
    }

    pub fn draw(
        &mut self,
        mouse: Point,
        x: f32,
        y: f32,
        alpha: f32,
        ctx: &DrawCtx,
        surface: &mut dyn RenderSurface,
    ) -> f32 {
        self.anim.row.begin(mouse, x, y, ctx.width, ROW_H, alpha);
        self.anim.row.highlight(surface, x, ctx.width, 5.0);

        Text::new(surface, self.name.as_str(), x, y)
            .color(Argb::of(255.0, 255.0, 255.0, alpha))
            .draw();

        let label_w = surface.text_width(&self.text, false);
        self.anim.label_w = label_w;

        surface.fill_rect(
            Argb::of(0.0, 0.0, 0.0, alpha),
            Rect::new(x + ctx.width - label_w - 60.0, y - 1.0, label_w + 50.0, 13.0),
        );

        let caption_alpha = if self.enabled { alpha } else { alpha / 2.0 };
        Text::new(surface, self.text.as_str(), x + ctx.width - label_w - 35.0, y + 2.0)
            .color(Argb::of(255.0, 255.0, 255.0, caption_alpha))
            .draw();

        ROW_H
    }
}
