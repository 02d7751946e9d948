//! On/off toggle rendered as a two-state track with a sliding knob.

use crate::color::Argb;
use crate::ease::ease;
use crate::geometry::{Point, Rect};
use crate::host::{RenderSurface, Text};

use super::{DrawCtx, PanelCtx, RowAnim};

const ROW_H: f32 = 15.0;
/// Knob travel between the off (0) and on (25) stops.
const KNOB_TRAVEL: f32 = 25.0;

#[derive(Debug, Clone)]
pub struct Toggle {
    pub name: String,
    pub value: bool,
    hidden: bool,
    anim: ToggleAnim,
}

#[derive(Debug, Clone)]
struct ToggleAnim {
    row: RowAnim,
    /// Knob x offset within the track, eased 0 -> 25.
    knob_x: f32,
    /// Color blend, 255 when off and 0 when on; drives both the track color
    /// (red -> green) and which of the on/off captions is emphasized.
    blend: f32,
}

impl Default for ToggleAnim {
    fn default() -> Self {
        Self {
            row: RowAnim::default(),
            knob_x: 0.0,
            blend: 255.0,
        }
    }
}

impl Toggle {
    pub fn new(name: impl Into<String>, value: bool) -> Self {
        Self {
            name: name.into(),
            value,
            hidden: false,
            anim: ToggleAnim::default(),
        }
    }

    pub fn hidden(&self) -> bool {
        self.hidden
    }

    pub fn set_hidden(&mut self, hidden: bool) -> &mut Self {
        self.hidden = hidden;
        self
    }

    pub fn update(&mut self) {
        if self.value {
            self.anim.knob_x = ease(self.anim.knob_x, KNOB_TRAVEL, 10.0, 0.1);
            self.anim.blend = ease(self.anim.blend, 0.0, 10.0, 1.0);
        } else {
            self.anim.knob_x = ease(self.anim.knob_x, 0.0, 10.0, 0.1);
            self.anim.blend = ease(self.anim.blend, 255.0, 10.0, 1.0);
        }
        self.anim.row.advance(8.0);
    }

    /// Flip the value when the click lands on the track at the row's right
    /// edge.
    pub fn click(&mut self, mouse: Point, ctx: &mut PanelCtx) {
        let pos = self.anim.row.pos;
        let hit = Rect::new(pos.x + ctx.width() - 60.0, pos.y, 50.0, 13.0);
        if hit.contains(mouse) {
            self.value = !self.value;
            ctx.request_save();
        }
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

        // Track and knob.
        surface.fill_rect(
            Argb::of(0.0, 0.0, 0.0, alpha),
            Rect::new(x + ctx.width - 60.0, y - 1.0, 50.0, 13.0),
        );
        surface.fill_rect(
            Argb::of(self.anim.blend, 255.0 - self.anim.blend, 0.0, alpha),
            Rect::new(x + ctx.width - 60.0 + self.anim.knob_x, y - 1.0, 25.0, 13.0),
        );

        Text::new(surface, "on", x + ctx.width - 28.0, y + 2.0)
            .color(Argb::of(self.anim.blend, self.anim.blend, self.anim.blend, alpha))
            .draw();
        Text::new(surface, "off", x + ctx.width - 55.0, y + 2.0)
            .color(Argb::of(
                255.0 - self.anim.blend,
                255.0 - self.anim.blend,
                255.0 - self.anim.blend,
                alpha,
            ))
            .draw();

        ROW_H
    }
}
