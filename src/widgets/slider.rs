//! Numeric slider over a horizontal track.

use crate::color::Argb;
use crate::geometry::{map_range, Point, Rect};
use crate::host::{RenderSurface, Text};

use super::{DrawCtx, PanelCtx, RowAnim};

const ROW_H: f32 = 25.0;

#[derive(Debug, Clone)]
pub struct Slider {
    pub name: String,
    pub value: f32,
    pub min: f32,
    pub max: f32,
    /// Decimal places the value is rounded to on adjustment.
    pub round: u8,
    hidden: bool,
    anim: RowAnim,
}

impl Slider {
    pub fn new(name: impl Into<String>, value: f32, min: f32, max: f32) -> Self {
        Self {
            name: name.into(),
            value: value.clamp(min, max),
            min,
            max,
            round: 0,
            hidden: false,
            anim: RowAnim::default(),
        }
    }

    /// Number of decimal places to keep (default 0).
    pub fn with_round(mut self, round: u8) -> Self {
        self.round = round;
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
        self.anim.advance(13.0);
    }

    /// Adjust while the pointer is in the hover region: pointer x maps
    /// linearly onto `[min, max]`, clamping outside the track. Repeated click
    /// dispatch while the button is held gives drag-style adjustment.
    pub fn click(&mut self, mouse: Point, ctx: &mut PanelCtx) {
        if !self.anim.hover {
            return;
        }

        let track_w = ctx.width() - 10.0;
        let pos = self.anim.pos;
        if mouse.x > pos.x && mouse.x < pos.x + track_w {
            let raw = map_range(mouse.x, pos.x, pos.x + track_w, self.min, self.max);
            self.value = round_to(raw, self.round);
        } else if mouse.x <= pos.x {
            self.value = self.min;
        } else {
            self.value = self.max;
        }
        ctx.request_save();
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
        self.anim.begin(mouse, x, y, ctx.width, ROW_H, alpha);
        self.anim.highlight(surface, x, ctx.width, 10.0);

        Text::new(surface, self.name.as_str(), x, y)
            .color(Argb::of(255.0, 255.0, 255.0, alpha))
            .draw();

        let track_w = ctx.width - 10.0;
        surface.fill_rect(
            Argb::of(100.0, 100.0, 100.0, alpha),
            Rect::new(x, y + 15.0, track_w, 3.0),
        );
        surface.fill_rect(
            Argb::of(255.0, 255.0, 255.0, alpha),
            Rect::new(
                x + map_range(self.value, self.min, self.max, 0.0, track_w),
                y + 14.0,
                1.0,
                5.0,
            ),
        );

        let label = self.value_label();
        let label_w = surface.text_width(&label, false);
        Text::new(surface, label, x + ctx.width - label_w - 10.0, y)
            .color(Argb::of(255.0, 255.0, 255.0, alpha))
            .draw();

        ROW_H
    }

    fn value_label(&self) -> String {
        format!("{:.*}", self.round as usize, self.value)
    }
}

fn round_to(v: f32, digits: u8) -> f32 {
    let scale = 10f32.powi(digits as i32);
    (v * scale).round() / scale
}
