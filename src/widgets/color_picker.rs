//! RGB color picker: three channel tracks plus a composed swatch.
//!
//! The one widget wired into the panel's drag dispatch, so channels can be
//! scrubbed continuously as well as set by discrete clicks.

use crate::color::Argb;
use crate::geometry::{map_range, Point, Rect};
use crate::host::{RenderSurface, Text};

use super::{DrawCtx, PanelCtx, RowAnim};

const ROW_H: f32 = 25.0;
/// Vertical band (relative to the row) in which track clicks register.
const BAND_TOP: f32 = 14.0;
const BAND_BOTTOM: f32 = 19.0;
/// Gap between adjacent channel tracks.
const TRACK_GAP: f32 = 5.0;

#[derive(Debug, Clone)]
pub struct ColorPicker {
    pub name: String,
    /// Channel values, ordered R, G, B.
    pub value: [u8; 3],
    hidden: bool,
    anim: RowAnim,
}

impl ColorPicker {
    pub fn new(name: impl Into<String>, value: [u8; 3]) -> Self {
        Self {
            name: name.into(),
            value,
            hidden: false,
            anim: RowAnim::default(),
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
        self.anim.advance(13.0);
    }

    fn track_width(width: f32) -> f32 {
        width / 3.0 - 15.0
    }

    /// Left edge of channel track `i`, relative to the row x.
    fn track_start(i: usize, track_w: f32) -> f32 {
        i as f32 * (track_w + TRACK_GAP)
    }

    /// Set the channel whose track band contains the pointer. Serves both
    /// discrete clicks and continuous drag dispatch.
    pub fn click(&mut self, mouse: Point, ctx: &mut PanelCtx) {
        let pos = self.anim.pos;
        if mouse.y < pos.y + BAND_TOP || mouse.y > pos.y + BAND_BOTTOM {
            return;
        }

        let track_w = Self::track_width(ctx.width());
        for i in 0..3 {
            let start = pos.x + Self::track_start(i, track_w);
            if mouse.x > start && mouse.x < start + track_w {
                let raw = map_range(mouse.x, start, start + track_w, 0.0, 255.0);
                self.value[i] = raw.floor().clamp(0.0, 255.0) as u8;
                ctx.request_save();
                return;
            }
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
        self.anim.begin(mouse, x, y, ctx.width, ROW_H, alpha);
        self.anim.highlight(surface, x, ctx.width, 10.0);

        Text::new(surface, self.name.as_str(), x, y)
            .color(Argb::of(255.0, 255.0, 255.0, alpha))
            .draw();

        let track_w = Self::track_width(ctx.width);
        for i in 0..3 {
            let start = x + Self::track_start(i, track_w);
            let channel = self.value[i] as f32;
            let track_color = match i {
                0 => Argb::of(channel, 0.0, 0.0, alpha),
                1 => Argb::of(0.0, channel, 0.0, alpha),
                _ => Argb::of(0.0, 0.0, channel, alpha),
            };
            surface.fill_rect(track_color, Rect::new(start, y + 15.0, track_w, 3.0));
            surface.fill_rect(
                Argb::of(255.0, 255.0, 255.0, alpha),
                Rect::new(
                    start + map_range(channel, 0.0, 255.0, 0.0, track_w),
                    y + 14.0,
                    1.0,
                    5.0,
                ),
            );
        }

        // Composed swatch at the row's right edge.
        surface.fill_rect(
            Argb::of(
                self.value[0] as f32,
                self.value[1] as f32,
                self.value[2] as f32,
                alpha,
            ),
            Rect::new(x + ctx.width - 30.0, y, 20.0, 20.0),
        );

        ROW_H
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::stubs::RecordingSurface;
    use crate::widgets::test_support::{draw_ctx, CtxHarness, WIDTH};
    use crate::widgets::OPAQUE;

    const X: f32 = 100.0;
    const Y: f32 = 50.0;

    fn drawn_picker() -> ColorPicker {
        let mut picker = ColorPicker::new("accent", [10, 20, 30]);
        let mut surface = RecordingSurface::new();
        picker.draw(
            Point::new(X + 10.0, Y + 5.0),
            X,
            Y,
            OPAQUE,
            &draw_ctx(),
            &mut surface,
        );
        picker
    }

    #[test]
    fn test_click_sets_matching_channel() {
        let mut picker = drawn_picker();
        let mut harness = CtxHarness::new();
        let track_w = ColorPicker::track_width(WIDTH);

        // Middle of the red track, inside the vertical band.
        picker.click(
            Point::new(X + track_w / 2.0, Y + 16.0),
            &mut harness.ctx(),
        );
        assert_eq!(picker.value[0], 127);
        assert_eq!(picker.value[1], 20);
        assert!(harness.dirty);

        // Green track.
        let green_start = X + ColorPicker::track_start(1, track_w);
        picker.click(
            Point::new(green_start + track_w / 4.0, Y + 16.0),
            &mut harness.ctx(),
        );
        assert_eq!(picker.value[1], 63);

        // Blue track, near its right edge.
        let blue_start = X + ColorPicker::track_start(2, track_w);
        picker.click(
            Point::new(blue_start + track_w - 0.5, Y + 16.0),
            &mut harness.ctx(),
        );
        assert!(picker.value[2] > 250);
    }

    #[test]
    fn test_outside_vertical_band_is_ignored() {
        let mut picker = drawn_picker();
        let mut harness = CtxHarness::new();

        picker.click(Point::new(X + 10.0, Y + 5.0), &mut harness.ctx());
        picker.click(Point::new(X + 10.0, Y + 22.0), &mut harness.ctx());

        assert_eq!(picker.value, [10, 20, 30]);
        assert!(!harness.dirty);
    }

    #[test]
    fn test_channels_stay_in_range_under_drag_sweep() {
        let mut picker = drawn_picker();
        let mut harness = CtxHarness::new();

        // Sweep the whole row as a drag gesture would; channel math never
        // needs to clamp because u8 can't escape, but the floor mapping must
        // not panic or wrap at the edges.
        let mut mx = X - 20.0;
        while mx < X + WIDTH {
            picker.click(Point::new(mx, Y + 16.0), &mut harness.ctx());
            mx += 0.5;
        }
        // All channels touched by the sweep remain valid u8s by type.
        assert!(harness.dirty);
    }

    #[test]
    fn test_gap_between_tracks_is_dead() {
        let mut picker = drawn_picker();
        let mut harness = CtxHarness::new();
        let track_w = ColorPicker::track_width(WIDTH);

        // Between red and green tracks.
        picker.click(
            Point::new(X + track_w + TRACK_GAP / 2.0, Y + 16.0),
            &mut harness.ctx(),
        );
        assert_eq!(picker.value, [10, 20, 30]);
        assert!(!harness.dirty);
    }

    #[test]
    fn test_row_height() {
        let mut picker = ColorPicker::new("accent", [0, 0, 0]);
        let mut surface = RecordingSurface::new();
        let h = picker.draw(
            Point::new(0.0, 0.0),
            X,
            Y,
            OPAQUE,
            &draw_ctx(),
            &mut surface,
        );
        assert_eq!(h, 25.0);
    }
}
