//! Ordered string choice with sliding option labels and arrow zones.

use crate::color::Argb;
use crate::ease::ease;
use crate::geometry::{Point, Rect};
use crate::host::{RenderSurface, Text};

use super::{DrawCtx, PanelCtx, RowAnim};

const ROW_H: f32 = 25.0;
/// Horizontal distance between adjacent option labels.
const SLOT_W: f32 = 20.0;

#[derive(Debug, Clone)]
pub struct StringSelector {
    pub name: String,
    /// Index of the active option; always within `0..options.len()`.
    pub value: usize,
    pub options: Vec<String>,
    hidden: bool,
    anim: SelectorAnim,
}

#[derive(Debug, Clone, Default)]
struct SelectorAnim {
    row: RowAnim,
    /// Scroll offset easing toward `value * SLOT_W`.
    slide_x: f32,
    /// Per-option label alpha, fading the active index in and the rest out.
    label_alphas: Vec<f32>,
}

impl StringSelector {
    pub fn new(name: impl Into<String>, value: usize, options: Vec<String>) -> Self {
        let clamped = value.min(options.len().saturating_sub(1));
        Self {
            name: name.into(),
            value: clamped,
            anim: SelectorAnim {
                label_alphas: vec![0.0; options.len()],
                ..SelectorAnim::default()
            },
            options,
            hidden: false,
        }
    }

    pub fn hidden(&self) -> bool {
        self.hidden
    }

    pub fn set_hidden(&mut self, hidden: bool) -> &mut Self {
        self.hidden = hidden;
        self
    }

    /// The active option string.
    pub fn selected_option(&self) -> Option<&str> {
        self.options.get(self.value).map(String::as_str)
    }

    pub fn update(&mut self) {
        self.anim.slide_x = ease(self.anim.slide_x, self.value as f32 * SLOT_W, 10.0, 0.1);
        for (i, label_alpha) in self.anim.label_alphas.iter_mut().enumerate() {
            let target = if i == self.value { 255.0 } else { 0.0 };
            *label_alpha = ease(*label_alpha, target, 10.0, 1.0);
        }
        self.anim.row.advance(13.0);
    }

    /// Left half of the row steps backward, right half forward; both floor at
    /// the sequence bounds and persist only on an actual change.
    pub fn click(&mut self, mouse: Point, ctx: &mut PanelCtx) {
        let pos = self.anim.row.pos;
        let half = ctx.width() / 2.0;

        let left = Rect::new(pos.x - 5.0, pos.y, half, ROW_H);
        let right = Rect::new(pos.x - 5.0 + half, pos.y, half, ROW_H);

        if left.contains(mouse) && self.value > 0 {
            self.value -= 1;
            ctx.request_save();
        } else if right.contains(mouse) && self.value + 1 < self.options.len() {
            self.value += 1;
            ctx.request_save();
        }
    }

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
        self.anim.row.begin(mouse, x, y, ctx.width, ROW_H, alpha);
        self.anim.row.highlight(surface, x, ctx.width, 10.0);

        Text::new(surface, self.name.as_str(), x, y)
            .color(Argb::of(255.0, 255.0, 255.0, alpha))
            .draw();

        for (i, option) in self.options.iter().enumerate() {
            // Labels slide horizontally with the scroll offset; anything more
            // than one slot away wraps to the far edge instead of trailing
            // across the row.
            let mut x_off = i as f32 * -SLOT_W + self.anim.slide_x;
            if x_off > SLOT_W {
                x_off = -SLOT_W;
            } else if x_off < -SLOT_W {
                x_off = SLOT_W;
            }

            let label_alpha = self.anim.label_alphas.get(i).copied().unwrap_or(0.0);
            let shown_alpha = if selected && alpha > 0.0 {
                label_alpha
            } else {
                label_alpha.min(alpha)
            };

            let tw = surface.text_width(option, false);
            Text::new(
                surface,
                option.as_str(),
                x + x_off + ctx.width / 2.0 - 5.0 - tw / 2.0,
                y + 11.0,
            )
            .color(Argb::of(255.0, 255.0, 255.0, shown_alpha))
            .draw();
        }

        // Arrow zones.
        surface.fill_rect(Argb::of(0.0, 0.0, 0.0, alpha), Rect::new(x, y + 10.0, 25.0, 11.0));
        Text::new(surface, "<", x + 10.0, y + 12.0)
            .color(Argb::of(255.0, 255.0, 255.0, alpha))
            .draw();

        surface.fill_rect(
            Argb::of(0.0, 0.0, 0.0, alpha),
            Rect::new(x + ctx.width - 35.0, y + 10.0, 25.0, 11.0),
        );
        Text::new(surface, ">", x + ctx.width - 24.0, y + 12.0)
            .color(Argb::of(255.0, 255.0, 255.0, alpha))
            .draw();

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

    fn drawn_selector(value: usize) -> StringSelector {
        let options = vec!["A".to_string(), "B".to_string(), "C".to_string()];
        let mut selector = StringSelector::new("mode", value, options);
        let mut surface = RecordingSurface::new();
        selector.draw(
            Point::new(X + 10.0, Y + 5.0),
            X,
            Y,
            OPAQUE,
            &draw_ctx(),
            &mut surface,
            true,
        );
        selector
    }

    fn left_zone() -> Point {
        Point::new(X + 10.0, Y + 5.0)
    }

    fn right_zone() -> Point {
        Point::new(X + WIDTH - 20.0, Y + 5.0)
    }

    #[test]
    fn test_right_arrow_steps_and_saturates() {
        let mut selector = drawn_selector(0);
        let mut harness = CtxHarness::new();

        selector.click(right_zone(), &mut harness.ctx());
        selector.click(right_zone(), &mut harness.ctx());
        assert_eq!(selector.value, 2);
        assert!(harness.dirty);

        harness.dirty = false;
        selector.click(right_zone(), &mut harness.ctx());
        assert_eq!(selector.value, 2);
        assert!(!harness.dirty, "saturated step must not persist");
    }

    #[test]
    fn test_left_arrow_steps_and_floors_at_zero() {
        let mut selector = drawn_selector(1);
        let mut harness = CtxHarness::new();

        selector.click(left_zone(), &mut harness.ctx());
        assert_eq!(selector.value, 0);

        harness.dirty = false;
        selector.click(left_zone(), &mut harness.ctx());
        assert_eq!(selector.value, 0);
        assert!(!harness.dirty);
    }

    #[test]
    fn test_value_always_within_options() {
        let mut selector = drawn_selector(0);
        let mut harness = CtxHarness::new();

        for _ in 0..10 {
            selector.click(right_zone(), &mut harness.ctx());
        }
        for _ in 0..10 {
            selector.click(left_zone(), &mut harness.ctx());
        }
        assert!(selector.value < selector.options.len());
    }

    #[test]
    fn test_constructor_clamps_index() {
        let selector =
            StringSelector::new("mode", 99, vec!["only".to_string()]);
        assert_eq!(selector.value, 0);
        assert_eq!(selector.selected_option(), Some("only"));
    }

    #[test]
    fn test_update_eases_scroll_and_label_alphas() {
        let mut selector = drawn_selector(2);
        for _ in 0..300 {
            selector.update();
        }
        assert_eq!(selector.anim.slide_x, 2.0 * SLOT_W);
        assert_eq!(selector.anim.label_alphas[2], 255.0);
        assert_eq!(selector.anim.label_alphas[0], 0.0);
    }

    #[test]
    fn test_click_outside_row_is_ignored() {
        let mut selector = drawn_selector(1);
        let mut harness = CtxHarness::new();

        selector.click(Point::new(X + 10.0, Y + 40.0), &mut harness.ctx());
        assert_eq!(selector.value, 1);
        assert!(!harness.dirty);
    }
}
