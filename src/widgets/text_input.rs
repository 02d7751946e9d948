//! Single-line text field with cursor editing, clipboard paste and a
//! blinking caret.
//!
//! The cursor is a character offset into `text`, always within
//! `0..=text.chars().count()`. Pixel positions for click-to-place come from
//! the character boundary table recorded at the last draw, so hit testing
//! never needs the renderer.

use crate::color::Argb;
use crate::geometry::{Point, Rect};
use crate::host::{Key, RenderSurface, Text};

use super::{DrawCtx, PanelCtx, RowAnim};

const ROW_H: f32 = 15.0;
/// Blink cycle length in frames; the caret shows for the first half.
const BLINK_PERIOD: u8 = 60;

#[derive(Debug, Clone)]
pub struct TextInput {
    pub name: String,
    pub text: String,
    selected: bool,
    /// Character offset of the caret.
    cursor: usize,
    /// Frame counter within the blink cycle, reset by every keystroke.
    blink: u8,
    hidden: bool,
    anim: InputAnim,
}

#[derive(Debug, Clone, Default)]
struct InputAnim {
    row: RowAnim,
    /// Pixel x of every character boundary (`chars + 1` entries), recorded at
    /// the last draw.
    char_edges: Vec<f32>,
}

impl TextInput {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
            selected: false,
            cursor: 0,
            blink: 0,
            hidden: false,
            anim: InputAnim::default(),
        }
    }

    pub fn hidden(&self) -> bool {
        self.hidden
    }

    pub fn set_hidden(&mut self, hidden: bool) -> &mut Self {
        self.hidden = hidden;
        self
    }

    pub fn selected(&self) -> bool {
        self.selected
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    fn byte_offset(&self, char_idx: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_idx)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len())
    }

    pub fn update(&mut self) {
        if self.selected {
            self.blink = (self.blink + 1) % BLINK_PERIOD;
        }
        self.anim.row.advance(8.0);
    }

    /// Select on a click within the hover region, placing the caret at the
    /// end of the text (first click, with a sound cue) or at the nearest
    /// recorded character boundary (re-click). A click elsewhere deselects.
    pub fn click(&mut self, mouse: Point, ctx: &mut PanelCtx) {
        if !self.anim.row.hover {
            self.selected = false;
            return;
        }

        if !self.selected {
            self.selected = true;
            self.cursor = self.char_count();
            self.blink = 0;
            ctx.sound.play_select();
            return;
        }

        self.cursor = self.nearest_boundary(mouse.x);
        self.blink = 0;
    }

    /// Index of the recorded boundary closest to pixel `px`; end of text when
    /// no draw has happened yet.
    fn nearest_boundary(&self, px: f32) -> usize {
        if self.anim.char_edges.is_empty() {
            return self.char_count();
        }
        let mut best = 0;
        let mut best_dist = f32::INFINITY;
        for (i, &edge) in self.anim.char_edges.iter().enumerate() {
            let dist = (edge - px).abs();
            if dist < best_dist {
                best = i;
                best_dist = dist;
            }
        }
        best.min(self.char_count())
    }

    /// Handle a key while selected. Navigation clamps to the text bounds,
    /// edits persist, and every keystroke restarts the blink cycle so the
    /// caret is immediately visible.
    pub fn key(&mut self, key: Key, ctx: &mut PanelCtx) {
        if !self.selected {
            return;
        }
        // Non-printable characters are a complete no-op.
        if let Key::Char(c) = key {
            if !(' '..='~').contains(&c) {
                return;
            }
        }
        self.blink = 0;

        match key {
            Key::Home => self.cursor = 0,
            Key::End => self.cursor = self.char_count(),
            Key::Left => self.cursor = self.cursor.saturating_sub(1),
            Key::Right => self.cursor = (self.cursor + 1).min(self.char_count()),
            Key::Backspace => {
                if self.cursor > 0 {
                    let at = self.byte_offset(self.cursor - 1);
                    self.text.remove(at);
                    self.cursor -= 1;
                    ctx.request_save();
                }
            }
            Key::Delete => {
                if self.cursor < self.char_count() {
                    let at = self.byte_offset(self.cursor);
                    self.text.remove(at);
                    ctx.request_save();
                }
            }
            Key::Paste => {
                if let Some(pasted) = ctx.clipboard.contents() {
                    let at = self.byte_offset(self.cursor);
                    self.text.insert_str(at, &pasted);
                    self.cursor += pasted.chars().count();
                    ctx.request_save();
                }
            }
            Key::Char(c) => {
                let at = self.byte_offset(self.cursor);
                self.text.insert(at, c);
                self.cursor += 1;
                ctx.request_save();
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
        self.anim.row.begin(mouse, x, y, ctx.width, ROW_H, alpha);
        self.anim.row.highlight(surface, x, ctx.width, 5.0);

        Text::new(surface, self.name.as_str(), x, y)
            .color(Argb::of(255.0, 255.0, 255.0, alpha))
            .draw();

        // Text right-aligned, ending 10px short of the row edge.
        let tw = surface.text_width(&self.text, false);
        let text_x = x + ctx.width - tw - 10.0;

        if self.selected {
            surface.fill_rect(
                Argb::of(0.0, 0.0, 0.0, alpha),
                Rect::new(text_x - 5.0, y - 1.0, tw + 10.0, 13.0),
            );
        }

        Text::new(surface, self.text.as_str(), text_x, y + 2.0)
            .color(Argb::of(255.0, 255.0, 255.0, alpha))
            .draw();

        // Record the boundary table for click-to-place.
        self.anim.char_edges.clear();
        self.anim.char_edges.push(text_x);
        for (byte, c) in self.text.char_indices() {
            let end = byte + c.len_utf8();
            self.anim
                .char_edges
                .push(text_x + surface.text_width(&self.text[..end], false));
        }

        if self.selected && self.blink < BLINK_PERIOD / 2 {
            let caret_x = self
                .anim
                .char_edges
                .get(self.cursor)
                .copied()
                .unwrap_or(text_x + tw);
            surface.fill_rect(
                Argb::of(255.0, 255.0, 255.0, alpha),
                Rect::new(caret_x, y, 1.0, 11.0),
            );
        }

        ROW_H
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::stubs::{RecordingSurface, CHAR_W};
    use crate::widgets::test_support::{draw_ctx, CtxHarness, WIDTH};
    use crate::widgets::OPAQUE;

    const X: f32 = 100.0;
    const Y: f32 = 50.0;

    fn draw_once(input: &mut TextInput, mouse: Point) {
        let mut surface = RecordingSurface::new();
        input.draw(mouse, X, Y, OPAQUE, &draw_ctx(), &mut surface);
    }

    fn selected_input(text: &str) -> (TextInput, CtxHarness) {
        let mut input = TextInput::new("nickname", text);
        let mut harness = CtxHarness::new();
        let over_row = Point::new(X + 10.0, Y + 5.0);
        draw_once(&mut input, over_row);
        input.click(over_row, &mut harness.ctx());
        assert!(input.selected());
        (input, harness)
    }

    #[test]
    fn test_first_click_selects_at_end_with_cue() {
        let (input, harness) = selected_input("hello");
        assert_eq!(input.cursor(), 5);
        assert_eq!(harness.sound.selects.get(), 1);
    }

    #[test]
    fn test_click_outside_deselects() {
        let (mut input, mut harness) = selected_input("hello");
        draw_once(&mut input, Point::new(0.0, 0.0));
        input.click(Point::new(0.0, 0.0), &mut harness.ctx());
        assert!(!input.selected());
    }

    #[test]
    fn test_reclick_places_cursor_at_nearest_boundary() {
        let (mut input, mut harness) = selected_input("hello");
        // Text is right-aligned: starts at X + WIDTH - 5*CHAR_W - 10.
        let text_x = X + WIDTH - 5.0 * CHAR_W - 10.0;
        let between_h_and_e = Point::new(text_x + CHAR_W, Y + 5.0);
        draw_once(&mut input, between_h_and_e);
        input.click(between_h_and_e, &mut harness.ctx());
        assert_eq!(input.cursor(), 1);
    }

    #[test]
    fn test_backspace_three_times() {
        let (mut input, mut harness) = selected_input("hello");
        for _ in 0..3 {
            input.key(Key::Backspace, &mut harness.ctx());
        }
        assert_eq!(input.text, "he");
        assert_eq!(input.cursor(), 2);
        assert!(harness.dirty);
    }

    #[test]
    fn test_backspace_at_start_is_noop() {
        let (mut input, mut harness) = selected_input("hi");
        input.key(Key::Home, &mut harness.ctx());
        harness.dirty = false;
        input.key(Key::Backspace, &mut harness.ctx());
        assert_eq!(input.text, "hi");
        assert_eq!(input.cursor(), 0);
        assert!(!harness.dirty);
    }

    #[test]
    fn test_delete_at_end_is_noop() {
        let (mut input, mut harness) = selected_input("hi");
        input.key(Key::Delete, &mut harness.ctx());
        assert_eq!(input.text, "hi");
        assert!(!harness.dirty);
    }

    #[test]
    fn test_delete_removes_at_cursor() {
        let (mut input, mut harness) = selected_input("abc");
        input.key(Key::Home, &mut harness.ctx());
        input.key(Key::Delete, &mut harness.ctx());
        assert_eq!(input.text, "bc");
        assert_eq!(input.cursor(), 0);
    }

    #[test]
    fn test_arrows_clamp_to_bounds() {
        let (mut input, mut harness) = selected_input("ab");
        for _ in 0..5 {
            input.key(Key::Right, &mut harness.ctx());
        }
        assert_eq!(input.cursor(), 2);
        for _ in 0..5 {
            input.key(Key::Left, &mut harness.ctx());
        }
        assert_eq!(input.cursor(), 0);
    }

    #[test]
    fn test_home_and_end() {
        let (mut input, mut harness) = selected_input("word");
        input.key(Key::Home, &mut harness.ctx());
        assert_eq!(input.cursor(), 0);
        input.key(Key::End, &mut harness.ctx());
        assert_eq!(input.cursor(), 4);
    }

    #[test]
    fn test_printable_insertion_advances_cursor() {
        let (mut input, mut harness) = selected_input("ac");
        input.key(Key::Left, &mut harness.ctx());
        input.key(Key::Char('b'), &mut harness.ctx());
        assert_eq!(input.text, "abc");
        assert_eq!(input.cursor(), 2);
        assert!(harness.dirty);
    }

    #[test]
    fn test_non_printable_is_ignored() {
        let (mut input, mut harness) = selected_input("ab");
        harness.dirty = false;
        input.key(Key::Char('\t'), &mut harness.ctx());
        input.key(Key::Char('\u{1b}'), &mut harness.ctx());
        assert_eq!(input.text, "ab");
        assert_eq!(input.cursor(), 2);
        assert!(!harness.dirty);
    }

    #[test]
    fn test_paste_inserts_at_cursor() {
        let (mut input, mut harness) = selected_input("ad");
        harness.clipboard.text = Some("bc".to_string());
        input.key(Key::Left, &mut harness.ctx());
        input.key(Key::Paste, &mut harness.ctx());
        assert_eq!(input.text, "abcd");
        assert_eq!(input.cursor(), 3);
        assert!(harness.dirty);
    }

    #[test]
    fn test_paste_with_empty_clipboard_is_noop() {
        let (mut input, mut harness) = selected_input("ab");
        harness.clipboard.text = None;
        harness.dirty = false;
        input.key(Key::Paste, &mut harness.ctx());
        assert_eq!(input.text, "ab");
        assert!(!harness.dirty);
    }

    #[test]
    fn test_keys_ignored_while_unselected() {
        let mut input = TextInput::new("nickname", "ab");
        let mut harness = CtxHarness::new();
        input.key(Key::Backspace, &mut harness.ctx());
        assert_eq!(input.text, "ab");
    }

    #[test]
    fn test_blink_cycles_and_resets_on_keystroke() {
        let (mut input, mut harness) = selected_input("ab");
        for _ in 0..40 {
            input.update();
        }
        assert!(input.blink >= 30, "caret should be in the hidden half");
        input.key(Key::Left, &mut harness.ctx());
        assert_eq!(input.blink, 0);

        for _ in 0..60 {
            input.update();
        }
        assert_eq!(input.blink, 0, "cycle wraps back to zero");
    }

    #[test]
    fn test_cursor_invariant_under_key_storm() {
        let (mut input, mut harness) = selected_input("seed");
        let keys = [
            Key::Left,
            Key::Backspace,
            Key::Char('x'),
            Key::Right,
            Key::Delete,
            Key::Home,
            Key::Backspace,
            Key::Char('y'),
            Key::End,
            Key::Delete,
        ];
        for _ in 0..20 {
            for &key in &keys {
                input.key(key, &mut harness.ctx());
                assert!(input.cursor() <= input.text.chars().count());
            }
        }
    }
}
