//! The settings panel controller: open/close lifecycle, tab bar, input
//! routing, per-frame animation and persistence triggering.

use anyhow::Result;
use tracing::{debug, info, warn};

use crate::actions::ActionRegistry;
use crate::category::Category;
use crate::color::Argb;
use crate::ease::ease;
use crate::geometry::{Point, Rect};
use crate::host::{ClipboardAccess, Key, RenderSurface, SettingsStore, SoundCue, Text};
use crate::persist;
use crate::widgets::{DrawCtx, PanelCtx, Setting};

/// Height of the tab header band above the panel body.
const TAB_H: f32 = 18.0;

/// Per-tab animation accumulators.
#[derive(Debug, Clone)]
struct TabAnim {
    /// Accent bar height, rising toward [`TAB_H`] while selected.
    rise: f32,
    /// Label color blend: 255 (white) unselected, 0 (black-on-accent) selected.
    text: f32,
    /// Alpha of this tab's widget column.
    alpha: f32,
    /// Vertical slide-in offset of the widget column.
    y: f32,
    /// Hover state recorded at the last draw; consumed by click dispatch.
    hovered: bool,
}

impl Default for TabAnim {
    fn default() -> Self {
        Self {
            rise: 0.0,
            text: 255.0,
            alpha: 0.0,
            y: 20.0,
            hovered: false,
        }
    }
}

/// Panel-level animation accumulators.
#[derive(Debug, Clone)]
struct PanelAnim {
    y: f32,
    alpha: f32,
}

impl Default for PanelAnim {
    fn default() -> Self {
        Self { y: 20.0, alpha: 0.0 }
    }
}

/// A value read back out of the tree via [`SettingsPanel::get_setting`].
#[derive(Debug, Clone, PartialEq)]
pub enum SettingValue {
    Bool(bool),
    Number(f32),
    Color([u8; 3]),
    Text(String),
}

/// Owns the category/widget tree, drives its animation each frame, routes
/// host input to the right widget, and persists data values through the
/// store.
///
/// Everything runs on the host's single event thread: `update()` completes
/// before `draw()` within a tick, and input dispatch is never concurrent
/// with either.
pub struct SettingsPanel {
    module: String,
    categories: Vec<Category>,
    defaults: Vec<Category>,
    selected: usize,
    open: bool,
    width: f32,
    height: f32,
    accent: Argb,
    anim: PanelAnim,
    tabs: Vec<TabAnim>,
    actions: ActionRegistry,
    store: Box<dyn SettingsStore>,
    clipboard: Box<dyn ClipboardAccess>,
    sound: Box<dyn SoundCue>,
}

impl SettingsPanel {
    /// Create a panel for `module` with the author-supplied default tree.
    /// Call [`SettingsPanel::register_action`] for every button id, then
    /// [`SettingsPanel::load`].
    pub fn new(
        module: impl Into<String>,
        defaults: Vec<Category>,
        store: Box<dyn SettingsStore>,
        clipboard: Box<dyn ClipboardAccess>,
        sound: Box<dyn SoundCue>,
    ) -> Self {
        let tabs = vec![TabAnim::default(); defaults.len()];
        Self {
            module: module.into(),
            categories: defaults.clone(),
            defaults,
            selected: 0,
            open: false,
            width: 250.0,
            height: 150.0,
            accent: Argb::from_u32(0xff42a7f4),
            anim: PanelAnim::default(),
            tabs,
            actions: ActionRegistry::new(),
            store,
            clipboard,
            sound,
        }
    }

    /// Accent color for the highlighted category tabs.
    pub fn accent(mut self, accent: Argb) -> Self {
        self.accent = accent;
        self
    }

    /// Panel body size when drawn.
    pub fn size(mut self, width: f32, height: f32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Bind a live callback to a button action id.
    pub fn register_action(&mut self, id: impl Into<String>, action: impl FnMut() + 'static) {
        self.actions.register(id, action);
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn selected_tab(&self) -> usize {
        self.selected
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn categories_mut(&mut self) -> &mut [Category] {
        &mut self.categories
    }

    /// Flag the panel open and rewind all animation accumulators to their
    /// closed-state values. The selected tab is kept.
    pub fn open(&mut self) {
        self.anim = PanelAnim::default();
        for tab in &mut self.tabs {
            *tab = TabAnim::default();
        }
        self.open = true;
    }

    /// Host-driven close; no animation, the panel simply stops drawing.
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Read a setting's current value by category and label. A string
    /// selector yields its active option string. Misses are logged and
    /// return `None`.
    pub fn get_setting(&self, category: &str, name: &str) -> Option<SettingValue> {
        for cat in &self.categories {
            if cat.name != category {
                continue;
            }
            for setting in &cat.settings {
                if setting.name() != name {
                    continue;
                }
                return match setting {
                    Setting::Toggle(w) => Some(SettingValue::Bool(w.value)),
                    Setting::Slider(w) => Some(SettingValue::Number(w.value)),
                    Setting::ColorPicker(w) => Some(SettingValue::Color(w.value)),
                    Setting::StringSelector(w) => w
                        .selected_option()
                        .map(|opt| SettingValue::Text(opt.to_string())),
                    Setting::TextInput(w) => Some(SettingValue::Text(w.text.clone())),
                    Setting::Button(_) => None,
                };
            }
        }
        warn!("no setting '{}' in category '{}'", name, category);
        None
    }

    /// Restore the author defaults and persist them.
    pub fn reset(&mut self) -> Result<()> {
        self.categories = self.defaults.clone();
        self.rebuild_tabs();
        self.resolve_actions();
        self.save()
    }

    /// Final save for the host's unload/shutdown signal.
    pub fn unload(&mut self) -> Result<()> {
        self.save()
    }

    /// Persist the current tree. Store I/O failures propagate; persistence
    /// is assumed reliable, so the host may treat them as fatal.
    pub fn save(&mut self) -> Result<()> {
        let content = persist::encode(&self.categories)?;
        self.store
            .write_text(&self.module, &persist::file_name(&self.module), &content)?;
        debug!("saved settings for module '{}'", self.module);
        Ok(())
    }

    /// Load the persisted tree, self-healing on missing or malformed
    /// content by reverting to the defaults and rewriting the file.
    pub fn load(&mut self) -> Result<()> {
        let file = persist::file_name(&self.module);
        let content = self.store.read_text(&self.module, &file)?;

        let restored = match content {
            Some(text) if !text.trim().is_empty() => match persist::decode(&text) {
                Ok(categories) => Some(categories),
                Err(err) => {
                    warn!(
                        "settings for '{}' are unreadable ({}); reverting to defaults",
                        self.module, err
                    );
                    None
                }
            },
            _ => None,
        };

        match restored {
            Some(categories) => {
                self.categories = categories;
                info!("loaded settings for module '{}'", self.module);
            }
            None => {
                self.categories = self.defaults.clone();
                self.save()?;
            }
        }

        self.rebuild_tabs();
        self.resolve_actions();
        Ok(())
    }

    fn rebuild_tabs(&mut self) {
        self.tabs = vec![TabAnim::default(); self.categories.len()];
        if self.selected >= self.categories.len() {
            self.selected = 0;
        }
    }

    /// Disable any button whose action id has no registered callback.
    fn resolve_actions(&mut self) {
        for category in &mut self.categories {
            for setting in &mut category.settings {
                if let Setting::Button(button) = setting {
                    let resolved = self.actions.contains(&button.action);
                    if !resolved {
                        warn!(
                            "button '{}' references unregistered action '{}'; disabling it",
                            button.name, button.action
                        );
                    }
                    button.set_enabled(resolved);
                }
            }
        }
    }

    /// Advance one animation frame. No-op while closed. Widgets in every
    /// category update, not just the selected one, so hover state on hidden
    /// tabs decays instead of freezing mid-fade.
    pub fn update(&mut self) {
        if !self.open {
            return;
        }

        self.anim.y = ease(self.anim.y, 0.0, 10.0, 0.1);
        self.anim.alpha = ease(self.anim.alpha, 255.0, 10.0, 0.1);

        for (i, tab) in self.tabs.iter_mut().enumerate() {
            if i == self.selected {
                tab.rise = ease(tab.rise, TAB_H, 10.0, 0.1);
                tab.text = ease(tab.text, 0.0, 10.0, 0.1);
                tab.alpha = ease(tab.alpha, 255.0, 10.0, 1.0);
                tab.y = ease(tab.y, 0.0, 10.0, 1.0);
            } else {
                tab.rise = ease(tab.rise, 0.0, 10.0, 0.1);
                tab.text = ease(tab.text, 255.0, 10.0, 0.1);
                tab.alpha = ease(tab.alpha, 0.0, 10.0, 1.0);
                tab.y = ease(tab.y, 20.0, 10.0, 1.0);
            }
        }

        for category in &mut self.categories {
            for setting in &mut category.settings {
                setting.update();
            }
        }
    }

    /// Route a pointer click. A hovered tab header wins over everything
    /// below it; otherwise every visible widget of the selected category
    /// gets the click and hit-tests internally.
    pub fn click(&mut self, mouse: Point) -> Result<()> {
        if !self.open {
            return Ok(());
        }

        for (i, tab) in self.tabs.iter().enumerate() {
            if tab.hovered {
                self.selected = i;
                return Ok(());
            }
        }

        self.dispatch(mouse, |_| true)
    }

    /// Route a pointer drag: continuous adjustment for color pickers in the
    /// selected category.
    pub fn drag(&mut self, mouse: Point) -> Result<()> {
        if !self.open {
            return Ok(());
        }
        self.dispatch(mouse, Setting::is_color_picker)
    }

    /// Route a key event to the text inputs of the selected category.
    pub fn key_type(&mut self, key: Key) -> Result<()> {
        if !self.open {
            return Ok(());
        }

        let Some(category) = self.categories.get_mut(self.selected) else {
            return Ok(());
        };

        let mut dirty = false;
        {
            let mut ctx = PanelCtx {
                width: self.width,
                dirty: &mut dirty,
                actions: &mut self.actions,
                clipboard: self.clipboard.as_mut(),
                sound: self.sound.as_mut(),
            };
            for setting in category.settings.iter_mut() {
                if setting.is_text_input() && !setting.hidden() {
                    setting.key(key, &mut ctx);
                }
            }
        }

        if dirty {
            self.save()?;
        }
        Ok(())
    }

    /// Click/drag dispatch to the selected category, saving afterwards if
    /// any widget requested it.
    fn dispatch(&mut self, mouse: Point, filter: fn(&Setting) -> bool) -> Result<()> {
        let Some(category) = self.categories.get_mut(self.selected) else {
            return Ok(());
        };

        let mut dirty = false;
        {
            let mut ctx = PanelCtx {
                width: self.width,
                dirty: &mut dirty,
                actions: &mut self.actions,
                clipboard: self.clipboard.as_mut(),
                sound: self.sound.as_mut(),
            };
            for setting in category.settings.iter_mut() {
                if filter(setting) && !setting.hidden() {
                    setting.click(mouse, &mut ctx);
                }
            }
        }

        if dirty {
            self.save()?;
        }
        Ok(())
    }

    /// Draw one frame: dim overlay, panel background, tab headers with their
    /// accent bars, and every tab's widget column (each gated by its own
    /// alpha, so only the selected tab is visually opaque). Records tab
    /// hover flags for the next click.
    pub fn draw(&mut self, mouse: Point, surface: &mut dyn RenderSurface) {
        if !self.open {
            return;
        }

        let x = surface.screen_width() / 2.0 - self.width / 2.0;
        let y = surface.screen_height() / 2.0 - self.height / 2.0 + self.anim.y;

        surface.fill_rect(
            Argb::of(0.0, 0.0, 0.0, self.anim.alpha / 3.0),
            Rect::new(0.0, 0.0, surface.screen_width(), surface.screen_height()),
        );
        surface.fill_rect(
            Argb::of(0.0, 0.0, 0.0, self.anim.alpha / 1.5),
            Rect::new(x, y, self.width, self.height),
        );

        let draw_ctx = DrawCtx {
            width: self.width,
            accent: self.accent,
        };

        let mut x_offset = 0.0;
        for (i, category) in self.categories.iter_mut().enumerate() {
            let tab_w = surface.text_width(&category.name, false) + 10.0;
            let tab = &mut self.tabs[i];

            tab.hovered =
                Rect::new(x + x_offset, y - TAB_H, tab_w, TAB_H).contains(mouse);

            surface.fill_rect(
                Argb::of(0.0, 0.0, 0.0, self.anim.alpha / 1.5),
                Rect::new(x + x_offset, y - TAB_H, tab_w, TAB_H),
            );
            // Accent bar rising from the panel edge over the header.
            surface.fill_rect(
                self.accent,
                Rect::new(x + x_offset, y - tab.rise, tab_w, tab.rise),
            );

            Text::new(surface, category.name.as_str(), x + 5.0 + x_offset, y + 5.0 - TAB_H)
                .color(Argb::of(tab.text, tab.text, tab.text, self.anim.alpha))
                .draw();

            let mut y_offset = 0.0;
            for setting in category.settings.iter_mut() {
                if setting.hidden() {
                    continue;
                }
                y_offset += setting.draw(
                    mouse,
                    x + 5.0,
                    y + 5.0 + y_offset + tab.y,
                    tab.alpha,
                    &draw_ctx,
                    surface,
                    i == self.selected,
                );
            }

            x_offset += tab_w;
        }
    }
}
