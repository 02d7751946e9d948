//! Animated settings overlay for scripted game-client mods.
//!
//! A mod author declares categories of typed controls (toggle, slider, color
//! picker, string selector, button, text input), hands them to a
//! [`SettingsPanel`], and wires the panel's `update`/`draw`/`click`/`drag`/
//! `key_type` methods into the host's event loop. The panel animates and
//! hit-tests every widget, and persists data values as pretty JSON through a
//! [`host::SettingsStore`].
//!
//! ```no_run
//! use overlay_settings::{Category, SettingsPanel};
//! use overlay_settings::host::NoSound;
//! use overlay_settings::storage::FileStore;
//! use overlay_settings::clipboard::SystemClipboard;
//! use overlay_settings::widgets::{Slider, Toggle};
//!
//! # fn main() -> anyhow::Result<()> {
//! let defaults = vec![Category::new(
//!     "Video",
//!     vec![
//!         Toggle::new("vsync", true).into(),
//!         Slider::new("fov", 90.0, 30.0, 120.0).into(),
//!     ],
//! )];
//!
//! let mut panel = SettingsPanel::new(
//!     "mymod",
//!     defaults,
//!     Box::new(FileStore::new()?),
//!     Box::new(SystemClipboard),
//!     Box::new(NoSound),
//! );
//! panel.load()?;
//! panel.open();
//! // per tick: panel.update(); panel.draw(mouse, &mut surface);
//! # Ok(())
//! # }
//! ```

pub mod actions;
pub mod category;
pub mod clipboard;
pub mod color;
pub mod ease;
pub mod geometry;
pub mod host;
pub mod panel;
pub mod persist;
#[cfg(feature = "sound")]
pub mod sound;
pub mod storage;
pub mod widgets;

pub use actions::ActionRegistry;
pub use category::Category;
pub use color::Argb;
pub use ease::ease;
pub use geometry::{Point, Rect};
pub use host::Key;
pub use panel::{SettingsPanel, SettingValue};
pub use widgets::Setting;
