//! Category: a named, ordered bag of settings.

use crate::widgets::Setting;

/// One tab's worth of settings. Pure data; the panel iterates it and the
/// persistence codec serializes it.
#[derive(Debug, Clone)]
pub struct Category {
    pub name: String,
    pub settings: Vec<Setting>,
}

impl Category {
    pub fn new(name: impl Into<String>, settings: Vec<Setting>) -> Self {
        Self {
            name: name.into(),
            settings,
        }
    }

    /// Find a setting by its label.
    pub fn setting(&self, name: &str) -> Option<&Setting> {
        self.settings.iter().find(|s| s.name() == name)
    }
}
