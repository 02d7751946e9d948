//! Named action registry for button callbacks.
//!
//! The persisted file stores only a stable action id; the live closure is
//! registered here by the mod author before `load()`. An id that never gets
//! registered leaves its button disabled instead of executing anything.

use std::collections::HashMap;

use tracing::warn;

/// Author-supplied table mapping action ids to zero-argument callbacks.
#[derive(Default)]
pub struct ActionRegistry {
    actions: HashMap<String, Box<dyn FnMut()>>,
}

impl ActionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) the callback for `id`.
    pub fn register(&mut self, id: impl Into<String>, action: impl FnMut() + 'static) {
        self.actions.insert(id.into(), Box::new(action));
    }

    pub fn contains(&self, id: &str) -> bool {
        self.actions.contains_key(id)
    }

    /// Invoke the callback bound to `id`. Returns `false` (with a diagnostic)
    /// when no callback is registered.
    pub fn run(&mut self, id: &str) -> bool {
        match self.actions.get_mut(id) {
            Some(action) => {
                action();
                true
            }
            None => {
                warn!("no action registered for id '{}'", id);
                false
            }
        }
    }
}

impl std::fmt::Debug for ActionRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActionRegistry")
            .field("ids", &self.actions.keys().collect::<Vec<_>>())
            .finish()
    }
}
