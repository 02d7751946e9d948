//! File persistence collaborator: one dotfile per module under the user's
//! config directory.

use std::fs;
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use tracing::{debug, info};

use crate::host::SettingsStore;

/// Stores settings at `<base>/<module>/<file>`, creating directories on the
/// first write. The default base is the platform config directory.
pub struct FileStore {
    base: PathBuf,
}

impl FileStore {
    pub fn new() -> Result<Self> {
        let base = dirs::config_dir().ok_or_else(|| anyhow!("no config directory available"))?;
        Ok(Self { base })
    }

    pub fn with_base(base: PathBuf) -> Self {
        Self { base }
    }

    fn path(&self, module: &str, file: &str) -> PathBuf {
        self.base.join(module).join(file)
    }
}

impl SettingsStore for FileStore {
    fn read_text(&self, module: &str, file: &str) -> Result<Option<String>> {
        let path = self.path(module, file);
        if !path.exists() {
            debug!("no settings file at {:?}", path);
            return Ok(None);
        }
        let content =
            fs::read_to_string(&path).with_context(|| format!("reading {path:?}"))?;
        Ok(Some(content))
    }

    fn write_text(&mut self, module: &str, file: &str, content: &str) -> Result<()> {
        let path = self.path(module, file);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| format!("creating {parent:?}"))?;
        }
        fs::write(&path, content).with_context(|| format!("writing {path:?}"))?;
        info!("settings written to {:?}", path);
        Ok(())
    }
}
