use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;
use std::path::PathBuf;

use tracing::debug;
use tracing::warn;

use crate::error::PrefsError;

pub const THEME_PREF_KEY: &str = "terminal-theme";
pub const LOCALE_PREF_KEY: &str = "language";

/// Opaque key-value storage for user preferences. Reads that fail behave like
/// a missing key; writes report errors but callers treat them as best-effort.
pub trait PreferenceStore: fmt::Debug + Send {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), PrefsError>;
}

#[derive(Debug, Default, Clone)]
pub struct MemoryPrefs {
    values: BTreeMap<String, String>,
}

impl MemoryPrefs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.values.insert(key.to_string(), value.to_string());
        self
    }
}

impl PreferenceStore for MemoryPrefs {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PrefsError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Preferences kept as a flat JSON object on disk. The whole file is
/// rewritten on every `set`.
#[derive(Debug)]
pub struct JsonFilePrefs {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl JsonFilePrefs {
    pub fn open(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let values = match load_values(&path) {
            Ok(values) => values,
            Err(err) => {
                warn!(path = %path.display(), %err, "ignoring unreadable preferences");
                BTreeMap::new()
            }
        };
        Self { path, values }
    }

    fn flush(&self) -> Result<(), PrefsError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let encoded = serde_json::to_vec_pretty(&self.values)?;
        std::fs::write(&self.path, encoded)?;
        Ok(())
    }
}

fn load_values(path: &Path) -> Result<BTreeMap<String, String>, PrefsError> {
    if !path.exists() {
        return Ok(BTreeMap::new());
    }
    let bytes = std::fs::read(path)?;
    Ok(serde_json::from_slice(&bytes)?)
}

impl PreferenceStore for JsonFilePrefs {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PrefsError> {
        self.values.insert(key.to_string(), value.to_string());
        self.flush()
    }
}

pub(crate) fn store_best_effort(prefs: &mut dyn PreferenceStore, key: &str, value: &str) {
    match prefs.set(key, value) {
        Ok(()) => debug!(key, value, "preference saved"),
        Err(err) => warn!(key, value, %err, "preference not saved"),
    }
}
