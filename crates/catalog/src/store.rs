//! Persistent key-value binding over the local state directory.
//!
//! A [`PersistentSlot`] is a two-way binding between one named slot of
//! durable local storage (a JSON file per key) and an in-memory value.
//! The slot re-hydrates on creation and re-persists on every change.
//!
//! # Contract
//!
//! Neither the read nor the write path ever returns an error to the caller.
//! A missing or corrupted file falls back to the supplied default; a failed
//! write is logged and absorbed. In both cases the in-memory value stays
//! authoritative for the session, so the binding degrades to memory-only
//! behavior on any storage fault.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

/// One named slot of durable local storage bound to an in-memory value.
#[derive(Debug)]
pub struct PersistentSlot<T> {
    key: String,
    path: PathBuf,
    value: T,
}

impl<T> PersistentSlot<T>
where
    T: Serialize + DeserializeOwned,
{
    /// Open the slot named `key` under `state_dir`.
    ///
    /// Reads and deserializes the stored value if present; falls back to
    /// `default` when the file is absent or unreadable.
    pub fn open(state_dir: &Path, key: &str, default: T) -> Self {
        let path = state_dir.join(format!("{key}.json"));
        let value = read_slot(&path, key).unwrap_or(default);

        Self {
            key: key.to_string(),
            path,
            value,
        }
    }

    /// Borrow the current in-memory value.
    pub const fn get(&self) -> &T {
        &self.value
    }

    /// Replace the value and write it through to storage.
    pub fn set(&mut self, value: T) {
        self.value = value;
        self.persist();
    }

    /// Mutate the value in place and write it through to storage.
    pub fn update(&mut self, f: impl FnOnce(&mut T)) {
        f(&mut self.value);
        self.persist();
    }

    /// Serialize the current value and rewrite the backing file.
    fn persist(&self) {
        let json = match serde_json::to_string(&self.value) {
            Ok(json) => json,
            Err(e) => {
                warn!(key = %self.key, error = %e, "Failed to serialize slot value");
                return;
            }
        };

        if let Some(parent) = self.path.parent()
            && let Err(e) = fs::create_dir_all(parent)
        {
            warn!(key = %self.key, error = %e, "Failed to create state directory");
            return;
        }

        if let Err(e) = fs::write(&self.path, json) {
            warn!(key = %self.key, error = %e, "Failed to write slot file");
        }
    }
}

/// Read and deserialize a slot file, logging (not raising) any fault.
fn read_slot<T: DeserializeOwned>(path: &Path, key: &str) -> Option<T> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!(key = %key, "No stored value, using default");
            return None;
        }
        Err(e) => {
            warn!(key = %key, error = %e, "Failed to read slot file, using default");
            return None;
        }
    };

    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!(key = %key, error = %e, "Stored value is corrupted, using default");
            None
        }
    }
}
