// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Settings file loading and saving.
//!
//! Settings live in a small JSON document in the per-user cache directory.
//! Reading never fails: anything unreadable is treated as an empty document.

use crate::constants::{CACHE_DIR_ENV, SETTINGS_FILE};
use crate::models::settings::PersistedState;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::sync::mpsc::{channel, Receiver, TryRecvError};

/// Location of the settings file.
pub fn cache_file_path() -> PathBuf {
    let dir = std::env::var_os(CACHE_DIR_ENV)
        .map(PathBuf::from)
        .or_else(dirs::cache_dir)
        .unwrap_or_else(std::env::temp_dir);
    dir.join(SETTINGS_FILE)
}

/// Read settings from `path`, falling back to defaults on any failure.
pub fn load(path: &Path) -> PersistedState {
    match read(path) {
        Ok(state) => {
            log::debug!("Restored settings from {}", path.display());
            state
        }
        Err(e) => {
            log::warn!("Couldn't restore settings ({:#}), so assuming they're blank", e);
            PersistedState::default()
        }
    }
}

fn read(path: &Path) -> Result<PersistedState> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let state = serde_json::from_str(&json)
        .with_context(|| format!("parsing {}", path.display()))?;
    Ok(state)
}

/// Write settings to `path`, replacing any previous contents.
pub fn save(path: &Path, state: &PersistedState) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }
    let json = serde_json::to_string_pretty(state)?;
    std::fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
    log::debug!("Saved settings to {}", path.display());
    Ok(())
}

/// A settings load running on a background thread.
///
/// Resolves exactly once, always with a usable state.
pub struct PendingLoad {
    receiver: Option<Receiver<PersistedState>>,
}

impl PendingLoad {
    /// Take the loaded settings if the background read has finished.
    ///
    /// Returns `Some` at most once.
    pub fn try_take(&mut self) -> Option<PersistedState> {
        let result = match self.receiver.as_ref()?.try_recv() {
            Ok(state) => state,
            Err(TryRecvError::Empty) => return None,
            // The loader thread died without sending; behave like a blank file.
            Err(TryRecvError::Disconnected) => PersistedState::default(),
        };
        self.receiver = None;
        Some(result)
    }

    pub fn is_resolved(&self) -> bool {
        self.receiver.is_none()
    }
}

/// Start reading settings from `path` without blocking the caller.
pub fn load_async(path: PathBuf) -> PendingLoad {
    let (sender, receiver) = channel();

    std::thread::spawn(move || {
        let _ = sender.send(load(&path));
    });

    PendingLoad { receiver: Some(receiver) }
}
