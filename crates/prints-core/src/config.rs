// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Application configuration.
//
// The config file is optional and read-only: prints never writes it. Every
// field has a default so a partial file only overrides what it names.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{PrintsError, Result};

/// Name of the config file inside the per-user config directory.
pub const CONFIG_FILE: &str = "config.json";

/// Well-known Adobe Acrobat / Reader installation paths on Windows.
pub const DEFAULT_ACROBAT_PATHS: &[&str] = &[
    r"C:\Program Files\Adobe\Acrobat DC\Acrobat\Acrobat.exe",
    r"C:\Program Files (x86)\Adobe\Acrobat Reader DC\Reader\AcroRd32.exe",
    r"C:\Program Files\Adobe\Acrobat Reader DC\Reader\AcroRd32.exe",
    r"C:\Program Files\Adobe\Acrobat\Acrobat.exe",
    r"C:\Program Files (x86)\Adobe\Acrobat\Acrobat.exe",
];

/// Tunables for the platform backends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// How long to wait after the shell print verb before the swapped
    /// default printer is restored (Windows fallback only).
    pub settle_delay_ms: u64,
    /// Acrobat / Reader executables to try, in order, before searching PATH.
    pub acrobat_paths: Vec<PathBuf>,
    /// Program that runs the shell "print" verb on Windows.
    pub shell_program: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            settle_delay_ms: 1000,
            acrobat_paths: DEFAULT_ACROBAT_PATHS.iter().map(PathBuf::from).collect(),
            shell_program: "powershell".into(),
        }
    }
}

impl AppConfig {
    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }

    /// Load configuration.
    ///
    /// An explicit path must exist and parse. Without one, the per-user file
    /// is used if present and valid; otherwise defaults apply.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => Ok(Self::from_default_location(default_config_path())),
        }
    }

    /// Per-user file, or defaults when it is missing or unparsable.
    fn from_default_location(path: Option<PathBuf>) -> Self {
        match path {
            Some(path) if path.is_file() => Self::from_file(&path).unwrap_or_else(|e| {
                warn!(error = %e, "ignoring per-user config file, using defaults");
                Self::default()
            }),
            _ => {
                debug!("no config file found, using defaults");
                Self::default()
            }
        }
    }

    /// Parse a JSON config file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path).map_err(|e| {
            PrintsError::Config(format!("cannot read {}: {e}", path.display()))
        })?;
        let config = serde_json::from_str(&data)
            .map_err(|e| PrintsError::Config(format!("{}: {e}", path.display())))?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }
}

/// `<config dir>/prints/config.json`, where the config dir is `APPDATA`,
/// `XDG_CONFIG_HOME`, or `$HOME/.config`, in that order.
pub fn default_config_path() -> Option<PathBuf> {
    config_dir_from(|key| std::env::var_os(key).map(PathBuf::from))
        .map(|dir| dir.join("prints").join(CONFIG_FILE))
}

fn config_dir_from(lookup: impl Fn(&str) -> Option<PathBuf>) -> Option<PathBuf> {
    if let Some(appdata) = lookup("APPDATA") {
        return Some(appdata);
    }
    if let Some(xdg) = lookup("XDG_CONFIG_HOME") {
        return Some(xdg);
    }
    lookup("HOME").map(|home| home.join(".config"))
}
