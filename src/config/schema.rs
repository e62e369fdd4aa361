use std::path::PathBuf;

use serde::Deserialize;

/// Top-level settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/tagsweep/config.toml` or
/// `~/.config/tagsweep/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `TAGSWEEP__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub scan: ScanSettings,
    pub log: LogSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScanSettings {
    /// File extensions to process (case-insensitive, without dot).
    pub extensions: Vec<String>,
    /// Whether to follow symlinks while walking directories.
    pub follow_links: bool,
    /// Optional cap on directory recursion depth.
    pub max_depth: Option<usize>,
}

impl Default for ScanSettings {
    fn default() -> Self {
        Self {
            extensions: vec!["mp3".into()],
            follow_links: false,
            max_depth: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    /// Directory the run log is created in. Defaults to the current
    /// working directory when unset.
    pub dir: Option<PathBuf>,
    /// Whether every log line is also echoed to stdout.
    pub echo: bool,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self { dir: None, echo: true }
    }
}
