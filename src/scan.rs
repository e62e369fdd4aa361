//! Directory pattern expansion and mp3 enumeration.

use std::path::{Path, PathBuf};

use glob::glob;
use thiserror::Error;
use walkdir::WalkDir;

use crate::config::ScanSettings;

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("invalid directory pattern: {0}")]
    Pattern(#[from] glob::PatternError),
    #[error("No matching directories found")]
    NoDirectories,
}

/// Expand a glob pattern (including `**`) into the existing directories it
/// matches. Matches that are not directories are silently dropped; zero
/// directory matches is fatal for the run.
pub fn resolve_directories(pattern: &str) -> Result<Vec<PathBuf>, ScanError> {
    let mut dirs: Vec<PathBuf> = Vec::new();
    for entry in glob(pattern)? {
        let Ok(path) = entry else { continue };
        if path.is_dir() {
            dirs.push(path);
        }
    }
    if dirs.is_empty() {
        return Err(ScanError::NoDirectories);
    }
    Ok(dirs)
}

fn matches_extension(path: &Path, settings: &ScanSettings) -> bool {
    let exts: Vec<String> = settings
        .extensions
        .iter()
        .map(|e| e.trim().trim_start_matches('.').to_ascii_lowercase())
        .filter(|e| !e.is_empty())
        .collect();

    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            exts.iter().any(|e| e == &ext)
        })
        .unwrap_or(false)
}

/// Walk every resolved directory in order and collect candidate files.
///
/// The walk order is walkdir's, stable within a run; the same sequence is
/// used for processing and for the index/total pairs in the log. Overlapping
/// directories are not deduplicated — a file enumerated twice is simply
/// processed twice, and the second pass is a no-op write-wise.
pub fn collect_files(dirs: &[PathBuf], settings: &ScanSettings) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = Vec::new();
    for dir in dirs {
        let mut walker = WalkDir::new(dir).follow_links(settings.follow_links);
        if let Some(d) = settings.max_depth {
            walker = walker.max_depth(d);
        }
        for entry in walker.into_iter().filter_map(Result::ok) {
            let path = entry.path();
            if path.is_file() && matches_extension(path, settings) {
                files.push(path.to_path_buf());
            }
        }
    }
    files
}
