//! The run log: a timestamped, append-only record of one scrubbing run,
//! mirrored to the console.

use std::fmt;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

use crate::catalog::TagField;
use crate::scrub::Outcome;

/// Timestamp format used inside log lines.
const LINE_STAMP: &str = "%Y-%m-%d %H:%M:%S";

/// Append-only log artifact named after the run start time.
///
/// The file is opened and closed for every line so an externally killed run
/// still leaves a faithful record of every completed file. Write failures
/// here are fatal by design and propagate to the caller.
pub struct RunLog {
    path: PathBuf,
    echo: bool,
}

impl RunLog {
    pub fn create(dir: &Path, started: DateTime<Local>, echo: bool) -> Self {
        let name = format!("Clear_metadata_{}.log", started.format("%Y%m%d_%H%M%S"));
        Self {
            path: dir.join(name),
            echo,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one line and echo it to stdout.
    pub fn line(&self, message: &str) -> io::Result<()> {
        if self.echo {
            println!("{message}");
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{message}")
    }
}

/// Selection-table line for the pre-run header.
pub fn selection_line(field: &TagField, selected: bool) -> String {
    let verdict = if selected { "to be cleared" } else { "no changes" };
    format!("{} - {}", field.name, verdict)
}

/// Completion line with the run-end timestamp.
pub fn completion_line(finished: DateTime<Local>) -> String {
    format!("Clear metadata done at {}", finished.format(LINE_STAMP))
}

/// One processed file, ready for the log. Created once per file, in
/// processing order, and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct OutcomeRecord {
    pub index: usize,
    pub total: usize,
    pub file_name: String,
    pub outcome: Outcome,
}

impl fmt::Display for OutcomeRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{} - '{}' - ", self.index, self.total, self.file_name)?;
        match &self.outcome {
            Outcome::Modified { at } => write!(f, "Modified at {}", at.format(LINE_STAMP)),
            Outcome::Unchanged => write!(f, "No changes made"),
            Outcome::Failed { detail } => write!(f, "Error: {detail}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::fs;
    use tempfile::tempdir;

    fn stamp() -> DateTime<Local> {
        Local.with_ymd_and_hms(2025, 3, 14, 9, 26, 53).unwrap()
    }

    #[test]
    fn log_file_is_named_after_the_run_start() {
        let dir = tempdir().unwrap();
        let log = RunLog::create(dir.path(), stamp(), false);
        assert_eq!(
            log.path().file_name().and_then(|n| n.to_str()),
            Some("Clear_metadata_20250314_092653.log")
        );
    }

    #[test]
    fn lines_are_appended_in_order() {
        let dir = tempdir().unwrap();
        let log = RunLog::create(dir.path(), stamp(), false);

        log.line("Clear metadata").unwrap();
        log.line("Tracks: (total 2)").unwrap();

        let contents = fs::read_to_string(log.path()).unwrap();
        assert_eq!(contents, "Clear metadata\nTracks: (total 2)\n");
    }

    #[test]
    fn outcome_records_render_the_three_statuses() {
        let modified = OutcomeRecord {
            index: 1,
            total: 3,
            file_name: "a.mp3".into(),
            outcome: Outcome::Modified { at: stamp() },
        };
        assert_eq!(
            modified.to_string(),
            "1/3 - 'a.mp3' - Modified at 2025-03-14 09:26:53"
        );

        let unchanged = OutcomeRecord {
            index: 2,
            total: 3,
            file_name: "b.mp3".into(),
            outcome: Outcome::Unchanged,
        };
        assert_eq!(unchanged.to_string(), "2/3 - 'b.mp3' - No changes made");

        let failed = OutcomeRecord {
            index: 3,
            total: 3,
            file_name: "c.mp3".into(),
            outcome: Outcome::Failed {
                detail: "permission denied".into(),
            },
        };
        assert_eq!(
            failed.to_string(),
            "3/3 - 'c.mp3' - Error: permission denied"
        );
    }

    #[test]
    fn selection_lines_spell_out_the_verdict() {
        let field = TagField {
            frame_id: "TIT2",
            name: "Title",
        };
        assert_eq!(selection_line(&field, true), "Title - to be cleared");
        assert_eq!(selection_line(&field, false), "Title - no changes");
    }

    #[test]
    fn completion_line_carries_the_timestamp() {
        assert_eq!(
            completion_line(stamp()),
            "Clear metadata done at 2025-03-14 09:26:53"
        );
    }
}
