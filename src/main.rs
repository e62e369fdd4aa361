use std::env;
use std::path::Path;

use anyhow::Context;
use chrono::Local;

mod catalog;
mod config;
mod prompt;
mod report;
mod scan;
mod scrub;

use config::Settings;
use prompt::StdinPrompt;
use report::{OutcomeRecord, RunLog};

fn file_name_of(path: &Path) -> String {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(str::to_string)
        .unwrap_or_else(|| path.display().to_string())
}

fn main() -> anyhow::Result<()> {
    let settings = Settings::load().context("failed to load configuration")?;
    settings.validate().map_err(anyhow::Error::msg)?;

    let mut input = StdinPrompt;

    // Pattern from the first argument when given, interactive prompt otherwise.
    let pattern = match env::args().nth(1) {
        Some(p) => p,
        None => prompt::ask_directory_pattern(&mut input)?,
    };

    let directories = match scan::resolve_directories(&pattern) {
        Ok(dirs) => dirs,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    let selection = prompt::resolve_selection(catalog::FIELDS, &mut input)?;

    let started = Local::now();
    let log_dir = match &settings.log.dir {
        Some(dir) => dir.clone(),
        None => env::current_dir().context("cannot resolve the current directory")?,
    };
    let log = RunLog::create(&log_dir, started, settings.log.echo);

    log.line("\nClear metadata")?;
    let scanned: Vec<String> = directories.iter().map(|d| d.display().to_string()).collect();
    log.line(&format!("Directories scanned: {}", scanned.join(", ")))?;
    for field in catalog::FIELDS {
        log.line(&report::selection_line(
            field,
            selection.contains(field.frame_id),
        ))?;
    }

    let files = scan::collect_files(&directories, &settings.scan);
    log.line(&format!("\nTracks: (total {})", files.len()))?;

    let total = files.len();
    for (i, path) in files.iter().enumerate() {
        let outcome = scrub::scrub_file(path, catalog::FIELDS, &selection);
        let record = OutcomeRecord {
            index: i + 1,
            total,
            file_name: file_name_of(path),
            outcome,
        };
        log.line(&record.to_string())?;
    }

    log.line(&report::completion_line(Local::now()))?;
    Ok(())
}
