//! Per-file tag removal engine.
//!
//! Every file is handled in isolation: read the ID3 container, drop the
//! frames that are both selected and present, and commit everything in one
//! save. A file that was not modified is not written at all, so re-running
//! the same selection over an already-clean tree is a pure read pass.

use std::path::Path;

use chrono::{DateTime, Local};
use id3::{Error, ErrorKind, Tag, TagLike};

use crate::catalog::TagField;
use crate::prompt::Selection;

/// Result of processing one file. Failures are fully localized here; the
/// driver keeps going regardless of how an individual file fared.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Modified { at: DateTime<Local> },
    Unchanged,
    Failed { detail: String },
}

/// Strip every selected-and-present catalog field from the file at `path`.
pub fn scrub_file(path: &Path, fields: &[TagField], selection: &Selection) -> Outcome {
    match try_scrub(path, fields, selection) {
        Ok(Some(at)) => Outcome::Modified { at },
        Ok(None) => Outcome::Unchanged,
        Err(err) => Outcome::Failed {
            detail: err.to_string(),
        },
    }
}

fn try_scrub(
    path: &Path,
    fields: &[TagField],
    selection: &Selection,
) -> Result<Option<DateTime<Local>>, Error> {
    let mut tag = match Tag::read_from_path(path) {
        Ok(tag) => tag,
        // A file without a tag container is an empty container, not an error.
        Err(Error { kind: ErrorKind::NoTag, .. }) => Tag::new(),
        Err(err) => return Err(err),
    };
    let version = tag.version();

    let mut modified = false;
    for field in fields {
        if !selection.contains(field.frame_id) || !frame_present(&tag, field) {
            continue;
        }
        clear_frame(&mut tag, field);
        modified = true;
    }

    if !modified {
        return Ok(None);
    }

    // One batched commit per file; keep the container version we read.
    tag.write_to_path(path, version)?;
    Ok(Some(Local::now()))
}

fn frame_present(tag: &Tag, field: &TagField) -> bool {
    match field.user_text_description() {
        Some(desc) => tag.extended_texts().any(|t| t.description == desc),
        None => tag.get(field.frame_id).is_some(),
    }
}

fn clear_frame(tag: &mut Tag, field: &TagField) {
    match field.user_text_description() {
        Some(desc) => {
            tag.remove_extended_text(Some(desc), None);
        }
        None => {
            tag.remove(field.frame_id);
        }
    }
}
