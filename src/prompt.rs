//! Operator prompting and selection resolution.
//!
//! All interactive input flows through the [`PromptSource`] trait so tests
//! can drive the selection loop with a scripted list of answers instead of
//! stdin.

use std::collections::HashSet;
use std::io::{self, BufRead, Write};

use crate::catalog::TagField;

/// A blocking line-oriented input channel. `ask` shows a prompt and returns
/// the operator's raw answer line.
pub trait PromptSource {
    fn ask(&mut self, prompt: &str) -> io::Result<String>;
}

/// Prompts on stdout and reads answers from stdin.
pub struct StdinPrompt;

impl PromptSource for StdinPrompt {
    fn ask(&mut self, prompt: &str) -> io::Result<String> {
        let mut out = io::stdout();
        write!(out, "{prompt}")?;
        out.flush()?;

        let mut line = String::new();
        let read = io::stdin().lock().read_line(&mut line)?;
        if read == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "stdin closed while waiting for input",
            ));
        }
        Ok(line)
    }
}

/// The operator-chosen set of frame ids to strip. Built once per run,
/// immutable afterwards; always a subset of the catalog.
#[derive(Debug, Clone)]
pub struct Selection {
    remove: HashSet<&'static str>,
}

impl Selection {
    pub fn from_frame_ids<I>(ids: I) -> Self
    where
        I: IntoIterator<Item = &'static str>,
    {
        Self {
            remove: ids.into_iter().collect(),
        }
    }

    pub fn contains(&self, frame_id: &str) -> bool {
        self.remove.contains(frame_id)
    }

    pub fn is_empty(&self) -> bool {
        self.remove.is_empty()
    }
}

/// Only a bare, case-insensitive "y" affirms; everything else (including
/// "yes") means "do not remove".
fn is_affirmative(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("y")
}

/// One free-text prompt for the directory glob pattern.
pub fn ask_directory_pattern(source: &mut dyn PromptSource) -> io::Result<String> {
    let answer = source.ask("Enter the directory path to mp3 files (supports wildcards *): ")?;
    Ok(answer.trim().to_string())
}

/// One y/N question per catalog field, in catalog order. An input-channel
/// failure escalates to the caller; no file has been touched at that point.
pub fn resolve_selection(
    fields: &[TagField],
    source: &mut dyn PromptSource,
) -> io::Result<Selection> {
    println!("Select metadata to clear:");
    let mut remove = HashSet::new();
    for field in fields {
        let answer = source.ask(&format!("{} (y/N)? ", field.name))?;
        if is_affirmative(&answer) {
            remove.insert(field.frame_id);
        }
    }
    Ok(Selection { remove })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::FIELDS;
    use std::collections::VecDeque;

    /// Scripted stand-in for stdin: pops one canned answer per question.
    struct Script {
        answers: VecDeque<String>,
    }

    impl Script {
        fn new<const N: usize>(answers: [&str; N]) -> Self {
            Self {
                answers: answers.iter().map(|s| s.to_string()).collect(),
            }
        }
    }

    impl PromptSource for Script {
        fn ask(&mut self, _prompt: &str) -> io::Result<String> {
            self.answers.pop_front().ok_or_else(|| {
                io::Error::new(io::ErrorKind::UnexpectedEof, "script exhausted")
            })
        }
    }

    #[test]
    fn only_bare_y_is_affirmative() {
        assert!(is_affirmative("y"));
        assert!(is_affirmative("Y"));
        assert!(is_affirmative("  y \n"));
        assert!(!is_affirmative("yes"));
        assert!(!is_affirmative("n"));
        assert!(!is_affirmative(""));
        assert!(!is_affirmative("true"));
    }

    #[test]
    fn resolve_selection_asks_in_catalog_order_and_defaults_to_no() {
        // Title yes, Genre (last field) yes, everything else left alone.
        let mut script = Script::new(["y", "", "no", "n", "", "", "", "", "", "", "Y\n"]);
        let selection = resolve_selection(FIELDS, &mut script).unwrap();

        assert!(selection.contains("TIT2"));
        assert!(selection.contains("TCON"));
        assert!(!selection.contains("TIT3"));
        assert!(!selection.contains("TALB"));
        assert!(!selection.is_empty());
    }

    #[test]
    fn resolve_selection_all_negative_yields_empty_set() {
        let mut script = Script::new(["n"; 11]);
        let selection = resolve_selection(FIELDS, &mut script).unwrap();
        assert!(selection.is_empty());
    }

    #[test]
    fn resolve_selection_escalates_input_failure() {
        // Script runs dry after three answers; the resolver must surface that.
        let mut script = Script::new(["y", "n", "n"]);
        let err = resolve_selection(FIELDS, &mut script).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn ask_directory_pattern_trims_the_answer() {
        let mut script = Script::new(["  /music/**  \n"]);
        let pattern = ask_directory_pattern(&mut script).unwrap();
        assert_eq!(pattern, "/music/**");
    }
}
