//! Curated table of the ID3 frames the scrubber offers to clear.
//!
//! These are the fields an operator plausibly wants wiped from a shared
//! library (titles, artists, ratings, comments...). Structural frames such
//! as UFID, APIC, PRIV and the URL frames are deliberately left out so a
//! run can never destroy album art or identifiers by accident.

/// One clearable metadata field: its wire-level frame id and the name shown
/// when prompting and logging.
///
/// Free-text frames use the namespaced form `TXXX:<description>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagField {
    pub frame_id: &'static str,
    pub name: &'static str,
}

impl TagField {
    /// For `TXXX:<description>` entries, the description part; `None` for
    /// plain frame ids.
    pub fn user_text_description(&self) -> Option<&'static str> {
        self.frame_id.strip_prefix("TXXX:")
    }
}

/// Declaration order drives both the prompting sequence and the selection
/// table in the run log, so keep it stable.
pub const FIELDS: &[TagField] = &[
    TagField { frame_id: "TIT2", name: "Title" },
    TagField { frame_id: "TIT3", name: "Subtitle/Description" },
    TagField { frame_id: "TXXX:Rating", name: "Rating" },
    TagField { frame_id: "COMM", name: "Comments" },
    TagField { frame_id: "TPE1", name: "Contributing Artist" },
    TagField { frame_id: "TPE2", name: "Album Artist" },
    TagField { frame_id: "TALB", name: "Album" },
    TagField { frame_id: "TYER", name: "Year (ID3v2.3)" },
    TagField { frame_id: "TDRC", name: "Year (ID3v2.4)" },
    TagField { frame_id: "TRCK", name: "Track Number" },
    TagField { frame_id: "TCON", name: "Genre" },
];
