//! Idiom tokens and the loader that produces them.
//!
//! An [`Idiom`] is a phrase of exactly [`IDIOM_LENGTH`] characters. Characters
//! are extended grapheme clusters, so a multi-byte CJK character counts once.

pub mod loader;
pub mod sample;

use std::fmt;

use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

pub use loader::IdiomLoader;
pub use sample::sample_idioms;

/// Number of characters in an idiom.
pub const IDIOM_LENGTH: usize = 4;

/// A four-character idiom.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Idiom(String);

impl Idiom {
    /// Parse a raw line into an idiom.
    ///
    /// Surrounding whitespace is stripped first. Returns `None` unless the
    /// remaining text is exactly [`IDIOM_LENGTH`] characters long.
    pub fn parse(raw: &str) -> Option<Self> {
        let text = raw.trim();
        if character_count(text) == IDIOM_LENGTH {
            Some(Idiom(text.to_string()))
        } else {
            None
        }
    }

    /// The idiom text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The first character.
    pub fn first_char(&self) -> &str {
        self.0.graphemes(true).next().unwrap_or_default()
    }

    /// The last character.
    pub fn last_char(&self) -> &str {
        self.0.graphemes(true).next_back().unwrap_or_default()
    }
}

impl fmt::Display for Idiom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Idiom {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Count logical characters (extended grapheme clusters) in `text`.
pub fn character_count(text: &str) -> usize {
    text.graphemes(true).count()
}
