//! Bucket entries: literal idioms and merged placeholders.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::idiom::Idiom;

/// One entry in a bucket.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BucketEntry {
    /// A single idiom.
    Idiom(Idiom),
    /// Several idioms that cannot chain any further, collapsed into one.
    Placeholder(MergedPlaceholder),
}

impl BucketEntry {
    /// The display text of this entry.
    pub fn label(&self) -> String {
        match self {
            BucketEntry::Idiom(idiom) => idiom.as_str().to_string(),
            BucketEntry::Placeholder(placeholder) => placeholder.label(),
        }
    }

    /// The idiom, if this entry is a literal one.
    pub fn as_idiom(&self) -> Option<&Idiom> {
        match self {
            BucketEntry::Idiom(idiom) => Some(idiom),
            BucketEntry::Placeholder(_) => None,
        }
    }

    /// Check whether this entry is a placeholder.
    pub fn is_placeholder(&self) -> bool {
        matches!(self, BucketEntry::Placeholder(_))
    }
}

impl From<Idiom> for BucketEntry {
    fn from(idiom: Idiom) -> Self {
        BucketEntry::Idiom(idiom)
    }
}

impl fmt::Display for BucketEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// Idioms merged into a single display entry.
///
/// `idioms` holds the idioms that are shown; `omitted` counts the ones that
/// were cut off by the per-node limit.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MergedPlaceholder {
    pub idioms: Vec<Idiom>,
    pub omitted: usize,
}

impl MergedPlaceholder {
    /// Build a placeholder from failed idioms, keeping at most `limit` of them.
    ///
    /// A non-positive `limit` keeps every idiom.
    pub fn truncated(mut idioms: Vec<Idiom>, limit: i64) -> Self {
        let mut omitted = 0;
        if let Ok(limit) = usize::try_from(limit)
            && limit > 0
            && idioms.len() > limit
        {
            omitted = idioms.len() - limit;
            idioms.truncate(limit);
        }
        MergedPlaceholder { idioms, omitted }
    }

    /// Newline-joined idioms, followed by a remainder marker when truncated.
    pub fn label(&self) -> String {
        let mut lines: Vec<String> = self.idioms.iter().map(|i| i.as_str().to_string()).collect();
        if self.omitted > 0 {
            lines.push(remainder_marker(self.omitted));
        }
        lines.join("\n")
    }
}

/// The marker appended after a truncated idiom list.
pub fn remainder_marker(omitted: usize) -> String {
    format!("（余下 {omitted} 个）")
}
