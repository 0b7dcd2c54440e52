//! Character buckets: idioms grouped by their first or last character.
//!
//! Keys iterate in lexicographic order, so everything derived from a bucket
//! (merging, top-N selection, chain enumeration) is deterministic.

pub mod entry;

use std::collections::BTreeMap;
use std::collections::btree_map;

use serde::{Deserialize, Serialize};

pub use entry::{BucketEntry, MergedPlaceholder};

use crate::idiom::Idiom;

/// A mapping from a character to the ordered entries sharing it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Bucket {
    entries: BTreeMap<String, Vec<BucketEntry>>,
}

impl Bucket {
    /// Create an empty bucket.
    pub fn new() -> Self {
        Bucket {
            entries: BTreeMap::new(),
        }
    }

    /// Append an entry under `key`.
    pub fn push<K: Into<String>>(&mut self, key: K, entry: BucketEntry) {
        self.entries.entry(key.into()).or_default().push(entry);
    }

    /// Entries under `key`, if present.
    pub fn get(&self, key: &str) -> Option<&[BucketEntry]> {
        self.entries.get(key).map(Vec::as_slice)
    }

    /// Check whether `key` is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Iterate over keys in order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Iterate over `(key, entries)` pairs in key order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.entries.iter(),
        }
    }

    /// Number of keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether there are no keys.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of entries across all keys.
    pub fn entry_count(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }
}

impl FromIterator<(String, Vec<BucketEntry>)> for Bucket {
    fn from_iter<T: IntoIterator<Item = (String, Vec<BucketEntry>)>>(iter: T) -> Self {
        Bucket {
            entries: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Bucket {
    type Item = (String, Vec<BucketEntry>);
    type IntoIter = btree_map::IntoIter<String, Vec<BucketEntry>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Bucket {
    type Item = (&'a str, &'a [BucketEntry]);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the keys and entries of a [`Bucket`].
pub struct Iter<'a> {
    inner: btree_map::Iter<'a, String, Vec<BucketEntry>>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a [BucketEntry]);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|(key, entries)| (key.as_str(), entries.as_slice()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

/// The two buckets built from one idiom set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharBuckets {
    /// Idioms keyed by their first character.
    pub beginnings: Bucket,
    /// Idioms keyed by their last character.
    pub endings: Bucket,
}

impl CharBuckets {
    /// Partition idioms by first and last character.
    ///
    /// Every idiom lands in exactly one key of each bucket, in iteration order.
    pub fn index<'a, I>(idioms: I) -> Self
    where
        I: IntoIterator<Item = &'a Idiom>,
    {
        let mut beginnings = Bucket::new();
        let mut endings = Bucket::new();

        for idiom in idioms {
            beginnings.push(idiom.first_char(), BucketEntry::Idiom(idiom.clone()));
            endings.push(idiom.last_char(), BucketEntry::Idiom(idiom.clone()));
        }

        CharBuckets {
            beginnings,
            endings,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn idioms(texts: &[&str]) -> Vec<Idiom> {
        texts.iter().map(|t| Idiom::parse(t).unwrap()).collect()
    }

    fn texts(entries: &[BucketEntry]) -> Vec<String> {
        entries.iter().map(|e| e.label()).collect()
    }

    #[test]
    fn test_index_chain_example() {
        let set = idioms(&["一心一意", "意气风发", "发财致富", "富贵荣华"]);
        let buckets = CharBuckets::index(&set);

        assert_eq!(buckets.beginnings.len(), 4);
        assert_eq!(texts(buckets.beginnings.get("一").unwrap()), vec!["一心一意"]);
        assert_eq!(texts(buckets.beginnings.get("意").unwrap()), vec!["意气风发"]);
        assert_eq!(texts(buckets.beginnings.get("发").unwrap()), vec!["发财致富"]);
        assert_eq!(texts(buckets.beginnings.get("富").unwrap()), vec!["富贵荣华"]);

        assert_eq!(buckets.endings.len(), 4);
        assert_eq!(texts(buckets.endings.get("意").unwrap()), vec!["一心一意"]);
        assert_eq!(texts(buckets.endings.get("发").unwrap()), vec!["意气风发"]);
        assert_eq!(texts(buckets.endings.get("富").unwrap()), vec!["发财致富"]);
        assert_eq!(texts(buckets.endings.get("华").unwrap()), vec!["富贵荣华"]);
    }

    #[test]
    fn test_index_keeps_iteration_order() {
        let set = idioms(&["一马当先", "一鸣惊人", "一心一意"]);
        let buckets = CharBuckets::index(&set);

        assert_eq!(
            texts(buckets.beginnings.get("一").unwrap()),
            vec!["一马当先", "一鸣惊人", "一心一意"]
        );
    }

    #[test]
    fn test_same_first_and_last_character() {
        let set = idioms(&["人云亦人"]);
        let buckets = CharBuckets::index(&set);

        assert_eq!(buckets.beginnings.get("人").unwrap().len(), 1);
        assert_eq!(buckets.endings.get("人").unwrap().len(), 1);
    }

    #[test]
    fn test_every_idiom_indexed_once_per_bucket() {
        let set = idioms(&["画蛇添足", "足智多谋", "谋事在人", "人山人海", "海阔天空"]);
        let buckets = CharBuckets::index(&set);

        assert_eq!(buckets.beginnings.entry_count(), set.len());
        assert_eq!(buckets.endings.entry_count(), set.len());
    }

    #[test]
    fn test_keys_are_ordered() {
        let mut bucket = Bucket::new();
        bucket.push("c", BucketEntry::Idiom(Idiom::parse("cccc").unwrap()));
        bucket.push("a", BucketEntry::Idiom(Idiom::parse("aaaa").unwrap()));
        bucket.push("b", BucketEntry::Idiom(Idiom::parse("bbbb").unwrap()));

        let keys: Vec<&str> = bucket.keys().collect();
        assert_eq!(keys, vec!["a", "b", "c"]);
        assert!(bucket.contains_key("b"));
        assert!(!bucket.contains_key("d"));
    }
}
