//! Restricting a bucket to its busiest keys.

use crate::bucket::Bucket;

/// Number of keys kept when no explicit count is configured.
pub const DEFAULT_TOP_KEYS: usize = 7;

/// Keep only the `n` keys with the most entries.
///
/// Returns a new bucket and leaves the input untouched. Keys with equal entry
/// counts are ranked in lexicographic key order.
pub fn truncate_to_top(bucket: &Bucket, n: usize) -> Bucket {
    let mut ranked: Vec<(&str, usize)> = bucket
        .iter()
        .map(|(key, entries)| (key, entries.len()))
        .collect();
    // Stable sort keeps the bucket's key order among equal sizes.
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.truncate(n);

    ranked
        .into_iter()
        .filter_map(|(key, _)| bucket.get(key).map(|entries| (key.to_string(), entries.to_vec())))
        .collect()
}
