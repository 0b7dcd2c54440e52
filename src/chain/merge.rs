//! Collapsing unchainable idioms into placeholders.

use crate::bucket::{Bucket, BucketEntry, MergedPlaceholder};
use crate::idiom::Idiom;

/// Merge every idiom failing `rule` into one placeholder per key.
///
/// Returns a new bucket. Keys whose idioms all pass are copied unchanged;
/// otherwise the entries become the passed idioms in their original order
/// followed by a single placeholder holding the failed ones, truncated to
/// `limit` when `limit > 0`. Existing placeholders are not tested against
/// the rule and stay where they are, so merging is idempotent.
pub fn merge_by_rule<F>(bucket: &Bucket, rule: F, limit: i64) -> Bucket
where
    F: Fn(&Idiom) -> bool,
{
    bucket
        .iter()
        .map(|(key, entries)| {
            let mut passed = Vec::with_capacity(entries.len());
            let mut failed = Vec::new();

            for entry in entries {
                match entry {
                    BucketEntry::Idiom(idiom) if !rule(idiom) => failed.push(idiom.clone()),
                    _ => passed.push(entry.clone()),
                }
            }

            if !failed.is_empty() {
                passed.push(BucketEntry::Placeholder(MergedPlaceholder::truncated(
                    failed, limit,
                )));
            }
            (key.to_string(), passed)
        })
        .collect()
}

/// Merge the endings bucket: keep idioms that some other idiom can lead into.
///
/// An idiom in `endings` passes when its first character is itself a key of
/// `endings`.
pub fn merge_endings(endings: &Bucket, limit: i64) -> Bucket {
    merge_by_rule(endings, |idiom| endings.contains_key(idiom.first_char()), limit)
}

/// Merge the beginnings bucket: keep idioms that can lead into another idiom.
///
/// An idiom in `beginnings` passes when its last character is itself a key
/// of `beginnings`.
pub fn merge_beginnings(beginnings: &Bucket, limit: i64) -> Bucket {
    merge_by_rule(
        beginnings,
        |idiom| beginnings.contains_key(idiom.last_char()),
        limit,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bucket::CharBuckets;

    fn idiom(text: &str) -> Idiom {
        Idiom::parse(text).unwrap()
    }

    fn bucket_of(key: &str, texts: &[&str]) -> Bucket {
        let mut bucket = Bucket::new();
        for text in texts {
            bucket.push(key, BucketEntry::Idiom(idiom(text)));
        }
        bucket
    }

    #[test]
    fn test_all_passed_is_untouched() {
        let bucket = bucket_of("一", &["一心一意", "一马当先"]);
        let merged = merge_by_rule(&bucket, |_| true, 10);
        assert_eq!(merged, bucket);
    }

    #[test]
    fn test_failed_idioms_become_one_placeholder() {
        let bucket = bucket_of("一", &["一心一意", "一马当先", "一鸣惊人", "一石二鸟"]);
        let merged = merge_by_rule(&bucket, |i| i.as_str() == "一马当先", 10);

        let entries = merged.get("一").unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0], BucketEntry::Idiom(idiom("一马当先")));
        assert_eq!(entries[1].label(), "一心一意\n一鸣惊人\n一石二鸟");
    }

    #[test]
    fn test_truncation_counts_remainder_exactly() {
        let texts: Vec<String> = "甲乙丙丁戊己庚辛壬癸子丑"
            .chars()
            .map(|c| format!("{c}之一二"))
            .collect();
        let refs: Vec<&str> = texts.iter().map(String::as_str).collect();
        let bucket = bucket_of("二", &refs);

        let merged = merge_by_rule(&bucket, |_| false, 5);
        let entries = merged.get("二").unwrap();
        assert_eq!(entries.len(), 1);

        match &entries[0] {
            BucketEntry::Placeholder(placeholder) => {
                assert_eq!(placeholder.idioms.len(), 5);
                assert_eq!(placeholder.omitted, 7);
                assert_eq!(placeholder.idioms[0].as_str(), "甲之一二");
                assert_eq!(placeholder.idioms[4].as_str(), "戊之一二");
            }
            other => panic!("Expected placeholder, got {other:?}"),
        }

        let label = entries[0].label();
        assert_eq!(label.lines().count(), 6);
        assert!(label.ends_with("（余下 7 个）"));
    }

    #[test]
    fn test_entry_count_is_passed_plus_one() {
        let bucket = bucket_of("一", &["一心一意", "一马当先", "一鸣惊人"]);
        let merged = merge_by_rule(&bucket, |i| i.as_str() != "一鸣惊人", 0);

        let entries = merged.get("一").unwrap();
        assert_eq!(entries.len(), 3);
        assert!(entries[2].is_placeholder());
        assert_eq!(entries[2].label(), "一鸣惊人");
    }

    #[test]
    fn test_merge_is_idempotent() {
        let set: Vec<Idiom> = ["一心一意", "意气风发", "发财致富", "富贵荣华", "一马当先", "先发制人"]
            .iter()
            .map(|t| idiom(t))
            .collect();
        let buckets = CharBuckets::index(&set);

        let endings = merge_endings(&buckets.endings, 1);
        let beginnings = merge_beginnings(&buckets.beginnings, 1);

        assert_eq!(merge_endings(&endings, 1), endings);
        assert_eq!(merge_beginnings(&beginnings, 1), beginnings);
    }

    #[test]
    fn test_merge_rules_on_chain() {
        let set: Vec<Idiom> = ["一心一意", "意气风发", "发财致富", "富贵荣华"]
            .iter()
            .map(|t| idiom(t))
            .collect();
        let buckets = CharBuckets::index(&set);

        // Nothing ends with 一, so 一心一意 cannot be reached.
        let endings = merge_endings(&buckets.endings, 10);
        assert!(endings.get("意").unwrap()[0].is_placeholder());
        assert!(!endings.get("发").unwrap()[0].is_placeholder());
        assert!(!endings.get("富").unwrap()[0].is_placeholder());
        assert!(!endings.get("华").unwrap()[0].is_placeholder());

        // Nothing starts with 华, so 富贵荣华 cannot continue.
        let beginnings = merge_beginnings(&buckets.beginnings, 10);
        assert!(!beginnings.get("一").unwrap()[0].is_placeholder());
        assert!(!beginnings.get("意").unwrap()[0].is_placeholder());
        assert!(!beginnings.get("发").unwrap()[0].is_placeholder());
        assert!(beginnings.get("富").unwrap()[0].is_placeholder());

        assert_eq!(endings.keys().collect::<Vec<_>>(), buckets.endings.keys().collect::<Vec<_>>());
    }
}
