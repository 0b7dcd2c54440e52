//! The chain graph: idioms linked through shared characters.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::bucket::{Bucket, BucketEntry};
use crate::chain::progress::ProgressObserver;

/// Kind of a node in the chain graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    /// A single idiom.
    Idiom,
    /// Several merged idioms.
    Placeholder,
    /// A connecting character.
    Character,
}

/// A node reference used by edges.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChainNode {
    pub label: String,
    pub kind: NodeKind,
}

impl ChainNode {
    fn entry(entry: &BucketEntry) -> Self {
        ChainNode {
            label: entry.label(),
            kind: if entry.is_placeholder() {
                NodeKind::Placeholder
            } else {
                NodeKind::Idiom
            },
        }
    }

    fn character(key: &str) -> Self {
        ChainNode {
            label: key.to_string(),
            kind: NodeKind::Character,
        }
    }
}

impl fmt::Display for ChainNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

/// One `ending -> character -> beginning` chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainLink {
    /// Entry whose last character is `character`.
    pub ending: BucketEntry,
    /// The shared character.
    pub character: String,
    /// Entry whose first character is `character`.
    pub beginning: BucketEntry,
}

/// A directed edge between two nodes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChainEdge {
    pub from: ChainNode,
    pub to: ChainNode,
}

/// The renderable chain graph.
///
/// Character nodes are listed once each, in the order they were first
/// reached. Links are kept in enumeration order and may repeat edges; the
/// renderer decides whether duplicates collapse.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainGraph {
    characters: Vec<String>,
    links: Vec<ChainLink>,
}

impl ChainGraph {
    /// Enumerate every chain between the two buckets.
    ///
    /// For each key of `beginnings`, each beginning entry is paired with each
    /// ending entry under the same key of `endings`. Keys missing from
    /// `endings` contribute nothing.
    pub fn build<P: ProgressObserver + ?Sized>(
        beginnings: &Bucket,
        endings: &Bucket,
        progress: &mut P,
    ) -> Self {
        let total = expected_links(beginnings, endings);
        progress.start(total);

        let mut characters = Vec::new();
        let mut seen = HashSet::new();
        let mut links = Vec::with_capacity(total);

        for (key, starting) in beginnings {
            let Some(ending) = endings.get(key) else {
                continue;
            };
            for beginning in starting {
                for end in ending {
                    progress.advance();
                    if seen.insert(key) {
                        characters.push(key.to_string());
                    }
                    links.push(ChainLink {
                        ending: end.clone(),
                        character: key.to_string(),
                        beginning: beginning.clone(),
                    });
                }
            }
        }

        progress.finish();
        ChainGraph { characters, links }
    }

    /// Connecting characters, in first-reached order.
    pub fn characters(&self) -> &[String] {
        &self.characters
    }

    /// All links, in enumeration order.
    pub fn links(&self) -> &[ChainLink] {
        &self.links
    }

    /// Number of links.
    pub fn link_count(&self) -> usize {
        self.links.len()
    }

    /// Check whether the graph has no links.
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// Every directed edge, two per link: `ending -> character` then
    /// `character -> beginning`.
    pub fn edges(&self) -> impl Iterator<Item = ChainEdge> + '_ {
        self.links.iter().flat_map(|link| {
            let character = ChainNode::character(&link.character);
            [
                ChainEdge {
                    from: ChainNode::entry(&link.ending),
                    to: character.clone(),
                },
                ChainEdge {
                    from: character,
                    to: ChainNode::entry(&link.beginning),
                },
            ]
        })
    }
}

/// Number of links [`ChainGraph::build`] will produce.
///
/// This is `Σ |beginnings[k]| × |endings[k]|` over the keys of `beginnings`.
pub fn expected_links(beginnings: &Bucket, endings: &Bucket) -> usize {
    beginnings
        .iter()
        .map(|(key, starting)| starting.len() * endings.get(key).map_or(0, <[BucketEntry]>::len))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bucket::CharBuckets;
    use crate::chain::progress::{CountingProgress, NoProgress};
    use crate::idiom::Idiom;

    fn buckets(texts: &[&str]) -> CharBuckets {
        let set: Vec<Idiom> = texts.iter().map(|t| Idiom::parse(t).unwrap()).collect();
        CharBuckets::index(&set)
    }

    #[test]
    fn test_link_count_matches_product_sum() {
        let b = buckets(&[
            "一心一意", "一马当先", "意气风发", "意犹未尽", "满心欢意", "先发制人", "人山人海", "海阔天空",
        ]);
        let graph = ChainGraph::build(&b.beginnings, &b.endings, &mut NoProgress);

        // 意: 2 beginnings x 2 endings, 先: 1 x 1, 人: 1 x 1, 海: 1 x 1
        assert_eq!(expected_links(&b.beginnings, &b.endings), 7);
        assert_eq!(graph.link_count(), 7);
        assert_eq!(graph.edges().count(), 14);
    }

    #[test]
    fn test_enumeration_order() {
        let b = buckets(&["一心一意", "满心欢意", "意气风发", "意犹未尽"]);
        let graph = ChainGraph::build(&b.beginnings, &b.endings, &mut NoProgress);

        let pairs: Vec<(String, String)> = graph
            .links()
            .iter()
            .map(|l| (l.ending.label(), l.beginning.label()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("一心一意".to_string(), "意气风发".to_string()),
                ("满心欢意".to_string(), "意气风发".to_string()),
                ("一心一意".to_string(), "意犹未尽".to_string()),
                ("满心欢意".to_string(), "意犹未尽".to_string()),
            ]
        );
        assert_eq!(graph.characters(), &["意".to_string()]);
    }

    #[test]
    fn test_edges_pass_through_character() {
        let b = buckets(&["一心一意", "意气风发"]);
        let graph = ChainGraph::build(&b.beginnings, &b.endings, &mut NoProgress);

        let edges: Vec<ChainEdge> = graph.edges().collect();
        assert_eq!(edges.len(), 2);
        assert_eq!(edges[0].from.label, "一心一意");
        assert_eq!(edges[0].to, ChainNode::character("意"));
        assert_eq!(edges[1].from, ChainNode::character("意"));
        assert_eq!(edges[1].to.label, "意气风发");
        assert_eq!(edges[1].to.kind, NodeKind::Idiom);
    }

    #[test]
    fn test_progress_receives_exact_total() {
        let b = buckets(&["一心一意", "意气风发", "发财致富", "富贵荣华"]);
        let mut progress = CountingProgress::default();
        let graph = ChainGraph::build(&b.beginnings, &b.endings, &mut progress);

        assert_eq!(progress.total, Some(3));
        assert_eq!(progress.advanced, 3);
        assert!(progress.finished);
        assert_eq!(graph.link_count(), 3);
    }

    #[test]
    fn test_no_shared_characters() {
        let b = buckets(&["一心一意", "发财致富"]);
        let graph = ChainGraph::build(&b.beginnings, &b.endings, &mut NoProgress);

        assert!(graph.is_empty());
        assert!(graph.characters().is_empty());
    }
}
