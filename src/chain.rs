//! Chain-graph construction.
//!
//! Buckets are first reduced for display: idioms that cannot chain any further
//! are merged into one placeholder per character, and optionally only the
//! busiest characters are kept. The remaining entries are then paired up
//! through their shared characters.
//!
//! ```
//! use idiom_graph::bucket::CharBuckets;
//! use idiom_graph::chain::{ChainGraph, NoProgress, merge_beginnings, merge_endings};
//! use idiom_graph::idiom::IdiomLoader;
//!
//! let idioms = IdiomLoader::unlimited().load_lines(["一心一意", "意气风发"]);
//! let buckets = CharBuckets::index(&idioms);
//! let endings = merge_endings(&buckets.endings, 10);
//! let beginnings = merge_beginnings(&buckets.beginnings, 10);
//!
//! let graph = ChainGraph::build(&beginnings, &endings, &mut NoProgress);
//! assert_eq!(graph.link_count(), 1);
//! ```

pub mod graph;
pub mod merge;
pub mod progress;
pub mod top_n;

pub use graph::{ChainEdge, ChainGraph, ChainLink, ChainNode, NodeKind, expected_links};
pub use merge::{merge_beginnings, merge_by_rule, merge_endings};
pub use progress::{CountingProgress, LogProgress, NoProgress, ProgressObserver};
pub use top_n::{DEFAULT_TOP_KEYS, truncate_to_top};
