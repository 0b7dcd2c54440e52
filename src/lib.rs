//! # idiom-graph
//!
//! Draw graphs of Chinese four-character idioms that can be chained: the last
//! character of one idiom is the first character of the next.
//!
//! ## Pipeline
//!
//! ```text
//! idioms.txt
//!     ↓  idiom::IdiomLoader (trim, keep 4-character lines, dedup, sample)
//! Vec<Idiom>
//!     ↓  bucket::CharBuckets::index
//! beginnings / endings
//!     ↓  chain::merge_endings, chain::merge_beginnings, chain::truncate_to_top
//! reduced buckets
//!     ↓  chain::ChainGraph::build
//! ChainGraph
//!     ↓  render::DotRenderer / render::JsonRenderer
//! Idioms.gv
//! ```

pub mod bucket;
pub mod chain;
pub mod cli;
pub mod config;
pub mod error;
pub mod idiom;
pub mod pipeline;
pub mod render;

pub mod prelude {
    pub use crate::bucket::{Bucket, BucketEntry, CharBuckets, MergedPlaceholder};
    pub use crate::chain::{ChainGraph, ChainLink, NoProgress, ProgressObserver};
    pub use crate::config::PipelineConfig;
    pub use crate::error::{IdiomGraphError, Result};
    pub use crate::idiom::{Idiom, IdiomLoader};
    pub use crate::pipeline::{Pipeline, PipelineOutput, PipelineSummary};
    pub use crate::render::{DotRenderer, GraphRenderer, JsonRenderer};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
