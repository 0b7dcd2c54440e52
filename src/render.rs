//! Rendering chain graphs for external tools.
//!
//! Renderers work on a [`StrictGraph`]: nodes are identified by their label
//! and duplicate edges collapse, the same way a strict Graphviz digraph
//! treats them.

pub mod dot;
pub mod graphviz;
pub mod json;

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use log::debug;
use petgraph::graph::{DiGraph, NodeIndex};

use crate::chain::{ChainGraph, ChainNode, NodeKind};
use crate::error::Result;

pub use dot::DotRenderer;
pub use graphviz::GraphvizCommand;
pub use json::JsonRenderer;

/// Default graph name.
pub const DEFAULT_GRAPH_NAME: &str = "Idioms";

/// Turns a chain graph into text for an external tool.
pub trait GraphRenderer {
    /// Render the graph.
    fn render(&self, graph: &ChainGraph) -> Result<String>;

    /// Conventional file extension of the rendered text.
    fn extension(&self) -> &'static str;
}

/// A chain graph with duplicate nodes and edges collapsed.
#[derive(Debug, Clone, Default)]
pub struct StrictGraph {
    graph: DiGraph<ChainNode, ()>,
    index: HashMap<String, NodeIndex>,
}

impl StrictGraph {
    /// Collapse a chain graph.
    pub fn from_chain(chain: &ChainGraph) -> Self {
        let mut strict = StrictGraph::default();
        for edge in chain.edges() {
            let from = strict.node(edge.from);
            let to = strict.node(edge.to);
            strict.graph.update_edge(from, to, ());
        }
        debug!(
            "Collapsed {} links into {} nodes and {} edges",
            chain.link_count(),
            strict.node_count(),
            strict.edge_count()
        );
        strict
    }

    fn node(&mut self, node: ChainNode) -> NodeIndex {
        if let Some(&idx) = self.index.get(&node.label) {
            // Character nodes keep their shape even if the label was seen first
            // as something else.
            if node.kind == NodeKind::Character {
                self.graph[idx].kind = NodeKind::Character;
            }
            return idx;
        }
        let label = node.label.clone();
        let idx = self.graph.add_node(node);
        self.index.insert(label, idx);
        idx
    }

    /// Number of distinct nodes.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of distinct edges.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Look up a node by label.
    pub fn find(&self, label: &str) -> Option<&ChainNode> {
        self.index.get(label).map(|&idx| &self.graph[idx])
    }

    /// Check whether an edge exists between two labels.
    pub fn has_edge(&self, from: &str, to: &str) -> bool {
        match (self.index.get(from), self.index.get(to)) {
            (Some(&a), Some(&b)) => self.graph.contains_edge(a, b),
            _ => false,
        }
    }

    /// The underlying petgraph graph.
    pub fn graph(&self) -> &DiGraph<ChainNode, ()> {
        &self.graph
    }
}

/// Write rendered text to `path`, creating parent directories.
pub fn write_artifact<P: AsRef<Path>>(path: P, text: &str) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, text)?;
    debug!("Wrote {} bytes to {}", text.len(), path.display());
    Ok(())
}
