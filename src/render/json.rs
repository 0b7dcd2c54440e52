//! JSON output for tools that do their own layout.

use petgraph::visit::EdgeRef;
use serde::{Deserialize, Serialize};

use crate::chain::{ChainGraph, ChainNode};
use crate::error::Result;
use crate::render::{DEFAULT_GRAPH_NAME, GraphRenderer, StrictGraph};

/// Serialized form of a collapsed chain graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphDocument {
    pub name: String,
    pub nodes: Vec<ChainNode>,
    /// Edges as `[from, to]` indices into `nodes`.
    pub edges: Vec<[usize; 2]>,
    /// Links enumerated before collapsing.
    pub links: usize,
}

/// Renders the graph as JSON.
#[derive(Debug, Clone)]
pub struct JsonRenderer {
    name: String,
    pretty: bool,
}

impl JsonRenderer {
    /// Create a renderer for a graph called `name`.
    pub fn new<S: Into<String>>(name: S, pretty: bool) -> Self {
        JsonRenderer {
            name: name.into(),
            pretty,
        }
    }

    /// Build the document without serializing it.
    pub fn document(&self, graph: &ChainGraph) -> GraphDocument {
        let strict = StrictGraph::from_chain(graph);
        let g = strict.graph();
        GraphDocument {
            name: self.name.clone(),
            nodes: g.node_indices().map(|idx| g[idx].clone()).collect(),
            edges: g
                .edge_references()
                .map(|e| [e.source().index(), e.target().index()])
                .collect(),
            links: graph.link_count(),
        }
    }
}

impl Default for JsonRenderer {
    fn default() -> Self {
        JsonRenderer::new(DEFAULT_GRAPH_NAME, false)
    }
}

impl GraphRenderer for JsonRenderer {
    fn render(&self, graph: &ChainGraph) -> Result<String> {
        let document = self.document(graph);
        let text = if self.pretty {
            serde_json::to_string_pretty(&document)?
        } else {
            serde_json::to_string(&document)?
        };
        Ok(text)
    }

    fn extension(&self) -> &'static str {
        "json"
    }
}
