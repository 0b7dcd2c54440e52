//! Graphviz DOT output.

use std::fmt;

use petgraph::dot::{Config, Dot};
use petgraph::graph::DiGraph;

use crate::chain::{ChainGraph, ChainNode, NodeKind};
use crate::error::Result;
use crate::render::{DEFAULT_GRAPH_NAME, GraphRenderer, StrictGraph};

/// Renders a strict Graphviz digraph.
///
/// Idiom and placeholder nodes are drawn as plain text, connecting characters
/// as circles.
#[derive(Debug, Clone)]
pub struct DotRenderer {
    name: String,
}

impl DotRenderer {
    /// Create a renderer for a graph called `name`.
    pub fn new<S: Into<String>>(name: S) -> Self {
        DotRenderer { name: name.into() }
    }

    /// The graph name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Default for DotRenderer {
    fn default() -> Self {
        DotRenderer::new(DEFAULT_GRAPH_NAME)
    }
}

struct Unlabeled;

impl fmt::Display for Unlabeled {
    fn fmt(&self, _f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Ok(())
    }
}

/// Node label as written to DOT.
///
/// The escaper turns each `\n` into a left-justified `\l` break, which only
/// applies to the line before it. Multi-line labels get a trailing break so
/// their last line is left-justified too.
struct NodeLabel<'a>(&'a ChainNode);

impl fmt::Display for NodeLabel<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.label)?;
        if self.0.label.contains('\n') {
            f.write_str("\n")?;
        }
        Ok(())
    }
}

fn shape(kind: NodeKind) -> &'static str {
    match kind {
        NodeKind::Character => "circle",
        NodeKind::Idiom | NodeKind::Placeholder => "plaintext",
    }
}

impl GraphRenderer for DotRenderer {
    fn render(&self, graph: &ChainGraph) -> Result<String> {
        let strict = StrictGraph::from_chain(graph);
        let view: DiGraph<NodeLabel<'_>, Unlabeled> =
            strict.graph().map(|_, node| NodeLabel(node), |_, _| Unlabeled);

        let body = Dot::with_attr_getters(
            &view,
            &[Config::EdgeNoLabel],
            &|_, _| String::new(),
            &|_, (_, node)| format!("shape = {} ", shape(node.0.kind)),
        )
        .to_string();
        let body = body.strip_prefix("digraph").unwrap_or(&body).trim_start();
        Ok(format!("strict digraph {} {}", quote(&self.name), body))
    }

    fn extension(&self) -> &'static str {
        "gv"
    }
}

/// Count `->` edge statements in DOT text.
pub fn count_edges(dot: &str) -> usize {
    dot.lines().filter(|line| line.contains(" -> ")).count()
}

fn quote(name: &str) -> String {
    format!("\"{}\"", name.replace('\\', "\\\\").replace('"', "\\\""))
}
