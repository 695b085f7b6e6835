//! Graph view of a decoded body plan.
//!
//! Nodes are cell part types, edges are attachment schematics. Instancing
//! code walks this graph from the head to place live parts.

use genetica_data::{CellPartSchematic, LifeForm};
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::Bfs;
use std::collections::{BTreeMap, BTreeSet};

/// The body plan as a directed graph of part keys.
pub struct BodyPlan {
    pub graph: DiGraph<u32, CellPartSchematic>,
    index: BTreeMap<u32, NodeIndex>,
    head: Option<u32>,
}

impl BodyPlan {
    /// Builds the graph from every part type and schematic of `lifeform`.
    #[must_use]
    pub fn build(lifeform: &LifeForm) -> Self {
        let mut graph = DiGraph::new();
        let mut index = BTreeMap::new();
        for &key in lifeform.cell_parts.keys() {
            index.insert(key, graph.add_node(key));
        }

        for (key, part) in &lifeform.cell_parts {
            for schematic in part.children() {
                if let (Some(&from), Some(&to)) = (index.get(key), index.get(&schematic.part)) {
                    graph.add_edge(from, to, *schematic);
                }
            }
        }

        Self {
            graph,
            index,
            head: lifeform.head.map(|h| h.part),
        }
    }

    #[must_use]
    pub fn node(&self, key: u32) -> Option<NodeIndex> {
        self.index.get(&key).copied()
    }

    /// Part keys reachable from the head, head included.
    #[must_use]
    pub fn reachable_from_head(&self) -> BTreeSet<u32> {
        let mut reached = BTreeSet::new();
        let Some(start) = self.head.and_then(|h| self.node(h)) else {
            return reached;
        };
        let mut bfs = Bfs::new(&self.graph, start);
        while let Some(idx) = bfs.next(&self.graph) {
            reached.insert(self.graph[idx]);
        }
        reached
    }

    /// Export the body plan to Graphviz DOT format.
    #[must_use]
    pub fn to_dot(&self) -> String {
        let mut dot = String::from("digraph BodyPlan {\n");
        dot.push_str("  node [shape=box, fontname=\"Arial\"];\n");

        for idx in self.graph.node_indices() {
            let key = self.graph[idx];
            let style = if Some(key) == self.head {
                ", style=filled, fillcolor=\"#e1f5fe\""
            } else {
                ""
            };
            dot.push_str(&format!("  \"{key}\" [label=\"part {key}\"{style}];\n"));
        }

        for edge in self.graph.edge_indices() {
            if let Some((from, to)) = self.graph.edge_endpoints(edge) {
                let s = &self.graph[edge];
                dot.push_str(&format!(
                    "  \"{}\" -> \"{}\" [label=\"{:.2}/{:.2}\"{}];\n",
                    self.graph[from],
                    self.graph[to],
                    s.angle_on_body,
                    s.angle_from_body,
                    if s.flipped { ", style=dashed" } else { "" }
                ));
            }
        }

        dot.push_str("}\n");
        dot
    }
}
