//! petgraph-based directed graph wrapper for the visual workflow.
//!
//! Vertices are keyed by node id. Two cases the canvas can produce are
//! tolerated rather than rejected:
//!
//! - an edge endpoint that names no declared node gets a placeholder vertex,
//!   so the edge still takes part in cycle analysis;
//! - nodes that share an id collapse onto a single vertex, and the edges of
//!   all of them hang off it. Validation rules still check and name every
//!   declared node; the simulation trace records the first declaration.

use std::collections::{HashMap, HashSet};

use petgraph::Direction;
use petgraph::algo::toposort;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::{Dfs, EdgeRef, Reversed};

use super::types::Workflow;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeLabel {
    pub edge_id: String,
    /// Position of the edge in `Workflow::edges`.
    pub order: usize,
}

#[derive(Debug, Clone)]
pub struct WorkflowGraph {
    pub graph: DiGraph<String, EdgeLabel>,
    pub node_indices: HashMap<String, NodeIndex>,
}

impl WorkflowGraph {
    pub fn build(workflow: &Workflow) -> Self {
        let mut graph = DiGraph::new();
        let mut node_indices = HashMap::new();

        for node in &workflow.nodes {
            vertex(&mut graph, &mut node_indices, &node.id);
        }

        for (order, edge) in workflow.edges.iter().enumerate() {
            let s = vertex(&mut graph, &mut node_indices, &edge.source);
            let t = vertex(&mut graph, &mut node_indices, &edge.target);
            graph.add_edge(
                s,
                t,
                EdgeLabel {
                    edge_id: edge.id.clone(),
                    order,
                },
            );
        }

        WorkflowGraph {
            graph,
            node_indices,
        }
    }

    /// Targets of the node's outgoing edges, in edge insertion order.
    /// Parallel edges yield the target once per edge.
    pub fn successors(&self, node_id: &str) -> Vec<&str> {
        let Some(&idx) = self.node_indices.get(node_id) else {
            return vec![];
        };
        let mut out: Vec<(usize, NodeIndex)> = self
            .graph
            .edges_directed(idx, Direction::Outgoing)
            .map(|e| (e.weight().order, e.target()))
            .collect();
        out.sort_unstable_by_key(|(order, _)| *order);
        out.into_iter()
            .map(|(_, n)| self.graph[n].as_str())
            .collect()
    }

    pub fn outgoing_count(&self, node_id: &str) -> usize {
        self.degree(node_id, Direction::Outgoing)
    }

    pub fn incoming_count(&self, node_id: &str) -> usize {
        self.degree(node_id, Direction::Incoming)
    }

    fn degree(&self, node_id: &str, dir: Direction) -> usize {
        self.node_indices
            .get(node_id)
            .map_or(0, |&idx| self.graph.edges_directed(idx, dir).count())
    }

    /// Whether any directed cycle exists, self-loops included.
    pub fn has_cycle(&self) -> bool {
        let self_loop = self
            .graph
            .edge_references()
            .any(|e| e.source() == e.target());
        self_loop || toposort(&self.graph, None).is_err()
    }

    /// Ids reachable from any of `starts` along outgoing edges, the starts included.
    pub fn reachable_from<'a>(&self, starts: impl IntoIterator<Item = &'a str>) -> HashSet<&str> {
        let mut seen = HashSet::new();
        let mut dfs = Dfs::empty(&self.graph);
        for start in starts {
            let Some(&idx) = self.node_indices.get(start) else {
                continue;
            };
            dfs.move_to(idx);
            while let Some(nx) = dfs.next(&self.graph) {
                seen.insert(self.graph[nx].as_str());
            }
        }
        seen
    }

    /// Ids that have a path to any of `targets`, the targets included.
    pub fn reaching<'a>(&self, targets: impl IntoIterator<Item = &'a str>) -> HashSet<&str> {
        let reversed = Reversed(&self.graph);
        let mut seen = HashSet::new();
        let mut dfs = Dfs::empty(reversed);
        for target in targets {
            let Some(&idx) = self.node_indices.get(target) else {
                continue;
            };
            dfs.move_to(idx);
            while let Some(nx) = dfs.next(reversed) {
                seen.insert(self.graph[nx].as_str());
            }
        }
        seen
    }
}

fn vertex(
    graph: &mut DiGraph<String, EdgeLabel>,
    node_indices: &mut HashMap<String, NodeIndex>,
    id: &str,
) -> NodeIndex {
    if let Some(&idx) = node_indices.get(id) {
        return idx;
    }
    let idx = graph.add_node(id.to_string());
    node_indices.insert(id.to_string(), idx);
    idx
}
