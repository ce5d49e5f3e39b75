//! Simulation phase: replay a validated workflow into an ordered trace.
//!
//! Nothing is executed. The walk is a pre-order depth-first traversal from the
//! first Start node, following outgoing edges in insertion order, with each node
//! recorded at most once.

pub mod clock;
pub mod trace;

pub use clock::{Clock, SystemClock};
pub use trace::{SimulationResult, SimulationStep, StepStatus};

use std::collections::{HashMap, HashSet};

use crate::parse::graph::WorkflowGraph;
use crate::parse::types::{Workflow, WorkflowNode};
use crate::validate;

/// Simulate a workflow against the wall clock.
pub fn simulate(workflow: &Workflow) -> SimulationResult {
    simulate_with_clock(workflow, &SystemClock)
}

pub fn simulate_with_clock(workflow: &Workflow, clock: &dyn Clock) -> SimulationResult {
    let graph = WorkflowGraph::build(workflow);
    let findings = validate::validate_with_graph(workflow, &graph);

    if findings.iter().any(|f| f.is_error()) {
        tracing::debug!(findings = findings.len(), "simulation blocked by validation errors");
        return SimulationResult::blocked(findings);
    }

    let started = clock.now();
    let steps = walk(workflow, &graph, clock);
    let elapsed_ms = (clock.now() - started).num_milliseconds().max(0) as u64;

    tracing::debug!(steps = steps.len(), elapsed_ms, "simulation finished");

    SimulationResult {
        success: true,
        steps,
        findings,
        elapsed_ms,
    }
}

/// Iterative pre-order DFS. Successors are pushed in reverse so the first edge
/// is explored first; nodes are marked when popped, which yields the same order
/// as the recursive formulation.
fn walk(workflow: &Workflow, graph: &WorkflowGraph, clock: &dyn Clock) -> Vec<SimulationStep> {
    let Some(start) = workflow.nodes.iter().find(|n| n.is_start()) else {
        return vec![];
    };

    // First declaration wins when ids repeat, the start vertex included.
    let mut by_id: HashMap<&str, &WorkflowNode> = HashMap::new();
    for node in &workflow.nodes {
        by_id.entry(node.id.as_str()).or_insert(node);
    }
    let start = by_id.get(start.id.as_str()).copied().unwrap_or(start);

    let mut visited: HashSet<&str> = HashSet::new();
    let mut stack = vec![start];
    let mut steps = Vec::new();

    while let Some(node) = stack.pop() {
        if !visited.insert(node.id.as_str()) {
            continue;
        }
        steps.push(SimulationStep::completed(node, clock.now()));

        for next in graph.successors(&node.id).into_iter().rev() {
            if visited.contains(next) {
                continue;
            }
            // Edges to undeclared nodes are skipped.
            if let Some(&n) = by_id.get(next) {
                stack.push(n);
            }
        }
    }

    steps
}
