//! Graph-level structural validation rules (V001–V006).
//!
//! Every rule is total over finite graphs: traversals go through petgraph's
//! visited-set walkers, so cycles never cause a rule to loop.

use crate::parse::graph::WorkflowGraph;
use crate::parse::types::Workflow;

use super::finding::Finding;

/// Run all structural validation rules. Returns all findings, in rule order.
pub fn validate_structural(workflow: &Workflow, graph: &WorkflowGraph) -> Vec<Finding> {
    let mut findings = Vec::new();

    v001_has_start(workflow, &mut findings);
    v002_single_start(workflow, &mut findings);
    v003_no_cycles(graph, &mut findings);
    v004_end_has_no_outgoing(workflow, graph, &mut findings);
    v005_no_disconnected_nodes(workflow, graph, &mut findings);
    v006_no_incomplete_paths(workflow, graph, &mut findings);

    findings
}

fn v001_has_start(workflow: &Workflow, findings: &mut Vec<Finding>) {
    if !workflow.nodes.iter().any(|n| n.is_start()) {
        findings.push(Finding::error(
            "V001",
            "Workflow must contain at least one Start Node",
            None,
        ));
    }
}

fn v002_single_start(workflow: &Workflow, findings: &mut Vec<Finding>) {
    let starts: Vec<_> = workflow.nodes.iter().filter(|n| n.is_start()).collect();
    if starts.len() < 2 {
        return;
    }
    for node in starts {
        findings.push(Finding::warning(
            "V002",
            "Multiple Start Nodes detected. Only one Start Node is recommended",
            Some(node.id.clone()),
        ));
    }
}

fn v003_no_cycles(graph: &WorkflowGraph, findings: &mut Vec<Finding>) {
    if graph.has_cycle() {
        findings.push(Finding::error(
            "V003",
            "Workflow contains cycles. Cyclic workflows are not supported",
            None,
        ));
    }
}

fn v004_end_has_no_outgoing(
    workflow: &Workflow,
    graph: &WorkflowGraph,
    findings: &mut Vec<Finding>,
) {
    for node in workflow.nodes.iter().filter(|n| n.is_end()) {
        if graph.outgoing_count(&node.id) > 0 {
            findings.push(Finding::error(
                "V004",
                "End Node cannot have outgoing connections",
                Some(node.id.clone()),
            ));
        }
    }
}

/// A node is disconnected when it is not reachable from a Start node or has
/// no path to an End node. Skipped without Start nodes; V001 covers that.
fn v005_no_disconnected_nodes(
    workflow: &Workflow,
    graph: &WorkflowGraph,
    findings: &mut Vec<Finding>,
) {
    let starts = workflow.nodes.iter().filter(|n| n.is_start()).map(|n| n.id.as_str());
    let from_start = graph.reachable_from(starts);
    if from_start.is_empty() {
        return;
    }

    let ends = workflow.nodes.iter().filter(|n| n.is_end()).map(|n| n.id.as_str());
    let to_end = graph.reaching(ends);

    let disconnected: Vec<&str> = workflow
        .nodes
        .iter()
        .filter(|n| !from_start.contains(n.id.as_str()) || !to_end.contains(n.id.as_str()))
        .map(|n| n.display_name())
        .collect();

    if !disconnected.is_empty() {
        findings.push(Finding::warning(
            "V005",
            format!("Disconnected nodes detected: {}", disconnected.join(", ")),
            None,
        ));
    }
}

fn v006_no_incomplete_paths(
    workflow: &Workflow,
    graph: &WorkflowGraph,
    findings: &mut Vec<Finding>,
) {
    for node in workflow.nodes.iter().filter(|n| !n.is_end()) {
        if graph.outgoing_count(&node.id) == 0 {
            findings.push(Finding::warning(
                "V006",
                format!(
                    "Node \"{}\" has no outgoing connections and is not an End Node",
                    node.display_name()
                ),
                Some(node.id.clone()),
            ));
        }
    }
}
