//! Graph-level validation phase.
//!
//! Validates a workflow graph and reports findings. Findings are values: a
//! pathological graph (empty, cyclic, disconnected) never makes this fail.

pub mod finding;
pub mod structural;

pub use finding::{Finding, Severity, ValidationReport};

use crate::parse::graph::WorkflowGraph;
use crate::parse::types::Workflow;

/// Validate the entire workflow graph.
pub fn validate_graph(workflow: &Workflow) -> Vec<Finding> {
    let graph = WorkflowGraph::build(workflow);
    validate_with_graph(workflow, &graph)
}

/// Validate against a graph the caller already built from `workflow`.
pub fn validate_with_graph(workflow: &Workflow, graph: &WorkflowGraph) -> Vec<Finding> {
    let findings = structural::validate_structural(workflow, graph);
    tracing::debug!(
        nodes = workflow.nodes.len(),
        edges = workflow.edges.len(),
        errors = findings.iter().filter(|f| f.is_error()).count(),
        warnings = findings.iter().filter(|f| !f.is_error()).count(),
        "validated workflow"
    );
    findings
}

/// Validate and summarise, the shape the designer's overlay consumes.
pub fn validate_report(workflow: &Workflow) -> ValidationReport {
    ValidationReport::from_findings(validate_graph(workflow))
}
