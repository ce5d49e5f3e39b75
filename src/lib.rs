pub mod catalog;
pub mod error;
pub mod parse;
pub mod simulate;
pub mod validate;
pub mod wasm;

pub use error::ParseError;
pub use parse::{Workflow, WorkflowEdge, WorkflowGraph, WorkflowNode};
pub use simulate::{SimulationResult, SimulationStep, StepStatus};
pub use validate::{Finding, Severity, ValidationReport};

/// Run the structural checks over a workflow snapshot.
pub fn validate(workflow: &Workflow) -> Vec<Finding> {
    validate::validate_graph(workflow)
}

/// Validate, then replay the workflow into a step trace.
pub fn simulate(workflow: &Workflow) -> SimulationResult {
    simulate::simulate(workflow)
}
