//! Simulation trace types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::parse::types::{NodeKind, WorkflowNode};
use crate::validate::Finding;

/// Outcome of a simulated step. The simulator only produces `Completed`; the
/// other states are part of the wire shape for a richer execution model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepStatus {
    Pending,
    Completed,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationStep {
    pub node_id: String,
    pub node_kind: NodeKind,
    pub node_label: String,
    pub status: StepStatus,
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl SimulationStep {
    pub fn completed(node: &WorkflowNode, timestamp: DateTime<Utc>) -> Self {
        let label = node.display_name();
        SimulationStep {
            node_id: node.id.clone(),
            node_kind: node.kind(),
            node_label: label.to_string(),
            status: StepStatus::Completed,
            timestamp,
            details: Some(format!("Executed {} node: {}", node.kind(), label)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationResult {
    pub success: bool,
    pub steps: Vec<SimulationStep>,
    pub findings: Vec<Finding>,
    pub elapsed_ms: u64,
}

impl SimulationResult {
    /// Result for a workflow that failed validation: no steps, every finding.
    pub fn blocked(findings: Vec<Finding>) -> Self {
        SimulationResult {
            success: false,
            steps: vec![],
            findings,
            elapsed_ms: 0,
        }
    }

    /// Ids of the visited nodes, in visit order.
    pub fn visited_ids(&self) -> Vec<&str> {
        self.steps.iter().map(|s| s.node_id.as_str()).collect()
    }
}
