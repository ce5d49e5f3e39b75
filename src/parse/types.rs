//! Rust types mirroring the designer's canvas state.
//!
//! These types are the serde target for the workflow JSON the browser saves,
//! exports and posts for simulation. Every object keeps the keys it does not
//! model in an `extra` map so that a load/save cycle is lossless.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

// =============================================================================
// TOP-LEVEL WORKFLOW
// =============================================================================

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Workflow {
    pub nodes: Vec<WorkflowNode>,
    pub edges: Vec<WorkflowEdge>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowEdge {
    pub id: String,
    pub source: String,
    pub target: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub edge_type: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Canvas coordinates, kept as JSON numbers so `1` is not re-exported as `1.0`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub x: Number,
    pub y: Number,
}

impl Default for Position {
    fn default() -> Self {
        Position {
            x: Number::from(0),
            y: Number::from(0),
        }
    }
}

// =============================================================================
// NODE KIND
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NodeKind {
    Start,
    Task,
    Approval,
    AutomatedStep,
    End,
}

impl NodeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Start => "start",
            NodeKind::Task => "task",
            NodeKind::Approval => "approval",
            NodeKind::AutomatedStep => "automatedStep",
            NodeKind::End => "end",
        }
    }
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// WORKFLOW NODE
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowNode {
    pub id: String,
    /// Renderer key used by the canvas. Preserved, never interpreted: the
    /// node's kind comes from `data.type`.
    #[serde(rename = "type")]
    pub node_type: String,
    pub position: Position,
    pub data: NodeData,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl WorkflowNode {
    pub fn new(id: impl Into<String>, data: NodeData) -> Self {
        WorkflowNode {
            id: id.into(),
            node_type: data.kind().as_str().to_string(),
            position: Position::default(),
            data,
            extra: Map::new(),
        }
    }

    pub fn kind(&self) -> NodeKind {
        self.data.kind()
    }

    pub fn label(&self) -> Option<&str> {
        self.data.label()
    }

    /// The label when it is set and non-empty, the id otherwise.
    pub fn display_name(&self) -> &str {
        match self.label() {
            Some(label) if !label.is_empty() => label,
            _ => &self.id,
        }
    }

    pub fn is_start(&self) -> bool {
        self.kind() == NodeKind::Start
    }

    pub fn is_end(&self) -> bool {
        self.kind() == NodeKind::End
    }
}

// =============================================================================
// NODE DATA — tagged union over the 5 node kinds
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum NodeData {
    #[serde(rename = "start")]
    Start(NodeFields<StartAttributes>),
    #[serde(rename = "task")]
    Task(NodeFields<TaskAttributes>),
    #[serde(rename = "approval")]
    Approval(NodeFields<ApprovalAttributes>),
    #[serde(rename = "automatedStep")]
    AutomatedStep(NodeFields<AutomatedStepAttributes>),
    #[serde(rename = "end")]
    End(NodeFields<EndAttributes>),
}

/// Fields shared by every node kind, with the kind-specific record flattened in.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NodeFields<A> {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(flatten)]
    pub attributes: A,
}

impl<A: Default> NodeFields<A> {
    pub fn labeled(label: impl Into<String>) -> Self {
        NodeFields {
            id: None,
            label: Some(label.into()),
            attributes: A::default(),
        }
    }
}

impl NodeData {
    pub fn kind(&self) -> NodeKind {
        match self {
            NodeData::Start(_) => NodeKind::Start,
            NodeData::Task(_) => NodeKind::Task,
            NodeData::Approval(_) => NodeKind::Approval,
            NodeData::AutomatedStep(_) => NodeKind::AutomatedStep,
            NodeData::End(_) => NodeKind::End,
        }
    }

    pub fn label(&self) -> Option<&str> {
        match self {
            NodeData::Start(n) => n.label.as_deref(),
            NodeData::Task(n) => n.label.as_deref(),
            NodeData::Approval(n) => n.label.as_deref(),
            NodeData::AutomatedStep(n) => n.label.as_deref(),
            NodeData::End(n) => n.label.as_deref(),
        }
    }
}

// =============================================================================
// PER-KIND ATTRIBUTES
// =============================================================================
//
// Attributes are optional: an attribute missing from the document stays
// missing on export, and numbers keep their JSON form.

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartAttributes {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<BTreeMap<String, String>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskAttributes {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_fields: Option<BTreeMap<String, String>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApprovalAttributes {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approver_role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_approve_threshold: Option<Number>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutomatedStepAttributes {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<BTreeMap<String, String>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EndAttributes {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_summary: Option<bool>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
