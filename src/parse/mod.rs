//! Parse phase: JSON ↔ Rust types + graph construction.

pub mod graph;
pub mod types;

pub use graph::WorkflowGraph;
pub use types::*;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ParseError;

const DEFAULT_EXPORT_NAME: &str = "workflow.json";

/// Deserialize a workflow JSON string into a `Workflow`.
///
/// Syntax errors and shape errors are kept apart: the designer shows
/// "Invalid JSON format" for the former and the offending field for the latter.
pub fn parse(json: &str) -> Result<Workflow, ParseError> {
    let value: Value =
        serde_json::from_str(json).map_err(|e| ParseError::Syntax(e.to_string()))?;
    parse_value(value)
}

/// Decode an already-parsed JSON value, e.g. a request body.
pub fn parse_value(value: Value) -> Result<Workflow, ParseError> {
    check_shape(&value)?;
    let Value::Object(mut root) = value else {
        return Err(ParseError::shape("expected an object"));
    };
    let nodes = decode_items(root.remove("nodes"), "node")?;
    let edges = decode_items(root.remove("edges"), "edge")?;
    let workflow = Workflow {
        nodes,
        edges,
        extra: root,
    };
    tracing::debug!(
        nodes = workflow.nodes.len(),
        edges = workflow.edges.len(),
        "parsed workflow"
    );
    Ok(workflow)
}

/// Serialize a workflow as 2-space indented JSON.
pub fn serialize(workflow: &Workflow) -> Result<String, ParseError> {
    serde_json::to_string_pretty(workflow).map_err(ParseError::from)
}

/// File name used when exporting a workflow for download.
pub fn export_file_name(name: Option<&str>) -> String {
    match name.map(str::trim) {
        None | Some("") => DEFAULT_EXPORT_NAME.to_string(),
        Some(name) if name.ends_with(".json") => name.to_string(),
        Some(name) => format!("{name}.json"),
    }
}

/// Required-field checks that run before typed decoding, so that the common
/// mistakes get a precise message instead of a serde path.
fn check_shape(value: &Value) -> Result<(), ParseError> {
    let Some(root) = value.as_object() else {
        return Err(ParseError::shape("expected an object"));
    };

    let Some(nodes) = root.get("nodes").and_then(Value::as_array) else {
        return Err(ParseError::shape("missing or invalid nodes array"));
    };
    let Some(edges) = root.get("edges").and_then(Value::as_array) else {
        return Err(ParseError::shape("missing or invalid edges array"));
    };

    for (i, node) in nodes.iter().enumerate() {
        let missing = if !is_non_empty_str(node.get("id")) {
            Some("id")
        } else if !is_non_empty_str(node.get("type")) {
            Some("type")
        } else if !is_present(node.get("position")) {
            Some("position")
        } else if !is_present(node.get("data")) {
            Some("data")
        } else {
            None
        };
        if let Some(field) = missing {
            return Err(ParseError::shape(format!(
                "invalid node structure at index {i}: missing `{field}`"
            )));
        }
    }

    for (i, edge) in edges.iter().enumerate() {
        let missing = ["id", "source", "target"]
            .into_iter()
            .find(|field| !is_non_empty_str(edge.get(*field)));
        if let Some(field) = missing {
            return Err(ParseError::shape(format!(
                "invalid edge structure at index {i}: missing `{field}`"
            )));
        }
    }

    Ok(())
}

/// Typed decoding one element at a time, so a failure names its index.
fn decode_items<T: DeserializeOwned>(
    items: Option<Value>,
    what: &str,
) -> Result<Vec<T>, ParseError> {
    let Some(Value::Array(items)) = items else {
        return Err(ParseError::shape(format!("missing or invalid {what}s array")));
    };
    items
        .into_iter()
        .enumerate()
        .map(|(i, item)| {
            serde_json::from_value(item).map_err(|e| {
                ParseError::shape(format!("invalid {what} structure at index {i}: {e}"))
            })
        })
        .collect()
}

fn is_non_empty_str(value: Option<&Value>) -> bool {
    matches!(value, Some(Value::String(s)) if !s.is_empty())
}

fn is_present(value: Option<&Value>) -> bool {
    !matches!(value, None | Some(Value::Null))
}
