//! WASM entry points for browser use.
//!
//! Each export takes the workflow as a JSON string and returns a plain JS
//! object. The work happens in a pure `*_inner` function returning a DTO.

use wasm_bindgen::prelude::*;

use crate::catalog::{self, AutomatedAction};
use crate::error::ParseError;
use crate::simulate::SimulationResult;
use crate::validate::{Finding, Severity};

/// Validate a workflow JSON. Returns a JSON array of findings, or of a single
/// parse error when the document is malformed.
#[wasm_bindgen]
pub fn validate_workflow(json: &str) -> JsValue {
    let result = validate_workflow_inner(json);
    serde_wasm_bindgen::to_value(&result).unwrap_or(JsValue::NULL)
}

pub(crate) fn validate_workflow_inner(json: &str) -> Vec<ErrorDto> {
    match crate::parse::parse(json) {
        Ok(workflow) => crate::validate::validate_graph(&workflow)
            .into_iter()
            .map(ErrorDto::from)
            .collect(),
        Err(e) => vec![ErrorDto::from(e)],
    }
}

/// Parse, validate and simulate. Returns `{status: "ok", result}` or
/// `{status: "error", errors}` when the document is malformed.
#[wasm_bindgen]
pub fn simulate_workflow(json: &str) -> JsValue {
    let result = simulate_workflow_inner(json);
    serde_wasm_bindgen::to_value(&result).unwrap_or(JsValue::NULL)
}

pub(crate) fn simulate_workflow_inner(json: &str) -> SimulateResponse {
    match crate::parse::parse(json) {
        Ok(workflow) => SimulateResponse::Ok {
            result: crate::simulate::simulate(&workflow),
        },
        Err(e) => SimulateResponse::Error {
            errors: vec![ErrorDto::from(e)],
        },
    }
}

/// The automated-action catalogue for the Automated Step form.
#[wasm_bindgen]
pub fn list_automations() -> JsValue {
    let actions: Vec<AutomatedAction> = catalog::automations();
    serde_wasm_bindgen::to_value(&actions).unwrap_or(JsValue::NULL)
}

/// Parse and re-serialize a workflow, as done on import before export.
/// Returns `{status: "ok", json}` or `{status: "error", errors}`.
#[wasm_bindgen]
pub fn normalize_workflow(json: &str) -> JsValue {
    let result = normalize_workflow_inner(json);
    serde_wasm_bindgen::to_value(&result).unwrap_or(JsValue::NULL)
}

pub(crate) fn normalize_workflow_inner(json: &str) -> NormalizeResponse {
    match crate::parse::parse(json).and_then(|w| crate::parse::serialize(&w)) {
        Ok(json) => NormalizeResponse::Ok { json },
        Err(e) => NormalizeResponse::Error {
            errors: vec![ErrorDto::from(e)],
        },
    }
}

// ---------------------------------------------------------------------------
// DTOs for serialization to JS
// ---------------------------------------------------------------------------

#[derive(Debug, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ErrorDto {
    code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    node_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    edge_id: Option<String>,
    message: String,
    severity: Severity,
}

impl From<Finding> for ErrorDto {
    fn from(f: Finding) -> Self {
        ErrorDto {
            code: f.code,
            node_id: f.node_id,
            edge_id: f.edge_id,
            message: f.message,
            severity: f.severity,
        }
    }
}

impl From<ParseError> for ErrorDto {
    fn from(e: ParseError) -> Self {
        ErrorDto {
            code: e.code().into(),
            node_id: None,
            edge_id: None,
            message: e.to_string(),
            severity: Severity::Error,
        }
    }
}

#[derive(Debug, serde::Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub(crate) enum SimulateResponse {
    Ok { result: SimulationResult },
    Error { errors: Vec<ErrorDto> },
}

#[derive(Debug, serde::Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub(crate) enum NormalizeResponse {
    Ok { json: String },
    Error { errors: Vec<ErrorDto> },
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"{
        "nodes": [
            {"id": "s", "type": "start", "position": {"x": 0, "y": 0},
             "data": {"type": "start", "label": "Start", "title": "Begin", "metadata": {}}},
            {"id": "e", "type": "end", "position": {"x": 200, "y": 0},
             "data": {"type": "end", "label": "End", "endMessage": "Bye", "showSummary": true}}
        ],
        "edges": [{"id": "e1", "source": "s", "target": "e"}]
    }"#;

    #[test]
    fn validate_malformed_reports_parse_code() {
        let errors = validate_workflow_inner("{ invalid json }");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].code, "P001");
        assert!(errors[0].message.starts_with("Invalid JSON format"));

        let errors = validate_workflow_inner(r#"{"nodes": []}"#);
        assert_eq!(errors[0].code, "P002");
        assert!(errors[0].message.contains("edges array"));
    }

    #[test]
    fn severity_serializes_lowercase() {
        let value = serde_json::to_value(validate_workflow_inner("[]")).unwrap();
        assert_eq!(value[0]["severity"], "error");

        let dangling = r#"{"nodes": [
            {"id": "s", "type": "start", "position": {"x": 0, "y": 0}, "data": {"type": "start"}}
        ], "edges": []}"#;
        let errors = validate_workflow_inner(dangling);
        assert!(errors.iter().all(|e| e.severity == Severity::Warning));
        let value = serde_json::to_value(&errors).unwrap();
        assert_eq!(value[0]["severity"], "warning");
    }

    #[test]
    fn validate_minimal_is_clean() {
        assert!(validate_workflow_inner(MINIMAL).is_empty());
    }

    #[test]
    fn simulate_response_is_tagged() {
        let value = serde_json::to_value(simulate_workflow_inner(MINIMAL)).unwrap();
        assert_eq!(value["status"], "ok");
        assert_eq!(value["result"]["success"], true);
        assert_eq!(value["result"]["steps"][0]["nodeId"], "s");
        assert_eq!(value["result"]["steps"][1]["nodeKind"], "end");

        let value = serde_json::to_value(simulate_workflow_inner("[]")).unwrap();
        assert_eq!(value["status"], "error");
        assert_eq!(value["errors"][0]["code"], "P002");
    }

    #[test]
    fn normalize_pretty_prints() {
        match normalize_workflow_inner(MINIMAL) {
            NormalizeResponse::Ok { json } => {
                assert!(json.contains("\n  \"nodes\""));
                assert!(json.contains("\"endMessage\": \"Bye\""));
            }
            NormalizeResponse::Error { errors } => panic!("unexpected errors: {:?}", errors),
        }
    }
}
