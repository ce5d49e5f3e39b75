//! Validation findings and the summary the designer's overlay displays.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// A structural defect. Without `node_id` and `edge_id` it concerns the whole graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Finding {
    pub code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edge_id: Option<String>,
    pub message: String,
    pub severity: Severity,
}

impl Finding {
    pub fn error(code: &str, message: impl Into<String>, node_id: Option<String>) -> Self {
        Finding {
            code: code.into(),
            node_id,
            edge_id: None,
            message: message.into(),
            severity: Severity::Error,
        }
    }

    pub fn warning(code: &str, message: impl Into<String>, node_id: Option<String>) -> Self {
        Finding {
            code: code.into(),
            node_id,
            edge_id: None,
            message: message.into(),
            severity: Severity::Warning,
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    pub fn is_global(&self) -> bool {
        self.node_id.is_none() && self.edge_id.is_none()
    }
}

impl std::fmt::Display for Finding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}:{}] {}", self.severity, self.code, self.message)?;
        if let Some(id) = &self.node_id {
            write!(f, " (node '{}')", id)?;
        }
        if let Some(id) = &self.edge_id {
            write!(f, " (edge '{}')", id)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    pub errors: Vec<Finding>,
    pub warnings: Vec<Finding>,
    pub is_valid: bool,
    pub has_warnings: bool,
    pub all: Vec<Finding>,
}

impl ValidationReport {
    pub fn from_findings(all: Vec<Finding>) -> Self {
        let (errors, warnings): (Vec<Finding>, Vec<Finding>) =
            all.iter().cloned().partition(Finding::is_error);
        ValidationReport {
            is_valid: errors.is_empty(),
            has_warnings: !warnings.is_empty(),
            errors,
            warnings,
            all,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_splits_by_severity() {
        let report = ValidationReport::from_findings(vec![
            Finding::warning("V002", "two starts", Some("s1".into())),
            Finding::error("V003", "cycle", None),
            Finding::warning("V002", "two starts", Some("s2".into())),
        ]);
        assert!(!report.is_valid);
        assert!(report.has_warnings);
        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.warnings.len(), 2);
        assert_eq!(report.all.len(), 3);
        assert_eq!(report.warnings[1].node_id.as_deref(), Some("s2"));
    }

    #[test]
    fn absent_ids_are_omitted_from_json() {
        let json = serde_json::to_value(Finding::error("V001", "no start", None)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "code": "V001", "message": "no start", "severity": "error" })
        );

        let json = serde_json::to_value(Finding::warning("V006", "dangling", Some(String::new())))
            .unwrap();
        assert_eq!(json["nodeId"], "");
    }

    #[test]
    fn display_includes_node() {
        let f = Finding::error("V004", "End Node cannot have outgoing connections", Some("end-1".into()));
        assert_eq!(
            f.to_string(),
            "[error:V004] End Node cannot have outgoing connections (node 'end-1')"
        );
    }
}
