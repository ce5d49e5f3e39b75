//! Built-in catalogue of actions an Automated Step node can run.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutomatedAction {
    pub id: String,
    pub label: String,
    pub params: Vec<String>,
}

impl AutomatedAction {
    fn new(id: &str, label: &str, params: &[&str]) -> Self {
        AutomatedAction {
            id: id.into(),
            label: label.into(),
            params: params.iter().map(|p| p.to_string()).collect(),
        }
    }
}

pub fn automations() -> Vec<AutomatedAction> {
    vec![
        AutomatedAction::new("send_email", "Send Email", &["to", "subject", "body"]),
        AutomatedAction::new("generate_doc", "Generate Document", &["template", "recipient"]),
        AutomatedAction::new(
            "create_ticket",
            "Create Support Ticket",
            &["title", "priority", "assignee"],
        ),
        AutomatedAction::new(
            "update_database",
            "Update Database Record",
            &["table", "recordId", "fields"],
        ),
        AutomatedAction::new(
            "send_notification",
            "Send Push Notification",
            &["userId", "message"],
        ),
    ]
}

pub fn find_action(id: &str) -> Option<AutomatedAction> {
    automations().into_iter().find(|a| a.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalogue_ids_are_unique() {
        let actions = automations();
        let mut ids: Vec<&str> = actions.iter().map(|a| a.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), actions.len());
    }

    #[test]
    fn find_action_by_id() {
        let action = find_action("create_ticket").expect("known action");
        assert_eq!(action.label, "Create Support Ticket");
        assert_eq!(action.params, vec!["title", "priority", "assignee"]);
        assert!(find_action("launch_rocket").is_none());
    }
}
