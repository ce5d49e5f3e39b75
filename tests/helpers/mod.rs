use hrflow::parse::*;

// =============================================================================
// Node builders
// =============================================================================

pub fn start(id: &str, label: &str) -> WorkflowNode {
    WorkflowNode::new(id, NodeData::Start(NodeFields::labeled(label)))
}

pub fn task(id: &str, label: &str) -> WorkflowNode {
    WorkflowNode::new(id, NodeData::Task(NodeFields::labeled(label)))
}

pub fn approval(id: &str, label: &str) -> WorkflowNode {
    WorkflowNode::new(id, NodeData::Approval(NodeFields::labeled(label)))
}

pub fn automated(id: &str, label: &str, action_id: &str) -> WorkflowNode {
    let mut fields: NodeFields<AutomatedStepAttributes> = NodeFields::labeled(label);
    fields.attributes.action_id = Some(action_id.into());
    WorkflowNode::new(id, NodeData::AutomatedStep(fields))
}

pub fn end(id: &str, label: &str) -> WorkflowNode {
    WorkflowNode::new(id, NodeData::End(NodeFields::labeled(label)))
}

/// A node whose `data` carries no label.
pub fn unlabeled_task(id: &str) -> WorkflowNode {
    WorkflowNode::new(id, NodeData::Task(NodeFields::default()))
}

// =============================================================================
// Graph builders
// =============================================================================

pub fn edge(id: &str, source: &str, target: &str) -> WorkflowEdge {
    WorkflowEdge {
        id: id.into(),
        source: source.into(),
        target: target.into(),
        edge_type: None,
        extra: Default::default(),
    }
}

pub fn workflow(nodes: Vec<WorkflowNode>, edges: Vec<WorkflowEdge>) -> Workflow {
    Workflow {
        nodes,
        edges,
        ..Default::default()
    }
}

/// Edges named `e1`, `e2`, … from `(source, target)` pairs.
pub fn chain(pairs: &[(&str, &str)]) -> Vec<WorkflowEdge> {
    pairs
        .iter()
        .enumerate()
        .map(|(i, (s, t))| edge(&format!("e{}", i + 1), s, t))
        .collect()
}

pub fn fixture(name: &str) -> Workflow {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name);
    let json = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("read {}: {}", path.display(), e));
    parse(&json).unwrap_or_else(|e| panic!("parse {}: {}", name, e))
}
