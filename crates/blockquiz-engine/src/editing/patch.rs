use crate::models::NodeId;

/// Result of applying a command
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Patch {
    /// Nodes inserted or modified, in the order they were touched
    pub changed: Vec<NodeId>,
    pub removed: Vec<NodeId>,
    pub version: u64,
}

impl Patch {
    pub fn is_empty(&self) -> bool {
        self.changed.is_empty() && self.removed.is_empty()
    }
}
