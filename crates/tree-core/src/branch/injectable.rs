use crate::branch::BranchProvider;
use crate::errors::InjectError;
use crate::model::{borrow_node, NodeRef};

/// Delega en la capacidad `InjectableNode` del propio nodo, si la tiene.
#[derive(Debug, Clone, Copy, Default)]
pub struct InjectableNodeBranchProvider;

impl BranchProvider for InjectableNodeBranchProvider {
    fn branches(&self, node: &NodeRef) -> Result<Vec<NodeRef>, InjectError> {
        let guard = borrow_node(node, "self-reported branches")?;
        Ok(guard.as_injectable().map(|n| n.branches()).unwrap_or_default())
    }
}
