use log::trace;

use crate::errors::InjectError;
use crate::injection::{LeafSource, NodeInjection};
use crate::model::{borrow_node_mut, NodeRef};

/// Resetea cada propiedad marcada: `None` para campos anulables,
/// `Default` para campos de valor. Ignora `is_required` y no consulta
/// parámetros ni contexto.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullLeafInjection;

impl NullLeafInjection {
    pub fn reset(&self, node: &NodeRef) -> Result<NodeInjection, InjectError> {
        let mut guard = borrow_node_mut(node, "null injection")?;
        let node_type = guard.type_name();
        let mut outcome = NodeInjection::new(node_type);
        for property in guard.leaf_table() {
            property.reset(guard.as_any_mut())?;
            trace!("reset:property node={node_type} property={}", property.name());
            outcome.record(property.name(), property.declared().type_name(), LeafSource::Reset);
        }
        Ok(outcome)
    }
}
