use crate::errors::InjectError;
use crate::model::NodeRef;

/// Contrato de un proveedor de ramas.
pub trait BranchProvider: Send + Sync {
    /// Hijos directos de `node` (posiblemente vacío).
    ///
    /// Debe ser finito e idempotente para un nodo fijo. Un `Err` aborta el
    /// recorrido y se propaga sin reintentos.
    fn branches(&self, node: &NodeRef) -> Result<Vec<NodeRef>, InjectError>;
}
