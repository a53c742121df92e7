use crate::context::ResolutionContext;
use crate::errors::InjectError;
use crate::model::NodeRef;

/// Secuencia perezosa de nodos; un `Err` termina la secuencia.
pub type NodeStream = Box<dyn Iterator<Item = Result<NodeRef, InjectError>>>;

/// Define cómo se recorre un árbol de nodos inyectables.
pub trait TreeTraversalStrategy: Send + Sync {
    /// Enumera todos los nodos alcanzables desde `root`.
    ///
    /// Los proveedores de ramas se resuelven desde `ctx` una sola vez, al
    /// crear la secuencia. Cada llamada produce un recorrido nuevo; la
    /// secuencia no conserva referencias a `ctx`.
    fn enumerate_nodes(&self, root: NodeRef, ctx: &dyn ResolutionContext) -> Result<NodeStream, InjectError>;
}
