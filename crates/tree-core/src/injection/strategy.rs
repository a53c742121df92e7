use crate::context::ResolutionContext;
use crate::errors::InjectError;
use crate::injection::NodeInjection;
use crate::model::{NodeRef, Parameter};

/// Estrategia de inyección de las propiedades marcadas de un nodo.
pub trait LeafPropertyInjectionStrategy: Send + Sync {
    /// Asigna cada propiedad marcada de `node` y describe lo hecho.
    ///
    /// Un `Err` deja las propiedades ya procesadas como quedaron y aborta la
    /// pasada completa del árbol.
    fn inject(&self, node: &NodeRef, ctx: &dyn ResolutionContext, parameters: &[Parameter])
              -> Result<NodeInjection, InjectError>;
}
