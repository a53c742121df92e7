use log::{debug, trace};

use crate::context::ResolutionContext;
use crate::errors::InjectError;
use crate::injection::{resolve_candidate, LeafPropertyInjectionStrategy, LeafSource, NodeInjection};
use crate::model::{borrow_node_mut, NodeRef, Parameter};

/// Estrategia por defecto.
///
/// Para cada propiedad marcada, en orden de declaración:
/// 1. parámetro explícito asignable o, si no hay, resolución del contexto;
/// 2. con valor: se asigna;
/// 3. sin valor y requerida: error inmediato, el resto del nodo no se toca;
/// 4. sin valor y opcional: se deja como estaba.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultLeafInjection;

impl LeafPropertyInjectionStrategy for DefaultLeafInjection {
    fn inject(&self, node: &NodeRef, ctx: &dyn ResolutionContext, parameters: &[Parameter])
              -> Result<NodeInjection, InjectError> {
        let mut guard = borrow_node_mut(node, "leaf injection")?;
        let node_type = guard.type_name();
        let mut outcome = NodeInjection::new(node_type);

        for property in guard.leaf_table() {
            let declared = property.declared();
            match resolve_candidate(declared, ctx, parameters)? {
                Some((source, value)) => {
                    property.assign(guard.as_any_mut(), &value)?;
                    trace!("inject:assign node={node_type} property={} source={source:?}", property.name());
                    outcome.record(property.name(), declared.type_name(), source);
                }
                None if property.marker().is_required() => {
                    debug!("inject:unresolved node={node_type} property={} type={declared}", property.name());
                    return Err(InjectError::unresolved(property.name(), declared.type_name(), node_type));
                }
                None => {
                    trace!("inject:skip node={node_type} property={} optional", property.name());
                    outcome.record(property.name(), declared.type_name(), LeafSource::Untouched);
                }
            }
        }
        Ok(outcome)
    }
}
