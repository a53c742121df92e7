//! Pasadas sobre árboles existentes.
//!
//! Las estrategias se resuelven del contexto en cada llamada, de modo que el
//! llamador puede sustituir recorrido o inyección registrando otra instancia.

use std::sync::Arc;

use log::debug;

use crate::context::{ResolutionContext, ResolutionContextExt};
use crate::errors::InjectError;
use crate::injection::{LeafPropertyInjectionStrategy, NullLeafInjection};
use crate::model::{NodeRef, Parameter};
use crate::traversal::TreeTraversalStrategy;

use super::{InjectionReport, PassMode};

/// Recorre el árbol desde `root` e inyecta cada nodo en orden de visita.
///
/// El primer error (requerida sin valor, proveedor, contexto) aborta la
/// pasada; los nodos ya inyectados quedan como estaban.
pub fn inject_tree(root: NodeRef, ctx: &dyn ResolutionContext, parameters: &[Parameter])
                   -> Result<InjectionReport, InjectError> {
    let leaf = ctx.get_required::<Arc<dyn LeafPropertyInjectionStrategy>>()?;
    let traversal = ctx.get_required::<Arc<dyn TreeTraversalStrategy>>()?;
    let mut report = InjectionReport::new(PassMode::Inject);
    debug!("inject_tree:start pass_id={} parameters={}", report.pass_id, parameters.len());

    for node in traversal.enumerate_nodes(root, ctx)? {
        let node = node?;
        let outcome = leaf.inject(&node, ctx, parameters)?;
        debug!("inject_tree:node pass_id={} node={} assigned={}",
               report.pass_id,
               outcome.node_type,
               outcome.assigned());
        report.nodes.push(outcome);
    }

    debug!("inject_tree:end pass_id={} nodes={}", report.pass_id, report.node_count());
    Ok(report)
}

/// Recorre el árbol y resetea las propiedades marcadas de cada nodo. Sólo
/// necesita la estrategia de recorrido registrada.
pub fn null_inject_tree(root: NodeRef, ctx: &dyn ResolutionContext) -> Result<InjectionReport, InjectError> {
    let traversal = ctx.get_required::<Arc<dyn TreeTraversalStrategy>>()?;
    let reset = NullLeafInjection;
    let mut report = InjectionReport::new(PassMode::Reset);
    debug!("null_inject_tree:start pass_id={}", report.pass_id);

    for node in traversal.enumerate_nodes(root, ctx)? {
        report.nodes.push(reset.reset(&node?)?);
    }

    debug!("null_inject_tree:end pass_id={} nodes={}", report.pass_id, report.node_count());
    Ok(report)
}
