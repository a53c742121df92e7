//! Creación de la raíz e inyección en un solo paso.
//!
//! La construcción la hace el propio tipo raíz (`Activate`); sus
//! dependencias de constructor se buscan igual que las propiedades hoja:
//! parámetros explícitos primero, luego el contexto.

use std::any::{type_name, Any};
use std::cell::RefCell;
use std::rc::Rc;

use log::debug;

use crate::context::{downcast_service, ResolutionContext, ServiceKey};
use crate::errors::InjectError;
use crate::injection::resolve_candidate;
use crate::model::{node_ref, NodeRef, Parameter, TreeNode};

use super::{inject_tree, InjectionReport};

/// Tipo raíz construible desde el contexto.
pub trait Activate: TreeNode + Sized {
    fn activate(ctx: &dyn ResolutionContext, parameters: &[Parameter]) -> Result<Self, InjectError>;
}

/// Dependencia obligatoria de constructor.
pub fn resolve_dependency<T: Any + Clone>(ctx: &dyn ResolutionContext, parameters: &[Parameter])
                                          -> Result<T, InjectError> {
    resolve_optional::<T>(ctx, parameters)?.ok_or_else(|| InjectError::MissingService(type_name::<T>().to_string()))
}

/// Dependencia opcional de constructor; `None` si no hay parámetro ni registro.
pub fn resolve_optional<T: Any + Clone>(ctx: &dyn ResolutionContext, parameters: &[Parameter])
                                        -> Result<Option<T>, InjectError> {
    let key = ServiceKey::of::<T>();
    match resolve_candidate(&key, ctx, parameters)? {
        Some((_, service)) => downcast_service::<T>(&key, &service).map(Some),
        None => Ok(None),
    }
}

/// Construye `R`, lo envuelve como nodo y ejecuta la pasada completa.
///
/// Los errores de construcción se reportan como `Activation`; los de la
/// pasada se propagan tal cual.
pub fn create_instance<R: Activate>(ctx: &dyn ResolutionContext, parameters: &[Parameter])
                                    -> Result<(Rc<RefCell<R>>, InjectionReport), InjectError> {
    let root = R::activate(ctx, parameters).map_err(|err| match err {
                                                 InjectError::Activation { .. } => err,
                                                 other => InjectError::Activation { type_name: type_name::<R>().to_string(),
                                                                                    reason: other.to_string() },
                                             })?;
    debug!("create_instance:activated type={}", type_name::<R>());
    let root = node_ref(root);
    let node: NodeRef = root.clone();
    let report = inject_tree(node, ctx, parameters)?;
    Ok((root, report))
}
