use std::fmt;
use std::marker::PhantomData;

use crate::branch::BranchProvider;
use crate::errors::InjectError;
use crate::model::{borrow_node, NodeRef, TreeNode};

/// Proveedor ligado a un tipo concreto `T` y una función de extracción.
///
/// Para nodos de otro tipo devuelve una lista vacía.
pub struct TypedBranchProvider<T> {
    extract: Box<dyn Fn(&T) -> Vec<NodeRef> + Send + Sync>,
    // `fn(&T)`: el proveedor es Send + Sync aunque `T` no lo sea
    _node: PhantomData<fn(&T)>,
}

impl<T: TreeNode> TypedBranchProvider<T> {
    pub fn new<F>(extract: F) -> Self
        where F: Fn(&T) -> Vec<NodeRef> + Send + Sync + 'static
    {
        Self { extract: Box::new(extract),
               _node: PhantomData }
    }
}

impl<T: TreeNode> BranchProvider for TypedBranchProvider<T> {
    fn branches(&self, node: &NodeRef) -> Result<Vec<NodeRef>, InjectError> {
        let guard = borrow_node(node, "typed branches")?;
        Ok(match guard.as_any().downcast_ref::<T>() {
            Some(typed) => (self.extract)(typed),
            None => Vec::new(),
        })
    }
}

impl<T> fmt::Debug for TypedBranchProvider<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypedBranchProvider<{}>", std::any::type_name::<T>())
    }
}
