//! Nodos del árbol.
//!
//! Un nodo es cualquier instancia del llamador envuelta en
//! `Rc<RefCell<dyn TreeNode>>`. El motor nunca crea ni destruye nodos: sólo
//! lee su estructura y muta sus propiedades marcadas. La identidad es la
//! dirección de la asignación `Rc`, no la igualdad estructural.

use std::any::Any;
use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;

use crate::errors::InjectError;
use crate::model::LeafTable;

/// Referencia compartida a un nodo.
pub type NodeRef = Rc<RefCell<dyn TreeNode>>;

/// Capacidad que todo tipo de nodo implementa.
///
/// Lo habitual es derivarla con `tree_node!`; implementarla a mano sólo hace
/// falta para tablas con `LeafTableBuilder::embed` o lógica especial.
pub trait TreeNode: Any {
    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// Nombre del tipo concreto, usado en errores y reportes.
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    /// Propiedades marcadas del tipo. Por defecto ninguna.
    fn leaf_table(&self) -> &'static LeafTable {
        LeafTable::empty()
    }

    /// Capacidad de auto-reporte de hijos, si el tipo la implementa.
    fn as_injectable(&self) -> Option<&dyn InjectableNode> {
        None
    }
}

/// Nodo que expone sus propias ramas.
pub trait InjectableNode {
    /// Hijos directos. Debe ser finito y no depender de llamadas previas.
    fn branches(&self) -> Vec<NodeRef>;
}

/// Identidad de un nodo (dirección de su `Rc`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeKey(usize);

impl NodeKey {
    pub fn of(node: &NodeRef) -> Self {
        NodeKey(Rc::as_ptr(node) as *const () as usize)
    }
}

/// Envuelve un valor como nodo compartido manteniendo su tipo concreto.
pub fn node_ref<T: TreeNode>(node: T) -> Rc<RefCell<T>> {
    Rc::new(RefCell::new(node))
}

/// Préstamo inmutable que devuelve error en vez de entrar en pánico.
pub fn borrow_node<'a>(node: &'a NodeRef, operation: &str) -> Result<Ref<'a, dyn TreeNode>, InjectError> {
    node.try_borrow().map_err(|_| InjectError::borrowed(operation))
}

pub fn borrow_node_mut<'a>(node: &'a NodeRef, operation: &str) -> Result<RefMut<'a, dyn TreeNode>, InjectError> {
    node.try_borrow_mut().map_err(|_| InjectError::borrowed(operation))
}
