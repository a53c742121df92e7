//! Modelo neutral del árbol: nodos, marcador de propiedades, tabla de
//! propiedades hoja y parámetros explícitos.

pub mod leaf;
pub mod marker;
pub mod node;
pub mod parameter;

pub use leaf::{LeafProperty, LeafTable, LeafTableBuilder};
pub use marker::InjectedLeaf;
pub use node::{borrow_node, borrow_node_mut, node_ref, InjectableNode, NodeKey, NodeRef, TreeNode};
pub use parameter::{find_parameter, Parameter};
