//! Proveedores de ramas: dado un nodo, devuelven sus hijos directos.
//!
//! El recorrido consulta todos los proveedores registrados, en orden de
//! registro; un proveedor que no aplica a un nodo devuelve una lista vacía.

pub mod injectable;
pub mod provider;
pub mod typed;

pub use injectable::InjectableNodeBranchProvider;
pub use provider::BranchProvider;
pub use typed::TypedBranchProvider;
