//! Orquestador: compone recorrido e inyección sobre un árbol completo.

pub mod activator;
pub mod report;
pub mod tree;

pub use activator::{create_instance, resolve_dependency, resolve_optional, Activate};
pub use report::{InjectionReport, PassMode};
pub use tree::{inject_tree, null_inject_tree};
