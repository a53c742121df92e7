//! InjectTree
//!
//! Fachada del workspace: re-exporta `tree-core` completo (tipos, estrategias,
//! orquestador y la macro `tree_node!`) para consumirlo desde un solo crate.

pub use tree_core::*;
