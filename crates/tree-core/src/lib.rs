//! tree-core: inyección de propiedades hoja sobre árboles de objetos.
//!
//! Un recorrido en anchura descubre los nodos alcanzables desde una raíz
//! (vía proveedores de ramas) y una estrategia de inyección asigna cada
//! propiedad marcada desde parámetros explícitos o desde el contexto.
pub mod branch;
pub mod config;
pub mod constants;
pub mod context;
pub mod engine;
pub mod errors;
pub mod hashing;
pub mod injection;
pub mod macros;
pub mod model;
pub mod traversal;

pub use branch::{BranchProvider, InjectableNodeBranchProvider, TypedBranchProvider};
pub use config::TreeConfig;
pub use context::{ResolutionContext, ResolutionContextExt, Service, ServiceKey, ServiceRegistry};
pub use engine::{create_instance, inject_tree, null_inject_tree, resolve_dependency, resolve_optional, Activate,
                 InjectionReport, PassMode};
pub use errors::InjectError;
pub use injection::{DefaultLeafInjection, LeafOutcome, LeafPropertyInjectionStrategy, LeafSource, NodeInjection,
                    NullLeafInjection};
pub use model::{node_ref, InjectableNode, InjectedLeaf, LeafTable, LeafTableBuilder, NodeKey, NodeRef, Parameter,
                TreeNode};
pub use traversal::{BreadthFirstTraversal, TreeTraversalStrategy};

#[doc(hidden)]
pub mod __private {
    pub use once_cell::sync::Lazy;
}
