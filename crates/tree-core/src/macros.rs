//! Macros utilitarias para declarar tipos de nodo.
//!
//! Exportadas en la raíz del crate:
//!   use tree_core::tree_node;

/// Implementa `TreeNode` (y opcionalmente `InjectableNode`) para un struct ya
/// declarado, con su tabla de propiedades marcadas.
///
/// Cada propiedad indica su forma: `nullable` para campos `Option<P>`
/// (se declara `P`) o `value` para campos `P: Default`.
///
/// ```ignore
/// tree_node! {
///     Root {
///         #[leaf] clock: nullable Clock,
///         #[leaf(required = false)] retries: value u32,
///     },
///     branches(self) { self.children.clone() }
/// }
/// ```
#[macro_export]
macro_rules! tree_node {
    // ---------------- Con auto-reporte de ramas ----------------
    (
        $name:ident {
            $( #[leaf $( (required = $req:expr) )? ] $field:ident : $kind:ident $fty:ty ),* $(,)?
        },
        branches($self_ident:ident) $body:block
    ) => {
        $crate::tree_node!(@table $name { $( #[leaf $( (required = $req) )? ] $field : $kind $fty ),* });
        impl $crate::model::TreeNode for $name {
            fn as_any(&self) -> &dyn ::std::any::Any { self }
            fn as_any_mut(&mut self) -> &mut dyn ::std::any::Any { self }
            fn leaf_table(&self) -> &'static $crate::model::LeafTable { Self::injected_leaves() }
            fn as_injectable(&self) -> Option<&dyn $crate::model::InjectableNode> { Some(self) }
        }
        impl $crate::model::InjectableNode for $name {
            fn branches(&$self_ident) -> Vec<$crate::model::NodeRef> $body
        }
    };

    // ---------------- Sólo propiedades ----------------
    (
        $name:ident {
            $( #[leaf $( (required = $req:expr) )? ] $field:ident : $kind:ident $fty:ty ),* $(,)?
        }
    ) => {
        $crate::tree_node!(@table $name { $( #[leaf $( (required = $req) )? ] $field : $kind $fty ),* });
        impl $crate::model::TreeNode for $name {
            fn as_any(&self) -> &dyn ::std::any::Any { self }
            fn as_any_mut(&mut self) -> &mut dyn ::std::any::Any { self }
            fn leaf_table(&self) -> &'static $crate::model::LeafTable { Self::injected_leaves() }
        }
    };

    (@table $name:ident {
        $( #[leaf $( (required = $req:expr) )? ] $field:ident : $kind:ident $fty:ty ),*
    }) => {
        impl $name {
            /// Propiedades marcadas del tipo, en orden de declaración.
            pub fn injected_leaves() -> &'static $crate::model::LeafTable {
                static TABLE: $crate::__private::Lazy<$crate::model::LeafTable> = $crate::__private::Lazy::new(|| {
                    $crate::model::LeafTable::builder::<$name>()
                        $( .$kind::<$fty, _>(stringify!($field),
                                             $crate::__leaf_marker!($($req)?),
                                             |node: &mut $name| &mut node.$field) )*
                        .build()
                });
                &TABLE
            }
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __leaf_marker {
    () => {
        $crate::model::InjectedLeaf::required()
    };
    ($req:expr) => {
        $crate::model::InjectedLeaf::new($req)
    };
}
