//! Estrategias de recorrido del árbol.

pub mod breadth_first;
pub mod strategy;

pub use breadth_first::{BreadthFirstNodes, BreadthFirstTraversal};
pub use strategy::{NodeStream, TreeTraversalStrategy};
