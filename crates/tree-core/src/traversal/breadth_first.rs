//! Recorrido en anchura con deduplicación por identidad.
//!
//! Invariantes:
//! - Cada nodo distinto se entrega exactamente una vez por llamada.
//! - Todo nodo de profundidad d sale antes que cualquiera de profundidad d+1.
//! - Los hijos de un nodo se piden al avanzar al siguiente, es decir después
//!   de que el consumidor procesó (inyectó) el nodo actual.

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

use log::{debug, trace};

use crate::branch::BranchProvider;
use crate::config::TreeConfig;
use crate::context::{ResolutionContext, ResolutionContextExt};
use crate::errors::InjectError;
use crate::model::{NodeKey, NodeRef};
use crate::traversal::{NodeStream, TreeTraversalStrategy};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BreadthFirstTraversal {
    max_nodes: Option<usize>,
}

impl BreadthFirstTraversal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &TreeConfig) -> Self {
        Self { max_nodes: config.max_nodes }
    }

    pub fn max_nodes(&self) -> Option<usize> {
        self.max_nodes
    }

    /// Versión concreta de `enumerate_nodes` (sin caja).
    pub fn walk(&self, root: NodeRef, ctx: &dyn ResolutionContext) -> Result<BreadthFirstNodes, InjectError> {
        let providers = ctx.get_all::<Arc<dyn BranchProvider>>()?;
        debug!("traversal:start providers={} max_nodes={:?}", providers.len(), self.max_nodes);
        Ok(BreadthFirstNodes::new(root, providers, self.max_nodes))
    }
}

impl TreeTraversalStrategy for BreadthFirstTraversal {
    fn enumerate_nodes(&self, root: NodeRef, ctx: &dyn ResolutionContext) -> Result<NodeStream, InjectError> {
        Ok(Box::new(self.walk(root, ctx)?))
    }
}

/// Iterador del recorrido en anchura.
pub struct BreadthFirstNodes {
    providers: Vec<Arc<dyn BranchProvider>>,
    queue: VecDeque<NodeRef>,
    // retiene cada nodo visitado: su dirección no puede reutilizarse mientras
    // dure el recorrido
    visited: HashMap<NodeKey, NodeRef>,
    pending: Option<NodeRef>,
    yielded: usize,
    max_nodes: Option<usize>,
    done: bool,
}

impl BreadthFirstNodes {
    pub fn new(root: NodeRef, providers: Vec<Arc<dyn BranchProvider>>, max_nodes: Option<usize>) -> Self {
        let mut visited = HashMap::new();
        visited.insert(NodeKey::of(&root), NodeRef::clone(&root));
        Self { providers,
               queue: VecDeque::from([root]),
               visited,
               pending: None,
               yielded: 0,
               max_nodes,
               done: false }
    }

    /// Encola los hijos aún no visitados de `parent`, proveedor por
    /// proveedor y en el orden que cada uno los devuelve.
    fn expand(&mut self, parent: &NodeRef) -> Result<(), InjectError> {
        for provider in &self.providers {
            for child in provider.branches(parent)? {
                let key = NodeKey::of(&child);
                if self.visited.contains_key(&key) {
                    continue;
                }
                self.visited.insert(key, NodeRef::clone(&child));
                self.queue.push_back(child);
            }
        }
        Ok(())
    }

    fn fail(&mut self, err: InjectError) -> Option<Result<NodeRef, InjectError>> {
        self.done = true;
        self.queue.clear();
        Some(Err(err))
    }
}

impl Iterator for BreadthFirstNodes {
    type Item = Result<NodeRef, InjectError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        if let Some(parent) = self.pending.take() {
            if let Err(err) = self.expand(&parent) {
                return self.fail(err);
            }
        }
        let Some(node) = self.queue.pop_front() else {
            self.done = true;
            debug!("traversal:done visited={}", self.visited.len());
            return None;
        };
        if let Some(limit) = self.max_nodes {
            if self.yielded >= limit {
                return self.fail(InjectError::NodeLimitExceeded(limit));
            }
        }
        self.yielded += 1;
        trace!("traversal:yield index={} queued={}", self.yielded - 1, self.queue.len());
        self.pending = Some(NodeRef::clone(&node));
        Some(Ok(node))
    }
}
