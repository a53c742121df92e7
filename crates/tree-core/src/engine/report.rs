use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use uuid::Uuid;

use crate::constants::CORE_VERSION;
use crate::errors::InjectError;
use crate::hashing::hash_value;
use crate::injection::{LeafSource, NodeInjection};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PassMode {
    Inject,
    Reset,
}

/// Resumen de una pasada sobre el árbol, un `NodeInjection` por nodo en
/// orden de visita.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InjectionReport {
    pub pass_id: Uuid,
    pub mode: PassMode,
    pub started_at: DateTime<Utc>, // metadato (no entra en fingerprint)
    pub nodes: Vec<NodeInjection>,
}

impl InjectionReport {
    pub fn new(mode: PassMode) -> Self {
        Self { pass_id: Uuid::new_v4(),
               mode,
               started_at: Utc::now(),
               nodes: Vec::new() }
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Tipos de nodo en orden de visita.
    pub fn visit_order(&self) -> Vec<&str> {
        self.nodes.iter().map(|n| n.node_type.as_str()).collect()
    }

    /// Propiedades a las que se escribió un valor resuelto.
    pub fn assigned_count(&self) -> usize {
        self.nodes.iter().map(NodeInjection::assigned).sum()
    }

    pub fn untouched_count(&self) -> usize {
        self.nodes
            .iter()
            .flat_map(|n| n.properties.iter())
            .filter(|o| o.source == LeafSource::Untouched)
            .count()
    }

    /// Hash determinista de la pasada; excluye `pass_id` y `started_at`.
    pub fn fingerprint(&self) -> Result<String, InjectError> {
        let nodes = serde_json::to_value(&self.nodes).map_err(InjectError::serialization)?;
        let mode = serde_json::to_value(self.mode).map_err(InjectError::serialization)?;
        Ok(hash_value(&json!({
            "core_version": CORE_VERSION,
            "mode": mode,
            "nodes": nodes,
        })))
    }

    /// Reporte completo como JSON legible.
    pub fn to_json_pretty(&self) -> Result<String, InjectError> {
        serde_json::to_string_pretty(self).map_err(InjectError::serialization)
    }
}
