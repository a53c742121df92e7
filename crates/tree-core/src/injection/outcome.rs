use serde::{Deserialize, Serialize};

/// Origen del valor de una propiedad tras procesar un nodo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LeafSource {
    /// Parámetro explícito en la posición `index`.
    Parameter { index: usize },
    /// Resuelto por el contexto.
    Context,
    /// Opcional sin valor: se dejó como estaba.
    Untouched,
    /// Reseteado a `None` / `Default`.
    Reset,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeafOutcome {
    pub property: String,
    pub declared_type: String,
    pub source: LeafSource,
}

/// Resultado de procesar un nodo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeInjection {
    pub node_type: String,
    pub properties: Vec<LeafOutcome>,
}

impl NodeInjection {
    pub fn new(node_type: &str) -> Self {
        Self { node_type: node_type.to_string(),
               properties: Vec::new() }
    }

    pub fn record(&mut self, property: &str, declared_type: &str, source: LeafSource) {
        self.properties.push(LeafOutcome { property: property.to_string(),
                                           declared_type: declared_type.to_string(),
                                           source });
    }

    pub fn source_of(&self, property: &str) -> Option<LeafSource> {
        self.properties.iter().find(|o| o.property == property).map(|o| o.source)
    }

    /// Cantidad de propiedades a las que se escribió un valor.
    pub fn assigned(&self) -> usize {
        self.properties
            .iter()
            .filter(|o| matches!(o.source, LeafSource::Parameter { .. } | LeafSource::Context))
            .count()
    }
}
