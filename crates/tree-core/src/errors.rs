//! Errores del motor de inyección.
//!
//! Un único enum cubre todo el contrato observable: ninguna variante se
//! reintenta internamente, todas se devuelven al llamador del orquestador.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub enum InjectError {
    /// Propiedad marcada como requerida sin valor en parámetros ni contexto.
    #[error("required property '{property}' of type '{declared_type}' on instance '{node_type}' could not be resolved")]
    UnresolvedRequired { property: String, declared_type: String, node_type: String },
    /// Servicio obligatorio (estrategias del orquestador) no registrado.
    #[error("required service '{0}' is not registered")]
    MissingService(String),
    /// El `RefCell` del nodo ya estaba prestado al intentar leerlo o mutarlo.
    #[error("node is already borrowed during {operation}")]
    NodeBorrowed { operation: String },
    /// El valor entregado no corresponde al tipo declarado de la propiedad.
    #[error("value for property '{property}' on '{node_type}' is not a '{expected}'")]
    TypeMismatch { property: String, expected: String, node_type: String },
    #[error("branch provider failed: {0}")]
    Provider(String),
    #[error("resolution failed: {0}")]
    Resolution(String),
    #[error("activation of '{type_name}' failed: {reason}")]
    Activation { type_name: String, reason: String },
    #[error("traversal exceeded the configured limit of {0} nodes")]
    NodeLimitExceeded(usize),
    #[error("invalid configuration: {0}")]
    Config(String),
    /// Fallo al serializar un reporte (fingerprint o salida JSON).
    #[error("serialization failed: {0}")]
    Serialization(String),
}

impl InjectError {
    /// Construye `UnresolvedRequired` a partir de los nombres de tipo.
    pub fn unresolved(property: &str, declared_type: &str, node_type: &str) -> Self {
        Self::UnresolvedRequired { property: property.to_string(),
                                   declared_type: declared_type.to_string(),
                                   node_type: node_type.to_string() }
    }

    pub fn borrowed(operation: &str) -> Self {
        Self::NodeBorrowed { operation: operation.to_string() }
    }

    pub fn serialization(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unresolved_message_names_property_type_and_node() {
        let err = InjectError::unresolved("clock", "app::Clock", "app::Window");
        assert_eq!(err.to_string(),
                   "required property 'clock' of type 'app::Clock' on instance 'app::Window' could not be resolved");
    }

    #[test]
    fn errors_roundtrip_through_json() {
        let err = InjectError::NodeLimitExceeded(12);
        let json = serde_json::to_string(&err).expect("serialize");
        let back: InjectError = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, err);
    }
}
