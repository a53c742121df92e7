//! Constantes del motor de inyección.

/// Versión lógica del motor. Forma parte del input del fingerprint de un
/// `InjectionReport`: un cambio incompatible en la semántica de recorrido o
/// de inyección debe subirla para que los fingerprints previos no coincidan.
pub const CORE_VERSION: &str = "T1.0";

/// Variable de entorno que limita la cantidad de nodos de un recorrido.
pub const ENV_MAX_NODES: &str = "INJECT_TREE_MAX_NODES";
