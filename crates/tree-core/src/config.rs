//! Configuración del motor desde variables de entorno.
//! Convención `INJECT_TREE_MAX_NODES`; sin valor el recorrido no tiene tope.

use std::env;

use dotenvy::dotenv;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::constants::ENV_MAX_NODES;
use crate::errors::InjectError;

// Carga perezosa del archivo .env una sola vez.
static DOTENV_LOADED: Lazy<()> = Lazy::new(|| {
    let _ = dotenv(); // ignora error si no existe .env
});

/// Forzar carga temprana de .env desde aplicaciones externas si se desea.
pub fn init_dotenv() {
    Lazy::force(&DOTENV_LOADED);
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeConfig {
    /// Máximo de nodos que un recorrido puede producir.
    pub max_nodes: Option<usize>,
}

impl TreeConfig {
    pub fn unbounded() -> Self {
        Self { max_nodes: None }
    }

    pub fn with_max_nodes(max_nodes: usize) -> Self {
        Self { max_nodes: Some(max_nodes) }
    }

    pub fn from_env() -> Result<Self, InjectError> {
        init_dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Construye la configuración con una función de búsqueda arbitraria.
    /// Vacío o ausente: sin tope. No numérico o `0`: error.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, InjectError>
        where F: Fn(&str) -> Option<String>
    {
        let raw = lookup(ENV_MAX_NODES).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let max_nodes = match raw {
            None => None,
            Some(v) => match v.parse::<usize>() {
                Ok(0) => return Err(InjectError::Config(format!("{ENV_MAX_NODES} must be greater than zero"))),
                Ok(n) => Some(n),
                Err(_) => return Err(InjectError::Config(format!("{ENV_MAX_NODES} is not a number: '{v}'"))),
            },
        };
        Ok(Self { max_nodes })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup(value: Option<&'static str>) -> impl Fn(&str) -> Option<String> {
        move |key| {
            assert_eq!(key, ENV_MAX_NODES);
            value.map(str::to_string)
        }
    }

    #[test]
    fn unset_or_blank_is_unbounded() {
        assert_eq!(TreeConfig::from_lookup(lookup(None)).unwrap(), TreeConfig::unbounded());
        assert_eq!(TreeConfig::from_lookup(lookup(Some("  "))).unwrap(), TreeConfig::unbounded());
    }

    #[test]
    fn numeric_value_sets_the_limit() {
        let cfg = TreeConfig::from_lookup(lookup(Some(" 250 "))).unwrap();
        assert_eq!(cfg, TreeConfig::with_max_nodes(250));
    }

    #[test]
    fn zero_and_garbage_are_rejected() {
        assert!(matches!(TreeConfig::from_lookup(lookup(Some("0"))), Err(InjectError::Config(_))));
        assert!(matches!(TreeConfig::from_lookup(lookup(Some("many"))), Err(InjectError::Config(_))));
    }
}
