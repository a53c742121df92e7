//! Parámetros explícitos de una pasada de inyección.
//!
//! Se consultan antes que el contexto de resolución. Gana el primer parámetro
//! (izquierda a derecha) cuyo tipo coincide con el tipo declarado.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use crate::context::{Service, ServiceKey};

#[derive(Clone)]
pub struct Parameter {
    key: ServiceKey,
    value: Service,
}

impl Parameter {
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self { key: ServiceKey::of::<T>(),
               value: Arc::new(value) }
    }

    pub fn key(&self) -> &ServiceKey {
        &self.key
    }

    pub fn value(&self) -> &Service {
        &self.value
    }

    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.value.downcast_ref::<T>()
    }
}

impl fmt::Debug for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Parameter").field("type", &self.key.type_name()).finish()
    }
}

/// Primer parámetro asignable a `declared`, con su índice.
pub fn find_parameter<'a>(parameters: &'a [Parameter], declared: &ServiceKey) -> Option<(usize, &'a Parameter)> {
    parameters.iter().enumerate().find(|(_, p)| p.key() == declared)
}
