//! Contexto de resolución: contrato del contenedor externo y una
//! implementación en memoria (`ServiceRegistry`).

pub mod registry;
pub mod service;

pub use registry::{ServiceFactory, ServiceRegistry};
pub use service::{downcast_service, ResolutionContext, ResolutionContextExt, Service, ServiceKey};
