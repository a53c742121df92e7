//! Inyección de propiedades hoja.
//!
//! - `LeafPropertyInjectionStrategy`: contrato resoluble desde el contexto.
//! - `DefaultLeafInjection`: parámetros explícitos, luego contexto; política
//!   requerida/opcional según el marcador.
//! - `NullLeafInjection`: resetea toda propiedad marcada sin resolver nada.
//! - `resolve`: búsqueda en dos niveles compartida con la activación.

pub mod default;
pub mod null;
pub mod outcome;
pub mod resolve;
pub mod strategy;

pub use default::DefaultLeafInjection;
pub use null::NullLeafInjection;
pub use outcome::{LeafOutcome, LeafSource, NodeInjection};
pub use resolve::resolve_candidate;
pub use strategy::LeafPropertyInjectionStrategy;
