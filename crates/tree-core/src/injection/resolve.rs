use crate::context::{ResolutionContext, Service, ServiceKey};
use crate::errors::InjectError;
use crate::injection::LeafSource;
use crate::model::{find_parameter, Parameter};

/// Busca un valor para `declared`: primero el primer parámetro asignable
/// (izquierda a derecha), luego el contexto. `Ok(None)` si ninguno lo tiene.
pub fn resolve_candidate(declared: &ServiceKey,
                         ctx: &dyn ResolutionContext,
                         parameters: &[Parameter])
                         -> Result<Option<(LeafSource, Service)>, InjectError> {
    if let Some((index, parameter)) = find_parameter(parameters, declared) {
        return Ok(Some((LeafSource::Parameter { index }, parameter.value().clone())));
    }
    Ok(ctx.resolve(declared)?.map(|service| (LeafSource::Context, service)))
}
