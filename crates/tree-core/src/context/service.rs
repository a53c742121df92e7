use std::any::{type_name, Any, TypeId};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::errors::InjectError;

/// Valor resuelto, compartido y borrado de tipo.
pub type Service = Arc<dyn Any + Send + Sync>;

/// Tipo declarado de un servicio o propiedad.
///
/// La igualdad sólo compara el `TypeId`; el nombre es diagnóstico.
#[derive(Clone, Copy)]
pub struct ServiceKey {
    type_id: TypeId,
    type_name: &'static str,
}

impl ServiceKey {
    pub fn of<T: Any + ?Sized>() -> Self {
        Self { type_id: TypeId::of::<T>(),
               type_name: type_name::<T>() }
    }

    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }
}

impl PartialEq for ServiceKey {
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id
    }
}

impl Eq for ServiceKey {}

impl Hash for ServiceKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.type_id.hash(state);
    }
}

impl fmt::Debug for ServiceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ServiceKey({})", self.type_name)
    }
}

impl fmt::Display for ServiceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name)
    }
}

/// Contenedor externo de dependencias.
///
/// Contrato:
/// - `resolve` devuelve `Ok(None)` si no hay registro para la clave.
/// - `resolve_all` devuelve todos los registros en orden de registro
///   (vacío si no hay ninguno).
/// - Cualquier `Err` se propaga sin modificar al llamador del motor.
pub trait ResolutionContext {
    fn resolve(&self, key: &ServiceKey) -> Result<Option<Service>, InjectError>;

    fn resolve_all(&self, key: &ServiceKey) -> Result<Vec<Service>, InjectError>;
}

/// Helpers tipados sobre cualquier `ResolutionContext`.
pub trait ResolutionContextExt: ResolutionContext {
    fn get<T: Any + Clone>(&self) -> Result<Option<T>, InjectError> {
        let key = ServiceKey::of::<T>();
        match self.resolve(&key)? {
            Some(service) => downcast_service::<T>(&key, &service).map(Some),
            None => Ok(None),
        }
    }

    fn get_required<T: Any + Clone>(&self) -> Result<T, InjectError> {
        self.get::<T>()?
            .ok_or_else(|| InjectError::MissingService(type_name::<T>().to_string()))
    }

    fn get_all<T: Any + Clone>(&self) -> Result<Vec<T>, InjectError> {
        let key = ServiceKey::of::<T>();
        self.resolve_all(&key)?
            .iter()
            .map(|service| downcast_service::<T>(&key, service))
            .collect()
    }
}

impl<C: ResolutionContext + ?Sized> ResolutionContextExt for C {}

/// Extrae un `T` de un servicio resuelto bajo `key`.
pub fn downcast_service<T: Any + Clone>(key: &ServiceKey, service: &Service) -> Result<T, InjectError> {
    service.downcast_ref::<T>()
           .cloned()
           .ok_or_else(|| InjectError::Resolution(format!("service registered as '{key}' is not a '{}'", type_name::<T>())))
}
