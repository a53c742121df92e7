//! `ServiceRegistry`: contexto de resolución en memoria.
//!
//! Semántica:
//! - Resolución simple: gana el último registro de la clave.
//! - Resolución múltiple: todos los registros, en orden de registro.
//! - Las fábricas se invocan en cada resolución (transient); las instancias
//!   se comparten (singleton).

use std::any::Any;
use std::sync::Arc;

use indexmap::IndexMap;

use crate::branch::{BranchProvider, InjectableNodeBranchProvider, TypedBranchProvider};
use crate::config::TreeConfig;
use crate::context::{ResolutionContext, Service, ServiceKey};
use crate::errors::InjectError;
use crate::injection::{DefaultLeafInjection, LeafPropertyInjectionStrategy};
use crate::model::{NodeRef, TreeNode};
use crate::traversal::{BreadthFirstTraversal, TreeTraversalStrategy};

/// Fábrica de un servicio; recibe el propio contexto para resolver sus
/// dependencias.
pub type ServiceFactory = Arc<dyn Fn(&dyn ResolutionContext) -> Result<Service, InjectError> + Send + Sync>;

#[derive(Clone)]
enum Registration {
    Instance(Service),
    Factory(ServiceFactory),
}

impl Registration {
    fn produce(&self, ctx: &dyn ResolutionContext) -> Result<Service, InjectError> {
        match self {
            Registration::Instance(service) => Ok(Arc::clone(service)),
            Registration::Factory(factory) => factory(ctx),
        }
    }
}

#[derive(Clone, Default)]
pub struct ServiceRegistry {
    services: IndexMap<ServiceKey, Vec<Registration>>,
}

impl ServiceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registra una instancia compartida de `T`.
    pub fn register_instance<T: Any + Send + Sync>(&mut self, value: T) -> &mut Self {
        self.push(ServiceKey::of::<T>(), Registration::Instance(Arc::new(value)))
    }

    /// Registra una fábrica de `T` invocada en cada resolución.
    pub fn register_factory<T, F>(&mut self, factory: F) -> &mut Self
        where T: Any + Send + Sync,
              F: Fn(&dyn ResolutionContext) -> Result<T, InjectError> + Send + Sync + 'static
    {
        let produce: ServiceFactory = Arc::new(move |ctx: &dyn ResolutionContext| {
            factory(ctx).map(|value| Arc::new(value) as Service)
        });
        self.push(ServiceKey::of::<T>(), Registration::Factory(produce))
    }

    /// Agrega un proveedor de ramas (registro múltiple).
    pub fn add_branch_provider<P: BranchProvider + 'static>(&mut self, provider: P) -> &mut Self {
        self.register_instance::<Arc<dyn BranchProvider>>(Arc::new(provider))
    }

    /// Enseña al recorrido a obtener los hijos de los nodos de tipo `T`.
    pub fn add_typed_branches<T, F>(&mut self, extract: F) -> &mut Self
        where T: TreeNode,
              F: Fn(&T) -> Vec<NodeRef> + Send + Sync + 'static
    {
        self.add_branch_provider(TypedBranchProvider::<T>::new(extract))
    }

    /// Registra los servicios por defecto del motor: proveedor de nodos
    /// auto-reportados, estrategia de inyección y recorrido en anchura.
    pub fn add_inject_tree(&mut self, config: &TreeConfig) -> &mut Self {
        self.add_branch_provider(InjectableNodeBranchProvider)
            .register_instance::<Arc<dyn LeafPropertyInjectionStrategy>>(Arc::new(DefaultLeafInjection))
            .register_instance::<Arc<dyn TreeTraversalStrategy>>(Arc::new(BreadthFirstTraversal::from_config(config)))
    }

    pub fn is_registered<T: Any>(&self) -> bool {
        self.services.contains_key(&ServiceKey::of::<T>())
    }

    /// Nombres de los tipos registrados, en orden de primer registro.
    pub fn registered_services(&self) -> Vec<&'static str> {
        self.services.keys().map(ServiceKey::type_name).collect()
    }

    fn push(&mut self, key: ServiceKey, registration: Registration) -> &mut Self {
        self.services.entry(key).or_default().push(registration);
        self
    }
}

impl ResolutionContext for ServiceRegistry {
    fn resolve(&self, key: &ServiceKey) -> Result<Option<Service>, InjectError> {
        match self.services.get(key).and_then(|regs| regs.last()) {
            Some(registration) => registration.produce(self).map(Some),
            None => Ok(None),
        }
    }

    fn resolve_all(&self, key: &ServiceKey) -> Result<Vec<Service>, InjectError> {
        match self.services.get(key) {
            Some(regs) => regs.iter().map(|r| r.produce(self)).collect(),
            None => Ok(Vec::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::ResolutionContextExt;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn last_registration_wins_for_single_resolution() {
        let mut reg = ServiceRegistry::new();
        reg.register_instance(String::from("a")).register_instance(String::from("b"));
        assert_eq!(reg.get::<String>().expect("resolve"), Some(String::from("b")));
        assert_eq!(reg.get_all::<String>().expect("resolve all"), vec![String::from("a"), String::from("b")]);
    }

    #[test]
    fn missing_registration_is_absent_not_an_error() {
        let reg = ServiceRegistry::new();
        assert_eq!(reg.get::<u32>().expect("resolve"), None);
        assert!(reg.get_all::<u32>().expect("resolve all").is_empty());
        assert_eq!(reg.get_required::<u32>().unwrap_err(), InjectError::MissingService("u32".to_string()));
    }

    #[test]
    fn factories_run_on_every_resolution_and_see_the_context() {
        static CALLS: AtomicUsize = AtomicUsize::new(0);
        let mut reg = ServiceRegistry::new();
        reg.register_instance(40u32).register_factory::<u64, _>(|ctx| {
                                        CALLS.fetch_add(1, Ordering::SeqCst);
                                        Ok(u64::from(ctx.get_required::<u32>()?) + 2)
                                    });
        assert_eq!(reg.get::<u64>().expect("first"), Some(42));
        assert_eq!(reg.get::<u64>().expect("second"), Some(42));
        assert_eq!(CALLS.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn factory_errors_propagate() {
        let mut reg = ServiceRegistry::new();
        reg.register_factory::<u8, _>(|_| Err(InjectError::Resolution("boom".into())));
        assert_eq!(reg.get::<u8>().unwrap_err(), InjectError::Resolution("boom".into()));
    }

    #[test]
    fn defaults_are_registered_in_order() {
        let mut reg = ServiceRegistry::new();
        reg.add_inject_tree(&TreeConfig::default());
        assert!(reg.is_registered::<Arc<dyn BranchProvider>>());
        assert!(reg.is_registered::<Arc<dyn LeafPropertyInjectionStrategy>>());
        assert!(reg.is_registered::<Arc<dyn TreeTraversalStrategy>>());
        assert_eq!(reg.registered_services().len(), 3);
    }
}
