use std::any::type_name;
use std::sync::Arc;

use tree_core::context::{Service, ServiceKey};
use tree_core::{node_ref, tree_node, DefaultLeafInjection, InjectError, LeafPropertyInjectionStrategy, LeafSource,
                NodeRef, Parameter, ResolutionContext, ServiceRegistry};

#[derive(Debug, Clone, PartialEq)]
struct Clock(u64);

#[derive(Debug, Clone, PartialEq)]
struct Endpoint(String);

#[derive(Default)]
struct Sensor {
    clock: Option<Clock>,
    endpoint: Option<Endpoint>,
    retries: u32,
    label: Option<String>,
}

tree_node! {
    Sensor {
        #[leaf] clock: nullable Clock,
        #[leaf] endpoint: nullable Endpoint,
        #[leaf(required = false)] retries: value u32,
    }
}

fn context() -> ServiceRegistry {
    let mut reg = ServiceRegistry::new();
    reg.register_instance(Clock(1))
       .register_instance(Endpoint("ctx".into()))
       .register_instance(String::from("from-context"));
    reg
}

#[test]
fn values_come_from_the_context_in_declaration_order() {
    let sensor = node_ref(Sensor::default());
    let node: NodeRef = sensor.clone();
    let outcome = DefaultLeafInjection.inject(&node, &context(), &[]).expect("inject");

    let s = sensor.borrow();
    assert_eq!(s.clock, Some(Clock(1)));
    assert_eq!(s.endpoint, Some(Endpoint("ctx".into())));
    assert_eq!(outcome.node_type, type_name::<Sensor>());
    let names: Vec<_> = outcome.properties.iter().map(|o| o.property.as_str()).collect();
    assert_eq!(names, vec!["clock", "endpoint", "retries"]);
    assert_eq!(outcome.source_of("clock"), Some(LeafSource::Context));
}

#[test]
fn explicit_parameter_beats_the_context() {
    let sensor = node_ref(Sensor::default());
    let node: NodeRef = sensor.clone();
    let params = [Parameter::new(Clock(7))];
    let outcome = DefaultLeafInjection.inject(&node, &context(), &params).expect("inject");

    assert_eq!(sensor.borrow().clock, Some(Clock(7)));
    assert_eq!(outcome.source_of("clock"), Some(LeafSource::Parameter { index: 0 }));
    assert_eq!(outcome.source_of("endpoint"), Some(LeafSource::Context));
}

#[test]
fn first_assignable_parameter_wins() {
    let sensor = node_ref(Sensor::default());
    let node: NodeRef = sensor.clone();
    let params = [Parameter::new(Endpoint("p".into())), Parameter::new(Clock(2)), Parameter::new(Clock(3))];
    let outcome = DefaultLeafInjection.inject(&node, &ServiceRegistry::new(), &params).expect("inject");

    assert_eq!(sensor.borrow().clock, Some(Clock(2)));
    assert_eq!(outcome.source_of("clock"), Some(LeafSource::Parameter { index: 1 }));
    assert_eq!(outcome.source_of("endpoint"), Some(LeafSource::Parameter { index: 0 }));
}

#[test]
fn missing_required_stops_at_the_offending_property() {
    let sensor = node_ref(Sensor { retries: 5, ..Sensor::default() });
    let node: NodeRef = sensor.clone();
    let mut reg = ServiceRegistry::new();
    reg.register_instance(Clock(1)).register_instance(9u32);

    let err = DefaultLeafInjection.inject(&node, &reg, &[]).expect_err("endpoint is missing");
    assert_eq!(err,
               InjectError::UnresolvedRequired { property: "endpoint".into(),
                                                 declared_type: type_name::<Endpoint>().into(),
                                                 node_type: type_name::<Sensor>().into() });
    let s = sensor.borrow();
    assert_eq!(s.clock, Some(Clock(1)), "earlier property keeps its value");
    assert_eq!(s.retries, 5, "later property is not touched");
}

#[test]
fn optional_without_value_keeps_its_current_value() {
    let sensor = node_ref(Sensor { retries: 9, ..Sensor::default() });
    let node: NodeRef = sensor.clone();
    let outcome = DefaultLeafInjection.inject(&node, &context(), &[]).expect("inject");

    assert_eq!(sensor.borrow().retries, 9);
    assert_eq!(outcome.source_of("retries"), Some(LeafSource::Untouched));
    assert_eq!(outcome.assigned(), 2);
}

#[test]
fn optional_with_value_is_assigned() {
    let sensor = node_ref(Sensor { retries: 9, ..Sensor::default() });
    let node: NodeRef = sensor.clone();
    let mut reg = context();
    reg.register_instance(4u32);
    DefaultLeafInjection.inject(&node, &reg, &[]).expect("inject");
    assert_eq!(sensor.borrow().retries, 4);
}

#[test]
fn unmarked_fields_are_never_written() {
    let sensor = node_ref(Sensor { label: Some("keep".into()),
                                   ..Sensor::default() });
    let node: NodeRef = sensor.clone();
    DefaultLeafInjection.inject(&node, &context(), &[Parameter::new(String::from("param"))]).expect("inject");
    assert_eq!(sensor.borrow().label.as_deref(), Some("keep"));
}

#[test]
fn borrowed_node_is_reported_instead_of_panicking() {
    let sensor = node_ref(Sensor::default());
    let node: NodeRef = sensor.clone();
    let _held = sensor.borrow();
    let err = DefaultLeafInjection.inject(&node, &context(), &[]).expect_err("node is borrowed");
    assert!(matches!(err, InjectError::NodeBorrowed { .. }));
}

/// Contexto que responde cualquier clave con un `u8`.
struct Mislabeled;

impl ResolutionContext for Mislabeled {
    fn resolve(&self, _key: &ServiceKey) -> Result<Option<Service>, InjectError> {
        Ok(Some(Arc::new(42u8)))
    }

    fn resolve_all(&self, _key: &ServiceKey) -> Result<Vec<Service>, InjectError> {
        Ok(Vec::new())
    }
}

#[test]
fn value_of_the_wrong_type_is_a_mismatch() {
    let node: NodeRef = node_ref(Sensor::default());
    let err = DefaultLeafInjection.inject(&node, &Mislabeled, &[]).expect_err("u8 is not a Clock");
    assert!(matches!(err, InjectError::TypeMismatch { ref property, .. } if property == "clock"));
}

struct Unavailable;

impl ResolutionContext for Unavailable {
    fn resolve(&self, key: &ServiceKey) -> Result<Option<Service>, InjectError> {
        Err(InjectError::Resolution(format!("container offline while resolving {key}")))
    }

    fn resolve_all(&self, _key: &ServiceKey) -> Result<Vec<Service>, InjectError> {
        Ok(Vec::new())
    }
}

#[test]
fn context_failures_propagate_unchanged() {
    let node: NodeRef = node_ref(Sensor::default());
    let err = DefaultLeafInjection.inject(&node, &Unavailable, &[]).expect_err("context is down");
    assert_eq!(err,
               InjectError::Resolution(format!("container offline while resolving {}", type_name::<Clock>())));

    // un parámetro explícito evita consultar el contexto para esa propiedad
    let err = DefaultLeafInjection.inject(&node, &Unavailable, &[Parameter::new(Clock(3))])
                                  .expect_err("endpoint still asks the context");
    assert!(matches!(err, InjectError::Resolution(ref m) if m.ends_with(type_name::<Endpoint>())));
}

struct Bare;

tree_node! { Bare {} }

#[test]
fn node_without_marked_properties_is_a_no_op() {
    let node: NodeRef = node_ref(Bare);
    let outcome = DefaultLeafInjection.inject(&node, &ServiceRegistry::new(), &[]).expect("inject");
    assert!(outcome.properties.is_empty());
    assert!(Bare::injected_leaves().is_empty());
}
