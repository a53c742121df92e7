//! Tabla de propiedades hoja marcadas.
//!
//! Cada tipo de nodo declara, una sola vez, qué campos son inyectables y cómo
//! se asignan o se resetean. La tabla es estática y se consulta por
//! `TreeNode::leaf_table`; los setters quedan borrados de tipo (`dyn Any`)
//! para que las estrategias operen sobre cualquier nodo.
//!
//! Formas soportadas:
//! - `nullable`: campo `Option<P>`; reset = `None`.
//! - `value`: campo `P: Default`; reset = `P::default()`.
//! - `embed`: reexpone las propiedades de un valor base contenido en el nodo.

use std::any::{type_name, Any};
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use crate::context::{Service, ServiceKey};
use crate::errors::InjectError;
use crate::model::InjectedLeaf;

type AssignFn = Box<dyn Fn(&mut dyn Any, &Service) -> Result<(), InjectError> + Send + Sync>;
type ResetFn = Box<dyn Fn(&mut dyn Any) -> Result<(), InjectError> + Send + Sync>;

/// Una propiedad marcada de un tipo de nodo.
pub struct LeafProperty {
    name: &'static str,
    marker: InjectedLeaf,
    declared: ServiceKey,
    nullable: bool,
    // entrada traída por `embed`; una declaración directa la reemplaza
    inherited: bool,
    assign: AssignFn,
    reset: ResetFn,
}

impl LeafProperty {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn marker(&self) -> InjectedLeaf {
        self.marker
    }

    /// Tipo declarado del campo (clave de resolución).
    pub fn declared(&self) -> &ServiceKey {
        &self.declared
    }

    /// `true` si el reset deja el campo en `None`, `false` si usa `Default`.
    pub fn is_nullable(&self) -> bool {
        self.nullable
    }

    /// `true` si la propiedad viene de un valor base (`embed`).
    pub fn is_inherited(&self) -> bool {
        self.inherited
    }

    /// Asigna `value` al campo de `node`.
    pub fn assign(&self, node: &mut dyn Any, value: &Service) -> Result<(), InjectError> {
        (self.assign)(node, value)
    }

    pub fn reset(&self, node: &mut dyn Any) -> Result<(), InjectError> {
        (self.reset)(node)
    }
}

impl fmt::Debug for LeafProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LeafProperty")
         .field("name", &self.name)
         .field("marker", &self.marker)
         .field("declared", &self.declared.type_name())
         .field("nullable", &self.nullable)
         .field("inherited", &self.inherited)
         .finish()
    }
}

/// Propiedades marcadas de un tipo, en orden de declaración.
#[derive(Debug)]
pub struct LeafTable {
    properties: Vec<LeafProperty>,
}

static EMPTY_TABLE: LeafTable = LeafTable { properties: Vec::new() };

impl LeafTable {
    pub fn builder<N: Any>() -> LeafTableBuilder<N> {
        LeafTableBuilder { properties: Vec::new(),
                           _node: PhantomData }
    }

    /// Tabla sin propiedades (nodos que sólo aportan estructura).
    pub fn empty() -> &'static LeafTable {
        &EMPTY_TABLE
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LeafProperty> {
        self.properties.iter()
    }

    pub fn get(&self, name: &str) -> Option<&LeafProperty> {
        self.properties.iter().find(|p| p.name == name)
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

impl<'a> IntoIterator for &'a LeafTable {
    type Item = &'a LeafProperty;
    type IntoIter = std::slice::Iter<'a, LeafProperty>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Builder de `LeafTable` para el tipo de nodo `N`.
///
/// Una propiedad admite un único marcador. Declarar directamente dos veces el
/// mismo nombre reemplaza la declaración anterior (y dispara un
/// `debug_assert!`); redeclarar una propiedad heredada con `embed` es un
/// override legítimo.
pub struct LeafTableBuilder<N> {
    properties: Vec<LeafProperty>,
    _node: PhantomData<fn(&mut N)>,
}

impl<N: Any> LeafTableBuilder<N> {
    /// Campo `Option<P>`.
    pub fn nullable<P, F>(self, name: &'static str, marker: InjectedLeaf, field: F) -> Self
        where P: Any + Clone,
              F: for<'a> Fn(&'a mut N) -> &'a mut Option<P> + Send + Sync + 'static
    {
        let field = Arc::new(field);
        let setter = Arc::clone(&field);
        let assign: AssignFn = Box::new(move |node: &mut dyn Any, value: &Service| {
            let owner = downcast_node::<N>(node, name)?;
            *(*setter)(owner) = Some(downcast_value::<P, N>(value, name)?);
            Ok(())
        });
        let reset: ResetFn = Box::new(move |node: &mut dyn Any| {
            *(*field)(downcast_node::<N>(node, name)?) = None;
            Ok(())
        });
        self.push(LeafProperty { name,
                                 marker,
                                 declared: ServiceKey::of::<P>(),
                                 nullable: true,
                                 inherited: false,
                                 assign,
                                 reset })
    }

    /// Campo de valor no anulable; el reset escribe `P::default()`.
    pub fn value<P, F>(self, name: &'static str, marker: InjectedLeaf, field: F) -> Self
        where P: Any + Clone + Default,
              F: for<'a> Fn(&'a mut N) -> &'a mut P + Send + Sync + 'static
    {
        let field = Arc::new(field);
        let setter = Arc::clone(&field);
        let assign: AssignFn = Box::new(move |node: &mut dyn Any, value: &Service| {
            let owner = downcast_node::<N>(node, name)?;
            *(*setter)(owner) = downcast_value::<P, N>(value, name)?;
            Ok(())
        });
        let reset: ResetFn = Box::new(move |node: &mut dyn Any| {
            *(*field)(downcast_node::<N>(node, name)?) = P::default();
            Ok(())
        });
        self.push(LeafProperty { name,
                                 marker,
                                 declared: ServiceKey::of::<P>(),
                                 nullable: false,
                                 inherited: false,
                                 assign,
                                 reset })
    }

    /// Hereda las propiedades marcadas de un valor base `B` contenido en `N`.
    ///
    /// `base` es la tabla de `B` y `project` devuelve el valor base dentro
    /// del nodo. Los marcadores se conservan tal cual, salvo que el nodo
    /// declare directamente una propiedad con el mismo nombre: esa
    /// declaración reemplaza a la heredada, sin importar el orden.
    pub fn embed<B, F>(mut self, base: &'static LeafTable, project: F) -> Self
        where B: Any,
              F: for<'a> Fn(&'a mut N) -> &'a mut B + Send + Sync + 'static
    {
        let project = Arc::new(project);
        for inherited in base.iter() {
            let to_assign = Arc::clone(&project);
            let to_reset = Arc::clone(&project);
            let assign: AssignFn = Box::new(move |node: &mut dyn Any, value: &Service| {
                let owner = downcast_node::<N>(node, inherited.name)?;
                inherited.assign((*to_assign)(owner), value)
            });
            let reset: ResetFn = Box::new(move |node: &mut dyn Any| {
                let owner = downcast_node::<N>(node, inherited.name)?;
                inherited.reset((*to_reset)(owner))
            });
            self = self.push(LeafProperty { name: inherited.name,
                                            marker: inherited.marker,
                                            declared: inherited.declared,
                                            nullable: inherited.nullable,
                                            inherited: true,
                                            assign,
                                            reset });
        }
        self
    }

    pub fn build(self) -> LeafTable {
        LeafTable { properties: self.properties }
    }

    fn push(mut self, property: LeafProperty) -> Self {
        let Some(i) = self.properties.iter().position(|p| p.name == property.name) else {
            self.properties.push(property);
            return self;
        };
        let existing = &self.properties[i];
        debug_assert!(existing.inherited || property.inherited,
                      "leaf property '{}' declared twice on {}",
                      property.name,
                      type_name::<N>());
        // una heredada nunca pisa a una declaración directa
        if !(property.inherited && !existing.inherited) {
            self.properties[i] = property;
        }
        self
    }
}

fn downcast_node<'a, N: Any>(node: &'a mut dyn Any, property: &str) -> Result<&'a mut N, InjectError> {
    node.downcast_mut::<N>()
        .ok_or_else(|| InjectError::TypeMismatch { property: property.to_string(),
                                                   expected: type_name::<N>().to_string(),
                                                   node_type: "<foreign node>".to_string() })
}

fn downcast_value<P: Any + Clone, N>(value: &Service, property: &str) -> Result<P, InjectError> {
    value.downcast_ref::<P>()
         .cloned()
         .ok_or_else(|| InjectError::TypeMismatch { property: property.to_string(),
                                                    expected: type_name::<P>().to_string(),
                                                    node_type: type_name::<N>().to_string() })
}
