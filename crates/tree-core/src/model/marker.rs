use serde::{Deserialize, Serialize};

/// Marcador de una propiedad hoja inyectable.
///
/// `is_required` (por defecto `true`) decide qué pasa cuando no hay valor:
/// requerida aborta la pasada, opcional deja la propiedad como estaba.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InjectedLeaf {
    is_required: bool,
}

impl InjectedLeaf {
    pub const fn new(is_required: bool) -> Self {
        Self { is_required }
    }

    pub const fn required() -> Self {
        Self::new(true)
    }

    pub const fn optional() -> Self {
        Self::new(false)
    }

    pub const fn is_required(&self) -> bool {
        self.is_required
    }
}

impl Default for InjectedLeaf {
    fn default() -> Self {
        Self::required()
    }
}
