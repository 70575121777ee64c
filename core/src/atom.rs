use nalgebra::Vector3;

use crate::element::ElementType;

/// Represents an atom in a molecule.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Atom {
    pub(crate) position: Vector3<f64>,
    pub(crate) element_type: ElementType,
}

impl Atom {
    pub fn new(element_type: ElementType, position: Vector3<f64>) -> Self {
        Self {
            position,
            element_type,
        }
    }

    pub fn element_type(&self) -> ElementType {
        self.element_type
    }

    pub fn position(&self) -> &Vector3<f64> {
        &self.position
    }

    /// Whether this atom contributes a p-orbital to the π-system
    pub fn is_carbon(&self) -> bool {
        self.element_type == ElementType::C
    }
}
