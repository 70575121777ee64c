use nalgebra::Vector3;
use serde::Deserialize;

use crate::{atom::Atom, element::ElementType, error::GeometryError, molecule::Molecule};

/// Represents a full molecule in a config file.
/// A molecule is just a list of positioned atoms.
#[derive(Deserialize)]
pub struct ConfigMolecule(Vec<ConfigAtom>);

#[derive(Deserialize)]
struct ConfigAtom {
    element: ElementType,
    position: Vec<f64>,
}

impl TryFrom<ConfigMolecule> for Molecule {
    type Error = GeometryError;

    fn try_from(value: ConfigMolecule) -> Result<Self, GeometryError> {
        let ConfigMolecule(config_atoms) = value;

        let mut atoms = Vec::with_capacity(config_atoms.len());

        for (index, atom) in config_atoms.into_iter().enumerate() {
            let &[x, y, z] = atom.position.as_slice() else {
                return Err(GeometryError::BadPosition { atom: index });
            };

            atoms.push(Atom {
                position: Vector3::new(x, y, z),
                element_type: atom.element,
            });
        }

        Ok(Self { atoms })
    }
}
