use std::ffi::OsStr;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use nalgebra::Vector3;

use crate::atom::Atom;
use crate::config::ConfigMolecule;
use crate::error::GeometryError;
use crate::xyz;

/// Represents a molecule as an ordered list of atoms. The input order is
/// preserved and defines the atom indices used by all downstream results.
#[derive(Debug)]
pub struct Molecule {
    pub(crate) atoms: Vec<Atom>,
}

impl Molecule {
    pub fn new(atoms: Vec<Atom>) -> Self {
        Self { atoms }
    }

    /// Loads a molecule from a geometry file, picking the format from the
    /// file extension (`.xyz` or `.json`, case-insensitive).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, GeometryError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(OsStr::to_str)
            .ok_or(GeometryError::MissingExtension)?;

        match extension.to_ascii_lowercase().as_str() {
            "xyz" => xyz::read_xyz_file(path),
            "json" => {
                let config: ConfigMolecule =
                    serde_json::from_reader(BufReader::new(File::open(path)?))?;
                config.try_into()
            }
            other => Err(GeometryError::UnsupportedFormat(other.to_string())),
        }
    }

    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    /// Positions of the carbon atoms in input order. Each one carries a
    /// p-orbital of the π-system, and its index here is the atom index of
    /// every matrix the analysis produces.
    pub fn pi_centers(&self) -> Vec<Vector3<f64>> {
        self.atoms
            .iter()
            .filter(|atom| atom.is_carbon())
            .map(|atom| atom.position)
            .collect()
    }
}
