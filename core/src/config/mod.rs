mod molecule;

pub use molecule::ConfigMolecule;
