use std::fs;

use huckel_core::element::ElementType;
use huckel_core::error::GeometryError;
use huckel_core::molecule::Molecule;

#[test]
fn loads_an_xyz_file_case_insensitively() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ethylene.XYZ");
    fs::write(
        &path,
        "4\nethylene core\nC 0.0 0.0 0.0\nC 1.33 0.0 0.0\nH -0.54 0.93 0.0\nH -0.54 -0.93 0.0\n",
    )
    .unwrap();

    let molecule = Molecule::load(&path).unwrap();
    assert_eq!(molecule.atoms().len(), 4);
    assert_eq!(molecule.pi_centers().len(), 2);
}

#[test]
fn loads_a_json_molecule_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pair.json");
    fs::write(
        &path,
        r#"[
            { "element": "C", "position": [0.0, 0.0, 0.0] },
            { "element": "C", "position": [1.35, 0.0, 0.0] }
        ]"#,
    )
    .unwrap();

    let molecule = Molecule::load(&path).unwrap();
    assert_eq!(molecule.atoms().len(), 2);
    assert_eq!(molecule.atoms()[0].element_type(), ElementType::C);
    assert_eq!(molecule.atoms()[1].position().x, 1.35);
}

#[test]
fn missing_file_surfaces_the_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = Molecule::load(dir.path().join("absent.xyz"));
    assert!(matches!(result, Err(GeometryError::Io(_))));
}

#[test]
fn malformed_json_surfaces_the_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, "[ { \"element\": ").unwrap();

    let result = Molecule::load(&path);
    assert!(matches!(result, Err(GeometryError::Json(_))));
}
