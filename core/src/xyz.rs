//! Reader for the plain XYZ geometry format: an atom-count line, a comment
//! line, then one `symbol x y z` record per atom.

use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::Path;

use nalgebra::Vector3;

use crate::atom::Atom;
use crate::element::ElementType;
use crate::error::GeometryError;
use crate::molecule::Molecule;

pub fn read_xyz_file(path: impl AsRef<Path>) -> Result<Molecule, GeometryError> {
    read_xyz(BufReader::new(File::open(path)?))
}

pub fn read_xyz(reader: impl BufRead) -> Result<Molecule, GeometryError> {
    let mut lines = reader.lines();

    let n_atoms: usize = next_line(&mut lines, 1)?.trim().parse().map_err(|_| {
        GeometryError::Malformed {
            line: 1,
            message: "expected an atom count".to_string(),
        }
    })?;

    // comment line, ignored
    next_line(&mut lines, 2)?;

    let mut atoms = Vec::with_capacity(n_atoms);
    for index in 0..n_atoms {
        let line_number = index + 3;
        let line = next_line(&mut lines, line_number)?;
        let mut parts = line.split_whitespace();

        let symbol = parts
            .next()
            .ok_or_else(|| malformed(line_number, "missing element symbol"))?;
        let element_type = ElementType::from_symbol(symbol)
            .ok_or_else(|| GeometryError::UnknownElement(symbol.to_string()))?;

        let mut coordinate = |axis: &str| -> Result<f64, GeometryError> {
            parts
                .next()
                .ok_or_else(|| malformed(line_number, &format!("missing {axis} coordinate")))?
                .parse()
                .map_err(|_| malformed(line_number, &format!("unparsable {axis} coordinate")))
        };
        let position = Vector3::new(coordinate("x")?, coordinate("y")?, coordinate("z")?);

        atoms.push(Atom {
            position,
            element_type,
        });
    }

    Ok(Molecule { atoms })
}

fn next_line(lines: &mut Lines<impl BufRead>, line_number: usize) -> Result<String, GeometryError> {
    lines
        .next()
        .ok_or(GeometryError::UnexpectedEof { line: line_number })?
        .map_err(GeometryError::Io)
}

fn malformed(line: usize, message: &str) -> GeometryError {
    GeometryError::Malformed {
        line,
        message: message.to_string(),
    }
}
