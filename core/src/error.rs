use thiserror::Error;

/// Errors reading a molecular geometry file.
#[derive(Error, Debug)]
pub enum GeometryError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("malformed molecule json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unsupported geometry format `{0}`")]
    UnsupportedFormat(String),
    #[error("geometry file has no extension to infer the format from")]
    MissingExtension,
    #[error("xyz file ends before line {line}")]
    UnexpectedEof { line: usize },
    #[error("xyz line {line}: {message}")]
    Malformed { line: usize, message: String },
    #[error("unknown element symbol `{0}`")]
    UnknownElement(String),
    #[error("atom {atom} does not have exactly x, y, z coordinates")]
    BadPosition { atom: usize },
}

/// Errors raised by the Hückel pipeline. Each condition is detected before
/// any later stage runs, so no partial results ever escape.
#[derive(Error, Debug, PartialEq)]
pub enum HuckelError {
    /// The molecule contains no carbon atoms after filtering.
    #[error("no carbon atoms in the molecule: nothing to analyze")]
    EmptyPiSystem,
    /// A π-center has a NaN or infinite coordinate.
    #[error("atom {atom} has a non-finite coordinate")]
    NonFiniteGeometry { atom: usize },
    /// One of the Hückel parameters is NaN or infinite.
    #[error("parameter `{name}` is not finite")]
    InvalidParameter { name: &'static str },
    /// The net charge asks for an electron count the orbitals cannot hold.
    #[error("{electron_count} π-electrons cannot occupy {capacity} spin-orbital slots")]
    UnrepresentableCharge { electron_count: i64, capacity: usize },
}
