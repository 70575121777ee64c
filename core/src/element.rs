use serde::Deserialize;

/// The elements the geometry readers recognize. The discriminant is the
/// atomic number.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Deserialize)]
pub enum ElementType {
    H = 1,
    He,
    Li,
    Be,
    B,
    C,
    N,
    O,
    F,
    Ne,
    Na,
    Mg,
    Al,
    Si,
    P,
    S,
    Cl,
    Ar,
}

impl ElementType {
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Some(match symbol {
            "H" => Self::H,
            "He" => Self::He,
            "Li" => Self::Li,
            "Be" => Self::Be,
            "B" => Self::B,
            "C" => Self::C,
            "N" => Self::N,
            "O" => Self::O,
            "F" => Self::F,
            "Ne" => Self::Ne,
            "Na" => Self::Na,
            "Mg" => Self::Mg,
            "Al" => Self::Al,
            "Si" => Self::Si,
            "P" => Self::P,
            "S" => Self::S,
            "Cl" => Self::Cl,
            "Ar" => Self::Ar,
            _ => return None,
        })
    }

    /// Returns the atomic number of this element
    pub fn atomic_number(self) -> i32 {
        self as i32
    }
}
