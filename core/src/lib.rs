pub mod atom;
pub mod config;
pub mod element;
pub mod error;
pub mod huckel;
pub mod molecule;
pub mod xyz;
