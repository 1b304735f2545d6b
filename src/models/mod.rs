// Core data models for Etiqueta
// Dimensions, colors, entries and the tables that group them

pub mod color;
pub mod dimension;
pub mod entry;
pub mod table;

pub use color::*;
pub use dimension::*;
pub use entry::*;
pub use table::*;
