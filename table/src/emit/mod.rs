//! Renderers that turn built tables into files for downstream tools.

mod circom;
mod json;

pub use circom::CircomEmitter;
pub use json::JsonEmitter;

use crate::{PrecomputedTable, TableError};

/// Renders a list of `(stride, table)` pairs, as returned by
/// [`build_tables`](crate::build_tables), into one document.
pub trait TableEmitter {
    fn emit(&self, tables: &[(usize, PrecomputedTable)]) -> Result<String, TableError>;
}
