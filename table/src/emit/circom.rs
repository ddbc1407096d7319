use core::fmt::Write;

use super::TableEmitter;
use crate::constants::CIRCOM_VERSION;
use crate::table::Coordinate;
use crate::{PrecomputedTable, TableError};

/// Emits circom functions `get_g_pow_stride{s}_table(n, k)` that return the
/// table as a `var powers[num_strides][2^s][2][k]` array.
///
/// Each function asserts that it is called with the `n` and `k` the table
/// was built for. Entries are written position-major, then window value,
/// then x limbs before y limbs, with a blank line before every entry.
#[derive(Clone, Debug)]
pub struct CircomEmitter {
    version: String,
}

impl Default for CircomEmitter {
    fn default() -> Self {
        Self {
            version: CIRCOM_VERSION.to_string(),
        }
    }
}

impl CircomEmitter {
    /// Use a different `pragma circom` version.
    pub fn with_version(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
        }
    }

    fn emit_function(
        &self,
        out: &mut String,
        stride: usize,
        table: &PrecomputedTable,
    ) -> Result<(), TableError> {
        let n = table.n();
        let [positions, size, coordinates, k] = table.shape();

        write!(out, "\nfunction get_g_pow_stride{stride}_table(n, k) {{")?;
        writeln!(out)?;
        writeln!(out, "    assert(n == {n} && k == {k});")?;
        writeln!(out, "    var powers[{positions}][{size}][{coordinates}][{k}];")?;

        for (position, value, entry) in table.entries() {
            writeln!(out)?;
            for coordinate in [Coordinate::X, Coordinate::Y] {
                for (idx, limb) in entry.coordinate(coordinate).limbs().iter().enumerate() {
                    writeln!(
                        out,
                        "    powers[{position}][{value}][{}][{idx}] = {limb};",
                        coordinate as usize
                    )?;
                }
            }
        }

        write!(out, "\n    return powers;\n}}\n")?;
        Ok(())
    }
}

impl TableEmitter for CircomEmitter {
    fn emit(&self, tables: &[(usize, PrecomputedTable)]) -> Result<String, TableError> {
        let mut out = String::new();
        writeln!(out, "pragma circom {};", self.version)?;
        for (stride, table) in tables {
            self.emit_function(&mut out, *stride, table)?;
        }
        Ok(out)
    }
}
