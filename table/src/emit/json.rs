use super::TableEmitter;
use crate::{PrecomputedTable, TableError};

/// Emits the tables as a JSON array, limbs as decimal strings.
#[derive(Clone, Debug, Default)]
pub struct JsonEmitter {
    pretty: bool,
}

impl JsonEmitter {
    pub fn pretty() -> Self {
        Self { pretty: true }
    }
}

impl TableEmitter for JsonEmitter {
    fn emit(&self, tables: &[(usize, PrecomputedTable)]) -> Result<String, TableError> {
        let tables: Vec<&PrecomputedTable> = tables.iter().map(|(_, table)| table).collect();
        let mut out = if self.pretty {
            serde_json::to_string_pretty(&tables)?
        } else {
            serde_json::to_string(&tables)?
        };
        out.push('\n');
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::toy_curve;
    use crate::build_tables;

    #[test]
    fn test_round_trip() {
        let curve = toy_curve();
        let tables = build_tables(&curve, 3, 2, &[2]).unwrap();
        let out = JsonEmitter::default().emit(&tables).unwrap();

        let back: Vec<PrecomputedTable> = serde_json::from_str(&out).unwrap();
        assert_eq!(back.len(), 1);
        assert_eq!(back[0], tables[0].1);
    }

    #[test]
    fn test_layout() {
        let curve = toy_curve();
        let tables = build_tables(&curve, 3, 2, &[2]).unwrap();
        let out = JsonEmitter::default().emit(&tables).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(value[0]["stride"], 2);
        assert_eq!(value[0]["windows"].as_array().unwrap().len(), 3);
        assert_eq!(value[0]["windows"][1][1]["x"], serde_json::json!(["1", "2"]));
        assert_eq!(value[0]["windows"][1][1]["y"], serde_json::json!(["3", "0"]));
    }
}
