//! The golden-standard duplicate registry.
//!
//! Every injected duplicate leaves a row here linking it back to its
//! original, so downstream deduplication benchmarks have labels to score
//! against. The registry is append-only; entries are exported in insertion
//! order.

use crate::error::{EngineError, EngineResult};
use crate::variate::VariationRecord;
use std::io;
use std::path::Path;
use synthmd_types::EntityKind;

/// Default file name of the exported registry.
pub const REGISTRY_FILE_NAME: &str = "golden_standard_duplicates.csv";

/// One original/duplicate pairing with the variation that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryEntry {
    pub original_id: String,
    pub duplicate_id: String,
    pub entity_type: EntityKind,
    pub variation: VariationRecord,
}

/// Append-only ledger of injected duplicates.
#[derive(Debug, Default)]
pub struct DuplicateRegistry {
    entries: Vec<RegistryEntry>,
}

impl DuplicateRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(
        &mut self,
        original_id: String,
        duplicate_id: String,
        entity_type: EntityKind,
        variation: VariationRecord,
    ) {
        self.entries.push(RegistryEntry {
            original_id,
            duplicate_id,
            entity_type,
            variation,
        });
    }

    pub fn entries(&self) -> &[RegistryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Writes the registry as CSV, header first, rows in insertion order.
    pub fn export<W: io::Write>(&self, writer: W) -> EngineResult<()> {
        let mut csv = csv::Writer::from_writer(writer);
        csv.write_record([
            "original_id",
            "duplicate_id",
            "entity_type",
            "variation_type",
            "field_name",
            "original_value",
            "varied_value",
        ])
        .map_err(EngineError::RegistryExport)?;
        for entry in &self.entries {
            csv.write_record([
                entry.original_id.as_str(),
                entry.duplicate_id.as_str(),
                entry.entity_type.as_str(),
                entry.variation.variation_type.as_str(),
                entry.variation.field_name.as_str(),
                entry.variation.original_value.as_str(),
                entry.variation.varied_value.as_str(),
            ])
            .map_err(EngineError::RegistryExport)?;
        }
        csv.flush()
            .map_err(|e| EngineError::RegistryExport(e.into()))?;
        Ok(())
    }

    pub fn export_to_path(&self, path: &Path) -> EngineResult<()> {
        let file = std::fs::File::create(path).map_err(|e| EngineError::TableWrite {
            path: path.to_path_buf(),
            source: e.into(),
        })?;
        self.export(io::BufWriter::new(file))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::variate::VariationRecord;

    fn entry(n: u32) -> (String, String, EntityKind, VariationRecord) {
        (
            format!("orig-{n}"),
            format!("dup-{n}"),
            EntityKind::Address,
            VariationRecord {
                variation_type: "city_typo".into(),
                field_name: "city".into(),
                original_value: "Utrecht".into(),
                varied_value: "Utrceht".into(),
            },
        )
    }

    #[test]
    fn test_export_columns_and_order() {
        let mut registry = DuplicateRegistry::new();
        for n in 0..3 {
            let (original, duplicate, kind, variation) = entry(n);
            registry.register(original, duplicate, kind, variation);
        }
        let mut buffer = Vec::new();
        registry.export(&mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next().unwrap(),
            "original_id,duplicate_id,entity_type,variation_type,field_name,original_value,varied_value"
        );
        assert_eq!(
            lines.next().unwrap(),
            "orig-0,dup-0,Address,city_typo,city,Utrecht,Utrceht"
        );
        assert_eq!(lines.clone().count(), 2);
        assert!(lines.all(|line| line.starts_with("orig-")));
    }

    #[test]
    fn test_no_change_entry_exports_empty_fields() {
        let mut registry = DuplicateRegistry::new();
        registry.register(
            "orig".into(),
            "dup".into(),
            EntityKind::Person,
            VariationRecord {
                variation_type: crate::variate::NO_CHANGE.into(),
                field_name: String::new(),
                original_value: String::new(),
                varied_value: String::new(),
            },
        );
        let mut buffer = Vec::new();
        registry.export(&mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert!(text.lines().nth(1).unwrap().ends_with("no_change,,,"));
    }

    #[test]
    fn test_empty_registry_exports_header_only() {
        let registry = DuplicateRegistry::new();
        let mut buffer = Vec::new();
        registry.export(&mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert_eq!(text.lines().count(), 1);
    }
}
