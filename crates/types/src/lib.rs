//! Entity types for the synthetic master-data pipeline.
//!
//! The pipeline works over six tabular entity kinds (Address,
//! HealthcareOrganization, ServiceDepartment, ContactPoint, Person,
//! HealthcarePersonnel). Cross-entity relationships are held as identifier
//! references only; a record never embeds another record.
//!
//! This crate defines:
//! - [`EntityKind`], the closed set of kinds and their registry labels.
//! - The six record structs, with serde field names matching the CSV columns.
//! - [`Record`], name-based access to a record's *content* fields, used by the
//!   variation engine, the field-deletion pre-pass, and audit output.
//! - [`LanguageList`], the serialized list encoding used by
//!   `ContactPoint.availableLanguage`.

mod kind;
mod langlist;
mod records;

pub use kind::EntityKind;
pub use langlist::LanguageList;
pub use records::{
    Address, ContactPoint, HealthcareOrganization, HealthcarePersonnel, Person, Record,
    ServiceDepartment,
};

/// Error type for entity type parsing.
#[derive(Debug, thiserror::Error)]
pub enum TypesError {
    /// The input was not one of the six recognized entity kinds.
    #[error("unknown entity kind: '{0}'")]
    UnknownKind(String),
}
