//! Synthetic healthcare master-data generation with labeled duplicate
//! injection.
//!
//! The crate builds a six-table master-data set (addresses, organizations,
//! departments, contact points, persons, personnel), then injects duplicates
//! of a configurable fraction of each table. Each duplicate differs from its
//! original in exactly one field, chosen from a per-kind variation catalog,
//! and every original/duplicate pair is recorded in a registry that serves
//! as the golden standard for deduplication benchmarks.
//!
//! Entry points: [`generate::Generator`] for the base dataset,
//! [`pipeline::inject_all`] for the injection run, [`tables::Dataset`] for
//! CSV persistence.

pub mod catalog;
pub mod config;
pub mod data;
pub mod error;
pub mod generate;
pub mod inject;
pub mod pipeline;
pub mod registry;
pub mod tables;
pub mod translate;
pub mod variate;

pub use config::{
    GeneratorConfig, NoiseTier, PipelineConfig, ScrubConfig, DEFAULT_VARIATION_RATE,
};
pub use error::{EngineError, EngineResult};
pub use pipeline::{inject_all, PipelineOutput};
pub use registry::{DuplicateRegistry, RegistryEntry, REGISTRY_FILE_NAME};
pub use tables::Dataset;
pub use translate::{GlossaryTranslator, Translate, TranslateError};
pub use variate::{VariationRecord, NO_CHANGE};
