/// Errors surfaced by the variation engine and pipeline.
///
/// Only configuration problems and dataset I/O are user-visible failures;
/// per-entity trouble (malformed field values, failed translation lookups,
/// missing referential joins) degrades to a `no_change` variation inside the
/// catalogs and never reaches this type.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
    #[error("failed to create output directory: {0}")]
    OutputDirCreation(std::io::Error),
    #[error("failed to read dataset file {path}: {source}")]
    TableRead {
        path: std::path::PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("failed to write dataset file {path}: {source}")]
    TableWrite {
        path: std::path::PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("failed to export duplicate registry: {0}")]
    RegistryExport(csv::Error),
    #[error("failed to read configuration file: {0}")]
    ConfigRead(std::io::Error),
    #[error("failed to parse configuration file: {0}")]
    ConfigParse(serde_yaml::Error),
}

pub type EngineResult<T> = std::result::Result<T, EngineError>;
