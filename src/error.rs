use std::path::PathBuf;

use thiserror::Error;

/// Failure to produce a record set from a source CSV.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("could not find data headers (expected a row containing \"{marker}\")")]
    HeaderNotFound { marker: &'static str },
    #[error("could not read {}: {source}", .path.display())]
    RetrievalFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed CSV: {0}")]
    Malformed(#[from] csv::Error),
}

#[derive(Error, Debug)]
pub enum SearchError {
    #[error("search term for {field} could not be compiled: {source}")]
    Pattern {
        field: &'static str,
        #[source]
        source: regex::Error,
    },
}

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("export produced invalid UTF-8")]
    Utf8(#[from] std::string::FromUtf8Error),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("could not read config {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid value for {var}: {value:?}")]
    Env { var: &'static str, value: String },
}
