//! Core of the FIRMS code lookup tool: record loading, matching and export.
//!
//! The desktop front end lives in the `firms-finder` binary; everything here
//! is window-free and can be driven from tests or other tools.

pub mod config;
pub mod data;
pub mod error;

pub use config::AppConfig;
pub use data::filter::{search, FieldTerms, SearchCriteria, SearchMode, SearchQuery};
pub use data::loader::{load_file, parse_records};
pub use data::model::{FacilityDataset, FacilityRecord, Field};
pub use error::{ConfigError, ExportError, LoadError, SearchError};
