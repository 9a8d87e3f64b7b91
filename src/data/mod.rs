/// Data layer: core types, loading, matching and export.
///
/// Architecture:
/// ```text
///   FIRMS .csv (preamble + header + rows)
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  locate header → Vec<FacilityRecord>
///   └──────────┘
///        │
///        ▼
///   ┌─────────────────┐
///   │ FacilityDataset │  read-only records, load diagnostics
///   └─────────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  SearchCriteria → SearchQuery → matching indices
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  export   │  matches → quoted CSV
///   └──────────┘
/// ```

pub mod export;
pub mod filter;
pub mod loader;
pub mod model;
