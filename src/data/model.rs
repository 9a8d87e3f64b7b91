use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Field – the nine attributes of a facility
// ---------------------------------------------------------------------------

/// One of the nine facility attributes, in display/export order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Code,
    Name,
    FacilityType,
    StreetAddress,
    City,
    State,
    Zip,
    Country,
    Status,
}

impl Field {
    pub const ALL: [Field; 9] = [
        Field::Code,
        Field::Name,
        Field::FacilityType,
        Field::StreetAddress,
        Field::City,
        Field::State,
        Field::Zip,
        Field::Country,
        Field::Status,
    ];

    /// Column header used in the results table and in exported CSV.
    pub fn label(self) -> &'static str {
        match self {
            Field::Code => "FIRMS Code",
            Field::Name => "FIRMS Name",
            Field::FacilityType => "Facility Type",
            Field::StreetAddress => "Street Address",
            Field::City => "City",
            Field::State => "State",
            Field::Zip => "Zip",
            Field::Country => "Country",
            Field::Status => "FIRMS Status",
        }
    }

    /// 0-based column of this field in the published FIRMS spreadsheet.
    pub fn source_column(self) -> usize {
        match self {
            Field::Code => 1,
            Field::Name => 2,
            Field::Status => 3,
            Field::FacilityType => 6,
            Field::StreetAddress => 9,
            Field::City => 17,
            Field::State => 18,
            Field::Zip => 19,
            Field::Country => 20,
        }
    }

    /// Values offered as choices in the UI. Never enforced on load.
    pub fn suggestions(self) -> &'static [&'static str] {
        match self {
            Field::FacilityType => FACILITY_TYPES,
            Field::Status => STATUSES,
            _ => &[],
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

pub const FACILITY_TYPES: &[&str] = &[
    "Bonded Warehouse",
    "Bridge",
    "CES",
    "Customs Administrative Site",
    "Customs Container Station",
    "Data Processing Site",
    "Foreign Trade Zone",
    "Importer Premises",
    "Inspection Facility",
    "Multi-Use-Bonded",
    "Pier",
];

pub const STATUSES: &[&str] = &["ACTIVE", "DEACTIVATED", "ACTIVATED"];

// ---------------------------------------------------------------------------
// FacilityRecord – one row of the source spreadsheet
// ---------------------------------------------------------------------------

/// A single facility. Field order matches [`Field::ALL`], which is also the
/// column order used when serialising for export.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FacilityRecord {
    pub code: String,
    pub name: String,
    pub facility_type: String,
    pub street_address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub country: String,
    pub status: String,
}

impl FacilityRecord {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Code => &self.code,
            Field::Name => &self.name,
            Field::FacilityType => &self.facility_type,
            Field::StreetAddress => &self.street_address,
            Field::City => &self.city,
            Field::State => &self.state,
            Field::Zip => &self.zip,
            Field::Country => &self.country,
            Field::Status => &self.status,
        }
    }

    pub fn get_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Code => &mut self.code,
            Field::Name => &mut self.name,
            Field::FacilityType => &mut self.facility_type,
            Field::StreetAddress => &mut self.street_address,
            Field::City => &mut self.city,
            Field::State => &mut self.state,
            Field::Zip => &mut self.zip,
            Field::Country => &mut self.country,
            Field::Status => &mut self.status,
        }
    }

    /// All nine values in [`Field::ALL`] order.
    pub fn values(&self) -> impl Iterator<Item = &str> + '_ {
        Field::ALL.into_iter().map(move |f| self.get(f))
    }

    /// A record is kept only when code, name and facility type are present.
    pub fn is_well_formed(&self) -> bool {
        !self.code.is_empty() && !self.name.is_empty() && !self.facility_type.is_empty()
    }
}

// ---------------------------------------------------------------------------
// FacilityDataset – the complete loaded record set
// ---------------------------------------------------------------------------

/// The read-only record set produced by one load of the source CSV.
#[derive(Debug, Clone, Default)]
pub struct FacilityDataset {
    pub records: Vec<FacilityRecord>,
    /// Where the records were read from, if they came from a file.
    pub source: Option<PathBuf>,
    /// Rows after the header that were dropped for missing code/name/type.
    pub dropped_rows: usize,
}

impl FacilityDataset {
    pub fn new(records: Vec<FacilityRecord>) -> Self {
        Self {
            records,
            source: None,
            dropped_rows: 0,
        }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
