use regex::{Regex, RegexBuilder};

use super::model::{FacilityRecord, Field};
use crate::error::SearchError;

// ---------------------------------------------------------------------------
// Search input: what the user typed
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    /// One term matched against every field.
    #[default]
    General,
    /// One optional term per field, all of which must match.
    Specific,
}

impl SearchMode {
    pub fn label(self) -> &'static str {
        match self {
            SearchMode::General => "General Search (All Fields)",
            SearchMode::Specific => "Search By Specific Fields",
        }
    }
}

/// Per-field search terms for [`SearchMode::Specific`]. An empty (or
/// whitespace-only) term leaves that field unconstrained.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldTerms {
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

impl FieldTerms {
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

    /// Builder-style setter, handy for constructing criteria in code.
    pub fn with(mut self, field: Field, term: impl Into<String>) -> Self {
        *self.get_mut(field) = term.into();
        self
    }

    /// True when no field carries a non-blank term.
    pub fn is_blank(&self) -> bool {
        Field::ALL.iter().all(|&f| self.get(f).trim().is_empty())
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// A single search request, built fresh from the UI state on every submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchCriteria {
    General(String),
    Specific(FieldTerms),
}

impl SearchCriteria {
    pub fn mode(&self) -> SearchMode {
        match self {
            SearchCriteria::General(_) => SearchMode::General,
            SearchCriteria::Specific(_) => SearchMode::Specific,
        }
    }

    /// True when the criteria would constrain nothing (the no-op search).
    pub fn is_blank(&self) -> bool {
        match self {
            SearchCriteria::General(term) => term.trim().is_empty(),
            SearchCriteria::Specific(terms) => terms.is_blank(),
        }
    }
}

// ---------------------------------------------------------------------------
// Compiled query
// ---------------------------------------------------------------------------

/// Literal, unanchored substring predicate.
fn contains_pattern(
    term: &str,
    case_sensitive: bool,
    field: &'static str,
) -> Result<Regex, SearchError> {
    RegexBuilder::new(&regex::escape(term))
        .case_insensitive(!case_sensitive)
        .build()
        .map_err(|source| SearchError::Pattern { field, source })
}

/// Criteria compiled into predicates, ready to test records against.
#[derive(Debug, Clone)]
pub enum SearchQuery {
    /// Matches when any field contains the term.
    AnyField(Regex),
    /// Matches when every listed field contains its term.
    AllOf(Vec<(Field, Regex)>),
}

impl SearchQuery {
    /// Compile `criteria`. Returns `Ok(None)` for blank criteria, which callers
    /// treat as "no search performed".
    pub fn compile(
        criteria: &SearchCriteria,
        case_sensitive: bool,
    ) -> Result<Option<Self>, SearchError> {
        match criteria {
            SearchCriteria::General(term) => {
                let term = term.trim();
                if term.is_empty() {
                    return Ok(None);
                }
                let re = contains_pattern(term, case_sensitive, "general search")?;
                Ok(Some(SearchQuery::AnyField(re)))
            }
            SearchCriteria::Specific(terms) => {
                let mut predicates = Vec::new();
                for field in Field::ALL {
                    // Blankness is judged on the trimmed term, but the term
                    // is matched as typed.
                    let term = terms.get(field);
                    if term.trim().is_empty() {
                        continue;
                    }
                    let re = contains_pattern(term, case_sensitive, field.label())?;
                    predicates.push((field, re));
                }
                if predicates.is_empty() {
                    return Ok(None);
                }
                Ok(Some(SearchQuery::AllOf(predicates)))
            }
        }
    }

    pub fn matches(&self, record: &FacilityRecord) -> bool {
        match self {
            SearchQuery::AnyField(re) => record.values().any(|v| re.is_match(v)),
            SearchQuery::AllOf(predicates) => predicates
                .iter()
                .all(|(field, re)| re.is_match(record.get(*field))),
        }
    }

    /// Fields this query constrains, in display order.
    pub fn constrained_fields(&self) -> Vec<Field> {
        match self {
            SearchQuery::AnyField(_) => Field::ALL.to_vec(),
            SearchQuery::AllOf(predicates) => predicates.iter().map(|(f, _)| *f).collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// Running a query
// ---------------------------------------------------------------------------

/// Return indices of records matching `query`, in source order.
pub fn matching_indices(records: &[FacilityRecord], query: &SearchQuery) -> Vec<usize> {
    records
        .iter()
        .enumerate()
        .filter(|(_, rec)| query.matches(rec))
        .map(|(i, _)| i)
        .collect()
}

/// Return the records matching `criteria`, in source order. Blank criteria
/// match nothing.
pub fn search<'a>(
    records: &'a [FacilityRecord],
    criteria: &SearchCriteria,
    case_sensitive: bool,
) -> Result<Vec<&'a FacilityRecord>, SearchError> {
    let Some(query) = SearchQuery::compile(criteria, case_sensitive)? else {
        return Ok(Vec::new());
    };
    Ok(records.iter().filter(|rec| query.matches(rec)).collect())
}
