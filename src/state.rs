use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use firms_finder::data::export;
use firms_finder::data::filter::{
    matching_indices, FieldTerms, SearchCriteria, SearchMode, SearchQuery,
};
use firms_finder::data::loader;
use firms_finder::{AppConfig, FacilityDataset, FacilityRecord};

/// Shown for any load failure; the specific cause goes to the log.
pub const LOAD_FAILED_MESSAGE: &str =
    "Could not load data. Check the file and use File → Reload.";

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    pub config: AppConfig,

    /// Loaded dataset (None until a load succeeds).
    pub dataset: Option<FacilityDataset>,

    pub mode: SearchMode,
    pub case_sensitive: bool,

    /// Term for [`SearchMode::General`].
    pub general_term: String,
    /// Terms for [`SearchMode::Specific`].
    pub field_terms: FieldTerms,

    /// Indices into `dataset.records` from the last search.
    pub matches: Vec<usize>,

    /// Whether `matches` reflects a search (as opposed to nothing yet).
    pub searched: bool,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,

    pub show_help: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            mode: config.default_mode,
            case_sensitive: config.case_sensitive,
            config,
            dataset: None,
            general_term: String::new(),
            field_terms: FieldTerms::default(),
            matches: Vec::new(),
            searched: false,
            status_message: None,
            show_help: false,
        }
    }

    /// Load the configured data file.
    pub fn reload(&mut self) {
        let path = self.config.data_path.clone();
        self.load_from_path(&path);
    }

    /// Load a FIRMS CSV, replacing the current dataset. On failure nothing
    /// from the attempt is kept.
    pub fn load_from_path(&mut self, path: &Path) {
        match loader::load_file(path) {
            Ok(dataset) => {
                self.config.data_path = path.to_path_buf();
                self.set_dataset(dataset);
            }
            Err(e) => {
                log::error!("Failed to load {}: {e:#}", path.display());
                self.dataset = None;
                self.matches.clear();
                self.searched = false;
                self.status_message = Some(LOAD_FAILED_MESSAGE.to_string());
            }
        }
    }

    /// Ingest a newly loaded dataset. Previous results index the old records,
    /// so they are discarded.
    pub fn set_dataset(&mut self, dataset: FacilityDataset) {
        self.dataset = Some(dataset);
        self.matches.clear();
        self.searched = false;
        self.status_message = None;
    }

    pub fn is_loaded(&self) -> bool {
        self.dataset.is_some()
    }

    /// Criteria for the active mode, built from the current inputs.
    pub fn criteria(&self) -> SearchCriteria {
        match self.mode {
            SearchMode::General => SearchCriteria::General(self.general_term.clone()),
            SearchMode::Specific => SearchCriteria::Specific(self.field_terms.clone()),
        }
    }

    /// Run the search for the current inputs. Does nothing before data is
    /// loaded or when every term is blank, leaving previous results shown.
    pub fn run_search(&mut self) {
        let Some(ds) = &self.dataset else {
            return;
        };

        let query = match SearchQuery::compile(&self.criteria(), self.case_sensitive) {
            Ok(Some(query)) => query,
            Ok(None) => return,
            Err(e) => {
                log::warn!("search rejected: {e}");
                self.status_message = Some(format!("Error: {e}"));
                return;
            }
        };

        self.matches = matching_indices(&ds.records, &query);
        self.searched = true;
        self.status_message = None;
        log::debug!(
            "{:?} search matched {} of {} records",
            self.mode,
            self.matches.len(),
            ds.len()
        );
    }

    /// Reset every term and the result set.
    pub fn clear(&mut self) {
        self.general_term.clear();
        self.field_terms.clear();
        self.matches.clear();
        self.searched = false;
    }

    /// Records from the last search, in source order.
    pub fn matched_records(&self) -> Vec<&FacilityRecord> {
        match &self.dataset {
            Some(ds) => self.matches.iter().map(|&i| &ds.records[i]).collect(),
            None => Vec::new(),
        }
    }

    pub fn default_export_name(&self) -> String {
        export::todays_file_name()
    }

    /// Write the current results to `path`.
    pub fn export_to(&self, path: &Path) -> Result<()> {
        export::export_to_path(self.matched_records(), path)
            .with_context(|| format!("exporting results to {}", path.display()))
    }

    pub fn data_path(&self) -> PathBuf {
        self.config.data_path.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CSV: &str = "\
FIRMS list,,,
District Port Code,FIRMS Code,FIRMS Name,FIRMS Status,,,Facility Type,,,Street Address,,,,,,,,City,State,Zip,Country
2704,C556,Port Alpha,ACTIVE,,,Pier,,,1 Dock St,,,,,,,,Los Angeles,CA,90731,US
5501,X100,Relax Storage,ACTIVE,,,Bonded Warehouse,,,9 Elm,,,,,,,,Dallas,TX,75201,US
";

    fn loaded() -> AppState {
        let mut state = AppState::default();
        state.set_dataset(firms_finder::data::loader::parse_dataset(CSV).unwrap());
        state
    }

    fn matched_codes(state: &AppState) -> Vec<String> {
        state.matched_records().iter().map(|r| r.code.clone()).collect()
    }

    #[test]
    fn search_before_load_does_nothing() {
        let mut state = AppState::default();
        state.general_term = "Port".into();
        state.run_search();
        assert!(!state.searched);
        assert!(state.matches.is_empty());
    }

    #[test]
    fn general_search_then_blank_keeps_results() {
        let mut state = loaded();
        state.general_term = "lax".into();
        state.run_search();
        assert_eq!(matched_codes(&state), ["X100"]);

        state.general_term = "   ".into();
        state.run_search();
        assert_eq!(matched_codes(&state), ["X100"]);
    }

    #[test]
    fn specific_search_uses_field_terms() {
        let mut state = loaded();
        state.mode = SearchMode::Specific;
        state.general_term = "Dallas".into();
        state.field_terms.state = "ca".into();
        state.run_search();
        assert_eq!(matched_codes(&state), ["C556"]);
    }

    #[test]
    fn case_sensitivity_flag_applies() {
        let mut state = loaded();
        state.general_term = "port alpha".into();
        state.case_sensitive = true;
        state.run_search();
        assert!(state.searched);
        assert!(state.matches.is_empty());

        state.case_sensitive = false;
        state.run_search();
        assert_eq!(matched_codes(&state), ["C556"]);
    }

    #[test]
    fn clear_resets_terms_and_results() {
        let mut state = loaded();
        state.general_term = "US".into();
        state.field_terms.city = "Dallas".into();
        state.run_search();
        assert_eq!(state.matches.len(), 2);

        state.clear();
        assert!(state.general_term.is_empty());
        assert!(state.field_terms.is_blank());
        assert!(state.matches.is_empty());
        assert!(!state.searched);
    }

    #[test]
    fn failed_load_drops_previous_dataset() {
        let mut state = loaded();
        state.general_term = "US".into();
        state.run_search();

        let dir = tempfile::tempdir().unwrap();
        state.load_from_path(&dir.path().join("missing.csv"));
        assert!(!state.is_loaded());
        assert!(state.matches.is_empty());
        assert_eq!(state.status_message.as_deref(), Some(LOAD_FAILED_MESSAGE));
    }

    #[test]
    fn headerless_file_reports_same_message() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.csv");
        std::fs::write(&path, "a,b,c\n1,2,3\n").unwrap();

        let mut state = AppState::default();
        state.load_from_path(&path);
        assert!(!state.is_loaded());
        assert_eq!(state.status_message.as_deref(), Some(LOAD_FAILED_MESSAGE));
    }

    #[test]
    fn successful_load_updates_data_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("firms.csv");
        std::fs::write(&path, CSV).unwrap();

        let mut state = AppState::default();
        state.load_from_path(&path);
        assert_eq!(state.dataset.as_ref().map(|d| d.len()), Some(2));
        assert_eq!(state.data_path(), path);
    }

    #[test]
    fn export_writes_current_matches() {
        let mut state = loaded();
        state.general_term = "Pier".into();
        state.run_search();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(state.default_export_name());
        state.export_to(&path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().count(), 2);
        assert!(text.contains("\"Port Alpha\""));
    }
}
