//! Per-page-session state: the loaded dataset plus the derived view.

use crate::dataset::Dataset;
use crate::error::LoadError;
use crate::filter::filter_contests;
use crate::models::contest::Contest;
use crate::sort::{sort_contests, SortKey};
use log::{debug, warn};
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq)]
pub enum LoadStatus {
    Loading,
    Ready,
    Failed(LoadError),
}

/// What the page should show for the current view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState {
    Loading,
    /// The dataset could not be loaded; carries the user-facing message.
    Failed(String),
    /// Loaded fine, but the archive holds no contests.
    NoData,
    /// Contests exist but none match the query.
    NoResults,
    Ready(usize),
}

/// Owns the dataset for the whole session and recomputes the filtered,
/// sorted view on every search or sort change. The view is replaced, never
/// patched, and always holds `Arc`s taken from the dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct ArchiveSession {
    dataset: Dataset,
    status: LoadStatus,
    query: String,
    sort_key: Option<SortKey>,
    view: Vec<Arc<Contest>>,
}

impl ArchiveSession {
    /// A session whose dataset is still being fetched.
    pub fn loading() -> Self {
        Self {
            dataset: Dataset::default(),
            status: LoadStatus::Loading,
            query: String::new(),
            sort_key: None,
            view: Vec::new(),
        }
    }

    pub fn from_dataset(dataset: Dataset) -> Self {
        let view = dataset.contests().to_vec();
        Self {
            dataset,
            status: LoadStatus::Ready,
            query: String::new(),
            sort_key: None,
            view,
        }
    }

    pub fn from_load_result(result: Result<Dataset, LoadError>) -> Self {
        match result {
            Ok(dataset) => Self::from_dataset(dataset),
            Err(e) => {
                warn!("Contest archive unavailable: {}", e);
                Self {
                    status: LoadStatus::Failed(e),
                    ..Self::loading()
                }
            }
        }
    }

    /// Re-filters the full dataset, then applies the active sort key.
    pub fn set_query(&mut self, raw_query: &str) {
        self.query = raw_query.to_string();
        let mut view = filter_contests(self.dataset.contests(), raw_query);
        sort_contests(&mut view, self.sort_key);
        debug!("Query {:?} matched {} contests", raw_query, view.len());
        self.view = view;
    }

    /// Reorders the current view. Unknown keys leave the order as it is.
    pub fn set_sort(&mut self, raw_key: &str) {
        self.sort_key = SortKey::parse(raw_key);
        let mut view = self.view.clone();
        sort_contests(&mut view, self.sort_key);
        debug!("Sorted {} contests by {:?}", view.len(), raw_key);
        self.view = view;
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn view(&self) -> &[Arc<Contest>] {
        &self.view
    }

    pub fn count(&self) -> usize {
        self.view.len()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn sort_key(&self) -> Option<SortKey> {
        self.sort_key
    }

    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    pub fn view_state(&self) -> ViewState {
        match &self.status {
            LoadStatus::Loading => ViewState::Loading,
            LoadStatus::Failed(e) => ViewState::Failed(e.user_message().to_string()),
            LoadStatus::Ready if self.dataset.is_empty() => ViewState::NoData,
            LoadStatus::Ready if self.view.is_empty() => ViewState::NoResults,
            LoadStatus::Ready => ViewState::Ready(self.view.len()),
        }
    }
}

impl Default for ArchiveSession {
    fn default() -> Self {
        Self::loading()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LOAD_FAILURE_MESSAGE;
    use pretty_assertions::assert_eq;
    use test_log::test;

    fn session() -> ArchiveSession {
        ArchiveSession::from_dataset(Dataset::from(vec![
            Contest::new("IUPC").with_year(2021),
            Contest::new("ICPC Dhaka").with_year(2022).with_date("March 10"),
            Contest::new("NCPC").with_year(2022).with_date("February 5"),
        ]))
    }

    fn names(session: &ArchiveSession) -> Vec<&str> {
        session.view().iter().map(|c| c.contest_name.as_str()).collect()
    }

    #[test]
    fn test_initial_view_is_dataset_order() {
        let session = session();
        assert_eq!(names(&session), vec!["IUPC", "ICPC Dhaka", "NCPC"]);
        assert_eq!(session.view_state(), ViewState::Ready(3));
    }

    #[test]
    fn test_query_then_sort() {
        let mut session = session();
        session.set_query("2022");
        assert_eq!(names(&session), vec!["ICPC Dhaka", "NCPC"]);
        session.set_sort("name-desc");
        assert_eq!(names(&session), vec!["NCPC", "ICPC Dhaka"]);
        assert_eq!(session.count(), 2);
    }

    #[test]
    fn test_active_sort_survives_new_query() {
        let mut session = session();
        session.set_sort("year-asc");
        session.set_query("pc");
        assert_eq!(names(&session), vec!["IUPC", "NCPC", "ICPC Dhaka"]);
        assert_eq!(session.sort_key(), Some(SortKey::YearAsc));
    }

    #[test]
    fn test_unknown_sort_keeps_current_order() {
        let mut session = session();
        session.set_sort("name-asc");
        let before: Vec<String> = names(&session).into_iter().map(String::from).collect();
        session.set_sort("bogus-key");
        assert_eq!(names(&session), before);
        assert_eq!(session.sort_key(), None);
    }

    #[test]
    fn test_no_results_is_distinct_from_no_data() {
        let mut session = session();
        session.set_query("nothing matches this");
        assert_eq!(session.view_state(), ViewState::NoResults);

        let empty = ArchiveSession::from_dataset(Dataset::default());
        assert_eq!(empty.view_state(), ViewState::NoData);
    }

    #[test]
    fn test_failed_load_leaves_dataset_empty() {
        let session = ArchiveSession::from_load_result(Err(LoadError::Status(500)));
        assert!(session.dataset().is_empty());
        assert_eq!(
            session.view_state(),
            ViewState::Failed(LOAD_FAILURE_MESSAGE.to_string())
        );
    }

    #[test]
    fn test_loading_state() {
        assert_eq!(ArchiveSession::loading().view_state(), ViewState::Loading);
    }
}
