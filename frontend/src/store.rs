use archive_shared::{ArchiveSession, Dataset, LoadError};
use log::debug;
use std::rc::Rc;
use yew::prelude::*;

pub enum SessionAction {
    Loaded(Result<Dataset, LoadError>),
    Query(String),
    Sort(String),
}

/// Yew reducer wrapper so debounced callbacks always act on the latest
/// session rather than the one captured when they were scheduled.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionStore {
    pub session: ArchiveSession,
}

impl Reducible for SessionStore {
    type Action = SessionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let session = match action {
            SessionAction::Loaded(result) => {
                // Controls may have been used while the fetch was in flight.
                let mut loaded = ArchiveSession::from_load_result(result);
                if let Some(key) = self.session.sort_key() {
                    loaded.set_sort(key.as_str());
                }
                if !self.session.query().is_empty() {
                    loaded.set_query(self.session.query());
                }
                loaded
            }
            SessionAction::Query(query) => {
                let mut session = self.session.clone();
                session.set_query(&query);
                session
            }
            SessionAction::Sort(key) => {
                let mut session = self.session.clone();
                session.set_sort(&key);
                session
            }
        };
        debug!("Session now shows {} contests", session.count());
        Rc::new(Self { session })
    }
}
