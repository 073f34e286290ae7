//! The canonical, read-only contest dataset.

use crate::error::{LoadError, Result};
use crate::models::contest::Contest;
use log::{debug, info};
use serde_json::Value;
use std::sync::Arc;

/// Contests in source order. Built once per session and never mutated;
/// derived views hold clones of the same `Arc`s.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    contests: Arc<[Arc<Contest>]>,
}

impl Dataset {
    /// Parses the archive document. The top-level value must be an array.
    pub fn from_json_str(json: &str) -> Result<Self> {
        match serde_json::from_str::<Value>(json)? {
            Value::Array(items) => Ok(Self::from_values(items)),
            _ => Err(LoadError::NotAnArray),
        }
    }

    /// Decodes each array element, dropping the ones that are not usable
    /// contest records.
    pub fn from_values(items: Vec<Value>) -> Self {
        let total = items.len();
        let contests: Vec<Arc<Contest>> = items
            .into_iter()
            .enumerate()
            .filter_map(|(index, item)| decode_record(index, item))
            .map(Arc::new)
            .collect();

        info!(
            "Loaded {} contests ({} malformed records dropped)",
            contests.len(),
            total - contests.len()
        );
        Self {
            contests: contests.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.contests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contests.is_empty()
    }

    pub fn contests(&self) -> &[Arc<Contest>] {
        &self.contests
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<Contest>> {
        self.contests.iter()
    }
}

impl Default for Dataset {
    fn default() -> Self {
        Self {
            contests: Arc::from(Vec::new()),
        }
    }
}

impl From<Vec<Contest>> for Dataset {
    fn from(contests: Vec<Contest>) -> Self {
        Self {
            contests: contests.into_iter().map(Arc::new).collect(),
        }
    }
}

fn decode_record(index: usize, item: Value) -> Option<Contest> {
    if !item.is_object() {
        debug!("Dropping record {}: not an object", index);
        return None;
    }
    match serde_json::from_value::<Contest>(item) {
        Ok(contest) => Some(contest),
        Err(e) => {
            debug!("Dropping record {}: {}", index, e);
            None
        }
    }
}
