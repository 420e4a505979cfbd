//! Monster sources and result pages.

use bst_core::MonsterRecord;
use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use crate::error::ClientResult;
use crate::query::SearchQuery;

/// Anything that can answer a monster search.
pub trait MonsterSource {
    /// Run a search and return the matching records in result order.
    fn search(&self, query: &SearchQuery) -> ClientResult<Vec<MonsterRecord>>;
}

/// One page of API results.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MonsterPage {
    /// Total number of matches across all pages.
    #[serde(default)]
    pub count: Option<u64>,
    /// URL of the next page, if any.
    #[serde(default)]
    pub next: Option<String>,
    /// Raw records on this page.
    #[serde(default)]
    pub results: Vec<Value>,
}

impl MonsterPage {
    /// Returns true if the API has more pages than this one.
    pub fn has_more(&self) -> bool {
        self.next.is_some()
    }

    /// Decode the records on this page, skipping any that are malformed.
    pub fn into_records(self) -> Vec<MonsterRecord> {
        decode_all(self.results)
    }
}

/// Parse monster records from JSON.
///
/// Accepts a single record, an array of records, or an API page
/// (`{"results": [...]}`). A single record must be valid; inside a list or
/// page, malformed records are skipped with a warning.
pub fn parse_records(json: &str) -> ClientResult<Vec<MonsterRecord>> {
    let value: Value = serde_json::from_str(json)?;
    if value.get("results").is_some() {
        let page: MonsterPage = serde_json::from_value(value)?;
        return Ok(page.into_records());
    }
    match value {
        Value::Array(items) => Ok(decode_all(items)),
        other => Ok(vec![serde_json::from_value(other)?]),
    }
}

fn decode_all(items: Vec<Value>) -> Vec<MonsterRecord> {
    items
        .into_iter()
        .enumerate()
        .filter_map(|(idx, item)| match serde_json::from_value(item) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!(index = idx, error = %e, "skipping malformed monster record");
                None
            }
        })
        .collect()
}

/// Records held in memory, searched the same way the API searches.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    records: Vec<MonsterRecord>,
}

impl StaticSource {
    /// Wrap a set of records.
    pub fn new(records: Vec<MonsterRecord>) -> Self {
        Self { records }
    }

    /// Load records from JSON (see [`parse_records`]).
    pub fn from_json(json: &str) -> ClientResult<Self> {
        Ok(Self::new(parse_records(json)?))
    }

    /// All records, in load order.
    pub fn records(&self) -> &[MonsterRecord] {
        &self.records
    }
}

impl MonsterSource for StaticSource {
    fn search(&self, query: &SearchQuery) -> ClientResult<Vec<MonsterRecord>> {
        let found = match query {
            SearchQuery::Name(name) => {
                let needle = name.to_lowercase();
                self.matching(|r| r.name.to_lowercase().contains(&needle))
            }
            SearchQuery::ChallengeRating(cr) => self.matching(|r| r.challenge_rating == *cr),
            SearchQuery::Type(kind) => {
                let lower = kind.lowercase();
                let mut found = self.matching(|r| r.creature_type == kind.as_str());
                found.extend(self.matching(|r| r.creature_type == lower));
                found
            }
        };
        Ok(found)
    }
}

impl StaticSource {
    fn matching(&self, pred: impl Fn(&MonsterRecord) -> bool) -> Vec<MonsterRecord> {
        self.records.iter().filter(|r| pred(r)).cloned().collect()
    }
}
