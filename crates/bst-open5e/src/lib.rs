//! Open5e monster search client for Bestiary.
//!
//! Searches are expressed as a [`SearchQuery`] and answered by any
//! [`MonsterSource`]. [`Open5eClient`] asks the public Open5e API;
//! [`StaticSource`] answers the same queries from records already in memory,
//! such as a JSON file saved from an earlier search.

/// Client configuration and environment overrides.
pub mod config;
/// Error types for searches.
pub mod error;
/// The HTTP client.
pub mod client;
/// Search queries and creature types.
pub mod query;
/// Monster sources and result pages.
pub mod source;

/// Re-export the HTTP client.
pub use client::Open5eClient;
/// Re-export configuration.
pub use config::ClientConfig;
/// Re-export error types.
pub use error::{ClientError, ClientResult, ParseMonsterTypeError};
/// Re-export query types.
pub use query::{MonsterType, SearchQuery};
/// Re-export sources.
pub use source::{MonsterPage, MonsterSource, StaticSource, parse_records};
