//! Core types for Bestiary: monster records, ability scores, and challenge ratings.
//!
//! This crate defines the read-only input to the statblock renderer. A
//! [`MonsterRecord`] is deserialized from the JSON the Open5e API serves and
//! carries every field a statblock needs. The derived numbers (ability
//! modifiers, saving throws, experience points) live here too so that the
//! renderer only has to lay text out.

/// The six ability scores and modifier arithmetic.
pub mod ability;
/// The fixed challenge rating to experience point table.
pub mod challenge;
/// Error types used throughout the crate.
pub mod error;
/// The monster record schema and its lenient deserializers.
pub mod monster;

/// Re-export ability helpers.
pub use ability::{Ability, modifier, score_with_modifier, signed};
/// Re-export challenge rating lookups.
pub use challenge::{CR_XP_TABLE, xp_for};
/// Re-export error types.
pub use error::{CoreError, CoreResult};
/// Re-export record types.
pub use monster::{Feature, MonsterRecord, Speed, SpeedValue};
