//! Challenge rating lookups.
//!
//! Challenge ratings are strings rather than numbers because the lowest
//! ratings are fractions (`"1/8"`, `"1/4"`, `"1/2"`). XP values are kept as
//! the rulebook prints them, without a thousands separator below 2,300.

use crate::error::{CoreError, CoreResult};

/// Challenge rating to experience point reward, lowest rating first.
pub const CR_XP_TABLE: [(&str, &str); 34] = [
    ("0", "10"),
    ("1/8", "25"),
    ("1/4", "50"),
    ("1/2", "100"),
    ("1", "200"),
    ("2", "450"),
    ("3", "700"),
    ("4", "1100"),
    ("5", "1800"),
    ("6", "2,300"),
    ("7", "2,900"),
    ("8", "3,900"),
    ("9", "5,000"),
    ("10", "5,900"),
    ("11", "7,200"),
    ("12", "8,400"),
    ("13", "10,000"),
    ("14", "11,500"),
    ("15", "13,000"),
    ("16", "15,000"),
    ("17", "18,000"),
    ("18", "20,000"),
    ("19", "22,000"),
    ("20", "25,000"),
    ("21", "33,000"),
    ("22", "41,000"),
    ("23", "50,000"),
    ("24", "62,000"),
    ("25", "75,000"),
    ("26", "90,000"),
    ("27", "105,000"),
    ("28", "120,000"),
    ("29", "135,000"),
    ("30", "155,000"),
];

/// Look up the XP reward for a challenge rating.
///
/// The rating must match a table key exactly; anything else is an
/// [`CoreError::UnknownChallengeRating`].
pub fn xp_for(cr: &str) -> CoreResult<&'static str> {
    CR_XP_TABLE
        .iter()
        .find(|(key, _)| *key == cr)
        .map(|(_, xp)| *xp)
        .ok_or_else(|| CoreError::UnknownChallengeRating(cr.to_string()))
}
