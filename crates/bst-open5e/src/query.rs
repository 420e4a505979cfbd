//! Search queries.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseMonsterTypeError;

/// A creature type that can be searched for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MonsterType {
    /// Aberrations.
    Aberration,
    /// Beasts.
    Beast,
    /// Celestials.
    Celestial,
    /// Constructs.
    Construct,
    /// Dragons.
    Dragon,
    /// Elementals.
    Elemental,
    /// Fey.
    Fey,
    /// Fiends.
    Fiend,
    /// Giants.
    Giant,
    /// Humanoids.
    Humanoid,
    /// Monstrosities.
    Monstrosity,
    /// Oozes.
    Ooze,
    /// Plants.
    Plant,
    /// Undead.
    Undead,
}

impl MonsterType {
    /// Every searchable type, in menu order.
    pub const ALL: [MonsterType; 14] = [
        Self::Aberration,
        Self::Beast,
        Self::Celestial,
        Self::Construct,
        Self::Dragon,
        Self::Elemental,
        Self::Fey,
        Self::Fiend,
        Self::Giant,
        Self::Humanoid,
        Self::Monstrosity,
        Self::Ooze,
        Self::Plant,
        Self::Undead,
    ];

    /// Capitalized name, as shown in menus.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Aberration => "Aberration",
            Self::Beast => "Beast",
            Self::Celestial => "Celestial",
            Self::Construct => "Construct",
            Self::Dragon => "Dragon",
            Self::Elemental => "Elemental",
            Self::Fey => "Fey",
            Self::Fiend => "Fiend",
            Self::Giant => "Giant",
            Self::Humanoid => "Humanoid",
            Self::Monstrosity => "Monstrosity",
            Self::Ooze => "Ooze",
            Self::Plant => "Plant",
            Self::Undead => "Undead",
        }
    }

    /// Lower-case name.
    pub fn lowercase(self) -> String {
        self.as_str().to_lowercase()
    }
}

impl fmt::Display for MonsterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MonsterType {
    type Err = ParseMonsterTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParseMonsterTypeError(s.to_string()))
    }
}

/// One kind of monster search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchQuery {
    /// Free-text name search; partial names match.
    Name(String),
    /// Exact challenge rating, e.g. "1/4".
    ChallengeRating(String),
    /// Creature type.
    Type(MonsterType),
}

impl SearchQuery {
    /// Query parameters for each request this search needs.
    ///
    /// Upstream type values are not consistently capitalized, so a type
    /// search asks for both spellings; results are concatenated in that order.
    pub fn requests(&self, limit: u32) -> Vec<Vec<(&'static str, String)>> {
        let with_limit =
            |key: &'static str, value: String| vec![("limit", limit.to_string()), (key, value)];
        match self {
            Self::Name(name) => vec![with_limit("search", name.clone())],
            Self::ChallengeRating(cr) => vec![with_limit("challenge_rating", cr.clone())],
            Self::Type(kind) => vec![
                with_limit("type", kind.as_str().to_string()),
                with_limit("type", kind.lowercase()),
            ],
        }
    }
}

impl fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name(name) => write!(f, "name \"{name}\""),
            Self::ChallengeRating(cr) => write!(f, "challenge rating {cr}"),
            Self::Type(kind) => write!(f, "type {kind}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_type_case_insensitive() {
        assert_eq!("undead".parse::<MonsterType>().unwrap(), MonsterType::Undead);
        assert_eq!(" DRAGON ".parse::<MonsterType>().unwrap(), MonsterType::Dragon);
        let err = "kobold".parse::<MonsterType>().unwrap_err();
        assert_eq!(err.to_string(), "unknown monster type: \"kobold\"");
    }

    #[test]
    fn type_names() {
        assert_eq!(MonsterType::Monstrosity.to_string(), "Monstrosity");
        assert_eq!(MonsterType::Fey.lowercase(), "fey");
        assert_eq!(MonsterType::ALL.len(), 14);
    }

    #[test]
    fn name_query_params() {
        let requests = SearchQuery::Name("gob".into()).requests(100);
        assert_eq!(
            requests,
            vec![vec![("limit", "100".to_string()), ("search", "gob".to_string())]]
        );
    }

    #[test]
    fn challenge_rating_query_params() {
        let requests = SearchQuery::ChallengeRating("1/4".into()).requests(10);
        assert_eq!(
            requests,
            vec![vec![
                ("limit", "10".to_string()),
                ("challenge_rating", "1/4".to_string())
            ]]
        );
    }

    #[test]
    fn type_query_asks_both_spellings() {
        let requests = SearchQuery::Type(MonsterType::Beast).requests(100);
        let values: Vec<_> = requests.iter().map(|params| params[1].1.as_str()).collect();
        assert_eq!(values, ["Beast", "beast"]);
    }

    #[test]
    fn display() {
        assert_eq!(SearchQuery::Name("orc".into()).to_string(), "name \"orc\"");
        assert_eq!(
            SearchQuery::ChallengeRating("5".into()).to_string(),
            "challenge rating 5"
        );
        assert_eq!(SearchQuery::Type(MonsterType::Ooze).to_string(), "type Ooze");
    }
}
