//! The monster record schema.
//!
//! Upstream data is loosely typed: strings arrive as `null`, lists arrive as
//! empty strings, and movement speeds mix integers with boolean flags. The
//! deserializers in this module absorb those shapes so that every field the
//! renderer reads has a single, explicit type.

use std::collections::BTreeMap;
use std::fmt;

use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::Deserialize;

use crate::ability::{Ability, modifier};
use crate::challenge::xp_for;
use crate::error::CoreResult;

/// Speeds at or below this value are never listed as a primary speed.
pub const PRIMARY_SPEED_THRESHOLD: u32 = 2;

/// A monster statblock as served by the Open5e API.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MonsterRecord {
    /// Display name. Unique within one search result set.
    pub name: String,
    /// Size category, e.g. "Medium".
    #[serde(default, deserialize_with = "null_as_default")]
    pub size: String,
    /// Creature type, e.g. "humanoid".
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub creature_type: String,
    /// Alignment, e.g. "neutral evil".
    #[serde(default, deserialize_with = "null_as_default")]
    pub alignment: String,

    /// Armor class.
    pub armor_class: i32,
    /// Source of the armor class; often empty.
    #[serde(default, deserialize_with = "null_as_default")]
    pub armor_desc: String,
    /// Average hit points.
    pub hit_points: i32,
    /// Hit dice in dice notation, e.g. "6d8+12".
    #[serde(default, deserialize_with = "null_as_default")]
    pub hit_dice: String,
    /// Movement modes in upstream order.
    #[serde(default, deserialize_with = "null_as_default")]
    pub speed: Speed,

    /// Strength score.
    pub strength: i32,
    /// Dexterity score.
    pub dexterity: i32,
    /// Constitution score.
    pub constitution: i32,
    /// Intelligence score.
    pub intelligence: i32,
    /// Wisdom score.
    pub wisdom: i32,
    /// Charisma score.
    pub charisma: i32,

    /// Strength saving throw override.
    #[serde(default)]
    pub strength_save: Option<i32>,
    /// Dexterity saving throw override.
    #[serde(default)]
    pub dexterity_save: Option<i32>,
    /// Constitution saving throw override.
    #[serde(default)]
    pub constitution_save: Option<i32>,
    /// Intelligence saving throw override.
    #[serde(default)]
    pub intelligence_save: Option<i32>,
    /// Wisdom saving throw override.
    #[serde(default)]
    pub wisdom_save: Option<i32>,
    /// Charisma saving throw override.
    #[serde(default)]
    pub charisma_save: Option<i32>,

    /// Skill bonuses keyed by lowercase skill name.
    #[serde(default, deserialize_with = "null_as_default")]
    pub skills: BTreeMap<String, i32>,

    /// Damage vulnerabilities as a comma-joined list.
    #[serde(default, deserialize_with = "null_as_default")]
    pub damage_vulnerabilities: String,
    /// Damage resistances as a comma-joined list.
    #[serde(default, deserialize_with = "null_as_default")]
    pub damage_resistances: String,
    /// Damage immunities as a comma-joined list.
    #[serde(default, deserialize_with = "null_as_default")]
    pub damage_immunities: String,
    /// Condition immunities as a comma-joined list.
    #[serde(default, deserialize_with = "null_as_default")]
    pub condition_immunities: String,

    /// Senses, e.g. "darkvision 60 ft., passive Perception 9".
    #[serde(default, deserialize_with = "null_as_default")]
    pub senses: String,
    /// Languages spoken or understood.
    #[serde(default, deserialize_with = "null_as_default")]
    pub languages: String,
    /// Challenge rating key into the XP table, e.g. "1/4".
    #[serde(default, deserialize_with = "rating")]
    pub challenge_rating: String,

    /// Passive traits.
    #[serde(default, deserialize_with = "features")]
    pub special_abilities: Vec<Feature>,
    /// Actions.
    #[serde(default, deserialize_with = "features")]
    pub actions: Vec<Feature>,
    /// Reactions.
    #[serde(default, deserialize_with = "features")]
    pub reactions: Vec<Feature>,
    /// Legendary actions.
    #[serde(default, deserialize_with = "features")]
    pub legendary_actions: Vec<Feature>,
    /// Preamble for the legendary actions section.
    #[serde(default, deserialize_with = "null_as_default")]
    pub legendary_desc: String,
}

impl MonsterRecord {
    /// Parse a single record from JSON.
    pub fn from_json(json: &str) -> CoreResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Check that the record can be rendered.
    ///
    /// The only hard requirement is a challenge rating present in the XP table.
    pub fn validate(&self) -> CoreResult<()> {
        self.xp().map(|_| ())
    }

    /// Experience point reward for this record's challenge rating.
    pub fn xp(&self) -> CoreResult<&'static str> {
        xp_for(&self.challenge_rating)
    }

    /// Saving throw bonus for an ability.
    ///
    /// Without an override this is the ability modifier. With one, the
    /// override is added to the modifier.
    pub fn save_bonus(&self, ability: Ability) -> i32 {
        let base = modifier(ability.score(self));
        ability.save_override(self).map_or(base, |total| total + base)
    }
}

/// A named statblock entry: a trait, action, reaction, or legendary action.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct Feature {
    /// Display name, e.g. "Multiattack".
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// Free-text description.
    #[serde(default, deserialize_with = "null_as_default")]
    pub desc: String,
}

impl Feature {
    /// Create a feature from a name and description.
    pub fn new(name: impl Into<String>, desc: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            desc: desc.into(),
        }
    }
}

/// The value of one movement mode.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum SpeedValue {
    /// A distance in feet.
    Feet(u32),
    /// A flag such as `"hover": true`.
    Flag(bool),
    /// Anything else upstream put in the map (notes, malformed values).
    Other(serde_json::Value),
}

impl SpeedValue {
    /// Numeric reading of the value: feet, `1` for a set flag, otherwise `0`.
    pub fn magnitude(&self) -> u32 {
        match self {
            Self::Feet(feet) => *feet,
            Self::Flag(true) => 1,
            Self::Flag(false) | Self::Other(_) => 0,
        }
    }
}

/// Movement modes in the order upstream listed them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Speed(Vec<(String, SpeedValue)>);

impl Speed {
    /// Build a speed map from `(mode, value)` pairs.
    pub fn new(modes: Vec<(String, SpeedValue)>) -> Self {
        Self(modes)
    }

    /// Iterate over all modes in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SpeedValue)> {
        self.0.iter().map(|(mode, value)| (mode.as_str(), value))
    }

    /// Modes listed as primary speeds, with their distance in feet.
    pub fn primary(&self) -> impl Iterator<Item = (&str, u32)> {
        self.iter()
            .map(|(mode, value)| (mode, value.magnitude()))
            .filter(|(_, feet)| *feet > PRIMARY_SPEED_THRESHOLD)
    }

    /// Modes shown only as a parenthetical annotation, such as `hover`.
    pub fn annotations(&self) -> impl Iterator<Item = &str> {
        self.iter()
            .filter(|(_, value)| {
                let magnitude = value.magnitude();
                magnitude > 0 && magnitude < PRIMARY_SPEED_THRESHOLD
            })
            .map(|(mode, _)| mode)
    }
}

impl<'de> Deserialize<'de> for Speed {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SpeedVisitor;

        impl<'de> Visitor<'de> for SpeedVisitor {
            type Value = Speed;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of movement modes to speeds")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Speed, A::Error> {
                let mut modes = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((mode, value)) = map.next_entry::<String, SpeedValue>()? {
                    modes.push((mode, value));
                }
                Ok(Speed(modes))
            }
        }

        deserializer.deserialize_map(SpeedVisitor)
    }
}

/// Treat an explicit `null` the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Accept a challenge rating given as a string or a number.
fn rating<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Rating {
        Text(String),
        Int(i64),
        Float(f64),
    }

    Ok(match Option::<Rating>::deserialize(deserializer)? {
        Some(Rating::Text(text)) => text,
        Some(Rating::Int(n)) => n.to_string(),
        Some(Rating::Float(x)) => x.to_string(),
        None => String::new(),
    })
}

/// Accept a feature list, or treat `null` and bare strings as no features.
fn features<'de, D>(deserializer: D) -> Result<Vec<Feature>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Features {
        List(Vec<Feature>),
        Ignored(de::IgnoredAny),
    }

    Ok(match Option::<Features>::deserialize(deserializer)? {
        Some(Features::List(list)) => list,
        Some(Features::Ignored(_)) | None => Vec::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;

    const SKELETON: &str = r#"{
        "name": "Skeleton",
        "size": "Medium",
        "type": "undead",
        "alignment": "lawful evil",
        "armor_class": 13,
        "armor_desc": "armor scraps",
        "hit_points": 13,
        "hit_dice": "2d8+4",
        "speed": {"walk": 30, "swim": 0, "hover": true, "notes": "clattering"},
        "strength": 10, "dexterity": 14, "constitution": 15,
        "intelligence": 6, "wisdom": 8, "charisma": 5,
        "strength_save": null, "dexterity_save": 4,
        "skills": {},
        "damage_vulnerabilities": "bludgeoning",
        "damage_resistances": "",
        "damage_immunities": "poison",
        "condition_immunities": "exhaustion, poisoned",
        "senses": "darkvision 60 ft., passive Perception 9",
        "languages": null,
        "challenge_rating": "1/4",
        "actions": [{"name": "Shortsword", "desc": "Melee Weapon Attack: +4 to hit."}],
        "reactions": "",
        "legendary_actions": null,
        "special_abilities": []
    }"#;

    #[test]
    fn parses_lenient_fields() {
        let record = MonsterRecord::from_json(SKELETON).unwrap();
        assert_eq!(record.name, "Skeleton");
        assert_eq!(record.creature_type, "undead");
        assert_eq!(record.languages, "");
        assert_eq!(record.dexterity_save, Some(4));
        assert_eq!(record.strength_save, None);
        assert_eq!(record.wisdom_save, None);
        assert!(record.skills.is_empty());
        assert!(record.reactions.is_empty());
        assert!(record.legendary_actions.is_empty());
        assert_eq!(record.legendary_desc, "");
        assert_eq!(record.actions, vec![Feature::new("Shortsword", "Melee Weapon Attack: +4 to hit.")]);
    }

    #[test]
    fn speed_keeps_upstream_order() {
        let record = MonsterRecord::from_json(SKELETON).unwrap();
        let modes: Vec<_> = record.speed.iter().map(|(mode, _)| mode).collect();
        assert_eq!(modes, ["walk", "swim", "hover", "notes"]);
    }

    #[test]
    fn speed_primary_and_annotations() {
        let record = MonsterRecord::from_json(SKELETON).unwrap();
        let primary: Vec<_> = record.speed.primary().collect();
        assert_eq!(primary, [("walk", 30)]);
        let annotations: Vec<_> = record.speed.annotations().collect();
        assert_eq!(annotations, ["hover"]);
    }

    #[test]
    fn speed_of_two_is_dropped() {
        let speed = Speed::new(vec![
            ("crawl".into(), SpeedValue::Feet(2)),
            ("burrow".into(), SpeedValue::Feet(1)),
            ("walk".into(), SpeedValue::Feet(3)),
        ]);
        assert_eq!(speed.primary().collect::<Vec<_>>(), [("walk", 3)]);
        assert_eq!(speed.annotations().collect::<Vec<_>>(), ["burrow"]);
    }

    #[test]
    fn speed_value_magnitude() {
        assert_eq!(SpeedValue::Feet(40).magnitude(), 40);
        assert_eq!(SpeedValue::Flag(true).magnitude(), 1);
        assert_eq!(SpeedValue::Flag(false).magnitude(), 0);
        assert_eq!(SpeedValue::Other(serde_json::json!("fast")).magnitude(), 0);
    }

    #[test]
    fn numeric_challenge_rating() {
        let json = SKELETON.replace(r#""challenge_rating": "1/4""#, r#""challenge_rating": 3"#);
        let record = MonsterRecord::from_json(&json).unwrap();
        assert_eq!(record.challenge_rating, "3");
        assert_eq!(record.xp().unwrap(), "700");
    }

    #[test]
    fn validate_rejects_unknown_rating() {
        let json = SKELETON.replace(r#""challenge_rating": "1/4""#, r#""challenge_rating": "99""#);
        let record = MonsterRecord::from_json(&json).unwrap();
        assert!(matches!(
            record.validate(),
            Err(CoreError::UnknownChallengeRating(ref cr)) if cr == "99"
        ));
    }

    #[test]
    fn missing_required_field_is_an_error() {
        let err = MonsterRecord::from_json(r#"{"name": "Nothing"}"#).unwrap_err();
        assert!(matches!(err, CoreError::Json(_)));
    }

    #[test]
    fn save_bonus_adds_override_to_modifier() {
        let record = MonsterRecord::from_json(SKELETON).unwrap();
        // Dex 14 gives +2, plus the override of 4.
        assert_eq!(record.save_bonus(Ability::Dexterity), 6);
        // No override: modifier only.
        assert_eq!(record.save_bonus(Ability::Constitution), 2);
        assert_eq!(record.save_bonus(Ability::Charisma), -2);
    }
}
