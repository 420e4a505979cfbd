//! Ability scores and the modifier arithmetic derived from them.

use std::fmt;

use crate::monster::MonsterRecord;

/// One of the six ability scores, in statblock order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ability {
    /// Physical power.
    Strength,
    /// Agility and reflexes.
    Dexterity,
    /// Health and stamina.
    Constitution,
    /// Reasoning and memory.
    Intelligence,
    /// Perception and insight.
    Wisdom,
    /// Force of personality.
    Charisma,
}

impl Ability {
    /// All abilities in the order a statblock lists them.
    pub const ALL: [Ability; 6] = [
        Self::Strength,
        Self::Dexterity,
        Self::Constitution,
        Self::Intelligence,
        Self::Wisdom,
        Self::Charisma,
    ];

    /// Lowercase field name as used in the record JSON (`"strength"`).
    pub fn name(self) -> &'static str {
        match self {
            Self::Strength => "strength",
            Self::Dexterity => "dexterity",
            Self::Constitution => "constitution",
            Self::Intelligence => "intelligence",
            Self::Wisdom => "wisdom",
            Self::Charisma => "charisma",
        }
    }

    /// Upper-case column heading for the ability table (`"STR"`).
    pub fn abbrev(self) -> &'static str {
        match self {
            Self::Strength => "STR",
            Self::Dexterity => "DEX",
            Self::Constitution => "CON",
            Self::Intelligence => "INT",
            Self::Wisdom => "WIS",
            Self::Charisma => "CHA",
        }
    }

    /// Title-case label used on the saving throws line (`"Str"`).
    pub fn save_label(self) -> &'static str {
        match self {
            Self::Strength => "Str",
            Self::Dexterity => "Dex",
            Self::Constitution => "Con",
            Self::Intelligence => "Int",
            Self::Wisdom => "Wis",
            Self::Charisma => "Cha",
        }
    }

    /// The raw score a record holds for this ability.
    pub fn score(self, record: &MonsterRecord) -> i32 {
        match self {
            Self::Strength => record.strength,
            Self::Dexterity => record.dexterity,
            Self::Constitution => record.constitution,
            Self::Intelligence => record.intelligence,
            Self::Wisdom => record.wisdom,
            Self::Charisma => record.charisma,
        }
    }

    /// The explicit saving throw override a record holds, if any.
    pub fn save_override(self, record: &MonsterRecord) -> Option<i32> {
        match self {
            Self::Strength => record.strength_save,
            Self::Dexterity => record.dexterity_save,
            Self::Constitution => record.constitution_save,
            Self::Intelligence => record.intelligence_save,
            Self::Wisdom => record.wisdom_save,
            Self::Charisma => record.charisma_save,
        }
    }
}

impl fmt::Display for Ability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The modifier for an ability score: `round((score - 10) / 2)`.
///
/// Halves round to the nearest even integer, so `11` and `9` both give `0`
/// while `13` gives `+2` and `1` gives `-4`.
pub fn modifier(score: i32) -> i32 {
    let diff = score.saturating_sub(10);
    if diff % 2 == 0 {
        return diff / 2;
    }
    // Odd difference: the exact value sits halfway between `lo` and `lo + 1`.
    let lo = diff.div_euclid(2);
    if lo % 2 == 0 { lo } else { lo + 1 }
}

/// Format a bonus with an explicit `+` for positive values.
///
/// Zero and negative values carry no extra sign character: `0`, `-2`.
pub fn signed(n: i32) -> String {
    if n > 0 { format!("+{n}") } else { n.to_string() }
}

/// Format a score as it appears in the ability table: `"14 (+2)"`.
pub fn score_with_modifier(score: i32) -> String {
    format!("{score} ({})", signed(modifier(score)))
}
