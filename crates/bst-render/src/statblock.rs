//! Statblock layout.
//!
//! Sections are written in rulebook order: header, defenses, speed, ability
//! table, saves and traits, challenge, special abilities, then the action
//! sections. Optional sections are skipped when their source field is empty.

use bst_core::{Ability, CoreError, Feature, MonsterRecord, Speed, score_with_modifier, signed};
use tracing::debug;

use crate::document::{Document, bold, italic};
use crate::error::{RenderError, RenderResult};
use crate::rollable::rollable_text;

/// Title written in place of the monster name; the notebook fills it in.
pub const NAME_PLACEHOLDER: &str = r"$\[objectname]";

/// Inline style for the ability table borders.
pub const TABLE_STYLE: &str = "<style>div#blurb-text td,div#blurb-text th{border-bottom:1px solid #DB6214; padding: 0 0.5em 0 0.2em}div#blurb-text thead{background-color: #ccc}</style>";

/// What to put in the level-1 heading.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Title {
    /// The notebook's object-name placeholder.
    #[default]
    Placeholder,
    /// The monster's own name.
    Name,
}

/// Presentation switches for the formatter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Heading text.
    pub title: Title,
    /// Emit the inline style directive ahead of the ability table.
    pub table_style: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            title: Title::Placeholder,
            table_style: true,
        }
    }
}

impl RenderOptions {
    /// Set the heading text.
    pub fn with_title(mut self, title: Title) -> Self {
        self.title = title;
        self
    }

    /// Enable or disable the table style directive.
    pub fn with_table_style(mut self, enabled: bool) -> Self {
        self.table_style = enabled;
        self
    }
}

/// Renders monster records as statblock documents.
#[derive(Debug, Clone, Default)]
pub struct StatblockFormatter {
    options: RenderOptions,
}

impl StatblockFormatter {
    /// Create a formatter with the given options.
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// The options this formatter renders with.
    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Render one record.
    ///
    /// The challenge rating is checked before anything is written, so an
    /// unknown rating yields an error and no partial document.
    pub fn format(&self, record: &MonsterRecord) -> RenderResult<Document> {
        let unknown_rating = |_: CoreError| RenderError::UnknownChallengeRating {
            name: record.name.clone(),
            rating: record.challenge_rating.clone(),
        };
        record.validate().map_err(unknown_rating)?;
        let xp = record.xp().map_err(unknown_rating)?;

        let mut doc = Document::new();

        self.write_header(&mut doc, record);
        write_defenses(&mut doc, record);
        write_speed(&mut doc, &record.speed);

        doc.rule();
        self.write_ability_table(&mut doc, record);
        doc.rule();

        write_saving_throws(&mut doc, record);
        write_skills(&mut doc, record);
        write_damage_and_conditions(&mut doc, record);
        doc.line(format!("{} {}", bold("Senses"), record.senses));
        doc.line(format!("{} {}", bold("Languages"), record.languages));
        doc.line(format!(
            "{} {} ({xp} XP)",
            bold("Challenge"),
            record.challenge_rating
        ));
        doc.rule();

        for ability in &record.special_abilities {
            doc.line(format!("{} {}", bold(&ability.name), ability.desc));
        }

        doc.heading(2, "Actions");
        write_features(&mut doc, &record.actions);

        if !record.reactions.is_empty() {
            doc.heading(2, "Reactions");
            write_features(&mut doc, &record.reactions);
        }

        if !record.legendary_actions.is_empty() {
            doc.heading(2, "Legendary Actions");
            doc.line(record.legendary_desc.as_str());
            write_features(&mut doc, &record.legendary_actions);
        }

        debug!(name = %record.name, lines = doc.len(), "rendered statblock");
        Ok(doc)
    }

    fn write_header(&self, doc: &mut Document, record: &MonsterRecord) {
        let title = match self.options.title {
            Title::Placeholder => NAME_PLACEHOLDER,
            Title::Name => record.name.as_str(),
        };
        doc.heading(1, title);
        doc.line(italic(&format!(
            "{} {}, {}",
            record.size, record.creature_type, record.alignment
        )));
        doc.rule();
    }

    fn write_ability_table(&self, doc: &mut Document, record: &MonsterRecord) {
        if self.options.table_style {
            doc.line(TABLE_STYLE);
        }
        let header: String = Ability::ALL.iter().map(|a| format!("{}|", a.abbrev())).collect();
        let values: String = Ability::ALL
            .iter()
            .map(|a| format!("{}|", score_with_modifier(a.score(record))))
            .collect();
        doc.line(format!("|{header}"));
        doc.line(format!("|{}", ":---:|".repeat(Ability::ALL.len())));
        doc.line(format!("|{values}"));
    }
}

/// Render a record with default options.
pub fn render(record: &MonsterRecord) -> RenderResult<Document> {
    StatblockFormatter::default().format(record)
}

fn write_defenses(doc: &mut Document, record: &MonsterRecord) {
    // An empty armor description still prints its parentheses.
    doc.line(format!(
        "{} {} ({})",
        bold("Armor Class"),
        record.armor_class,
        record.armor_desc
    ));
    doc.line(format!(
        "{} {} rollable({})",
        bold("Hit Points"),
        record.hit_points,
        record.hit_dice
    ));
}

fn write_speed(doc: &mut Document, speed: &Speed) {
    doc.line(bold("Speed"));
    for (mode, feet) in speed.primary() {
        doc.line(format!("{mode} {feet}ft.,"));
    }
    let annotations: String = speed.annotations().map(|mode| format!("({mode}) ")).collect();
    if !annotations.is_empty() {
        doc.line(annotations);
    }
}

fn write_saving_throws(doc: &mut Document, record: &MonsterRecord) {
    let saves: String = Ability::ALL
        .iter()
        .map(|&a| format!("{} {} ", a.save_label(), signed(record.save_bonus(a))))
        .collect();
    doc.line(format!("{} {saves}", bold("Saving Throws")));
}

fn write_skills(doc: &mut Document, record: &MonsterRecord) {
    if record.skills.is_empty() {
        return;
    }
    let skills: String = record
        .skills
        .iter()
        .map(|(name, bonus)| format!("{} {}, ", capitalize(name), signed(*bonus)))
        .collect();
    doc.line(format!("{} {skills}", bold("Skills")));
}

fn write_damage_and_conditions(doc: &mut Document, record: &MonsterRecord) {
    let entries = [
        ("Damage Vulnerabilities", &record.damage_vulnerabilities),
        ("Damage Resistances", &record.damage_resistances),
        ("Damage Immunities", &record.damage_immunities),
        ("Condition Immunities", &record.condition_immunities),
    ];
    for (label, value) in entries {
        if !value.is_empty() {
            doc.line(format!("{} {value}", bold(label)));
        }
    }
}

fn write_features(doc: &mut Document, features: &[Feature]) {
    for feature in features {
        doc.line(format!(
            "{} {}",
            bold(&format!("{}.", feature.name)),
            rollable_text(&feature.desc)
        ));
    }
}

/// Upper-case the first character, leaving the rest untouched.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
