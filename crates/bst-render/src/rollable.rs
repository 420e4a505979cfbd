//! Rollable markup for dice expressions in action text.
//!
//! The notebook this output targets turns `rollable(<dice>)` into a
//! clickable roll. Two shapes are recognized, both by pattern rather than by
//! parsing dice notation:
//!
//! - damage dice such as `(2d6 + 3)` or a bare `2d6 + 3`
//! - attack bonuses such as `+5 to hit`, which roll as `1d20+5`

use std::sync::LazyLock;

use regex::{Captures, Regex};

/// A parenthesized dice expression, or a bare one starting on a word boundary.
static DICE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\(([0-9]*d[0-9 +]*)\)|\b([0-9]+d[0-9]+(?:\s?\+\s?[0-9]+)*)")
        .expect("dice pattern is valid")
});

/// An attack bonus followed by "to hit".
static TO_HIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\+[0-9]*) to hit").expect("to-hit pattern is valid"));

/// Mark dice expressions and attack bonuses in `text` as rollable.
pub fn rollable_text(text: &str) -> String {
    let dice = DICE.replace_all(text, |caps: &Captures<'_>| {
        let expr = caps.get(1).or_else(|| caps.get(2)).map_or("", |m| m.as_str());
        format!("rollable({expr})")
    });
    TO_HIT
        .replace_all(&dice, "rollable(1d20${1}) to hit")
        .into_owned()
}
