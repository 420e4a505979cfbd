//! A markdown document kept as an ordered list of lines.

use std::fmt;

/// Thematic break between statblock sections.
///
/// `***` rather than `---` so that a rule directly under a text line is never
/// read as a setext heading underline.
pub const RULE: &str = "***";

/// An ordered sequence of markdown lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    lines: Vec<String>,
}

impl Document {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an ATX heading of the given level (`## Actions`).
    pub fn heading(&mut self, level: usize, text: &str) -> &mut Self {
        let level = level.clamp(1, 6);
        self.lines.push(format!("{} {text}", "#".repeat(level)));
        self
    }

    /// Append a line of text verbatim.
    pub fn line(&mut self, text: impl Into<String>) -> &mut Self {
        self.lines.push(text.into());
        self
    }

    /// Append a section divider.
    pub fn rule(&mut self) -> &mut Self {
        self.lines.push(RULE.to_string());
        self
    }

    /// The lines written so far.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Returns true if nothing has been written.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

/// Wrap text in strong emphasis.
pub fn bold(text: &str) -> String {
    format!("**{text}**")
}

/// Wrap text in emphasis.
pub fn italic(text: &str) -> String {
    format!("*{text}*")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_appends_in_order() {
        let mut doc = Document::new();
        doc.heading(1, "Title").line("body").rule().heading(2, "Actions");
        assert_eq!(doc.lines(), ["# Title", "body", "***", "## Actions"]);
        assert_eq!(doc.len(), 4);
        assert!(!doc.is_empty());
    }

    #[test]
    fn heading_level_is_clamped() {
        let mut doc = Document::new();
        doc.heading(0, "low").heading(9, "high");
        assert_eq!(doc.lines(), ["# low", "###### high"]);
    }

    #[test]
    fn display_ends_each_line() {
        let mut doc = Document::new();
        doc.line("a").line("b");
        assert_eq!(doc.to_string(), "a\nb\n");
        assert_eq!(Document::new().to_string(), "");
    }

    #[test]
    fn emphasis_helpers() {
        assert_eq!(bold("Speed"), "**Speed**");
        assert_eq!(italic("Small humanoid"), "*Small humanoid*");
    }
}
