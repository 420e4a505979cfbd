//! Statblock renderer for Bestiary.
//!
//! [`StatblockFormatter`] turns a [`bst_core::MonsterRecord`] into a
//! [`Document`]: an ordered list of markdown lines laid out like a rulebook
//! statblock. Rendering is pure. It performs no I/O and returns the same
//! document every time it is given the same record.

/// Line-oriented markdown document builder.
pub mod document;
/// Error types for rendering.
pub mod error;
/// Dice-expression markup for action descriptions.
pub mod rollable;
/// The statblock layout itself.
pub mod statblock;

/// Re-export the document model.
pub use document::{Document, bold, italic};
/// Re-export error types.
pub use error::{RenderError, RenderResult};
/// Re-export the rollable transform.
pub use rollable::rollable_text;
/// Re-export formatter types.
pub use statblock::{RenderOptions, StatblockFormatter, Title, render};
