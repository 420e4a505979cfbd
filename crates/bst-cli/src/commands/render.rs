use std::io;
use std::path::Path;

use super::{RenderArgs, SelectArgs};
use crate::prompt::TerminalPrompter;

pub fn run(file: &Path, select: &SelectArgs, render: &RenderArgs) -> Result<(), String> {
    let source = super::load_file(file)?;
    let records = source.records().to_vec();

    let mut prompter = TerminalPrompter::stdio();
    super::present(
        records,
        &file.display().to_string(),
        select,
        render,
        &mut prompter,
        &mut io::stdout(),
    )
}
