use std::io;

use bst_open5e::{MonsterSource, SearchQuery};
use tracing::info;

use super::{RenderArgs, SelectArgs};
use crate::prompt::TerminalPrompter;

pub fn run(
    source: &dyn MonsterSource,
    query: &SearchQuery,
    select: &SelectArgs,
    render: &RenderArgs,
) -> Result<(), String> {
    let records = source
        .search(query)
        .map_err(|e| format!("search failed: {e}"))?;
    info!(%query, found = records.len(), "search complete");

    let mut prompter = TerminalPrompter::stdio();
    super::present(
        records,
        &query.to_string(),
        select,
        render,
        &mut prompter,
        &mut io::stdout(),
    )
}
