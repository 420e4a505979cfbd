use std::io::{self, Write};

use bst_open5e::{MonsterSource, MonsterType, SearchQuery};

use super::{RenderArgs, SelectArgs};
use crate::prompt::{Prompter, TerminalPrompter};

const SEARCH_KINDS: [&str; 3] = ["name", "challenge rating", "type"];

pub fn run(source: &dyn MonsterSource, render: &RenderArgs) -> Result<(), String> {
    let mut prompter = TerminalPrompter::stdio();
    run_with(source, render, &mut prompter, &mut io::stdout())
}

fn run_with<P: Prompter, W: Write>(
    source: &dyn MonsterSource,
    render: &RenderArgs,
    prompter: &mut P,
    out: &mut W,
) -> Result<(), String> {
    let query = ask_query(prompter)?;
    let records = source
        .search(&query)
        .map_err(|e| format!("search failed: {e}"))?;
    super::present(
        records,
        &query.to_string(),
        &SelectArgs::default(),
        render,
        prompter,
        out,
    )
}

fn ask_query<P: Prompter>(prompter: &mut P) -> Result<SearchQuery, String> {
    let kinds: Vec<String> = SEARCH_KINDS.iter().map(|s| s.to_string()).collect();
    let query = match prompter.select("Search monsters by", &kinds)? {
        0 => SearchQuery::Name(prompter.input("Monster name (partials ok)", "")?),
        1 => SearchQuery::ChallengeRating(prompter.input("CR Rating (whole number)", "1")?),
        _ => {
            let types: Vec<String> = MonsterType::ALL.iter().map(|t| t.to_string()).collect();
            let idx = prompter.select("Monster type", &types)?;
            let kind = MonsterType::ALL
                .get(idx)
                .copied()
                .ok_or_else(|| format!("no monster type at position {}", idx + 1))?;
            SearchQuery::Type(kind)
        }
    };
    Ok(query)
}
