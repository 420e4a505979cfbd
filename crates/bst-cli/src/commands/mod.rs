pub mod menu;
pub mod render;
pub mod search;
pub mod xp;

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use bst_core::MonsterRecord;
use bst_open5e::{ClientConfig, MonsterSource, Open5eClient, StaticSource};
use bst_render::{RenderOptions, StatblockFormatter, Title};
use clap::Args;
use comfy_table::{ContentArrangement, Table};
use tracing::debug;

use crate::prompt::Prompter;

/// Options shared by every command that prints a statblock.
#[derive(Args, Debug, Clone, Default)]
pub struct RenderArgs {
    /// Write the statblock to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Use the monster's name as the title instead of the notebook placeholder
    #[arg(long)]
    pub named: bool,

    /// Leave out the inline style ahead of the ability table
    #[arg(long)]
    pub no_style: bool,
}

impl RenderArgs {
    fn options(&self) -> RenderOptions {
        let title = if self.named {
            Title::Name
        } else {
            Title::Placeholder
        };
        RenderOptions::default()
            .with_title(title)
            .with_table_style(!self.no_style)
    }
}

/// How to choose among several search results.
#[derive(Args, Debug, Clone, Default)]
pub struct SelectArgs {
    /// Pick the monster with this name instead of prompting
    #[arg(short, long)]
    pub pick: Option<String>,

    /// List the matches instead of printing a statblock
    #[arg(short, long, conflicts_with = "pick")]
    pub list: bool,
}

/// Open the monster source: a saved JSON file if given, otherwise the API.
pub fn open_source(
    from: Option<&Path>,
    config: ClientConfig,
) -> Result<Box<dyn MonsterSource>, String> {
    match from {
        Some(path) => {
            debug!(path = %path.display(), "searching saved monsters");
            Ok(Box::new(load_file(path)?))
        }
        None => {
            debug!(url = %config.monsters_url(), "searching Open5e");
            let client = Open5eClient::new(config)
                .map_err(|e| format!("cannot create HTTP client: {e}"))?;
            Ok(Box::new(client))
        }
    }
}

/// Load monster records from a JSON file.
fn load_file(path: &Path) -> Result<StaticSource, String> {
    let json =
        fs::read_to_string(path).map_err(|e| format!("cannot read {}: {e}", path.display()))?;
    StaticSource::from_json(&json).map_err(|e| format!("{}: {e}", path.display()))
}

/// Choose one record from `records` and write its statblock.
///
/// `what` describes where the records came from, for the empty-result message.
fn present<P: Prompter, W: Write>(
    records: Vec<MonsterRecord>,
    what: &str,
    select: &SelectArgs,
    render: &RenderArgs,
    prompter: &mut P,
    out: &mut W,
) -> Result<(), String> {
    if records.is_empty() {
        writeln!(out, "  No monsters found for {what}.").map_err(|e| e.to_string())?;
        return Ok(());
    }

    if select.list {
        return write_table(&records, out);
    }

    let record = match &select.pick {
        Some(name) => find_by_name(records, name)?,
        None => choose(records, prompter)?,
    };

    write_statblock(&record, render, out)
}

fn find_by_name(records: Vec<MonsterRecord>, name: &str) -> Result<MonsterRecord, String> {
    let idx = records
        .iter()
        .position(|r| r.name == name)
        .or_else(|| records.iter().position(|r| r.name.eq_ignore_ascii_case(name)))
        .ok_or_else(|| format!("no monster named \"{name}\" in the results"))?;
    take(records, idx)
}

/// Ask which monster to use; a single result is taken without asking.
fn choose<P: Prompter>(
    records: Vec<MonsterRecord>,
    prompter: &mut P,
) -> Result<MonsterRecord, String> {
    let idx = if records.len() == 1 {
        0
    } else {
        let names: Vec<String> = records.iter().map(|r| r.name.clone()).collect();
        prompter.select("Which monster?", &names)?
    };
    take(records, idx)
}

fn take(mut records: Vec<MonsterRecord>, idx: usize) -> Result<MonsterRecord, String> {
    if idx < records.len() {
        Ok(records.swap_remove(idx))
    } else {
        Err(format!("no result at position {}", idx + 1))
    }
}

fn write_statblock<W: Write>(
    record: &MonsterRecord,
    render: &RenderArgs,
    out: &mut W,
) -> Result<(), String> {
    let doc = StatblockFormatter::new(render.options())
        .format(record)
        .map_err(|e| e.to_string())?;

    let written = if let Some(path) = &render.output {
        fs::write(path, doc.to_string())
            .map_err(|e| format!("cannot write to {}: {e}", path.display()))?;
        writeln!(out, "  Wrote {} to {}", record.name, path.display())
    } else {
        write!(out, "{doc}")
    };
    written.map_err(|e| e.to_string())
}

fn write_table<W: Write>(records: &[MonsterRecord], out: &mut W) -> Result<(), String> {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Name", "Size", "Type", "CR", "XP"]);

    for record in records {
        let xp = record.xp().unwrap_or("?");
        table.add_row(vec![
            record.name.as_str(),
            record.size.as_str(),
            record.creature_type.as_str(),
            record.challenge_rating.as_str(),
            xp,
        ]);
    }

    writeln!(out, "{table}").map_err(|e| e.to_string())?;
    writeln!(out).map_err(|e| e.to_string())?;
    writeln!(out, "  {} monsters", records.len()).map_err(|e| e.to_string())
}
