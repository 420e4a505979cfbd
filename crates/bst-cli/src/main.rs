//! CLI frontend for Bestiary: search the Open5e monster database and print
//! statblocks as Markdown.

mod commands;
mod prompt;

use std::path::PathBuf;
use std::process;

use bst_open5e::{ClientConfig, MonsterType, SearchQuery};
use clap::{Parser, Subcommand};
use commands::{RenderArgs, SelectArgs};
use tracing::Level;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "bst",
    about = "Bestiary: Markdown statblocks from the Open5e monster database",
    version,
    propagate_version = true
)]
struct Cli {
    /// Search monsters saved in a JSON file instead of the API
    #[arg(long, global = true, value_name = "FILE")]
    from: Option<PathBuf>,

    /// Open5e API base URL (overrides OPEN5E_URL)
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Maximum results per request (overrides OPEN5E_LIMIT)
    #[arg(long, global = true)]
    limit: Option<u32>,

    /// Log requests and decisions to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Choose a search interactively (the default)
    Menu {
        #[command(flatten)]
        render: RenderArgs,
    },

    /// Search monsters by name; partial names match
    Name {
        /// Name or part of a name
        query: String,

        #[command(flatten)]
        select: SelectArgs,

        #[command(flatten)]
        render: RenderArgs,
    },

    /// Search monsters by challenge rating
    Cr {
        /// Challenge rating, e.g. 5 or 1/4
        rating: String,

        #[command(flatten)]
        select: SelectArgs,

        #[command(flatten)]
        render: RenderArgs,
    },

    /// Search monsters by creature type
    Type {
        /// Creature type (e.g. dragon, undead, humanoid)
        kind: MonsterType,

        #[command(flatten)]
        select: SelectArgs,

        #[command(flatten)]
        render: RenderArgs,
    },

    /// Render a statblock from a saved JSON record, list, or API page
    Render {
        /// JSON file to read
        file: PathBuf,

        #[command(flatten)]
        select: SelectArgs,

        #[command(flatten)]
        render: RenderArgs,
    },

    /// Show the experience points for a challenge rating
    Xp {
        /// Challenge rating, e.g. 5 or 1/4
        rating: String,
    },
}

/// `RUST_LOG` wins when set; otherwise only warnings are shown. `-v` adds debug.
fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let filter = if verbose {
        filter.add_directive(Level::DEBUG.into())
    } else {
        filter
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

fn client_config(cli: &Cli) -> ClientConfig {
    let mut config = ClientConfig::from_env();
    if let Some(url) = &cli.base_url {
        config = config.with_base_url(url.clone());
    }
    if let Some(limit) = cli.limit {
        config = config.with_limit(limit);
    }
    config
}

fn search(
    cli: &Cli,
    query: SearchQuery,
    select: &SelectArgs,
    render: &RenderArgs,
) -> Result<(), String> {
    let source = commands::open_source(cli.from.as_deref(), client_config(cli))?;
    commands::search::run(source.as_ref(), &query, select, render)
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match &cli.command {
        None => commands::open_source(cli.from.as_deref(), client_config(&cli))
            .and_then(|source| commands::menu::run(source.as_ref(), &RenderArgs::default())),
        Some(Commands::Menu { render }) => {
            commands::open_source(cli.from.as_deref(), client_config(&cli))
                .and_then(|source| commands::menu::run(source.as_ref(), render))
        }
        Some(Commands::Name {
            query,
            select,
            render,
        }) => search(&cli, SearchQuery::Name(query.clone()), select, render),
        Some(Commands::Cr {
            rating,
            select,
            render,
        }) => search(
            &cli,
            SearchQuery::ChallengeRating(rating.trim().to_string()),
            select,
            render,
        ),
        Some(Commands::Type {
            kind,
            select,
            render,
        }) => search(&cli, SearchQuery::Type(*kind), select, render),
        Some(Commands::Render {
            file,
            select,
            render,
        }) => commands::render::run(file, select, render),
        Some(Commands::Xp { rating }) => commands::xp::run(rating),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
