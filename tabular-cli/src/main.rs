mod error;

use std::fs;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;

use clap::Parser;
use clap::Subcommand;
use serde::Serialize;
use serde::de::DeserializeOwned;
use simplelog::{Config, LevelFilter, WriteLogger};
use tabular_lib::Parameters;
use tabular_lib::change::{self, Change};
use tabular_lib::model::Record;
use tabular_lib::view;

use crate::error::CliError;

#[derive(Parser)]
#[command(name = "tabular")]
#[command(about = "Filter, sort and page tabular JSON data")]
struct Cli {
    /// Log more detail to stderr (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the filtered, sorted and paged items with the filtered count
    Prepare {
        /// Path to the parameters JSON file
        #[arg(long)]
        params: PathBuf,
        /// Path to a JSON array of items
        #[arg(long)]
        items: PathBuf,
    },
    /// Apply a change and print the next parameters
    Change {
        /// Path to the parameters JSON file
        #[arg(long)]
        params: PathBuf,
        /// Path to the change JSON file
        #[arg(long)]
        change: PathBuf,
        /// Items for selection changes that do not carry their own
        #[arg(long)]
        items: Option<PathBuf>,
    },
    /// Print the page count and whether the current page exists
    Pages {
        /// Path to the parameters JSON file
        #[arg(long)]
        params: PathBuf,
        /// Path to a JSON array of items
        #[arg(long)]
        items: PathBuf,
    },
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PageInfo {
    page_count: usize,
    page_number: Option<usize>,
    page_number_valid: bool,
    filtered_count: usize,
}

fn main() {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    if let Err(e) = WriteLogger::init(level, Config::default(), std::io::stderr()) {
        eprintln!("Failed to initialize logger: {}", e);
    }

    if let Err(e) = run(cli.command, &mut std::io::stdout()) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(command: Commands, out: &mut impl Write) -> Result<(), CliError> {
    match command {
        Commands::Prepare { params, items } => {
            let params: Parameters = read_json(&params)?;
            let items: Vec<Record> = read_json(&items)?;

            let prepared = view::prepare(&params, &items)?;
            print_json(out, &prepared)
        }
        Commands::Change {
            params,
            change,
            items,
        } => {
            let params: Parameters = read_json(&params)?;
            let mut change = Change::from_json(read_json(&change)?)?;
            if let Some(items) = items {
                let items: Vec<Record> = read_json(&items)?;
                change = change.with_default_items(&items);
            }

            let next = change::change(&change, &params)?;
            print_json(out, &next)
        }
        Commands::Pages { params, items } => {
            let params: Parameters = read_json(&params)?;
            let items: Vec<Record> = read_json(&items)?;

            let filtered = view::filter(&params, &items);
            print_json(out, &PageInfo {
                page_count: view::count_pages(&params, &filtered),
                page_number: params.page_number,
                page_number_valid: view::is_page_number_valid(&params, &filtered),
                filtered_count: filtered.len(),
            })
        }
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, CliError> {
    log::debug!("Reading {}", path.display());

    let text = fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| CliError::Json {
        path: path.to_path_buf(),
        source,
    })
}

fn print_json<T: Serialize>(out: &mut impl Write, value: &T) -> Result<(), CliError> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}
