//! Personal library catalog.
//!
//! Keeps a list of books in a JSON file (`library.json` by default) and edits
//! it either through the numbered menu or through one-shot subcommands.

use std::fs;
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use catalog::core::field::Field;
use catalog::core::invariants::duplicate_ids;
use catalog::exit_codes;
use catalog::io::catalog_file::parse_books;
use catalog::io::config::{CatalogConfig, DEFAULT_CONFIG_PATH, load_config, write_config};
use catalog::logging;
use catalog::menu::run_menu;
use catalog::store::{AddOutcome, BookStore, EditOutcome};
use clap::{Parser, Subcommand};
use tracing::debug;

#[derive(Parser)]
#[command(name = "catalog", version, about = "Personal library catalog")]
struct Cli {
    /// Config file (TOML). Missing file means defaults.
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Catalog data file; overrides `data_file` from the config.
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Interactive numbered menu (the default).
    Menu,
    /// Write a default config file.
    Init {
        /// Overwrite an existing config.
        #[arg(short, long)]
        force: bool,
    },
    /// Add a book with status `available`.
    Add {
        #[arg(long)]
        title: String,
        #[arg(long)]
        author: String,
        #[arg(long, allow_negative_numbers = true)]
        year: i32,
    },
    /// Remove one book matched by title or author.
    Remove {
        /// Field to match: title or author.
        #[arg(long, default_value = "title")]
        by: String,
        value: String,
        /// 1-based choice among several matches.
        #[arg(long)]
        pick: Option<usize>,
    },
    /// Print books whose field equals the value (case-insensitive).
    Search {
        /// Field to match: id, title, author, year or status.
        #[arg(long, default_value = "title")]
        by: String,
        value: String,
    },
    /// Print every book.
    List,
    /// Set the status of one book matched by title or author.
    Status {
        /// Field to match: title or author.
        #[arg(long, default_value = "title")]
        by: String,
        value: String,
        /// New status: available or checked_out.
        status: String,
        /// 1-based choice among several matches.
        #[arg(long)]
        pick: Option<usize>,
    },
    /// Validate the catalog file and report shared ids.
    Check,
}

fn main() {
    logging::init();
    match run() {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("{:#}", err);
            std::process::exit(exit_codes::INVALID);
        }
    }
}

fn run() -> Result<i32> {
    let Cli {
        config,
        data,
        command,
    } = Cli::parse();
    let settings = || resolve_config(&config, data.as_deref());

    match command.unwrap_or(Command::Menu) {
        Command::Menu => {
            let mut store = BookStore::open(&settings()?);
            run_menu(&mut store, io::stdin().lock(), io::stdout().lock())?;
            Ok(exit_codes::OK)
        }
        Command::Init { force } => cmd_init(&config, force),
        Command::Add {
            title,
            author,
            year,
        } => cmd_add(&settings()?, &title, &author, year),
        Command::Remove { by, value, pick } => {
            let field: Field = by.parse()?;
            let mut store = BookStore::open(&settings()?);
            let outcome = store.delete(field, &value, pick)?;
            Ok(report_edit(outcome, "removed"))
        }
        Command::Search { by, value } => cmd_search(&settings()?, &by, &value),
        Command::List => {
            let store = BookStore::open(&settings()?);
            for book in store.list() {
                println!("{}", book);
            }
            Ok(exit_codes::OK)
        }
        Command::Status {
            by,
            value,
            status,
            pick,
        } => {
            let field: Field = by.parse()?;
            let mut store = BookStore::open(&settings()?);
            let outcome = store.update_status(field, &value, &status, pick)?;
            Ok(report_edit(outcome, "updated"))
        }
        Command::Check => cmd_check(&settings()?.data_file),
    }
}

/// Load the config file and apply the `--data` override.
fn resolve_config(config_path: &Path, data: Option<&Path>) -> Result<CatalogConfig> {
    let mut config = load_config(config_path)?;
    if let Some(data) = data {
        config.data_file = data.to_path_buf();
    }
    debug!(data_file = %config.data_file.display(), "resolved catalog file");
    Ok(config)
}

fn cmd_init(config_path: &Path, force: bool) -> Result<i32> {
    if config_path.exists() && !force {
        bail!(
            "{} already exists (use --force to overwrite)",
            config_path.display()
        );
    }
    write_config(config_path, &CatalogConfig::default())
        .with_context(|| format!("init {}", config_path.display()))?;
    println!("wrote {}", config_path.display());
    Ok(exit_codes::OK)
}

fn cmd_add(config: &CatalogConfig, title: &str, author: &str, year: i32) -> Result<i32> {
    let mut store = BookStore::open(config);
    match store.add(title, author, year)? {
        AddOutcome::Added(book) => {
            println!("added: {}", book);
            Ok(exit_codes::OK)
        }
        AddOutcome::FutureYear { year, max_year } => {
            eprintln!("rejected: year {} is after {}", year, max_year);
            Ok(exit_codes::INVALID)
        }
    }
}

fn cmd_search(config: &CatalogConfig, by: &str, value: &str) -> Result<i32> {
    let field: Field = by.parse()?;
    let store = BookStore::open(config);
    let results = store.search(field, value);
    if results.is_empty() {
        eprintln!("no books matched {}={}", field, value);
        return Ok(exit_codes::NOT_FOUND);
    }
    for book in results {
        println!("{}", book);
    }
    Ok(exit_codes::OK)
}

/// Validate the raw file. Unlike `load`, malformed content is reported.
fn cmd_check(data_file: &Path) -> Result<i32> {
    let contents = match fs::read_to_string(data_file) {
        Ok(contents) => contents,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            println!("check: {} missing (empty catalog)", data_file.display());
            return Ok(exit_codes::OK);
        }
        Err(err) => {
            return Err(err).with_context(|| format!("read {}", data_file.display()));
        }
    };
    let books =
        parse_books(&contents).with_context(|| format!("check {}", data_file.display()))?;
    for warning in duplicate_ids(&books) {
        eprintln!("warning: {}", warning);
    }
    println!("check: {} records ok", books.len());
    Ok(exit_codes::OK)
}

/// Print an edit outcome and map it to an exit code.
fn report_edit(outcome: EditOutcome, verb: &str) -> i32 {
    match outcome {
        EditOutcome::Done(book) => {
            println!("{}: {}", verb, book);
            exit_codes::OK
        }
        EditOutcome::NotFound => {
            eprintln!("no book matched");
            exit_codes::NOT_FOUND
        }
        EditOutcome::Ambiguous(candidates) => {
            for (pos, book) in candidates.iter().enumerate() {
                println!("{}. {}", pos + 1, book);
            }
            eprintln!(
                "{} books matched; rerun with --pick <N>",
                candidates.len()
            );
            exit_codes::AMBIGUOUS
        }
        EditOutcome::InvalidChoice { pick, candidates } => {
            eprintln!("invalid pick {}: choose 1..={}", pick, candidates);
            exit_codes::INVALID
        }
    }
}
