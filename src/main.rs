//! Command-line front end for expertdir.
//!
//! Loads the directory once, reports any fallback notice on stderr, then
//! either answers a single command or reads queries from stdin.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing::debug;

use expertdir::{render, source, Directory, SearchField, SearchResults, Session, DEFAULT_SOURCE};

#[derive(Parser, Debug)]
#[command(name = "expertdir", about = "Search an expert directory by name, affiliation or keyword")]
#[command(version)]
struct Cli {
    /// Directory table: a CSV file path or an http(s) URL
    #[arg(short, long, default_value = DEFAULT_SOURCE, env = "EXPERTDIR_SOURCE")]
    source: String,

    /// Field to match against (repeatable; default: all fields)
    #[arg(short, long = "field", value_enum)]
    fields: Vec<FieldArg>,

    /// Print JSON instead of text
    #[arg(long)]
    json: bool,

    /// More logging (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run one search and print the matches
    Search {
        /// Query words (joined with spaces)
        #[arg(required = true)]
        query: Vec<String>,
    },
    /// Print every record
    List,
    /// Print summary counts
    Stats,
    /// Read queries from stdin, one per line (default)
    Interactive,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum FieldArg {
    Name,
    Affiliation,
    Keyword1,
    Keyword2,
    Keyword3,
}

impl From<FieldArg> for SearchField {
    fn from(f: FieldArg) -> Self {
        match f {
            FieldArg::Name        => SearchField::Name,
            FieldArg::Affiliation => SearchField::Affiliation,
            FieldArg::Keyword1    => SearchField::Keyword1,
            FieldArg::Keyword2    => SearchField::Keyword2,
            FieldArg::Keyword3    => SearchField::Keyword3,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let fields: Vec<SearchField> = if cli.fields.is_empty() {
        expertdir::CANONICAL_FIELDS.to_vec()
    } else {
        cli.fields.iter().copied().map(SearchField::from).collect()
    };
    debug!(?fields, "search fields");

    let mut session = Session::new().with_fields(fields);
    if !cli.json {
        eprintln!("{}", render::LOADING);
    }
    session.settle(Directory::load(&*source::from_location(&cli.source)));

    if let Some(message) = session.error() {
        eprintln!("{}", render::notice(message));
    }

    let out = io::stdout();
    let mut out = out.lock();

    match cli.command.unwrap_or(Commands::Interactive) {
        Commands::Search { query } => {
            session.set_query(query.join(" "));
            let results = session.submit();
            print_results(&mut out, results, cli.json)?;
        }
        Commands::List => {
            let dir = directory(&session)?;
            if cli.json {
                print_json(&mut out, dir.records())?;
            } else {
                write!(out, "{}", render::table(dir.records()))?;
            }
        }
        Commands::Stats => {
            let stats = directory(&session)?.stats();
            if cli.json {
                print_json(&mut out, &stats)?;
            } else {
                writeln!(out, "{}", render::stats(&stats))?;
            }
        }
        Commands::Interactive => {
            interactive(&mut session, cli.json, io::stdin().lock(), &mut out)?;
        }
    }

    Ok(())
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "expertdir=info",
        _ => "expertdir=debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default.into()),
        )
        .with_writer(io::stderr)
        .init();
}

fn directory(session: &Session) -> Result<&Directory> {
    session.directory().context("directory was not loaded")
}

fn interactive(
    session: &mut Session,
    json:    bool,
    input:   impl BufRead,
    out:     &mut impl Write,
) -> Result<()> {
    if !json {
        if let Some(dir) = session.directory() {
            writeln!(out, "{}", render::stats(&dir.stats()))?;
        }
        writeln!(out, "Type a query and press Enter. Empty line clears, :q quits.")?;
    }

    for line in input.lines() {
        let line = line.context("failed to read query")?;
        if line.trim() == ":q" {
            break;
        }

        session.set_query(line);
        if !session.submit().performed {
            session.clear();
        }
        print_results(out, session.results(), json)?;
        out.flush()?;
    }
    Ok(())
}

fn print_results(out: &mut impl Write, results: &SearchResults, json: bool) -> Result<()> {
    if json {
        print_json(out, results)
    } else {
        write!(out, "{}", render::results(results))?;
        Ok(())
    }
}

fn print_json<T: Serialize + ?Sized>(out: &mut impl Write, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value).context("failed to write JSON")?;
    writeln!(out)?;
    Ok(())
}
