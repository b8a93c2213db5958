//! Find all words of a word list in a text.
//!
//! Prints one line per match, `Word: <word>, Start index: <index>`, where the
//! index counts characters from the start of the text.

use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use dictmatch::{dictionary, dot, DotConfig, TrieAutomaton};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Word list, one word per line
    #[arg(short, long, value_name = "FILE")]
    dict: PathBuf,

    /// Text to scan (read from stdin if absent)
    #[arg(short, long, value_name = "FILE")]
    text: Option<PathBuf>,

    /// Print the automaton in DOT format before the matches
    #[arg(long)]
    dot: bool,

    /// Include failure links in the DOT output
    #[arg(long, requires = "dot")]
    fail_edges: bool,
}

fn init_logging() {
    let filter =
        EnvFilter::try_from_env("DICTMATCH_LOG").unwrap_or_else(|_| EnvFilter::new("off"));

    fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    init_logging();

    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("dictmatch: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let words = dictionary::load_words(&args.dict)?;
    let text = match &args.text {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Cannot read text {}", path.display()))?,
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("Cannot read text from stdin")?;
            text
        }
    };

    let automaton = TrieAutomaton::from_words(&words);
    tracing::info!(
        n_words = words.len(),
        n_states = automaton.n_states(),
        "dictionary loaded"
    );

    let mut out = io::stdout().lock();
    if args.dot {
        let config = DotConfig {
            fail_edges: args.fail_edges,
        };
        write!(out, "{}", dot::to_dot(&automaton, &config))?;
    }
    for m in automaton.find_in_str(&text) {
        writeln!(
            out,
            "Word: {}, Start index: {}",
            automaton.pattern_str(m.pattern),
            m.start
        )?;
    }
    Ok(())
}
