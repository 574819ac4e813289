//! CLI module - Command-line interface definitions and handlers

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::core::render::{OutputFormat, RenderConfig};
use crate::puzzle::solve::MIN_WORD_LEN;
use crate::words::list::{resolve_list, WordList};

/// wordkit - anagram finder and word search solver.
#[derive(Parser, Debug)]
#[command(name = "wordkit")]
#[command(
    author,
    version,
    about,
    long_about = r#"wordkit solves word puzzles against a word list and emits a unified,
machine-readable result model for every command.

Output formats:
- jsonl: one JSON object per line (default)
- json: a single JSON array
- md: human-friendly Markdown
- raw: one line per result (words, check verdicts, list names)

Examples:
    wordkit anagram listen --words-file words.txt
    wordkit anagram ab --words a,ab,ba,abc
    wordkit check listen silent
    wordkit wordsearch grid.txt --words-file words.txt --min-len 4
    wordkit lists
"#
)]
pub struct Cli {
    /// Output format (jsonl/json/md/raw).
    #[arg(
        long,
        global = true,
        default_value = "jsonl",
        env = "WORDKIT_FORMAT",
        value_name = "FORMAT",
        long_help = "Select the output format for results.\n\n\
Supported values:\n\
- jsonl (default)\n\
- json\n\
- md (markdown)\n\
- raw (one line per result: words, check verdicts, list names)\n\n\
Can also be set with the WORDKIT_FORMAT environment variable."
    )]
    pub format: String,

    /// Pretty-print JSON/JSONL output with indentation.
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Disable colored output.
    #[arg(
        long,
        global = true,
        long_help = "Disable colored output on stderr. Useful when capturing diagnostics\n\
or when the terminal does not support ANSI colors."
    )]
    pub no_color: bool,

    /// Quiet mode (errors only on stderr).
    #[arg(
        short,
        long,
        global = true,
        long_help = "Only log errors to stderr and suppress progress output. Results are\n\
still printed to stdout."
    )]
    pub quiet: bool,

    /// Verbose mode (debug diagnostics on stderr).
    #[arg(
        short,
        long,
        global = true,
        long_help = "Log debug diagnostics to stderr. RUST_LOG overrides both --quiet\n\
and --verbose."
    )]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Where candidate words come from.
#[derive(Args, Debug, Default)]
pub struct WordSourceArgs {
    /// Inline candidate words (comma-separated).
    #[arg(
        long,
        value_name = "WORDS",
        value_delimiter = ',',
        long_help = "Comma-separated candidate words. Takes precedence over --words-file\n\
and --list.\n\n\
Example: --words enlist,google,inlets"
    )]
    pub words: Vec<String>,

    /// Word list file, one word per line.
    #[arg(
        long,
        value_name = "PATH",
        env = "WORDKIT_WORDS_FILE",
        long_help = "Read candidate words from a text file, one word per line. Blank\n\
lines are skipped and surrounding whitespace is trimmed.\n\n\
Can also be set with the WORDKIT_WORDS_FILE environment variable."
    )]
    pub words_file: Option<PathBuf>,

    /// Built-in word list name (see `wordkit lists`).
    #[arg(
        long,
        value_name = "NAME",
        long_help = "Use a built-in word list by name (case-insensitive).\n\n\
Built-in lists that are only available remotely are never downloaded and\n\
yield no words."
    )]
    pub list: Option<String>,
}

impl WordSourceArgs {
    pub fn resolve(&self) -> Result<WordList> {
        Ok(resolve_list(
            &self.words,
            self.words_file.as_deref(),
            self.list.as_deref(),
        )?)
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Find anagrams of a pattern in a word list.
    #[command(long_about = r#"Scan a word list and emit every word that uses exactly
the letters of PATTERN, in list order. Matching is case-sensitive and
wildcards are not supported.

Examples:
    wordkit anagram listen --words-file words.txt
    wordkit anagram ab --words a,ab,ba,abc --format raw
"#)]
    Anagram {
        /// Letters to rearrange.
        #[arg(value_name = "PATTERN")]
        pattern: String,

        #[command(flatten)]
        source: WordSourceArgs,

        /// Print scan progress to stderr.
        #[arg(
            long,
            long_help = "Print the percentage of the list scanned to stderr, roughly every\n\
1% of the list. Suppressed by --quiet."
        )]
        progress: bool,
    },

    /// Check whether two words are anagrams of each other.
    #[command(long_about = "Emit a single check result with data.anagram set to true or false.\n\n\
Example:\n\
  wordkit check listen silent\n")]
    Check {
        #[arg(value_name = "PATTERN")]
        pattern: String,

        #[arg(value_name = "WORD")]
        word: String,
    },

    /// Find word-list words hidden in a letter grid.
    #[command(long_about = r#"Read a rectangular letter grid (one row per line,
whitespace inside rows ignored, case-insensitive) and emit every placement of
a word from the word list, reading in any of the eight directions.

Examples:
    wordkit wordsearch grid.txt --words-file words.txt
    wordkit wordsearch grid.txt --words cat,dog --min-len 3
"#)]
    Wordsearch {
        /// Grid file.
        #[arg(value_name = "GRID")]
        grid: PathBuf,

        #[command(flatten)]
        source: WordSourceArgs,

        /// Shortest word to report.
        #[arg(
            long,
            default_value_t = 3,
            value_name = "N",
            value_parser = clap::value_parser!(u16).range(MIN_WORD_LEN as i64..)
        )]
        min_len: u16,
    },

    /// List the built-in word lists.
    Lists,
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    let format: OutputFormat = cli.format.parse().unwrap_or_else(|e| {
        log::warn!("{}; falling back to jsonl", e);
        OutputFormat::default()
    });
    let render_config = RenderConfig::with_pretty(format, cli.pretty);

    if cli.no_color {
        colored::control::set_override(false);
    }

    match cli.command {
        Commands::Anagram {
            pattern,
            source,
            progress,
        } => {
            let list = source.resolve()?;
            let show_progress = progress && !cli.quiet;
            crate::anagram::api::run_anagram(&pattern, &list, show_progress, render_config)
        }

        Commands::Check { pattern, word } => {
            crate::anagram::api::run_check(&pattern, &word, render_config)
        }

        Commands::Wordsearch {
            grid,
            source,
            min_len,
        } => {
            let list = source.resolve()?;
            crate::puzzle::api::run_wordsearch(&grid, &list, min_len as usize, render_config)
        }

        Commands::Lists => crate::words::api::run_lists(render_config),
    }
}
