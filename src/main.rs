use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::path::{Path, PathBuf};

use jai_syntax::driver::SourceUnit;
use jai_syntax::error::Severity;

#[derive(Parser)]
#[command(name = "jai-syntax")]
#[command(author, version, about = "A recovering syntax parser for Jai", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum TreeFormat {
    /// Rust debug representation (default)
    #[value(name = "debug")]
    Debug,
    /// Pretty-printed JSON
    #[value(name = "json")]
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a source file and print its syntax tree
    Parse {
        /// The source file to parse
        input: PathBuf,

        /// Dump tokens to stdout before the tree
        #[arg(long)]
        dump_tokens: bool,

        /// How to print the tree
        #[arg(long = "format", value_enum, default_value = "debug")]
        format: TreeFormat,
    },

    /// Check a source file for syntax errors
    Check {
        /// The source file to check
        input: PathBuf,
    },

    /// Print the token stream of a source file
    Tokens {
        /// The source file to lex
        input: PathBuf,

        /// Include whitespace and comments
        #[arg(long)]
        trivia: bool,
    },
}

fn main() -> Result<()> {
    // Initialize logger before parsing CLI args
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    if cli.verbose {
        log::set_max_level(log::LevelFilter::Debug);
    }

    let result = match cli.command {
        Commands::Parse {
            input,
            dump_tokens,
            format,
        } => parse(input, dump_tokens, format, cli.verbose),
        Commands::Check { input } => check(input),
        Commands::Tokens { input, trivia } => tokens(input, trivia),
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}

fn load(input: &Path) -> Result<SourceUnit> {
    SourceUnit::from_path(input).with_context(|| format!("Failed to load {:?}", input))
}

fn parse(input: PathBuf, dump_tokens: bool, format: TreeFormat, verbose: bool) -> Result<()> {
    let unit = load(&input)?;

    if dump_tokens {
        println!("{}", "=== Tokens ===".blue().bold());
        for token in unit.tokens().iter().filter(|t| !t.token.is_trivia()) {
            println!("{:?} at {}:{}", token.token, token.position.line, token.position.column);
        }
        println!();
    }

    if verbose {
        println!("{}: Parsing {:?}", "step".cyan().bold(), input);
    }
    let output = unit.parse();

    println!("{}", "=== Syntax Tree ===".blue().bold());
    match format {
        TreeFormat::Debug => println!("{:#?}", output.tree),
        TreeFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(&output.tree).context("Failed to serialize tree")?
        ),
    }

    unit.report_diagnostics(&output.diagnostics)?;
    if output.has_errors() {
        println!(
            "{}: {} diagnostic(s)",
            "warning".yellow().bold(),
            output.diagnostics.len()
        );
    }

    Ok(())
}

fn check(input: PathBuf) -> Result<()> {
    let unit = load(&input)?;
    let output = unit.parse();

    if !output.has_errors() {
        println!("{}: No syntax errors found in {:?}", "success".green().bold(), input);
        return Ok(());
    }

    unit.report_diagnostics(&output.diagnostics)?;
    let fatal = output
        .diagnostics
        .iter()
        .filter(|d| d.severity == Severity::Error)
        .count();
    anyhow::bail!(
        "{} syntax error(s) found ({} unrecoverable)",
        output.diagnostics.len(),
        fatal
    )
}

fn tokens(input: PathBuf, trivia: bool) -> Result<()> {
    let unit = load(&input)?;

    for token in unit.tokens() {
        if !trivia && token.token.is_trivia() {
            continue;
        }
        println!(
            "{:>4}:{:<3} {:?} {:?}",
            token.position.line,
            token.position.column,
            token.token,
            token.text(&unit.source)
        );
    }

    Ok(())
}
