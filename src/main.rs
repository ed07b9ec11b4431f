//! Dium token dumper.
//!
//! Tokenizes one source file and prints the resulting tokens. On a lexical
//! error a single diagnostic is written to stderr and the process exits
//! with status 1.

use std::{
    io::{self, Write},
    path::PathBuf,
    process::ExitCode,
    time::Instant,
};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use dium::{
    errors::{errors::Error, reporter::Reporter},
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
};

/// Tokenize a Dium source file and print its tokens
#[derive(Parser, Debug)]
#[command(name = "dium")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Tokenize a Dium source file", long_about = None)]
struct Cli {
    /// Source file to tokenize
    file: PathBuf,

    /// Name used for the source in diagnostics (default: the file name)
    #[arg(short, long, env = "DIUM_NAME")]
    name: Option<String>,

    /// Print one token per line with its position and kind
    #[arg(short, long)]
    kinds: bool,

    /// Enable verbose output
    #[arg(short, long, env = "DIUM_VERBOSE")]
    verbose: bool,

    /// Disable color output
    #[arg(long, env = "DIUM_NO_COLOR")]
    no_color: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("dium: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr).with_target(false))
        .with(filter)
        .init();
}

fn run(cli: &Cli) -> Result<ExitCode> {
    let reporter = Reporter::new(!cli.no_color && std::env::var_os("NO_COLOR").is_none());
    let start = Instant::now();

    let mut lexer = match Lexer::open(&cli.file, cli.name.clone()) {
        Ok(lexer) => lexer,
        Err(error) => return report(&reporter, &error, None),
    };
    info!(file = %cli.file.display(), "tokenizing");

    let mut tokens: Vec<Token> = vec![];
    loop {
        match lexer.next_token() {
            Ok(token) => {
                let done = token.kind == TokenKind::EOF;
                tokens.push(token);
                if done {
                    break;
                }
            }
            Err(error) => {
                let content = String::from_utf8_lossy(lexer.source_bytes()).into_owned();
                return report(&reporter, &error, Some(&content));
            }
        }
    }

    info!(count = tokens.len(), elapsed = ?start.elapsed(), "tokenized");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if cli.kinds {
        for token in &tokens {
            writeln!(out, "{} {}", token.position, token.kind)?;
        }
    } else {
        let line: Vec<String> = tokens
            .iter()
            .filter(|token| token.kind != TokenKind::EOF)
            .map(Token::to_string)
            .collect();
        writeln!(out, "{}", line.join(" "))?;
    }
    out.flush().context("failed to write tokens")?;

    Ok(ExitCode::SUCCESS)
}

fn report(reporter: &Reporter, error: &Error, content: Option<&str>) -> Result<ExitCode> {
    debug!(error = error.get_error_name(), "lexing failed");

    let stderr = io::stderr();
    let mut err = stderr.lock();
    reporter
        .report_error(&mut err, error, content)
        .context("failed to write diagnostic")?;

    Ok(ExitCode::FAILURE)
}
