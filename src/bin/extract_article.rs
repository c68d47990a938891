//! Extract readable article text from an HTML page.
//!
//! Usage:
//!   extract_article page.html          Print extracted text
//!   extract_article --json < page.html Print JSON with region details
//!   extract_article --raw page.html    Print the decoded HTML untouched

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use article_extract::{encoding, extract_detailed, PromptInput};
use clap::Parser;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "extract_article")]
#[command(version, about = "Extract readable article text from HTML")]
struct Cli {
    /// HTML file to read (stdin when omitted)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Skip extraction and print the decoded HTML
    #[arg(long, conflicts_with = "json")]
    raw: bool,

    /// Print a JSON object with the text and the region that produced it
    #[arg(long)]
    json: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Serialize)]
struct Output {
    text: String,
    region: Option<String>,
    line_count: usize,
    chars: usize,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let bytes = match &cli.input {
        Some(path) => fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut buffer = Vec::new();
            io::stdin()
                .read_to_end(&mut buffer)
                .context("Failed to read from stdin")?;
            buffer
        }
    };
    let html = encoding::transcode_to_utf8(&bytes);

    if cli.json {
        let result = extract_detailed(&html);
        let output = Output {
            chars: result.text.chars().count(),
            region: result.region.map(|kind| kind.to_string()),
            line_count: result.line_count,
            text: result.text,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        let input = PromptInput::from_html(&html, !cli.raw);
        println!("{}", input.into_text());
    }

    Ok(())
}
