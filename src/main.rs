mod parser;

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

#[derive(Parser)]
#[command(name = "awesome_index", about = "Parse an awesome-list README into structured JSON")]
struct Cli {
    /// Markdown file to parse
    #[arg(short, long, default_value = "README.md")]
    input: PathBuf,
    /// Destination for the structured JSON
    #[arg(short, long, default_value = "readme_data.json")]
    output: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();

    let content = fs::read_to_string(&cli.input)
        .with_context(|| format!("reading {}", cli.input.display()))?;

    info!("Parsing {}", cli.input.display());
    let sections = parser::parse_readme(&content);

    let json = serde_json::to_string_pretty(&sections)?;
    fs::write(&cli.output, json)
        .with_context(|| format!("writing {}", cli.output.display()))?;

    println!(
        "Successfully parsed {} and created {}",
        cli.input.display(),
        cli.output.display()
    );
    println!("Found {} main sections.", sections.len());

    Ok(())
}
