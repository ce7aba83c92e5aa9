mod output;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use playscout_lib::{search, serialize, Client, SearchQuery, SelectorConfig};

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "playscout")]
#[command(about = "Search Google Play and extract matching app records")]
struct Cli {
    /// App name or keyword to search for
    term: String,

    /// Output format: table or json
    #[arg(long, default_value = "table")]
    output: String,

    /// Write the keyed JSON document to this file
    #[arg(long)]
    out: Option<PathBuf>,

    /// Store host to query. Mainly useful for testing.
    #[arg(long, default_value = "https://play.google.com")]
    host: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("playscout=info".parse().unwrap()),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let format = match cli.output.as_str() {
        "json" => OutputFormat::Json,
        _ => OutputFormat::Table,
    };

    let query = SearchQuery::new(&cli.term)?;
    let client = Client::with_base_url(&cli.host)?;
    let cfg = SelectorConfig::default();

    eprintln!("Scanning Google Play for {:?} ...", query.term());
    let outcome = search(&client, &query, &cfg).await?;

    match format {
        OutputFormat::Table => output::print_table(&outcome.records),
        OutputFormat::Json => {
            let bytes = serialize::to_keyed_json(&outcome.records)?;
            println!("{}", String::from_utf8_lossy(&bytes));
        }
    }

    eprintln!("Found {} matching apps", outcome.records.len());
    if outcome.dropped > 0 {
        eprintln!("Dropped {} unreachable detail pages", outcome.dropped);
    }

    if let Some(path) = &cli.out {
        let bytes = serialize::to_keyed_json(&outcome.records)?;
        std::fs::write(path, bytes)
            .with_context(|| format!("failed to write {}", path.display()))?;
        eprintln!("Saved results to {}", path.display());
    }

    Ok(())
}
