mod cli;
mod config;
mod report;

use std::error::Error;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;
use trussgraph::Truss;

use cli::{Cli, Format};
use report::{render_json, render_text, summarise};

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Properties and options come from the config file first, then the flags.
    let (properties, options) = config::resolve(&cli)?;

    let truss = Truss::from_listings_with_options(&cli.elements, &cli.nodes, properties, options)?;
    info!(
        nodes = truss.node_count(),
        elements = truss.element_count(),
        "loaded truss"
    );

    let summary = summarise(&truss)?;
    let report = match cli.format {
        Format::Text => render_text(&summary),
        Format::Json => render_json(&summary)?,
    };
    println!("{report}");

    Ok(())
}

/// Install a stderr subscriber; `RUST_LOG` overrides the verbosity flag.
fn init_tracing(verbose: u8) {
    let fallback = log_directive(verbose);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Default filter for the given `-v` count.
fn log_directive(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    }
}
