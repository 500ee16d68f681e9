use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use plume::{Config, ReaderWidget};

/// Default config location: ~/.config/plume/config.toml
fn default_config_path() -> Result<PathBuf> {
    let home = std::env::var("HOME").context("HOME environment variable not set")?;
    Ok(PathBuf::from(home)
        .join(".config")
        .join("plume")
        .join("config.toml"))
}

#[derive(Parser, Debug)]
#[command(name = "plume", about = "Feed reader widget front end")]
struct Args {
    /// Path to the config file (defaults to ~/.config/plume/config.toml)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Load the feed at this registry index and print its entries
    #[arg(long, value_name = "INDEX")]
    load: Option<usize>,

    /// Probe a feed URL and, if valid, add it to the registry
    #[arg(long, value_name = "URL")]
    add: Option<String>,

    /// Print the feed list
    #[arg(long)]
    list: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let config_path = match &args.config {
        Some(path) => path.clone(),
        None => default_config_path()?,
    };
    let config = Config::load(&config_path)
        .with_context(|| format!("Failed to load config from {}", config_path.display()))?;

    let mut widget = ReaderWidget::from_config(&config).context("Failed to build widget")?;

    if let Some(url) = &args.add {
        match widget.add_feed(url).await {
            Ok(added) => println!("Added feed: {} ({})", added.name(), added.url()),
            Err(e) => {
                eprintln!("Feed rejected: {e}");
                std::process::exit(1);
            }
        }
    }

    if let Some(index) = args.load {
        let outcome = widget
            .load_feed(index)
            .await
            .with_context(|| format!("Failed to load feed {index}"))?;
        println!(
            "Loaded feed {} ({} entries):",
            outcome.index, outcome.entries_rendered
        );
        for entry in widget.view().entries() {
            println!("  {} — {}", entry.title, entry.link);
        }
    }

    if args.list || (args.load.is_none() && args.add.is_none()) {
        println!("Feeds:");
        for (i, item) in widget.view().feed_list().iter().enumerate() {
            println!("  [{i}] {}", item.name);
        }
    }

    Ok(())
}
