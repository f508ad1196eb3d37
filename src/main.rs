//! keybinds - inspect a key-binding configuration file.
//!
//! Loads the given configuration file, resolves its key bindings, and
//! prints the result. Useful for checking a config before handing it to
//! the application that consumes it.

use anyhow::Context;
use clap::Parser;
use keybinds_rs::KeyBindings;
use std::path::PathBuf;

#[derive(Parser)]
#[command(version, about = "Resolve and list the key bindings in a configuration file")]
struct Cli {
    /// Path to the configuration file
    #[arg(default_value = "config.txt")]
    config: PathBuf,

    /// Print the bindings as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let bindings = KeyBindings::load(&cli.config)
        .with_context(|| format!("loading key bindings from {}", cli.config.display()))?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&bindings)?);
        return Ok(());
    }

    println!("Keys used:");
    let mut actions: Vec<_> = bindings.iter().collect();
    actions.sort_by(|a, b| a.0.cmp(b.0));
    for (action, key) in actions {
        println!("{:>24}: {} ({})", action, key, key.code());
    }

    Ok(())
}
