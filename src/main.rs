use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use std::sync::Arc;

use moodgit::cli::{Cli, Command};
use moodgit::config::Config;
use moodgit::constants::{CONFIG_GENERATED, HELP_HINT, TAGLINE};
use moodgit::entry::NewEntry;
use moodgit::storage::JournalStore;
use moodgit::{display, logger, ui};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load(cli.config.as_deref())?;
    logger::init(&config.logging, &Config::log_file_path()?)?;

    let Some(command) = cli.command else {
        display::print_banner();
        println!("{TAGLINE}");
        println!("{HELP_HINT}");
        return Ok(());
    };

    match command {
        Command::Init { force } => {
            let path = config.database_path()?;
            display::print_banner();
            JournalStore::init(&path, force)
                .await
                .with_context(|| format!("Failed to initialize journal at {}", path.display()))?;
            info!("Initialized journal at {}", path.display());
            println!("initialized empty moodgit repository in {}", path.display());
        }
        Command::Add {
            intensity,
            mood,
            message,
            tags,
            amend,
        } => {
            let store = JournalStore::open(&config.database_path()?).await?;
            let new_entry = NewEntry {
                intensity,
                mood,
                message,
                tags,
            };

            let entry = if amend {
                store.amend_last_entry(&new_entry).await?
            } else {
                store.add_entry(&new_entry).await?
            };

            let verb = if amend { "amended" } else { "added" };
            println!("{verb}: {}", display::styled_entry_line(&entry));
        }
        Command::Log { limit, interactive } => {
            let store = JournalStore::open(&config.database_path()?).await?;
            let count = limit.unwrap_or(config.ui.page_size);

            if interactive {
                ui::run_app(Arc::new(store), count as usize).await?;
            } else {
                let entries = store.history(count as u64).await?;
                display::print_history(&entries);
            }
        }
        Command::Config { output } => {
            let path = match output {
                Some(path) => path,
                None => Config::get_default_config_path()?,
            };
            Config::generate_default_config(&path)?;
            println!("{CONFIG_GENERATED}: {}", path.display());
        }
    }

    Ok(())
}
