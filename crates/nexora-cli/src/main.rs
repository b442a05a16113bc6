//! `nexora`: command-line front end for the Nexora health-tracking demo.
//!
//! # Usage
//!
//! ```
//! nexora login
//! nexora log --metric steps --value 4200 --unit count
//! nexora --store ~/nexora.db leaderboard
//! ```

mod commands;
mod render;

use std::{
  io,
  path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;
use commands::Command;
use nexora_core::Nexora;
use nexora_store_sqlite::SqliteStore;
use serde::Deserialize;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "nexora", version, about = "Nexora health-tracking demo")]
struct Args {
  /// Path to a TOML config file (default: ./nexora.toml if present).
  #[arg(short, long, value_name = "FILE")]
  config: Option<PathBuf>,

  /// SQLite file holding the local slots; overrides the config file.
  #[arg(long, env = "NEXORA_STORE", value_name = "PATH")]
  store: Option<PathBuf>,

  #[command(subcommand)]
  command: Command,
}

// ─── Config file ──────────────────────────────────────────────────────────────

/// Settings layered from defaults, the config file and `NEXORA_*` variables.
#[derive(Deserialize, Debug)]
struct Settings {
  store_path: PathBuf,
}

fn load_settings(config_path: Option<&Path>) -> Result<Settings> {
  let file = match config_path {
    Some(path) => config::File::from(path).required(true),
    None => config::File::with_name("nexora").required(false),
  };

  config::Config::builder()
    .set_default("store_path", "nexora.db")?
    .add_source(file)
    .add_source(config::Environment::with_prefix("NEXORA"))
    .build()
    .context("failed to read config")?
    .try_deserialize()
    .context("failed to deserialise settings")
}

// ─── Entry point ──────────────────────────────────────────────────────────────

fn main() -> Result<()> {
  tracing_subscriber::fmt()
    .with_writer(io::stderr)
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy(),
    )
    .init();

  let args = Args::parse();

  let settings = load_settings(args.config.as_deref())?;
  let store_path = expand_tilde(args.store.as_deref().unwrap_or(&settings.store_path));

  let store = SqliteStore::open(&store_path)
    .with_context(|| format!("failed to open store at {store_path:?}"))?;
  let mut app = Nexora::new(store);

  let mut stdout = io::stdout().lock();
  let result = commands::run(&mut app, args.command, &mut stdout);

  // Flashes are shown even when the command itself failed part-way.
  let mut stderr = io::stderr().lock();
  for flash in app.take_flashes() {
    render::flash(&mut stderr, &flash)?;
  }

  result
}

/// Expand a leading `~` to the user's home directory.
fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}
