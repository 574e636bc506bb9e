use crate::args::Cli;
use crate::config::{self, Config};
use crate::handlers;
use crate::when;
use anyhow::{Context, Result};
use lastseen_store::Database;
use lastseen_types::SelectionCriteria;

pub fn run(cli: Cli) -> Result<()> {
    // Usage errors surface before any store access: cutoff parsing first,
    // then criteria construction (conflicts, limit).
    let cutoff = cli.before.as_deref().map(when::parse_cutoff).transpose()?;
    let criteria = SelectionCriteria::from_selectors(cli.uid, cli.least_recent, cutoff, cli.limit)?;

    let data_dir = config::resolve_data_dir(cli.data_dir.as_deref())?;
    std::fs::create_dir_all(&data_dir)
        .with_context(|| format!("Failed to create data directory: {}", data_dir.display()))?;

    let config = Config::load_from(&data_dir.join("config.toml"))?;
    let db = Database::open(&config.db_path(&data_dir))?;

    handlers::report::handle(&db, &criteria, cli.output)
}
