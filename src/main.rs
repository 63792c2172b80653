mod config;

use anyhow::Context;
use manhattan_grid::print_table_with;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries only the tables.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let config = config::load_config().context("failed to load configuration")?;
    let table = &config.table;
    info!(tables = table.targets.len(), last_column = %table.last_column, "Printing proximity tables");

    for target in &table.targets {
        print_table_with(*target, table.last_column)
            .with_context(|| format!("failed to print table for target {}", target))?;
    }

    Ok(())
}
