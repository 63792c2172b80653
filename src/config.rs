use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat};
use manhattan_grid::{GridPoint, LastColumn};
use serde::Deserialize;
use tracing::{error, info};

const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Top-level application settings.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub table: TableConfig,
}

/// Which tables to print and how.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    pub last_column: LastColumn,
    /// Printed in order, one table each.
    pub targets: Vec<GridPoint>,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            last_column: LastColumn::Stale,
            targets: vec![GridPoint::new(15, 15), GridPoint::new(0, 0)],
        }
    }
}

/// Loads `config/default.toml` if it exists, falling back to the built-in
/// defaults for anything it leaves out.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    info!("Attempting to load configuration from {}", DEFAULT_CONFIG_PATH);

    let builder = Config::builder()
        .add_source(File::new(DEFAULT_CONFIG_PATH, FileFormat::Toml).required(false));

    match build(builder) {
        Ok(config) => {
            info!("Successfully loaded configuration: {:?}", config);
            Ok(config)
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            Err(e)
        }
    }
}

fn build(builder: ConfigBuilder<DefaultState>) -> Result<AppConfig, ConfigError> {
    builder.build()?.try_deserialize()
}
