use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub floor_plan: FloorPlanConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub journal: JournalConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FloorPlanConfig {
    /// Overrides FLOORPLAN_DATA_DIR and the built-in search paths.
    pub data_dir: Option<PathBuf>,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub file: Option<String>,
    #[serde(default = "default_level")]
    pub level: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JournalConfig {
    /// Directory for JSON Lines session journals; journaling is off when unset.
    pub dir: Option<PathBuf>,
}

fn default_level() -> String {
    "info".to_string()
}

impl LoggingConfig {
    /// Unknown level names fall back to `Info`.
    pub fn level_filter(&self) -> log::LevelFilter {
        self.level.parse().unwrap_or(log::LevelFilter::Info)
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            file: None,
            level: default_level(),
        }
    }
}

impl Config {
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("reading {}", path.display()))?;
        let config: Config =
            toml::from_str(&content).with_context(|| format!("parsing {}", path.display()))?;
        Ok(config)
    }

    /// `from_file` when the file exists, defaults otherwise.
    pub async fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        if tokio::fs::try_exists(path.as_ref()).await.unwrap_or(false) {
            Self::from_file(path).await
        } else {
            Ok(Self::default())
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            floor_plan: FloorPlanConfig {
                data_dir: None,
                name: "campus.json".to_string(),
            },
            logging: LoggingConfig::default(),
            journal: JournalConfig::default(),
        }
    }
}
