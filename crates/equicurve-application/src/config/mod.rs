use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Production decision threshold the deployed model was calibrated against.
pub const DEFAULT_THRESHOLD: f64 = 0.517039;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub run: RunConfig,
    pub paths: PathsConfig,
    #[serde(default)]
    pub strategy: StrategyConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RunConfig {
    pub run_id: String,
    pub symbol: String,
    pub timeframe: String,
    pub initial_investment: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PathsConfig {
    pub candles_csv: String,
    pub predictions_path: String,
    pub out_dir: String,
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StrategyMode {
    /// Threshold the prediction scores into buy/sell signals.
    Signal,
    /// Force every signal to 1: the buy-and-hold comparison baseline.
    Hold,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct StrategyConfig {
    #[serde(default = "default_mode")]
    pub mode: StrategyMode,
    #[serde(default = "default_threshold")]
    pub threshold: f64,
}

impl Default for StrategyConfig {
    fn default() -> Self {
        Self {
            mode: StrategyMode::Signal,
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

fn default_mode() -> StrategyMode {
    StrategyMode::Signal
}

fn default_threshold() -> f64 {
    DEFAULT_THRESHOLD
}

pub fn load_config(path: &Path) -> Result<Config, String> {
    load_config_with_source(path).map(|(config, _)| config)
}

pub fn load_config_with_source(path: &Path) -> Result<(Config, String), String> {
    let contents = fs::read_to_string(path)
        .map_err(|err| format!("failed to read config {}: {}", path.display(), err))?;
    let config: Config = toml::from_str(&contents)
        .map_err(|err| format!("failed to parse TOML {}: {}", path.display(), err))?;
    Ok((config, contents))
}
