use equicurve_application::config::{Config, StrategyMode};
use equicurve_application::meta::engine_name;
use std::path::PathBuf;

pub(super) fn print_config_summary(command: &str, config: &Config, out: Option<&PathBuf>) {
    println!(
        "{} cli: {} (run_id={}, symbol={}, timeframe={}, initial_investment={})",
        engine_name(),
        command,
        config.run.run_id,
        config.run.symbol,
        config.run.timeframe,
        config.run.initial_investment
    );
    println!(
        "data: candles={}, predictions={}, out_dir={}",
        config.paths.candles_csv, config.paths.predictions_path, config.paths.out_dir
    );
    println!(
        "strategy: mode={}, threshold={}",
        match config.strategy.mode {
            StrategyMode::Signal => "signal",
            StrategyMode::Hold => "hold",
        },
        config.strategy.threshold
    );
    if let Some(out_dir) = out {
        println!("output dir: {}", out_dir.display());
    }
}
