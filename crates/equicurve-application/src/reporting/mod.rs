use crate::config::Config;
use crate::shared::summary_meta_json;
use equicurve_domain::repositories::artifacts::{ArtifactReader, ArtifactWriter};
use equicurve_domain::services::simulator::{investment_result, InvestmentResult};
use std::path::{Path, PathBuf};
use tracing::info_span;

pub struct GenerateReportResult {
    pub input_dir: PathBuf,
    pub run_id: String,
    pub final_value: f64,
    pub result: InvestmentResult,
}

/// Recomputes `summary.json` for a finished run from its `equity.csv` and
/// config snapshot. Useful after hand-editing artifacts or to regenerate a
/// summary lost to a partial write.
pub fn generate_report(
    input_dir: &Path,
    reader: &dyn ArtifactReader,
    writer: &dyn ArtifactWriter,
) -> Result<GenerateReportResult, String> {
    let _span = info_span!("generate_report", input_dir = %input_dir.display()).entered();

    let equity_path = input_dir.join("equity.csv");
    let config_path = input_dir.join("config_snapshot.toml");
    if !reader.exists(&equity_path) {
        return Err(format!("missing equity.csv in {}", input_dir.display()));
    }

    let equity = reader.read_equity_csv(&equity_path)?;
    let config_toml = reader
        .read_config_snapshot_toml(&config_path)?
        .ok_or_else(|| format!("missing config_snapshot.toml in {}", input_dir.display()))?;
    let config: Config = toml::from_str(&config_toml)
        .map_err(|err| format!("failed to parse config snapshot TOML: {err}"))?;

    let result = investment_result(&equity, config.run.initial_investment)
        .map_err(|err| err.to_string())?;
    let final_value = equity.last().map(|p| p.total_value_usd).unwrap_or(0.0);

    let summary = serde_json::json!({
        "meta": summary_meta_json(&config, &equity),
        "recomputed": true,
        "points": equity.len(),
        "initial_investment": config.run.initial_investment,
        "final_value": final_value,
        "investment_result": {
            "absolute": result.absolute,
            "relative": result.relative,
        },
    });
    writer.write_summary_json(input_dir.join("summary.json").as_path(), &summary)?;

    Ok(GenerateReportResult {
        input_dir: input_dir.to_path_buf(),
        run_id: config.run.run_id,
        final_value,
        result,
    })
}
