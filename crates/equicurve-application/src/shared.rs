use crate::config::{Config, StrategyMode};
use chrono::{TimeZone, Utc};
use equicurve_domain::repositories::predictions::PredictionFormat;
use equicurve_domain::value_objects::equity_point::EquityPoint;
use equicurve_domain::value_objects::observation::Observation;
use equicurve_domain::value_objects::timeframe::Timeframe;
use std::path::Path;

pub fn parse_timeframe_step(value: &str) -> Result<i64, String> {
    Timeframe::parse(value).map(|tf| tf.step_seconds)
}

/// Picks the prediction wire format from the file extension; anything that is
/// not `.json` is treated as CSV, matching how exports are produced upstream.
pub fn prediction_format_for_path(path: &Path) -> PredictionFormat {
    let ext = path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("")
        .to_lowercase();
    if ext == "json" {
        PredictionFormat::Json
    } else {
        PredictionFormat::Csv
    }
}

pub fn rfc3339(timestamp: i64) -> String {
    match Utc.timestamp_opt(timestamp, 0) {
        chrono::LocalResult::Single(dt) => dt.to_rfc3339(),
        _ => timestamp.to_string(),
    }
}

/// Period open/close metrics shown next to the equity curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PeriodSummary {
    pub open: f64,
    pub close: f64,
    pub change_pct: f64,
}

pub fn period_summary(observations: &[Observation]) -> Option<PeriodSummary> {
    let first = observations.first()?;
    let last = observations.last()?;
    if first.open == 0.0 {
        return None;
    }
    Some(PeriodSummary {
        open: first.open,
        close: last.close,
        change_pct: (last.close - first.open) / first.open,
    })
}

pub fn summary_meta_json(config: &Config, equity: &[EquityPoint]) -> serde_json::Value {
    let start = equity.first().map(|p| p.timestamp).unwrap_or(0);
    let end = equity.last().map(|p| p.timestamp).unwrap_or(0);
    serde_json::json!({
        "run_id": config.run.run_id,
        "symbol": config.run.symbol,
        "timeframe": config.run.timeframe,
        "start": rfc3339(start),
        "end": rfc3339(end),
    })
}

pub fn config_snapshot_json(config: &Config) -> serde_json::Value {
    serde_json::json!({
        "run": {
            "run_id": config.run.run_id,
            "symbol": config.run.symbol,
            "timeframe": config.run.timeframe,
            "initial_investment": config.run.initial_investment,
        },
        "strategy": {
            "mode": match config.strategy.mode {
                StrategyMode::Signal => "signal",
                StrategyMode::Hold => "hold",
            },
            "threshold": config.strategy.threshold,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::{period_summary, prediction_format_for_path, rfc3339};
    use equicurve_domain::repositories::predictions::PredictionFormat;
    use equicurve_domain::value_objects::observation::Observation;
    use std::path::Path;

    #[test]
    fn format_follows_extension() {
        assert!(matches!(
            prediction_format_for_path(Path::new("scores.JSON")),
            PredictionFormat::Json
        ));
        assert!(matches!(
            prediction_format_for_path(Path::new("scores.csv")),
            PredictionFormat::Csv
        ));
        assert!(matches!(
            prediction_format_for_path(Path::new("scores")),
            PredictionFormat::Csv
        ));
    }

    #[test]
    fn period_summary_spans_first_open_to_last_close() {
        let observations = vec![
            Observation { timestamp: 0, open: 100.0, close: 101.0, signal: 0.0 },
            Observation { timestamp: 1, open: 101.0, close: 110.0, signal: 0.0 },
        ];
        let summary = period_summary(&observations).expect("summary");
        assert_eq!(summary.open, 100.0);
        assert_eq!(summary.close, 110.0);
        assert!((summary.change_pct - 0.1).abs() < 1e-12);
    }

    #[test]
    fn rfc3339_formats_epoch_seconds() {
        assert_eq!(rfc3339(0), "1970-01-01T00:00:00+00:00");
    }
}
