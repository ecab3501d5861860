use crate::config::{Config, StrategyMode};
use crate::shared::{
    config_snapshot_json, parse_timeframe_step, period_summary, prediction_format_for_path,
    summary_meta_json,
};
use equicurve_domain::repositories::artifacts::ArtifactWriter;
use equicurve_domain::repositories::market_data::{CandleQuery, MarketDataRepository};
use equicurve_domain::repositories::predictions::{PredictionQuery, PredictionRepository};
use equicurve_domain::services::alignment::align_with_candles;
use equicurve_domain::services::audit::AuditEvent;
use equicurve_domain::services::candles::DataQualityReport;
use equicurve_domain::services::markers::markers_from_observations;
use equicurve_domain::services::simulator::{investment_result, simulate};
use equicurve_domain::services::threshold::signal_from_score;
use equicurve_domain::value_objects::equity_point::EquityPoint;
use equicurve_domain::value_objects::observation::Observation;
use std::path::PathBuf;
use std::time::Instant;
use tracing::info_span;

/// Runs the full simulation pipeline: load candles and prediction scores,
/// join them into observations, fold the signal series into an equity curve,
/// and write the run artifacts into `<out_dir>/<run_id>/`.
///
/// Returns the run directory.
pub fn run_simulation(
    config: &Config,
    config_toml: &str,
    out: Option<PathBuf>,
    market_data: &dyn MarketDataRepository,
    predictions: &dyn PredictionRepository,
    artifacts: &dyn ArtifactWriter,
) -> Result<PathBuf, String> {
    let _span = info_span!(
        "run_simulation",
        run_id = %config.run.run_id,
        symbol = %config.run.symbol,
        timeframe = %config.run.timeframe
    )
    .entered();

    if !config.run.initial_investment.is_finite() || config.run.initial_investment <= 0.0 {
        return Err(format!(
            "run.initial_investment must be finite and > 0, got {}",
            config.run.initial_investment
        ));
    }

    let expected_step = parse_timeframe_step(&config.run.timeframe)?;
    let mut audit_events: Vec<AuditEvent> = Vec::new();

    let stage_start = Instant::now();
    let (candles, data_report) = market_data.load_candles(&CandleQuery {
        path: PathBuf::from(&config.paths.candles_csv),
        symbol: config.run.symbol.clone(),
        expected_step_seconds: Some(expected_step),
    })?;
    metrics::histogram!("equicurve.simulate.load_candles_ms")
        .record(stage_start.elapsed().as_millis() as f64);
    audit_events.push(timing_event(
        config,
        "load_candles",
        stage_start.elapsed().as_millis() as u64,
        serde_json::json!({
            "rows": candles.len(),
            "duplicates": data_report.duplicates,
            "gaps": data_report.gaps,
            "out_of_order": data_report.out_of_order,
            "invalid_close": data_report.invalid_close,
        }),
    ));

    let predictions_path = PathBuf::from(&config.paths.predictions_path);
    let stage_start = Instant::now();
    let points = predictions.load_predictions(&PredictionQuery {
        format: prediction_format_for_path(&predictions_path),
        path: predictions_path,
    })?;
    metrics::histogram!("equicurve.simulate.load_predictions_ms")
        .record(stage_start.elapsed().as_millis() as f64);
    audit_events.push(timing_event(
        config,
        "load_predictions",
        stage_start.elapsed().as_millis() as u64,
        serde_json::json!({ "rows": points.len() }),
    ));

    let stage_start = Instant::now();
    let candle_timestamps: Vec<i64> = candles.iter().map(|c| c.timestamp).collect();
    let scores = align_with_candles(&candle_timestamps, &points);

    // Candles with no prediction for their timestamp are dropped, the same
    // way the original pipeline dropped unmatched rows after the merge.
    let mut observations = Vec::with_capacity(candles.len());
    let mut dropped = 0_usize;
    for (candle, score) in candles.iter().zip(&scores) {
        match score {
            Some(score) => {
                let signal = match config.strategy.mode {
                    StrategyMode::Signal => signal_from_score(*score, config.strategy.threshold),
                    StrategyMode::Hold => 1.0,
                };
                observations.push(Observation {
                    timestamp: candle.timestamp,
                    open: candle.open,
                    close: candle.close,
                    signal,
                });
            }
            None => dropped += 1,
        }
    }
    metrics::histogram!("equicurve.simulate.align_ms")
        .record(stage_start.elapsed().as_millis() as f64);
    audit_events.push(timing_event(
        config,
        "align_predictions",
        stage_start.elapsed().as_millis() as u64,
        serde_json::json!({ "matched": observations.len(), "dropped": dropped }),
    ));
    if dropped > 0 {
        tracing::warn!(dropped, "candles without prediction scores were dropped");
    }

    let stage_start = Instant::now();
    let equity = simulate(&observations, config.run.initial_investment)
        .map_err(|err| err.to_string())?;
    let markers = markers_from_observations(&observations);
    let result = investment_result(&equity, config.run.initial_investment)
        .map_err(|err| err.to_string())?;
    metrics::histogram!("equicurve.simulate.fold_ms")
        .record(stage_start.elapsed().as_millis() as f64);
    metrics::gauge!("equicurve.simulate.observations").set(observations.len() as f64);
    metrics::gauge!("equicurve.simulate.final_value")
        .set(equity.last().map(|p| p.total_value_usd).unwrap_or(0.0));
    audit_events.push(timing_event(
        config,
        "simulate",
        stage_start.elapsed().as_millis() as u64,
        serde_json::json!({
            "observations": observations.len(),
            "markers": markers.len(),
            "final_value": equity.last().map(|p| p.total_value_usd),
            "result_abs": result.absolute,
            "result_rel": result.relative,
        }),
    ));

    let summary = build_summary(
        config,
        &equity,
        &data_report,
        &observations,
        dropped,
        markers.len(),
        result.absolute,
        result.relative,
    );

    let run_dir = out
        .unwrap_or_else(|| PathBuf::from(&config.paths.out_dir))
        .join(&config.run.run_id);
    artifacts.ensure_dir(&run_dir)?;
    artifacts.write_equity_csv(run_dir.join("equity.csv").as_path(), &equity)?;
    artifacts.write_markers_csv(run_dir.join("markers.csv").as_path(), &markers)?;
    artifacts.write_summary_json(run_dir.join("summary.json").as_path(), &summary)?;
    artifacts.write_config_snapshot_toml(run_dir.join("config_snapshot.toml").as_path(), config_toml)?;
    artifacts.write_audit_jsonl(run_dir.join("logs.jsonl").as_path(), &audit_events)?;

    tracing::info!(
        run_dir = %run_dir.display(),
        observations = observations.len(),
        result_abs = result.absolute,
        "simulation complete"
    );
    Ok(run_dir)
}

#[allow(clippy::too_many_arguments)]
fn build_summary(
    config: &Config,
    equity: &[EquityPoint],
    data_report: &DataQualityReport,
    observations: &[Observation],
    dropped: usize,
    marker_count: usize,
    result_abs: f64,
    result_rel: f64,
) -> serde_json::Value {
    let period = period_summary(observations);
    serde_json::json!({
        "meta": summary_meta_json(config, equity),
        "config_snapshot": config_snapshot_json(config),
        "data_quality": {
            "rows": data_report.rows,
            "duplicates": data_report.duplicates,
            "gaps": data_report.gaps,
            "out_of_order": data_report.out_of_order,
            "invalid_close": data_report.invalid_close,
            "max_gap_seconds": data_report.max_gap_seconds,
        },
        "observations": {
            "matched": observations.len(),
            "dropped": dropped,
        },
        "period": period.map(|p| serde_json::json!({
            "open": p.open,
            "close": p.close,
            "change_pct": p.change_pct,
        })),
        "markers": marker_count,
        "initial_investment": config.run.initial_investment,
        "final_value": equity.last().map(|p| p.total_value_usd),
        "investment_result": {
            "absolute": result_abs,
            "relative": result_rel,
        },
    })
}

fn timing_event(
    config: &Config,
    action: &str,
    elapsed_ms: u64,
    details: serde_json::Value,
) -> AuditEvent {
    AuditEvent {
        run_id: config.run.run_id.clone(),
        timestamp: 0,
        stage: "timing".to_string(),
        symbol: Some(config.run.symbol.clone()),
        action: action.to_string(),
        error: None,
        details: serde_json::json!({
            "elapsed_ms": elapsed_ms,
            "details": details,
        }),
    }
}
