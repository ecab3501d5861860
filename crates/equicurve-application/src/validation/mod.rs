use crate::config::Config;
use crate::shared::{parse_timeframe_step, prediction_format_for_path};
use equicurve_domain::repositories::market_data::{CandleQuery, MarketDataRepository};
use equicurve_domain::repositories::predictions::{PredictionQuery, PredictionRepository};
use equicurve_domain::services::candles::DataQualityReport;
use std::path::PathBuf;
use tracing::info_span;

#[derive(Debug)]
pub struct ValidationOutcome {
    pub candle_report: DataQualityReport,
    pub prediction_rows: usize,
}

/// Loads both inputs and reports data quality without simulating. With
/// `strict`, any anomaly in the candle series fails the run.
pub fn validate_inputs(
    config: &Config,
    strict: bool,
    market_data: &dyn MarketDataRepository,
    predictions: &dyn PredictionRepository,
) -> Result<ValidationOutcome, String> {
    let _span = info_span!("validate_inputs", run_id = %config.run.run_id).entered();

    let expected_step = parse_timeframe_step(&config.run.timeframe)?;
    let (_, candle_report) = market_data.load_candles(&CandleQuery {
        path: PathBuf::from(&config.paths.candles_csv),
        symbol: config.run.symbol.clone(),
        expected_step_seconds: Some(expected_step),
    })?;

    let predictions_path = PathBuf::from(&config.paths.predictions_path);
    let points = predictions.load_predictions(&PredictionQuery {
        format: prediction_format_for_path(&predictions_path),
        path: predictions_path,
    })?;

    if strict {
        if candle_report.duplicates > 0 {
            return Err(format!(
                "strict validation failed: {} duplicate candle timestamps (first at {:?})",
                candle_report.duplicates, candle_report.first_duplicate
            ));
        }
        if candle_report.out_of_order > 0 {
            return Err(format!(
                "strict validation failed: {} out-of-order candles (first at {:?})",
                candle_report.out_of_order, candle_report.first_out_of_order
            ));
        }
        if candle_report.invalid_close > 0 {
            return Err(format!(
                "strict validation failed: {} non-positive closes (first at {:?})",
                candle_report.invalid_close, candle_report.first_invalid_close
            ));
        }
    }

    Ok(ValidationOutcome {
        candle_report,
        prediction_rows: points.len(),
    })
}
