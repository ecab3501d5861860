use crate::value_objects::prediction::PredictionPoint;
use std::collections::BTreeMap;

/// Joins prediction scores onto candle timestamps by exact match.
///
/// Candles without a score yield `None`; the caller decides whether to drop
/// them. Later duplicates of the same prediction timestamp win, which is
/// also what the quality report flags upstream.
pub fn align_with_candles(
    candle_timestamps: &[i64],
    predictions: &[PredictionPoint],
) -> Vec<Option<f64>> {
    let mut by_ts: BTreeMap<i64, f64> = BTreeMap::new();
    for point in predictions {
        by_ts.insert(point.timestamp, point.score);
    }

    candle_timestamps
        .iter()
        .map(|ts| by_ts.get(ts).copied())
        .collect()
}
