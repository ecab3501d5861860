use crate::value_objects::candle::Candle;

/// Diagnostic counts over a candle series as supplied. Nothing here reorders
/// or drops rows: the simulator consumes the sequence exactly as given, so
/// anomalies are only surfaced for the caller to act on.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct DataQualityReport {
    pub rows: usize,
    pub duplicates: usize,
    pub gaps: usize,
    pub out_of_order: usize,
    pub invalid_close: usize,
    pub first_timestamp: Option<i64>,
    pub last_timestamp: Option<i64>,
    pub first_duplicate: Option<i64>,
    pub first_gap: Option<i64>,
    pub first_out_of_order: Option<i64>,
    pub first_invalid_close: Option<i64>,
    pub max_gap_seconds: Option<i64>,
}

pub fn data_quality_from_candles(
    candles: &[Candle],
    expected_step_seconds: Option<i64>,
) -> DataQualityReport {
    let mut report = DataQualityReport {
        rows: candles.len(),
        ..DataQualityReport::default()
    };
    if candles.is_empty() {
        return report;
    }

    let step = expected_step_seconds.unwrap_or(1).max(1);
    report.first_timestamp = Some(candles[0].timestamp);

    let mut last_ts: Option<i64> = None;
    let mut max_gap: Option<i64> = None;

    for candle in candles {
        let ts = candle.timestamp;

        if !candle.close.is_finite() || candle.close <= 0.0 {
            report.invalid_close += 1;
            if report.first_invalid_close.is_none() {
                report.first_invalid_close = Some(ts);
            }
        }

        if let Some(prev) = last_ts {
            if ts == prev {
                report.duplicates += 1;
                if report.first_duplicate.is_none() {
                    report.first_duplicate = Some(ts);
                }
            } else if ts < prev {
                report.out_of_order += 1;
                if report.first_out_of_order.is_none() {
                    report.first_out_of_order = Some(ts);
                }
            } else {
                let diff = ts - prev;
                if diff > step {
                    report.gaps += 1;
                    if report.first_gap.is_none() {
                        report.first_gap = Some(ts);
                    }
                    max_gap = Some(max_gap.map_or(diff, |current| current.max(diff)));
                }
            }
        }

        last_ts = Some(ts);
        report.last_timestamp = Some(ts);
    }

    report.max_gap_seconds = max_gap;
    report
}
