use crate::timestamps::parse_timestamp;
use equicurve_domain::repositories::market_data::{CandleQuery, MarketDataRepository};
use equicurve_domain::services::candles::{data_quality_from_candles, DataQualityReport};
use equicurve_domain::value_objects::candle::Candle;
use serde::Deserialize;
use std::fs::File;
use std::path::Path;

/// Binance-style candle export row. High/low/volume are carried by the file
/// but the simulator only consumes open and close.
#[derive(Debug, Deserialize)]
pub struct CandleRecord {
    pub timestamp_utc: String,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

/// Loads candles preserving file order exactly. The simulator's contract
/// forbids re-sorting, so anomalies (duplicates, out-of-order rows, bad
/// closes) are only counted into the quality report, never repaired.
pub fn load_csv(
    path: &Path,
    expected_step_seconds: Option<i64>,
) -> Result<(Vec<Candle>, DataQualityReport), String> {
    let file = File::open(path)
        .map_err(|err| format!("failed to open candles CSV {}: {}", path.display(), err))?;
    let mut reader = csv::Reader::from_reader(file);

    let mut candles = Vec::new();
    for result in reader.deserialize::<CandleRecord>() {
        let record = result.map_err(|err| format!("failed to parse CSV row: {}", err))?;
        let timestamp = parse_timestamp(&record.timestamp_utc)?;
        candles.push(Candle {
            timestamp,
            open: record.open,
            close: record.close,
        });
    }

    let report = data_quality_from_candles(&candles, expected_step_seconds);
    tracing::debug!(
        path = %path.display(),
        rows = report.rows,
        duplicates = report.duplicates,
        gaps = report.gaps,
        "loaded candles"
    );
    Ok((candles, report))
}

#[derive(Debug, Default, Clone, Copy)]
pub struct CsvMarketDataRepository;

impl CsvMarketDataRepository {
    pub fn new() -> Self {
        Self
    }
}

impl MarketDataRepository for CsvMarketDataRepository {
    fn load_candles(
        &self,
        query: &CandleQuery,
    ) -> Result<(Vec<Candle>, DataQualityReport), String> {
        load_csv(&query.path, query.expected_step_seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::load_csv;
    use std::fs;
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn unique_tmp_path(name: &str) -> PathBuf {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos())
            .unwrap_or(0);
        std::env::temp_dir().join(format!("equicurve_{name}_{}_{}", std::process::id(), now))
    }

    #[test]
    fn load_csv_parses_rows_in_file_order() {
        let tmp_path = unique_tmp_path("candles.csv");
        let csv_data = "timestamp_utc,open,high,low,close,volume\n\
2022-05-01T00:00:00Z,100.0,101.0,99.0,100.5,12.0\n\
2022-05-01T01:00:00Z,100.5,102.0,100.0,101.5,10.0\n";
        fs::write(&tmp_path, csv_data).expect("write csv");

        let (candles, report) = load_csv(&tmp_path, Some(3600)).expect("load csv");
        fs::remove_file(&tmp_path).ok();

        assert_eq!(candles.len(), 2);
        assert_eq!(candles[0].open, 100.0);
        assert_eq!(candles[0].close, 100.5);
        assert_eq!(candles[1].timestamp - candles[0].timestamp, 3600);
        assert_eq!(report.rows, 2);
        assert_eq!(report.gaps, 0);
    }

    #[test]
    fn load_csv_keeps_out_of_order_rows_and_reports_them() {
        let tmp_path = unique_tmp_path("candles_ooo.csv");
        let csv_data = "timestamp_utc,open,high,low,close,volume\n\
2022-05-01T02:00:00Z,1.0,1.0,1.0,1.0,0.0\n\
2022-05-01T01:00:00Z,2.0,2.0,2.0,2.0,0.0\n";
        fs::write(&tmp_path, csv_data).expect("write csv");

        let (candles, report) = load_csv(&tmp_path, Some(3600)).expect("load csv");
        fs::remove_file(&tmp_path).ok();

        assert_eq!(candles.len(), 2);
        assert!(candles[0].timestamp > candles[1].timestamp);
        assert_eq!(report.out_of_order, 1);
    }

    #[test]
    fn load_csv_missing_file_fails() {
        let err = load_csv(&unique_tmp_path("absent.csv"), None).expect_err("should fail");
        assert!(err.contains("failed to open candles CSV"));
    }
}
