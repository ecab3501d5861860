use crate::timestamps::parse_timestamp;
use equicurve_domain::repositories::predictions::{
    PredictionFormat, PredictionQuery, PredictionRepository,
};
use equicurve_domain::value_objects::prediction::PredictionPoint;
use serde::Deserialize;
use std::fs::File;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct PredictionCsvRecord {
    timestamp_utc: String,
    score: f64,
}

#[derive(Debug, Deserialize)]
struct PredictionJsonRecord {
    timestamp: serde_json::Value,
    score: f64,
}

pub fn load_csv(path: &Path) -> Result<Vec<PredictionPoint>, String> {
    let file = File::open(path)
        .map_err(|err| format!("failed to open predictions CSV {}: {}", path.display(), err))?;
    let mut reader = csv::Reader::from_reader(file);

    let mut points = Vec::new();
    for result in reader.deserialize::<PredictionCsvRecord>() {
        let record = result.map_err(|err| format!("failed to parse CSV row: {}", err))?;
        points.push(PredictionPoint {
            timestamp: parse_timestamp(&record.timestamp_utc)?,
            score: record.score,
        });
    }
    Ok(points)
}

pub fn load_json(path: &Path) -> Result<Vec<PredictionPoint>, String> {
    let file = File::open(path)
        .map_err(|err| format!("failed to open predictions JSON {}: {}", path.display(), err))?;
    let records: Vec<PredictionJsonRecord> = serde_json::from_reader(file)
        .map_err(|err| format!("failed to parse predictions JSON: {}", err))?;

    let mut points = Vec::with_capacity(records.len());
    for record in records {
        let timestamp = match &record.timestamp {
            serde_json::Value::Number(n) => n
                .as_i64()
                .map(normalize_epoch)
                .ok_or_else(|| format!("invalid timestamp number: {n}"))?,
            serde_json::Value::String(s) => parse_timestamp(s)?,
            other => return Err(format!("invalid timestamp value: {other}")),
        };
        points.push(PredictionPoint {
            timestamp,
            score: record.score,
        });
    }
    Ok(points)
}

fn normalize_epoch(epoch: i64) -> i64 {
    if epoch >= 1_000_000_000_000 {
        epoch / 1000
    } else {
        epoch
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct FilesystemPredictionRepository;

impl FilesystemPredictionRepository {
    pub fn new() -> Self {
        Self
    }
}

impl PredictionRepository for FilesystemPredictionRepository {
    fn load_predictions(&self, query: &PredictionQuery) -> Result<Vec<PredictionPoint>, String> {
        match query.format {
            PredictionFormat::Csv => load_csv(&query.path),
            PredictionFormat::Json => load_json(&query.path),
        }
    }
}
