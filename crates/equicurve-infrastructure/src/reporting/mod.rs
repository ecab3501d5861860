use equicurve_domain::services::audit::AuditEvent;
use equicurve_domain::value_objects::equity_point::EquityPoint;
use equicurve_domain::value_objects::side::Side;
use equicurve_domain::value_objects::trade_marker::TradeMarker;
use serde::Deserialize;
use std::fs;
use std::io::Write;
use std::path::Path;

pub fn write_equity_csv(path: &Path, points: &[EquityPoint]) -> Result<(), String> {
    let mut wtr = csv::Writer::from_path(path)
        .map_err(|err| format!("failed to create equity csv {}: {}", path.display(), err))?;
    wtr.write_record(["timestamp_utc", "cash_usd", "asset_qty", "total_value_usd"])
        .map_err(|err| format!("failed to write equity csv header: {}", err))?;

    for point in points {
        wtr.write_record([
            point.timestamp.to_string(),
            point.cash_usd.to_string(),
            point.asset_qty.to_string(),
            point.total_value_usd.to_string(),
        ])
        .map_err(|err| format!("failed to write equity row: {}", err))?;
    }

    wtr.flush()
        .map_err(|err| format!("failed to flush equity csv: {}", err))
}

#[derive(Debug, Deserialize)]
struct EquityRecord {
    timestamp_utc: i64,
    cash_usd: f64,
    asset_qty: f64,
    total_value_usd: f64,
}

pub fn read_equity_csv(path: &Path) -> Result<Vec<EquityPoint>, String> {
    let file = fs::File::open(path)
        .map_err(|err| format!("failed to open equity csv {}: {}", path.display(), err))?;
    let mut reader = csv::Reader::from_reader(file);

    let mut points = Vec::new();
    for result in reader.deserialize::<EquityRecord>() {
        let record = result.map_err(|err| format!("failed to parse equity row: {}", err))?;
        points.push(EquityPoint {
            timestamp: record.timestamp_utc,
            cash_usd: record.cash_usd,
            asset_qty: record.asset_qty,
            total_value_usd: record.total_value_usd,
        });
    }
    Ok(points)
}

pub fn write_markers_csv(path: &Path, markers: &[TradeMarker]) -> Result<(), String> {
    let mut wtr = csv::Writer::from_path(path)
        .map_err(|err| format!("failed to create markers csv {}: {}", path.display(), err))?;
    wtr.write_record(["timestamp_utc", "side", "price"])
        .map_err(|err| format!("failed to write markers csv header: {}", err))?;

    for marker in markers {
        let side = match marker.side {
            Side::Buy => "BUY",
            Side::Sell => "SELL",
        };
        wtr.write_record([
            marker.timestamp.to_string(),
            side.to_string(),
            marker.price.to_string(),
        ])
        .map_err(|err| format!("failed to write markers row: {}", err))?;
    }

    wtr.flush()
        .map_err(|err| format!("failed to flush markers csv: {}", err))
}

pub fn write_summary_json(path: &Path, summary: &serde_json::Value) -> Result<(), String> {
    let contents = serde_json::to_string_pretty(summary)
        .map_err(|err| format!("failed to serialize summary: {}", err))?;
    fs::write(path, contents)
        .map_err(|err| format!("failed to write summary {}: {}", path.display(), err))
}

pub fn write_audit_jsonl(path: &Path, events: &[AuditEvent]) -> Result<(), String> {
    let mut file =
        fs::File::create(path).map_err(|err| format!("failed to create logs: {}", err))?;
    for event in events {
        let line = serde_json::to_string(event)
            .map_err(|err| format!("failed to serialize audit event: {}", err))?;
        file.write_all(line.as_bytes())
            .and_then(|_| file.write_all(b"\n"))
            .map_err(|err| format!("failed to write audit event: {}", err))?;
    }
    Ok(())
}
