use crate::reporting;
use equicurve_domain::repositories::artifacts::{ArtifactReader, ArtifactWriter};
use equicurve_domain::services::audit::AuditEvent;
use equicurve_domain::value_objects::equity_point::EquityPoint;
use equicurve_domain::value_objects::trade_marker::TradeMarker;
use std::fs;
use std::path::Path;

#[derive(Debug, Default, Clone, Copy)]
pub struct FilesystemArtifactWriter;

impl FilesystemArtifactWriter {
    pub fn new() -> Self {
        Self
    }
}

impl ArtifactWriter for FilesystemArtifactWriter {
    fn ensure_dir(&self, path: &Path) -> Result<(), String> {
        fs::create_dir_all(path)
            .map_err(|err| format!("failed to create dir {}: {}", path.display(), err))
    }

    fn write_equity_csv(&self, path: &Path, points: &[EquityPoint]) -> Result<(), String> {
        reporting::write_equity_csv(path, points)
    }

    fn write_markers_csv(&self, path: &Path, markers: &[TradeMarker]) -> Result<(), String> {
        reporting::write_markers_csv(path, markers)
    }

    fn write_summary_json(&self, path: &Path, summary: &serde_json::Value) -> Result<(), String> {
        reporting::write_summary_json(path, summary)
    }

    fn write_audit_jsonl(&self, path: &Path, events: &[AuditEvent]) -> Result<(), String> {
        reporting::write_audit_jsonl(path, events)
    }

    fn write_config_snapshot_toml(&self, path: &Path, contents: &str) -> Result<(), String> {
        fs::write(path, contents).map_err(|err| {
            format!(
                "failed to write config snapshot {}: {}",
                path.display(),
                err
            )
        })
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct FilesystemArtifactReader;

impl FilesystemArtifactReader {
    pub fn new() -> Self {
        Self
    }
}

impl ArtifactReader for FilesystemArtifactReader {
    fn read_equity_csv(&self, path: &Path) -> Result<Vec<EquityPoint>, String> {
        reporting::read_equity_csv(path)
    }

    fn read_config_snapshot_toml(&self, path: &Path) -> Result<Option<String>, String> {
        if !path.exists() {
            return Ok(None);
        }
        fs::read_to_string(path)
            .map(Some)
            .map_err(|err| format!("failed to read config snapshot {}: {}", path.display(), err))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}
