use crate::error::CocomoResult;
use crate::estimator::EstimateResult;
use crate::model::DevelopmentMode;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Snapshot of one estimate as written to disk.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExportRecord {
    pub timestamp: String,
    pub project_type: DevelopmentMode,
    pub kloc: f64,
    pub effort: f64,
    pub development_time: f64,
    pub average_team_size: f64,
    pub productivity: f64,
}

impl ExportRecord {
    pub fn new(result: &EstimateResult, at: DateTime<Utc>) -> Self {
        Self {
            timestamp: at.to_rfc3339_opts(SecondsFormat::Millis, true),
            project_type: result.mode,
            kloc: result.size_kloc,
            effort: result.effort_pm,
            development_time: result.schedule_months,
            average_team_size: result.team_size,
            productivity: result.productivity,
        }
    }

    pub fn to_json(&self) -> CocomoResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

pub fn export_file_name(at: DateTime<Utc>) -> String {
    format!("cocomo-estimate-{}.json", at.timestamp_millis())
}

/// Writes the result into `dir` and returns the created file path.
pub fn write_to_dir<P: AsRef<Path>>(result: &EstimateResult, dir: P) -> CocomoResult<PathBuf> {
    write_at(result, dir, Utc::now())
}

pub fn write_at<P: AsRef<Path>>(
    result: &EstimateResult,
    dir: P,
    at: DateTime<Utc>,
) -> CocomoResult<PathBuf> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir)?;

    let record = ExportRecord::new(result, at);
    let path = dir.join(export_file_name(at));
    fs::write(&path, record.to_json()?)?;

    info!("💾 Exported estimate to {}", path.display());
    Ok(path)
}
