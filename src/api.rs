use crate::error::CocomoResult;
use crate::estimator::{self, EstimateResult};
use crate::input::parse_kloc;
use crate::model::DevelopmentMode;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::debug;

/// Raw form values as entered by a user.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct EstimateRequest {
    pub kloc: String,
    pub mode: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ModeInfo {
    pub mode: DevelopmentMode,
    pub description: String,
    pub help_text: String,
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
}

/// Service: parse the request and run the estimator.
pub fn calculate(request: &EstimateRequest) -> CocomoResult<EstimateResult> {
    let mode = DevelopmentMode::parse(&request.mode)?;
    let size_kloc = parse_kloc(&request.kloc)?;

    let result = estimator::estimate(size_kloc, mode)?;
    debug!(
        "Estimated {} KLOC ({}): effort={:.3} PM, schedule={:.3} mo",
        size_kloc, mode, result.effort_pm, result.schedule_months
    );
    Ok(result)
}

/// Service: evaluate one size under every development mode, in table order.
pub fn compare_modes(size_kloc: f64) -> CocomoResult<Vec<EstimateResult>> {
    DevelopmentMode::iter()
        .map(|mode| estimator::estimate(size_kloc, mode))
        .collect()
}

/// Service: the catalogue of modes with their constants and help text.
pub fn list_modes() -> Vec<ModeInfo> {
    DevelopmentMode::iter()
        .map(|mode| {
            let k = mode.constants();
            ModeInfo {
                mode,
                description: mode.description().to_string(),
                help_text: mode.help_text().to_string(),
                a: k.a,
                b: k.b,
                c: k.c,
                d: k.d,
            }
        })
        .collect()
}
