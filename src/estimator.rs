use crate::error::{CocomoError, CocomoResult};
use crate::model::{DevelopmentMode, ModelConstants};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EstimateResult {
    // Person-months
    pub effort_pm: f64,
    pub schedule_months: f64,
    pub team_size: f64,
    // LOC per person-month
    pub productivity: f64,

    // Traceability
    pub size_kloc: f64,
    pub mode: DevelopmentMode,
    pub constants: ModelConstants,
}

/// Rejects sizes the model equations cannot handle (zero, negative, NaN, infinite).
pub fn check_size(size_kloc: f64) -> CocomoResult<f64> {
    if size_kloc.is_finite() && size_kloc > 0.0 {
        Ok(size_kloc)
    } else {
        Err(CocomoError::InvalidSize(size_kloc))
    }
}

/// Evaluates the COCOMO Basic equations for one project.
///
/// No rounding is applied; formatting belongs to the caller. Sizes whose
/// outputs are not finite and positive are rejected as `InvalidSize`.
pub fn estimate(size_kloc: f64, mode: DevelopmentMode) -> CocomoResult<EstimateResult> {
    let constants = *mode.constants();
    let size_kloc = check_size(size_kloc)?;

    let effort_pm = constants.a * size_kloc.powf(constants.b);
    let schedule_months = constants.c * effort_pm.powf(constants.d);
    let team_size = effort_pm / schedule_months;
    let productivity = (size_kloc * 1000.0) / effort_pm;

    // Sizes near the f64 limits overflow or underflow in powf.
    let in_range = |v: f64| v.is_finite() && v > 0.0;
    if ![effort_pm, schedule_months, team_size, productivity]
        .into_iter()
        .all(in_range)
    {
        return Err(CocomoError::InvalidSize(size_kloc));
    }

    Ok(EstimateResult {
        effort_pm,
        schedule_months,
        team_size,
        productivity,
        size_kloc,
        mode,
        constants,
    })
}

/// Same as [`estimate`], with the mode given by name (`"organic"`, `"semi-detached"`, `"embedded"`).
pub fn estimate_named(size_kloc: f64, mode: &str) -> CocomoResult<EstimateResult> {
    let mode = DevelopmentMode::parse(mode)?;
    estimate(size_kloc, mode)
}
