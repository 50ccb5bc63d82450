use crate::error::CocomoError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum_macros::{Display, EnumIter, EnumString};

/// Project class of the COCOMO Basic Model. Selects the constant row.
#[derive(
    Debug,
    Clone,
    Copy,
    EnumIter,
    EnumString,
    Display,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[serde(rename_all = "kebab-case")]
pub enum DevelopmentMode {
    Organic,
    SemiDetached,
    Embedded,
}

/// Empirical coefficients for `Effort = a * KLOC^b` and `Schedule = c * Effort^d`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModelConstants {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
}

static ORGANIC: ModelConstants = ModelConstants {
    a: 2.4,
    b: 1.05,
    c: 2.5,
    d: 0.38,
};

static SEMI_DETACHED: ModelConstants = ModelConstants {
    a: 3.0,
    b: 1.12,
    c: 2.5,
    d: 0.35,
};

static EMBEDDED: ModelConstants = ModelConstants {
    a: 3.6,
    b: 1.20,
    c: 2.5,
    d: 0.32,
};

impl DevelopmentMode {
    pub fn constants(&self) -> &'static ModelConstants {
        match self {
            Self::Organic => &ORGANIC,
            Self::SemiDetached => &SEMI_DETACHED,
            Self::Embedded => &EMBEDDED,
        }
    }

    /// Parses a mode name, mapping anything unrecognized to `UnknownMode`.
    pub fn parse(name: &str) -> Result<Self, CocomoError> {
        Self::from_str(name.trim()).map_err(|_| CocomoError::UnknownMode(name.to_string()))
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Organic => "Simple projects with small, experienced teams",
            Self::SemiDetached => "Medium complexity projects with mixed experience",
            Self::Embedded => "Complex projects with tight constraints",
        }
    }

    pub fn help_text(&self) -> &'static str {
        match self {
            Self::Organic => {
                "Typical for small business applications, utilities, and simple data processing systems."
            }
            Self::SemiDetached => {
                "Common for compilers, database systems, and medium-scale embedded systems."
            }
            Self::Embedded => {
                "Used for real-time systems, operating systems, and mission-critical applications."
            }
        }
    }
}
