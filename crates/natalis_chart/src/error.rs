//! Error types for chart construction.

use std::error::Error;
use std::fmt::{Display, Formatter};

use natalis_base::CelestialBody;

/// Errors from building a natal chart.
#[derive(Debug, Clone, Copy, PartialEq)]
#[non_exhaustive]
pub enum ChartError {
    /// The house-system provider exhausted its fallbacks; no cusp array
    /// is available. The whole chart is aborted.
    HouseSystemUnavailable,
    /// House assignment found no containing interval for this longitude.
    /// Unreachable for 12 well-formed cusps; surfaced as a defect rather
    /// than coerced to a sentinel house.
    UndeterminedHouse {
        /// Normalized longitude that matched no house interval.
        longitude: f64,
    },
    /// The ephemeris provider omitted a body the builder cannot do
    /// without (Sun or Moon).
    MissingBodyLongitude(CelestialBody),
}

impl Display for ChartError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::HouseSystemUnavailable => {
                write!(f, "no house system produced a valid cusp array")
            }
            Self::UndeterminedHouse { longitude } => {
                write!(f, "no house interval contains longitude {longitude} deg")
            }
            Self::MissingBodyLongitude(body) => {
                write!(f, "ephemeris data missing for {}", body.name())
            }
        }
    }
}

impl Error for ChartError {}
