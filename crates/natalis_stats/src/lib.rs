//! Weighted chart statistics: hemisphere, east-west, qualities,
//! temperaments, elements, modalities and polarities.
//!
//! Each breakdown is a [`Distribution`]: labelled integer percentages
//! that sum to exactly 100, with the last category absorbing rounding
//! residue. The [`ChartStatistics`] engine drives all seven from a
//! single chart reference and the scoring tables in `natalis_base`.

pub mod distribution;
pub mod engine;
pub mod label;

pub use distribution::{ALL_KINDS, Distribution, DistributionKind};
pub use engine::{ChartStatistics, QualitiesBreakdown};
pub use label::balance_label;
