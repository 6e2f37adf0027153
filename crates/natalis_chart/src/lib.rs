//! Natal chart construction: houses, placements, derived points, aspects.
//!
//! This crate provides:
//! - House cusp containment with the geometric and effective policies
//! - The chart builder (signs, houses, retrograde flags, South Node,
//!   Part of Fortune, moon phase, day/night flag)
//! - Major aspect classification over a built chart
//!
//! A [`Chart`] is immutable once built; every downstream computation
//! reads it on demand and derives its own output.

pub mod aspect;
pub mod builder;
pub mod chart;
pub mod error;
pub mod houses;
pub mod moon;

pub use aspect::{Aspect, aspects_of, classify_aspect};
pub use builder::{BodyState, build_chart};
pub use chart::{Chart, PointPlacement};
pub use error::ChartError;
pub use houses::{BOUNDARY_ORB_DEG, HouseCusps, HousePolicy, house_number};
pub use moon::{ALL_PHASES, MoonPhase, moon_phase};
