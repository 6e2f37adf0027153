//! The immutable natal chart and per-body placements.
//!
//! A `Chart` is built once by the builder and only read afterwards: the
//! aspect classifier, statistics engine and report projections all take
//! `&Chart` and derive their output on demand. Nothing mutates a chart
//! after construction, so it can be shared freely across threads.

use natalis_base::{ALL_BODIES, BODY_COUNT, CelestialBody, ZodiacSign};

use crate::houses::{HouseCusps, HousePolicy};
use crate::moon::MoonPhase;

/// Placement of one body on the chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointPlacement {
    /// Ecliptic longitude, normalized to [0, 360).
    pub longitude: f64,
    /// Sign containing the longitude.
    pub sign: ZodiacSign,
    /// House under strict cusp containment.
    pub house_geometric: u8,
    /// House after the 5-degree next-house allowance.
    pub house_effective: u8,
    /// Retrograde flag from the ephemeris speed. None for angles and
    /// derived points, which have no motion of their own.
    pub retrograde: Option<bool>,
}

impl PointPlacement {
    /// Whether the 5-degree allowance moved this body to the next house.
    pub fn moved_by_boundary_rule(&self) -> bool {
        self.house_geometric != self.house_effective
    }

    /// House under the given policy.
    pub fn house(&self, policy: HousePolicy) -> u8 {
        match policy {
            HousePolicy::Geometric => self.house_geometric,
            HousePolicy::Effective => self.house_effective,
        }
    }
}

/// A fully built natal chart.
#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    pub(crate) cusps: HouseCusps,
    pub(crate) placements: [Option<PointPlacement>; BODY_COUNT],
    pub(crate) moon_phase: MoonPhase,
    pub(crate) day_chart: bool,
}

impl Chart {
    /// The house cusps the chart was built from.
    pub fn cusps(&self) -> &HouseCusps {
        &self.cusps
    }

    /// Placement of a body, or None if the ephemeris omitted it.
    pub fn placement(&self, body: CelestialBody) -> Option<&PointPlacement> {
        self.placements[body.index() as usize].as_ref()
    }

    /// House of a body under the given policy, or None if absent.
    pub fn house_of(&self, body: CelestialBody, policy: HousePolicy) -> Option<u8> {
        self.placement(body).map(|p| p.house(policy))
    }

    /// Sign of a body, or None if absent.
    pub fn sign_of(&self, body: CelestialBody) -> Option<ZodiacSign> {
        self.placement(body).map(|p| p.sign)
    }

    /// The derived moon phase.
    pub fn moon_phase(&self) -> MoonPhase {
        self.moon_phase
    }

    /// Whether the Sun occupies the above-horizon houses (7..=12).
    pub fn is_day_chart(&self) -> bool {
        self.day_chart
    }

    /// Present placements in chart enumeration order.
    pub fn bodies(&self) -> impl Iterator<Item = (CelestialBody, &PointPlacement)> {
        ALL_BODIES
            .iter()
            .filter_map(|b| self.placement(*b).map(|p| (*b, p)))
    }
}
