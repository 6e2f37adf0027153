//! House cusps and house assignment under the two placement policies.
//!
//! The 12 cusps are ecliptic longitudes used cyclically; the "next" cusp
//! of house 12 is the cusp of house 1. A house interval wraps when its
//! ending cusp sits across the 0 deg seam.
//!
//! Geometric assignment is strict cusp containment. Effective assignment
//! additionally applies the traditional 5-degree allowance: a body within
//! the last 5 degrees of a house is read as influencing the following
//! house, wrapping 12 back to 1.

use natalis_base::{ZodiacSign, normalize_360, sign_from_longitude};

use crate::error::ChartError;

/// Width of the transitional band before the next cusp, in degrees.
pub const BOUNDARY_ORB_DEG: f64 = 5.0;

/// House placement policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HousePolicy {
    /// Strict geometric cusp containment.
    Geometric,
    /// Geometric containment plus the 5-degree next-house allowance.
    Effective,
}

/// The 12 house cusp longitudes, house 1 first, normalized to [0, 360).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HouseCusps {
    cusps: [f64; 12],
}

impl HouseCusps {
    /// Build from raw cusp longitudes, normalizing each to [0, 360).
    pub fn new(raw: [f64; 12]) -> Self {
        let mut cusps = [0.0; 12];
        for (c, r) in cusps.iter_mut().zip(raw) {
            *c = normalize_360(r);
        }
        Self { cusps }
    }

    /// Cusp longitude of a house (1..=12).
    pub fn cusp_deg(&self, house: u8) -> f64 {
        debug_assert!((1..=12).contains(&house));
        self.cusps[(house - 1) as usize]
    }

    /// Sign sitting on a house cusp (1..=12).
    pub fn sign_on_cusp(&self, house: u8) -> ZodiacSign {
        sign_from_longitude(self.cusp_deg(house)).sign
    }

    /// All 12 cusps in house order.
    pub fn as_array(&self) -> &[f64; 12] {
        &self.cusps
    }
}

/// Assign a longitude to a house (1..=12) under the given policy.
///
/// For house index `i`, the interval runs from `cusps[i]` to
/// `cusps[(i+1) % 12]`; when the interval crosses 0 deg the containment
/// test becomes `lon >= cur || lon < next`. Under [`HousePolicy::Effective`],
/// a body less than [`BOUNDARY_ORB_DEG`] before the next cusp (inclusive
/// at exactly 5 deg) is reassigned to the following house.
///
/// Returns [`ChartError::UndeterminedHouse`] if no interval matches,
/// which cannot happen for 12 well-formed cusps.
pub fn house_number(
    lon_deg: f64,
    cusps: &HouseCusps,
    policy: HousePolicy,
) -> Result<u8, ChartError> {
    let lon = normalize_360(lon_deg);
    for i in 0..12u8 {
        let cur = cusps.cusps[i as usize];
        let next = cusps.cusps[((i + 1) % 12) as usize];
        let in_house = if next < cur {
            lon >= cur || lon < next
        } else {
            cur <= lon && lon < next
        };
        if !in_house {
            continue;
        }
        let house = i + 1;
        if policy == HousePolicy::Effective
            && normalize_360(next - lon) <= BOUNDARY_ORB_DEG
        {
            return Ok(if house == 12 { 1 } else { house + 1 });
        }
        return Ok(house);
    }
    Err(ChartError::UndeterminedHouse { longitude: lon })
}
