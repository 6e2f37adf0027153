//! Chart builder: assembles a [`Chart`] from ephemeris provider output.
//!
//! The builder is the only place a chart is constructed. It receives the
//! final cusp array and angle longitudes from the house-system provider
//! (which has already run its own fallbacks) and per-body longitude and
//! speed from the ephemeris provider, then derives signs, both house
//! variants, retrograde flags, the South Node, the Part of Fortune and
//! the moon phase.

use natalis_base::{BODY_COUNT, CelestialBody, normalize_360, sign_from_longitude};

use crate::chart::{Chart, PointPlacement};
use crate::error::ChartError;
use crate::houses::{HouseCusps, HousePolicy, house_number};
use crate::moon::moon_phase;

/// Instantaneous state of one ephemeris body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyState {
    /// Ecliptic longitude in degrees.
    pub longitude_deg: f64,
    /// Longitudinal speed in degrees per day; negative means retrograde.
    pub speed_deg_per_day: f64,
}

impl BodyState {
    pub const fn new(longitude_deg: f64, speed_deg_per_day: f64) -> Self {
        Self {
            longitude_deg,
            speed_deg_per_day,
        }
    }
}

/// Build a natal chart.
///
/// # Arguments
/// * `cusps` — the 12 cusp longitudes from the house-system provider, or
///   None when every fallback house system failed
/// * `ascendant_deg`, `midheaven_deg` — the two chart angles
/// * `body_states` — longitude and speed per tracked ephemeris body;
///   entries for angles or derived points are ignored (those are placed
///   internally), and duplicate entries keep the last one
///
/// Sun and Moon are mandatory: the moon phase, the day/night flag and
/// the Part of Fortune are all derived from them. Any other tracked body
/// may be absent; its placement is simply recorded as missing and every
/// downstream computation skips it.
///
/// # Errors
/// [`ChartError::HouseSystemUnavailable`] when `cusps` is None,
/// [`ChartError::MissingBodyLongitude`] when Sun or Moon is absent, and
/// [`ChartError::UndeterminedHouse`] if assignment ever misses (a defect
/// for well-formed cusps).
pub fn build_chart(
    cusps: Option<[f64; 12]>,
    ascendant_deg: f64,
    midheaven_deg: f64,
    body_states: &[(CelestialBody, BodyState)],
) -> Result<Chart, ChartError> {
    let cusps = HouseCusps::new(cusps.ok_or(ChartError::HouseSystemUnavailable)?);

    let mut states: [Option<BodyState>; 13] = [None; 13];
    for (body, state) in body_states {
        if let Some(i) = body.ephemeris_index() {
            states[i] = Some(*state);
        }
    }

    let sun = ephemeris_state(&states, CelestialBody::Sun)?;
    let moon = ephemeris_state(&states, CelestialBody::Moon)?;

    let mut placements: [Option<PointPlacement>; BODY_COUNT] = [None; BODY_COUNT];

    // The Ascendant is definitionally house 1 under both policies.
    let asc = normalize_360(ascendant_deg);
    placements[CelestialBody::Ascendant.index() as usize] = Some(PointPlacement {
        longitude: asc,
        sign: sign_from_longitude(asc).sign,
        house_geometric: 1,
        house_effective: 1,
        retrograde: None,
    });
    placements[CelestialBody::Midheaven.index() as usize] =
        Some(place(midheaven_deg, &cusps, None)?);

    for body in natalis_base::EPHEMERIS_BODIES {
        let Some(state) = states[body.ephemeris_index().unwrap_or(0)] else {
            continue;
        };
        placements[body.index() as usize] = Some(place(
            state.longitude_deg,
            &cusps,
            Some(state.speed_deg_per_day < 0.0),
        )?);
    }

    // South Node sits opposite the North Node.
    if let Some(node) = states[CelestialBody::NorthNode.ephemeris_index().unwrap_or(0)] {
        let sn = normalize_360(node.longitude_deg + 180.0);
        placements[CelestialBody::SouthNode.index() as usize] =
            Some(place(sn, &cusps, None)?);
    }

    // Classical day/night Part of Fortune: day charts take the lunar
    // arc from the Ascendant, night charts the solar arc.
    let sun_house = house_number(sun.longitude_deg, &cusps, HousePolicy::Geometric)?;
    let day_chart = sun_house >= 7;
    let pof = if day_chart {
        normalize_360(asc + moon.longitude_deg - sun.longitude_deg)
    } else {
        normalize_360(asc + sun.longitude_deg - moon.longitude_deg)
    };
    placements[CelestialBody::PartOfFortune.index() as usize] =
        Some(place(pof, &cusps, None)?);

    Ok(Chart {
        cusps,
        placements,
        moon_phase: moon_phase(sun.longitude_deg, moon.longitude_deg),
        day_chart,
    })
}

/// Look up a mandatory ephemeris body.
fn ephemeris_state(
    states: &[Option<BodyState>; 13],
    body: CelestialBody,
) -> Result<BodyState, ChartError> {
    body.ephemeris_index()
        .and_then(|i| states[i])
        .ok_or(ChartError::MissingBodyLongitude(body))
}

/// Place a longitude: sign plus both house variants.
fn place(
    lon_deg: f64,
    cusps: &HouseCusps,
    retrograde: Option<bool>,
) -> Result<PointPlacement, ChartError> {
    let lon = normalize_360(lon_deg);
    Ok(PointPlacement {
        longitude: lon,
        sign: sign_from_longitude(lon).sign,
        house_geometric: house_number(lon, cusps, HousePolicy::Geometric)?,
        house_effective: house_number(lon, cusps, HousePolicy::Effective)?,
        retrograde,
    })
}
