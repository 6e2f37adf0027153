//! Moon phase classification from the Sun-Moon elongation.

use natalis_base::normalize_360;

/// The four reported moon phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoonPhase {
    New,
    Waxing,
    Full,
    Waning,
}

/// All 4 phases in waxing order.
pub const ALL_PHASES: [MoonPhase; 4] = [
    MoonPhase::New,
    MoonPhase::Waxing,
    MoonPhase::Full,
    MoonPhase::Waning,
];

impl MoonPhase {
    /// Display name of the phase.
    pub const fn name(self) -> &'static str {
        match self {
            Self::New => "New Moon",
            Self::Waxing => "Waxing Moon",
            Self::Full => "Full Moon",
            Self::Waning => "Waning Moon",
        }
    }
}

/// Classify the moon phase from Sun and Moon ecliptic longitudes.
///
/// Elongation `diff = normalize(moon - sun)`:
/// - `[345, 360) ∪ [0, 15)` → New Moon (the band spans the 0 deg seam)
/// - `[15, 165)` → Waxing Moon
/// - `[165, 195)` → Full Moon
/// - `[195, 345)` → Waning Moon
pub fn moon_phase(sun_lon_deg: f64, moon_lon_deg: f64) -> MoonPhase {
    let diff = normalize_360(moon_lon_deg - sun_lon_deg);
    if !(15.0..345.0).contains(&diff) {
        MoonPhase::New
    } else if (165.0..195.0).contains(&diff) {
        MoonPhase::Full
    } else if (15.0..165.0).contains(&diff) {
        MoonPhase::Waxing
    } else {
        MoonPhase::Waning
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phase_names_nonempty() {
        for p in ALL_PHASES {
            assert!(!p.name().is_empty());
        }
    }

    #[test]
    fn new_moon_band() {
        assert_eq!(moon_phase(0.0, 0.0), MoonPhase::New);
        assert_eq!(moon_phase(0.0, 14.0), MoonPhase::New);
        assert_eq!(moon_phase(0.0, 345.0), MoonPhase::New);
        assert_eq!(moon_phase(0.0, 359.9), MoonPhase::New);
    }

    #[test]
    fn waxing_band() {
        assert_eq!(moon_phase(0.0, 15.0), MoonPhase::Waxing);
        assert_eq!(moon_phase(0.0, 90.0), MoonPhase::Waxing);
        assert_eq!(moon_phase(0.0, 164.9), MoonPhase::Waxing);
    }

    #[test]
    fn full_band() {
        assert_eq!(moon_phase(0.0, 165.0), MoonPhase::Full);
        assert_eq!(moon_phase(0.0, 180.0), MoonPhase::Full);
        assert_eq!(moon_phase(0.0, 194.9), MoonPhase::Full);
    }

    #[test]
    fn waning_band() {
        assert_eq!(moon_phase(0.0, 195.0), MoonPhase::Waning);
        assert_eq!(moon_phase(0.0, 270.0), MoonPhase::Waning);
        assert_eq!(moon_phase(0.0, 344.0), MoonPhase::Waning);
    }

    #[test]
    fn elongation_is_relative_to_sun() {
        // Sun at 100: moon at 280 is a 180 deg elongation.
        assert_eq!(moon_phase(100.0, 280.0), MoonPhase::Full);
        // Moon behind the sun across the seam.
        assert_eq!(moon_phase(350.0, 10.0), MoonPhase::Waxing);
    }
}
