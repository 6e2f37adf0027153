//! Major aspect classification by angular separation.
//!
//! Separation is the shortest arc between two longitudes (0..=180 deg).
//! Each aspect owns an inclusive orb window; windows do not overlap, so
//! the first match is the only match.

use natalis_base::{ALL_BODIES, CelestialBody};

use crate::chart::Chart;

/// The five major aspects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Aspect {
    Conjunction,
    Sextile,
    Square,
    Trine,
    Opposition,
}

impl Aspect {
    /// Display name of the aspect.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Conjunction => "Conjunction",
            Self::Sextile => "Sextile",
            Self::Square => "Square",
            Self::Trine => "Trine",
            Self::Opposition => "Opposition",
        }
    }

    /// Exact angle of the aspect in degrees.
    pub const fn exact_deg(self) -> f64 {
        match self {
            Self::Conjunction => 0.0,
            Self::Sextile => 60.0,
            Self::Square => 90.0,
            Self::Trine => 120.0,
            Self::Opposition => 180.0,
        }
    }
}

/// Classify the aspect between two ecliptic longitudes, if any.
///
/// Orb windows (degrees, inclusive): Conjunction 0..=8, Opposition
/// 172..=180, Square 82..=98, Trine 112..=128, Sextile 54..=66.
/// Symmetric in its arguments.
pub fn classify_aspect(lon1_deg: f64, lon2_deg: f64) -> Option<Aspect> {
    let mut diff = (lon1_deg - lon2_deg).abs() % 360.0;
    if diff > 180.0 {
        diff = 360.0 - diff;
    }
    if diff <= 8.0 {
        Some(Aspect::Conjunction)
    } else if (172.0..=180.0).contains(&diff) {
        Some(Aspect::Opposition)
    } else if (82.0..=98.0).contains(&diff) {
        Some(Aspect::Square)
    } else if (112.0..=128.0).contains(&diff) {
        Some(Aspect::Trine)
    } else if (54.0..=66.0).contains(&diff) {
        Some(Aspect::Sextile)
    } else {
        None
    }
}

/// All aspects of one subject body, in chart enumeration order.
///
/// Counterparties skip the subject itself and the Part of Fortune — the
/// Part of Fortune never appears as the "other" body, though its own
/// aspect list (with it as subject) is still computed against everyone
/// else. Absent placements yield no entries; an absent subject yields an
/// empty list. Recomputed on each call, nothing is cached on the chart.
pub fn aspects_of(chart: &Chart, subject: CelestialBody) -> Vec<(CelestialBody, Aspect)> {
    let Some(subject_placement) = chart.placement(subject) else {
        return Vec::new();
    };
    let mut found = Vec::new();
    for other in ALL_BODIES {
        if other == subject || other == CelestialBody::PartOfFortune {
            continue;
        }
        let Some(other_placement) = chart.placement(other) else {
            continue;
        };
        if let Some(aspect) =
            classify_aspect(subject_placement.longitude, other_placement.longitude)
        {
            found.push((other, aspect));
        }
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{BodyState, build_chart};

    #[test]
    fn conjunction_boundary_inclusive() {
        assert_eq!(classify_aspect(10.0, 18.0), Some(Aspect::Conjunction));
        assert_eq!(classify_aspect(10.0, 19.0), None);
    }

    #[test]
    fn opposition_window() {
        assert_eq!(classify_aspect(0.0, 180.0), Some(Aspect::Opposition));
        assert_eq!(classify_aspect(0.0, 172.0), Some(Aspect::Opposition));
        assert_eq!(classify_aspect(0.0, 171.9), None);
    }

    #[test]
    fn square_window() {
        assert_eq!(classify_aspect(0.0, 82.0), Some(Aspect::Square));
        assert_eq!(classify_aspect(0.0, 98.0), Some(Aspect::Square));
        assert_eq!(classify_aspect(0.0, 81.9), None);
        assert_eq!(classify_aspect(0.0, 98.1), None);
    }

    #[test]
    fn trine_window() {
        assert_eq!(classify_aspect(0.0, 112.0), Some(Aspect::Trine));
        assert_eq!(classify_aspect(0.0, 128.0), Some(Aspect::Trine));
        assert_eq!(classify_aspect(0.0, 129.0), None);
    }

    #[test]
    fn sextile_window() {
        assert_eq!(classify_aspect(0.0, 54.0), Some(Aspect::Sextile));
        assert_eq!(classify_aspect(0.0, 66.0), Some(Aspect::Sextile));
        assert_eq!(classify_aspect(0.0, 53.9), None);
        assert_eq!(classify_aspect(0.0, 66.1), None);
    }

    #[test]
    fn shortest_arc_across_seam() {
        // 350 and 10 are 20 deg apart, not 340.
        assert_eq!(classify_aspect(350.0, 10.0), None);
        assert_eq!(classify_aspect(355.0, 3.0), Some(Aspect::Conjunction));
    }

    #[test]
    fn classification_symmetric() {
        for (a, b) in [(10.0, 18.0), (0.0, 90.0), (120.0, 0.0), (5.0, 177.0), (30.0, 250.0)] {
            assert_eq!(classify_aspect(a, b), classify_aspect(b, a), "{a} vs {b}");
        }
    }

    fn fixture_chart() -> Chart {
        let mut raw = [0.0; 12];
        for (i, c) in raw.iter_mut().enumerate() {
            *c = (i as f64) * 30.0;
        }
        let bodies = [
            (CelestialBody::Sun, BodyState::new(100.0, 1.0)),
            (CelestialBody::Moon, BodyState::new(200.0, 13.0)),
            (CelestialBody::Mercury, BodyState::new(120.0, 1.5)),
            (CelestialBody::Mars, BodyState::new(157.0, 0.6)),
        ];
        build_chart(Some(raw), 0.0, 270.0, &bodies).unwrap()
    }

    #[test]
    fn aspects_of_sun() {
        let chart = fixture_chart();
        assert_eq!(
            aspects_of(&chart, CelestialBody::Sun),
            vec![(CelestialBody::Mars, Aspect::Sextile)]
        );
    }

    #[test]
    fn aspects_of_ascendant_in_order() {
        let chart = fixture_chart();
        assert_eq!(
            aspects_of(&chart, CelestialBody::Ascendant),
            vec![
                (CelestialBody::Midheaven, Aspect::Square),
                (CelestialBody::Mercury, Aspect::Trine),
            ]
        );
    }

    #[test]
    fn part_of_fortune_never_a_counterparty() {
        let chart = fixture_chart();
        for subject in ALL_BODIES {
            for (other, _) in aspects_of(&chart, subject) {
                assert_ne!(other, CelestialBody::PartOfFortune, "subject {subject:?}");
            }
        }
    }

    #[test]
    fn part_of_fortune_still_a_subject() {
        // Night chart: PoF = 0 + 100 - 200 = 260 deg.
        let chart = fixture_chart();
        let own = aspects_of(&chart, CelestialBody::PartOfFortune);
        // 260 vs Moon at 200 is a 60 deg sextile.
        assert!(own.contains(&(CelestialBody::Moon, Aspect::Sextile)));
    }

    #[test]
    fn absent_subject_yields_empty() {
        let chart = fixture_chart();
        assert!(aspects_of(&chart, CelestialBody::Pluto).is_empty());
    }
}
