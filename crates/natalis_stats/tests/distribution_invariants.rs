//! Cross-cutting invariants for the statistics engine on a full chart.

use natalis_base::{CelestialBody, SignAttributeTable, WeightTable};
use natalis_chart::{BodyState, Chart, build_chart};
use natalis_stats::{ALL_KINDS, ChartStatistics, DistributionKind, balance_label};

const WEIGHTS: WeightTable = WeightTable::classical();
const ATTRS: SignAttributeTable = SignAttributeTable::classical();

fn full_chart() -> Chart {
    let cusps = [
        10.0, 40.0, 70.0, 100.0, 130.0, 160.0, 190.0, 220.0, 250.0, 280.0, 310.0, 340.0,
    ];
    build_chart(
        Some(cusps),
        10.0,
        280.0,
        &[
            (CelestialBody::Sun, BodyState::new(95.0, 0.9856)),
            (CelestialBody::Moon, BodyState::new(200.0, 13.18)),
            (CelestialBody::Mercury, BodyState::new(78.0, -0.4)),
            (CelestialBody::Venus, BodyState::new(50.0, 1.2)),
            (CelestialBody::Mars, BodyState::new(152.0, 0.52)),
            (CelestialBody::Jupiter, BodyState::new(275.0, 0.08)),
            (CelestialBody::Saturn, BodyState::new(305.0, -0.03)),
            (CelestialBody::Uranus, BodyState::new(35.0, 0.01)),
            (CelestialBody::Neptune, BodyState::new(355.0, 0.005)),
            (CelestialBody::Pluto, BodyState::new(298.0, 0.002)),
            (CelestialBody::NorthNode, BodyState::new(33.0, -0.05)),
            (CelestialBody::Lilith, BodyState::new(222.0, 0.11)),
            (CelestialBody::Chiron, BodyState::new(17.0, 0.02)),
        ],
    )
    .expect("chart builds")
}

#[test]
fn every_distribution_sums_to_100() {
    let chart = full_chart();
    let stats = ChartStatistics::new(&chart, &WEIGHTS, &ATTRS);
    for kind in ALL_KINDS {
        let d = stats.distribution(kind);
        assert_eq!(d.total(), 100, "{} does not sum to 100", kind.name());
        for (label, _) in d.entries() {
            assert!(!label.is_empty());
        }
    }
}

#[test]
fn quality_axes_sum_to_100_each() {
    let chart = full_chart();
    let q = ChartStatistics::new(&chart, &WEIGHTS, &ATTRS).qualities();
    assert_eq!(q.temperature.total(), 100);
    assert_eq!(q.moisture.total(), 100);
    assert_eq!(q.primitive.total(), 100);
}

#[test]
fn two_way_kinds_have_two_categories() {
    let chart = full_chart();
    let stats = ChartStatistics::new(&chart, &WEIGHTS, &ATTRS);
    for kind in [DistributionKind::Hemisphere, DistributionKind::EastWest, DistributionKind::Polarities] {
        assert_eq!(stats.distribution(kind).entries().len(), 2);
    }
}

#[test]
fn ascendant_weighs_into_house_breakdowns() {
    // Only the Ascendant sits below the horizon. Its 4 points against
    // the Midheaven's 1 plus Sun and Moon at 4 each give a 9/13 split.
    let chart = build_chart(
        Some([
            0.0, 30.0, 60.0, 90.0, 120.0, 150.0, 180.0, 210.0, 240.0, 270.0, 300.0, 330.0,
        ]),
        0.0,
        190.0,
        &[
            (CelestialBody::Sun, BodyState::new(200.0, 1.0)),
            (CelestialBody::Moon, BodyState::new(250.0, 13.0)),
        ],
    )
    .expect("chart builds");
    let stats = ChartStatistics::new(&chart, &WEIGHTS, &ATTRS);
    let d = stats.hemisphere();
    assert_eq!(d.entries(), &[("Superior", 69), ("Inferior", 31)]);
    assert_eq!(
        balance_label(d.entries()[0].1, "Superior", "Inferior"),
        "Prominent Superior"
    );
}

#[test]
fn modalities_hold_100_when_leading_rounding_overshoots() {
    // Midheaven and Mercury in cardinal signs (3 of 24 points), every
    // other weighted body in a fixed sign (21 points), Mutable empty:
    // 12.5 and 87.5 both round up, so the shared normalization must
    // pull the extra point back out of the Fixed share.
    let chart = build_chart(
        Some([
            0.0, 30.0, 60.0, 90.0, 120.0, 150.0, 180.0, 210.0, 240.0, 270.0, 300.0, 330.0,
        ]),
        40.0,
        280.0,
        &[
            (CelestialBody::Sun, BodyState::new(130.0, 1.0)),
            (CelestialBody::Moon, BodyState::new(220.0, 13.0)),
            (CelestialBody::Mercury, BodyState::new(95.0, 1.1)),
            (CelestialBody::Venus, BodyState::new(45.0, 1.2)),
            (CelestialBody::Mars, BodyState::new(310.0, 0.5)),
            (CelestialBody::Jupiter, BodyState::new(125.0, 0.08)),
            (CelestialBody::Saturn, BodyState::new(215.0, -0.03)),
            (CelestialBody::Uranus, BodyState::new(35.0, 0.01)),
            (CelestialBody::Neptune, BodyState::new(135.0, 0.005)),
            (CelestialBody::Pluto, BodyState::new(305.0, 0.002)),
        ],
    )
    .expect("chart builds");
    let stats = ChartStatistics::new(&chart, &WEIGHTS, &ATTRS);
    let d = stats.modalities();
    assert_eq!(
        d.entries(),
        &[("Cardinal", 13), ("Fixed", 87), ("Mutable", 0)]
    );
    assert_eq!(d.total(), 100);
}

#[test]
fn balance_label_over_engine_output() {
    let chart = full_chart();
    let stats = ChartStatistics::new(&chart, &WEIGHTS, &ATTRS);
    let d = stats.hemisphere();
    let label = balance_label(d.entries()[0].1, "Superior", "Inferior");
    assert!(
        label == "Balanced"
            || label.starts_with("Prominent ")
            || label.starts_with("Dominant "),
        "unexpected label {label}"
    );
}
