//! Formatted planetary position lines.

use natalis_base::{CelestialBody, Dms, deg_to_dms};
use natalis_chart::Chart;

/// Renders a within-sign DMS with whole arc-seconds.
fn format_dms(dms: &Dms) -> String {
    format!("{}\u{b0}{}'{}\"", dms.degrees, dms.minutes, dms.seconds as u32)
}

/// One "Body in Sign D°M'S\"" line, with a trailing " R" when the body
/// is retrograde.
fn position_line(body: CelestialBody, chart: &Chart) -> Option<String> {
    let placement = chart.placement(body)?;
    let dms = deg_to_dms(placement.longitude % 30.0);
    let retro = match placement.retrograde {
        Some(true) => " R",
        _ => "",
    };
    Some(format!(
        "{} in {} {}{retro}",
        body.name(),
        placement.sign.name(),
        format_dms(&dms)
    ))
}

/// Position lines for the primary bodies, in enumeration order.
///
/// Angles and both derived points are excluded; the Ascendant gets its
/// own line from [`ascendant_line`].
pub fn position_lines(chart: &Chart) -> Vec<String> {
    chart
        .bodies()
        .filter(|(body, _)| {
            !matches!(
                body,
                CelestialBody::Ascendant
                    | CelestialBody::Midheaven
                    | CelestialBody::SouthNode
                    | CelestialBody::PartOfFortune
            )
        })
        .filter_map(|(body, _)| position_line(body, chart))
        .collect()
}

/// The standalone Ascendant line, when the chart has one.
pub fn ascendant_line(chart: &Chart) -> Option<String> {
    let placement = chart.placement(CelestialBody::Ascendant)?;
    let dms = deg_to_dms(placement.longitude % 30.0);
    Some(format!(
        "Ascendant in {} {}",
        placement.sign.name(),
        format_dms(&dms)
    ))
}
