//! House and sign summary rows plus the house-boundary footnote.

use natalis_base::{ALL_BODIES, ALL_SIGNS, CelestialBody, ZodiacSign, ordinal};
use natalis_chart::{Chart, HousePolicy};

/// One row of the per-house occupancy table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HouseRow {
    pub house: u8,
    pub cusp_sign: ZodiacSign,
    /// Bodies whose effective house is this one, in enumeration order.
    /// Angles are omitted; they define the frame rather than occupy it.
    pub occupants: Vec<CelestialBody>,
}

/// Twelve rows, houses 1 through 12, keyed by effective placement.
pub fn house_summary(chart: &Chart) -> Vec<HouseRow> {
    (1..=12u8)
        .map(|house| {
            let occupants = ALL_BODIES
                .iter()
                .copied()
                .filter(|b| {
                    !matches!(b, CelestialBody::Ascendant | CelestialBody::Midheaven)
                        && chart.house_of(*b, HousePolicy::Effective) == Some(house)
                })
                .collect();
            HouseRow {
                house,
                cusp_sign: chart.cusps().sign_on_cusp(house),
                occupants,
            }
        })
        .collect()
}

/// What a sign-grouped row shows in its middle cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignCell {
    /// No body occupies the sign.
    Empty,
    /// A placed body, with the house-boundary marker state.
    Body { body: CelestialBody, moved: bool },
}

/// One row of the sign-grouped display table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignRow {
    pub sign: ZodiacSign,
    pub cell: SignCell,
    /// Effective house shown next to the cell. For an empty sign this is
    /// the house whose cusp falls in the sign, when one does.
    pub house: Option<u8>,
}

impl SignRow {
    /// Middle-cell text as the summary table prints it.
    pub fn cell_text(&self) -> String {
        match self.cell {
            SignCell::Empty => "EMPTY".to_string(),
            SignCell::Body { body, moved } => match body {
                CelestialBody::Ascendant => "\u{2191} ASCENDANT".to_string(),
                CelestialBody::Midheaven => "MC MIDHEAVEN".to_string(),
                _ => {
                    let marker = if moved { "*" } else { "" };
                    format!(
                        "{} {}{marker}",
                        body.symbol(),
                        body.name().to_uppercase()
                    )
                }
            },
        }
    }
}

/// Sign-grouped rows for the whole chart.
///
/// Iterates the zodiac starting from the Ascendant's sign. Angles lead
/// each sign's block; other occupants follow sorted by effective house.
/// A sign with no occupants yields one `Empty` row carrying the number
/// of the house whose cusp bears that sign.
pub fn sign_rows(chart: &Chart) -> Vec<SignRow> {
    let start = chart
        .sign_of(CelestialBody::Ascendant)
        .map(|s| s.index() as usize)
        .unwrap_or(0);

    let mut rows = Vec::new();
    for offset in 0..12 {
        let sign = ALL_SIGNS[(start + offset) % 12];

        let mut here: Vec<(CelestialBody, u8, bool)> = Vec::new();
        for body in [CelestialBody::Ascendant, CelestialBody::Midheaven] {
            if chart.sign_of(body) == Some(sign) {
                if let Some(h) = chart.house_of(body, HousePolicy::Effective) {
                    here.push((body, h, false));
                }
            }
        }
        for (body, placement) in chart.bodies() {
            if matches!(body, CelestialBody::Ascendant | CelestialBody::Midheaven) {
                continue;
            }
            if placement.sign == sign {
                here.push((
                    body,
                    placement.house_effective,
                    placement.moved_by_boundary_rule(),
                ));
            }
        }

        if here.is_empty() {
            rows.push(SignRow {
                sign,
                cell: SignCell::Empty,
                house: house_with_cusp_sign(chart, sign),
            });
            continue;
        }

        here.sort_by_key(|&(_, house, _)| house);
        for (body, house, moved) in here {
            rows.push(SignRow {
                sign,
                cell: SignCell::Body { body, moved },
                house: Some(house),
            });
        }
    }
    rows
}

fn house_with_cusp_sign(chart: &Chart, sign: ZodiacSign) -> Option<u8> {
    (1..=12u8).find(|&h| chart.cusps().sign_on_cusp(h) == sign)
}

/// Bodies moved to the next house by the 5-degree allowance, paired
/// with their geometric house. Angles and the Part of Fortune are not
/// reported here.
pub fn moved_bodies(chart: &Chart) -> Vec<(CelestialBody, u8)> {
    chart
        .bodies()
        .filter(|(body, placement)| {
            !matches!(
                body,
                CelestialBody::Ascendant
                    | CelestialBody::Midheaven
                    | CelestialBody::PartOfFortune
            ) && placement.moved_by_boundary_rule()
        })
        .map(|(body, placement)| (body, placement.house_geometric))
        .collect()
}

/// Explanatory footnote for boundary-moved bodies, or None when every
/// body keeps its geometric house.
pub fn boundary_note(chart: &Chart) -> Option<String> {
    let moved = moved_bodies(chart);
    if moved.is_empty() {
        return None;
    }
    let items: Vec<String> = moved
        .iter()
        .map(|(body, house)| format!("{} is in the {} House", body.name(), ordinal(*house as u32)))
        .collect();
    let joined = if items.len() > 1 {
        format!(
            "{} and {}",
            items[..items.len() - 1].join(", "),
            items[items.len() - 1]
        )
    } else {
        items[0].clone()
    };
    Some(format!(
        "*{joined}, but because they are at less than 5\u{ba} from the next house, \
         they are considered to have their major influence and effects in the house \
         that follows."
    ))
}
