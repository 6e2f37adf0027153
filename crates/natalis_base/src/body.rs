//! Celestial body enumeration and the influence-point weight table.
//!
//! The 17 bodies fall into three groups: the two chart angles (Ascendant,
//! Midheaven), the 13 tracked ephemeris bodies (Sun through Chiron), and
//! the two derived points (South Node, Part of Fortune) computed by the
//! chart builder rather than supplied by the ephemeris provider.
//!
//! `ALL_BODIES` fixes the enumeration order used everywhere a chart is
//! walked: aspect listings, summary rows and position reports all follow
//! it so output is deterministic.

/// Every point placed on a natal chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CelestialBody {
    Ascendant,
    Midheaven,
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
    NorthNode,
    Lilith,
    Chiron,
    SouthNode,
    PartOfFortune,
}

/// Number of chart bodies.
pub const BODY_COUNT: usize = 17;

/// All bodies in chart enumeration order (angles, ephemeris bodies,
/// derived points).
pub const ALL_BODIES: [CelestialBody; BODY_COUNT] = [
    CelestialBody::Ascendant,
    CelestialBody::Midheaven,
    CelestialBody::Sun,
    CelestialBody::Moon,
    CelestialBody::Mercury,
    CelestialBody::Venus,
    CelestialBody::Mars,
    CelestialBody::Jupiter,
    CelestialBody::Saturn,
    CelestialBody::Uranus,
    CelestialBody::Neptune,
    CelestialBody::Pluto,
    CelestialBody::NorthNode,
    CelestialBody::Lilith,
    CelestialBody::Chiron,
    CelestialBody::SouthNode,
    CelestialBody::PartOfFortune,
];

/// The 13 bodies whose longitude and speed come from the ephemeris
/// provider. North Node is the true node; Lilith the mean lunar apogee.
pub const EPHEMERIS_BODIES: [CelestialBody; 13] = [
    CelestialBody::Sun,
    CelestialBody::Moon,
    CelestialBody::Mercury,
    CelestialBody::Venus,
    CelestialBody::Mars,
    CelestialBody::Jupiter,
    CelestialBody::Saturn,
    CelestialBody::Uranus,
    CelestialBody::Neptune,
    CelestialBody::Pluto,
    CelestialBody::NorthNode,
    CelestialBody::Lilith,
    CelestialBody::Chiron,
];

impl CelestialBody {
    /// English name of the body.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ascendant => "Ascendant",
            Self::Midheaven => "Midheaven",
            Self::Sun => "Sun",
            Self::Moon => "Moon",
            Self::Mercury => "Mercury",
            Self::Venus => "Venus",
            Self::Mars => "Mars",
            Self::Jupiter => "Jupiter",
            Self::Saturn => "Saturn",
            Self::Uranus => "Uranus",
            Self::Neptune => "Neptune",
            Self::Pluto => "Pluto",
            Self::NorthNode => "North Node",
            Self::Lilith => "Lilith",
            Self::Chiron => "Chiron",
            Self::SouthNode => "South Node",
            Self::PartOfFortune => "Part of Fortune",
        }
    }

    /// Astrological glyph for table rows (AC/MC for the angles).
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Ascendant => "AC",
            Self::Midheaven => "MC",
            Self::Sun => "\u{2609}",
            Self::Moon => "\u{263D}",
            Self::Mercury => "\u{263F}",
            Self::Venus => "\u{2640}",
            Self::Mars => "\u{2642}",
            Self::Jupiter => "\u{2643}",
            Self::Saturn => "\u{2644}",
            Self::Uranus => "\u{2645}",
            Self::Neptune => "\u{2646}",
            Self::Pluto => "\u{2647}",
            Self::NorthNode => "\u{260A}",
            Self::Lilith => "\u{26B8}",
            Self::Chiron => "\u{26B7}",
            Self::SouthNode => "\u{260B}",
            Self::PartOfFortune => "\u{2297}",
        }
    }

    /// 0-based index into [`ALL_BODIES`].
    pub const fn index(self) -> u8 {
        match self {
            Self::Ascendant => 0,
            Self::Midheaven => 1,
            Self::Sun => 2,
            Self::Moon => 3,
            Self::Mercury => 4,
            Self::Venus => 5,
            Self::Mars => 6,
            Self::Jupiter => 7,
            Self::Saturn => 8,
            Self::Uranus => 9,
            Self::Neptune => 10,
            Self::Pluto => 11,
            Self::NorthNode => 12,
            Self::Lilith => 13,
            Self::Chiron => 14,
            Self::SouthNode => 15,
            Self::PartOfFortune => 16,
        }
    }

    /// Whether this body is a chart angle (Ascendant or Midheaven).
    pub const fn is_angle(self) -> bool {
        matches!(self, Self::Ascendant | Self::Midheaven)
    }

    /// Whether this body is derived by the chart builder rather than
    /// supplied by the ephemeris provider.
    pub const fn is_derived(self) -> bool {
        matches!(self, Self::SouthNode | Self::PartOfFortune)
    }

    /// Index into [`EPHEMERIS_BODIES`], or None for angles and derived
    /// points.
    pub const fn ephemeris_index(self) -> Option<usize> {
        match self {
            Self::Sun => Some(0),
            Self::Moon => Some(1),
            Self::Mercury => Some(2),
            Self::Venus => Some(3),
            Self::Mars => Some(4),
            Self::Jupiter => Some(5),
            Self::Saturn => Some(6),
            Self::Uranus => Some(7),
            Self::Neptune => Some(8),
            Self::Pluto => Some(9),
            Self::NorthNode => Some(10),
            Self::Lilith => Some(11),
            Self::Chiron => Some(12),
            Self::Ascendant
            | Self::Midheaven
            | Self::SouthNode
            | Self::PartOfFortune => None,
        }
    }

    /// All bodies in enumeration order.
    pub const fn all() -> &'static [CelestialBody; BODY_COUNT] {
        &ALL_BODIES
    }
}

/// Immutable body → influence-point table, injected into the statistics
/// engine. Zero-weight bodies never contribute to a distribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeightTable {
    points: [u8; BODY_COUNT],
}

impl WeightTable {
    /// The classical weighting: luminaries and Ascendant 4, personal
    /// planets 2, Midheaven and outer planets 1, nodes and derived
    /// points 0. Totals 24 for a complete chart.
    pub const fn classical() -> Self {
        let mut points = [0u8; BODY_COUNT];
        points[CelestialBody::Sun.index() as usize] = 4;
        points[CelestialBody::Moon.index() as usize] = 4;
        points[CelestialBody::Ascendant.index() as usize] = 4;
        points[CelestialBody::Midheaven.index() as usize] = 1;
        points[CelestialBody::Mercury.index() as usize] = 2;
        points[CelestialBody::Venus.index() as usize] = 2;
        points[CelestialBody::Mars.index() as usize] = 2;
        points[CelestialBody::Jupiter.index() as usize] = 1;
        points[CelestialBody::Saturn.index() as usize] = 1;
        points[CelestialBody::Uranus.index() as usize] = 1;
        points[CelestialBody::Neptune.index() as usize] = 1;
        points[CelestialBody::Pluto.index() as usize] = 1;
        Self { points }
    }

    /// Influence points for one body.
    pub const fn points(&self, body: CelestialBody) -> u8 {
        self.points[body.index() as usize]
    }
}

impl Default for WeightTable {
    fn default() -> Self {
        Self::classical()
    }
}
