//! Tropical zodiac signs and the classical sign attribute table.
//!
//! The ecliptic is divided into 12 equal signs of 30 degrees each,
//! starting from Aries at 0 deg. Each sign carries a fixed six-fold
//! classical attribution: temperature, moisture, temperament, element,
//! modality and polarity. These drive the weighted statistics engine.

use crate::angle::{Dms, deg_to_dms, normalize_360};

/// The 12 tropical zodiac signs starting from Aries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

/// All 12 signs in zodiacal order (0 = Aries, 11 = Pisces).
pub const ALL_SIGNS: [ZodiacSign; 12] = [
    ZodiacSign::Aries,
    ZodiacSign::Taurus,
    ZodiacSign::Gemini,
    ZodiacSign::Cancer,
    ZodiacSign::Leo,
    ZodiacSign::Virgo,
    ZodiacSign::Libra,
    ZodiacSign::Scorpio,
    ZodiacSign::Sagittarius,
    ZodiacSign::Capricorn,
    ZodiacSign::Aquarius,
    ZodiacSign::Pisces,
];

impl ZodiacSign {
    /// English name of the sign.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Aries => "Aries",
            Self::Taurus => "Taurus",
            Self::Gemini => "Gemini",
            Self::Cancer => "Cancer",
            Self::Leo => "Leo",
            Self::Virgo => "Virgo",
            Self::Libra => "Libra",
            Self::Scorpio => "Scorpio",
            Self::Sagittarius => "Sagittarius",
            Self::Capricorn => "Capricorn",
            Self::Aquarius => "Aquarius",
            Self::Pisces => "Pisces",
        }
    }

    /// 0-based index (Aries=0 .. Pisces=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Aries => 0,
            Self::Taurus => 1,
            Self::Gemini => 2,
            Self::Cancer => 3,
            Self::Leo => 4,
            Self::Virgo => 5,
            Self::Libra => 6,
            Self::Scorpio => 7,
            Self::Sagittarius => 8,
            Self::Capricorn => 9,
            Self::Aquarius => 10,
            Self::Pisces => 11,
        }
    }

    /// All 12 signs in order.
    pub const fn all() -> &'static [ZodiacSign; 12] {
        &ALL_SIGNS
    }
}

/// Full sign position result for an ecliptic longitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignInfo {
    /// The zodiac sign.
    pub sign: ZodiacSign,
    /// 0-based sign index (0 = Aries).
    pub sign_index: u8,
    /// Position within the sign as DMS.
    pub dms: Dms,
    /// Decimal degrees within the sign [0.0, 30.0).
    pub degrees_in_sign: f64,
}

/// Determine the zodiac sign from a tropical ecliptic longitude.
///
/// Each sign spans exactly 30 degrees: Aries = [0, 30), Taurus = [30, 60), etc.
pub fn sign_from_longitude(lon_deg: f64) -> SignInfo {
    let lon = normalize_360(lon_deg);
    let sign_idx = (lon / 30.0).floor() as u8;
    // Clamp to 11 in case of floating point edge (exactly 360.0)
    let sign_idx = sign_idx.min(11);
    let degrees_in_sign = lon - (sign_idx as f64) * 30.0;
    let sign = ALL_SIGNS[sign_idx as usize];
    let dms = deg_to_dms(degrees_in_sign);

    SignInfo {
        sign,
        sign_index: sign_idx,
        dms,
        degrees_in_sign,
    }
}

/// Temperature axis of the classical qualities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Temperature {
    Hot,
    Cold,
}

/// Moisture axis of the classical qualities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Moisture {
    Wet,
    Dry,
}

/// The four classical temperaments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Temperament {
    Choleric,
    Melancholic,
    Sanguine,
    Phlegmatic,
}

/// The four elements (triplicities).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

/// The three modalities (quadruplicities).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Modality {
    Cardinal,
    Fixed,
    Mutable,
}

/// Yang/Yin polarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Polarity {
    Yang,
    Yin,
}

impl Temperature {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Hot => "Hot",
            Self::Cold => "Cold",
        }
    }
}

impl Moisture {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Wet => "Wet",
            Self::Dry => "Dry",
        }
    }
}

impl Temperament {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Choleric => "Choleric",
            Self::Melancholic => "Melancholic",
            Self::Sanguine => "Sanguine",
            Self::Phlegmatic => "Phlegmatic",
        }
    }
}

impl Element {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Fire => "Fire",
            Self::Earth => "Earth",
            Self::Air => "Air",
            Self::Water => "Water",
        }
    }
}

impl Modality {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Cardinal => "Cardinal",
            Self::Fixed => "Fixed",
            Self::Mutable => "Mutable",
        }
    }
}

impl Polarity {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Yang => "Yang",
            Self::Yin => "Yin",
        }
    }
}

/// The six-fold classical attribution of one sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignAttributes {
    pub temperature: Temperature,
    pub moisture: Moisture,
    pub temperament: Temperament,
    pub element: Element,
    pub modality: Modality,
    pub polarity: Polarity,
}

/// Immutable sign → attributes table, injected into the statistics engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignAttributeTable {
    attrs: [SignAttributes; 12],
}

impl SignAttributeTable {
    /// The classical attribution: fire signs hot and dry, water signs
    /// cold and wet, and so on, cycling through the modalities.
    pub const fn classical() -> Self {
        use Element::*;
        use Modality::*;
        use Moisture::*;
        use Polarity::*;
        use Temperament::*;
        use Temperature::*;

        const fn attrs(
            temperature: Temperature,
            moisture: Moisture,
            temperament: Temperament,
            element: Element,
            modality: Modality,
            polarity: Polarity,
        ) -> SignAttributes {
            SignAttributes {
                temperature,
                moisture,
                temperament,
                element,
                modality,
                polarity,
            }
        }

        Self {
            attrs: [
                attrs(Hot, Dry, Choleric, Fire, Cardinal, Yang),      // Aries
                attrs(Cold, Dry, Melancholic, Earth, Fixed, Yin),     // Taurus
                attrs(Hot, Wet, Sanguine, Air, Mutable, Yang),        // Gemini
                attrs(Cold, Wet, Phlegmatic, Water, Cardinal, Yin),   // Cancer
                attrs(Hot, Dry, Choleric, Fire, Fixed, Yang),         // Leo
                attrs(Cold, Dry, Melancholic, Earth, Mutable, Yin),   // Virgo
                attrs(Hot, Wet, Sanguine, Air, Cardinal, Yang),       // Libra
                attrs(Cold, Wet, Phlegmatic, Water, Fixed, Yin),      // Scorpio
                attrs(Hot, Dry, Choleric, Fire, Mutable, Yang),       // Sagittarius
                attrs(Cold, Dry, Melancholic, Earth, Cardinal, Yin),  // Capricorn
                attrs(Hot, Wet, Sanguine, Air, Fixed, Yang),          // Aquarius
                attrs(Cold, Wet, Phlegmatic, Water, Mutable, Yin),    // Pisces
            ],
        }
    }

    /// Attributes of one sign.
    pub const fn get(&self, sign: ZodiacSign) -> SignAttributes {
        self.attrs[sign.index() as usize]
    }
}

impl Default for SignAttributeTable {
    fn default() -> Self {
        Self::classical()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_signs_count() {
        assert_eq!(ALL_SIGNS.len(), 12);
    }

    #[test]
    fn sign_indices_sequential() {
        for (i, s) in ALL_SIGNS.iter().enumerate() {
            assert_eq!(s.index() as usize, i);
        }
    }

    #[test]
    fn sign_names_nonempty() {
        for s in ALL_SIGNS {
            assert!(!s.name().is_empty());
        }
    }

    #[test]
    fn sign_boundary_0() {
        let info = sign_from_longitude(0.0);
        assert_eq!(info.sign, ZodiacSign::Aries);
        assert_eq!(info.sign_index, 0);
        assert!(info.degrees_in_sign.abs() < 1e-10);
    }

    #[test]
    fn sign_all_boundaries() {
        for i in 0..12u8 {
            let lon = i as f64 * 30.0;
            let info = sign_from_longitude(lon);
            assert_eq!(info.sign_index, i, "boundary at {lon} deg");
        }
    }

    #[test]
    fn sign_mid() {
        let info = sign_from_longitude(45.5);
        assert_eq!(info.sign, ZodiacSign::Taurus);
        assert!((info.degrees_in_sign - 15.5).abs() < 1e-10);
    }

    #[test]
    fn sign_wrap_around() {
        let info = sign_from_longitude(365.0);
        assert_eq!(info.sign, ZodiacSign::Aries);
        assert!((info.degrees_in_sign - 5.0).abs() < 1e-10);
    }

    #[test]
    fn sign_negative() {
        let info = sign_from_longitude(-10.0);
        assert_eq!(info.sign, ZodiacSign::Pisces); // 350 deg
        assert!((info.degrees_in_sign - 20.0).abs() < 1e-10);
    }

    #[test]
    fn sign_dms_within_sign() {
        // 45.5 deg → Taurus, 15 deg 30' 0"
        let info = sign_from_longitude(45.5);
        assert_eq!(info.dms.degrees, 15);
        assert_eq!(info.dms.minutes, 30);
        assert!(info.dms.seconds.abs() < 0.01);
    }

    #[test]
    fn classical_attrs_aries() {
        let t = SignAttributeTable::classical();
        let a = t.get(ZodiacSign::Aries);
        assert_eq!(a.temperature, Temperature::Hot);
        assert_eq!(a.moisture, Moisture::Dry);
        assert_eq!(a.temperament, Temperament::Choleric);
        assert_eq!(a.element, Element::Fire);
        assert_eq!(a.modality, Modality::Cardinal);
        assert_eq!(a.polarity, Polarity::Yang);
    }

    #[test]
    fn classical_attrs_pisces() {
        let t = SignAttributeTable::classical();
        let a = t.get(ZodiacSign::Pisces);
        assert_eq!(a.temperature, Temperature::Cold);
        assert_eq!(a.moisture, Moisture::Wet);
        assert_eq!(a.temperament, Temperament::Phlegmatic);
        assert_eq!(a.element, Element::Water);
        assert_eq!(a.modality, Modality::Mutable);
        assert_eq!(a.polarity, Polarity::Yin);
    }

    #[test]
    fn element_matches_temperament() {
        // Fire ↔ Choleric, Earth ↔ Melancholic, Air ↔ Sanguine, Water ↔ Phlegmatic
        let t = SignAttributeTable::classical();
        for s in ALL_SIGNS {
            let a = t.get(s);
            let expected = match a.element {
                Element::Fire => Temperament::Choleric,
                Element::Earth => Temperament::Melancholic,
                Element::Air => Temperament::Sanguine,
                Element::Water => Temperament::Phlegmatic,
            };
            assert_eq!(a.temperament, expected, "{}", s.name());
        }
    }

    #[test]
    fn polarity_matches_temperature() {
        // Fire/Air signs are hot and yang; Earth/Water signs cold and yin.
        let t = SignAttributeTable::classical();
        for s in ALL_SIGNS {
            let a = t.get(s);
            match a.temperature {
                Temperature::Hot => assert_eq!(a.polarity, Polarity::Yang, "{}", s.name()),
                Temperature::Cold => assert_eq!(a.polarity, Polarity::Yin, "{}", s.name()),
            }
        }
    }

    #[test]
    fn modalities_cycle() {
        let t = SignAttributeTable::classical();
        for (i, s) in ALL_SIGNS.iter().enumerate() {
            let expected = match i % 3 {
                0 => Modality::Cardinal,
                1 => Modality::Fixed,
                _ => Modality::Mutable,
            };
            assert_eq!(t.get(*s).modality, expected, "{}", s.name());
        }
    }
}
