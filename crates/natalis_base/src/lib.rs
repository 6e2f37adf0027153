//! Shared primitives for natal chart computation.
//!
//! This crate provides:
//! - Ecliptic angle math (normalization, DMS, ordinal formatting)
//! - The 12 tropical zodiac signs with their classical attribute table
//! - The celestial body enumeration with the influence-point weight table
//!
//! Everything here is pure data and total functions; no I/O, no errors.

pub mod angle;
pub mod body;
pub mod sign;

pub use angle::{Dms, deg_to_dms, dms_to_deg, normalize_360, ordinal};
pub use body::{ALL_BODIES, BODY_COUNT, CelestialBody, EPHEMERIS_BODIES, WeightTable};
pub use sign::{
    ALL_SIGNS, Element, Modality, Moisture, Polarity, SignAttributeTable, SignAttributes,
    SignInfo, Temperament, Temperature, ZodiacSign, sign_from_longitude,
};
