//! Ecliptic angle math: normalization, DMS conversion, ordinal formatting.
//!
//! All angles in this workspace are tropical ecliptic longitudes in
//! decimal degrees, normalized to [0, 360). Signs, houses, aspects and
//! derived points are all defined on that circle.

/// Normalize an angle to [0, 360) degrees.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    if r < 0.0 { r + 360.0 } else { r }
}

/// Degrees-minutes-seconds representation of an angle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dms {
    /// Whole degrees (0..29 within a sign, or 0..359 standalone).
    pub degrees: u16,
    /// Arc-minutes (0..59).
    pub minutes: u8,
    /// Arc-seconds (0.0..60.0), may include fractional part.
    pub seconds: f64,
}

/// Convert decimal degrees to degrees-minutes-seconds.
///
/// Handles negative input by taking absolute value.
pub fn deg_to_dms(deg: f64) -> Dms {
    let d = deg.abs();
    let total_degrees = d.floor() as u16;
    let remainder = (d - total_degrees as f64) * 60.0;
    let minutes = remainder.floor() as u8;
    let seconds = (remainder - minutes as f64) * 60.0;
    Dms {
        degrees: total_degrees,
        minutes,
        seconds,
    }
}

/// Convert DMS back to decimal degrees.
pub fn dms_to_deg(dms: &Dms) -> f64 {
    dms.degrees as f64 + dms.minutes as f64 / 60.0 + dms.seconds / 3600.0
}

/// English ordinal for a house or chapter number: "1st", "2nd", ... "12th".
///
/// Follows the standard exception for 11-13 ("11th", not "11st").
pub fn ordinal(n: u32) -> String {
    let suffix = if (11..=13).contains(&(n % 100)) {
        "th"
    } else {
        match n % 10 {
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th",
        }
    };
    format!("{n}{suffix}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_zero() {
        assert!((normalize_360(0.0) - 0.0).abs() < 1e-15);
    }

    #[test]
    fn normalize_positive() {
        assert!((normalize_360(45.0) - 45.0).abs() < 1e-15);
    }

    #[test]
    fn normalize_360_wraps() {
        assert!((normalize_360(360.0) - 0.0).abs() < 1e-15);
    }

    #[test]
    fn normalize_negative() {
        assert!((normalize_360(-10.0) - 350.0).abs() < 1e-15);
    }

    #[test]
    fn normalize_large() {
        assert!((normalize_360(730.0) - 10.0).abs() < 1e-10);
    }

    #[test]
    fn normalize_large_negative() {
        assert!((normalize_360(-370.0) - 350.0).abs() < 1e-10);
    }

    #[test]
    fn normalize_idempotent() {
        for lon in [-720.5, -1.0, 0.0, 42.42, 359.999, 1234.5] {
            let once = normalize_360(lon);
            assert!(
                (normalize_360(once) - once).abs() < 1e-12,
                "normalize not idempotent for {lon}"
            );
            assert!((0.0..360.0).contains(&once), "out of range for {lon}");
        }
    }

    #[test]
    fn deg_to_dms_zero() {
        let d = deg_to_dms(0.0);
        assert_eq!(d.degrees, 0);
        assert_eq!(d.minutes, 0);
        assert!(d.seconds.abs() < 1e-10);
    }

    #[test]
    fn deg_to_dms_known() {
        // 23.853 deg = 23 deg 51' 10.8"
        let d = deg_to_dms(23.853);
        assert_eq!(d.degrees, 23);
        assert_eq!(d.minutes, 51);
        assert!((d.seconds - 10.8).abs() < 0.01);
    }

    #[test]
    fn deg_to_dms_exact_minutes() {
        // 10.5 deg = 10 deg 30' 0"
        let d = deg_to_dms(10.5);
        assert_eq!(d.degrees, 10);
        assert_eq!(d.minutes, 30);
        assert!(d.seconds.abs() < 0.01);
    }

    #[test]
    fn dms_round_trip() {
        let dms = deg_to_dms(123.456789);
        assert!((dms_to_deg(&dms) - 123.456789).abs() < 1e-9);
    }

    #[test]
    fn ordinal_basic() {
        assert_eq!(ordinal(1), "1st");
        assert_eq!(ordinal(2), "2nd");
        assert_eq!(ordinal(3), "3rd");
        assert_eq!(ordinal(4), "4th");
        assert_eq!(ordinal(10), "10th");
    }

    #[test]
    fn ordinal_teens() {
        assert_eq!(ordinal(11), "11th");
        assert_eq!(ordinal(12), "12th");
        assert_eq!(ordinal(13), "13th");
    }

    #[test]
    fn ordinal_past_teens() {
        assert_eq!(ordinal(21), "21st");
        assert_eq!(ordinal(22), "22nd");
        assert_eq!(ordinal(111), "111th");
    }
}
