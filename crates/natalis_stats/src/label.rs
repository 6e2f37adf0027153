//! Balance wording for two-way distributions.

/// Describes how strongly a two-way split leans.
///
/// `high_pct` is the percentage of the first category. Splits between
/// 45 and 55 inclusive read as balanced; past that, the leading side is
/// "Prominent" up to 69 and "Dominant" from 70.
pub fn balance_label(high_pct: u8, high: &str, low: &str) -> String {
    if (45..=55).contains(&high_pct) {
        return "Balanced".to_string();
    }
    if high_pct > 55 {
        if high_pct >= 70 {
            format!("Dominant {high}")
        } else {
            format!("Prominent {high}")
        }
    } else if 100 - high_pct >= 70 {
        format!("Dominant {low}")
    } else {
        format!("Prominent {low}")
    }
}
