//! Client-side order-number suggestion.
//!
//! `P-` plus four digits, offered as a default for new orders. The backend
//! stays the authority on uniqueness; a collision comes back as a rejected
//! create, never a silent retry.

/// Random suggestion in `P-1000`..=`P-9999`.
pub fn generate_order_number() -> String {
    order_number_from(js_sys::Math::random())
}

/// Maps a unit float (`0.0 <= x < 1.0`) onto the number space. Split out so
/// the format can be checked without a browser entropy source.
fn order_number_from(unit: f64) -> String {
    let unit = unit.clamp(0.0, 1.0 - f64::EPSILON);
    let number = 1000 + (unit * 9000.0) as u32;
    format!("P-{number}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn covers_full_range() {
        assert_eq!(order_number_from(0.0), "P-1000");
        assert_eq!(order_number_from(0.5), "P-5500");
        assert_eq!(order_number_from(0.999_999_9), "P-9999");
    }

    #[test]
    fn degenerate_inputs_stay_in_range() {
        assert_eq!(order_number_from(-1.0), "P-1000");
        assert_eq!(order_number_from(2.0), "P-9999");
    }

    #[test]
    fn matches_expected_pattern() {
        for unit in [0.0, 0.1, 0.25, 0.4999, 0.75, 0.9] {
            let number = order_number_from(unit);
            let digits = number.strip_prefix("P-").expect("P- prefix");
            assert_eq!(digits.len(), 4);
            let value: u32 = digits.parse().expect("four digits");
            assert!((1000..=9999).contains(&value));
        }
    }
}
