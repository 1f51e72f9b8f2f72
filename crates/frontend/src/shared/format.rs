//! Currency presentation helpers.

/// Format an amount the way the order screens display it: "R$ 100.00".
pub fn format_money(value: f64) -> String {
    format!("R$ {:.2}", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_two_decimals() {
        assert_eq!(format_money(100.0), "R$ 100.00");
        assert_eq!(format_money(0.01), "R$ 0.01");
        assert_eq!(format_money(12.5), "R$ 12.50");
    }

    #[test]
    fn rounds_half_up_visually() {
        assert_eq!(format_money(99.999), "R$ 100.00");
    }
}
