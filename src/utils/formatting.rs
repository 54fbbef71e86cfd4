//! Formatting utilities used for CLI and export outputs.
//! Every amount is rendered with exactly two decimals.

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

pub fn pad_right(s: &str, width: usize) -> String {
    format!("{:<width$}", s, width = width)
}

/// `1234.5` → `"1234.50"`
pub fn decimal(value: f64) -> String {
    // avoid printing "-0.00"
    let v = if value.abs() < 0.005 { 0.0 } else { value };
    format!("{:.2}", v)
}

/// `1234.5, "€"` → `"1234.50 €"`
pub fn money(value: f64, currency: &str) -> String {
    format!("{} {}", decimal(value), currency)
}

/// `12.5` → `"12.50 h"`
pub fn hours(value: f64) -> String {
    format!("{} h", decimal(value))
}

/// `80.0, "€"` → `"80.00 €/h"`
pub fn rate(value: f64, currency: &str) -> String {
    format!("{} {}/h", decimal(value), currency)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_decimal_formatting() {
        assert_eq!(money(10000.0, "€"), "10000.00 €");
        assert_eq!(hours(7.5), "7.50 h");
        assert_eq!(rate(-12.345, "€"), "-12.35 €/h");
        assert_eq!(decimal(-0.001), "0.00");
    }
}
