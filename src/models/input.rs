//! Input coercion for calculator arguments
//!
//! Calculators accept plain numbers and never validate. Free-form input is
//! turned into those numbers here: strict parsing for command-line arguments
//! (where a typo should be reported), lenient coercion for tabular input such
//! as debt lists (where a blank cell means zero).

use super::money::Money;

/// Coerce free-form input to an amount, treating blank or invalid text as 0
///
/// Accepts everything `Money::parse` accepts plus plain decimals with more
/// than two fractional digits.
pub fn coerce_amount(input: &str) -> f64 {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return 0.0;
    }

    if let Ok(money) = Money::parse(trimmed) {
        // Money truncates to the cent; keep full precision when the text is a plain number
        return trimmed.parse::<f64>().ok().filter(|v| v.is_finite()).unwrap_or(money.as_f64());
    }

    trimmed
        .trim_end_matches('%')
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// Parse a percentage such as "6", "6.5" or "6.5%"
pub fn parse_percent(input: &str) -> Result<f64, String> {
    let trimmed = input.trim().trim_end_matches('%').trim();
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| format!("invalid percentage: '{}'", input))
}

/// Parse a currency amount such as "25000", "$25,000" or "1250.50"
pub fn parse_amount(input: &str) -> Result<f64, String> {
    Money::parse(input)
        .map(|m| m.as_f64())
        .map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coerce_blank_and_garbage_to_zero() {
        assert_eq!(coerce_amount(""), 0.0);
        assert_eq!(coerce_amount("   "), 0.0);
        assert_eq!(coerce_amount("n/a"), 0.0);
        assert_eq!(coerce_amount("NaN"), 0.0);
    }

    #[test]
    fn test_coerce_amounts() {
        assert_eq!(coerce_amount("1500"), 1500.0);
        assert_eq!(coerce_amount("$1,500.25"), 1500.25);
        assert_eq!(coerce_amount("18.99%"), 18.99);
        assert_eq!(coerce_amount("0.125"), 0.125);
    }

    #[test]
    fn test_parse_percent() {
        assert_eq!(parse_percent("6").unwrap(), 6.0);
        assert_eq!(parse_percent("6.5%").unwrap(), 6.5);
        assert!(parse_percent("six").is_err());
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("$25,000").unwrap(), 25000.0);
        assert!(parse_amount("lots").is_err());
    }
}
