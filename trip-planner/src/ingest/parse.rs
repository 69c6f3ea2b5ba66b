//! Field parsers for edge descriptions.

use super::ParseError;

/// Parse a price such as `12.50` or `£12.50`.
pub fn parse_cost(s: &str) -> Result<f64, ParseError> {
    let digits = s.trim().trim_start_matches('£').trim();
    digits
        .parse::<f64>()
        .ok()
        .filter(|cost| cost.is_finite())
        .ok_or_else(|| ParseError::Cost(s.to_string()))
}

/// Parse a duration such as `1h30m`, `2h` or `45m` into minutes.
///
/// The result must be positive.
pub fn parse_duration(s: &str) -> Result<u32, ParseError> {
    let err = || ParseError::Duration(s.to_string());
    let text = s.trim().to_ascii_lowercase();

    let (hours, rest) = match text.split_once('h') {
        Some((hours, rest)) => (parse_digits(hours).ok_or_else(err)?, rest),
        None => (0, text.as_str()),
    };
    let minutes = if rest.is_empty() {
        0
    } else {
        rest.strip_suffix('m')
            .and_then(parse_digits)
            .ok_or_else(err)?
    };

    let total = hours
        .checked_mul(60)
        .and_then(|h| h.checked_add(minutes))
        .ok_or_else(err)?;
    if total == 0 {
        return Err(err());
    }
    Ok(total)
}

/// Non-empty run of ASCII digits.
fn parse_digits(s: &str) -> Option<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn costs() {
        assert_eq!(parse_cost("12.5"), Ok(12.5));
        assert_eq!(parse_cost("£12.50"), Ok(12.5));
        assert_eq!(parse_cost(" £ 3 "), Ok(3.0));
        assert_eq!(parse_cost("0"), Ok(0.0));
    }

    #[test]
    fn invalid_costs() {
        assert!(parse_cost("").is_err());
        assert!(parse_cost("free").is_err());
        assert!(parse_cost("inf").is_err());
        assert_eq!(parse_cost("$5"), Err(ParseError::Cost("$5".into())));
    }

    #[test]
    fn durations() {
        assert_eq!(parse_duration("45m"), Ok(45));
        assert_eq!(parse_duration("2h"), Ok(120));
        assert_eq!(parse_duration("1h30m"), Ok(90));
        assert_eq!(parse_duration("1H05M"), Ok(65));
        assert_eq!(parse_duration(" 10m "), Ok(10));
    }

    #[test]
    fn invalid_durations() {
        assert!(parse_duration("").is_err());
        assert!(parse_duration("0m").is_err());
        assert!(parse_duration("0h0m").is_err());
        assert!(parse_duration("90").is_err());
        assert!(parse_duration("h30m").is_err());
        assert!(parse_duration("1h30").is_err());
        assert!(parse_duration("30m1h").is_err());
        assert!(parse_duration("-5m").is_err());
    }
}
