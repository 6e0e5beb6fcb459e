//! Duration input parsing.

use thiserror::Error;

// Above this an f64 no longer holds every whole number, so "1e16"-style
// input may already have been rounded by the parse.
const MAX_EXACT_FLOAT: f64 = 9_007_199_254_740_992.0;

/// Why a duration entry was rejected.
///
/// The countdown never shows these to the user; an invalid entry simply
/// leaves the widget as it was. They are returned from
/// [`Model::set_duration`](super::Model::set_duration) for callers that want
/// to know.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DurationError {
    /// Nothing but whitespace was entered.
    #[error("no duration entered")]
    Empty,
    /// The text is not a number.
    #[error("{0:?} is not a number")]
    NotANumber(String),
    /// The number has a fractional part.
    #[error("{0:?} is not a whole number of seconds")]
    NotInteger(String),
    /// The number is zero or negative.
    #[error("duration must be positive, got {0}")]
    NotPositive(String),
    /// The number does not fit in the seconds counter.
    #[error("{0:?} is too large")]
    OutOfRange(String),
}

/// Parses raw entry text into a positive number of seconds.
///
/// Surrounding whitespace and a leading `+` are accepted.
///
/// ```rust
/// use bubbletea_countdown::countdown::{parse_duration, DurationError};
///
/// assert_eq!(parse_duration(" 65 "), Ok(65));
/// assert_eq!(parse_duration("0"), Err(DurationError::NotPositive("0".into())));
/// assert!(parse_duration("abc").is_err());
/// ```
pub fn parse_duration(input: &str) -> Result<u64, DurationError> {
    let text = input.trim();
    if text.is_empty() {
        return Err(DurationError::Empty);
    }

    match text.parse::<i64>() {
        Ok(secs) if secs > 0 => return Ok(secs as u64),
        Ok(_) => return Err(DurationError::NotPositive(text.to_string())),
        Err(_) => {}
    }

    // "10.0" and "1e2" are whole numbers too.
    let value = text
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| DurationError::NotANumber(text.to_string()))?;

    if value <= 0.0 {
        Err(DurationError::NotPositive(text.to_string()))
    } else if value.fract() != 0.0 {
        Err(DurationError::NotInteger(text.to_string()))
    } else if value >= MAX_EXACT_FLOAT {
        Err(DurationError::OutOfRange(text.to_string()))
    } else {
        Ok(value as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_positive_integers() {
        assert_eq!(parse_duration("1"), Ok(1));
        assert_eq!(parse_duration("65"), Ok(65));
        assert_eq!(parse_duration("+30"), Ok(30));
        assert_eq!(parse_duration("  3600\n"), Ok(3600));
        assert_eq!(parse_duration("10.0"), Ok(10));
        assert_eq!(parse_duration("1e2"), Ok(100));
    }

    #[test]
    fn test_rejects_empty() {
        assert_eq!(parse_duration(""), Err(DurationError::Empty));
        assert_eq!(parse_duration("   "), Err(DurationError::Empty));
    }

    #[test]
    fn test_rejects_non_positive() {
        assert_eq!(parse_duration("0"), Err(DurationError::NotPositive("0".into())));
        assert_eq!(parse_duration("-3"), Err(DurationError::NotPositive("-3".into())));
        assert_eq!(
            parse_duration("-2.5"),
            Err(DurationError::NotPositive("-2.5".into()))
        );
    }

    #[test]
    fn test_rejects_fractions() {
        assert_eq!(
            parse_duration("2.5"),
            Err(DurationError::NotInteger("2.5".into()))
        );
    }

    #[test]
    fn test_rejects_garbage() {
        assert_eq!(
            parse_duration("ten"),
            Err(DurationError::NotANumber("ten".into()))
        );
        assert_eq!(
            parse_duration("inf"),
            Err(DurationError::NotANumber("inf".into()))
        );
        assert_eq!(
            parse_duration("NaN"),
            Err(DurationError::NotANumber("NaN".into()))
        );
    }

    #[test]
    fn test_rejects_overflow() {
        assert_eq!(
            parse_duration("99999999999999999999"),
            Err(DurationError::OutOfRange("99999999999999999999".into()))
        );
        // One past i64::MAX.
        assert_eq!(
            parse_duration("9223372036854775808"),
            Err(DurationError::OutOfRange("9223372036854775808".into()))
        );
    }

    #[test]
    fn test_rejects_float_form_that_would_round() {
        assert_eq!(
            parse_duration("9007199254740993.0"),
            Err(DurationError::OutOfRange("9007199254740993.0".into()))
        );
        assert_eq!(
            parse_duration("1e16"),
            Err(DurationError::OutOfRange("1e16".into()))
        );
        assert_eq!(parse_duration("9007199254740991.0"), Ok(9_007_199_254_740_991));
        // Plain integers stay exact all the way to i64::MAX.
        assert_eq!(parse_duration("9007199254740993"), Ok(9_007_199_254_740_993));
        assert_eq!(parse_duration("9223372036854775807"), Ok(i64::MAX as u64));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(DurationError::Empty.to_string(), "no duration entered");
        assert_eq!(
            DurationError::NotPositive("-3".into()).to_string(),
            "duration must be positive, got -3"
        );
    }
}
