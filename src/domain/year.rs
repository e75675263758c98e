//! Season year tokens accepted by every `/{year}` endpoint.

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;
use thiserror::Error;

/// First Formula 1 world championship season.
pub const F1_MIN_YEAR: i32 = 1950;

/// First season covered by the live-timing (OpenF1) source.
pub const OPENF1_MIN_YEAR: i32 = 2023;

/// Path token meaning "the season in progress".
pub const CURRENT_SEASON: &str = "current";

static YEAR_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]{4}$").unwrap());

/// Latest season a client may ask for: next year's calendar is usually
/// published before the current season ends.
pub fn max_year(current_year: i32) -> i32 {
    current_year + 1
}

/// Rejection reasons for a year token. Both are client input errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum YearError {
    #[error("Invalid year format. Use 'current' or a 4-digit year (e.g. 2024).")]
    InvalidFormat,

    #[error("Year must be between {min} and {max}.")]
    OutOfRange { min: i32, max: i32 },
}

/// A validated year token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YearToken {
    Current,
    Season(i32),
}

impl YearToken {
    /// Concrete season number, substituting `current_year` for [`YearToken::Current`].
    pub fn resolve(&self, current_year: i32) -> i32 {
        match self {
            YearToken::Current => current_year,
            YearToken::Season(year) => *year,
        }
    }

    /// Whether the live-timing source has data for this token's resolved season.
    pub fn has_live_timing(&self, current_year: i32) -> bool {
        self.resolve(current_year) >= OPENF1_MIN_YEAR
    }
}

impl fmt::Display for YearToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            YearToken::Current => f.write_str(CURRENT_SEASON),
            YearToken::Season(year) => write!(f, "{}", year),
        }
    }
}

/// Validates a raw path token.
///
/// Rules are applied in order:
///
/// 1. `"current"` is always valid
/// 2. anything else must be exactly four ASCII digits
/// 3. the number must lie within `[F1_MIN_YEAR, current_year + 1]`
///
/// # Errors
///
/// Returns [`YearError::InvalidFormat`] for tokens such as `"99"`, `"20245"` or
/// `"abcd"`, and [`YearError::OutOfRange`] for well-formed years outside the range.
pub fn validate_year(token: &str, current_year: i32) -> Result<YearToken, YearError> {
    if token == CURRENT_SEASON {
        return Ok(YearToken::Current);
    }

    if !YEAR_REGEX.is_match(token) {
        return Err(YearError::InvalidFormat);
    }

    let year: i32 = token.parse().map_err(|_| YearError::InvalidFormat)?;
    let max = max_year(current_year);

    if !(F1_MIN_YEAR..=max).contains(&year) {
        return Err(YearError::OutOfRange {
            min: F1_MIN_YEAR,
            max,
        });
    }

    Ok(YearToken::Season(year))
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW: i32 = 2026;

    #[test]
    fn test_current_is_always_valid() {
        assert_eq!(validate_year("current", NOW), Ok(YearToken::Current));
        assert_eq!(validate_year("current", 1990), Ok(YearToken::Current));
    }

    #[test]
    fn test_range_bounds() {
        assert_eq!(validate_year("1950", NOW), Ok(YearToken::Season(1950)));
        assert_eq!(validate_year("2024", NOW), Ok(YearToken::Season(2024)));
        assert_eq!(validate_year("2027", NOW), Ok(YearToken::Season(2027)));
    }

    #[test]
    fn test_every_year_in_range_is_valid() {
        for year in F1_MIN_YEAR..=max_year(NOW) {
            let token = year.to_string();
            assert!(validate_year(&token, NOW).is_ok(), "{} rejected", token);
        }
    }

    #[test]
    fn test_out_of_range() {
        let err = validate_year("1949", NOW).unwrap_err();
        assert_eq!(err, YearError::OutOfRange { min: 1950, max: 2027 });
        assert_eq!(err.to_string(), "Year must be between 1950 and 2027.");

        assert!(matches!(
            validate_year("2028", NOW),
            Err(YearError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_malformed_tokens() {
        for token in ["99", "20245", "abcd", "", " 2024", "2024 ", "+202", "２０２４", "Current"] {
            let err = validate_year(token, NOW).unwrap_err();
            assert_eq!(err, YearError::InvalidFormat, "token {:?}", token);
            assert!(!err.to_string().is_empty());
        }
    }

    #[test]
    fn test_resolve_and_live_timing() {
        assert_eq!(YearToken::Current.resolve(NOW), NOW);
        assert_eq!(YearToken::Season(2010).resolve(NOW), 2010);

        assert!(YearToken::Current.has_live_timing(NOW));
        assert!(YearToken::Season(2023).has_live_timing(NOW));
        assert!(!YearToken::Season(2022).has_live_timing(NOW));
        assert!(!YearToken::Current.has_live_timing(2020));
    }

    #[test]
    fn test_display_round_trips_token() {
        assert_eq!(YearToken::Current.to_string(), "current");
        assert_eq!(YearToken::Season(1988).to_string(), "1988");
    }
}
