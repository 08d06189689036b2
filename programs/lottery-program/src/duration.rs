//! Duration parsing for the wizard's third step. Input is either one of the
//! fixed menu labels or free text matched by unit keyword, mirroring the
//! admin dialog this step drives.

use anchor_lang::prelude::*;

use crate::error::LotteryError;

pub const MIN_DURATION_SECS: i64 = 60;

const SECS_PER_MINUTE: i64 = 60;
const SECS_PER_HOUR: i64 = 60 * 60;
const SECS_PER_DAY: i64 = 24 * 60 * 60;

/// The fixed duration menu offered alongside free-text input.
const PRESETS: [(&str, i64); 7] = [
    ("1h", SECS_PER_HOUR),
    ("3h", 3 * SECS_PER_HOUR),
    ("6h", 6 * SECS_PER_HOUR),
    ("12h", 12 * SECS_PER_HOUR),
    ("1d", SECS_PER_DAY),
    ("3d", 3 * SECS_PER_DAY),
    ("7d", 7 * SECS_PER_DAY),
];

/// Parse a duration in seconds from menu labels or free text.
///
/// Free text is matched by unit keyword ("day", "hour", "min"); the first
/// digit run in the input is the magnitude. Text with no recognizable unit
/// is read as a bare day count. Anything under one minute is rejected.
pub fn parse_duration(input: &str) -> Result<i64> {
    let text = input.trim().to_lowercase();

    if let Some((_, secs)) = PRESETS.iter().find(|(label, _)| *label == text) {
        return Ok(*secs);
    }

    let secs = if text.contains("day") {
        scale(first_number(&text)?, SECS_PER_DAY)?
    } else if text.contains("hour") {
        scale(first_number(&text)?, SECS_PER_HOUR)?
    } else if text.contains("min") {
        scale(first_number(&text)?, SECS_PER_MINUTE)?
    } else {
        let days: i64 = text.parse().map_err(|_| LotteryError::InvalidDuration)?;
        scale(days, SECS_PER_DAY)?
    };

    require!(secs >= MIN_DURATION_SECS, LotteryError::DurationTooShort);
    Ok(secs)
}

fn scale(magnitude: i64, unit_secs: i64) -> Result<i64> {
    magnitude
        .checked_mul(unit_secs)
        .ok_or_else(|| LotteryError::InvalidDuration.into())
}

/// First run of ASCII digits in the text.
fn first_number(text: &str) -> Result<i64> {
    let start = text
        .find(|c: char| c.is_ascii_digit())
        .ok_or(LotteryError::InvalidDuration)?;
    let digits: &str = &text[start..];
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end]
        .parse()
        .map_err(|_| LotteryError::InvalidDuration.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_every_menu_preset() {
        assert_eq!(parse_duration("1h").unwrap(), 3_600);
        assert_eq!(parse_duration("3h").unwrap(), 10_800);
        assert_eq!(parse_duration("6h").unwrap(), 21_600);
        assert_eq!(parse_duration("12h").unwrap(), 43_200);
        assert_eq!(parse_duration("1d").unwrap(), 86_400);
        assert_eq!(parse_duration("3d").unwrap(), 259_200);
        assert_eq!(parse_duration("7d").unwrap(), 604_800);
    }

    #[test]
    fn parses_keyword_text() {
        assert_eq!(parse_duration("2 days").unwrap(), 2 * 86_400);
        assert_eq!(parse_duration("3 hours").unwrap(), 3 * 3_600);
        assert_eq!(parse_duration("90 minutes").unwrap(), 5_400);
        // keyword wins over position; first digit run is the magnitude
        assert_eq!(parse_duration("about 2 hours or so").unwrap(), 7_200);
    }

    #[test]
    fn bare_number_is_a_day_count() {
        assert_eq!(parse_duration("5").unwrap(), 5 * 86_400);
        assert_eq!(parse_duration(" 1 ").unwrap(), 86_400);
    }

    #[test]
    fn one_minute_is_the_floor() {
        assert_eq!(parse_duration("1 minute").unwrap(), 60);
        assert!(parse_duration("0 minutes").is_err());
    }

    #[test]
    fn rejects_unparseable_text() {
        assert!(parse_duration("soon").is_err());
        assert!(parse_duration("").is_err());
        assert!(parse_duration("hours").is_err());
    }

    #[test]
    fn rejects_nonpositive_bare_counts() {
        assert!(parse_duration("0").is_err());
        assert!(parse_duration("-3").is_err());
    }

    #[test]
    fn rejects_overflowing_magnitudes() {
        assert!(parse_duration("99999999999999999999 days").is_err());
    }
}
