//! Parsing of free-text model replies into minute estimates.
//!
//! Best-effort: the first integer in the reply wins, anything that is not a
//! strictly positive `u32` yields no estimate.

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

/// First run of decimal digits.
static CANDIDATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+").expect("valid candidate pattern"));

/// Extract a strictly positive minute count from a model reply.
///
/// Returns `None` when the reply is absent, has no digits, or the first
/// candidate is zero, negative, or too large for `u32`.
pub fn parse_minutes(reply: Option<&str>) -> Option<u32> {
    let text = reply.unwrap_or_default();
    let candidate = CANDIDATE.find(text)?;
    if is_minus_sign(&text[..candidate.start()]) {
        return None;
    }
    candidate
        .as_str()
        .parse::<u32>()
        .ok()
        .filter(|minutes| *minutes > 0)
}

/// A `-` right before the digits is a sign only at the start of the reply or
/// after a non-word character ("-5", "is -5"), not inside a word ("T-5", "GPT-4").
fn is_minus_sign(before_digits: &str) -> bool {
    let Some(rest) = before_digits.strip_suffix('-') else {
        return false;
    };
    rest.chars()
        .next_back()
        .is_none_or(|c| !(c.is_alphanumeric() || c == '_' || c == '-'))
}

/// Outcome of a single estimation call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Estimation {
    /// The reply contained a positive integer.
    Parsed(u32),
    /// The service answered, but nothing usable was in the reply.
    Unparseable,
    /// The service call failed or timed out.
    Unavailable(String),
}

impl Estimation {
    /// Minutes to show and store. Everything but `Parsed` degrades to 0.
    pub fn minutes(&self) -> u32 {
        match self {
            Estimation::Parsed(minutes) => *minutes,
            Estimation::Unparseable | Estimation::Unavailable(_) => 0,
        }
    }

    pub fn is_unavailable(&self) -> bool {
        matches!(self, Estimation::Unavailable(_))
    }
}

impl From<Option<u32>> for Estimation {
    fn from(parsed: Option<u32>) -> Self {
        parsed.map_or(Estimation::Unparseable, Estimation::Parsed)
    }
}

impl fmt::Display for Estimation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Estimation::Parsed(minutes) => write!(f, "{} min", minutes),
            Estimation::Unparseable => write!(f, "0 min (unparseable reply)"),
            Estimation::Unavailable(reason) => write!(f, "0 min (unavailable: {})", reason),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bare_number() {
        assert_eq!(parse_minutes(Some("42")), Some(42));
    }

    #[test]
    fn test_parse_first_digit_run() {
        assert_eq!(parse_minutes(Some("about 7 minutes")), Some(7));
        assert_eq!(parse_minutes(Some("7 or maybe 30")), Some(7));
        assert_eq!(parse_minutes(Some("007")), Some(7));
        assert_eq!(parse_minutes(Some("1.5 hours")), Some(1));
    }

    #[test]
    fn test_parse_no_digits() {
        assert_eq!(parse_minutes(Some("I cannot determine this")), None);
        assert_eq!(parse_minutes(Some("")), None);
        assert_eq!(parse_minutes(None), None);
    }

    #[test]
    fn test_parse_rejects_non_positive() {
        assert_eq!(parse_minutes(Some("-5")), None);
        assert_eq!(parse_minutes(Some("0")), None);
        assert_eq!(parse_minutes(Some("minus -12 minutes")), None);
        assert_eq!(parse_minutes(Some("(-3)")), None);
    }

    #[test]
    fn test_parse_hyphen_inside_word_is_not_a_sign() {
        assert_eq!(parse_minutes(Some("T-5 minutes")), Some(5));
        assert_eq!(parse_minutes(Some("Estimate (GPT-4): 30")), Some(4));
        assert_eq!(parse_minutes(Some("re_-9")), Some(9));
    }

    #[test]
    fn test_parse_ignores_non_ascii_digits() {
        assert_eq!(parse_minutes(Some("٣ then 8")), Some(8));
    }

    #[test]
    fn test_parse_hyphenated_range_takes_first() {
        // "10-15" matches "10" first, the "-15" run is never looked at
        assert_eq!(parse_minutes(Some("10-15")), Some(10));
    }

    #[test]
    fn test_parse_overflow_rejected() {
        assert_eq!(parse_minutes(Some("99999999999999999999")), None);
    }

    #[test]
    fn test_parse_tolerates_control_chars_and_long_text() {
        assert_eq!(parse_minutes(Some("\u{0}\t\r\n 25\u{7f}")), Some(25));
        let long = format!("{}3", "x".repeat(100_000));
        assert_eq!(parse_minutes(Some(&long)), Some(3));
    }

    #[test]
    fn test_estimation_display() {
        assert_eq!(Estimation::Parsed(12).to_string(), "12 min");
        assert_eq!(
            Estimation::Unavailable("timed out".into()).to_string(),
            "0 min (unavailable: timed out)"
        );
    }

    #[test]
    fn test_estimation_minutes() {
        assert_eq!(Estimation::Parsed(12).minutes(), 12);
        assert_eq!(Estimation::Unparseable.minutes(), 0);
        assert_eq!(Estimation::Unavailable("down".into()).minutes(), 0);
        assert_eq!(Estimation::from(None), Estimation::Unparseable);
        assert_eq!(Estimation::from(Some(3)), Estimation::Parsed(3));
    }
}
