//! Line option parsing: `""`, `N`, or `N-M`.

use crate::error::Error;
use crate::types::LineRange;

/// Parse the `--line` option into a line range.
/// Surrounding whitespace is ignored; an empty option means no anchor.
///
/// # Errors
///
/// Returns `Error::InvalidLineSpec` for anything other than `N` or `N-M`
/// with decimal digits on both sides, including a dangling `3-`.
pub fn parse_line_spec(text: &str) -> Result<LineRange, Error> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(LineRange::Empty);
    }

    let invalid = || {
        return Error::InvalidLineSpec {
            spec: trimmed.to_string(),
        };
    };

    let Some((first, second)) = trimmed.split_once('-') else {
        return parse_line_number(trimmed).map(LineRange::Single).ok_or_else(invalid);
    };

    let start = parse_line_number(first).ok_or_else(invalid)?;
    let end = parse_line_number(second).ok_or_else(invalid)?;
    return Ok(LineRange::Span { end, start });
}

/// Parse a non-empty run of ASCII digits. Signs and overflow are rejected.
fn parse_line_number(digits: &str) -> Option<u64> {
    if digits.is_empty() || !digits.bytes().all(|b| return b.is_ascii_digit()) {
        return None;
    }
    return digits.parse().ok();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_means_no_anchor() {
        assert_eq!(parse_line_spec("").unwrap(), LineRange::Empty);
        assert_eq!(parse_line_spec("   ").unwrap(), LineRange::Empty);
    }

    #[test]
    fn single_line() {
        assert_eq!(parse_line_spec("3").unwrap(), LineRange::Single(3));
        assert_eq!(parse_line_spec(" 42 ").unwrap(), LineRange::Single(42));
    }

    #[test]
    fn line_span() {
        assert_eq!(
            parse_line_spec("3-10").unwrap(),
            LineRange::Span { start: 3, end: 10 }
        );
    }

    #[test]
    fn dangling_separator_is_rejected() {
        assert!(matches!(
            parse_line_spec("3-"),
            Err(Error::InvalidLineSpec { spec }) if spec == "3-"
        ));
    }

    #[test]
    fn malformed_specs_are_rejected() {
        for spec in ["-3", "a", "1-2-3", "+4", "1 - 2", "99999999999999999999999"] {
            assert!(parse_line_spec(spec).is_err(), "accepted {spec:?}");
        }
    }
}
