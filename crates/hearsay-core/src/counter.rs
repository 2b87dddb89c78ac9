//! Guessing-task counter carried across loop iterations.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Counter read from the `guessing_task_counter` embedded field.
///
/// The stored string is parsed as a leading base-10 integer; anything
/// unparseable becomes a NaN marker that renders as `NaN` wherever the
/// counter is displayed or written back. The counter is echoed, never
/// incremented, within a page pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskCounter(Option<i64>);

impl TaskCounter {
    /// Parse the stored field value.
    pub fn parse(raw: &str) -> Self {
        let s = raw.trim_start();
        let bytes = s.as_bytes();
        let mut end = 0;
        if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
            end = 1;
        }
        let digits_start = end;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
        if end == digits_start {
            return Self(None);
        }
        Self(s[..end].parse().ok())
    }

    /// The parsed value, `None` for the NaN marker.
    pub fn value(&self) -> Option<i64> {
        self.0
    }
}

impl fmt::Display for TaskCounter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(n) => write!(f, "{}", n),
            None => f.write_str("NaN"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_integers() {
        assert_eq!(TaskCounter::parse("3").value(), Some(3));
        assert_eq!(TaskCounter::parse("-4").value(), Some(-4));
        assert_eq!(TaskCounter::parse("+7").value(), Some(7));
    }

    #[test]
    fn parses_leading_digits_only() {
        assert_eq!(TaskCounter::parse("12abc").value(), Some(12));
        assert_eq!(TaskCounter::parse("0.7").value(), Some(0));
        assert_eq!(TaskCounter::parse(" 7 ").value(), Some(7));
    }

    #[test]
    fn unparseable_input_renders_nan() {
        assert_eq!(TaskCounter::parse("").to_string(), "NaN");
        assert_eq!(TaskCounter::parse("abc").to_string(), "NaN");
        assert_eq!(TaskCounter::parse("-").to_string(), "NaN");
    }

    #[test]
    fn displays_the_parsed_value() {
        assert_eq!(TaskCounter::parse("5").to_string(), "5");
    }
}
