//! Belief-record parsing.
//!
//! The host hands each record over as a comma-delimited string of
//! `id:value` pairs. Parsing is deliberately forgiving: a piece that does
//! not split into exactly two parts is dropped, and a value that is not
//! numeric becomes a NaN marker. Nothing in this module ever fails.

use std::fmt;

/// An ordered mapping from sender id to belief value.
///
/// Iteration order is first-appearance order in the source string. The
/// first key is later used to select the sender, so order is load-bearing.
#[derive(Clone, Default, PartialEq)]
pub struct BeliefRecord {
    entries: Vec<(String, f64)>,
}

impl BeliefRecord {
    /// Parse an `id1:v1,id2:v2,...` string.
    ///
    /// A duplicate id updates the stored value but keeps its original
    /// position.
    pub fn parse(raw: &str) -> Self {
        let mut entries: Vec<(String, f64)> = Vec::new();
        for piece in raw.split(',') {
            let parts: Vec<&str> = piece.split(':').collect();
            if parts.len() != 2 {
                continue;
            }
            let id = parts[0].trim();
            let value = float_prefix(parts[1].trim());
            match entries.iter_mut().find(|(existing, _)| existing == id) {
                Some((_, slot)) => *slot = value,
                None => entries.push((id.to_string(), value)),
            }
        }
        Self { entries }
    }

    /// Value stored for `id`, if the id is present.
    pub fn get(&self, id: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == id)
            .map(|(_, value)| *value)
    }

    /// First id in source order.
    pub fn first_id(&self) -> Option<&str> {
        self.entries.first().map(|(id, _)| id.as_str())
    }

    /// Ids in source order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(id, _)| id.as_str())
    }

    /// `(id, value)` pairs in source order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(id, value)| (id.as_str(), *value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for BeliefRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.entries.iter().map(|(id, value)| (id, value)))
            .finish()
    }
}

/// Parse the longest leading float prefix of `s`.
///
/// Accepts an optional sign, digits, a decimal point, and an exponent
/// with its own optional sign. No digits at all yields NaN.
fn float_prefix(s: &str) -> f64 {
    let bytes = s.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }
    let mut saw_digit = false;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
        saw_digit = true;
    }
    if end < bytes.len() && bytes[end] == b'.' {
        end += 1;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
            saw_digit = true;
        }
    }
    if !saw_digit {
        return f64::NAN;
    }
    // An exponent only counts when at least one digit follows it.
    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > digits_start {
            end = exp_end;
        }
    }
    s[..end].parse().unwrap_or(f64::NAN)
}
