//! Benchmark mode selection from the mode argument.

use serde::Serialize;

/// Mode value that selects the hashing benchmark.
pub(crate) const HASH_MODE: i64 = 1;

/// Which pass to time.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub(crate) enum Mode {
    Hash,
    ReadOnly,
}

impl Mode {
    /// Select a mode from the raw argument. Anything other than `1`,
    /// including text with no leading digits, falls back to read-only.
    pub(crate) fn from_arg(value: &str) -> Self {
        if parse_leading_int(value) == HASH_MODE {
            Mode::Hash
        } else {
            Mode::ReadOnly
        }
    }
}

/// Lenient integer parse: leading whitespace, optional sign, then as many
/// digits as are present. No digits yields 0; overflow saturates.
pub(crate) fn parse_leading_int(value: &str) -> i64 {
    let trimmed = value.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let mut acc: i64 = 0;
    for byte in digits.bytes().take_while(u8::is_ascii_digit) {
        let digit = i64::from(byte - b'0');
        acc = if negative {
            acc.saturating_mul(10).saturating_sub(digit)
        } else {
            acc.saturating_mul(10).saturating_add(digit)
        };
    }
    acc
}
