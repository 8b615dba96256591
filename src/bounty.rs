//! Bounty normalization: loosely formatted API text to integers and back.

use serde_json::Value;

/// Tokens the bounty API uses for "no bounty known".
const ABSENT_TOKENS: [&str; 4] = ["?", "null", "None", "N/A"];

/// Code points of the digit zero of every Unicode decimal-digit (Nd) run.
/// Each run holds the digits 0 through 9 contiguously.
const DECIMAL_ZEROS: [u32; 68] = [
    0x30, 0x660, 0x6F0, 0x7C0, 0x966, 0x9E6, 0xA66, 0xAE6, 0xB66, 0xBE6, 0xC66, 0xCE6, 0xD66,
    0xDE6, 0xE50, 0xED0, 0xF20, 0x1040, 0x1090, 0x17E0, 0x1810, 0x1946, 0x19D0, 0x1A80, 0x1A90,
    0x1B50, 0x1BB0, 0x1C40, 0x1C50, 0xA620, 0xA8D0, 0xA900, 0xA9D0, 0xA9F0, 0xAA50, 0xABF0,
    0xFF10, 0x104A0, 0x10D30, 0x11066, 0x110F0, 0x11136, 0x111D0, 0x112F0, 0x11450, 0x114D0,
    0x11650, 0x116C0, 0x11730, 0x118E0, 0x11950, 0x11C50, 0x11D50, 0x11DA0, 0x11F50, 0x16A60,
    0x16AC0, 0x16B50, 0x1D7CE, 0x1D7D8, 0x1D7E2, 0x1D7EC, 0x1D7F6, 0x1E140, 0x1E2F0, 0x1E4F0,
    0x1E950, 0x1FBF0,
];

/// Value of a decimal digit in any script (`'7'`, `'７'`, `'٧'`), `None` for anything else.
fn decimal_value(c: char) -> Option<u64> {
    if c.is_ascii_digit() {
        return c.to_digit(10).map(u64::from);
    }
    if !c.is_numeric() {
        return None;
    }
    let cp = c as u32;
    let run = DECIMAL_ZEROS.partition_point(|&zero| zero <= cp);
    let zero = DECIMAL_ZEROS[run.checked_sub(1)?];
    let offset = cp - zero;
    (offset < 10).then_some(u64::from(offset))
}

/// Parses a bounty string such as `"3,000,000,000"`, `"3.000.000.000"` or `"¥2 500"`.
///
/// Every non-digit character is discarded, so any thousands separator works.
/// Decimal digits of any script count, e.g. full-width `"３,０００"`.
/// Returns `None` for empty input, the placeholder tokens, input without a
/// single digit, and values that overflow `u64`.
pub fn parse_bounty(raw: &str) -> Option<u64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || ABSENT_TOKENS.contains(&trimmed) {
        return None;
    }

    let mut digits = trimmed.chars().filter_map(decimal_value).peekable();
    digits.peek()?;
    digits.try_fold(0u64, |acc, digit| acc.checked_mul(10)?.checked_add(digit))
}

/// Normalizes the raw JSON `bounty` field, which may be a string, a number or null.
pub fn bounty_from_value(value: &Value) -> Option<u64> {
    match value {
        Value::Null => None,
        Value::String(s) => parse_bounty(s),
        Value::Number(n) => n.as_u64().or_else(|| parse_bounty(&n.to_string())),
        _ => None,
    }
}

/// Formats a bounty with comma thousands grouping (`1500000000` -> `"1,500,000,000"`).
pub fn format_bounty(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_grouped_digits() {
        assert_eq!(parse_bounty("3,000,000,000"), Some(3_000_000_000));
        assert_eq!(parse_bounty("3.000.000.000"), Some(3_000_000_000));
        assert_eq!(parse_bounty("3 000 000 000"), Some(3_000_000_000));
        assert_eq!(parse_bounty("¥2 500"), Some(2500));
        assert_eq!(parse_bounty("  42 "), Some(42));
    }

    #[test]
    fn test_parse_absent_values() {
        assert_eq!(parse_bounty(""), None);
        assert_eq!(parse_bounty("   "), None);
        assert_eq!(parse_bounty("N/A"), None);
        assert_eq!(parse_bounty("?"), None);
        assert_eq!(parse_bounty("null"), None);
        assert_eq!(parse_bounty("None"), None);
        assert_eq!(parse_bounty("---"), None);
        assert_eq!(parse_bounty("unknown"), None);
    }

    #[test]
    fn test_parse_unicode_digits() {
        assert_eq!(parse_bounty("３,０００"), Some(3000));
        assert_eq!(parse_bounty("٣٠٠"), Some(300));
        assert_eq!(parse_bounty("१,५००"), Some(1500));
        assert_eq!(parse_bounty("𝟑𝟎"), Some(30));
        // numeric but not decimal digits
        assert_eq!(parse_bounty("½"), None);
        assert_eq!(parse_bounty("Ⅻ"), None);
        assert_eq!(parse_bounty("5²"), Some(5));
    }

    #[test]
    fn test_parse_overflow_is_absent() {
        assert_eq!(parse_bounty("99999999999999999999999"), None);
    }

    #[test]
    fn test_bounty_from_value() {
        assert_eq!(bounty_from_value(&json!(null)), None);
        assert_eq!(bounty_from_value(&json!("1.500.000.000")), Some(1_500_000_000));
        assert_eq!(bounty_from_value(&json!(320000000)), Some(320_000_000));
        assert_eq!(bounty_from_value(&json!(true)), None);
        assert_eq!(bounty_from_value(&json!(["1"])), None);
    }

    #[test]
    fn test_format_bounty() {
        assert_eq!(format_bounty(0), "0");
        assert_eq!(format_bounty(999), "999");
        assert_eq!(format_bounty(1000), "1,000");
        assert_eq!(format_bounty(100_000), "100,000");
        assert_eq!(format_bounty(1_500_000_000), "1,500,000,000");
        assert_eq!(format_bounty(3_189_000_000), "3,189,000,000");
    }
}
