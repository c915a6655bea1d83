//! Strict integer token grammar for the SPTX text format
//!
//! The accepted grammar is deliberately narrower than `str::parse`: an
//! optional leading `-`, then one or more ASCII digits, nothing else. No
//! leading `+`, no interior whitespace, no exponent or decimal notation.

/// Parse a signed integer token under the strict grammar
///
/// Returns `None` for anything outside the grammar, including the empty
/// string, a lone `-`, and values that overflow `i64`.
pub fn parse_int(s: &str) -> Option<i64> {
    let bytes = s.as_bytes();
    let (negative, digits) = match bytes.first()? {
        b'-' => (true, &bytes[1..]),
        _ => (false, bytes),
    };

    if digits.is_empty() {
        return None;
    }

    // Accumulate on the negative side so i64::MIN stays representable
    let mut result: i64 = 0;
    for &byte in digits {
        if !byte.is_ascii_digit() {
            return None;
        }

        let digit = (byte - b'0') as i64;
        result = result.checked_mul(10)?.checked_sub(digit)?;
    }

    if negative {
        Some(result)
    } else {
        result.checked_neg()
    }
}

/// Parse a non-negative integer token (dimensions and coordinates)
///
/// Same grammar as [`parse_int`]; negative values are rejected.
pub fn parse_index(s: &str) -> Option<usize> {
    usize::try_from(parse_int(s)?).ok()
}
