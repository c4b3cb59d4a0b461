pub type Id = i32;

/// Parse a path identifier. The whole string must be an integer.
pub fn parse_id(raw: &str) -> Option<Id> {
    raw.trim().parse::<Id>().ok()
}

/// Lenient integer parse for query strings: skips leading whitespace, takes an
/// optional sign and the leading run of digits, ignores whatever follows.
///
/// `"12"` and `"12abc"` both give 12, `"abc"` and `""` give `None`.
pub fn parse_int_prefix(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let end = digits
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    // Overlong digit runs saturate instead of failing.
    let magnitude = digits[..end].parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}
