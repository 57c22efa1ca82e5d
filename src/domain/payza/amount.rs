//! Lenient decimal parsing for gateway amounts.
//!
//! Payza amounts are read as "longest leading numeric prefix, else zero":
//! `"12.5abc"` is 12.5, `"abc"` and `""` are 0.0. Bad data is never an error.

/// Parse the leading decimal number of `raw`, or 0.0 when there is none.
///
/// Accepts optional leading ASCII whitespace, an optional sign, digits with
/// an optional fractional part, and an optional exponent. A single `_` may
/// separate two digits. Parsing stops at the first character that does not
/// extend a valid number.
pub fn parse_lenient_decimal(raw: &str) -> f64 {
    let s = raw.trim_start_matches(|c: char| c.is_ascii_whitespace() || c == '\x0b');
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }

    let int_end = scan_digits(bytes, end);
    let int_digits = int_end - end;
    end = int_end;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        let frac_end = scan_digits(bytes, end + 1);
        frac_digits = frac_end - (end + 1);
        // "5." keeps the 5 but not the dot
        if frac_digits > 0 {
            end = frac_end;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return 0.0;
    }

    if matches!(bytes.get(end), Some(b'e') | Some(b'E')) {
        let mut exp_start = end + 1;
        if matches!(bytes.get(exp_start), Some(b'+') | Some(b'-')) {
            exp_start += 1;
        }
        let exp_end = scan_digits(bytes, exp_start);
        if exp_end > exp_start {
            end = exp_end;
        }
    }

    let number: String = s[..end].chars().filter(|&c| c != '_').collect();
    number.parse::<f64>().unwrap_or(0.0)
}

/// End of the digit run starting at `start`. A lone `_` counts only when
/// digits sit on both sides of it.
fn scan_digits(bytes: &[u8], start: usize) -> usize {
    let mut end = start;
    while end < bytes.len() {
        match bytes[end] {
            b'0'..=b'9' => end += 1,
            b'_' if end > start
                && bytes[end - 1].is_ascii_digit()
                && bytes.get(end + 1).map_or(false, u8::is_ascii_digit) =>
            {
                end += 1
            }
            _ => break,
        }
    }
    end
}
