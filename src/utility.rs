use std::fmt::Write;

fn hex_digit_to_decimal(digit: u8) -> Option<u8> {
    match digit {
        _ if digit.is_ascii_digit() => Some(digit - b'0'),
        b'a'..=b'f' => Some(digit - b'a' + 10),
        b'A'..=b'F' => Some(digit - b'A' + 10),
        _ => None,
    }
}

/// Returns the byte index of the first occurrence of any character in `set`.
pub(crate) fn find_one_of(value: &str, set: &str) -> Option<usize> {
    value.find(|character| set.contains(character))
}

/// Lowercase-folded string equality. The same folding is used by the relaxed
/// comparison paths, so non-ASCII text folds identically on both sides.
pub(crate) fn eq_ignore_case(left: &str, right: &str) -> bool {
    if left == right {
        return true;
    }

    left.to_lowercase() == right.to_lowercase()
}

/// Percent-encodes every byte of `value` whose entry in the 256-byte keep map
/// is zero. Hex digits are emitted uppercase. The keep maps never contain
/// `'%'`, so a literal percent sign in decoded text always becomes `"%25"`.
pub(crate) fn percent_encode(value: &str, keep_map: &[u8; 256]) -> String {
    let mut encoded = String::with_capacity(value.len());

    for &byte in value.as_bytes() {
        match keep_map[byte as usize] {
            0 => {
                let _ = write!(encoded, "%{:02X}", byte);
            }
            _ => encoded.push(byte as char),
        }
    }

    encoded
}

/// Percent-decodes `value`, mapping `'+'` to a space as well when
/// `plus_as_space` is set. This function is total: if any escape is malformed
/// (a `%` not followed by two hex digits) or the decoded bytes are not valid
/// UTF-8, the original text is returned unchanged instead.
pub(crate) fn percent_decode(value: &str, plus_as_space: bool) -> String {
    match decode_escapes(value, plus_as_space) {
        Some(decoded) => decoded,
        None => value.to_owned(),
    }
}

fn decode_escapes(value: &str, plus_as_space: bool) -> Option<String> {
    let mut decoded = Vec::with_capacity(value.len());
    let mut bytes = value.bytes();

    while let Some(byte) = bytes.next() {
        match byte {
            b'%' => {
                let first_digit = hex_digit_to_decimal(bytes.next()?)?;
                let second_digit = hex_digit_to_decimal(bytes.next()?)?;
                decoded.push(first_digit * 16 + second_digit);
            }
            b'+' if plus_as_space => decoded.push(b' '),
            _ => decoded.push(byte),
        }
    }

    String::from_utf8(decoded).ok()
}
