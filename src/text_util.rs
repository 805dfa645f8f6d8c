//! Small string helpers shared by the signature parser and the section
//! processors. These mirror `snowcrash`'s `StringUtility.h` free functions
//! rather than leaning on `str::trim`, since MSON's notion of whitespace is
//! a fixed six-byte set, not full Unicode whitespace.

/// Byte considered whitespace by the signature grammar: space, tab,
/// newline, vertical tab, form feed or carriage return.
pub fn is_mson_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | 0x0b | 0x0c | b'\r')
}

/// Trim [`is_mson_space`] bytes from the start of `s`.
pub fn trim_start(s: &str) -> &str {
    s.trim_start_matches(|c: char| c.is_ascii() && is_mson_space(c as u8))
}

/// Trim [`is_mson_space`] bytes from the end of `s`.
pub fn trim_end(s: &str) -> &str {
    s.trim_end_matches(|c: char| c.is_ascii() && is_mson_space(c as u8))
}

/// Trim both ends of `s`.
pub fn trim(s: &str) -> &str {
    trim_end(trim_start(s))
}

/// Split `s` on the first occurrence of `delim`, trimming neither half.
pub fn split_on_first(s: &str, delim: char) -> (&str, Option<&str>) {
    match s.find(delim) {
        Some(pos) => (&s[..pos], Some(&s[pos + delim.len_utf8()..])),
        None => (s, None),
    }
}

/// Split `s` by `delim`, trimming each resulting piece. A trailing
/// delimiter therefore yields a trailing empty piece (callers that care
/// ignore it downstream, per spec.md §4.1). An empty (or all-whitespace)
/// `s` yields zero pieces, mirroring `StringUtility.h::Split`'s use of
/// `getline`, which never produces a piece for an empty stream.
pub fn split_trimmed(s: &str, delim: char) -> Vec<String> {
    if trim(s).is_empty() {
        return Vec::new();
    }
    s.split(delim).map(|piece| trim(piece).to_owned()).collect()
}

/// Extract the first line of `s` and return `(first_line, remainder)`.
/// `remainder` is empty when `s` has no newline, mirroring
/// `StringUtility.h::GetFirstLine`.
pub fn split_first_line(s: &str) -> (&str, &str) {
    match s.find('\n') {
        Some(pos) => (&s[..pos], &s[pos + 1..]),
        None => (s, ""),
    }
}
