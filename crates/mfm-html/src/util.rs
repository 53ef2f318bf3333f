//! Small sequence helpers for the text handler.

/// Flatten a sequence of sequences.
pub(crate) fn concat<T>(xss: Vec<Vec<T>>) -> Vec<T> {
    xss.into_iter().flatten().collect()
}

/// Interleave `sep` between consecutive elements of `xs`.
///
/// The separator never leads or trails: `intersperse(s, [a, b, c])` is
/// `[a, s, b, s, c]`.
pub(crate) fn intersperse<T: Clone>(sep: &T, xs: Vec<T>) -> Vec<T> {
    let mut out = concat(xs.into_iter().map(|x| vec![sep.clone(), x]).collect());
    if !out.is_empty() {
        out.remove(0);
    }
    out
}

/// Split on the three conventional line-ending sequences: CRLF, CR, LF.
///
/// Empty fragments are preserved, so a trailing newline yields a trailing
/// empty fragment and the empty string yields one empty fragment.
pub(crate) fn split_line_breaks(text: &str) -> Vec<&str> {
    let bytes = text.as_bytes();
    let mut parts = Vec::new();
    let mut start = 0;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\r' => {
                parts.push(&text[start..i]);
                i += if bytes.get(i + 1) == Some(&b'\n') { 2 } else { 1 };
                start = i;
            }
            b'\n' => {
                parts.push(&text[start..i]);
                i += 1;
                start = i;
            }
            _ => i += 1,
        }
    }
    parts.push(&text[start..]);
    parts
}
