//! Natural ("human") string ordering.
//!
//! Strings are compared as alternating runs of digit and non-digit bytes
//! ("chunks"). Digit runs compare by numeric value, so `file2` sorts before
//! `file10`; everything else compares ASCII-case-insensitively in ordinal
//! order. Chunks are produced lazily from a byte cursor and never
//! materialized as a list.

#![forbid(unsafe_code)]

use std::cmp::Ordering;

#[inline]
fn fold_byte(b: u8) -> u8 {
    b.to_ascii_lowercase()
}

/// Extracts the maximal digit or non-digit run starting at `cursor`,
/// advancing the cursor past it. Returns `""` once the cursor is at the end.
///
/// Run boundaries only ever fall next to an ASCII digit, so the returned
/// slice always lies on char boundaries.
pub(crate) fn next_chunk<'a>(s: &'a str, cursor: &mut usize) -> &'a str {
    let bytes = s.as_bytes();
    if *cursor >= bytes.len() {
        return "";
    }

    let start = *cursor;
    let digit = bytes[start].is_ascii_digit();
    let mut end = start;
    while end < bytes.len() && bytes[end].is_ascii_digit() == digit {
        end += 1;
    }

    *cursor = end;
    &s[start..end]
}

fn cmp_text_chunks(a: &str, b: &str) -> Ordering {
    a.bytes().map(fold_byte).cmp(b.bytes().map(fold_byte))
}

/// Compare two strings in natural order.
///
/// Chunks are consumed pairwise left to right; the first non-equal pair
/// decides. When both chunks are digit runs they compare by parsed `i32`
/// value, with unparsable runs (e.g. overflowing ones) degrading to `0`
/// rather than failing. When either cursor reaches the end of its string the
/// comparison falls back to total length; remaining chunks on the longer
/// side are deliberately not inspected.
pub fn compare(a: &str, b: &str) -> Ordering {
    let mut ia = 0usize;
    let mut ib = 0usize;

    while ia < a.len() && ib < b.len() {
        let chunk_a = next_chunk(a, &mut ia);
        let chunk_b = next_chunk(b, &mut ib);

        let numeric =
            chunk_a.as_bytes()[0].is_ascii_digit() && chunk_b.as_bytes()[0].is_ascii_digit();
        let diff = if numeric {
            let num_a = chunk_a.parse::<i32>().unwrap_or(0);
            let num_b = chunk_b.parse::<i32>().unwrap_or(0);
            num_a.cmp(&num_b)
        } else {
            cmp_text_chunks(chunk_a, chunk_b)
        };

        if diff != Ordering::Equal {
            return diff;
        }
    }

    a.len().cmp(&b.len())
}

/// [`compare`] lifted over nullable inputs: `None` sorts before any string
/// and two `None`s are equal.
pub fn natural_cmp(a: Option<&str>, b: Option<&str>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(a), Some(b)) => compare(a, b),
    }
}

/// Stable natural sort over a copy of `items`; the input is left untouched.
pub fn natural_sort<S: AsRef<str>>(items: &[S]) -> Vec<String> {
    let mut sorted: Vec<String> = items.iter().map(|s| s.as_ref().to_string()).collect();
    sorted.sort_by(|a, b| compare(a, b));
    sorted
}
