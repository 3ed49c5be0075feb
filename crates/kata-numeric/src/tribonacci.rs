/// Generate the first `n` elements of a Tribonacci-like sequence.
///
/// The sequence starts with `seeds` verbatim; every further element is the
/// sum of a sliding three-value window. When fewer than three seeds are
/// given the window is zero-padded on the left; when `n <= seeds.len()` the
/// seeds are truncated rather than extended. With more than three seeds the
/// window starts from the first three; later seeds appear in the output but
/// never feed the window.
pub fn tribonacci(seeds: &[i64], n: usize) -> Vec<i64> {
    if n == 0 {
        return Vec::new();
    }
    if n <= seeds.len() {
        return seeds[..n].to_vec();
    }

    let mut window = [0i64; 3];
    if seeds.len() >= 3 {
        window.copy_from_slice(&seeds[..3]);
    } else {
        window[3 - seeds.len()..].copy_from_slice(seeds);
    }

    let mut sequence = Vec::with_capacity(n);
    sequence.extend_from_slice(seeds);
    while sequence.len() < n {
        let next: i64 = window.iter().sum();
        sequence.push(next);
        window = [window[1], window[2], next];
    }
    sequence
}
