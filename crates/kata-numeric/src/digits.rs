use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DigitsError {
    #[error("the number must be a non-negative value, got {0}")]
    Negative(i32),
    #[error("reordered value {0} exceeds the maximum allowed integer value")]
    Overflow(i64),
}

/// Reorder the decimal digits of `number` in descending order.
///
/// The reordered value can exceed `i32::MAX` even though the input cannot
/// (e.g. `2147483647` reorders to `8776444321`); that case is reported as
/// [`DigitsError::Overflow`] carrying the oversized value.
pub fn descending_digits(number: i32) -> Result<i32, DigitsError> {
    if number < 0 {
        return Err(DigitsError::Negative(number));
    }
    if number == 0 {
        return Ok(0);
    }

    let mut digits = extract_digits(number);
    digits.sort_unstable_by(|a, b| b.cmp(a));
    combine_digits(&digits)
}

fn extract_digits(mut number: i32) -> Vec<u8> {
    let mut digits = Vec::new();
    while number > 0 {
        digits.push((number % 10) as u8);
        number /= 10;
    }
    digits
}

fn combine_digits(digits: &[u8]) -> Result<i32, DigitsError> {
    let mut result = 0i64;
    for &digit in digits {
        result = result * 10 + i64::from(digit);
        if result > i64::from(i32::MAX) {
            return Err(DigitsError::Overflow(result));
        }
    }
    Ok(result as i32)
}
