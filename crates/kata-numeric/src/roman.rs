use thiserror::Error;

const MIN_ROMAN: u32 = 1;
const MAX_ROMAN: u32 = 3999;

/// Encode table in descending value order, subtractive pairs included.
const ROMAN_VALUES: [(u32, &str); 13] = [
    (1000, "M"),
    (900, "CM"),
    (500, "D"),
    (400, "CD"),
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RomanError {
    #[error("number must be between 1 and 3999, got {0}")]
    OutOfRange(u32),
    #[error("roman numeral must not be empty")]
    Empty,
    #[error("invalid roman numeral character {ch:?} at position {position}")]
    InvalidCharacter { ch: char, position: usize },
}

#[inline]
fn symbol_value(ch: char) -> Option<u32> {
    match ch {
        'I' => Some(1),
        'V' => Some(5),
        'X' => Some(10),
        'L' => Some(50),
        'C' => Some(100),
        'D' => Some(500),
        'M' => Some(1000),
        _ => None,
    }
}

/// Encode `number` (1..=3999) as a Roman numeral.
pub fn to_roman(number: u32) -> Result<String, RomanError> {
    if !(MIN_ROMAN..=MAX_ROMAN).contains(&number) {
        return Err(RomanError::OutOfRange(number));
    }

    let mut remaining = number;
    let mut roman = String::new();
    for &(value, literal) in &ROMAN_VALUES {
        while remaining >= value {
            roman.push_str(literal);
            remaining -= value;
        }
    }
    Ok(roman)
}

/// Decode a Roman numeral, case-insensitively.
///
/// Validation is strictly over the character set; repeated symbols that a
/// strict-form grammar would reject (`IIII`) still decode by value. The
/// subtractive rule is applied with a running previous-value correction, so
/// `IV` contributes `1`, then `-2 + 5`.
pub fn from_roman(roman: &str) -> Result<u32, RomanError> {
    if roman.trim().is_empty() {
        return Err(RomanError::Empty);
    }

    let mut total = 0u32;
    let mut previous = 0u32;
    for (position, ch) in roman.chars().enumerate() {
        let ch = ch.to_ascii_uppercase();
        let current = symbol_value(ch).ok_or(RomanError::InvalidCharacter { ch, position })?;

        if previous > 0 && current > previous {
            // `previous` was added once but belongs on the subtractive side.
            // `current > previous` and `total >= previous` keep this from
            // underflowing.
            total = total + current - 2 * previous;
        } else {
            total += current;
        }

        previous = current;
    }

    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    #[test]
    fn encodes_basic_symbols() {
        let cases = [
            (1, "I"),
            (5, "V"),
            (10, "X"),
            (50, "L"),
            (100, "C"),
            (500, "D"),
            (1000, "M"),
        ];
        for (number, expected) in cases {
            assert_eq!(to_roman(number).unwrap(), expected);
        }
    }

    #[test]
    fn encodes_subtractive_pairs() {
        let cases = [
            (4, "IV"),
            (9, "IX"),
            (40, "XL"),
            (90, "XC"),
            (400, "CD"),
            (900, "CM"),
        ];
        for (number, expected) in cases {
            assert_eq!(to_roman(number).unwrap(), expected);
        }
    }

    #[test]
    fn encodes_compound_numbers() {
        let cases = [
            (2, "II"),
            (3, "III"),
            (8, "VIII"),
            (14, "XIV"),
            (19, "XIX"),
            (30, "XXX"),
            (58, "LVIII"),
            (1994, "MCMXCIV"),
            (2023, "MMXXIII"),
            (3444, "MMMCDXLIV"),
            (3999, "MMMCMXCIX"),
        ];
        for (number, expected) in cases {
            assert_eq!(to_roman(number).unwrap(), expected);
        }
    }

    #[test]
    fn encode_rejects_out_of_range() {
        assert_eq!(to_roman(0), Err(RomanError::OutOfRange(0)));
        assert_eq!(to_roman(4000), Err(RomanError::OutOfRange(4000)));
        assert_eq!(to_roman(u32::MAX), Err(RomanError::OutOfRange(u32::MAX)));
    }

    #[test]
    fn decodes_basic_and_compound_numerals() {
        let cases = [
            ("I", 1),
            ("V", 5),
            ("X", 10),
            ("L", 50),
            ("C", 100),
            ("D", 500),
            ("M", 1000),
            ("IV", 4),
            ("IX", 9),
            ("XL", 40),
            ("XC", 90),
            ("CD", 400),
            ("CM", 900),
            ("XIV", 14),
            ("LVIII", 58),
            ("MCMXCIV", 1994),
            ("MMXXIII", 2023),
            ("MMMCDXLIV", 3444),
            ("MMMCMXCIX", 3999),
        ];
        for (roman, expected) in cases {
            assert_eq!(from_roman(roman).unwrap(), expected);
        }
    }

    #[test]
    fn decode_is_case_insensitive() {
        for roman in ["iv", "Iv", "iV"] {
            assert_eq!(from_roman(roman).unwrap(), 4);
        }
        for roman in ["mcmxciv", "MCMXCIV", "McmXciv"] {
            assert_eq!(from_roman(roman).unwrap(), 1994);
        }
    }

    #[test]
    fn decode_rejects_blank_input() {
        for roman in ["", "   ", "\t", "\n"] {
            assert_eq!(from_roman(roman), Err(RomanError::Empty));
        }
    }

    #[test]
    fn decode_rejects_invalid_characters_with_position() {
        assert_eq!(
            from_roman("IXZ"),
            Err(RomanError::InvalidCharacter { ch: 'Z', position: 2 })
        );
        assert_eq!(
            from_roman("123"),
            Err(RomanError::InvalidCharacter { ch: '1', position: 0 })
        );
        for roman in ["A", "ABC", "MCMXCIVB", "IV123", "!@#$"] {
            assert!(
                matches!(from_roman(roman), Err(RomanError::InvalidCharacter { .. })),
                "input {roman:?}"
            );
        }
    }

    #[test]
    fn decode_accepts_non_strict_repetition() {
        // Character-set validation only; form is not enforced.
        assert_eq!(from_roman("IIII").unwrap(), 4);
    }

    proptest! {
        #[test]
        fn round_trip_over_the_full_range(number in 1u32..=3999) {
            let roman = to_roman(number).unwrap();
            prop_assert_eq!(from_roman(&roman).unwrap(), number);
        }
    }
}
