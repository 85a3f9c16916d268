//! Title validation and the live character counter.

use crate::error::ValidationError;

/// Shortest accepted title, in characters, after trimming.
pub const TITLE_MIN_CHARS: usize = 2;

/// Longest accepted title, in characters, after trimming.
pub const TITLE_MAX_CHARS: usize = 200;

/// Counter turns to a warning past this many characters.
pub const TITLE_WARN_CHARS: usize = 180;

/// Validate a submitted title and return its canonical (trimmed) form.
///
/// Lengths are counted in Unicode scalar values, so a title of CJK
/// characters gets the same budget as an ASCII one.
///
/// # Example
///
/// ```
/// use stdassess::validation::validate;
///
/// assert_eq!(validate("  GB/T 1.1-2020 ").unwrap(), "GB/T 1.1-2020");
/// assert!(validate("   ").is_err());
/// ```
pub fn validate(title: &str) -> Result<String, ValidationError> {
    let trimmed = title.trim();
    let len = trimmed.chars().count();

    if len == 0 {
        return Err(ValidationError::EmptyInput);
    }
    if !(TITLE_MIN_CHARS..=TITLE_MAX_CHARS).contains(&len) {
        return Err(ValidationError::LengthOutOfRange {
            len,
            min: TITLE_MIN_CHARS,
            max: TITLE_MAX_CHARS,
        });
    }

    Ok(trimmed.to_string())
}

/// How close the raw input is to the limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterLevel {
    Normal,
    Warning,
    Over,
}

/// The `n/200` counter shown under the input field.
///
/// Counts the raw input, whitespace included, so the number moves on every
/// keystroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharCounter {
    pub count: usize,
    pub level: CounterLevel,
}

impl CharCounter {
    /// Measure `input`.
    pub fn measure(input: &str) -> Self {
        let count = input.chars().count();
        let level = if count > TITLE_MAX_CHARS {
            CounterLevel::Over
        } else if count > TITLE_WARN_CHARS {
            CounterLevel::Warning
        } else {
            CounterLevel::Normal
        };
        Self { count, level }
    }

    /// Display text, e.g. `42/200`.
    pub fn label(&self) -> String {
        format!("{}/{}", self.count, TITLE_MAX_CHARS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_trims() {
        assert_eq!(
            validate("  Metaverse technical requirements \n").unwrap(),
            "Metaverse technical requirements"
        );
    }

    #[test]
    fn test_validate_bounds() {
        assert_eq!(validate("ab").unwrap(), "ab");
        let max = "x".repeat(TITLE_MAX_CHARS);
        assert_eq!(validate(&max).unwrap(), max);
    }

    #[test]
    fn test_validate_empty_and_whitespace() {
        assert_eq!(validate(""), Err(ValidationError::EmptyInput));
        assert_eq!(validate(" \t\n "), Err(ValidationError::EmptyInput));
    }

    #[test]
    fn test_validate_too_short() {
        assert_eq!(
            validate(" a "),
            Err(ValidationError::LengthOutOfRange {
                len: 1,
                min: 2,
                max: 200
            })
        );
    }

    #[test]
    fn test_validate_too_long() {
        let long = format!("  {}  ", "y".repeat(201));
        assert_eq!(
            validate(&long),
            Err(ValidationError::LengthOutOfRange {
                len: 201,
                min: 2,
                max: 200
            })
        );
    }

    #[test]
    fn test_validate_counts_characters_not_bytes() {
        // 100 three-byte characters is 300 bytes but only 100 chars.
        let cjk = "标".repeat(100);
        assert!(validate(&cjk).is_ok());
        assert!(validate("标").is_err());
        assert!(validate("标准").is_ok());
    }

    #[test]
    fn test_validate_is_deterministic() {
        let input = "  ISO 9001 ";
        assert_eq!(validate(input), validate(input));
    }

    #[test]
    fn test_counter_levels() {
        assert_eq!(CharCounter::measure("").level, CounterLevel::Normal);
        assert_eq!(
            CharCounter::measure(&"a".repeat(180)).level,
            CounterLevel::Normal
        );
        assert_eq!(
            CharCounter::measure(&"a".repeat(181)).level,
            CounterLevel::Warning
        );
        assert_eq!(
            CharCounter::measure(&"a".repeat(200)).level,
            CounterLevel::Warning
        );
        assert_eq!(
            CharCounter::measure(&"a".repeat(201)).level,
            CounterLevel::Over
        );
    }

    #[test]
    fn test_counter_label() {
        assert_eq!(CharCounter::measure("hello").label(), "5/200");
    }
}
