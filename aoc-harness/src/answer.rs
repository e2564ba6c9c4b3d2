//! Answer values produced by part functions and expected by tests

use std::fmt;

/// A part's answer, compared by value
///
/// Integers of every primitive width collapse into [`Answer::Int`], so a part
/// returning `u64` matches a test expecting `3` written as an `i32` literal.
/// A `u128` too large for `i128` becomes its decimal text.
/// Text never equals an integer, even when it spells the same number.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Answer {
    /// Any integer answer
    Int(i128),
    /// Any textual answer
    Text(String),
    /// A part that ran but produced nothing
    None,
}

macro_rules! impl_from_int {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Answer {
                fn from(value: $ty) -> Self {
                    Answer::Int(value as i128)
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, usize);

/// Values above `i128::MAX` keep their digits as text
impl From<u128> for Answer {
    fn from(value: u128) -> Self {
        i128::try_from(value).map_or_else(|_| Answer::Text(value.to_string()), Answer::Int)
    }
}

impl From<String> for Answer {
    fn from(value: String) -> Self {
        Answer::Text(value)
    }
}

impl From<&str> for Answer {
    fn from(value: &str) -> Self {
        Answer::Text(value.to_owned())
    }
}

impl From<char> for Answer {
    fn from(value: char) -> Self {
        Answer::Text(value.to_string())
    }
}

impl From<()> for Answer {
    fn from(_: ()) -> Self {
        Answer::None
    }
}

impl<T: Into<Answer>> From<Option<T>> for Answer {
    fn from(value: Option<T>) -> Self {
        value.map_or(Answer::None, Into::into)
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Answer::Int(value) => write!(f, "{}", value),
            Answer::Text(value) => f.write_str(value),
            Answer::None => f.write_str("None"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_widths_compare_by_value() {
        assert_eq!(Answer::from(3u8), Answer::from(3i64));
        assert_eq!(Answer::from(281usize), Answer::from(281i32));
        assert_ne!(Answer::from(-1i32), Answer::from(1u32));
    }

    #[test]
    fn test_u128_is_lossless() {
        assert_eq!(Answer::from(7u128), Answer::from(7i32));
        assert_eq!(Answer::from(i128::MAX as u128), Answer::Int(i128::MAX));
        assert_eq!(
            Answer::from(u128::MAX),
            Answer::Text("340282366920938463463374607431768211455".to_string())
        );
        assert_ne!(Answer::from(u128::MAX), Answer::from(u128::MAX - 1));
    }

    #[test]
    fn test_text_never_equals_integer() {
        assert_ne!(Answer::from("3"), Answer::from(3));
        assert_eq!(Answer::from("abc"), Answer::from(String::from("abc")));
    }

    #[test]
    fn test_option_and_unit() {
        assert_eq!(Answer::from(None::<u32>), Answer::None);
        assert_eq!(Answer::from(Some(7u32)), Answer::Int(7));
        assert_eq!(Answer::from(()), Answer::None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Answer::from(142).to_string(), "142");
        assert_eq!(Answer::from("CMZ").to_string(), "CMZ");
        assert_eq!(Answer::None.to_string(), "None");
    }
}
