//! Worked examples attached to a day

use crate::answer::Answer;
use crate::part::Part;

/// Expected answers for a test case
///
/// An expectation of [`Answer::None`] (e.g. written as `None::<u32>`) counts as
/// absent: the test is not applicable to that part. [`Expected::new`] rejects
/// an expectation with neither part present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expected {
    part1: Option<Answer>,
    part2: Option<Answer>,
}

/// Drops an expectation of nothing
fn present(answer: Answer) -> Option<Answer> {
    match answer {
        Answer::None => None,
        answer => Some(answer),
    }
}

impl Expected {
    /// Expectations for either part, `None` if neither is present
    ///
    /// # Example
    ///
    /// ```
    /// use aoc_harness::{Answer, Expected, Part};
    ///
    /// let expected = Expected::new(Some(142), None::<u32>).unwrap();
    /// assert_eq!(expected.get(Part::One), Some(&Answer::Int(142)));
    /// assert_eq!(expected.get(Part::Two), None);
    ///
    /// assert!(Expected::new(None::<u32>, None::<&str>).is_none());
    /// ```
    pub fn new<A, B>(part1: Option<A>, part2: Option<B>) -> Option<Self>
    where
        A: Into<Answer>,
        B: Into<Answer>,
    {
        let expected = Self {
            part1: part1.and_then(|answer| present(answer.into())),
            part2: part2.and_then(|answer| present(answer.into())),
        };
        (!expected.is_empty()).then_some(expected)
    }

    pub fn part1(answer: impl Into<Answer>) -> Self {
        Self {
            part1: present(answer.into()),
            part2: None,
        }
    }

    pub fn part2(answer: impl Into<Answer>) -> Self {
        Self {
            part1: None,
            part2: present(answer.into()),
        }
    }

    pub fn both(part1: impl Into<Answer>, part2: impl Into<Answer>) -> Self {
        Self {
            part1: present(part1.into()),
            part2: present(part2.into()),
        }
    }

    /// The expectation for `part`, if any
    pub fn get(&self, part: Part) -> Option<&Answer> {
        match part {
            Part::One => self.part1.as_ref(),
            Part::Two => self.part2.as_ref(),
        }
    }

    /// Whether no part has an expectation
    pub fn is_empty(&self) -> bool {
        self.part1.is_none() && self.part2.is_none()
    }
}

/// A worked example: input text captured at registration plus expected answers
///
/// The input is an owned copy, so whatever produced it may change afterwards
/// without affecting the stored test.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCase {
    input: String,
    expected: Expected,
}

impl TestCase {
    pub fn new(input: impl Into<String>, expected: Expected) -> Self {
        Self {
            input: input.into(),
            expected,
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn expected(&self, part: Part) -> Option<&Answer> {
        self.expected.get(part)
    }

    pub fn has_part(&self, part: Part) -> bool {
        self.expected(part).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_expectation() {
        let test = TestCase::new("1abc2", Expected::part1(142));
        assert!(test.has_part(Part::One));
        assert!(!test.has_part(Part::Two));
        assert_eq!(test.expected(Part::One), Some(&Answer::Int(142)));
        assert_eq!(test.expected(Part::Two), None);

        let test = TestCase::new("two1nine", Expected::part2(281));
        assert_eq!(test.expected(Part::One), None);
        assert_eq!(test.expected(Part::Two), Some(&Answer::Int(281)));
    }

    #[test]
    fn test_both_expectations() {
        let test = TestCase::new("x", Expected::both(1, "two"));
        assert_eq!(test.expected(Part::One), Some(&Answer::Int(1)));
        assert_eq!(test.expected(Part::Two), Some(&Answer::from("two")));
    }

    #[test]
    fn test_none_expectation_is_absent() {
        let test = TestCase::new("abc", Expected::both(3, None::<usize>));
        assert!(test.has_part(Part::One));
        assert!(!test.has_part(Part::Two));

        let test = TestCase::new("abc", Expected::part1(None::<usize>));
        assert!(!test.has_part(Part::One));
        assert!(!test.has_part(Part::Two));
    }

    #[test]
    fn test_checked_constructor_needs_one_part() {
        assert_eq!(
            Expected::new(None::<u8>, Some("CMZ")),
            Some(Expected::part2("CMZ"))
        );
        assert_eq!(Expected::new(Some(()), None::<u8>), None);
        assert_eq!(Expected::new(None::<u8>, None::<u8>), None);
    }
}
