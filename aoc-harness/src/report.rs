//! Verification outcomes and render-free reports

use crate::error::RunError;
use crate::instance::{DynDay, SolveResult};
use crate::part::Part;
use std::fmt;

/// Outcome of one test case for one part
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Disposition {
    /// The part function produced the expected answer
    Pass,
    /// The part function produced a different answer
    Fail,
    /// The test case has no expectation for this part
    NotApplicable,
}

impl Disposition {
    /// One-character marker: `+` pass, `x` fail, `-` not applicable
    pub fn symbol(self) -> char {
        match self {
            Disposition::Pass => '+',
            Disposition::Fail => 'x',
            Disposition::NotApplicable => '-',
        }
    }
}

impl fmt::Display for Disposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Disposition::Pass => "pass",
            Disposition::Fail => "fail",
            Disposition::NotApplicable => "not-applicable",
        };
        f.write_str(name)
    }
}

/// Partial-credit counts over a set of dispositions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub passed: usize,
    pub failed: usize,
    pub not_applicable: usize,
}

impl Tally {
    /// Number of test cases that actually exercised the part
    pub fn applicable(&self) -> usize {
        self.passed + self.failed
    }

    /// True if nothing failed; vacuously true when no test applied
    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }
}

impl From<&[Disposition]> for Tally {
    fn from(dispositions: &[Disposition]) -> Self {
        dispositions.iter().fold(Tally::default(), |mut tally, d| {
            match d {
                Disposition::Pass => tally.passed += 1,
                Disposition::Fail => tally.failed += 1,
                Disposition::NotApplicable => tally.not_applicable += 1,
            }
            tally
        })
    }
}

impl fmt::Display for Tally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{} passed", self.passed, self.applicable())
    }
}

/// Verification and real-input result for one implemented part
#[derive(Debug)]
pub struct PartReport {
    pub part: Part,
    pub dispositions: Result<Vec<Disposition>, RunError>,
    pub answer: Result<SolveResult, RunError>,
}

impl PartReport {
    /// Tally of the dispositions, if evaluation succeeded
    pub fn tally(&self) -> Option<Tally> {
        self.dispositions
            .as_ref()
            .ok()
            .map(|dispositions| Tally::from(dispositions.as_slice()))
    }
}

/// Reports for every implemented part of a day
#[derive(Debug)]
pub struct DayReport {
    pub day: u8,
    pub parts: Vec<PartReport>,
}

impl DayReport {
    /// Evaluate the tests and run the real input for each implemented part
    ///
    /// Parts without a function are skipped. Errors are kept per part so a
    /// failure in one part does not hide the other.
    pub fn collect(day: &dyn DynDay) -> Self {
        let parts = Part::ALL
            .into_iter()
            .filter(|&part| day.has_part(part))
            .map(|part| PartReport {
                part,
                dispositions: day.evaluate_all(part),
                answer: day.run_timed(part),
            })
            .collect();

        Self {
            day: day.number(),
            parts,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Answer, Day, Expected, InlineInput};

    #[test]
    fn test_tally_counts() {
        let dispositions = [
            Disposition::Pass,
            Disposition::NotApplicable,
            Disposition::Fail,
            Disposition::Pass,
        ];
        let tally = Tally::from(&dispositions[..]);
        assert_eq!(
            tally,
            Tally {
                passed: 2,
                failed: 1,
                not_applicable: 1
            }
        );
        assert_eq!(tally.applicable(), 3);
        assert!(!tally.all_passed());
        assert_eq!(tally.to_string(), "2/3 passed");
    }

    #[test]
    fn test_empty_tally_passes_vacuously() {
        let none: [Disposition; 0] = [];
        let tally = Tally::from(&none[..]);
        assert!(tally.all_passed());
        assert_eq!(tally.applicable(), 0);
    }

    #[test]
    fn test_symbols_and_names() {
        assert_eq!(Disposition::Pass.symbol(), '+');
        assert_eq!(Disposition::Fail.symbol(), 'x');
        assert_eq!(Disposition::NotApplicable.symbol(), '-');
        assert_eq!(Disposition::NotApplicable.to_string(), "not-applicable");
    }

    #[test]
    fn test_collect_skips_unimplemented_parts() {
        let day = Day::builder(2)
            .identity()
            .part2(|text: &str| text.len())
            .example("abcd", Expected::part2(4))
            .example("abcd", Expected::part1(1))
            .input(InlineInput::new("abcdef"))
            .build();

        let report = DayReport::collect(&day);
        assert_eq!(report.day, 2);
        assert_eq!(report.parts.len(), 1);

        let part = &report.parts[0];
        assert_eq!(part.part, Part::Two);
        assert_eq!(
            part.dispositions.as_ref().unwrap(),
            &vec![Disposition::Pass, Disposition::NotApplicable]
        );
        assert_eq!(part.answer.as_ref().unwrap().answer, Answer::Int(6));
        assert_eq!(part.tally().unwrap().passed, 1);
    }

    #[test]
    fn test_collect_keeps_errors_per_part() {
        let day = Day::builder(5)
            .identity()
            .part1(|text: &str| text.len())
            .example("abc", Expected::part1(3))
            .build();

        let report = DayReport::collect(&day);
        let part = &report.parts[0];
        assert!(part.dispositions.is_ok());
        assert!(matches!(part.answer, Err(RunError::MissingInput { day: 5, .. })));
    }
}
