//! Type-erased day interface and timed results

use crate::answer::Answer;
use crate::error::RunError;
use crate::input::InputSource;
use crate::part::Part;
use crate::report::Disposition;
use crate::test_case::TestCase;
use chrono::{DateTime, TimeDelta, Utc};

/// Result from running a part against real input, including timing information
#[derive(Debug, Clone, PartialEq)]
pub struct SolveResult {
    /// The computed answer
    pub answer: Answer,
    /// When normalization started (UTC)
    pub parse_start: DateTime<Utc>,
    /// When normalization completed (UTC)
    pub parse_end: DateTime<Utc>,
    /// When the part function started (UTC)
    pub solve_start: DateTime<Utc>,
    /// When the part function completed (UTC)
    pub solve_end: DateTime<Utc>,
}

impl SolveResult {
    /// Get the normalization duration as TimeDelta
    pub fn parse_duration(&self) -> TimeDelta {
        self.parse_end - self.parse_start
    }

    /// Get the solve duration as TimeDelta
    pub fn solve_duration(&self) -> TimeDelta {
        self.solve_end - self.solve_start
    }
}

/// Type-erased interface for working with any day through dynamic dispatch
///
/// Days with different intermediate representations are stored side by side in
/// a [`Year`](crate::Year) behind this trait. [`Day<P>`](crate::Day) is the
/// only implementation in this crate.
///
/// # Example
///
/// ```
/// use aoc_harness::{Day, DynDay, Expected, InlineInput, Part};
///
/// let day = Day::builder(1)
///     .identity()
///     .part1(|text: &str| text.lines().count())
///     .example("a\nb\nc", Expected::part1(3))
///     .input(InlineInput::new("x\ny"))
///     .build();
///
/// let day: &dyn DynDay = &day;
/// assert!(day.has_part1());
/// assert!(!day.has_part2());
/// assert_eq!(day.run(Part::One).unwrap().to_string(), "2");
/// ```
pub trait DynDay {
    /// Puzzle number of this day
    fn number(&self) -> u8;

    /// Whether a function is registered for `part`
    fn has_part(&self, part: Part) -> bool;

    /// Registered test cases, in registration order
    fn tests(&self) -> &[TestCase];

    /// The bound input source, if any
    fn input(&self) -> Option<&dyn InputSource>;

    /// Bind `source` unless an input source is already bound
    ///
    /// Used by [`YearBuilder`](crate::YearBuilder) during registration.
    fn bind_default_input(&mut self, source: Box<dyn InputSource>);

    /// Read the real input, normalize it and run `part`, with timing
    ///
    /// # Returns
    /// * `Ok(SolveResult)` - The part ran and produced an answer
    /// * `Err(RunError::MissingInput)` - No readable input is bound
    /// * `Err(RunError::PartNotImplemented)` - No function is registered for `part`
    /// * `Err(RunError::Generator | RunError::Part)` - Puzzle code failed
    fn run_timed(&self, part: Part) -> Result<SolveResult, RunError>;

    /// Run every test case against `part`, in registration order
    ///
    /// Returns one disposition per test case. Fails with
    /// `RunError::PartNotImplemented` when a test expects an answer for a
    /// part that has no function.
    fn evaluate_all(&self, part: Part) -> Result<Vec<Disposition>, RunError>;

    /// Read the real input, normalize it and run `part`
    fn run(&self, part: Part) -> Result<Answer, RunError> {
        self.run_timed(part).map(|result| result.answer)
    }

    fn has_part1(&self) -> bool {
        self.has_part(Part::One)
    }

    fn has_part2(&self) -> bool {
        self.has_part(Part::Two)
    }
}

/// Conversion into a boxed [`DynDay`], used by puzzle plugins
pub trait IntoDynDay {
    fn into_dyn_day(self) -> Box<dyn DynDay>;
}

impl IntoDynDay for Box<dyn DynDay> {
    fn into_dyn_day(self) -> Box<dyn DynDay> {
        self
    }
}
