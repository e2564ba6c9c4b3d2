//! Day pipeline: normalization, parts and test cases for one puzzle

use crate::answer::Answer;
use crate::error::{BoxError, RunError};
use crate::generator::{materialize, try_materialize, Generate};
use crate::input::InputSource;
use crate::instance::{DynDay, IntoDynDay, SolveResult};
use crate::part::Part;
use crate::report::Disposition;
use crate::test_case::{Expected, TestCase};
use chrono::Utc;
use log::{debug, trace};
use std::borrow::Borrow;
use std::fmt;

/// Boxed normalization step from raw text to the intermediate representation
type Normalizer<P> = Box<dyn Fn(&str) -> Result<P, BoxError>>;

/// Boxed part function over the intermediate representation
type PartFn<P> = Box<dyn Fn(&P) -> Result<Answer, BoxError>>;

/// A fully configured puzzle pipeline
///
/// `P` is the intermediate representation every part function receives. It is
/// produced from scratch on each run or evaluation; nothing is cached.
pub struct Day<P> {
    number: u8,
    input: Option<Box<dyn InputSource>>,
    normalizer: Normalizer<P>,
    part1: Option<PartFn<P>>,
    part2: Option<PartFn<P>>,
    tests: Vec<TestCase>,
}

impl Day<()> {
    /// Start building the day with puzzle number `number`
    ///
    /// The first choice is how input is normalized; parts and tests follow.
    /// Calling a part, test or input method first skips that choice and
    /// normalizes with [`NewDay::identity`].
    ///
    /// # Example
    ///
    /// ```
    /// use aoc_harness::{Day, DynDay, Expected, Part};
    /// use aoc_harness::report::Disposition;
    ///
    /// fn lines(input: &str) -> impl Iterator<Item = String> + '_ {
    ///     input.lines().map(|line| line.trim().to_owned())
    /// }
    ///
    /// let day = Day::builder(1)
    ///     .generator(lines)
    ///     .part1(|lines: &[String]| lines.len())
    ///     .test(|| "a\nb\nc", Expected::part1(3))
    ///     .build();
    ///
    /// assert_eq!(day.evaluate_all(Part::One).unwrap(), vec![Disposition::Pass]);
    /// ```
    pub fn builder(number: u8) -> NewDay {
        NewDay { number }
    }
}

impl<P> Day<P> {
    fn part_fn(&self, part: Part) -> Option<&PartFn<P>> {
        match part {
            Part::One => self.part1.as_ref(),
            Part::Two => self.part2.as_ref(),
        }
    }

    fn read_input(&self) -> Result<String, RunError> {
        let source = self.input.as_ref().ok_or(RunError::MissingInput {
            day: self.number,
            source: None,
        })?;
        debug!("day {}: reading input from {}", self.number, source.describe());
        source.read().map_err(|e| RunError::MissingInput {
            day: self.number,
            source: Some(e),
        })
    }

    fn normalize(&self, input: &str) -> Result<P, RunError> {
        (self.normalizer)(input).map_err(RunError::Generator)
    }

    fn solve(&self, part: Part, data: &P) -> Result<Answer, RunError> {
        let part_fn = self
            .part_fn(part)
            .ok_or(RunError::PartNotImplemented(part))?;
        part_fn(data).map_err(RunError::Part)
    }

    fn evaluate(&self, part: Part, index: usize, test: &TestCase) -> Result<Disposition, RunError> {
        let data = self.normalize(test.input())?;
        let Some(expected) = test.expected(part) else {
            trace!("day {} part {} test {}: not applicable", self.number, part, index);
            return Ok(Disposition::NotApplicable);
        };

        let actual = self.solve(part, &data)?;
        if actual == *expected {
            trace!("day {} part {} test {}: pass", self.number, part, index);
            Ok(Disposition::Pass)
        } else {
            debug!(
                "day {} part {} test {}: expected {}, got {}",
                self.number, part, index, expected, actual
            );
            Ok(Disposition::Fail)
        }
    }
}

impl<P> DynDay for Day<P> {
    fn number(&self) -> u8 {
        self.number
    }

    fn has_part(&self, part: Part) -> bool {
        self.part_fn(part).is_some()
    }

    fn tests(&self) -> &[TestCase] {
        &self.tests
    }

    fn input(&self) -> Option<&dyn InputSource> {
        self.input.as_deref()
    }

    fn bind_default_input(&mut self, source: Box<dyn InputSource>) {
        if self.input.is_none() {
            self.input = Some(source);
        }
    }

    fn run_timed(&self, part: Part) -> Result<SolveResult, RunError> {
        let text = self.read_input()?;

        let parse_start = Utc::now();
        let data = self.normalize(&text)?;
        let parse_end = Utc::now();

        let solve_start = Utc::now();
        let answer = self.solve(part, &data)?;
        let solve_end = Utc::now();

        Ok(SolveResult {
            answer,
            parse_start,
            parse_end,
            solve_start,
            solve_end,
        })
    }

    fn evaluate_all(&self, part: Part) -> Result<Vec<Disposition>, RunError> {
        self.tests
            .iter()
            .enumerate()
            .map(|(index, test)| self.evaluate(part, index, test))
            .collect()
    }
}

impl<P> fmt::Debug for Day<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Day")
            .field("number", &self.number)
            .field("input", &self.input.as_ref().map(|source| source.describe()))
            .field("has_part1", &self.part1.is_some())
            .field("has_part2", &self.part2.is_some())
            .field("tests", &self.tests)
            .finish()
    }
}

impl<P: 'static> IntoDynDay for Day<P> {
    fn into_dyn_day(self) -> Box<dyn DynDay> {
        Box::new(self)
    }
}

/// A day whose normalization has not been chosen yet
#[derive(Debug, Clone, Copy)]
pub struct NewDay {
    number: u8,
}

impl NewDay {
    /// Parts receive the raw input text unchanged
    pub fn identity(self) -> DayBuilder<String> {
        DayBuilder::new(
            self.number,
            Box::new(|input: &str| -> Result<String, BoxError> { Ok(input.to_owned()) }),
        )
    }

    /// Normalize with a sequence generator, drained into a `Vec` on every run
    pub fn generator<G, T>(self, generator: G) -> DayBuilder<Vec<T>>
    where
        G: for<'a> Generate<'a, Item = T> + 'static,
        T: 'static,
    {
        DayBuilder::new(
            self.number,
            Box::new(move |input: &str| -> Result<Vec<T>, BoxError> {
                Ok(materialize(&generator, input))
            }),
        )
    }

    /// Normalize with a generator of fallible items; the first error aborts
    pub fn try_generator<G, T, E>(self, generator: G) -> DayBuilder<Vec<T>>
    where
        G: for<'a> Generate<'a, Item = Result<T, E>> + 'static,
        T: 'static,
        E: Into<BoxError> + 'static,
    {
        DayBuilder::new(
            self.number,
            Box::new(move |input: &str| -> Result<Vec<T>, BoxError> {
                try_materialize(&generator, input).map_err(Into::into)
            }),
        )
    }

    /// Normalize into an arbitrary representation, such as a grid or a struct
    pub fn parser<F, P, E>(self, parser: F) -> DayBuilder<P>
    where
        F: Fn(&str) -> Result<P, E> + 'static,
        P: 'static,
        E: Into<BoxError> + 'static,
    {
        DayBuilder::new(
            self.number,
            Box::new(move |input: &str| -> Result<P, BoxError> {
                parser(input).map_err(Into::into)
            }),
        )
    }

    /// Part 1 over the raw text; shorthand for `identity().part1(..)`
    pub fn part1<Q, O, F>(self, part_fn: F) -> DayBuilder<String>
    where
        F: Fn(&Q) -> O + 'static,
        Q: ?Sized + 'static,
        O: Into<Answer> + 'static,
        String: Borrow<Q>,
    {
        self.identity().part1(part_fn)
    }

    /// Part 2 over the raw text; shorthand for `identity().part2(..)`
    pub fn part2<Q, O, F>(self, part_fn: F) -> DayBuilder<String>
    where
        F: Fn(&Q) -> O + 'static,
        Q: ?Sized + 'static,
        O: Into<Answer> + 'static,
        String: Borrow<Q>,
    {
        self.identity().part2(part_fn)
    }

    pub fn try_part1<Q, O, E, F>(self, part_fn: F) -> DayBuilder<String>
    where
        F: Fn(&Q) -> Result<O, E> + 'static,
        Q: ?Sized + 'static,
        O: Into<Answer> + 'static,
        E: Into<BoxError> + 'static,
        String: Borrow<Q>,
    {
        self.identity().try_part1(part_fn)
    }

    pub fn try_part2<Q, O, E, F>(self, part_fn: F) -> DayBuilder<String>
    where
        F: Fn(&Q) -> Result<O, E> + 'static,
        Q: ?Sized + 'static,
        O: Into<Answer> + 'static,
        E: Into<BoxError> + 'static,
        String: Borrow<Q>,
    {
        self.identity().try_part2(part_fn)
    }

    /// Register a test case on an identity day
    pub fn test<F, S>(self, provider: F, expected: Expected) -> DayBuilder<String>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.identity().test(provider, expected)
    }

    pub fn example(self, input: impl Into<String>, expected: Expected) -> DayBuilder<String> {
        self.identity().example(input, expected)
    }

    pub fn input(self, source: impl InputSource + 'static) -> DayBuilder<String> {
        self.identity().input(source)
    }
}

/// Builder for a [`Day`] with a fixed intermediate representation `P`
///
/// Part functions may borrow the representation through any view `P` can be
/// borrowed as, e.g. `&[T]` for `Vec<T>` or `&str` for `String`.
pub struct DayBuilder<P> {
    day: Day<P>,
}

impl<P: 'static> DayBuilder<P> {
    fn new(number: u8, normalizer: Normalizer<P>) -> Self {
        Self {
            day: Day {
                number,
                input: None,
                normalizer,
                part1: None,
                part2: None,
                tests: Vec::new(),
            },
        }
    }

    fn with_part(mut self, part: Part, part_fn: PartFn<P>) -> Self {
        match part {
            Part::One => self.day.part1 = Some(part_fn),
            Part::Two => self.day.part2 = Some(part_fn),
        }
        self
    }

    /// Register an infallible part 1 function
    pub fn part1<Q, O, F>(self, part_fn: F) -> Self
    where
        F: Fn(&Q) -> O + 'static,
        Q: ?Sized + 'static,
        O: Into<Answer> + 'static,
        P: Borrow<Q>,
    {
        self.with_part(Part::One, infallible(part_fn))
    }

    /// Register an infallible part 2 function
    pub fn part2<Q, O, F>(self, part_fn: F) -> Self
    where
        F: Fn(&Q) -> O + 'static,
        Q: ?Sized + 'static,
        O: Into<Answer> + 'static,
        P: Borrow<Q>,
    {
        self.with_part(Part::Two, infallible(part_fn))
    }

    /// Register a fallible part 1 function; its errors reach the caller unwrapped
    pub fn try_part1<Q, O, E, F>(self, part_fn: F) -> Self
    where
        F: Fn(&Q) -> Result<O, E> + 'static,
        Q: ?Sized + 'static,
        O: Into<Answer> + 'static,
        E: Into<BoxError> + 'static,
        P: Borrow<Q>,
    {
        self.with_part(Part::One, fallible(part_fn))
    }

    /// Register a fallible part 2 function; its errors reach the caller unwrapped
    pub fn try_part2<Q, O, E, F>(self, part_fn: F) -> Self
    where
        F: Fn(&Q) -> Result<O, E> + 'static,
        Q: ?Sized + 'static,
        O: Into<Answer> + 'static,
        E: Into<BoxError> + 'static,
        P: Borrow<Q>,
    {
        self.with_part(Part::Two, fallible(part_fn))
    }

    /// Register a test case; `provider` is called once, right now
    pub fn test<F, S>(mut self, provider: F, expected: Expected) -> Self
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        if expected.is_empty() {
            debug!(
                "day {}: test {} expects neither part",
                self.day.number,
                self.day.tests.len()
            );
        }
        self.day.tests.push(TestCase::new(provider(), expected));
        self
    }

    /// Register a test case from literal text
    pub fn example(self, input: impl Into<String>, expected: Expected) -> Self {
        self.test(|| input, expected)
    }

    /// Bind the real input source explicitly
    pub fn input(mut self, source: impl InputSource + 'static) -> Self {
        self.day.input = Some(Box::new(source));
        self
    }

    /// Finish configuration
    pub fn build(self) -> Day<P> {
        self.day
    }
}

impl<P: 'static> IntoDynDay for DayBuilder<P> {
    fn into_dyn_day(self) -> Box<dyn DynDay> {
        Box::new(self.build())
    }
}

fn infallible<P, Q, O, F>(part_fn: F) -> PartFn<P>
where
    F: Fn(&Q) -> O + 'static,
    P: Borrow<Q> + 'static,
    Q: ?Sized + 'static,
    O: Into<Answer> + 'static,
{
    Box::new(move |data: &P| -> Result<Answer, BoxError> {
        Ok(part_fn(Borrow::<Q>::borrow(data)).into())
    })
}

fn fallible<P, Q, O, E, F>(part_fn: F) -> PartFn<P>
where
    F: Fn(&Q) -> Result<O, E> + 'static,
    P: Borrow<Q> + 'static,
    Q: ?Sized + 'static,
    O: Into<Answer> + 'static,
    E: Into<BoxError> + 'static,
{
    Box::new(move |data: &P| -> Result<Answer, BoxError> {
        part_fn(Borrow::<Q>::borrow(data))
            .map(Into::into)
            .map_err(Into::into)
    })
}
