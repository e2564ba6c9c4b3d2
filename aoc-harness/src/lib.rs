//! Advent of Code Harness Library
//!
//! A small framework that runs puzzle solutions against their real input and
//! verifies them against worked examples first.
//!
//! # Overview
//!
//! This library provides:
//! - A builder for a day's pipeline: one normalization step, up to two parts,
//!   and any number of worked examples
//! - Eager materialization of lazily generated input, so part functions can
//!   traverse their data repeatedly
//! - Per-example verification with pass/fail/not-applicable dispositions
//! - A year registry that binds each day to its input file and rejects
//!   duplicate registrations
//! - Plugin discovery through the `#[puzzle]` attribute
//!
//! # Quick Example
//!
//! ```
//! use aoc_harness::{Day, DynDay, Expected, InlineInput, Part, Year};
//! use aoc_harness::report::Disposition;
//!
//! fn calibration(input: &str) -> impl Iterator<Item = u32> + '_ {
//!     input.lines().map(|line| {
//!         let digits: Vec<u32> = line.chars().filter_map(|c| c.to_digit(10)).collect();
//!         digits[0] * 10 + digits[digits.len() - 1]
//!     })
//! }
//!
//! let day = Day::builder(1)
//!     .generator(calibration)
//!     .part1(|values: &[u32]| values.iter().sum::<u32>())
//!     .example("1abc2\npqr3stu8vwx\na1b2c3d4e5f\ntreb7uchet", Expected::part1(142))
//!     .example("two1nine", Expected::part2(29))
//!     .input(InlineInput::new("12\n34"));
//!
//! let year = Year::builder(2023, "input/2023").register(day).unwrap().build();
//! let day = year.day(1).unwrap();
//!
//! assert_eq!(
//!     day.evaluate_all(Part::One).unwrap(),
//!     vec![Disposition::Pass, Disposition::NotApplicable]
//! );
//! assert_eq!(day.run(Part::One).unwrap().to_string(), "46");
//! ```
//!
//! # Key Concepts
//!
//! ## Normalization
//!
//! [`Day::builder`] starts with the choice of normalization: `identity`,
//! `generator` (any sequence, drained into a `Vec`), `try_generator`
//! (fallible items) or `parser` (any representation). Every run and every
//! example evaluation normalizes from scratch.
//!
//! ## DynDay Trait
//!
//! The [`DynDay`] trait provides type erasure for days with different
//! intermediate representations. Key methods:
//! - `run(part)`: Reads the bound input and computes the answer
//! - `evaluate_all(part)`: Replays every example and reports dispositions
//!
//! ## Plugin System
//!
//! Use `#[puzzle]` to register a day definition automatically:
//! ```ignore
//! #[puzzle(year = 2023, day = 1, tags = ["easy"])]
//! fn day1() -> DayBuilder<Vec<u32>> {
//!     Day::builder(1).generator(calibration).part1(sum)
//! }
//! ```
//! then call [`YearBuilder::register_all_plugins`].

mod answer;
mod day;
mod error;
pub mod generator;
mod input;
mod instance;
mod part;
mod registry;
pub mod report;
mod test_case;

// Re-export public API
pub use answer::Answer;
pub use day::{Day, DayBuilder, NewDay};
pub use error::{BoxError, PartOutOfRange, RegistrationError, RunError};
pub use input::{FileInput, InlineInput, InputSource};
pub use instance::{DynDay, IntoDynDay, SolveResult};
pub use part::Part;
pub use registry::{
    default_layout, input_root_for, InputLayout, PuzzlePlugin, Year, YearBuilder,
    DAYS_PER_YEAR, DEFAULT_INPUT_DIR, INPUT_DIR_ENV,
};
pub use test_case::{Expected, TestCase};

// Re-export inventory for use by the attribute macro
pub use inventory;

// Re-export the attribute macro
pub use aoc_harness_macros::puzzle;
