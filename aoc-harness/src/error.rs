//! Error types for the harness library

use crate::part::Part;
use thiserror::Error;

/// Boxed error produced by puzzle code (generators and part functions)
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Error type for running a day, either against real input or its tests
#[derive(Debug, Error)]
pub enum RunError {
    /// No input source is bound, or the bound source could not be read
    #[error("Missing input for day {day}")]
    MissingInput {
        day: u8,
        #[source]
        source: Option<std::io::Error>,
    },
    /// The requested part has no registered function
    #[error("Part {0} is not implemented")]
    PartNotImplemented(Part),
    /// The generator rejected its input; the puzzle's own error is passed through
    #[error(transparent)]
    Generator(BoxError),
    /// A part function failed; the puzzle's own error is passed through
    #[error(transparent)]
    Part(BoxError),
}

/// Error type for registration failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RegistrationError {
    /// Attempted to register a day number that is already taken in this year
    #[error("Duplicate registration for year {year} day {day}")]
    DuplicateDay { year: u16, day: u8 },
    /// Day number outside 1..=25
    #[error("Invalid day {0}: must be between 1 and 25")]
    InvalidDay(u8),
    /// A plugin declared one day but its definition built another
    #[error("Plugin for year {year} declares day {declared} but defines day {defined}")]
    DayMismatch { year: u16, declared: u8, defined: u8 },
}

/// A part number other than 1 or 2
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("Part {0} is out of range")]
pub struct PartOutOfRange(pub u8);
