//! Year registry for managing the days of one puzzle set

use crate::error::RegistrationError;
use crate::input::FileInput;
use crate::instance::{DynDay, IntoDynDay};
use crate::report::DayReport;
use log::debug;
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};

/// Days per year in AoC (1-25)
pub const DAYS_PER_YEAR: u8 = 25;

/// Environment variable naming the directory that holds per-year input folders
pub const INPUT_DIR_ENV: &str = "AOC_INPUT_DIR";

/// Input directory used when [`INPUT_DIR_ENV`] is unset
pub const DEFAULT_INPUT_DIR: &str = "input";

/// Maps an input root and a day number to that day's input file
pub type InputLayout = fn(&Path, u8) -> PathBuf;

/// Default layout: `<root>/day<number>.txt`
pub fn default_layout(root: &Path, day: u8) -> PathBuf {
    root.join(format!("day{}.txt", day))
}

/// Resolve the input root for `year` from an optional input directory
///
/// `None` falls back to [`DEFAULT_INPUT_DIR`]; the year id is appended either way.
pub fn input_root_for(input_dir: Option<OsString>, year: u16) -> PathBuf {
    input_dir
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT_DIR))
        .join(year.to_string())
}

/// Plugin information for automatic day registration
///
/// Normally submitted by the `#[puzzle]` attribute rather than by hand.
///
/// # Example
///
/// ```no_run
/// use aoc_harness::{Day, DynDay, Expected, IntoDynDay, PuzzlePlugin};
///
/// fn define() -> Box<dyn DynDay> {
///     Day::builder(1)
///         .identity()
///         .part1(|text: &str| text.lines().count())
///         .example("a\nb", Expected::part1(2))
///         .into_dyn_day()
/// }
///
/// aoc_harness::inventory::submit! {
///     PuzzlePlugin {
///         year: 2023,
///         day: 1,
///         define,
///         tags: &["easy"],
///     }
/// }
/// ```
pub struct PuzzlePlugin {
    /// The puzzle set (year) this day belongs to
    pub year: u16,
    /// The day number (1-25)
    pub day: u8,
    /// Builds the day's pipeline
    pub define: fn() -> Box<dyn DynDay>,
    /// Optional tags for filtering (e.g., "easy", "grid", "wip")
    pub tags: &'static [&'static str],
}

// Enable plugin collection via inventory
inventory::collect!(PuzzlePlugin);

/// Builder for constructing a [`Year`] with a fluent API
///
/// Registration fails loudly on a duplicate day number instead of replacing
/// the earlier day.
///
/// # Example
///
/// ```
/// use aoc_harness::{Day, Expected, Year};
///
/// let year = Year::builder(2023, "input/2023")
///     .register(Day::builder(1).identity().part1(|text: &str| text.len()))
///     .unwrap()
///     .register(Day::builder(2).identity().part2(|text: &str| text.len()))
///     .unwrap()
///     .build();
///
/// assert_eq!(year.len(), 2);
/// assert!(year.day(1).unwrap().has_part1());
/// ```
pub struct YearBuilder {
    id: u16,
    input_root: PathBuf,
    layout: InputLayout,
    days: BTreeMap<u8, Box<dyn DynDay>>,
}

impl YearBuilder {
    /// Replace the per-day input file naming
    ///
    /// Applies to days registered after this call.
    pub fn input_layout(mut self, layout: InputLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Register a day
    ///
    /// Days without an explicit input source get a [`FileInput`] located by the
    /// builder's layout under the input root.
    ///
    /// # Returns
    /// * `Ok(Self)` - Builder with the day registered, ready for chaining
    /// * `Err(RegistrationError::InvalidDay)` - Day number outside 1..=25
    /// * `Err(RegistrationError::DuplicateDay)` - Day number already registered
    pub fn register(mut self, day: impl IntoDynDay) -> Result<Self, RegistrationError> {
        let mut day = day.into_dyn_day();
        let number = day.number();
        if number == 0 || number > DAYS_PER_YEAR {
            return Err(RegistrationError::InvalidDay(number));
        }

        match self.days.entry(number) {
            Entry::Occupied(_) => Err(RegistrationError::DuplicateDay {
                year: self.id,
                day: number,
            }),
            Entry::Vacant(slot) => {
                let path = (self.layout)(&self.input_root, number);
                day.bind_default_input(Box::new(FileInput::new(path)));
                debug!("year {}: registered day {}", self.id, number);
                slot.insert(day);
                Ok(self)
            }
        }
    }

    /// Register every collected plugin of this builder's year
    ///
    /// Plugins are registered in ascending day order.
    pub fn register_all_plugins(self) -> Result<Self, RegistrationError> {
        self.register_plugins(|_| true)
    }

    /// Register the plugins of this builder's year that match `filter`
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use aoc_harness::Year;
    /// // Register only days tagged as "easy"
    /// let year = Year::builder(2023, "input/2023")
    ///     .register_plugins(|plugin| plugin.tags.contains(&"easy"))
    ///     .unwrap()
    ///     .build();
    /// ```
    pub fn register_plugins<F>(mut self, filter: F) -> Result<Self, RegistrationError>
    where
        F: Fn(&PuzzlePlugin) -> bool,
    {
        let mut plugins: Vec<&PuzzlePlugin> = inventory::iter::<PuzzlePlugin>
            .into_iter()
            .filter(|plugin| plugin.year == self.id && filter(plugin))
            .collect();
        plugins.sort_by_key(|plugin| plugin.day);
        debug!("year {}: discovered {} plugin(s)", self.id, plugins.len());

        for plugin in plugins {
            self = self.register_plugin(plugin)?;
        }
        Ok(self)
    }

    fn register_plugin(self, plugin: &PuzzlePlugin) -> Result<Self, RegistrationError> {
        let day = (plugin.define)();
        if day.number() != plugin.day {
            return Err(RegistrationError::DayMismatch {
                year: plugin.year,
                declared: plugin.day,
                defined: day.number(),
            });
        }
        self.register(day)
    }

    /// Finalize the builder
    pub fn build(self) -> Year {
        Year {
            id: self.id,
            input_root: self.input_root,
            days: self.days,
        }
    }
}

impl fmt::Debug for YearBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("YearBuilder")
            .field("id", &self.id)
            .field("input_root", &self.input_root)
            .field("days", &self.days.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// A puzzle set: days keyed by number plus the root of their real inputs
pub struct Year {
    id: u16,
    input_root: PathBuf,
    days: BTreeMap<u8, Box<dyn DynDay>>,
}

impl Year {
    /// Start building a year whose inputs live under `input_root`
    pub fn builder(id: u16, input_root: impl Into<PathBuf>) -> YearBuilder {
        YearBuilder {
            id,
            input_root: input_root.into(),
            layout: default_layout,
            days: BTreeMap::new(),
        }
    }

    /// Start building a year whose input root comes from [`INPUT_DIR_ENV`]
    pub fn builder_from_env(id: u16) -> YearBuilder {
        Self::builder(id, input_root_for(std::env::var_os(INPUT_DIR_ENV), id))
    }

    pub fn id(&self) -> u16 {
        self.id
    }

    pub fn input_root(&self) -> &Path {
        &self.input_root
    }

    /// Look up a registered day
    pub fn day(&self, number: u8) -> Option<&dyn DynDay> {
        self.days.get(&number).map(|day| day.as_ref())
    }

    /// Registered days in ascending number order
    pub fn days(&self) -> impl Iterator<Item = &(dyn DynDay + 'static)> + '_ {
        self.days.values().map(|day| day.as_ref())
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Collect a [`DayReport`] for every day, in order
    pub fn reports(&self) -> Vec<DayReport> {
        self.days().map(|day| DayReport::collect(day)).collect()
    }
}

impl fmt::Debug for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Year")
            .field("id", &self.id)
            .field("input_root", &self.input_root)
            .field("days", &self.days.keys().collect::<Vec<_>>())
            .finish()
    }
}
