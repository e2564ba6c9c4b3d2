//! Input normalization
//!
//! A generator turns raw puzzle text into a sequence of items. It may return a
//! concrete collection or a lazy iterator that borrows the input; either way
//! the pipeline drains it into a `Vec` before any part function sees it, so
//! parts can traverse the data as many times as they like.

/// Something that turns puzzle text into a sequence of items
///
/// Implemented for every `Fn(&str) -> impl IntoIterator`. Generators whose
/// iterator borrows the input (e.g. built on [`str::lines`]) must be named
/// functions rather than closures, since closures cannot express a return
/// type tied to their argument's lifetime.
///
/// # Example
///
/// ```
/// use aoc_harness::generator::{materialize, Generate};
///
/// fn numbers(input: &str) -> impl Iterator<Item = i64> + '_ {
///     input.lines().filter_map(|line| line.trim().parse().ok())
/// }
///
/// let data = materialize(&numbers, "1\n2\n3");
/// assert_eq!(data, vec![1, 2, 3]);
/// ```
pub trait Generate<'a> {
    /// Element type of the normalized sequence
    type Item;
    /// The sequence as produced, possibly lazy
    type Output: IntoIterator<Item = Self::Item>;

    fn generate(&self, input: &'a str) -> Self::Output;
}

impl<'a, F, I> Generate<'a> for F
where
    F: Fn(&'a str) -> I,
    I: IntoIterator,
{
    type Item = I::Item;
    type Output = I;

    fn generate(&self, input: &'a str) -> I {
        self(input)
    }
}

/// Run a generator and drain its output into a repeatable `Vec`
pub fn materialize<'a, G>(generator: &G, input: &'a str) -> Vec<G::Item>
where
    G: Generate<'a> + ?Sized,
{
    generator.generate(input).into_iter().collect()
}

/// Run a fallible generator, stopping at the first error
pub fn try_materialize<'a, G, T, E>(generator: &G, input: &'a str) -> Result<Vec<T>, E>
where
    G: Generate<'a, Item = Result<T, E>> + ?Sized,
{
    generator.generate(input).into_iter().collect()
}
