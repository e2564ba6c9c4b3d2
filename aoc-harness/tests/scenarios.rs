//! End-to-end scenarios for the day pipeline

use aoc_harness::report::Disposition;
use aoc_harness::{Answer, Day, DynDay, Expected, FileInput, InlineInput, Part, RunError};
use std::fs;
use tempfile::TempDir;

fn trimmed_lines(input: &str) -> impl Iterator<Item = String> + '_ {
    input.lines().map(|line| line.trim().to_owned())
}

fn count_lines(lines: &[String]) -> usize {
    lines.len()
}

/// Lines of the form `R12` / `L5` as signed offsets
fn rotations(input: &str) -> impl Iterator<Item = Result<i32, anyhow::Error>> + '_ {
    input.trim().lines().map(|line| {
        let line = line.trim();
        let sign = match line.as_bytes().first() {
            Some(b'R') => 1,
            Some(b'L') => -1,
            _ => anyhow::bail!("Unexpected line prefix: {}", line),
        };
        Ok(sign * line[1..].parse::<i32>()?)
    })
}

/// Number of times a dial starting at 50 lands on zero
fn zero_landings(offsets: &[i32]) -> usize {
    offsets
        .iter()
        .scan(50, |dial, offset| {
            *dial = (*dial + offset).rem_euclid(100);
            Some(*dial)
        })
        .filter(|&dial| dial == 0)
        .count()
}

#[test]
fn test_line_count_example_passes() {
    let day = Day::builder(1)
        .generator(trimmed_lines)
        .part1(count_lines)
        .test(|| "a\nb\nc", Expected::part1(3))
        .build();

    assert_eq!(day.evaluate_all(Part::One).unwrap(), vec![Disposition::Pass]);
}

#[test]
fn test_expected_but_unimplemented_part_is_an_error() {
    let day = Day::builder(1)
        .generator(trimmed_lines)
        .part2(count_lines)
        .example("a\nb", Expected::part1(2))
        .build();

    assert!(matches!(
        day.evaluate_all(Part::One),
        Err(RunError::PartNotImplemented(Part::One))
    ));
    assert_eq!(
        day.evaluate_all(Part::Two).unwrap(),
        vec![Disposition::NotApplicable]
    );
}

#[test]
fn test_each_example_scores_only_its_own_part() {
    let day = Day::builder(1)
        .generator(trimmed_lines)
        .part1(count_lines)
        .part2(|lines: &[String]| lines.iter().map(String::len).sum::<usize>())
        .example("a\nb\nc", Expected::part1(3))
        .example("ab\ncd", Expected::part2(5))
        .build();

    assert_eq!(
        day.evaluate_all(Part::One).unwrap(),
        vec![Disposition::Pass, Disposition::NotApplicable]
    );
    assert_eq!(
        day.evaluate_all(Part::Two).unwrap(),
        vec![Disposition::NotApplicable, Disposition::Fail]
    );
}

#[test]
fn test_partial_credit_across_examples() {
    let day = Day::builder(1)
        .generator(trimmed_lines)
        .part1(count_lines)
        .example("a", Expected::part1(1))
        .example("a\nb", Expected::part1(3))
        .example("a\nb\nc", Expected::both(3, 0))
        .build();

    assert_eq!(
        day.evaluate_all(Part::One).unwrap(),
        vec![Disposition::Pass, Disposition::Fail, Disposition::Pass]
    );
}

#[test]
fn test_none_expectation_is_not_applicable() {
    let day = Day::builder(1)
        .identity()
        .part1(|text: &str| text.len())
        .part2(|text: &str| text.len())
        .example("abc", Expected::both(3, None::<usize>))
        .example("abc", Expected::part1(None::<usize>))
        .build();

    assert!(day.tests()[0].has_part(Part::One));
    assert!(!day.tests()[0].has_part(Part::Two));
    assert_eq!(
        day.evaluate_all(Part::One).unwrap(),
        vec![Disposition::Pass, Disposition::NotApplicable]
    );
    assert_eq!(
        day.evaluate_all(Part::Two).unwrap(),
        vec![Disposition::NotApplicable, Disposition::NotApplicable]
    );
}

#[test]
fn test_captured_input_is_independent_of_its_source() {
    let mut source = String::from("a\nb");
    let day = Day::builder(1)
        .generator(trimmed_lines)
        .part1(count_lines)
        .test(|| source.clone(), Expected::part1(2))
        .build();

    source.push_str("\nc\nd");

    assert_eq!(day.tests()[0].input(), "a\nb");
    assert_eq!(day.evaluate_all(Part::One).unwrap(), vec![Disposition::Pass]);
}

#[test]
fn test_provider_called_once_at_registration() {
    let mut calls = 0;
    let day = Day::builder(1)
        .identity()
        .part1(|text: &str| text.len())
        .test(
            || {
                calls += 1;
                "xyz"
            },
            Expected::part1(3),
        )
        .build();

    assert_eq!(calls, 1);
    day.evaluate_all(Part::One).unwrap();
    day.evaluate_all(Part::One).unwrap();
    assert_eq!(day.tests().len(), 1);
}

#[test]
fn test_lazy_generator_run_twice_from_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("day1.txt");
    fs::write(&path, "L68\nL30\nR48\nL5\nR60\nL55\nL1\nL99\nR14\nL82\n").unwrap();

    let day = Day::builder(1)
        .try_generator(rotations)
        // Two traversals of the same data
        .part1(|offsets: &[i32]| {
            let total: i32 = offsets.iter().sum();
            format!("{}:{}", zero_landings(offsets), total)
        })
        .input(FileInput::new(&path))
        .build();

    let first = day.run(Part::One).unwrap();
    let second = day.run(Part::One).unwrap();
    assert_eq!(first, Answer::from("3:-218"));
    assert_eq!(first, second);
}

#[test]
fn test_dial_example_from_captured_text() {
    let day = Day::builder(1)
        .try_generator(rotations)
        .part1(zero_landings)
        .test(
            || "L68\nL30\nR48\nL5\nR60\nL55\nL1\nL99\nR14\nL82",
            Expected::part1(3),
        )
        .build();

    assert_eq!(day.evaluate_all(Part::One).unwrap(), vec![Disposition::Pass]);
}

#[test]
fn test_generator_error_reaches_caller_unwrapped() {
    let day = Day::builder(1)
        .try_generator(rotations)
        .part1(zero_landings)
        .input(InlineInput::new("R10\nX3"))
        .build();

    let err = day.run(Part::One).unwrap_err();
    assert_eq!(err.to_string(), "Unexpected line prefix: X3");
}

#[test]
fn test_part_error_reaches_caller_unwrapped() {
    let day = Day::builder(1)
        .identity()
        .try_part1(|text: &str| -> anyhow::Result<usize> {
            if text.is_empty() {
                anyhow::bail!("empty input");
            }
            Ok(text.len())
        })
        .input(InlineInput::new(""))
        .build();

    match day.run(Part::One) {
        Err(RunError::Part(inner)) => assert_eq!(inner.to_string(), "empty input"),
        other => panic!("Expected part error, got {:?}", other),
    }
}

#[test]
fn test_unreadable_input_is_missing_input() {
    let temp = TempDir::new().unwrap();
    let day = Day::builder(9)
        .identity()
        .part1(|text: &str| text.len())
        .input(FileInput::new(temp.path().join("day9.txt")))
        .build();

    let err = day.run(Part::One).unwrap_err();
    assert!(matches!(err, RunError::MissingInput { day: 9, source: Some(_) }));
    assert_eq!(err.to_string(), "Missing input for day 9");
}

#[test]
fn test_evaluation_stops_at_first_part_error() {
    let day = Day::builder(1)
        .identity()
        .try_part1(|text: &str| text.parse::<u32>())
        .example("7", Expected::part1(7))
        .example("seven", Expected::part1(7))
        .example("8", Expected::part1(8))
        .build();

    match day.evaluate_all(Part::One) {
        Err(RunError::Part(inner)) => {
            assert!(inner.downcast_ref::<std::num::ParseIntError>().is_some());
        }
        other => panic!("Expected part error, got {:?}", other),
    }
}
