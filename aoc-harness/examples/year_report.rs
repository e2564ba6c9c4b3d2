//! Example building a year from plugins and hand-registered days, then
//! printing a verification report for it
//!
//! Run with: cargo run --example year_report

use aoc_harness::report::DayReport;
use aoc_harness::{puzzle, Day, DayBuilder, Expected, InlineInput, RegistrationError, Year};

// ============================================================================
// Day 1: registered through the plugin system
// ============================================================================

fn depths(input: &str) -> impl Iterator<Item = Result<u32, std::num::ParseIntError>> + '_ {
    input.lines().map(|line| line.trim().parse())
}

fn increases(depths: &[u32], window: usize) -> usize {
    depths
        .windows(window + 1)
        .filter(|pair| pair[window] > pair[0])
        .count()
}

#[puzzle(year = 2021, day = 1, tags = ["easy"])]
fn sonar_sweep() -> DayBuilder<Vec<u32>> {
    Day::builder(1)
        .try_generator(depths)
        .part1(|depths: &[u32]| increases(depths, 1))
        .part2(|depths: &[u32]| increases(depths, 3))
        .example(
            "199\n200\n208\n210\n200\n207\n240\n269\n260\n263",
            Expected::both(7, 5),
        )
        .input(InlineInput::new("100\n101\n99\n120\n121\n90\n130"))
}

// ============================================================================
// Day 2: registered by hand, with a parser and one unimplemented part
// ============================================================================

#[derive(Debug, Default)]
struct Position {
    horizontal: i64,
    depth: i64,
}

fn navigate(input: &str) -> Result<Position, std::num::ParseIntError> {
    let mut position = Position::default();
    for (command, amount) in input.lines().filter_map(|line| line.split_once(' ')) {
        let amount: i64 = amount.trim().parse()?;
        match command {
            "forward" => position.horizontal += amount,
            "down" => position.depth += amount,
            "up" => position.depth -= amount,
            _ => {}
        }
    }
    Ok(position)
}

fn dive() -> DayBuilder<Position> {
    Day::builder(2)
        .parser(navigate)
        .part1(|position: &Position| position.horizontal * position.depth)
        .example(
            "forward 5\ndown 5\nforward 8\nup 3\ndown 8\nforward 2",
            Expected::part1(150),
        )
        // Part 2 is not implemented yet, so the report skips it
        .example("forward 1", Expected::part2(0))
        .input(InlineInput::new("forward 4\ndown 3\nup 1"))
}

fn print_report(report: &DayReport) {
    println!("Day {}", report.day);
    for part in &report.parts {
        match &part.dispositions {
            Ok(dispositions) => {
                let symbols: String = dispositions.iter().map(|d| d.symbol()).collect();
                let tally = aoc_harness::report::Tally::from(dispositions.as_slice());
                println!("  Part {}: examples [{}] {}", part.part, symbols, tally);
            }
            Err(e) => println!("  Part {}: examples failed: {}", part.part, e),
        }
        match &part.answer {
            Ok(result) => println!(
                "  Part {}: answer {} (parse {}µs, solve {}µs)",
                part.part,
                result.answer,
                result.parse_duration().num_microseconds().unwrap_or(0),
                result.solve_duration().num_microseconds().unwrap_or(0),
            ),
            Err(e) => println!("  Part {}: run failed: {}", part.part, e),
        }
    }
}

fn main() -> Result<(), RegistrationError> {
    let year = Year::builder_from_env(2021)
        .register_all_plugins()?
        .register(dive())?
        .build();

    println!("Year {} ({} days)", year.id(), year.len());
    for report in year.reports() {
        print_report(&report);
    }

    // Filtered discovery: only days tagged "hard" (none here)
    let hard = Year::builder_from_env(2021)
        .register_plugins(|plugin| plugin.tags.contains(&"hard"))?
        .build();
    println!("Days tagged hard: {}", hard.len());

    Ok(())
}
