use std::str::FromStr;

use nom::{
    character::complete::{digit1, one_of},
    combinator::{map, map_res},
    sequence::tuple,
    IResult,
};
use tracing::{event, Level};
use tracing_subscriber::prelude::*;

use aor2025::load_input;

const DIAL_SIZE: i64 = 100;
const STARTING_POSITION: i64 = 50;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum Rotation {
    Left(i64),
    Right(i64),
}

impl Rotation {
    fn magnitude(&self) -> i64 {
        match self {
            Rotation::Left(n) | Rotation::Right(n) => *n,
        }
    }

    fn direction(&self) -> i64 {
        match self {
            Rotation::Left(_) => -1,
            Rotation::Right(_) => 1,
        }
    }
}

fn magnitude_parser(input: &str) -> IResult<&str, i64> {
    map_res(digit1, FromStr::from_str)(input)
}

fn rotation_parser(input: &str) -> IResult<&str, Rotation> {
    map(
        tuple((one_of("LR"), magnitude_parser)),
        |(letter, magnitude)| match letter {
            'L' => Rotation::Left(magnitude),
            _ => Rotation::Right(magnitude),
        },
    )(input)
}

impl TryFrom<&str> for Rotation {
    type Error = String;
    fn try_from(s: &str) -> Result<Rotation, String> {
        match rotation_parser(s) {
            Ok((unparsed, rotation)) => {
                if unparsed.is_empty() {
                    Ok(rotation)
                } else {
                    Err(format!("unexpected trailing junk: '{}'", unparsed))
                }
            }
            Err(e) => Err(format!("failed to parse '{}': {}", s, e)),
        }
    }
}

#[test]
fn test_parse_rotation() {
    assert_eq!(Ok(Rotation::Left(75)), Rotation::try_from("L75"));
    assert_eq!(Ok(Rotation::Right(230)), Rotation::try_from("R230"));
    assert_eq!(Ok(Rotation::Right(0)), Rotation::try_from("R0"));
    assert!(Rotation::try_from("X10").is_err());
    assert!(Rotation::try_from("L").is_err());
    assert!(Rotation::try_from("L-5").is_err());
    assert!(Rotation::try_from("L10x").is_err());
    assert!(Rotation::try_from("").is_err());
}

fn part1(rotations: &[Rotation]) -> i64 {
    fn turn(state: (i64, i64), rotation: &Rotation) -> (i64, i64) {
        let (position, zero_count) = state;
        // rem_euclid keeps a leftward overshoot on the dial; a plain % would
        // leave a negative position.
        let position =
            (position + rotation.direction() * rotation.magnitude()).rem_euclid(DIAL_SIZE);
        if position == 0 {
            (position, zero_count + 1)
        } else {
            (position, zero_count)
        }
    }
    let (_, zero_count) = rotations.iter().fold((STARTING_POSITION, 0), turn);
    zero_count
}

fn part2(rotations: &[Rotation]) -> i64 {
    let mut position = STARTING_POSITION;
    let mut zero_count = 0;
    for rotation in rotations {
        let starting_position = position;
        // The split has to happen while the magnitude is still non-negative;
        // integer division pulls toward zero once the sign goes on.
        let full_rotations = rotation.magnitude() / DIAL_SIZE;
        let remainder = rotation.magnitude() % DIAL_SIZE;

        // Each whole turn of the dial sweeps past 0 exactly once.
        zero_count += full_rotations;

        position += rotation.direction() * remainder;

        // The remainder is shorter than a full turn, so it can reach the
        // 0/100 boundary at most once.  A rotation starting from 0 merely
        // leaves it, which is not a pass.
        if starting_position != 0 && (position <= 0 || position >= DIAL_SIZE) {
            zero_count += 1;
        }

        position = position.rem_euclid(DIAL_SIZE);
        event!(
            Level::TRACE,
            "{:?}: {} -> {}, {} zero passes so far",
            rotation,
            starting_position,
            position,
            zero_count,
        );
    }
    zero_count
}

#[cfg(test)]
fn rotations(input: &[&str]) -> Vec<Rotation> {
    input
        .iter()
        .map(|s| Rotation::try_from(*s).expect("test rotations should be valid"))
        .collect()
}

#[test]
fn test_part1_example() {
    let example = rotations(&[
        "L68", "L30", "R48", "L5", "R60", "L55", "L1", "L99", "R14", "L82",
    ]);
    assert_eq!(part1(&example), 3);
}

#[test]
fn test_part2_example() {
    let example = rotations(&[
        "L68", "L30", "R48", "L5", "R60", "L55", "L1", "L99", "R14", "L82",
    ]);
    assert_eq!(part2(&example), 6);
}

#[test]
fn test_exact_landing() {
    // R50 from 50 stops exactly on 0; both rules count it once.
    assert_eq!(part1(&rotations(&["R50"])), 1);
    assert_eq!(part2(&rotations(&["R50"])), 1);
}

#[test]
fn test_full_rotation() {
    // R100 returns to 50 without stopping: no landing, one pass.
    assert_eq!(part1(&rotations(&["R100"])), 0);
    assert_eq!(part2(&rotations(&["R100"])), 1);
}

#[test]
fn test_leaving_zero_is_not_a_pass() {
    // The first L50 lands on 0; the second starts there and walks away
    // without earning another pass.
    assert_eq!(part1(&rotations(&["L50", "L50"])), 1);
    assert_eq!(part2(&rotations(&["L50", "L50"])), 1);
}

#[test]
fn test_empty_instruction_list() {
    assert_eq!(part1(&[]), 0);
    assert_eq!(part2(&[]), 0);
}

#[test]
fn test_large_magnitudes() {
    // R230 from 50 rests on 80: two whole turns, remainder short of 0.
    assert_eq!(part1(&rotations(&["R230"])), 0);
    assert_eq!(part2(&rotations(&["R230"])), 2);
    // R250 from 50 rests on 0: two whole turns plus a boundary landing.
    assert_eq!(part1(&rotations(&["R250"])), 1);
    assert_eq!(part2(&rotations(&["R250"])), 3);
    // L275 from 50 rests on 75, crossing 0 on the remainder step.
    assert_eq!(part1(&rotations(&["L275"])), 0);
    assert_eq!(part2(&rotations(&["L275"])), 3);
}

#[test]
fn test_leftward_normalization() {
    // 50 - 150 is -100, which must come back as position 0, not -100.
    assert_eq!(part1(&rotations(&["L150"])), 1);
    // 50 - 51 is -1, which must come back as 99.
    assert_eq!(part1(&rotations(&["L51"])), 0);
    assert_eq!(part1(&rotations(&["L51", "L99"])), 1);
}

#[test]
fn test_passes_never_fewer_than_landings() {
    let sequences: &[&[&str]] = &[
        &["R50"],
        &["R100"],
        &["L50", "L50"],
        &["L68", "L30", "R48", "L5", "R60", "L55", "L1", "L99", "R14", "L82"],
        &["R399", "L1", "L100", "R0"],
    ];
    for sequence in sequences {
        let rotations = rotations(sequence);
        assert!(part2(&rotations) >= part1(&rotations));
    }
}

fn main() {
    let fmt_layer = tracing_subscriber::fmt::layer().with_target(true);
    let filter_layer = match tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new("info"))
    {
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
        Ok(layer) => layer,
    };
    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();

    let lines = match load_input("day01.input.txt") {
        Ok(lines) => lines,
        Err(e) => {
            panic!("failed to read input: {}", e);
        }
    };
    let rotations: Vec<Rotation> = lines
        .iter()
        .map(|line| match Rotation::try_from(line.as_str()) {
            Ok(rotation) => rotation,
            Err(e) => {
                panic!("expected valid rotations: {}", e);
            }
        })
        .collect();
    println!("{}", part1(&rotations));
    println!("{}", part2(&rotations));
}
