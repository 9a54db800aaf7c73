use std::collections::HashMap;

use microlp::{ComparisonOp, LinearExpr, OptimizationDirection, Problem};
use pathfinding::directed::bfs::bfs;

use aor2025::load_input;

#[derive(Debug, PartialEq, Eq)]
struct LightMachine {
    /// Target light pattern, one bit per light.
    target: usize,
    /// Per button, the indices it wires into.
    buttons: Vec<Vec<usize>>,
    /// Per counter, the joltage it must reach.
    joltage: Vec<usize>,
}

fn parse_indices(body: &str, piece: &str) -> Result<Vec<usize>, String> {
    body.split(',')
        .map(|index| {
            index
                .parse()
                .map_err(|e| format!("bad index in '{}': {}", piece, e))
        })
        .collect()
}

fn strip_wrapper<'a>(piece: &'a str, open: char, close: char) -> Result<&'a str, String> {
    piece
        .strip_prefix(open)
        .and_then(|body| body.strip_suffix(close))
        .ok_or_else(|| format!("expected '{}...{}', got '{}'", open, close, piece))
}

impl TryFrom<&str> for LightMachine {
    type Error = String;
    fn try_from(line: &str) -> Result<LightMachine, String> {
        let mut target: Option<usize> = None;
        let mut buttons: Vec<Vec<usize>> = Vec::new();
        let mut joltage: Vec<usize> = Vec::new();
        for piece in line.split_whitespace() {
            if piece.starts_with('[') {
                let body = strip_wrapper(piece, '[', ']')?;
                target = Some(
                    body.char_indices()
                        .filter(|(_, ch)| *ch == '#')
                        .map(|(i, _)| 1 << i)
                        .sum(),
                );
            } else if piece.starts_with('(') {
                buttons.push(parse_indices(strip_wrapper(piece, '(', ')')?, piece)?);
            } else if piece.starts_with('{') {
                joltage = parse_indices(strip_wrapper(piece, '{', '}')?, piece)?;
            } else {
                return Err(format!("unrecognized piece '{}' in '{}'", piece, line));
            }
        }
        match target {
            Some(target) => Ok(LightMachine {
                target,
                buttons,
                joltage,
            }),
            None => Err(format!("no light pattern in '{}'", line)),
        }
    }
}

#[test]
fn test_parse_machine() {
    assert_eq!(
        LightMachine::try_from("[.##.] (0,2) (1,3) {7,5,12,1}"),
        Ok(LightMachine {
            target: 0b0110,
            buttons: vec![vec![0, 2], vec![1, 3]],
            joltage: vec![7, 5, 12, 1],
        })
    );
    assert!(LightMachine::try_from("(0,2) {7}").is_err());
    assert!(LightMachine::try_from("[#] (x) {7}").is_err());
    assert!(LightMachine::try_from("[#] huh {7}").is_err());
}

/// Fewest button presses that toggle the lights from all-off to the target.
fn fewest_light_presses(machine: &LightMachine) -> usize {
    let masks: Vec<usize> = machine
        .buttons
        .iter()
        .map(|button| button.iter().map(|index| 1 << index).sum())
        .collect();
    let path = bfs(
        &0usize,
        |state| masks.iter().map(|mask| state ^ mask).collect::<Vec<usize>>(),
        |state| *state == machine.target,
    );
    match path {
        Some(path) => path.len() - 1,
        None => {
            panic!("no combination of buttons lights the target pattern");
        }
    }
}

/// Fewest total presses that bring every wired counter to its joltage
/// target, where each press adds 1 to all of a button's counters.
fn fewest_joltage_presses(machine: &LightMachine) -> usize {
    let mut problem = Problem::new(OptimizationDirection::Minimize);
    let mut counter_sums: HashMap<usize, LinearExpr> = HashMap::new();
    for button in &machine.buttons {
        let presses = problem.add_integer_var(1.0, (0, i32::MAX));
        for &counter in button {
            counter_sums
                .entry(counter)
                .or_insert_with(LinearExpr::empty)
                .add(presses, 1.0);
        }
    }
    for (counter, target) in machine.joltage.iter().enumerate() {
        // A counter no button feeds cannot be constrained.
        if let Some(sum) = counter_sums.get(&counter) {
            problem.add_constraint(sum.clone(), ComparisonOp::Eq, *target as f64);
        }
    }
    match problem.solve() {
        Ok(solution) => solution
            .iter()
            .map(|(_, presses)| presses.round() as usize)
            .sum(),
        Err(e) => {
            panic!("no combination of presses reaches the joltage targets: {}", e);
        }
    }
}

fn part1(machines: &[LightMachine]) -> usize {
    machines.iter().map(fewest_light_presses).sum()
}

fn part2(machines: &[LightMachine]) -> usize {
    machines.iter().map(fewest_joltage_presses).sum()
}

#[cfg(test)]
fn machine(line: &str) -> LightMachine {
    LightMachine::try_from(line).expect("test machine should be valid")
}

#[test]
fn test_fewest_light_presses() {
    // One button matches the target exactly.
    assert_eq!(fewest_light_presses(&machine("[#..#] (0) (3) (0,3) {1}")), 1);
    // No single button works, so two are needed.
    assert_eq!(fewest_light_presses(&machine("[##] (0) (1) {1}")), 2);
    // Only pressing all three buttons leaves just light 2 on.
    assert_eq!(
        fewest_light_presses(&machine("[..#] (0) (0,1) (1,2) {1}")),
        3
    );
}

#[test]
fn test_fewest_joltage_presses() {
    // Shared button does the heavy lifting: 3 presses of (0,1), 2 of (1).
    assert_eq!(
        fewest_joltage_presses(&machine("[#] (0) (1) (0,1) {3,5}")),
        5
    );
    // Independent counters just add up.
    assert_eq!(fewest_joltage_presses(&machine("[#] (0) (1) {2,3}")), 5);
}

fn main() {
    let lines = match load_input("day10.input.txt") {
        Ok(lines) => lines,
        Err(e) => {
            panic!("failed to read input: {}", e);
        }
    };
    let machines: Vec<LightMachine> = lines
        .iter()
        .map(|line| match LightMachine::try_from(line.as_str()) {
            Ok(machine) => machine,
            Err(e) => {
                panic!("expected valid machines: {}", e);
            }
        })
        .collect();
    println!("{}", part1(&machines));
    println!("{}", part2(&machines));
}
