use std::collections::{HashMap, HashSet};

use aor2025::load_input;

type Coord = (i64, i64);

#[derive(Debug)]
struct TachyonManifold {
    start: Coord,
    splitters: HashSet<Coord>,
    width: i64,
    height: i64,
}

impl TryFrom<&[String]> for TachyonManifold {
    type Error = String;
    fn try_from(lines: &[String]) -> Result<TachyonManifold, String> {
        let mut start: Option<Coord> = None;
        let mut splitters: HashSet<Coord> = HashSet::new();
        for (y, line) in lines.iter().enumerate() {
            for (x, ch) in line.char_indices() {
                match ch {
                    'S' => {
                        if start.is_some() {
                            return Err("found more than one start point".to_string());
                        }
                        start = Some((x as i64, y as i64));
                    }
                    '^' => {
                        splitters.insert((x as i64, y as i64));
                    }
                    _ => (),
                }
            }
        }
        match start {
            Some(start) => Ok(TachyonManifold {
                start,
                splitters,
                width: lines.iter().map(|line| line.len()).max().unwrap_or(0) as i64,
                height: lines.len() as i64,
            }),
            None => Err("could not find the start point".to_string()),
        }
    }
}

/// How many splitters the beam cascade reaches.
fn part1(manifold: &TachyonManifold) -> usize {
    let mut hit: HashSet<Coord> = HashSet::new();
    let mut beamed: HashSet<Coord> = HashSet::new();
    let mut heads: Vec<Coord> = vec![manifold.start];
    while let Some((x, y)) = heads.pop() {
        let next = (x, y + 1);
        if next.1 >= manifold.height || !beamed.insert(next) {
            continue;
        }
        if manifold.splitters.contains(&next) {
            hit.insert(next);
            if x > 0 {
                heads.push((x - 1, next.1));
            }
            if x + 1 < manifold.width {
                heads.push((x + 1, next.1));
            }
        } else {
            heads.push(next);
        }
    }
    hit.len()
}

/// The next splitter straight down from (x, y), exclusive.
fn splitter_below(splitters: &[Coord], x: i64, y: i64) -> Option<Coord> {
    // The slice is sorted by (x, y), so the first match is the nearest.
    splitters
        .iter()
        .find(|(sx, sy)| *sx == x && *sy > y)
        .copied()
}

fn paths_from(
    splitter: Coord,
    splitters: &[Coord],
    memo: &mut HashMap<Coord, usize>,
) -> usize {
    if let Some(&paths) = memo.get(&splitter) {
        return paths;
    }
    let (x, y) = splitter;
    // The two split beams fall in the neighbouring columns; one that never
    // meets another splitter survives as a single timeline, even off the
    // edge of the grid.
    let total = [x - 1, x + 1]
        .iter()
        .map(|&bx| match splitter_below(splitters, bx, y) {
            Some(next) => paths_from(next, splitters, memo),
            None => 1,
        })
        .sum();
    memo.insert(splitter, total);
    total
}

/// How many distinct timelines a single tachyon ends up in.
fn part2(manifold: &TachyonManifold) -> usize {
    let mut sorted: Vec<Coord> = manifold.splitters.iter().copied().collect();
    sorted.sort();
    match splitter_below(&sorted, manifold.start.0, manifold.start.1) {
        Some(first) => paths_from(first, &sorted, &mut HashMap::new()),
        None => 0,
    }
}

#[cfg(test)]
fn manifold_from(lines: &[&str]) -> TachyonManifold {
    let lines: Vec<String> = lines.iter().map(|s| s.to_string()).collect();
    TachyonManifold::try_from(lines.as_slice()).expect("test grid should be valid")
}

#[test]
fn test_parse() {
    let manifold = manifold_from(&[".S.", "...", ".^."]);
    assert_eq!(manifold.start, (1, 0));
    assert!(manifold.splitters.contains(&(1, 2)));
    assert_eq!(manifold.width, 3);
    assert_eq!(manifold.height, 3);

    let no_start: Vec<String> = vec!["...".to_string()];
    assert!(TachyonManifold::try_from(no_start.as_slice()).is_err());
    let two_starts: Vec<String> = vec!["SS.".to_string()];
    assert!(TachyonManifold::try_from(two_starts.as_slice()).is_err());
}

#[test]
fn test_single_splitter() {
    let manifold = manifold_from(&[".S.", "...", ".^.", "..."]);
    assert_eq!(part1(&manifold), 1);
    // Both split beams fall clear, so there are two timelines.
    assert_eq!(part2(&manifold), 2);
}

#[test]
fn test_cascade() {
    let manifold = manifold_from(&[".S.", ".^.", "^.^", "..."]);
    assert_eq!(part1(&manifold), 3);
    // Each second-row splitter doubles its timeline again.
    assert_eq!(part2(&manifold), 4);
}

#[test]
fn test_beam_with_no_splitters() {
    let manifold = manifold_from(&[".S.", "...", "..."]);
    assert_eq!(part1(&manifold), 0);
    assert_eq!(part2(&manifold), 0);
}

#[test]
fn test_shadowed_splitter_is_not_hit() {
    // The centre column is blocked by the first splitter, so the one two
    // rows below it is only reachable through the side beams.
    let manifold = manifold_from(&["S..", "^..", "...", "^.."]);
    assert_eq!(part1(&manifold), 1);
}

fn main() {
    let lines = match load_input("day07.input.txt") {
        Ok(lines) => lines,
        Err(e) => {
            panic!("failed to read input: {}", e);
        }
    };
    let manifold = match TachyonManifold::try_from(lines.as_slice()) {
        Ok(manifold) => manifold,
        Err(e) => {
            panic!("expected a valid grid: {}", e);
        }
    };
    println!("{}", part1(&manifold));
    println!("{}", part2(&manifold));
}
