use ndarray::prelude::*;

use aor2025::load_input;

#[derive(Debug, Clone)]
struct FloorMap {
    rolls: Array2<bool>,
}

fn neighbours(r: usize, c: usize, rows: usize, cols: usize) -> Vec<(usize, usize)> {
    // All eight surrounding cells, clipped to the grid.
    let mut result: Vec<(usize, usize)> = Vec::with_capacity(8);
    for dr in [-1i64, 0, 1] {
        for dc in [-1i64, 0, 1] {
            if dr == 0 && dc == 0 {
                continue;
            }
            let nr = r as i64 + dr;
            let nc = c as i64 + dc;
            if nr >= 0 && nr < rows as i64 && nc >= 0 && nc < cols as i64 {
                result.push((nr as usize, nc as usize));
            }
        }
    }
    result
}

impl TryFrom<&[String]> for FloorMap {
    type Error = String;
    fn try_from(lines: &[String]) -> Result<FloorMap, String> {
        if lines.is_empty() {
            return Err("no data".to_string());
        }
        let height = lines.len();
        let width = lines[0].len();
        for line in lines {
            if line.len() != width {
                return Err(format!(
                    "ragged grid: expected width {}, got {} in '{}'",
                    width,
                    line.len(),
                    line
                ));
            }
        }
        let cells: Vec<Vec<char>> = lines.iter().map(|line| line.chars().collect()).collect();
        let rolls = Array::from_shape_fn((height, width), |(r, c)| cells[r][c] == '@');
        Ok(FloorMap { rolls })
    }
}

impl FloorMap {
    fn occupied_neighbours(&self, r: usize, c: usize) -> usize {
        neighbours(r, c, self.rolls.nrows(), self.rolls.ncols())
            .into_iter()
            .filter(|pos| self.rolls[*pos])
            .count()
    }

    /// Rolls a forklift can currently reach: fewer than 4 occupied
    /// neighbours.
    fn accessible(&self) -> Vec<(usize, usize)> {
        self.rolls
            .indexed_iter()
            .filter(|(_, occupied)| **occupied)
            .filter(|((r, c), _)| self.occupied_neighbours(*r, *c) < 4)
            .map(|(pos, _)| pos)
            .collect()
    }
}

fn part1(map: &FloorMap) -> usize {
    map.accessible().len()
}

fn part2(map: &FloorMap) -> usize {
    let mut map = map.clone();
    let mut removed = 0;
    loop {
        let accessible = map.accessible();
        if accessible.is_empty() {
            break;
        }
        removed += accessible.len();
        for pos in accessible {
            map.rolls[pos] = false;
        }
    }
    removed
}

#[cfg(test)]
fn map_from(lines: &[&str]) -> FloorMap {
    let lines: Vec<String> = lines.iter().map(|s| s.to_string()).collect();
    FloorMap::try_from(lines.as_slice()).expect("test grid should be valid")
}

#[test]
fn test_rejects_ragged_grid() {
    let lines: Vec<String> = vec!["@@".to_string(), "@".to_string()];
    assert!(FloorMap::try_from(lines.as_slice()).is_err());
}

#[test]
fn test_lone_roll_is_accessible() {
    let map = map_from(&["...", ".@.", "..."]);
    assert_eq!(part1(&map), 1);
    assert_eq!(part2(&map), 1);
}

#[test]
fn test_occupied_neighbours() {
    let map = map_from(&["@@@", "@@@", "@@@"]);
    assert_eq!(map.occupied_neighbours(1, 1), 8);
    assert_eq!(map.occupied_neighbours(0, 0), 3);
    assert_eq!(map.occupied_neighbours(0, 1), 5);
}

#[test]
fn test_full_block() {
    // Only the corners (3 neighbours each) are reachable at first.
    let map = map_from(&["@@@", "@@@", "@@@"]);
    assert_eq!(part1(&map), 4);
    // Corners go first, then the edge cells, then the centre.
    assert_eq!(part2(&map), 9);
}

fn main() {
    let lines = match load_input("day04.input.txt") {
        Ok(lines) => lines,
        Err(e) => {
            panic!("failed to read input: {}", e);
        }
    };
    let map = match FloorMap::try_from(lines.as_slice()) {
        Ok(map) => map,
        Err(e) => {
            panic!("expected a valid grid: {}", e);
        }
    };
    println!("{}", part1(&map));
    println!("{}", part2(&map));
}
