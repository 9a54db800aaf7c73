use aor2025::load_input;

type Coord = (u64, u64);

fn parse_tile(line: &str) -> Result<Coord, String> {
    match line.split_once(',') {
        Some((x, y)) => {
            let x: u64 = x
                .parse()
                .map_err(|e| format!("bad number in '{}': {}", line, e))?;
            let y: u64 = y
                .parse()
                .map_err(|e| format!("bad number in '{}': {}", line, e))?;
            Ok((x, y))
        }
        None => Err(format!("expected 'x,y', got '{}'", line)),
    }
}

/// Area of the axis-aligned rectangle with corners a and b, inclusive of
/// both corner rows and columns.
fn bounding_area(a: Coord, b: Coord) -> u64 {
    (a.0.abs_diff(b.0) + 1) * (a.1.abs_diff(b.1) + 1)
}

fn part1(tiles: &[Coord]) -> u64 {
    let mut best = 0;
    for (i, a) in tiles.iter().enumerate() {
        for b in tiles.iter().skip(i + 1) {
            best = best.max(bounding_area(*a, *b));
        }
    }
    best
}

/// Midpoints of each consecutive tile pair, wrapping last to first, rounded
/// up on both axes.
fn midpoints(tiles: &[Coord]) -> Vec<Coord> {
    tiles
        .iter()
        .enumerate()
        .map(|(i, tile)| {
            let next = tiles.get(i + 1).unwrap_or(&tiles[0]);
            (
                (tile.0 + next.0).div_ceil(2),
                (tile.1 + next.1).div_ceil(2),
            )
        })
        .collect()
}

fn part2(tiles: &[Coord]) -> Result<u64, String> {
    let midpoints = midpoints(tiles);
    let mut pairs: Vec<(Coord, Coord)> = Vec::new();
    for (i, a) in tiles.iter().enumerate() {
        for b in tiles.iter().skip(i + 1) {
            pairs.push((*a, *b));
        }
    }
    pairs.sort_by_key(|(a, b)| bounding_area(*a, *b));

    // Largest candidate first; the first rectangle with nothing strictly
    // inside it wins.
    while let Some((a, b)) = pairs.pop() {
        let left = a.0.min(b.0);
        let right = a.0.max(b.0);
        let top = a.1.min(b.1);
        let bottom = a.1.max(b.1);
        let blocked = midpoints.iter().chain(tiles.iter()).any(|point| {
            point.0 > left && point.0 < right && point.1 > top && point.1 < bottom
        });
        if !blocked {
            return Ok(bounding_area(a, b));
        }
    }
    Err("no unobstructed rectangle found".to_string())
}

#[test]
fn test_parse_tile() {
    assert_eq!(Ok((7, 1)), parse_tile("7,1"));
    assert!(parse_tile("7").is_err());
    assert!(parse_tile("7,x").is_err());
}

#[test]
fn test_bounding_area() {
    assert_eq!(bounding_area((2, 3), (5, 7)), 20);
    assert_eq!(bounding_area((5, 7), (2, 3)), 20);
    assert_eq!(bounding_area((4, 4), (4, 4)), 1);
}

#[test]
fn test_part1() {
    assert_eq!(part1(&[(2, 3), (5, 7)]), 20);
    assert_eq!(part1(&[(0, 0), (2, 3), (5, 7), (1, 9)]), 48);
}

#[test]
fn test_midpoints_wrap() {
    assert_eq!(
        midpoints(&[(0, 0), (10, 0), (10, 10), (0, 10)]),
        vec![(5, 0), (10, 5), (5, 10), (0, 5)]
    );
    // Odd sums round up.
    assert_eq!(midpoints(&[(0, 0), (3, 5)]), vec![(2, 3), (2, 3)]);
}

#[test]
fn test_part2_unobstructed_square() {
    // Boundary tiles and midpoints do not block the full square.
    let tiles = [(0, 0), (10, 0), (10, 10), (0, 10)];
    assert_eq!(part2(&tiles), Ok(121));
}

#[test]
fn test_part2_skips_blocked_rectangles() {
    // The tile at (4, 6) sits strictly inside the two 121-area candidates,
    // so the best clear rectangle spans (10, 0) to (4, 6).
    let tiles = [(0, 0), (10, 0), (10, 10), (0, 10), (4, 6)];
    assert_eq!(part2(&tiles), Ok(49));
}

fn main() {
    let lines = match load_input("day09.input.txt") {
        Ok(lines) => lines,
        Err(e) => {
            panic!("failed to read input: {}", e);
        }
    };
    let tiles: Vec<Coord> = lines
        .iter()
        .map(|line| match parse_tile(line) {
            Ok(tile) => tile,
            Err(e) => {
                panic!("expected valid tiles: {}", e);
            }
        })
        .collect();
    println!("{}", part1(&tiles));
    match part2(&tiles) {
        Ok(area) => println!("{}", area),
        Err(e) => {
            panic!("part 2 failed: {}", e);
        }
    }
}
