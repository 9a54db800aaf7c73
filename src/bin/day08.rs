use std::str::FromStr;

use nom::{
    character::complete::{char, digit1},
    combinator::{map_res, opt, recognize},
    sequence::{preceded, tuple},
    IResult,
};

use aor2025::load_input;

const CONNECTIONS: usize = 10;

type Coord3 = (i64, i64, i64);

fn i64_parser(input: &str) -> IResult<&str, i64> {
    map_res(recognize(tuple((opt(char('-')), digit1))), FromStr::from_str)(input)
}

fn coord_parser(input: &str) -> IResult<&str, Coord3> {
    tuple((
        i64_parser,
        preceded(char(','), i64_parser),
        preceded(char(','), i64_parser),
    ))(input)
}

fn parse_box(s: &str) -> Result<Coord3, String> {
    match coord_parser(s) {
        Ok((unparsed, coord)) => {
            if unparsed.is_empty() {
                Ok(coord)
            } else {
                Err(format!("unexpected trailing junk: '{}'", unparsed))
            }
        }
        Err(e) => Err(format!("failed to parse '{}': {}", s, e)),
    }
}

#[test]
fn test_parse_box() {
    assert_eq!(Ok((162, 817, 812)), parse_box("162,817,812"));
    assert_eq!(Ok((-5, 0, 3)), parse_box("-5,0,3"));
    assert!(parse_box("1,2").is_err());
    assert!(parse_box("1,2,3,4").is_err());
    assert!(parse_box("1,x,3").is_err());
}

fn squared_distance(a: &Coord3, b: &Coord3) -> i64 {
    // Squared distances sort the same way the real ones do.
    (a.0 - b.0).pow(2) + (a.1 - b.1).pow(2) + (a.2 - b.2).pow(2)
}

struct Circuits {
    parent: Vec<usize>,
    size: Vec<usize>,
}

impl Circuits {
    fn new(boxes: usize) -> Circuits {
        Circuits {
            parent: (0..boxes).collect(),
            size: vec![1; boxes],
        }
    }

    fn find(&mut self, i: usize) -> usize {
        let mut root = i;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        let mut walk = i;
        while self.parent[walk] != root {
            walk = std::mem::replace(&mut self.parent[walk], root);
        }
        root
    }

    fn connect(&mut self, a: usize, b: usize) {
        let a = self.find(a);
        let b = self.find(b);
        if a != b {
            self.parent[b] = a;
            self.size[a] += self.size[b];
        }
    }

    /// Sizes of every circuit holding two or more boxes.
    fn circuit_sizes(&mut self) -> Vec<usize> {
        let mut sizes = Vec::new();
        for i in 0..self.parent.len() {
            if self.find(i) == i && self.size[i] >= 2 {
                sizes.push(self.size[i]);
            }
        }
        sizes
    }
}

fn largest_circuit_product(boxes: &[Coord3], connections: usize) -> u64 {
    let mut pairs: Vec<(usize, usize, i64)> = Vec::new();
    for (i, a) in boxes.iter().enumerate() {
        for (j, b) in boxes.iter().enumerate().skip(i + 1) {
            pairs.push((i, j, squared_distance(a, b)));
        }
    }
    // Stable sort, so equidistant pairs keep their discovery order.
    pairs.sort_by_key(|(_, _, distance)| *distance);
    pairs.truncate(connections);

    let mut circuits = Circuits::new(boxes.len());
    for (i, j, _) in pairs {
        circuits.connect(i, j);
    }

    let mut sizes = circuits.circuit_sizes();
    assert!(
        sizes.len() >= 3,
        "expected at least three circuits, found {}",
        sizes.len()
    );
    sizes.sort();
    sizes.iter().rev().take(3).map(|&size| size as u64).product()
}

fn part1(boxes: &[Coord3]) -> u64 {
    largest_circuit_product(boxes, CONNECTIONS)
}

#[test]
fn test_squared_distance() {
    assert_eq!(squared_distance(&(0, 0, 0), &(1, 2, 2)), 9);
    assert_eq!(squared_distance(&(1, 2, 2), &(0, 0, 0)), 9);
}

#[test]
fn test_connect_merges_sizes() {
    let mut circuits = Circuits::new(4);
    circuits.connect(0, 1);
    circuits.connect(2, 3);
    assert_eq!(circuits.circuit_sizes(), vec![2, 2]);
    circuits.connect(1, 2);
    assert_eq!(circuits.circuit_sizes(), vec![4]);
    // Reconnecting inside one circuit changes nothing.
    circuits.connect(0, 3);
    assert_eq!(circuits.circuit_sizes(), vec![4]);
}

#[test]
fn test_largest_circuit_product() {
    // Three clusters strung along the x axis; the five shortest links are
    // the unit-distance neighbours, leaving circuits of 3, 2 and 3 boxes.
    let boxes: Vec<Coord3> = vec![
        (0, 0, 0),
        (1, 0, 0),
        (2, 0, 0),
        (100, 0, 0),
        (101, 0, 0),
        (200, 0, 0),
        (201, 0, 0),
        (202, 0, 0),
        (203, 0, 0),
    ];
    assert_eq!(largest_circuit_product(&boxes, 5), 18);
}

fn main() {
    let lines = match load_input("day08.input.txt") {
        Ok(lines) => lines,
        Err(e) => {
            panic!("failed to read input: {}", e);
        }
    };
    let boxes: Vec<Coord3> = lines
        .iter()
        .map(|line| match parse_box(line) {
            Ok(coord) => coord,
            Err(e) => {
                panic!("expected valid junction boxes: {}", e);
            }
        })
        .collect();
    println!("{}", part1(&boxes));
}
