use std::fs;
use std::ops::RangeInclusive;

fn parse_range(line: &str) -> Result<RangeInclusive<u64>, String> {
    match line.split_once('-') {
        Some((low, high)) => {
            let low: u64 = low
                .parse()
                .map_err(|e| format!("bad number in '{}': {}", line, e))?;
            let high: u64 = high
                .parse()
                .map_err(|e| format!("bad number in '{}': {}", line, e))?;
            Ok(low..=high)
        }
        None => Err(format!("expected 'low-high', got '{}'", line)),
    }
}

/// Splits the input at its blank line into fresh ranges and ingredient IDs.
fn parse_input(input: &str) -> Result<(Vec<RangeInclusive<u64>>, Vec<u64>), String> {
    let (range_part, ingredient_part) = input
        .split_once("\n\n")
        .ok_or_else(|| "expected a blank line between ranges and ingredients".to_string())?;
    let ranges = range_part
        .lines()
        .map(parse_range)
        .collect::<Result<Vec<_>, String>>()?;
    let ingredients = ingredient_part
        .lines()
        .filter(|line| !line.is_empty())
        .map(|line| {
            line.parse()
                .map_err(|e| format!("bad ingredient '{}': {}", line, e))
        })
        .collect::<Result<Vec<u64>, String>>()?;
    Ok((ranges, ingredients))
}

#[test]
fn test_parse_input() {
    let (ranges, ingredients) = parse_input("3-5\n10-14\n\n1\n11\n").expect("valid input");
    assert_eq!(ranges, vec![3..=5, 10..=14]);
    assert_eq!(ingredients, vec![1, 11]);
    assert!(parse_input("3-5\n10-14\n").is_err());
    assert!(parse_input("3:5\n\n1\n").is_err());
}

fn part1(ranges: &[RangeInclusive<u64>], ingredients: &[u64]) -> usize {
    ingredients
        .iter()
        .filter(|id| ranges.iter().any(|range| range.contains(id)))
        .count()
}

/// Collapses numerically overlapping ranges; merely adjacent ranges stay
/// separate.
fn merge_ranges(ranges: &[RangeInclusive<u64>]) -> Vec<RangeInclusive<u64>> {
    let mut sorted: Vec<RangeInclusive<u64>> = ranges.to_vec();
    sorted.sort_by_key(|range| (*range.start(), *range.end()));
    let mut merged: Vec<RangeInclusive<u64>> = Vec::new();
    for range in sorted {
        match merged.last_mut() {
            Some(last) if range.start() <= last.end() => {
                if range.end() > last.end() {
                    *last = *last.start()..=*range.end();
                }
            }
            _ => merged.push(range),
        }
    }
    merged
}

fn part2(ranges: &[RangeInclusive<u64>]) -> u64 {
    merge_ranges(ranges)
        .iter()
        .map(|range| range.end() - range.start() + 1)
        .sum()
}

#[test]
fn test_merge_ranges() {
    assert_eq!(merge_ranges(&[3..=5, 4..=8]), vec![3..=8]);
    // Touching endpoints merge; a gap of one does not.
    assert_eq!(merge_ranges(&[3..=5, 5..=8]), vec![3..=8]);
    assert_eq!(merge_ranges(&[3..=5, 6..=8]), vec![3..=5, 6..=8]);
    // One range swallowing another must not shrink the merged end.
    assert_eq!(merge_ranges(&[3..=20, 5..=8]), vec![3..=20]);
}

#[test]
fn test_parts() {
    let (ranges, ingredients) =
        parse_input("3-5\n10-14\n16-20\n12-18\n\n1\n5\n8\n11\n17\n32\n").expect("valid input");
    assert_eq!(part1(&ranges, &ingredients), 3);
    assert_eq!(part2(&ranges), 14);
}

fn main() {
    let input = match fs::read_to_string("day05.input.txt") {
        Ok(input) => input,
        Err(e) => {
            panic!("failed to read input: {}", e);
        }
    };
    let (ranges, ingredients) = match parse_input(&input) {
        Ok(parsed) => parsed,
        Err(e) => {
            panic!("expected valid input: {}", e);
        }
    };
    println!("{}", part1(&ranges, &ingredients));
    println!("{}", part2(&ranges));
}
