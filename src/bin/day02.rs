use regex::Regex;

use aor2025::load_input;

fn parse_ranges(line: &str) -> Result<Vec<(u64, u64)>, String> {
    let range_rx = Regex::new(r"^(\d+)-(\d+)$").unwrap();
    line.split(',')
        .map(|piece| match range_rx.captures(piece) {
            Some(cap) => {
                let low: u64 = cap[1]
                    .parse()
                    .map_err(|e| format!("bad number in '{}': {}", piece, e))?;
                let high: u64 = cap[2]
                    .parse()
                    .map_err(|e| format!("bad number in '{}': {}", piece, e))?;
                if low > high {
                    Err(format!("backwards range '{}'", piece))
                } else {
                    Ok((low, high))
                }
            }
            None => Err(format!("expected 'low-high', got '{}'", piece)),
        })
        .collect()
}

#[test]
fn test_parse_ranges() {
    assert_eq!(
        Ok(vec![(11, 22), (95, 115)]),
        parse_ranges("11-22,95-115")
    );
    assert!(parse_ranges("11-22,junk").is_err());
    assert!(parse_ranges("22-11").is_err());
    assert!(parse_ranges("11+22").is_err());
}

/// True when the digit string is some shorter string written exactly twice.
fn is_doubled(digits: &str) -> bool {
    let half = digits.len() / 2;
    digits.len() % 2 == 0 && !digits.is_empty() && digits[..half] == digits[half..]
}

/// True when the digit string is some shorter string written two or more
/// times.
fn is_repeated(digits: &str) -> bool {
    let bytes = digits.as_bytes();
    (1..bytes.len())
        .filter(|width| bytes.len() % width == 0)
        .any(|width| bytes.chunks(width).all(|chunk| chunk == &bytes[..width]))
}

#[test]
fn test_is_doubled() {
    assert!(is_doubled("11"));
    assert!(is_doubled("1212"));
    assert!(is_doubled("123123"));
    assert!(!is_doubled("1"));
    assert!(!is_doubled("111"));
    assert!(!is_doubled("1213"));
    assert!(!is_doubled(""));
}

#[test]
fn test_is_repeated() {
    assert!(is_repeated("11"));
    assert!(is_repeated("111"));
    assert!(is_repeated("1212"));
    assert!(is_repeated("123123123"));
    assert!(!is_repeated("1"));
    assert!(!is_repeated("1234"));
    assert!(!is_repeated("121213"));
}

fn invalid_id_sum<F>(ranges: &[(u64, u64)], is_invalid: F) -> u64
where
    F: Fn(&str) -> bool,
{
    ranges
        .iter()
        .flat_map(|(low, high)| *low..=*high)
        .filter(|id| is_invalid(&id.to_string()))
        .sum()
}

fn part1(ranges: &[(u64, u64)]) -> u64 {
    invalid_id_sum(ranges, is_doubled)
}

fn part2(ranges: &[(u64, u64)]) -> u64 {
    invalid_id_sum(ranges, is_repeated)
}

#[test]
fn test_part1() {
    // 95-115 holds one doubled ID, 99; 11-22 holds 11 and 22.
    assert_eq!(part1(&[(95, 115)]), 99);
    assert_eq!(part1(&[(11, 22), (95, 115)]), 11 + 22 + 99);
}

#[test]
fn test_part2() {
    // The looser rule also catches 111.
    assert_eq!(part2(&[(95, 115)]), 99 + 111);
    assert_eq!(part2(&[(11, 22), (95, 115)]), 11 + 22 + 99 + 111);
}

fn main() {
    let lines = match load_input("day02.input.txt") {
        Ok(lines) => lines,
        Err(e) => {
            panic!("failed to read input: {}", e);
        }
    };
    let line = match lines.first() {
        Some(line) => line,
        None => {
            panic!("empty input");
        }
    };
    let ranges = match parse_ranges(line) {
        Ok(ranges) => ranges,
        Err(e) => {
            panic!("expected valid ranges: {}", e);
        }
    };
    println!("{}", part1(&ranges));
    println!("{}", part2(&ranges));
}
