use aor2025::load_input;

fn line_digits(line: &str) -> Result<Vec<u32>, String> {
    line.chars()
        .map(|ch| {
            ch.to_digit(10)
                .ok_or_else(|| format!("expected a digit, got '{}' in '{}'", ch, line))
        })
        .collect()
}

/// The largest `count`-digit number formed by picking digits left to right.
///
/// Each pick takes the highest digit whose position still leaves enough
/// digits behind it to fill the remaining places; ties go to the earliest
/// occurrence.
fn best_joltage(digits: &[u32], count: usize) -> u64 {
    assert!(
        digits.len() >= count,
        "need at least {} digits, got {}",
        count,
        digits.len()
    );
    let mut value: u64 = 0;
    let mut start = 0;
    for place in 0..count {
        let window_end = digits.len() - (count - place - 1);
        let mut best_index = start;
        for i in start..window_end {
            if digits[i] > digits[best_index] {
                best_index = i;
            }
        }
        value = value * 10 + u64::from(digits[best_index]);
        start = best_index + 1;
    }
    value
}

#[test]
fn test_best_joltage_two_digits() {
    assert_eq!(best_joltage(&[2, 9, 3, 5, 1], 2), 95);
    assert_eq!(best_joltage(&[9, 8, 7], 2), 98);
    // The highest digit is last, so it can only be the ones place.
    assert_eq!(best_joltage(&[1, 2, 9], 2), 29);
    assert_eq!(best_joltage(&[5, 5], 2), 55);
}

#[test]
fn test_best_joltage_twelve_digits() {
    assert_eq!(
        best_joltage(&[3, 2, 1, 6, 5, 4, 9, 8, 7, 3, 2, 1], 12),
        321654987321
    );
    // Skipping one digit: everything after the 9 must be kept, so the only
    // choice left is dropping one of the interior 1s.
    assert_eq!(
        best_joltage(&[9, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 5], 12),
        911111111115
    );
}

fn joltage_sum(lines: &[String], count: usize) -> Result<u64, String> {
    let mut total = 0;
    for line in lines {
        total += best_joltage(&line_digits(line)?, count);
    }
    Ok(total)
}

fn part1(lines: &[String]) -> Result<u64, String> {
    joltage_sum(lines, 2)
}

fn part2(lines: &[String]) -> Result<u64, String> {
    joltage_sum(lines, 12)
}

#[test]
fn test_part1() {
    let lines: Vec<String> = ["29351", "987", "129"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    assert_eq!(part1(&lines), Ok(95 + 98 + 29));
}

#[test]
fn test_rejects_non_digits() {
    let lines = vec!["12a45".to_string()];
    assert!(part1(&lines).is_err());
}

fn main() {
    let lines = match load_input("day03.input.txt") {
        Ok(lines) => lines,
        Err(e) => {
            panic!("failed to read input: {}", e);
        }
    };
    match part1(&lines) {
        Ok(total) => println!("{}", total),
        Err(e) => {
            panic!("part 1 failed: {}", e);
        }
    }
    match part2(&lines) {
        Ok(total) => println!("{}", total),
        Err(e) => {
            panic!("part 2 failed: {}", e);
        }
    }
}
