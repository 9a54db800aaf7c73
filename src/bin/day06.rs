use std::fs;

fn column_answer(operator: &str, operands: &[u64]) -> Result<u64, String> {
    match operator {
        "+" => Ok(operands.iter().sum()),
        "*" => Ok(operands.iter().product()),
        _ => Err(format!("expected + or *, got '{}'", operator)),
    }
}

fn part1(lines: &[&str]) -> Result<u64, String> {
    let (operator_line, number_lines) = lines.split_last().ok_or("empty input")?;
    let operators: Vec<&str> = operator_line.split_whitespace().collect();
    let mut columns: Vec<Vec<u64>> = vec![Vec::new(); operators.len()];
    for line in number_lines {
        for (i, token) in line.split_whitespace().enumerate() {
            let number: u64 = token
                .parse()
                .map_err(|e| format!("bad number '{}': {}", token, e))?;
            columns
                .get_mut(i)
                .ok_or_else(|| format!("more numbers than operators in '{}'", line))?
                .push(number);
        }
    }
    operators
        .iter()
        .zip(columns.iter())
        .map(|(operator, operands)| column_answer(operator, operands))
        .sum()
}

/// Reads one number per character column, top to bottom, keeping only digit
/// rows; blank character columns separate the groups.
fn vertical_groups(lines: &[&str]) -> Result<Vec<Vec<u64>>, String> {
    let width = lines
        .iter()
        .map(|line| line.len())
        .max()
        .ok_or("empty input")?;
    let mut columns: Vec<String> = Vec::with_capacity(width);
    for i in 0..width {
        let column: String = lines
            .iter()
            .map(|line| line.chars().nth(i).unwrap_or(' '))
            .filter(|ch| ch.is_ascii_digit())
            .collect();
        columns.push(column);
    }
    columns
        .split(|column| column.is_empty())
        .filter(|group| !group.is_empty())
        .map(|group| {
            group
                .iter()
                .map(|number| {
                    number
                        .parse()
                        .map_err(|e| format!("bad column number '{}': {}", number, e))
                })
                .collect()
        })
        .collect()
}

fn part2(lines: &[&str]) -> Result<u64, String> {
    let operator_line = lines.last().ok_or("empty input")?;
    let operators: Vec<&str> = operator_line.split_whitespace().collect();
    let groups = vertical_groups(lines)?;
    if groups.len() != operators.len() {
        return Err(format!(
            "{} number groups but {} operators",
            groups.len(),
            operators.len()
        ));
    }
    operators
        .iter()
        .zip(groups.iter())
        .map(|(operator, operands)| column_answer(operator, operands))
        .sum()
}

#[cfg(test)]
const WORKSHEET: &[&str] = &[
    "123 328  51 64 ",
    " 45 64  387 23 ",
    "  6 98  215 314",
    "*   +   *   +  ",
];

#[test]
fn test_part1() {
    // 123*45*6 + 328+64+98 + 51*387*215 + 64+23+314
    assert_eq!(part1(WORKSHEET), Ok(33210 + 490 + 4243455 + 401));
}

#[test]
fn test_vertical_groups() {
    assert_eq!(
        vertical_groups(WORKSHEET),
        Ok(vec![
            vec![1, 24, 356],
            vec![369, 248, 8],
            vec![32, 581, 175],
            vec![623, 431, 4],
        ])
    );
}

#[test]
fn test_part2() {
    // 1*24*356 + 369+248+8 + 32*581*175 + 623+431+4
    assert_eq!(part2(WORKSHEET), Ok(8544 + 625 + 3253600 + 1058));
}

#[test]
fn test_rejects_unknown_operator() {
    assert!(part1(&["1 2", "+ -"]).is_err());
}

fn main() {
    // Character columns carry meaning here, so the raw untrimmed lines are
    // kept.
    let input = match fs::read_to_string("day06.input.txt") {
        Ok(input) => input,
        Err(e) => {
            panic!("failed to read input: {}", e);
        }
    };
    let lines: Vec<&str> = input.lines().filter(|line| !line.is_empty()).collect();
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
