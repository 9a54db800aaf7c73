use std::fs::File;
use std::io::{self, BufRead};
use std::path::Path;

/// Reads a puzzle input file into one string per line.
///
/// Lines that are empty before any trimming are dropped; every other line is
/// kept with its surrounding whitespace removed.  The length check happens on
/// the raw line, so a line holding only spaces survives as an empty string.
pub fn load_input<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let file = File::open(path)?;
    let mut lines: Vec<String> = Vec::new();
    for line in io::BufReader::new(file).lines() {
        let line = line?;
        if !line.is_empty() {
            lines.push(line.trim().to_string());
        }
    }
    Ok(lines)
}

#[cfg(test)]
fn load_from_content(content: &str) -> Vec<String> {
    use std::io::Write;

    let mut file = tempfile::NamedTempFile::new().expect("should be able to create a temp file");
    file.write_all(content.as_bytes())
        .expect("should be able to write the temp file");
    load_input(file.path()).expect("should be able to read the temp file back")
}

#[test]
fn test_load_input_keeps_lines_in_order() {
    assert_eq!(load_from_content("L68\nR48\nL5\n"), ["L68", "R48", "L5"]);
}

#[test]
fn test_load_input_trims_whitespace() {
    assert_eq!(load_from_content("  L68\t\nR48  \n"), ["L68", "R48"]);
}

#[test]
fn test_load_input_drops_only_zero_length_lines() {
    // A bare newline is a zero-length line and vanishes; a line of spaces has
    // nonzero length before trimming and survives as an empty string.
    assert_eq!(load_from_content("L68\n\nR48\n"), ["L68", "R48"]);
    assert_eq!(load_from_content("L68\n   \nR48\n"), ["L68", "", "R48"]);
}

#[test]
fn test_load_input_counts_nonblank_lines() {
    assert_eq!(load_from_content("\n\n\n").len(), 0);
    assert_eq!(load_from_content("a\n\nb\n\nc\n").len(), 3);
}

#[test]
fn test_load_input_missing_file() {
    let err = load_input("no-such-input-file.txt").expect_err("open should fail");
    assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
}
