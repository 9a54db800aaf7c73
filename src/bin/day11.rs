use std::collections::HashMap;

use aor2025::load_input;

type WireGraph = HashMap<String, Vec<String>>;

fn parse_graph(lines: &[String]) -> Result<WireGraph, String> {
    lines
        .iter()
        .map(|line| {
            let mut words = line.split_whitespace();
            match words.next().and_then(|name| name.strip_suffix(':')) {
                Some(name) => Ok((name.to_string(), words.map(|w| w.to_string()).collect())),
                None => Err(format!("expected 'name: exit exit ...', got '{}'", line)),
            }
        })
        .collect()
}

#[test]
fn test_parse_graph() {
    let lines: Vec<String> = ["you: aaa bbb", "aaa: out"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    let graph = parse_graph(&lines).expect("valid graph");
    assert_eq!(graph["you"], ["aaa", "bbb"]);
    assert_eq!(graph["aaa"], ["out"]);
    assert!(parse_graph(&["nocolon aaa".to_string()]).is_err());
}

/// Counts the distinct paths from `from` to a terminal node, where a node
/// wired straight to `out` ends the path.  Only paths that visit every
/// milestone are counted; a terminal node's own name never counts.
fn count_paths_to_out(graph: &WireGraph, from: &str, milestones: &[&str]) -> usize {
    fn walk(
        graph: &WireGraph,
        node: &str,
        hit: usize,
        milestones: &[&str],
        memo: &mut HashMap<(String, usize), usize>,
    ) -> usize {
        let all_hit = (1 << milestones.len()) - 1;
        let exits = match graph.get(node) {
            Some(exits) => exits,
            None => {
                panic!("node '{}' is wired to but never defined", node);
            }
        };
        if exits.iter().any(|exit| exit == "out") {
            return usize::from(hit == all_hit);
        }
        let hit = match milestones.iter().position(|milestone| *milestone == node) {
            Some(index) => hit | (1 << index),
            None => hit,
        };
        let key = (node.to_string(), hit);
        if let Some(&paths) = memo.get(&key) {
            return paths;
        }
        let paths = exits
            .iter()
            .map(|exit| walk(graph, exit, hit, milestones, memo))
            .sum();
        memo.insert(key, paths);
        paths
    }
    walk(graph, from, 0, milestones, &mut HashMap::new())
}

fn part1(graph: &WireGraph) -> usize {
    count_paths_to_out(graph, "you", &[])
}

fn part2(graph: &WireGraph) -> usize {
    count_paths_to_out(graph, "svr", &["dac", "fft"])
}

#[cfg(test)]
fn graph_from(lines: &[&str]) -> WireGraph {
    let lines: Vec<String> = lines.iter().map(|s| s.to_string()).collect();
    parse_graph(&lines).expect("test graph should be valid")
}

#[test]
fn test_count_paths() {
    let graph = graph_from(&["you: aaa bbb", "aaa: end", "bbb: end", "end: out"]);
    assert_eq!(part1(&graph), 2);
}

#[test]
fn test_terminal_node_swallows_other_exits() {
    // bbb lists out, so reaching bbb ends the path; its aaa exit is never
    // followed.
    let graph = graph_from(&["you: aaa bbb", "aaa: out", "bbb: aaa out"]);
    assert_eq!(part1(&graph), 2);
}

#[test]
fn test_diamond_counts_both_sides() {
    let graph = graph_from(&[
        "you: aaa bbb",
        "aaa: mid",
        "bbb: mid",
        "mid: ccc ddd",
        "ccc: out",
        "ddd: out",
    ]);
    assert_eq!(part1(&graph), 4);
}

#[test]
fn test_milestone_paths() {
    let graph = graph_from(&[
        "svr: dac xxx",
        "dac: fft",
        "fft: end",
        "xxx: end",
        "end: out",
    ]);
    // Only svr -> dac -> fft -> end touches both milestones.
    assert_eq!(part2(&graph), 1);
    assert_eq!(count_paths_to_out(&graph, "svr", &[]), 2);
}

fn main() {
    let lines = match load_input("day11.input.txt") {
        Ok(lines) => lines,
        Err(e) => {
            panic!("failed to read input: {}", e);
        }
    };
    let graph = match parse_graph(&lines) {
        Ok(graph) => graph,
        Err(e) => {
            panic!("expected a valid wire graph: {}", e);
        }
    };
    println!("{}", part1(&graph));
    println!("{}", part2(&graph));
}
