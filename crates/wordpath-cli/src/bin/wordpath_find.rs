// wordpath-find: Find word ladders between pairs of words.
//
// With two WORD arguments, finds one path. Otherwise reads pairs from stdin,
// one "START END" pair per line, answering each against the same engine so
// later queries benefit from the memo of earlier ones.
//
// Usage:
//   wordpath-find [-d DICT] [OPTIONS] [START END]
//
// Options:
//   -d, --dict PATH          Dictionary file, one word per line
//   --budget SECS            Time budget per search (default: 20)
//   --alphabet LETTERS       Letters for substitution and insertion (default: a-z)
//   --max-anagram-len N      Skip anagram edges for longer words
//   --json                   Print results and statistics as JSON lines
//   -v, --verbose            Debug logging on stderr
//   -h, --help               Print help

use std::io::{self, BufRead, Write};

use wordpath_engine::{PathResult, SearchEngine, SearchStatistics};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if wordpath_cli::wants_help(&args) {
        println!("wordpath-find: Find word ladders between pairs of words.");
        println!();
        println!("Usage: wordpath-find [-d DICT] [OPTIONS] [START END]");
        println!();
        println!("If START and END are given, finds one path.");
        println!("Otherwise reads \"START END\" pairs from stdin (one per line).");
        println!();
        println!("Options:");
        println!("  -d, --dict PATH          Dictionary file, one word per line");
        println!("  --budget SECS            Time budget per search (default: 20)");
        println!("  --alphabet LETTERS       Letters for substitution and insertion (default: a-z)");
        println!("  --max-anagram-len N      Skip anagram edges for longer words");
        println!("  --json                   Print results and statistics as JSON lines");
        println!("  -v, --verbose            Debug logging on stderr");
        println!("  -h, --help               Print this help");
        return;
    }

    let parsed = wordpath_cli::parse_common_args(&args).unwrap_or_else(|e| wordpath_cli::fatal(&e));
    wordpath_cli::init_logging(parsed.verbose);

    let mut engine = wordpath_cli::load_engine(parsed.dict_path.as_deref(), parsed.options)
        .unwrap_or_else(|e| wordpath_cli::fatal(&e));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let json = parsed.json;

    let mut run = |start: &str, end: &str, engine: &mut SearchEngine| {
        let result = engine.find_path(start, end);
        let stats = engine.statistics();
        if json {
            let _ = writeln!(out, "{}", json_line(start, end, &result, stats));
        } else {
            print_text(&mut out, start, end, &result, stats);
        }
    };

    match parsed.rest.as_slice() {
        [start, end] => run(start, end, &mut engine),
        [] => {
            let stdin = io::stdin();
            for line in stdin.lock().lines() {
                let line =
                    line.unwrap_or_else(|e| wordpath_cli::fatal(&format!("reading stdin: {e}")));
                let mut words = line.split_whitespace();
                match (words.next(), words.next(), words.next()) {
                    (Some(start), Some(end), None) => run(start, end, &mut engine),
                    (None, _, _) => continue,
                    _ => eprintln!("skipping line, expected \"START END\": {line}"),
                }
            }
        }
        _ => wordpath_cli::fatal("expected exactly two words, START and END"),
    }
}

fn json_line(start: &str, end: &str, result: &PathResult, stats: &SearchStatistics) -> String {
    serde_json::json!({
        "start": start,
        "end": end,
        "outcome": result,
        "cost": result.cost(),
        "statistics": {
            "elapsed_secs": stats.elapsed_secs(),
            "visited": stats.visited,
            "vocabulary_size": stats.vocabulary_size,
            "memo_starts": stats.memo_starts,
            "memo_entries": stats.memo_entries,
            "graph_size": stats.graph_size,
            "memo_hit": stats.memo_hit,
            "state": stats.state,
        },
    })
    .to_string()
}

fn print_text<W: Write>(
    out: &mut W,
    start: &str,
    end: &str,
    result: &PathResult,
    stats: &SearchStatistics,
) {
    let _ = writeln!(out, "{start} -> {end}:");
    match result.path() {
        Some(path) => {
            for (i, word) in path.iter().enumerate() {
                let _ = writeln!(out, "  {}. {word}", i + 1);
            }
        }
        None => {
            let _ = writeln!(out, "  No path found");
        }
    }
    let _ = writeln!(
        out,
        "  Search time: {:.4} seconds, Visited words: {}",
        stats.elapsed_secs(),
        stats.visited
    );
    let _ = writeln!(
        out,
        "  Dictionary size: {}, Memo size: {}, Graph size: {}",
        stats.vocabulary_size, stats.memo_starts, stats.graph_size
    );
}
