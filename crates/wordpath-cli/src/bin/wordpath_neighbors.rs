// wordpath-neighbors: Print the neighbors of words, or the neighborhood of a path.
//
// Usage:
//   wordpath-neighbors [-d DICT] [OPTIONS] WORD...
//   wordpath-neighbors [-d DICT] [OPTIONS] --path START END
//
// Options:
//   -d, --dict PATH          Dictionary file, one word per line
//   --path                   Find a path and print its neighborhood graph edges
//   --alphabet LETTERS       Letters for substitution and insertion (default: a-z)
//   --max-anagram-len N      Skip anagram edges for longer words
//   -v, --verbose            Debug logging on stderr
//   -h, --help               Print help

use std::io::{self, Write};

use wordpath_engine::EdgeKind;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if wordpath_cli::wants_help(&args) {
        println!("wordpath-neighbors: Print word neighbors or a path's neighborhood.");
        println!();
        println!("Usage: wordpath-neighbors [-d DICT] [OPTIONS] WORD...");
        println!("       wordpath-neighbors [-d DICT] [OPTIONS] --path START END");
        println!();
        println!("Options:");
        println!("  -d, --dict PATH          Dictionary file, one word per line");
        println!("  --path                   Print the neighborhood graph of a path");
        println!("  --alphabet LETTERS       Letters for substitution and insertion (default: a-z)");
        println!("  --max-anagram-len N      Skip anagram edges for longer words");
        println!("  -v, --verbose            Debug logging on stderr");
        println!("  -h, --help               Print this help");
        return;
    }

    let parsed = wordpath_cli::parse_common_args(&args).unwrap_or_else(|e| wordpath_cli::fatal(&e));
    wordpath_cli::init_logging(parsed.verbose);

    let path_mode = parsed.rest.iter().any(|a| a == "--path");
    let words: Vec<&String> = parsed.rest.iter().filter(|a| *a != "--path").collect();
    if words.is_empty() {
        wordpath_cli::fatal("no words given");
    }

    let mut engine = wordpath_cli::load_engine(parsed.dict_path.as_deref(), parsed.options)
        .unwrap_or_else(|e| wordpath_cli::fatal(&e));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    if path_mode {
        let [start, end] = words.as_slice() else {
            wordpath_cli::fatal("--path expects exactly two words");
        };
        let result = engine.find_path(start, end);
        let Some(graph) = engine.path_graph(&result) else {
            let _ = writeln!(out, "{start} -> {end}: no path found");
            return;
        };
        for edge in graph.edges() {
            let marker = match edge.kind {
                EdgeKind::Path => "=>",
                EdgeKind::Neighborhood => "--",
            };
            let _ = writeln!(out, "{} {marker} {}", edge.from, edge.to);
        }
        return;
    }

    for word in words {
        let mut around: Vec<&String> = engine.neighbors(word).iter().collect();
        around.sort();
        let _ = writeln!(out, "{word}: {}", around.len());
        for neighbor in around {
            let _ = writeln!(out, "  {neighbor}");
        }
    }
}
