// wordpath-cli: shared utilities for CLI tools.

use std::path::PathBuf;
use std::process;
use std::time::Duration;

use tracing_subscriber::EnvFilter;
use wordpath_engine::{Alphabet, SearchEngine, SearchOptions};

/// Environment variable naming the dictionary file.
const DICT_ENV: &str = "WORDPATH_DICT";

/// Dictionary file looked up in the working directory as a last resort.
const DEFAULT_DICT: &str = "words.txt";

/// Options shared by every tool, parsed from the command line.
#[derive(Debug, Default)]
pub struct CommonArgs {
    pub dict_path: Option<String>,
    pub options: SearchOptions,
    pub verbose: bool,
    pub json: bool,
    /// Arguments not consumed by [`parse_common_args`].
    pub rest: Vec<String>,
}

/// Search for the dictionary file and build a [`SearchEngine`].
///
/// An explicit `dict_path` is loaded as given and its failure is returned.
/// Without one, the first existing file of:
/// 1. `WORDPATH_DICT` environment variable
/// 2. `words.txt` in the current working directory
pub fn load_engine(
    dict_path: Option<&str>,
    options: SearchOptions,
) -> Result<SearchEngine, String> {
    if let Some(path) = dict_path {
        tracing::debug!(path, "loading dictionary");
        return SearchEngine::from_path(path, options).map_err(|e| e.to_string());
    }

    let search_paths = build_search_paths();

    for path in &search_paths {
        if path.is_file() {
            tracing::debug!(path = %path.display(), "loading dictionary");
            return SearchEngine::from_path(path, options).map_err(|e| e.to_string());
        }
    }

    Err(format!(
        "could not find a dictionary in any of the search paths:\n{}",
        search_paths
            .iter()
            .map(|p| format!("  - {}", p.display()))
            .collect::<Vec<_>>()
            .join("\n")
    ))
}

/// Build the list of candidate dictionary files.
fn build_search_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Ok(env_path) = std::env::var(DICT_ENV) {
        paths.push(PathBuf::from(env_path));
    }

    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd.join(DEFAULT_DICT));
    }

    paths
}

/// Parse the flags every tool understands:
///
/// - `-d PATH`, `--dict PATH`, `--dict=PATH`
/// - `--budget SECS` (fractional seconds allowed)
/// - `--alphabet LETTERS`
/// - `--max-anagram-len N`
/// - `-v`, `--verbose`
/// - `--json`
///
/// Everything else is returned in [`CommonArgs::rest`] in order.
pub fn parse_common_args(args: &[String]) -> Result<CommonArgs, String> {
    let mut parsed = CommonArgs::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        let flag = arg.as_str();
        let mut value = |name: &str| {
            iter.next()
                .cloned()
                .ok_or_else(|| format!("{name} requires a value"))
        };
        match flag {
            "-d" | "--dict" => parsed.dict_path = Some(value(flag)?),
            "--budget" => parsed.options.time_budget = parse_budget(&value(flag)?)?,
            "--alphabet" => {
                parsed.options.alphabet = Alphabet::new(&value(flag)?).map_err(|e| e.to_string())?
            }
            "--max-anagram-len" => {
                let n = value(flag)?;
                parsed.options.anagram_max_len = Some(
                    n.parse()
                        .map_err(|_| format!("invalid number for --max-anagram-len: {n}"))?,
                );
            }
            "-v" | "--verbose" => parsed.verbose = true,
            "--json" => parsed.json = true,
            _ => {
                if let Some(val) = flag.strip_prefix("--dict=") {
                    parsed.dict_path = Some(val.to_string());
                } else {
                    parsed.rest.push(arg.clone());
                }
            }
        }
    }

    Ok(parsed)
}

fn parse_budget(secs: &str) -> Result<Duration, String> {
    secs.parse::<f64>()
        .ok()
        .and_then(|s| Duration::try_from_secs_f64(s).ok())
        .ok_or_else(|| format!("invalid number of seconds for --budget: {secs}"))
}

/// Install the stderr log subscriber.
///
/// `RUST_LOG` wins when set; otherwise `warn`, or `debug` with `verbose`.
pub fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}
