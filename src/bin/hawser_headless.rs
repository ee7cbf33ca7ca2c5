//! Headless terminal runner
//!
//! Feeds a byte stream through the emulator without any UI and prints the
//! resulting screen snapshot. Useful for inspecting how a capture of remote
//! output renders, and for generating deterministic fixtures.
//!
//! # Usage
//!
//! ```bash
//! # Process escape sequences from stdin and print a JSON snapshot
//! printf 'Hello \x1b[31mRed\x1b[0m' | hawser-headless
//!
//! # Process a capture file and print plain text
//! hawser-headless --input capture.bin --text
//!
//! # Custom terminal size
//! hawser-headless -c 120 -r 40 -i capture.bin -o snapshot.json
//! ```

use std::fs::File;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use hawser_terminal::Terminal;

struct Args {
    /// Input file (stdin if not specified)
    input: Option<PathBuf>,
    /// Output file (stdout if not specified)
    output: Option<PathBuf>,
    /// Output as text instead of JSON
    text: bool,
    cols: usize,
    rows: usize,
    history: usize,
    help: bool,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            input: None,
            output: None,
            text: false,
            cols: 80,
            rows: 24,
            history: 10_000,
            help: false,
        }
    }
}

fn parse_args() -> Args {
    let mut args = Args::default();
    let argv: Vec<String> = std::env::args().skip(1).collect();

    let mut i = 0;
    while i < argv.len() {
        match argv[i].as_str() {
            "-h" | "--help" => args.help = true,
            "-i" | "--input" => {
                i += 1;
                if i < argv.len() {
                    args.input = Some(PathBuf::from(&argv[i]));
                }
            }
            "-o" | "--output" => {
                i += 1;
                if i < argv.len() {
                    args.output = Some(PathBuf::from(&argv[i]));
                }
            }
            "-t" | "--text" => args.text = true,
            "-c" | "--cols" => {
                i += 1;
                if i < argv.len() {
                    args.cols = argv[i].parse().unwrap_or(80);
                }
            }
            "-r" | "--rows" => {
                i += 1;
                if i < argv.len() {
                    args.rows = argv[i].parse().unwrap_or(24);
                }
            }
            "-s" | "--history" => {
                i += 1;
                if i < argv.len() {
                    args.history = argv[i].parse().unwrap_or(10_000);
                }
            }
            _ => {}
        }
        i += 1;
    }

    args
}

fn print_help() {
    eprintln!(
        r#"hawser-headless - feed bytes through the terminal emulator

USAGE:
    hawser-headless [OPTIONS]

OPTIONS:
    -h, --help            Show this help message
    -i, --input <FILE>    Input file (stdin if not specified)
    -o, --output <FILE>   Output file (stdout if not specified)
    -t, --text            Output plain text instead of JSON
    -c, --cols <N>        Terminal columns (default: 80)
    -r, --rows <N>        Terminal rows (default: 24)
    -s, --history <N>     Scrollback capacity (default: 10000)
"#
    );
}

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = parse_args();
    if args.help {
        print_help();
        return Ok(());
    }

    let input_data = if let Some(path) = &args.input {
        std::fs::read(path)?
    } else {
        let mut data = Vec::new();
        io::stdin().read_to_end(&mut data)?;
        data
    };

    let mut terminal = Terminal::new(args.cols, args.rows, args.history);
    terminal.feed(&input_data);

    let snapshot = terminal.snapshot();
    let output_data = if args.text {
        snapshot.text()
    } else {
        snapshot.to_json().map_err(io::Error::other)?
    };

    if let Some(path) = &args.output {
        let mut file = File::create(path)?;
        file.write_all(output_data.as_bytes())?;
    } else {
        io::stdout().write_all(output_data.as_bytes())?;
    }

    Ok(())
}
