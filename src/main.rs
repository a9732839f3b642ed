use std::{
    fs,
    io::{self, Write},
    process::ExitCode,
};

use clap::Parser;
use log::LevelFilter;
use simpl::{
    Context,
    repl::{DEFAULT_MAX_LINE_LENGTH, ReplConfig, execute, run_repl},
};

/// simpl is a small calculator language with variables.
///
/// Without CONTENTS, an interactive prompt reads one line at a time.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells simpl to look at a file instead of a script.
    #[arg(short, long)]
    file: bool,

    /// Print the token sequence of each input.
    #[arg(short, long)]
    tokens: bool,

    /// Print the parsed tree of each statement.
    #[arg(short = 'a', long)]
    tree: bool,

    /// Raise log verbosity; repeat for more detail. `RUST_LOG` overrides it.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Longest line the interactive prompt accepts, in bytes.
    #[arg(long, default_value_t = DEFAULT_MAX_LINE_LENGTH)]
    max_line_length: usize,

    contents: Option<String>,
}

impl Args {
    fn config(&self) -> ReplConfig {
        ReplConfig { max_line_length: self.max_line_length,
                     show_tokens: self.tokens,
                     show_tree: self.tree,
                     ..ReplConfig::default() }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new().filter_level(level)
                              .parse_default_env()
                              .init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);
    let config = args.config();

    let Some(contents) = args.contents else {
        let stdin = io::stdin();
        let mut stdout = io::stdout();
        return match run_repl(&config, stdin.lock(), &mut stdout) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("I/O error: {e}");
                ExitCode::FAILURE
            },
        };
    };

    let script = if args.file {
        match fs::read_to_string(&contents) {
            Ok(script) => script,
            Err(e) => {
                eprintln!("Failed to read the input file '{contents}': {e}");
                return ExitCode::FAILURE;
            },
        }
    } else {
        contents
    };

    let mut context = Context::new();
    let mut stdout = io::stdout();
    match execute(&mut context, &config, &script, &mut stdout) {
        Ok(Ok(value)) => {
            if writeln!(stdout, "{value}").is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::SUCCESS
        },
        Ok(Err(e)) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        },
        Err(e) => {
            eprintln!("I/O error: {e}");
            ExitCode::FAILURE
        },
    }
}
