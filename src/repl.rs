use std::io::{self, BufRead, Write};

use log::{debug, info};

use crate::{
    error::Error,
    interpreter::{
        evaluator::core::Context, lexer::tokenize, parser::core::parse_program, value::Value,
    },
};

/// Default upper bound on the length of one input line, in bytes.
pub const DEFAULT_MAX_LINE_LENGTH: usize = 4096;
/// Default prompt printed before each line is read.
pub const DEFAULT_PROMPT: &str = ">> ";
/// Lines that end the loop.
pub const EXIT_COMMANDS: &[&str] = &["exit", "quit"];

/// Settings of the read-eval-print loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplConfig {
    /// Printed before each line is read.
    pub prompt:          String,
    /// Longer lines are rejected without being evaluated.
    pub max_line_length: usize,
    /// Print the token sequence of each input.
    pub show_tokens:     bool,
    /// Print the parsed tree of each statement.
    pub show_tree:       bool,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self { prompt:          DEFAULT_PROMPT.to_string(),
               max_line_length: DEFAULT_MAX_LINE_LENGTH,
               show_tokens:     false,
               show_tree:       false, }
    }
}

/// Runs `source` as a program in `context`.
///
/// Token and tree dumps requested by `config` are written to `output` as the
/// pipeline reaches them. The program's value or error is returned to the
/// caller, which decides how to report it.
///
/// # Errors
/// The outer `Result` fails only if writing to `output` fails.
///
/// # Example
/// ```
/// use simpl::{
///     interpreter::{evaluator::core::Context, value::Value},
///     repl::{ReplConfig, execute},
/// };
///
/// let config = ReplConfig { show_tree: true,
///                           ..ReplConfig::default() };
/// let mut context = Context::new();
/// let mut output = Vec::new();
///
/// let value = execute(&mut context, &config, "1 - 2 - 3", &mut output).unwrap();
///
/// assert_eq!(value, Ok(Value::Number(-4.0)));
/// assert_eq!(String::from_utf8(output).unwrap(), "((1 - 2) - 3)\n");
/// ```
pub fn execute<W: Write>(context: &mut Context,
                         config: &ReplConfig,
                         source: &str,
                         output: &mut W)
                         -> io::Result<Result<Value, Error>> {
    let tokens = match tokenize(source) {
        Ok(tokens) => tokens,
        Err(e) => return Ok(Err(e.into())),
    };
    if config.show_tokens {
        let rendered: Vec<String> = tokens.iter().map(ToString::to_string).collect();
        writeln!(output, "{}", rendered.join(" "))?;
    }

    let program = match parse_program(&tokens) {
        Ok(program) => program,
        Err(e) => return Ok(Err(e.into())),
    };
    if config.show_tree {
        for statement in &program {
            writeln!(output, "{statement}")?;
        }
    }

    Ok(context.eval_program(&program).map_err(Error::from))
}

/// Runs the read-eval-print loop until `exit`, `quit` or end of input.
///
/// Every line is evaluated in the same session, so variables declared on one
/// line can be used on the next. Values and error messages are both written to
/// `output`; an error ends only the current line, never the loop. That
/// includes a line that is not valid UTF-8. Blank lines are skipped.
///
/// # Errors
/// Fails only if reading `input` or writing `output` fails.
///
/// # Example
/// ```
/// use simpl::repl::{ReplConfig, run_repl};
///
/// let config = ReplConfig { prompt: String::new(),
///                           ..ReplConfig::default() };
/// let input = "let x = 5\n1 @ 2\nx * 2\nexit\nx\n";
/// let mut output = Vec::new();
///
/// run_repl(&config, input.as_bytes(), &mut output).unwrap();
///
/// let output = String::from_utf8(output).unwrap();
/// assert_eq!(output.lines().collect::<Vec<_>>(),
///            ["5", "Error on line 1: Unexpected character '@' at position 2.", "10"]);
/// ```
pub fn run_repl<R: BufRead, W: Write>(config: &ReplConfig,
                                      mut input: R,
                                      output: &mut W)
                                      -> io::Result<()> {
    info!("starting REPL (max line length {})", config.max_line_length);
    let mut context = Context::new();
    let mut buffer = Vec::new();

    prompt(config, output)?;
    loop {
        buffer.clear();
        if input.read_until(b'\n', &mut buffer)? == 0 {
            break;
        }
        let Ok(line) = std::str::from_utf8(strip_line_ending(&buffer)) else {
            debug!("line of {} bytes is not valid UTF-8", buffer.len());
            writeln!(output, "Error: Line is not valid UTF-8.")?;
            prompt(config, output)?;
            continue;
        };
        let trimmed = line.trim();

        if EXIT_COMMANDS.contains(&trimmed) {
            info!("leaving REPL on '{trimmed}'");
            return Ok(());
        }

        if line.len() > config.max_line_length {
            writeln!(output,
                     "Error: Line is {} bytes long; the limit is {}.",
                     line.len(),
                     config.max_line_length)?;
        } else if !trimmed.is_empty() {
            match execute(&mut context, config, line, output)? {
                Ok(value) => writeln!(output, "{value}")?,
                Err(e) => {
                    debug!("line rejected: {e:?}");
                    writeln!(output, "{e}")?;
                },
            }
        }

        prompt(config, output)?;
    }

    info!("end of input");
    Ok(())
}

fn strip_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

fn prompt<W: Write>(config: &ReplConfig, output: &mut W) -> io::Result<()> {
    if config.prompt.is_empty() {
        return Ok(());
    }
    write!(output, "{}", config.prompt)?;
    output.flush()
}
