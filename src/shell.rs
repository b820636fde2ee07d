use std::io::{self, BufRead, Write};

use tracing::{debug, warn};

use crate::{
    error::Error,
    interpreter::{
        tokenizer::{Tokenized, tokenize},
        view::{chunked::Capacities, core::View},
    },
};

/// Width of the separator printed after each rendered view.
const SEPARATOR_WIDTH: usize = 40;

/// Words that end the session at the expression prompt.
const EXIT_WORDS: [&str; 2] = ["exit", "quit"];

/// What the menu asks the main loop to do next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Next {
    NewExpression,
    Quit,
}

/// The outcome of reading a value from the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Answer<T> {
    Value(T),
    Invalid,
    Closed,
}

/// An interactive calculator session.
///
/// The shell prompts for an expression, tokenizes it, then offers a menu of
/// views until the user asks for a new expression or quits. Reaching the end
/// of the input ends the session cleanly.
///
/// # Example
/// ```
/// use std::io::Cursor;
///
/// use tokcalc::shell::Shell;
///
/// let input = Cursor::new("3+4*2\n3\n5\n");
/// let mut shell = Shell::new(input, Vec::new());
/// shell.run().unwrap();
///
/// let transcript = String::from_utf8(shell.into_output()).unwrap();
/// assert!(transcript.contains("Result: 11.0"));
/// assert!(transcript.contains("Even Numbers: [4.0, 2.0]"));
/// ```
pub struct Shell<R, W> {
    input:  R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consumes the shell and returns its output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs the session until the user quits or the input ends.
    ///
    /// # Errors
    /// Returns an error only if reading from the input or writing to the
    /// output fails. Calculator errors are reported to the user and never end
    /// the session.
    pub fn run(&mut self) -> io::Result<()> {
        writeln!(self.output, "Welcome to the Unified Calculator!")?;

        while let Some(tokenized) = self.read_expression()? {
            if self.menu(&tokenized)? == Next::Quit {
                break;
            }
        }

        self.output.flush()
    }

    /// Prompts until a valid expression is entered.
    ///
    /// Returns `None` when the user types an exit word or the input ends.
    fn read_expression(&mut self) -> io::Result<Option<Tokenized>> {
        loop {
            write!(self.output, "\nEnter a mathematical expression (or type 'exit' to quit): ")?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            let text = line.trim();

            if text.is_empty() {
                continue;
            }
            if EXIT_WORDS.iter().any(|word| text.eq_ignore_ascii_case(word)) {
                writeln!(self.output, "Thank you for using the calculator. Goodbye!")?;
                return Ok(None);
            }

            match tokenize(text) {
                Ok(tokenized) => return Ok(Some(tokenized)),
                Err(e) => writeln!(self.output, "Error: {e}. Please try again.")?,
            }
        }
    }

    fn menu(&mut self, tokenized: &Tokenized) -> io::Result<Next> {
        loop {
            writeln!(self.output, "\nExpression is valid. What would you like to do?")?;
            writeln!(self.output, "1. Represent as a chain (with link format)")?;
            writeln!(self.output, "2. Represent as queues (with separated queues)")?;
            writeln!(self.output, "3. Represent as a flat list")?;
            writeln!(self.output, "4. Enter a new expression")?;
            writeln!(self.output, "5. Quit")?;

            let choice = match self.read_integer("Enter your choice (1-5): ")? {
                Answer::Value(n) => n,
                Answer::Invalid => {
                    writeln!(self.output, "Invalid input. Please enter a number.")?;
                    continue;
                },
                Answer::Closed => return Ok(Next::Quit),
            };
            debug!(choice, "menu choice");

            let rendered: Result<View, Error> = match choice {
                1 => tokenized.chain_view().map(View::from).map_err(Error::from),
                2 => match self.read_capacities()? {
                    Answer::Value(capacities) => tokenized.chunked_view(capacities).map(View::from),
                    Answer::Invalid => {
                        writeln!(self.output, "Invalid input. Please enter a number.")?;
                        continue;
                    },
                    Answer::Closed => return Ok(Next::Quit),
                },
                3 => tokenized.flat_view().map(View::from).map_err(Error::from),
                4 => return Ok(Next::NewExpression),
                5 => {
                    writeln!(self.output, "Exiting the calculator.")?;
                    return Ok(Next::Quit);
                },
                _ => {
                    writeln!(self.output, "Invalid choice. Please select 1-5.")?;
                    continue;
                },
            };

            match rendered {
                Ok(view) => {
                    writeln!(self.output, "\n{view}")?;
                    writeln!(self.output, "{}", "-".repeat(SEPARATOR_WIDTH))?;
                },
                Err(Error::Config(e)) => writeln!(self.output, "Configuration Error: {e}")?,
                Err(e) => {
                    warn!(error = %e, "calculation failed");
                    writeln!(self.output, "Calculation Error: {e}")?;
                    return Ok(Next::NewExpression);
                },
            }
        }
    }

    fn read_capacities(&mut self) -> io::Result<Answer<Capacities>> {
        let input = match self.read_integer("Enter capacity for input queues: ")? {
            Answer::Value(n) => n,
            Answer::Invalid => return Ok(Answer::Invalid),
            Answer::Closed => return Ok(Answer::Closed),
        };
        let bucket = match self.read_integer("Enter capacity for even/odd queues: ")? {
            Answer::Value(n) => n,
            Answer::Invalid => return Ok(Answer::Invalid),
            Answer::Closed => return Ok(Answer::Closed),
        };
        Ok(Answer::Value(Capacities { input, bucket }))
    }

    fn read_integer(&mut self, prompt: &str) -> io::Result<Answer<i64>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        Ok(match self.read_line()? {
            Some(line) => line.trim().parse().map_or(Answer::Invalid, Answer::Value),
            None => Answer::Closed,
        })
    }

    /// Reads one line without its terminator, or `None` at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}
