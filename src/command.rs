//! Command interpreter for the heap protocol
//!
//! Input is a stream of whitespace-separated tokens:
//!
//! ```text
//! 4
//! Insert 200
//! Insert 10
//! ExtractMax
//! ExtractMax
//! ```
//!
//! The first token is the number of operations that follow. `Insert <value>`
//! inserts a signed integer; `ExtractMax` removes the maximum and writes it on
//! its own line, or writes [`EMPTY_SENTINEL`] when the heap is empty. Anything
//! else is a [`CommandError`]. Tokens after the last counted operation are
//! never read.
//!
//! ```rust
//! use linked_max_heap::command;
//! use linked_max_heap::linked::MaxHeap;
//! use linked_max_heap::Heap;
//!
//! let mut heap = MaxHeap::new();
//! let mut output = Vec::new();
//! let input = "4\nInsert 200\nInsert 10\nExtractMax\nExtractMax\n";
//!
//! command::run(&mut heap, input.as_bytes(), &mut output).unwrap();
//! assert_eq!(output, b"200\n10\n");
//! ```

use std::io::{self, BufRead, Write};
use std::vec;

use log::{debug, trace};
use thiserror::Error;

use crate::traits::Heap;

/// Value written for `ExtractMax` on an empty heap
///
/// Indistinguishable from an extracted zero; the heap API itself reports
/// emptiness as `None`.
pub const EMPTY_SENTINEL: i64 = 0;

/// A protocol violation or I/O failure while running commands
#[derive(Error, Debug)]
pub enum CommandError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("input is empty: expected an operation count")]
    MissingCount,

    #[error("invalid operation count {token:?}")]
    InvalidCount { token: String },

    #[error("unknown command {token:?} in operation {index}")]
    UnknownCommand { index: usize, token: String },

    #[error("Insert in operation {index} is missing its value")]
    MissingValue { index: usize },

    #[error("invalid Insert value {token:?} in operation {index}")]
    InvalidValue { index: usize, token: String },

    #[error("expected {expected} operations but input ended after {found}")]
    Truncated { expected: usize, found: usize },
}

/// One parsed operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Insert(i64),
    ExtractMax,
}

impl Command {
    /// Reads the next command, or `None` at end of input
    ///
    /// `index` is the 0-based operation number, used in error reports.
    pub fn read<R: BufRead>(
        tokens: &mut Tokens<R>,
        index: usize,
    ) -> Result<Option<Command>, CommandError> {
        let Some(token) = tokens.next_token()? else {
            return Ok(None);
        };

        match token.as_str() {
            "Insert" => {
                let value = tokens
                    .next_token()?
                    .ok_or(CommandError::MissingValue { index })?;
                let value = value
                    .parse()
                    .map_err(|_| CommandError::InvalidValue { index, token: value })?;
                Ok(Some(Command::Insert(value)))
            }
            "ExtractMax" => Ok(Some(Command::ExtractMax)),
            _ => Err(CommandError::UnknownCommand { index, token }),
        }
    }
}

/// Splits buffered input into whitespace-separated tokens, a line at a time
pub struct Tokens<R> {
    reader: R,
    pending: vec::IntoIter<String>,
}

impl<R: BufRead> Tokens<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: Vec::new().into_iter(),
        }
    }

    /// Returns the next token, reading more lines as needed
    pub fn next_token(&mut self) -> io::Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.next() {
                return Ok(Some(token));
            }

            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending = line
                .split_whitespace()
                .map(str::to_owned)
                .collect::<Vec<_>>()
                .into_iter();
        }
    }
}

impl<R: BufRead> Iterator for Tokens<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token().transpose()
    }
}

/// Counts of what a [`run`] did
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Operations executed, equal to the count at the head of the input
    pub operations: usize,
    /// `Insert` operations
    pub inserted: usize,
    /// `ExtractMax` operations that removed a value
    pub extracted: usize,
    /// `ExtractMax` operations that found the heap empty
    pub empty_extractions: usize,
}

/// Executes the command stream in `input` against `heap`
///
/// Extracted values are written to `output`, one per line, and `output` is
/// flushed before returning. The first protocol violation stops the run;
/// operations before it have already been applied.
pub fn run<H, R, W>(heap: &mut H, input: R, mut output: W) -> Result<RunSummary, CommandError>
where
    H: Heap<i64>,
    R: BufRead,
    W: Write,
{
    let mut tokens = Tokens::new(input);
    let count = read_count(&mut tokens)?;
    debug!("running {count} operations");

    let mut summary = RunSummary::default();
    for index in 0..count {
        let command = Command::read(&mut tokens, index)?.ok_or(CommandError::Truncated {
            expected: count,
            found: index,
        })?;
        trace!("operation {index}: {command:?}");

        match command {
            Command::Insert(value) => {
                heap.insert(value);
                summary.inserted += 1;
            }
            Command::ExtractMax => {
                let value = heap.extract_max();
                match value {
                    Some(_) => summary.extracted += 1,
                    None => summary.empty_extractions += 1,
                }
                writeln!(output, "{}", value.unwrap_or(EMPTY_SENTINEL))?;
            }
        }
        summary.operations += 1;
    }

    output.flush()?;
    debug!("{summary:?}, {} values left in the heap", heap.len());
    Ok(summary)
}

fn read_count<R: BufRead>(tokens: &mut Tokens<R>) -> Result<usize, CommandError> {
    let token = tokens.next_token()?.ok_or(CommandError::MissingCount)?;
    token
        .parse()
        .map_err(|_| CommandError::InvalidCount { token })
}
