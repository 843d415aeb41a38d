//! Puzzle configuration: positional arguments or interactive prompts.
//!
//! Values are read as unsigned integers. Capacity is validated only after all
//! three values are in hand, so an interactive user always answers every
//! prompt before hearing about a bad boat.

use std::collections::VecDeque;
use std::io::{BufRead, Write};

use ferry_kernel::puzzle::{ParamsError, PuzzleParams, MIN_BOAT_CAPACITY};

/// Prompt for N.
pub const PROMPT_PEOPLE: &str = "Enter Number of Cannibals/Missionaries: ";
/// Prompt for M.
pub const PROMPT_CAPACITY: &str = "Enter Capacity of Boat (>=2): ";
/// Prompt for K.
pub const PROMPT_MAX_CROSSINGS: &str = "Enter Max Routes Allowed: ";

/// Number of positional arguments (`N M K`).
pub const POSITIONAL_ARG_COUNT: usize = 3;

/// Typed failure while gathering configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// Input ended before the named field was read.
    MissingInput { field: &'static str },
    /// A token is not a non-negative integer.
    InvalidNumber { field: &'static str, raw: String },
    /// Boat capacity below [`MIN_BOAT_CAPACITY`].
    InvalidCapacity { capacity: u32 },
    /// Reading input or writing a prompt failed.
    Io(std::io::Error),
    /// Wrong number of positional arguments.
    UnexpectedArgs { count: usize },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingInput { field } => write!(f, "input ended before {field} was read"),
            Self::InvalidNumber { field, raw } => {
                write!(f, "{field} must be a non-negative integer, got {raw:?}")
            }
            // The console contract prints this exact line.
            Self::InvalidCapacity { .. } => write!(f, "Invalid Boat Capacity"),
            Self::Io(e) => write!(f, "i/o error: {e}"),
            Self::UnexpectedArgs { count } => write!(
                f,
                "expected {POSITIONAL_ARG_COUNT} arguments (N M K) or none, got {count}"
            ),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<ParamsError> for ConfigError {
    fn from(e: ParamsError) -> Self {
        match e {
            ParamsError::CapacityTooSmall { capacity } => Self::InvalidCapacity { capacity },
        }
    }
}

/// Raw puzzle configuration as entered by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PuzzleConfig {
    /// N: missionaries (and cannibals).
    pub people: u32,
    /// M: boat seats.
    pub capacity: u32,
    /// K: crossing cap.
    pub max_crossings: u32,
}

impl PuzzleConfig {
    /// Check the boat capacity.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidCapacity`] if `capacity < 2`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.capacity < MIN_BOAT_CAPACITY {
            return Err(ConfigError::InvalidCapacity {
                capacity: self.capacity,
            });
        }
        Ok(())
    }

    /// Convert to validated search parameters.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidCapacity`] if `capacity < 2`.
    pub fn to_params(&self) -> Result<PuzzleParams, ConfigError> {
        Ok(PuzzleParams::new(
            self.people,
            self.capacity,
            self.max_crossings,
        )?)
    }

    /// Parse positional arguments (program name excluded).
    ///
    /// Returns `Ok(None)` when no arguments were given, meaning the caller
    /// should prompt. Values are parsed but not validated.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnexpectedArgs`] for any count other than zero
    /// or three, and [`ConfigError::InvalidNumber`] for a bad token.
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Result<Option<Self>, ConfigError> {
        match args {
            [] => Ok(None),
            [people, capacity, max_crossings] => Ok(Some(Self {
                people: parse_field("people", people.as_ref())?,
                capacity: parse_field("capacity", capacity.as_ref())?,
                max_crossings: parse_field("max_crossings", max_crossings.as_ref())?,
            })),
            _ => Err(ConfigError::UnexpectedArgs { count: args.len() }),
        }
    }

    /// Prompt for N, M and K in turn on `output`, reading whitespace
    /// separated tokens from `input`. Several values may share one line.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingInput`] at end of input,
    /// [`ConfigError::InvalidNumber`] for a bad token and
    /// [`ConfigError::Io`] if reading or prompting fails.
    pub fn read_interactive<R: BufRead, W: Write>(
        input: R,
        output: &mut W,
    ) -> Result<Self, ConfigError> {
        let mut tokens = TokenReader::new(input);

        writeln!(output, "{PROMPT_PEOPLE}")?;
        output.flush()?;
        let people = tokens.next_number("people")?;

        writeln!(output, "{PROMPT_CAPACITY}")?;
        output.flush()?;
        let capacity = tokens.next_number("capacity")?;

        writeln!(output, "{PROMPT_MAX_CROSSINGS}")?;
        output.flush()?;
        let max_crossings = tokens.next_number("max_crossings")?;

        Ok(Self {
            people,
            capacity,
            max_crossings,
        })
    }
}

fn parse_field(field: &'static str, raw: &str) -> Result<u32, ConfigError> {
    raw.trim()
        .parse::<u32>()
        .map_err(|_| ConfigError::InvalidNumber {
            field,
            raw: raw.to_string(),
        })
}

/// Whitespace tokenizer over a line reader.
struct TokenReader<R> {
    input: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    fn new(input: R) -> Self {
        Self {
            input,
            pending: VecDeque::new(),
        }
    }

    fn next_token(&mut self) -> Result<Option<String>, ConfigError> {
        loop {
            if let Some(tok) = self.pending.pop_front() {
                return Ok(Some(tok));
            }
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
    }

    fn next_number(&mut self, field: &'static str) -> Result<u32, ConfigError> {
        match self.next_token()? {
            Some(tok) => parse_field(field, &tok),
            None => Err(ConfigError::MissingInput { field }),
        }
    }
}
