//! Conversion settings

use std::fmt;
use std::str::FromStr;

use crate::{Error, Result};

/// How the token grid encodes the maze
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Odd raw rows and columns hold the walls between cells
    #[default]
    Line,
    /// Every token is one cell
    Cell,
}

impl FromStr for Mode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "line" => Ok(Mode::Line),
            "cell" => Ok(Mode::Cell),
            _ => Err(Error::UnknownMode(s.to_string())),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Line => write!(f, "line"),
            Mode::Cell => write!(f, "cell"),
        }
    }
}

/// How an input line is split into tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Delimiter {
    /// Each character is a token
    #[default]
    Chars,
    /// Tokens are separated by runs of spaces
    Spaces,
}

/// Resolved settings, built once before the input is read
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Device units per maze cell
    pub cell_length: f64,
    /// Stroke width of wall segments
    pub line_width: f64,
    pub mode: Mode,
    pub delimiter: Delimiter,
    /// Checkerboard background
    pub grid: bool,
    /// Draw numeric tokens as labels. Implies [Delimiter::Spaces].
    pub numbered: bool,
    /// Letters above and row numbers left of the maze
    pub labels: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cell_length: 20.0,
            line_width: 2.0,
            mode: Mode::Line,
            delimiter: Delimiter::Chars,
            grid: false,
            numbered: false,
            labels: false,
        }
    }
}

impl Config {
    /// Check numeric settings.
    ///
    /// Returns [Error::Config] naming the offending option.
    pub fn validate(&self) -> Result<()> {
        Self::check_positive("cell-length", self.cell_length)?;
        Self::check_positive("line-width", self.line_width)
    }

    /// Apply implied settings: numbered input is always space delimited
    pub fn normalized(mut self) -> Self {
        if self.numbered {
            self.delimiter = Delimiter::Spaces;
        }
        self
    }

    fn check_positive(flag: &'static str, value: f64) -> Result<()> {
        if value.is_finite() && value > 0.0 {
            Ok(())
        } else {
            Err(Error::Config {
                flag,
                value: value.to_string(),
                reason: "must be a positive number",
            })
        }
    }
}
