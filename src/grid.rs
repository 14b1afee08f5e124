//! Reading the token grid from text

use std::fmt;
use std::io::BufRead;

use itertools::Itertools;
use tracing::debug;

use crate::{Delimiter, Error, Result};

/// Rectangular matrix of raw tokens, in input order (top row first)
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    rows: Vec<Vec<String>>,
}

impl Grid {
    /// Read rows until the first empty line or end of stream.
    ///
    /// A line of spaces is a row like any other. Returns [Error::EmptyGrid]
    /// if no token was read, and [Error::RaggedRow] if the rows do not all
    /// have the same number of tokens.
    ///
    /// # Examples
    /// ```
    /// use maze_to_eps::{Delimiter, Grid};
    ///
    /// let grid = Grid::read("x x x\nx w x\n\nignored".as_bytes(), Delimiter::Spaces).unwrap();
    /// assert_eq!((grid.height(), grid.width()), (2, 3));
    /// ```
    pub fn read<R: BufRead>(reader: R, delimiter: Delimiter) -> Result<Self> {
        let mut rows = Vec::new();
        for line in reader.lines() {
            let line = line?;
            let line = line.strip_suffix('\r').unwrap_or(&line);
            if line.is_empty() {
                break;
            }
            rows.push(Self::split_line(line, delimiter));
        }
        Self::from_rows(rows)
    }

    /// Read a grid from a string, see [Self::read]
    pub fn parse(text: &str, delimiter: Delimiter) -> Result<Self> {
        Self::read(text.as_bytes(), delimiter)
    }

    /// Build a grid from already split rows, checking that it is rectangular
    pub fn from_rows(rows: Vec<Vec<String>>) -> Result<Self> {
        let expected = rows.first().ok_or(Error::EmptyGrid)?.len();
        if let Some((row, tokens)) = rows.iter().find_position(|r| r.len() != expected) {
            return Err(Error::RaggedRow {
                row: row + 1,
                expected,
                found: tokens.len(),
            });
        }
        if expected == 0 {
            return Err(Error::EmptyGrid);
        }
        debug!(height = rows.len(), width = expected, "read token grid");
        Ok(Self { rows })
    }

    fn split_line(line: &str, delimiter: Delimiter) -> Vec<String> {
        match delimiter {
            Delimiter::Chars => line.chars().map(String::from).collect(),
            Delimiter::Spaces => line
                .split(' ')
                .filter(|token| !token.is_empty())
                .map(String::from)
                .collect(),
        }
    }

    /// Number of raw rows
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Number of raw columns
    pub fn width(&self) -> usize {
        self.rows[0].len()
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Classify every token once.
    pub fn classify(&self) -> Vec<Vec<Cell>> {
        self.rows
            .iter()
            .map(|row| row.iter().map(|token| Cell::classify(token)).collect())
            .collect()
    }
}

/// Numeric label value
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    /// Parse as integer, then as float. Non-finite floats are not labels.
    pub fn parse(token: &str) -> Option<Self> {
        if let Ok(value) = token.parse::<i64>() {
            return Some(Number::Int(value));
        }
        token
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .map(Number::Float)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(value) => write!(f, "{value}"),
            Number::Float(value) => write!(f, "{value}"),
        }
    }
}

/// Semantic role of one token
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Blank,
    Wall,
    Open,
    Start,
    Goal,
    Label(Number),
    /// Anything else; an error where a label is expected
    Unrecognized,
}

impl Cell {
    /// Classify a token, ignoring case
    ///
    /// # Examples
    /// ```
    /// use maze_to_eps::{Cell, Number};
    ///
    /// assert_eq!(Cell::classify("X"), Cell::Wall);
    /// assert_eq!(Cell::classify("12"), Cell::Label(Number::Int(12)));
    /// assert_eq!(Cell::classify(" "), Cell::Blank);
    /// ```
    pub fn classify(token: &str) -> Self {
        let token = token.trim();
        if token.is_empty() {
            return Cell::Blank;
        }
        match token.to_ascii_lowercase().as_str() {
            "x" => Cell::Wall,
            "w" => Cell::Open,
            "s" => Cell::Start,
            "g" => Cell::Goal,
            _ => Number::parse(token).map_or(Cell::Unrecognized, Cell::Label),
        }
    }
}
