//! Error kinds

/// Everything that can abort a conversion
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An option value is outside its allowed range
    #[error("invalid value `{value}` for --{flag}: {reason}")]
    Config {
        flag: &'static str,
        value: String,
        reason: &'static str,
    },
    /// Mode is neither `line` nor `cell`
    #[error("unknown mode `{0}`, expected `line` or `cell`")]
    UnknownMode(String),
    /// Input ended before any maze row was read
    #[error("malformed input: no maze rows found")]
    EmptyGrid,
    /// Rows of the input have different token counts
    #[error("malformed input: row {row} has {found} tokens, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// Token in numbered mode is not a number
    #[error("cannot read `{token}` at row {row}, column {col} as a number")]
    LabelFormat {
        token: String,
        row: usize,
        col: usize,
    },
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
