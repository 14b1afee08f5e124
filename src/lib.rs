//! Draw text maze diagrams as Encapsulated PostScript
//!
//! The input is a grid of tokens, one maze row per line:
//!
//! | token     | meaning           |
//! |-----------|-------------------|
//! | `x`       | wall              |
//! | `w`       | open cell         |
//! | `s`       | start             |
//! | `g`       | goal              |
//! | number    | cell label        |
//! | blank     | nothing           |
//!
//! In [Mode::Line] the odd rows and columns hold the walls between cells, so
//! an `R` x `C` maze is written with `2R+1` lines of `2C+1` tokens. In
//! [Mode::Cell] each token is a cell and walls are drawn as solid blocks.
//!
//! # Examples
//! ## Line mode
//! ```
//! use maze_to_eps::{render, Config};
//!
//! let maze = "
//! xxxxx
//! xs  x
//! x x x
//! x  gx
//! xxxxx";
//! let mut eps = Vec::new();
//! render(maze.trim().as_bytes(), &Config::default(), &mut eps).unwrap();
//! let eps = String::from_utf8(eps).unwrap();
//! assert!(eps.contains("%%BoundingBox: -1 -1 41 41"));
//! ```
//!
//! ## Cell mode with a checkerboard
//! ```
//! use maze_to_eps::{render, Config, Delimiter, Mode};
//!
//! let config = Config {
//!     mode: Mode::Cell,
//!     delimiter: Delimiter::Spaces,
//!     grid: true,
//!     ..Config::default()
//! };
//! let mut eps = Vec::new();
//! render("w s\ng x".as_bytes(), &config, &mut eps).unwrap();
//! assert!(String::from_utf8(eps).unwrap().ends_with("showpage\n%%EOF\n"));
//! ```

use std::io::{BufRead, Write};

pub mod config;
pub mod eps;
pub mod error;
pub mod grid;
pub mod layout;
pub mod mode;

pub use config::{Config, Delimiter, Mode};
pub use eps::EpsWriter;
pub use error::{Error, Result};
pub use grid::{Cell, Grid, Number};
pub use layout::{column_label, layout, Drawing, Primitive};

/// Convert a maze read from `input` to EPS written to `output`.
///
/// The configuration is normalized and validated, and the whole grid is
/// read and laid out before anything is written, so a failed conversion
/// leaves `output` untouched.
pub fn render<R: BufRead, W: Write>(input: R, config: &Config, output: W) -> Result<()> {
    let config = config.clone().normalized();
    config.validate()?;

    let grid = Grid::read(input, config.delimiter)?;
    let drawing = layout(&grid, &config)?;

    EpsWriter::new(output).write_document(&drawing)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::{render, Config, Error, Mode};

    #[test]
    fn failed_render_writes_nothing() {
        let config = Config {
            numbered: true,
            mode: Mode::Cell,
            ..Config::default()
        };
        let mut out = Vec::new();
        let err = render("w w w\nw w".as_bytes(), &config, &mut out).unwrap_err();
        assert!(matches!(err, Error::RaggedRow { .. }));
        assert!(out.is_empty());

        let err = render("1 2\nw oops".as_bytes(), &config, &mut out).unwrap_err();
        assert!(matches!(err, Error::LabelFormat { .. }));
        assert!(out.is_empty());
    }

    #[test]
    fn invalid_config_is_rejected_before_reading() {
        let config = Config {
            cell_length: -5.0,
            ..Config::default()
        };
        let mut out = Vec::new();
        let err = render("".as_bytes(), &config, &mut out).unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }

    #[test]
    fn identical_input_gives_identical_output() {
        let maze = "
x x x x x
x s     x
x   x x x
x     g x
x x x x x"
            .trim();
        let config = Config {
            grid: true,
            labels: true,
            ..Config::default()
        };
        let mut first = Vec::new();
        let mut second = Vec::new();
        render(maze.as_bytes(), &config, &mut first).unwrap();
        render(maze.as_bytes(), &config, &mut second).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn numbered_reads_spaced_tokens() {
        let config = Config {
            numbered: true,
            mode: Mode::Cell,
            ..Config::default()
        };
        let mut out = Vec::new();
        render("10 11\n12 x".as_bytes(), &config, &mut out).unwrap();
        let eps = String::from_utf8(out).unwrap();
        assert!(eps.contains("(10) "));
        assert!(eps.contains("(12) "));
    }
}
