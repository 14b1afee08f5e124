//! Turning a token grid into an ordered list of drawing primitives
//!
//! Primitives are produced in painter's order, later ones cover earlier ones:
//!
//! 1. checkerboard background (`grid`)
//! 2. column letters and row numbers (`labels`)
//! 3. open, start and goal cells
//! 4. numeric labels (`numbered`)
//! 5. walls

use itertools::Itertools;
use tracing::{debug, info};

use crate::grid::{Cell, Grid};
use crate::mode::{Dimensions, LogicalCoordinate};
use crate::{Config, Error, Mode, Result};

/// Position in device units, origin at the bottom left
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// RGB colour, components in `0.0..=1.0`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Color {
    pub const BLACK: Color = Color::gray(0.0);
    pub const WHITE: Color = Color::gray(1.0);
    pub const LIGHT: Color = Color::gray(0.9);
    pub const DARK: Color = Color::gray(0.75);
    pub const START: Color = Color::rgb(0.55, 0.85, 0.55);
    pub const GOAL: Color = Color::rgb(0.9, 0.55, 0.55);

    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    pub const fn gray(v: f64) -> Self {
        Self { r: v, g: v, b: v }
    }
}

/// One drawing instruction
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    FilledRect {
        corner: Point,
        width: f64,
        height: f64,
        color: Color,
    },
    StrokedLine {
        from: Point,
        to: Point,
        width: f64,
    },
    Glyph {
        text: String,
        anchor: Point,
        color: Color,
        font_size: f64,
    },
}

/// Axis-aligned box in device units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: Point,
    pub max: Point,
}

/// Layout result: page extent and primitives in drawing order
#[derive(Debug, Clone, PartialEq)]
pub struct Drawing {
    pub bounds: Bounds,
    pub primitives: Vec<Primitive>,
}

/// Spreadsheet style column name: A..Z, AA, AB, ...
///
/// # Examples
/// ```
/// use maze_to_eps::column_label;
///
/// assert_eq!(column_label(0), "A");
/// assert_eq!(column_label(26), "AA");
/// ```
pub fn column_label(index: usize) -> String {
    let mut letters = Vec::new();
    let mut n = index + 1;
    while n > 0 {
        n -= 1;
        letters.push(char::from(b'A' + (n % 26) as u8));
        n /= 26;
    }
    letters.iter().rev().collect()
}

/// Lay out `grid` according to `config`.
///
/// Every token is classified and checked before the first primitive is
/// produced. In numbered mode, cell content that is not a known marker or a
/// number fails with [Error::LabelFormat].
pub fn layout(grid: &Grid, config: &Config) -> Result<Drawing> {
    let dims = Dimensions::resolve(grid.height(), grid.width(), config.mode);
    let engine = Engine {
        config,
        dims,
        cells: grid.classify(),
        primitives: Vec::new(),
    };
    if config.numbered {
        engine.check_labels(grid)?;
    }
    Ok(engine.run())
}

struct Engine<'a> {
    config: &'a Config,
    dims: Dimensions,
    cells: Vec<Vec<Cell>>,
    primitives: Vec<Primitive>,
}

impl Engine<'_> {
    const FONT_SCALE: f64 = 0.5;
    const BASELINE: f64 = 0.32;
    const NARROW_INDENT: f64 = 0.36;
    const WIDE_INDENT: f64 = 0.22;

    fn check_labels(&self, grid: &Grid) -> Result<()> {
        for (i, row) in self.cells.iter().enumerate() {
            for (j, cell) in row.iter().enumerate() {
                if *cell == Cell::Unrecognized && self.dims.is_cell_position(i, j) {
                    return Err(Error::LabelFormat {
                        token: grid.rows()[i][j].clone(),
                        row: i + 1,
                        col: j + 1,
                    });
                }
            }
        }
        Ok(())
    }

    fn run(mut self) -> Drawing {
        if self.config.grid {
            self.background();
        }
        if self.config.labels {
            self.axis_labels();
        }
        self.special_cells();
        if self.config.numbered {
            self.numeric_labels();
        }
        match self.dims.mode {
            Mode::Line => self.wall_segments(),
            Mode::Cell => self.wall_blocks(),
        }
        info!(primitives = self.primitives.len(), "layout complete");

        Drawing {
            bounds: self.bounds(),
            primitives: self.primitives,
        }
    }

    fn bounds(&self) -> Bounds {
        let length = self.config.cell_length;
        let pad = self.config.line_width / 2.0;
        let margin = if self.config.labels { length } else { 0.0 };
        Bounds {
            min: Point::new(-margin - pad, -pad),
            max: Point::new(
                self.dims.cols as f64 * length + pad,
                self.dims.rows as f64 * length + margin + pad,
            ),
        }
    }

    /// Cells with content, as (drawing position, cell)
    fn content(&self) -> Vec<(LogicalCoordinate, Cell)> {
        let dims = self.dims;
        self.cells
            .iter()
            .enumerate()
            .flat_map(|(i, row)| {
                row.iter()
                    .enumerate()
                    .filter(move |(j, _)| dims.is_cell_position(i, *j))
                    .map(move |(j, cell)| (dims.flip(dims.to_logical(i, j)), cell.clone()))
            })
            .collect()
    }

    fn fill_cell(&mut self, col: f64, row: f64, color: Color) {
        let length = self.config.cell_length;
        self.primitives.push(Primitive::FilledRect {
            corner: Point::new(col * length, row * length),
            width: length,
            height: length,
            color,
        });
    }

    /// Text roughly centred in a cell; single characters sit further right
    fn glyph(&mut self, text: String, col: f64, row: f64) {
        let length = self.config.cell_length;
        let indent = if text.chars().count() == 1 {
            Self::NARROW_INDENT
        } else {
            Self::WIDE_INDENT
        };
        self.primitives.push(Primitive::Glyph {
            anchor: Point::new((col + indent) * length, (row + Self::BASELINE) * length),
            text,
            color: Color::BLACK,
            font_size: Self::FONT_SCALE * length,
        });
    }

    fn background(&mut self) {
        for (row, col) in (0..self.dims.rows).cartesian_product(0..self.dims.cols) {
            let color = if (row + col) % 2 == 0 {
                Color::LIGHT
            } else {
                Color::DARK
            };
            self.fill_cell(col as f64, row as f64, color);
        }
        debug!(cells = self.dims.rows * self.dims.cols, "background drawn");
    }

    fn axis_labels(&mut self) {
        let rows = self.dims.rows;
        for col in 0..self.dims.cols {
            self.glyph(column_label(col), col as f64, rows as f64);
        }
        // Numbered top-down, like the input
        for row in 0..rows {
            self.glyph((rows - row).to_string(), -1.0, row as f64);
        }
    }

    fn special_cells(&mut self) {
        let mut count = 0;
        for (at, cell) in self.content() {
            let (col, row) = (at.col as f64, at.row as f64);
            match cell {
                Cell::Open => self.fill_cell(col, row, Color::WHITE),
                Cell::Start => {
                    self.fill_cell(col, row, Color::START);
                    self.glyph("S".to_string(), col, row);
                }
                Cell::Goal => {
                    self.fill_cell(col, row, Color::GOAL);
                    self.glyph("G".to_string(), col, row);
                }
                _ => continue,
            }
            count += 1;
        }
        debug!(count, "open and special cells drawn");
    }

    fn numeric_labels(&mut self) {
        for (at, cell) in self.content() {
            if let Cell::Label(number) = cell {
                self.glyph(number.to_string(), at.col as f64, at.row as f64);
            }
        }
    }

    /// Line mode: wall tokens on odd-row-xor-odd-column positions
    fn wall_segments(&mut self) {
        let length = self.config.cell_length;
        let rows = self.dims.rows as f64;
        let mut segments = Vec::new();
        for (i, row) in self.cells.iter().enumerate() {
            for (j, cell) in row.iter().enumerate() {
                if *cell != Cell::Wall || i % 2 == j % 2 {
                    continue;
                }
                let (from, to) = if i % 2 == 0 {
                    let y = (rows - (i / 2) as f64) * length;
                    let x = (j / 2) as f64 * length;
                    (Point::new(x, y), Point::new(x + length, y))
                } else {
                    let x = (j / 2) as f64 * length;
                    let y = (rows - (i / 2) as f64) * length;
                    (Point::new(x, y), Point::new(x, y - length))
                };
                segments.push(Primitive::StrokedLine {
                    from,
                    to,
                    width: self.config.line_width,
                });
            }
        }
        debug!(count = segments.len(), "wall segments drawn");
        self.primitives.extend(segments);
    }

    /// Cell mode: wall tokens become solid cells
    fn wall_blocks(&mut self) {
        for (at, cell) in self.content() {
            if cell == Cell::Wall {
                self.fill_cell(at.col as f64, at.row as f64, Color::BLACK);
            }
        }
    }
}
