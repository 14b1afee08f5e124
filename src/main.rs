//! CLI for maze drawing

use std::{
    fs::File,
    io::{self, BufReader, Write},
    path::PathBuf,
};

use anyhow::Context;
use clap::{ArgAction, Parser};
use maze_to_eps::{render, Config, Delimiter, Mode};
use tracing::Level;

/// Convert a text maze diagram to Encapsulated PostScript
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Size of one maze cell in points
    #[arg(short, long, default_value_t = 20.0)]
    cell_length: f64,

    /// Input encoding: `line` (walls between cells) or `cell` (every token is a cell)
    #[arg(short, long, default_value = "line")]
    mode: String,

    /// Tokens are separated by spaces instead of one character each
    #[arg(short, long)]
    spaced: bool,

    /// Draw a checkerboard background
    #[arg(short, long)]
    grid: bool,

    /// Draw numeric tokens as cell labels (implies --spaced)
    #[arg(short, long)]
    numbered: bool,

    /// Stroke width of wall lines
    #[arg(short = 'w', long, visible_alias = "weight", default_value_t = 2.0)]
    line_width: f64,

    /// Letter columns and number rows along the edges
    #[arg(short, long)]
    labels: bool,

    /// Log progress to stderr, repeat for more detail
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// File, where to read the maze. Use `-` for stdin.
    #[arg(default_value = "-")]
    file: PathBuf,
}

impl Args {
    fn config(&self) -> anyhow::Result<Config> {
        Ok(Config {
            cell_length: self.cell_length,
            line_width: self.line_width,
            mode: self.mode.parse::<Mode>()?,
            delimiter: if self.spaced {
                Delimiter::Spaces
            } else {
                Delimiter::Chars
            },
            grid: self.grid,
            numbered: self.numbered,
            labels: self.labels,
        })
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}

/// Read maze, write EPS to stdout only if the whole conversion succeeds
fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = args.config()?;

    let mut eps = Vec::new();
    if args.file.to_str() == Some("-") {
        render(io::stdin().lock(), &config, &mut eps)?;
    } else {
        let file = File::open(&args.file)
            .with_context(|| format!("cannot open {}", args.file.display()))?;
        render(BufReader::new(file), &config, &mut eps)?;
    }

    io::stdout().lock().write_all(&eps)?;
    Ok(())
}
