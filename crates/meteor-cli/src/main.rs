//! Command-line inspector for meteor board addressing.
//!
//! # Usage
//!
//! ```sh
//! meteor-board neighbor 7 se
//! meteor-board --width 6 --rows 4 table
//! meteor-board walk 0 e e se
//! meteor-board render --cell 12
//! ```
//!
//! Set `RUST_LOG=debug` to see board setup logs.

use std::process;

use clap::{Parser, Subcommand};
use meteor_core::{BoardError, Direction, HexBoard, Neighbor, Position};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Number of cells in each row.
    #[arg(long, value_name = "CELLS", default_value_t = HexBoard::METEOR.row_width(), global = true)]
    width: usize,

    /// Number of rows.
    #[arg(long, value_name = "ROWS", default_value_t = HexBoard::METEOR.rows(), global = true)]
    rows: usize,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the neighbor of a cell in one direction.
    Neighbor {
        /// Starting cell index.
        cell: usize,
        /// Direction (E, ESE, SE, S, SW, WSW, W, WNW, NW, N, NE, ENE or PIVOT).
        direction: Direction,
    },
    /// Print the neighbor of every cell in every direction.
    Table,
    /// Follow a path of directions from a cell.
    Walk {
        /// Starting cell index.
        cell: usize,
        /// Directions to follow in order.
        #[arg(num_args = 0..)]
        path: Vec<Direction>,
    },
    /// Draw the staggered board.
    Render {
        /// Highlight this cell and its neighbors.
        #[arg(long, value_name = "CELL")]
        cell: Option<usize>,
    },
}

#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
enum CliError {
    #[display("{_0}")]
    Board(BoardError),
    #[display("cell {cell} is not on the {board} board")]
    CellOutOfRange { cell: usize, board: HexBoard },
}

fn main() {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    if let Err(err) = run(&args) {
        log::debug!("command failed: {err:?}");
        eprintln!("error: {err}");
        process::exit(2);
    }
}

fn run(args: &Args) -> Result<(), CliError> {
    let board = HexBoard::new(args.width, args.rows)?;
    match &args.command {
        Command::Neighbor { cell, direction } => {
            let cell = checked_cell(board, *cell)?;
            println!("{}", format_neighbor(board.neighbor(cell, *direction)));
        }
        Command::Table => print_table(board),
        Command::Walk { cell, path } => {
            let cell = checked_cell(board, *cell)?;
            println!("{}", format_neighbor(board.walk(cell, path.iter().copied())));
        }
        Command::Render { cell } => {
            let cell = cell.map(|cell| checked_cell(board, cell)).transpose()?;
            print!("{}", render(board, cell));
        }
    }
    Ok(())
}

fn checked_cell(board: HexBoard, cell: usize) -> Result<usize, CliError> {
    if board.contains(cell) {
        Ok(cell)
    } else {
        Err(CliError::CellOutOfRange { cell, board })
    }
}

fn format_neighbor(neighbor: Neighbor) -> String {
    match neighbor {
        Neighbor::Valid(cell) => cell.to_string(),
        Neighbor::OffBoard => "off-board".to_owned(),
    }
}

fn print_table(board: HexBoard) {
    let width = board.cell_count().to_string().len().max(3);
    print!("{:>width$}", "cell");
    for dir in Direction::ALL {
        print!(" {dir:>width$}");
    }
    println!();
    for cell in board.cells() {
        print!("{cell:>width$}");
        for dir in Direction::ALL {
            let text = board
                .neighbor(cell, dir)
                .cell()
                .map_or_else(|| "-".to_owned(), |n| n.to_string());
            print!(" {text:>width$}");
        }
        println!();
    }
}

/// Draws one line per row, odd rows indented by half a cell.
///
/// Without a highlighted cell every cell shows its index. With one, the cell is
/// drawn as `@`, its neighbors as `*`, and everything else as `.`.
fn render(board: HexBoard, highlight: Option<usize>) -> String {
    let cell_width = board.cell_count().to_string().len() + 1;
    let half = cell_width.div_ceil(2);
    let mut out = String::new();
    for row in 0..board.rows() {
        let indent = if Position::new(row, 0).parity().is_odd() { half } else { 0 };
        let mut line = " ".repeat(indent);
        for column in 0..board.row_width() {
            let cell = row * board.row_width() + column;
            let text = match highlight {
                None => cell.to_string(),
                Some(center) if center == cell => "@".to_owned(),
                Some(center) if board.neighbors(center).any(|(_, n)| n == cell) => "*".to_owned(),
                Some(_) => ".".to_owned(),
            };
            line.push_str(&format!("{text:>cell_width$}"));
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}
