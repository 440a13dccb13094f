use std::{path::PathBuf, time::Duration};

use clap::Parser;

use crate::{coord, Coord};

/// run conway's game of life on a bounded grid, in the terminal.
#[derive(Parser, Debug, Clone)]
#[command(name = "golrs-grid")]
#[command(author, version, about, long_about = None)]
pub struct Options {
    /// grid width
    #[arg(long, default_value = "50")]
    pub width: usize,

    /// grid height
    #[arg(long, default_value = "50")]
    pub height: usize,

    /// number of generations to play
    #[arg(short, long, default_value = "1000")]
    pub generations: u64,

    /// delay between frames, in milliseconds
    #[arg(short, long, default_value = "150")]
    pub delay_ms: u64,

    /// seed for the random initial board (default: random)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// start from an empty board with this pattern file stamped on it
    #[arg(short, long)]
    pub pattern: Option<PathBuf>,

    /// row at which the pattern is stamped
    #[arg(long, default_value = "0")]
    pub origin_row: usize,

    /// column at which the pattern is stamped
    #[arg(long, default_value = "0")]
    pub origin_col: usize,

    /// print frames one after another instead of redrawing the screen
    #[arg(long)]
    pub plain: bool,

    /// stop once the board died out, froze or started oscillating
    #[arg(long)]
    pub stop_on_cycle: bool,
}

impl Options {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    pub fn origin(&self) -> Coord {
        coord!(self.origin_row, self.origin_col)
    }
}
