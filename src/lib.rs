//! Conway's game of life on a finite, non-wrapping grid.
//!
//! A [`Grid`] holds the board, [`Grid::neighborhoods`] snapshots every cell
//! with its neighbors, and a [`RuleEngine`] turns that snapshot into the next
//! generation. [`Game`] repeats the process and [`View`] draws it.

pub use utils::Coord;
mod utils;

pub use error::{GridError, GridResult};
pub mod error;

pub use grid::{Cell, Grid, Neighborhood};
pub mod grid;

pub use rules::{RuleEngine, Transition};
pub mod rules;

pub use pattern::Pattern;
mod pattern;

pub use sim::{Cycle, Game, HISTORY_WINDOW};
mod sim;

pub use view::View;
mod view;

pub use config::Options;
pub mod config;
