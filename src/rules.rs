//! Transition rules.
//!
//! Conway's rules, as applied by [`RuleEngine::Conway`]:
//! 1. a live cell with fewer than two live neighbors dies (under-population).
//! 2. a live cell with two or three live neighbors lives on.
//! 3. a live cell with more than three live neighbors dies (over-population).
//! 4. a dead cell with exactly three live neighbors becomes alive (reproduction).

use crate::{Grid, GridResult};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum RuleEngine {
    #[default]
    Conway,
}

/// What changed during one generation.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub births: usize,
    pub deaths: usize,
}

impl Transition {
    pub fn is_stable(&self) -> bool {
        self.births == 0 && self.deaths == 0
    }
}

impl RuleEngine {
    pub fn next_status(self, currently_alive: bool, living_neighbor_count: usize) -> bool {
        match self {
            RuleEngine::Conway => match (currently_alive, living_neighbor_count) {
                (_, count) if !(2..=3).contains(&count) => false,
                (true, _) => true,
                (false, 3) => true,
                (false, _) => false,
            },
        }
    }

    /// Advances `grid` by one generation.
    ///
    /// All decisions are taken from a snapshot of the grid before any cell is
    /// written back.
    pub fn apply_to(self, grid: &mut Grid) -> GridResult<Transition> {
        let hoods = grid.neighborhoods();
        let mut transition = Transition::default();

        for hood in &hoods {
            let was_alive = hood.cell_status();
            let alive = self.next_status(was_alive, hood.count_alive_neighbors());
            match (was_alive, alive) {
                (false, true) => transition.births += 1,
                (true, false) => transition.deaths += 1,
                _ => (),
            }
            if alive {
                grid.activate(hood.cell_location())?;
            } else {
                grid.deactivate(hood.cell_location())?;
            }
        }

        tracing::debug!(
            births = transition.births,
            deaths = transition.deaths,
            alive = grid.alive_count(),
            rule = ?self,
            "generation applied"
        );
        Ok(transition)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coord;

    #[test]
    fn conway_transition_table() {
        let rule = RuleEngine::Conway;
        for count in 0..=8 {
            let survives = count == 2 || count == 3;
            let born = count == 3;
            assert_eq!(rule.next_status(true, count), survives, "alive with {count}");
            assert_eq!(rule.next_status(false, count), born, "dead with {count}");
        }
    }

    #[test]
    fn empty_grid_stays_empty() {
        let mut grid = Grid::empty(6, 6).unwrap();
        let transition = RuleEngine::default().apply_to(&mut grid).unwrap();
        assert!(grid.is_empty());
        assert!(transition.is_stable());
    }

    #[test]
    fn lone_cell_dies() {
        let mut grid = Grid::empty(3, 3).unwrap();
        grid.activate(coord!(1, 1)).unwrap();
        let transition = RuleEngine::Conway.apply_to(&mut grid).unwrap();
        assert!(grid.is_empty());
        assert_eq!(
            transition,
            Transition {
                births: 0,
                deaths: 1
            }
        );
    }

    #[test]
    fn decisions_use_previous_generation() {
        // an L tromino becomes a block only if every cell reads the old state
        let mut grid = Grid::empty(4, 4).unwrap();
        for coord in [coord!(1, 1), coord!(1, 2), coord!(2, 1)] {
            grid.activate(coord).unwrap();
        }
        let transition = RuleEngine::Conway.apply_to(&mut grid).unwrap();

        let mut block = Grid::empty(4, 4).unwrap();
        for coord in [coord!(1, 1), coord!(1, 2), coord!(2, 1), coord!(2, 2)] {
            block.activate(coord).unwrap();
        }
        assert_eq!(grid, block);
        assert_eq!(
            transition,
            Transition {
                births: 1,
                deaths: 0
            }
        );
    }
}
