use std::collections::{HashMap, VecDeque};

use metrohash::MetroBuildHasher;

use crate::{Grid, GridResult, RuleEngine, Transition};

/// number of past generations remembered to detect repeating boards.
pub const HISTORY_WINDOW: usize = 64;

/// How the board has settled, if it has.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cycle {
    Extinct,
    StillLife,
    Oscillator { period: u64 },
}

/// Fingerprints of the last [`HISTORY_WINDOW`] boards, with the generation
/// each was last seen at.
#[derive(Debug, Default)]
struct History {
    seen: HashMap<u64, u64, MetroBuildHasher>,
    order: VecDeque<(u64, u64)>,
}

impl History {
    /// records a board, returning the generation it was last seen at.
    fn record(&mut self, fingerprint: u64, generation: u64) -> Option<u64> {
        if self.order.len() == HISTORY_WINDOW {
            if let Some((oldest, at)) = self.order.pop_front() {
                if self.seen.get(&oldest) == Some(&at) {
                    self.seen.remove(&oldest);
                }
            }
        }
        self.order.push_back((fingerprint, generation));
        self.seen.insert(fingerprint, generation)
    }
}

/// Owns a grid and plays rounds on it.
#[derive(Debug)]
pub struct Game {
    grid: Grid,
    rule: RuleEngine,
    generation: u64,
    history: History,
    cycle: Option<Cycle>,
}

impl Game {
    pub fn new(grid: Grid, rule: RuleEngine) -> Self {
        let mut history = History::default();
        history.record(grid.fingerprint(), 0);
        let cycle = grid.is_empty().then_some(Cycle::Extinct);
        Self {
            grid,
            rule,
            generation: 0,
            history,
            cycle,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn play_round(&mut self) -> GridResult<Transition> {
        let transition = self.rule.apply_to(&mut self.grid)?;
        self.generation += 1;

        let last_seen = self
            .history
            .record(self.grid.fingerprint(), self.generation);
        let cycle = if self.grid.is_empty() {
            Some(Cycle::Extinct)
        } else {
            last_seen.map(|at| match self.generation - at {
                1 => Cycle::StillLife,
                period => Cycle::Oscillator { period },
            })
        };

        if cycle.is_some() && self.cycle != cycle {
            tracing::info!(generation = self.generation, ?cycle, "board settled");
        }
        self.cycle = cycle;
        Ok(transition)
    }

    pub fn render(&self) -> String {
        self.grid.to_string()
    }

    /// Whether the current board repeats one of the last [`HISTORY_WINDOW`] generations.
    pub fn cycle(&self) -> Option<Cycle> {
        self.cycle
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coord;

    #[test]
    fn history_forgets_old_boards() {
        let mut history = History::default();
        for generation in 0..HISTORY_WINDOW as u64 {
            assert_eq!(history.record(generation, generation), None);
        }
        assert_eq!(history.record(HISTORY_WINDOW as u64, HISTORY_WINDOW as u64), None);
        assert_eq!(history.record(0, 65), None);
        assert_eq!(history.record(5, 66), Some(5));
    }

    #[test]
    fn history_keeps_repeated_boards() {
        let mut history = History::default();
        history.record(7, 0);
        for generation in 1..HISTORY_WINDOW as u64 {
            history.record(7, generation);
        }
        // evicting the first record must not drop the newer ones
        assert_eq!(history.record(1, 64), None);
        assert_eq!(history.record(7, 65), Some(63));
    }

    #[test]
    fn lone_cell_goes_extinct() {
        let mut grid = Grid::empty(3, 3).unwrap();
        grid.activate(coord!(1, 1)).unwrap();
        let mut game = Game::new(grid, RuleEngine::Conway);
        assert_eq!(game.cycle(), None);
        game.play_round().unwrap();
        assert_eq!(game.generation(), 1);
        assert_eq!(game.cycle(), Some(Cycle::Extinct));
    }
}
