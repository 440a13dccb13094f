use std::{fs, io, path::Path};

use crate::{coord, Coord, Grid, GridError, GridResult};

/// A set of live cells read from a plain text drawing.
///
/// Each line is a row and each character a column. `#`, `*` and `O` mark live
/// cells, anything else is dead. Lines starting with `!` are comments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pattern {
    actives: Vec<Coord>,
}

impl Pattern {
    pub fn parse(text: &str) -> Self {
        let actives = text
            .lines()
            .filter(|line| !line.starts_with('!'))
            .enumerate()
            .flat_map(|(row, line)| {
                line.chars()
                    .enumerate()
                    .filter(|(_, c)| matches!(c, '#' | '*' | 'O'))
                    .map(move |(col, _)| coord!(row, col))
            })
            .collect();
        Self { actives }
    }

    pub fn load(path: impl AsRef<Path>) -> io::Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(Self::parse(&content))
    }

    pub fn actives(&self) -> &[Coord] {
        &self.actives
    }

    /// Activates every live cell of the pattern, shifted by `origin`.
    ///
    /// Nothing is written unless the whole pattern fits on the grid.
    pub fn stamp(&self, grid: &mut Grid, origin: Coord) -> GridResult<()> {
        let placed = self
            .actives
            .iter()
            .map(|offset| {
                let coord = coord!(
                    origin.row.saturating_add(offset.row),
                    origin.col.saturating_add(offset.col)
                );
                if grid.contains(coord) {
                    Ok(coord)
                } else {
                    Err(GridError::OutOfRange {
                        coord,
                        width: grid.width(),
                        height: grid.height(),
                    })
                }
            })
            .collect::<GridResult<Vec<_>>>()?;

        for coord in placed {
            grid.activate(coord)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GLIDER: &str = "!Name: Glider\n.#.\n..#\n###\n";

    #[test]
    fn parses_live_cells() {
        let pattern = Pattern::parse(GLIDER);
        assert_eq!(
            pattern.actives(),
            &[
                coord!(0, 1),
                coord!(1, 2),
                coord!(2, 0),
                coord!(2, 1),
                coord!(2, 2)
            ]
        );
        assert_eq!(Pattern::parse("* O\n").actives().len(), 2);
        assert!(Pattern::parse("").actives().is_empty());
    }

    #[test]
    fn stamps_at_origin() {
        let mut grid = Grid::empty(6, 6).unwrap();
        Pattern::parse(GLIDER).stamp(&mut grid, coord!(2, 3)).unwrap();
        assert_eq!(grid.alive_count(), 5);
        assert!(grid.value_at(coord!(2, 4)).unwrap());
        assert!(grid.value_at(coord!(4, 5)).unwrap());
    }

    #[test]
    fn rejected_stamp_leaves_grid_untouched() {
        let mut grid = Grid::empty(4, 4).unwrap();
        let err = Pattern::parse(GLIDER).stamp(&mut grid, coord!(2, 2));
        assert!(matches!(err, Err(GridError::OutOfRange { .. })));
        assert!(grid.is_empty());
    }
}
