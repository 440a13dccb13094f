use crate::{Cell, Coord};

/// A cell together with its in-bounds neighbors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Neighborhood {
    cell: Cell,
    neighbors: Vec<Cell>,
}

impl Neighborhood {
    pub fn new(cell: Cell, neighbors: Vec<Cell>) -> Self {
        debug_assert!(neighbors.len() <= 8);
        Self { cell, neighbors }
    }

    pub fn cell(&self) -> Cell {
        self.cell
    }

    pub fn cell_status(&self) -> bool {
        self.cell.is_alive()
    }

    pub fn cell_location(&self) -> Coord {
        self.cell.coord()
    }

    pub fn neighbors(&self) -> &[Cell] {
        &self.neighbors
    }

    pub fn count_alive_neighbors(&self) -> usize {
        self.neighbors.iter().filter(|cell| cell.is_alive()).count()
    }
}

#[test]
fn test_count_alive_neighbors() {
    use crate::coord;

    let center = Cell::new(true, coord!(0, 0));
    let neighbors = vec![
        Cell::new(true, coord!(0, 1)),
        Cell::new(false, coord!(1, 0)),
        Cell::new(true, coord!(1, 1)),
    ];
    let hood = Neighborhood::new(center, neighbors);
    assert!(hood.cell_status());
    assert_eq!(hood.cell_location(), coord!(0, 0));
    assert_eq!(hood.count_alive_neighbors(), 2);
    assert_eq!(Neighborhood::new(center, vec![]).count_alive_neighbors(), 0);
}
