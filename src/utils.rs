use std::fmt;

/// A position on a bounded grid.
///
/// `row` ranges over the grid's width and `col` over its height, see
/// [`Grid`](crate::Grid) for the indexing convention.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, PartialOrd, Ord, Default)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

#[macro_export]
macro_rules! coord {
    ($row:expr, $col:expr) => {
        $crate::Coord {
            row: $row,
            col: $col,
        }
    };
}

impl Coord {
    /// shifts the coordinate by a signed offset, `None` if it would leave the positive quadrant.
    pub fn offset(self, (d_row, d_col): (isize, isize)) -> Option<Self> {
        let row = self.row.checked_add_signed(d_row)?;
        let col = self.col.checked_add_signed(d_col)?;
        Some(coord!(row, col))
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        coord!(row, col)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[test]
fn test_offset() {
    assert_eq!(coord!(1, 1).offset((-1, -1)), Some(coord!(0, 0)));
    assert_eq!(coord!(2, 3).offset((1, 0)), Some(coord!(3, 3)));
    assert_eq!(coord!(0, 4).offset((-1, 0)), None);
    assert_eq!(coord!(4, 0).offset((0, -1)), None);
}
