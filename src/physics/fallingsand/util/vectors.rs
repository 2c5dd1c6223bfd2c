use std::fmt::Display;

/// The coordinate of a cell in the sandbox
/// row is the vertical axis, the top of the window is 0 and it grows downward
/// col is the horizontal axis, the left of the window is 0
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RowColVector {
    pub row: usize,
    pub col: usize,
}

impl RowColVector {
    pub const ZERO: Self = Self { row: 0, col: 0 };

    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// The cell directly below this one
    pub fn below(&self) -> Self {
        Self {
            row: self.row + 1,
            col: self.col,
        }
    }

    /// The cell below and to the left, None if we are on the left edge
    pub fn below_left(&self) -> Option<Self> {
        self.col.checked_sub(1).map(|col| Self {
            row: self.row + 1,
            col,
        })
    }

    /// The cell below and to the right
    pub fn below_right(&self) -> Self {
        Self {
            row: self.row + 1,
            col: self.col + 1,
        }
    }
}

impl Display for RowColVector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "(row: {}, col: {})", self.row, self.col)
    }
}
