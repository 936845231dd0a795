#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub char: char,
    /// Right half of a double-width character drawn in the cell to the left.
    pub wide_continuation: bool,
}

impl Default for Cell {
    fn default() -> Self {
        Self::new(' ')
    }
}

impl Cell {
    pub const fn new(char: char) -> Self {
        Self {
            char,
            wide_continuation: false,
        }
    }

    pub const fn continuation() -> Self {
        Self {
            char: ' ',
            wide_continuation: true,
        }
    }
}
