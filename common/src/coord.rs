use std::fmt;

/// Number of rows and columns of the board grid.
pub const SIZE: usize = 7;

/// A cell coordinate on the 7x7 grid. `x` is the column, `y` the row, and
/// the top left cell is 0,0
///
/// Invariant: can only represent coordinates inside the grid
#[derive(PartialEq, Eq, Debug, Clone, Copy, Hash)]
pub struct Coord {
    x: u8,
    y: u8,
}

impl Coord {
    pub fn new(x: usize, y: usize) -> Option<Self> {
        if x < SIZE && y < SIZE {
            Some(Coord {
                x: x as u8,
                y: y as u8,
            })
        } else {
            None
        }
    }

    pub const fn center() -> Self {
        Coord { x: 3, y: 3 }
    }

    /// Move by the given offset, or `None` if that leaves the grid.
    pub fn shift(self, dx: i8, dy: i8) -> Option<Coord> {
        let x = self.x as i8 + dx;
        let y = self.y as i8 + dy;
        if x < 0 || y < 0 {
            return None;
        }
        Self::new(x as usize, y as usize)
    }

    /// Row-major position in a flat grid.
    pub fn index(self) -> usize {
        self.y as usize * SIZE + self.x as usize
    }

    /// All coordinates in row-major order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..SIZE).flat_map(|y| (0..SIZE).map(move |x| Coord::new(x, y).expect("within grid")))
    }

    pub fn x(self) -> usize {
        self.x as usize
    }
    pub fn y(self) -> usize {
        self.y as usize
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
