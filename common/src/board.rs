use std::{fmt, sync::LazyLock};

use crate::coord::{Coord, SIZE};

const NR_CELLS: usize = SIZE * SIZE;

#[rustfmt::skip]
const INITIAL_ROWS: [&str; SIZE] = [
    "2211122",
    "2211122",
    "1111111",
    "1110111",
    "1111111",
    "2211122",
    "2211122",
];

#[rustfmt::skip]
const GOAL_ROWS: [&str; SIZE] = [
    "2200022",
    "2200022",
    "0000000",
    "0001000",
    "0000000",
    "2200022",
    "2200022",
];

static INITIAL_BOARD: LazyLock<Board> =
    LazyLock::new(|| Board::from_ascii(INITIAL_ROWS).expect("embedded initial board is valid"));
static GOAL_BOARD: LazyLock<Board> =
    LazyLock::new(|| Board::from_ascii(GOAL_ROWS).expect("embedded goal board is valid"));

/// Content of a single cell of the grid.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum Cell {
    Empty,
    Peg,
    /// Outside of the cross-shaped playing area
    Blocked,
}

impl Cell {
    /// Single character code used for printing and for board keys.
    pub fn code(self) -> u8 {
        match self {
            Cell::Empty => b'0',
            Cell::Peg => b'1',
            Cell::Blocked => b'2',
        }
    }

    pub fn from_code(c: char) -> Option<Self> {
        match c {
            '0' => Some(Cell::Empty),
            '1' => Some(Cell::Peg),
            '2' => Some(Cell::Blocked),
            _ => None,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code() as char)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Order in which directions are tried for every origin.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    fn offset(self) -> (i8, i8) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Up => "Up",
            Direction::Down => "Down",
            Direction::Left => "Left",
            Direction::Right => "Right",
        };
        f.write_str(name)
    }
}

/// A jump of the peg at `origin` over its neighbour in `direction`.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Hash)]
pub struct Move {
    pub direction: Direction,
    pub origin: Coord,
}

impl Move {
    pub fn new(direction: Direction, origin: Coord) -> Self {
        Move { direction, origin }
    }

    /// The cell that is jumped over, if it lies on the grid.
    pub fn jumped(self) -> Option<Coord> {
        let (dx, dy) = self.direction.offset();
        self.origin.shift(dx, dy)
    }

    /// The cell the peg lands in, if it lies on the grid.
    pub fn destination(self) -> Option<Coord> {
        let (dx, dy) = self.direction.offset();
        self.origin.shift(2 * dx, 2 * dy)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} from {}", self.direction, self.origin)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum BoardParseError {
    #[display("invalid cell character {ch:?} in row {row}")]
    InvalidChar { row: usize, ch: char },
    #[display("row {row} has {len} cells, expected 7")]
    WrongRowLength { row: usize, len: usize },
}

/// Canonical serialization of a board: the cell codes in row-major order.
///
/// Two boards have the same key iff they are equal, so this is used to
/// deduplicate visited states.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoardKey([u8; NR_CELLS]);

impl BoardKey {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for BoardKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in &self.0 {
            write!(f, "{}", b as char)?;
        }
        Ok(())
    }
}

impl fmt::Debug for BoardKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BoardKey({self})")
    }
}

/// One configuration of the 7x7 board.
///
/// This is a value type: applying a move returns a new board and leaves the
/// original untouched.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Cell; NR_CELLS],
}

impl Board {
    /// The standard start position: every playable hole filled except the
    /// centre.
    pub fn initial() -> Self {
        *INITIAL_BOARD
    }

    /// A single peg left in the centre.
    pub fn goal() -> Self {
        *GOAL_BOARD
    }

    /// Parse seven rows of cell codes (`0` empty, `1` peg, `2` blocked).
    /// Whitespace within a row is ignored.
    pub fn from_ascii(rows: [&str; SIZE]) -> Result<Self, BoardParseError> {
        let mut cells = [Cell::Blocked; NR_CELLS];
        for (y, line) in rows.iter().enumerate() {
            let mut x = 0;
            for ch in line.chars().filter(|c| !c.is_whitespace()) {
                let cell =
                    Cell::from_code(ch).ok_or(BoardParseError::InvalidChar { row: y, ch })?;
                if x < SIZE {
                    cells[y * SIZE + x] = cell;
                }
                x += 1;
            }
            if x != SIZE {
                return Err(BoardParseError::WrongRowLength { row: y, len: x });
            }
        }
        Ok(Board { cells })
    }

    pub fn cell(&self, coord: Coord) -> Cell {
        self.cells[coord.index()]
    }

    fn set(&mut self, coord: Coord, cell: Cell) {
        self.cells[coord.index()] = cell;
    }

    /// Rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(SIZE)
    }

    pub fn key(&self) -> BoardKey {
        BoardKey(self.cells.map(Cell::code))
    }

    /// Number of pegs on the board
    pub fn peg_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c == Cell::Peg).count()
    }

    pub fn blocked_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c == Cell::Blocked).count()
    }

    pub fn is_legal(&self, mv: Move) -> bool {
        let (Some(jumped), Some(destination)) = (mv.jumped(), mv.destination()) else {
            return false;
        };
        self.cell(mv.origin) == Cell::Peg
            && self.cell(jumped) == Cell::Peg
            && self.cell(destination) == Cell::Empty
    }

    /// All legal moves, origins in row-major order and directions in
    /// [`Direction::ALL`] order for each origin.
    pub fn possible_moves(&self) -> impl Iterator<Item = Move> + '_ {
        Coord::all()
            .filter(move |&origin| self.cell(origin) == Cell::Peg)
            .flat_map(|origin| Direction::ALL.map(|direction| Move::new(direction, origin)))
            .filter(move |&mv| self.is_legal(mv))
    }

    /// Return the board after `mv`. The move has to be legal on this board,
    /// i.e. come from [`Board::possible_moves`].
    pub fn apply_move(&self, mv: Move) -> Board {
        debug_assert!(self.is_legal(mv), "illegal move {mv} applied");
        let jumped = mv.jumped().expect("legal move jumps over a cell on the board");
        let destination = mv.destination().expect("legal move lands on the board");

        let mut next = *self;
        next.set(mv.origin, Cell::Empty);
        next.set(jumped, Cell::Empty);
        next.set(destination, Cell::Peg);
        next
    }

    /// Every board reachable with one move, paired with that move, in the
    /// same order as [`Board::possible_moves`].
    pub fn successors(&self) -> impl Iterator<Item = (Board, Move)> + '_ {
        self.possible_moves()
            .map(move |mv| (self.apply_move(mv), mv))
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::initial()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.rows().enumerate() {
            if y > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{cell}")?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board({})", self.key())
    }
}
