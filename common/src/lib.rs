pub mod board;
pub mod coord;
pub mod search;
pub mod tree;

pub use board::{Board, BoardKey, BoardParseError, Cell, Direction, Move};
pub use coord::Coord;
pub use search::{
    SearchError, SearchOptions, SearchStats, Solution, depth_first_search,
    depth_first_search_with,
};
pub use tree::{Node, NodeId, SearchTree};
