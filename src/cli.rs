use std::fmt::Write;

use clap::{Parser, ValueEnum};
use colored::Colorize;
use common::{Board, Coord, Move, NodeId, SearchOptions, SearchTree};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Order {
    /// Start with the final move, like a backtrace
    GoalFirst,
    /// Start with the first move played from the initial board
    RootFirst,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    Auto,
    Always,
    Never,
}

/// Solve English peg solitaire with a depth-first search and print the moves.
#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Args {
    /// Order in which the moves of the solution are printed.
    #[arg(long, value_enum, default_value = "goal-first")]
    pub order: Order,

    /// Highlight the cells touched by each jump.
    #[arg(long, value_enum, default_value = "auto")]
    pub color: ColorChoice,

    /// Abort the search after expanding this many boards.
    #[arg(long, value_name = "COUNT")]
    pub max_expansions: Option<u64>,
}

impl Args {
    pub fn search_options(&self) -> SearchOptions {
        SearchOptions {
            max_expansions: self.max_expansions,
        }
    }

    pub fn apply_color_choice(&self) {
        match self.color {
            ColorChoice::Auto => {}
            ColorChoice::Always => colored::control::set_override(true),
            ColorChoice::Never => colored::control::set_override(false),
        }
    }
}

/// Print the board as rows of cell codes. With `jump`, the landing peg is
/// shown on red and the two cells it left empty on blue.
pub fn render_board(board: &Board, jump: Option<Move>) -> String {
    let landed = jump.and_then(Move::destination);
    let vacated = jump.map(|mv| (mv.origin, mv.jumped()));

    let mut out = String::new();
    for coord in Coord::all() {
        if coord.x() == 0 && coord.y() > 0 {
            out.push('\n');
        }
        let code = board.cell(coord).to_string();
        let is_vacated =
            vacated.is_some_and(|(origin, jumped)| coord == origin || Some(coord) == jumped);

        if Some(coord) == landed {
            let _ = write!(out, "{}", code.on_red());
        } else if is_vacated {
            let _ = write!(out, "{}", code.on_blue());
        } else {
            out.push_str(&code);
        }
    }
    out
}

/// One block per move of the path ending in `goal`: the move, then the
/// board it produced.
pub fn render_solution(tree: &SearchTree, goal: NodeId, order: Order) -> String {
    let mut path = tree.backtrace(goal);
    if order == Order::RootFirst {
        path.reverse();
    }

    let mut out = String::new();
    for id in path {
        let node = tree.node(id);
        match node.from_move() {
            Some(mv) => {
                let _ = writeln!(out, "{mv}");
                let _ = writeln!(out, "{}", render_board(node.board(), Some(mv)));
                out.push('\n');
            }
            None => {
                log::error!("node {id:?} in the path has no move");
                out.push_str("Something went wrong...\n");
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use common::{Direction, depth_first_search};

    use super::*;

    #[test]
    fn test_render_board_without_jump() {
        let rendered = render_board(&Board::goal(), None);
        assert_eq!(rendered, Board::goal().to_string());
    }

    #[test]
    fn test_render_solution_lists_every_move() {
        colored::control::set_override(false);

        let start = Board::from_ascii([
            "2200022",
            "2200022",
            "0000000",
            "0110000",
            "0000000",
            "2200022",
            "2200022",
        ])
        .unwrap();
        let mut tree = SearchTree::new(start);
        let goal = depth_first_search(&mut tree, &Board::goal()).unwrap();

        let rendered = render_solution(&tree, goal, Order::RootFirst);
        let expected = format!(
            "{}\n{}\n\n",
            Move::new(Direction::Right, Coord::new(1, 3).unwrap()),
            Board::goal()
        );
        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_render_solution_order() {
        colored::control::set_override(false);

        let mut tree = SearchTree::new(Board::initial());
        let goal = depth_first_search(&mut tree, &Board::goal()).unwrap();

        let goal_first = render_solution(&tree, goal, Order::GoalFirst);
        let root_first = render_solution(&tree, goal, Order::RootFirst);

        assert!(goal_first.starts_with("Down from (3, 1)\n"));
        assert!(root_first.starts_with("Up from (3, 5)\n"));
        assert_eq!(goal_first.lines().count(), 31 * 9);
    }

    #[test]
    fn test_parse_args() {
        let args = Args::parse_from([
            "pegsolitaire",
            "--order",
            "root-first",
            "--max-expansions",
            "5",
        ]);
        assert_eq!(args.order, Order::RootFirst);
        assert_eq!(args.color, ColorChoice::Auto);
        assert_eq!(args.search_options().max_expansions, Some(5));

        let args = Args::parse_from(["pegsolitaire"]);
        assert_eq!(args.order, Order::GoalFirst);
        assert_eq!(args.max_expansions, None);
    }
}
