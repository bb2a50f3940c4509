use rustc_hash::FxHashSet;

use crate::{
    board::{Board, BoardKey},
    tree::{NodeId, SearchTree},
};

const PROGRESS_INTERVAL: u64 = 100_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SearchError {
    /// Every reachable board was expanded without meeting the goal.
    #[display("no solution found after expanding {expanded} boards")]
    Exhausted { expanded: u64 },
    /// The expansion budget from [`SearchOptions::max_expansions`] ran out.
    #[display("search aborted after expanding {expanded} boards")]
    LimitReached { expanded: u64 },
}

#[derive(Debug, Clone, Default)]
pub struct SearchOptions {
    /// Give up once this many boards have been expanded and another one is
    /// about to be. `None` searches until the move graph is exhausted.
    pub max_expansions: Option<u64>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Boards whose successors were generated
    pub expanded: u64,
    /// Frontier entries dropped because their board was already expanded
    pub duplicates_skipped: u64,
    pub nodes_created: usize,
    pub peak_frontier: usize,
}

#[derive(Debug, Clone, Copy)]
pub struct Solution {
    /// Node holding the goal board
    pub goal: NodeId,
    pub stats: SearchStats,
}

/// Depth-first search from the root of `tree` until a node holding `goal`
/// is found. Discovered nodes are added to `tree`, so the path to the goal
/// can be read with [`SearchTree::backtrace`].
pub fn depth_first_search(tree: &mut SearchTree, goal: &Board) -> Result<NodeId, SearchError> {
    depth_first_search_with(tree, goal, &SearchOptions::default()).map(|solution| solution.goal)
}

/// Like [`depth_first_search`], with an optional expansion budget and
/// statistics about the run.
///
/// The frontier is a stack, and successors are pushed in
/// [`Board::possible_moves`] order, so the last legal move of a board is
/// explored first.
pub fn depth_first_search_with(
    tree: &mut SearchTree,
    goal: &Board,
    options: &SearchOptions,
) -> Result<Solution, SearchError> {
    let goal_key = goal.key();
    let mut visited: FxHashSet<BoardKey> = FxHashSet::default();
    let mut frontier = vec![tree.root()];
    let mut stats = SearchStats {
        peak_frontier: 1,
        ..SearchStats::default()
    };

    while let Some(id) = frontier.pop() {
        let board = *tree.node(id).board();
        let key = board.key();

        if visited.contains(&key) {
            stats.duplicates_skipped += 1;
            continue;
        }

        if key == goal_key {
            stats.nodes_created = tree.len();
            log::info!(
                "found goal at depth {} after expanding {} boards ({} duplicates skipped)",
                tree.depth(id),
                stats.expanded,
                stats.duplicates_skipped,
            );
            return Ok(Solution { goal: id, stats });
        }

        if options
            .max_expansions
            .is_some_and(|limit| stats.expanded >= limit)
        {
            log::warn!("expansion budget of {} boards used up", stats.expanded);
            return Err(SearchError::LimitReached {
                expanded: stats.expanded,
            });
        }

        visited.insert(key);
        tree.mark_expanded(id);
        stats.expanded += 1;
        if stats.expanded % PROGRESS_INTERVAL == 0 {
            log::debug!(
                "expanded {} boards, frontier {}, tree {}",
                stats.expanded,
                frontier.len(),
                tree.len()
            );
        }

        for (successor, mv) in board.successors() {
            let child = tree.new_node(successor, Some(mv));
            tree.add(id, child);
            frontier.push(child);
        }
        stats.peak_frontier = stats.peak_frontier.max(frontier.len());
    }

    log::info!(
        "frontier exhausted after expanding {} boards, no solution",
        stats.expanded
    );
    Err(SearchError::Exhausted {
        expanded: stats.expanded,
    })
}
