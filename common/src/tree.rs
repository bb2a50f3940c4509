//! Search tree stored as an arena.
//!
//! Nodes refer to their parent and children by [`NodeId`], so following a
//! path back to the root is a plain index chase.

use crate::board::{Board, Move};

/// Index of a node inside its [`SearchTree`].
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Clone, Debug)]
pub struct Node {
    board: Board,
    from_move: Option<Move>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    expanded: bool,
}

impl Node {
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The move that produced this board, `None` for the root.
    pub fn from_move(&self) -> Option<Move> {
        self.from_move
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Whether the search generated the successors of this node.
    pub fn is_expanded(&self) -> bool {
        self.expanded
    }
}

#[derive(Clone, Debug)]
pub struct SearchTree {
    nodes: Vec<Node>,
    root: NodeId,
}

impl SearchTree {
    pub fn new(root_board: Board) -> Self {
        let mut tree = SearchTree {
            nodes: Vec::new(),
            root: NodeId(0),
        };
        tree.root = tree.new_node(root_board, None);
        tree
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Create a node that is not attached to any parent yet.
    pub fn new_node(&mut self, board: Board, from_move: Option<Move>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            board,
            from_move,
            parent: None,
            children: Vec::new(),
            expanded: false,
        });
        id
    }

    /// Attach `child` below `parent`.
    ///
    /// # Panics
    ///
    /// Panics if `child` already has a parent or is the root.
    pub fn add(&mut self, parent: NodeId, child: NodeId) {
        assert_ne!(child, self.root, "the root cannot be attached");
        assert_ne!(parent, child, "a node cannot be its own parent");
        let node = &mut self.nodes[child.0];
        assert!(node.parent.is_none(), "node {child:?} is already attached");
        node.parent = Some(parent);
        self.nodes[parent.0].children.push(child);
    }

    pub(crate) fn mark_expanded(&mut self, id: NodeId) {
        self.nodes[id.0].expanded = true;
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All nodes in creation order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes.iter().enumerate().map(|(i, n)| (NodeId(i), n))
    }

    /// Number of ancestors of `id`; 0 for the root.
    pub fn depth(&self, id: NodeId) -> usize {
        self.ancestors(id).count()
    }

    /// The nodes from `id` up to, but excluding, the root, nearest first.
    pub fn backtrace(&self, id: NodeId) -> Vec<NodeId> {
        let mut path = Vec::new();
        let mut current = id;
        while let Some(parent) = self.nodes[current.0].parent {
            path.push(current);
            current = parent;
        }
        path
    }

    fn ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(self.nodes[id.0].parent, |&p| self.nodes[p.0].parent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain(tree: &mut SearchTree, len: usize) -> Vec<NodeId> {
        let mut created = Vec::new();
        let mut previous = tree.root();
        for _ in 0..len {
            let child = tree.new_node(Board::initial(), None);
            tree.add(previous, child);
            created.push(child);
            previous = child;
        }
        created
    }

    #[test]
    fn test_relationship_correctly_set() {
        let mut tree = SearchTree::new(Board::initial());
        let root = tree.root();
        let child = tree.new_node(Board::initial(), None);

        tree.add(root, child);

        assert_eq!(tree.node(child).parent(), Some(root));
        assert_eq!(tree.node(root).children(), &[child]);
        assert_eq!(tree.len(), 2);
    }

    #[test]
    fn test_depth_of_root_is_zero() {
        let tree = SearchTree::new(Board::initial());
        assert_eq!(tree.depth(tree.root()), 0);
    }

    #[test]
    fn test_depth_along_a_chain() {
        let mut tree = SearchTree::new(Board::initial());
        let created = chain(&mut tree, 10);

        for (layer, &id) in created.iter().enumerate() {
            assert_eq!(tree.depth(id), layer + 1);
        }
    }

    #[test]
    fn test_depth_of_wide_layer() {
        let mut tree = SearchTree::new(Board::initial());
        let root = tree.root();
        for _ in 0..10 {
            let child = tree.new_node(Board::initial(), None);
            tree.add(root, child);
            assert_eq!(tree.depth(child), 1);
        }
        assert_eq!(tree.node(root).children().len(), 10);
    }

    #[test]
    fn test_backtrace_from_root_returns_empty_list() {
        let tree = SearchTree::new(Board::initial());
        assert!(tree.backtrace(tree.root()).is_empty());
    }

    #[test]
    fn test_backtrace_walks_back_correctly() {
        let mut tree = SearchTree::new(Board::initial());
        let mut created = chain(&mut tree, 10);
        let deepest = *created.last().unwrap();

        created.reverse();
        assert_eq!(tree.backtrace(deepest), created);
    }

    #[test]
    fn test_iter_yields_creation_order() {
        let mut tree = SearchTree::new(Board::goal());
        let created = chain(&mut tree, 3);

        let ids: Vec<_> = tree.iter().map(|(id, _)| id).collect();
        assert_eq!(ids[0], tree.root());
        assert_eq!(&ids[1..], &created[..]);
        assert_eq!(tree.node(tree.root()).board(), &Board::goal());
    }

    #[test]
    #[should_panic(expected = "already attached")]
    fn test_node_can_only_be_attached_once() {
        let mut tree = SearchTree::new(Board::initial());
        let root = tree.root();
        let a = tree.new_node(Board::initial(), None);
        let b = tree.new_node(Board::initial(), None);
        tree.add(root, a);
        tree.add(b, a);
    }
}
