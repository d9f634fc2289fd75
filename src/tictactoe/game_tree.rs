//! Full game tree construction
//!
//! The tree is stored as an arena of [`Node`]s addressed by [`NodeId`]. Each
//! node owns the ids of its children; the parent link is a plain id used only
//! for upward queries, so no reference cycle exists.

use std::fmt;

use tracing::debug;

use super::{Score, board::Board};

/// Index of a node inside its [`GameTree`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(u32);

impl NodeId {
    pub fn index(self) -> usize {
        self.0 as usize
    }

    fn from_index(index: usize) -> Self {
        NodeId(u32::try_from(index).expect("a 3x3 game tree has fewer than 2^32 nodes"))
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One position in the game tree
#[derive(Debug, Clone)]
pub struct Node {
    board: Board,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    value: Option<Score>,
}

impl Node {
    fn new(board: Board, parent: Option<NodeId>) -> Self {
        Self {
            board,
            parent,
            children: Vec::new(),
            value: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Child ids in row-major order of the move that produced them
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Minimax value, `None` until evaluated
    pub fn value(&self) -> Option<Score> {
        self.value
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// Game tree rooted at a caller-supplied board
#[derive(Debug, Clone)]
pub struct GameTree {
    nodes: Vec<Node>,
}

impl GameTree {
    /// Create a tree holding only the unexpanded root
    pub fn new(root: Board) -> Self {
        Self {
            nodes: vec![Node::new(root, None)],
        }
    }

    /// Build every continuation reachable from `root`
    pub fn build(root: Board) -> Self {
        let mut tree = Self::new(root);
        tree.expand(tree.root());
        debug!(
            root = %root.encode(),
            nodes = tree.len(),
            "built game tree"
        );
        tree
    }

    /// Expand `id` recursively, depth-first and pre-order.
    ///
    /// Terminal boards stay childless. Children are appended in the row-major
    /// order of the cell they fill, each fully built before the next sibling
    /// starts. Expanding a node that already has children does nothing.
    pub fn expand(&mut self, id: NodeId) {
        let node = &self.nodes[id.index()];
        if !node.children.is_empty() {
            return;
        }

        let board = node.board;
        if board.is_terminal() {
            return;
        }

        let mark = board.turn().to_cell();
        for (row, col) in board.empty_cells() {
            let child_board = board.set(row, col, mark).pass_turn();
            let child = self.push(Node::new(child_board, Some(id)));
            self.expand(child);
            self.nodes[id.index()].children.push(child);
        }
    }

    fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId::from_index(self.nodes.len());
        self.nodes.push(node);
        id
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Number of nodes in the tree
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// # Panics
    ///
    /// Panics if `id` does not belong to this tree.
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    pub fn board(&self, id: NodeId) -> &Board {
        &self.node(id).board
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.node(id).children
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent
    }

    pub fn value(&self, id: NodeId) -> Option<Score> {
        self.node(id).value
    }

    /// Record the minimax value of `id`. A value is only ever written once.
    pub(crate) fn set_value(&mut self, id: NodeId, value: Score) {
        let slot = &mut self.nodes[id.index()].value;
        debug_assert!(slot.is_none(), "value of {id} assigned twice");
        if slot.is_none() {
            *slot = Some(value);
        }
    }

    /// All node ids in storage order (pre-order for a built tree)
    pub fn ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.nodes.len()).map(NodeId::from_index)
    }

    /// Ids from the parent of `id` up to the root
    pub fn ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(self.parent(id), |&current| self.parent(current))
    }

    /// Distance from the root, following parent links
    pub fn depth(&self, id: NodeId) -> usize {
        self.ancestors(id).count()
    }

    /// Every node under `from` in pre-order, tagged with its depth.
    ///
    /// `depth` is the tag given to `from` itself; children get one more than
    /// their parent.
    pub fn flatten(&self, from: NodeId, depth: usize) -> Vec<(NodeId, usize)> {
        let mut out = Vec::new();
        self.collect(from, depth, &mut out);
        out
    }

    fn collect(&self, id: NodeId, depth: usize, out: &mut Vec<(NodeId, usize)>) {
        out.push((id, depth));
        for &child in self.children(id) {
            self.collect(child, depth + 1, out);
        }
    }

    /// Keep only the subtree under `id`, which becomes the new root.
    ///
    /// Boards, child order and any values already computed are preserved.
    pub fn into_subtree(self, id: NodeId) -> GameTree {
        if id == self.root() {
            return self;
        }

        let order = self.flatten(id, 0);
        let mut remap = vec![None; self.nodes.len()];
        for (new_index, &(old, _)) in order.iter().enumerate() {
            remap[old.index()] = Some(NodeId::from_index(new_index));
        }
        let lookup = |old: NodeId| remap[old.index()].expect("flattened subtree covers every child");

        let mut slots: Vec<Option<Node>> = self.nodes.into_iter().map(Some).collect();
        let nodes = order
            .iter()
            .map(|&(old, _)| {
                let mut node = slots[old.index()]
                    .take()
                    .expect("each node appears once in a flattened tree");
                node.parent = if old == id {
                    None
                } else {
                    node.parent.map(lookup)
                };
                node.children = node.children.iter().map(|&child| lookup(child)).collect();
                node
            })
            .collect();

        debug!(from = %id, "re-rooted game tree");
        GameTree { nodes }
    }
}
