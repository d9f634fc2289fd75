//! Plain snapshots and text dumps of (sub)trees for inspection

use std::{fmt::Write as _, fs::File, io::BufWriter, path::Path};

use serde::{Deserialize, Serialize};

use super::{Cell, GameTree, NodeId, Player, Score, board::SIZE};

/// Nested copy of a board and its descendants.
///
/// Carries no parent links, so it serializes as a strict tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub cells: [[Cell; SIZE]; SIZE],
    pub turn: Player,
    pub winner: Option<Player>,
    pub value: Option<Score>,
    pub children: Vec<BoardSnapshot>,
}

impl BoardSnapshot {
    /// Snapshot the whole subtree under `id`
    pub fn capture(tree: &GameTree, id: NodeId) -> Self {
        Self::capture_depth(tree, id, None)
    }

    /// Snapshot the subtree under `id`, stopping `max_depth` levels down
    pub fn capture_depth(tree: &GameTree, id: NodeId, max_depth: Option<usize>) -> Self {
        let node = tree.node(id);
        let children = match max_depth {
            Some(0) => Vec::new(),
            _ => node
                .children()
                .iter()
                .map(|&child| Self::capture_depth(tree, child, max_depth.map(|d| d - 1)))
                .collect(),
        };

        BoardSnapshot {
            cells: node.board().rows(),
            turn: node.board().turn(),
            winner: node.board().winner(),
            value: node.value(),
            children,
        }
    }

    /// Number of boards in this snapshot
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(Self::node_count).sum::<usize>()
    }

    pub fn to_json_pretty(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the snapshot as pretty JSON to `path`
    pub fn write_json(&self, path: &Path) -> crate::Result<()> {
        let file = File::create(path).map_err(|source| crate::Error::Io {
            operation: format!("create {}", path.display()),
            source,
        })?;
        serde_json::to_writer_pretty(BufWriter::new(file), self)?;
        Ok(())
    }
}

/// Render every board under `id` with its value, indented by depth.
///
/// `max_depth` limits how far below `id` the dump goes.
pub fn render_tree(tree: &GameTree, id: NodeId, max_depth: Option<usize>) -> String {
    let mut out = String::new();
    render_node(tree, id, 0, max_depth, &mut out);
    out
}

fn render_node(
    tree: &GameTree,
    id: NodeId,
    level: usize,
    max_depth: Option<usize>,
    out: &mut String,
) {
    let indent = "  ".repeat(level);
    for line in tree.board(id).to_string().lines() {
        let _ = writeln!(out, "{indent}{line}");
    }
    match tree.value(id) {
        Some(value) => {
            let _ = writeln!(out, "{indent}v = {value}");
        }
        None => {
            let _ = writeln!(out, "{indent}v = unset");
        }
    }

    if max_depth.is_some_and(|limit| level >= limit) {
        return;
    }
    for &child in tree.children(id) {
        render_node(tree, child, level + 1, max_depth, out);
    }
}
