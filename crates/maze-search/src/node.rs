use maze_core::{Action, Cell};

/// Index of a [`Node`] inside a [`NodeArena`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// One step of the search tree.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Node {
    pub state: Cell,
    /// `None` for the root.
    pub parent: Option<NodeId>,
    /// Move that produced `state` from the parent. `None` for the root.
    pub action: Option<Action>,
}

impl Node {
    /// A parentless node.
    #[inline]
    pub const fn root(state: Cell) -> Self {
        Self {
            state,
            parent: None,
            action: None,
        }
    }

    /// A node reached from `parent` by `action`.
    #[inline]
    pub const fn child(state: Cell, parent: NodeId, action: Action) -> Self {
        Self {
            state,
            parent: Some(parent),
            action: Some(action),
        }
    }
}

/// What a frontier holds: a node id plus its state, so membership checks
/// never touch the arena.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct NodeRef {
    pub id: NodeId,
    pub state: Cell,
}

/// Dense storage for the nodes of one search run. Parents are referenced by
/// index, so the ancestry chain lives exactly as long as the arena.
#[derive(Debug, Default)]
pub struct NodeArena {
    nodes: Vec<Node>,
}

impl NodeArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `node` and return a reference usable by a frontier.
    pub fn push(&mut self, node: Node) -> NodeRef {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        NodeRef {
            id,
            state: node.state,
        }
    }

    #[inline]
    pub fn get(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Walk parents from `id` to the root and return the actions and cells
    /// in start-to-`id` order. The root's own cell is not included.
    pub fn path_to(&self, id: NodeId) -> (Vec<Action>, Vec<Cell>) {
        let mut actions = Vec::new();
        let mut cells = Vec::new();
        let mut cur = self.get(id);
        while let (Some(parent), Some(action)) = (cur.parent, cur.action) {
            actions.push(action);
            cells.push(cur.state);
            cur = self.get(parent);
        }
        actions.reverse();
        cells.reverse();
        (actions, cells)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_path_is_empty() {
        let mut arena = NodeArena::new();
        let root = arena.push(Node::root(Cell::new(2, 2)));
        let (actions, cells) = arena.path_to(root.id);
        assert!(actions.is_empty());
        assert!(cells.is_empty());
    }

    #[test]
    fn path_is_oldest_first() {
        let mut arena = NodeArena::new();
        let root = arena.push(Node::root(Cell::new(0, 0)));
        let a = arena.push(Node::child(Cell::new(0, 1), root.id, Action::Up));
        let b = arena.push(Node::child(Cell::new(1, 1), a.id, Action::Right));
        // A sibling that is not on the path.
        arena.push(Node::child(Cell::new(1, 0), root.id, Action::Right));

        let (actions, cells) = arena.path_to(b.id);
        assert_eq!(actions, vec![Action::Up, Action::Right]);
        assert_eq!(cells, vec![Cell::new(0, 1), Cell::new(1, 1)]);
        assert_eq!(arena.len(), 4);
        assert_eq!(b.id.index(), 2);
    }
}
