//! Decision tree implementation
//!
//! Trees are stored flat in an arena and link their children by [`NodeId`],
//! so a tree may be wired up after its nodes are created. Conditions and
//! actions are plain data interpreted by a [`BehaviorContext`], which keeps
//! the tree free of references into the agent that runs it.
//!
//! A traversal starts at the root and follows exactly one outgoing edge
//! per node:
//! - a decision node asks the context and follows `yes` or `no`
//! - an action node lets the context perform it and follows `next`
//!
//! It stops at the first missing edge.

use crate::error::{AiError, Result};
use vigil_core::Handle;

/// Tag type for decision tree node handles
#[derive(Debug)]
pub enum TreeNode {}

/// Handle to a node inside a [`DecisionTree`]
pub type NodeId = Handle<TreeNode>;

/// Interpreter for a tree's conditions and actions
pub trait BehaviorContext {
    /// Condition data stored in decision nodes
    type Condition;
    /// Action data stored in action nodes
    type Action;

    /// Evaluate a decision
    fn check(&mut self, condition: &Self::Condition) -> bool;

    /// Execute an action
    ///
    /// Actions are mutable so they can carry per-node state such as cooldown timers.
    fn perform(&mut self, action: &mut Self::Action);
}

/// Node of a decision tree
#[derive(Debug, Clone)]
pub enum Node<C, A> {
    Decision {
        condition: C,
        yes: Option<NodeId>,
        no: Option<NodeId>,
    },
    Action {
        action: A,
        next: Option<NodeId>,
    },
}

/// Summary of a single traversal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Traversal {
    /// Nodes evaluated, root included
    pub evaluated: usize,
    /// Actions performed
    pub actions: usize,
}

/// Arena-backed decision tree
#[derive(Debug, Clone)]
pub struct DecisionTree<C, A> {
    nodes: Vec<Node<C, A>>,
    root: Option<NodeId>,
}

impl<C, A> Default for DecisionTree<C, A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C, A> DecisionTree<C, A> {
    /// Create an empty tree
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            root: None,
        }
    }

    fn push(&mut self, node: Node<C, A>) -> NodeId {
        let id = NodeId::new(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Add a decision node
    pub fn decision(&mut self, condition: C, yes: Option<NodeId>, no: Option<NodeId>) -> NodeId {
        self.push(Node::Decision { condition, yes, no })
    }

    /// Add an action node
    pub fn action(&mut self, action: A, next: Option<NodeId>) -> NodeId {
        self.push(Node::Action { action, next })
    }

    /// Set the node traversal starts from
    pub fn set_root(&mut self, root: NodeId) -> Result<()> {
        self.check_id(root)?;
        self.root = Some(root);
        Ok(())
    }

    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, id: NodeId) -> bool {
        (id.index() as usize) < self.nodes.len()
    }

    pub fn node(&self, id: NodeId) -> Option<&Node<C, A>> {
        self.nodes.get(id.index() as usize)
    }

    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut Node<C, A>> {
        self.nodes.get_mut(id.index() as usize)
    }

    /// Iterate over all action payloads
    pub fn actions(&self) -> impl Iterator<Item = &A> {
        self.nodes.iter().filter_map(|node| match node {
            Node::Action { action, .. } => Some(action),
            Node::Decision { .. } => None,
        })
    }

    /// Link the `yes` branch of a decision node
    pub fn set_yes(&mut self, id: NodeId, child: Option<NodeId>) -> Result<()> {
        self.check_child(child)?;
        match self.node_mut(id) {
            Some(Node::Decision { yes, .. }) => {
                *yes = child;
                Ok(())
            }
            _ => Err(AiError::InvalidNode(id)),
        }
    }

    /// Link the `no` branch of a decision node
    pub fn set_no(&mut self, id: NodeId, child: Option<NodeId>) -> Result<()> {
        self.check_child(child)?;
        match self.node_mut(id) {
            Some(Node::Decision { no, .. }) => {
                *no = child;
                Ok(())
            }
            _ => Err(AiError::InvalidNode(id)),
        }
    }

    /// Link the successor of an action node
    pub fn set_next(&mut self, id: NodeId, child: Option<NodeId>) -> Result<()> {
        self.check_child(child)?;
        match self.node_mut(id) {
            Some(Node::Action { next, .. }) => {
                *next = child;
                Ok(())
            }
            _ => Err(AiError::InvalidNode(id)),
        }
    }

    fn check_id(&self, id: NodeId) -> Result<()> {
        if self.contains(id) {
            Ok(())
        } else {
            Err(AiError::InvalidNode(id))
        }
    }

    fn check_child(&self, child: Option<NodeId>) -> Result<()> {
        child.map_or(Ok(()), |id| self.check_id(id))
    }

    /// Walk the tree once from the root
    ///
    /// An empty tree (no root) is a no-op.
    pub fn traverse<X>(&mut self, ctx: &mut X) -> Result<Traversal>
    where
        X: BehaviorContext<Condition = C, Action = A>,
    {
        match self.root {
            Some(root) => self.traverse_from(root, ctx),
            None => Ok(Traversal::default()),
        }
    }

    /// Walk the tree once from `start`
    ///
    /// Trees are expected to be acyclic. A traversal that evaluates more
    /// nodes than the tree holds must have revisited one, so it is aborted
    /// with [`AiError::CycleDetected`].
    pub fn traverse_from<X>(&mut self, start: NodeId, ctx: &mut X) -> Result<Traversal>
    where
        X: BehaviorContext<Condition = C, Action = A>,
    {
        let limit = self.nodes.len();
        let mut stats = Traversal::default();
        let mut current = Some(start);

        while let Some(id) = current {
            if stats.evaluated >= limit {
                log::warn!(
                    "Decision tree traversal exceeded {} nodes, aborting",
                    limit
                );
                return Err(AiError::CycleDetected {
                    steps: stats.evaluated,
                });
            }
            stats.evaluated += 1;

            current = match self.nodes.get_mut(id.index() as usize) {
                Some(Node::Decision { condition, yes, no }) => {
                    if ctx.check(condition) {
                        *yes
                    } else {
                        *no
                    }
                }
                Some(Node::Action { action, next }) => {
                    ctx.perform(action);
                    stats.actions += 1;
                    *next
                }
                None => return Err(AiError::InvalidNode(id)),
            };
        }

        Ok(stats)
    }
}
