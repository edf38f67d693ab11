use crate::error::{QuadtreeError, QuadtreeResult};
use common::{Scalar, Vec2};
use smallvec::{smallvec, SmallVec};
use tracing::{debug, trace};

mod config;
mod insert;
mod maintenance;
mod node;
mod query_rect;

pub use config::Config;
pub use node::{ChildNode, Node};

pub type NodeIndex = usize;

/// Sentinel node index: no parent, no child, or no node accepted the item.
pub const NO_NODE: NodeIndex = usize::MAX;

pub(crate) const ROOT: NodeIndex = 0;

pub(crate) type NodeStack = SmallVec<[NodeIndex; 64]>;

/// Capability required of every item stored in a [`Quadtree`].
///
/// Removal and moves locate items by `==`, so equality should identify an
/// item rather than compare its position.
pub trait Positioned<C> {
    fn position(&self) -> Vec2<C>;
}

impl<C: Copy> Positioned<C> for Vec2<C> {
    fn position(&self) -> Vec2<C> {
        *self
    }
}

/// Region quadtree over positioned items, backed by a node arena.
///
/// Nodes live in a dense `Vec` and refer to each other by index. Freed nodes
/// are pushed onto a free list and reused by later subdivisions; the arena is
/// never compacted. The root is always at index 0.
#[derive(Debug, Clone)]
pub struct Quadtree<T, C> {
    nodes: Vec<Node<T, C>>,
    free_nodes: Vec<NodeIndex>,
    config: Config<C>,
    item_count: usize,
}

impl<T, C: Scalar> Quadtree<T, C> {
    pub fn new(min_bounds: Vec2<C>, max_bounds: Vec2<C>) -> QuadtreeResult<Self> {
        Self::new_with_config(min_bounds, max_bounds, Config::default())
    }

    pub fn new_with_config(
        min_bounds: Vec2<C>,
        max_bounds: Vec2<C>,
        mut config: Config<C>,
    ) -> QuadtreeResult<Self> {
        if !min_bounds.all_lt(&max_bounds) {
            return Err(QuadtreeError::InvalidBounds {
                min: min_bounds.to_string(),
                max: max_bounds.to_string(),
            });
        }
        let extent_fits = |min: C, max: C| max.checked_sub(min).is_some();
        if !extent_fits(min_bounds.x, max_bounds.x) || !extent_fits(min_bounds.y, max_bounds.y) {
            return Err(QuadtreeError::BoundsTooLarge {
                min: min_bounds.to_string(),
                max: max_bounds.to_string(),
            });
        }
        if !(config.min_node_size > C::ZERO) {
            return Err(QuadtreeError::InvalidMinNodeSize {
                min_node_size: config.min_node_size.to_string(),
            });
        }
        config.max_node_items = config.max_node_items.max(1);
        debug!(
            "Creating quadtree over {}..{} (max_node_items: {}, min_node_size: {})",
            min_bounds, max_bounds, config.max_node_items, config.min_node_size
        );

        let mut tree = Self {
            nodes: Vec::new(),
            free_nodes: Vec::new(),
            config,
            item_count: 0,
        };
        tree.new_node(NO_NODE, min_bounds, max_bounds);
        Ok(tree)
    }

    fn new_node(&mut self, parent: NodeIndex, min_bounds: Vec2<C>, max_bounds: Vec2<C>) -> NodeIndex {
        if let Some(index) = self.free_nodes.pop() {
            self.nodes[index] = Node::new(index, parent, min_bounds, max_bounds);
            return index;
        }
        let index = self.nodes.len();
        self.nodes.push(Node::new(index, parent, min_bounds, max_bounds));
        index
    }

    #[inline(always)]
    pub(crate) fn is_live_node(&self, index: NodeIndex) -> bool {
        self.nodes.get(index).map_or(false, |node| node.is_alive())
    }

    /// Follows quadrants from `index` down to the leaf covering `pos`.
    #[inline(always)]
    pub(crate) fn descend_to_leaf(&self, mut index: NodeIndex, pos: Vec2<C>) -> NodeIndex {
        while self.nodes[index].has_children() {
            index = self.nodes[index].child_index_containing_point(pos);
            debug_assert!(index != NO_NODE, "branch node with missing child");
        }
        index
    }

    pub fn root(&self) -> NodeIndex {
        ROOT
    }

    /// Live node at `index`, or `None` for out-of-range or recycled slots.
    pub fn node(&self, index: NodeIndex) -> Option<&Node<T, C>> {
        self.nodes.get(index).filter(|node| node.is_alive())
    }

    pub fn min_bounds(&self) -> Vec2<C> {
        self.nodes[ROOT].min_bounds()
    }

    pub fn max_bounds(&self) -> Vec2<C> {
        self.nodes[ROOT].max_bounds()
    }

    /// Number of live nodes, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len() - self.free_nodes.len()
    }

    /// Length of the node arena, including recycled slots.
    pub fn arena_len(&self) -> usize {
        self.nodes.len()
    }

    pub fn free_node_count(&self) -> usize {
        self.free_nodes.len()
    }

    pub fn len(&self) -> usize {
        self.item_count
    }

    pub fn is_empty(&self) -> bool {
        self.item_count == 0
    }

    pub fn config(&self) -> &Config<C> {
        &self.config
    }
}
