use super::*;

/// Quadrant of a branch node, in the order children are created.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ChildNode {
    BottomLeft = 0,
    TopLeft = 1,
    TopRight = 2,
    BottomRight = 3,
}

impl ChildNode {
    pub const ALL: [ChildNode; 4] = [
        ChildNode::BottomLeft,
        ChildNode::TopLeft,
        ChildNode::TopRight,
        ChildNode::BottomRight,
    ];

    #[inline(always)]
    pub fn index(self) -> usize {
        self as usize
    }
}

pub(crate) type NodeItems<T> = SmallVec<[T; 4]>;

/// A single arena slot of the tree. Covers the half-open box
/// `[min_bounds, max_bounds)` and holds items only while it is a leaf.
#[derive(Debug, Clone)]
pub struct Node<T, C> {
    id: NodeIndex,
    parent: NodeIndex,
    children: [NodeIndex; 4],
    min_bounds: Vec2<C>,
    max_bounds: Vec2<C>,
    centre: Vec2<C>,
    items: NodeItems<T>,
    alive: bool,
}

impl<T, C: Scalar> Node<T, C> {
    pub(crate) fn new(
        id: NodeIndex,
        parent: NodeIndex,
        min_bounds: Vec2<C>,
        max_bounds: Vec2<C>,
    ) -> Self {
        Self {
            id,
            parent,
            children: [NO_NODE; 4],
            min_bounds,
            max_bounds,
            centre: min_bounds.midpoint(max_bounds),
            items: NodeItems::new(),
            alive: true,
        }
    }

    pub fn id(&self) -> NodeIndex {
        self.id
    }

    pub fn parent(&self) -> NodeIndex {
        self.parent
    }

    pub fn min_bounds(&self) -> Vec2<C> {
        self.min_bounds
    }

    pub fn max_bounds(&self) -> Vec2<C> {
        self.max_bounds
    }

    pub fn centre(&self) -> Vec2<C> {
        self.centre
    }

    pub fn is_root(&self) -> bool {
        !self.has_parent()
    }

    pub fn has_parent(&self) -> bool {
        self.parent != NO_NODE
    }

    #[inline(always)]
    pub fn has_children(&self) -> bool {
        self.children[0] != NO_NODE
    }

    pub fn is_branch(&self) -> bool {
        self.has_children()
    }

    pub fn is_leaf(&self) -> bool {
        !self.has_children()
    }

    pub fn children(&self) -> &[NodeIndex; 4] {
        &self.children
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub(crate) fn is_alive(&self) -> bool {
        self.alive
    }

    pub(crate) fn set_children(&mut self, children: [NodeIndex; 4]) {
        self.children = children;
    }

    pub(crate) fn clear_children(&mut self) {
        self.children = [NO_NODE; 4];
    }

    pub(crate) fn kill(&mut self) {
        self.alive = false;
        self.items.clear();
        self.children = [NO_NODE; 4];
    }

    pub(crate) fn can_subdivide(&self, min_node_size: C) -> bool {
        // Extents are known to fit in `C`; a threshold that does not fit is
        // larger than any extent.
        match min_node_size.checked_add(min_node_size) {
            Some(threshold) => {
                (self.max_bounds.x - self.min_bounds.x) > threshold
                    && (self.max_bounds.y - self.min_bounds.y) > threshold
            }
            None => false,
        }
    }

    pub(crate) fn can_accept_items(&self, max_node_items: usize) -> bool {
        self.items.len() < max_node_items
    }

    pub(crate) fn add_item_direct(&mut self, item: T) {
        self.items.push(item);
    }

    pub(crate) fn take_items(&mut self) -> NodeItems<T> {
        std::mem::take(&mut self.items)
    }

    pub(crate) fn set_items(&mut self, items: NodeItems<T>) {
        self.items = items;
    }

    pub(crate) fn clear_items_direct(&mut self) {
        self.items.clear();
    }

    pub(crate) fn position_of(&self, item: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.items.iter().position(|el| el == item)
    }

    pub(crate) fn remove_item_direct(&mut self, item: &T) -> bool
    where
        T: PartialEq,
    {
        match self.position_of(item) {
            Some(idx) => {
                self.items.remove(idx);
                true
            }
            None => false,
        }
    }

    pub(crate) fn remove_item_at(&mut self, idx: usize) -> T {
        self.items.remove(idx)
    }

    pub(crate) fn replace_item_direct(&mut self, idx: usize, item: T) {
        self.items[idx] = item;
    }

    /// Half-open containment test against `[min_bounds, max_bounds)`.
    #[inline(always)]
    pub fn contains_point(&self, point: Vec2<C>) -> bool {
        point.x >= self.min_bounds.x
            && point.x < self.max_bounds.x
            && point.y >= self.min_bounds.y
            && point.y < self.max_bounds.y
    }

    /// Whether the half-open region `[min_point, max_point)` overlaps this node.
    #[inline(always)]
    pub fn intersects_region(&self, min_point: Vec2<C>, max_point: Vec2<C>) -> bool {
        min_point.x < self.max_bounds.x
            && max_point.x > self.min_bounds.x
            && min_point.y < self.max_bounds.y
            && max_point.y > self.min_bounds.y
    }

    #[inline(always)]
    pub fn child_containing_point(&self, point: Vec2<C>) -> ChildNode {
        match (point.x < self.centre.x, point.y < self.centre.y) {
            (true, true) => ChildNode::BottomLeft,
            (true, false) => ChildNode::TopLeft,
            (false, false) => ChildNode::TopRight,
            (false, true) => ChildNode::BottomRight,
        }
    }

    #[inline(always)]
    pub(crate) fn child_index_containing_point(&self, point: Vec2<C>) -> NodeIndex {
        self.children[self.child_containing_point(point).index()]
    }
}
