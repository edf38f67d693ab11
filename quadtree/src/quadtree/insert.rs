use super::*;

impl<T: Positioned<C>, C: Scalar> Quadtree<T, C> {
    pub fn add_item(&mut self, item: T) -> NodeIndex {
        self.add_item_from(ROOT, item)
    }

    /// Inserts `item` below node `start`, subdividing full leaves on the way.
    ///
    /// Returns the leaf that took the item, or `NO_NODE` (dropping the item)
    /// when its position lies outside `start`.
    pub fn add_item_from(&mut self, start: NodeIndex, item: T) -> NodeIndex {
        let pos = item.position();
        if !self.is_live_node(start) || !self.nodes[start].contains_point(pos) {
            return NO_NODE;
        }

        let max_node_items = self.config.max_node_items;
        let min_node_size = self.config.min_node_size;
        let mut index = start;
        loop {
            index = self.descend_to_leaf(index, pos);
            let node = &self.nodes[index];
            // Undersized leaves take items past the limit rather than splitting.
            if node.can_accept_items(max_node_items) || !node.can_subdivide(min_node_size) {
                break;
            }
            self.subdivide_leaf(index);
        }

        self.nodes[index].add_item_direct(item);
        self.item_count += 1;
        index
    }

    /// Splits a live leaf into four quadrants at its centre and distributes its
    /// items among them.
    pub fn subdivide(&mut self, index: NodeIndex) -> QuadtreeResult<()> {
        if !self.is_live_node(index) {
            return Err(QuadtreeError::InvalidNode { index });
        }
        if self.nodes[index].has_children() {
            return Err(QuadtreeError::NodeHasChildren { index });
        }
        self.subdivide_leaf(index);
        Ok(())
    }

    pub(crate) fn subdivide_leaf(&mut self, index: NodeIndex) {
        debug_assert!(self.nodes[index].is_leaf());

        // Copy bounds out first; allocating children may reallocate the arena.
        let p_min = self.nodes[index].min_bounds();
        let p_ctr = self.nodes[index].centre();
        let p_max = self.nodes[index].max_bounds();
        let children = [
            self.new_node(index, p_min, p_ctr),
            self.new_node(index, Vec2::new(p_min.x, p_ctr.y), Vec2::new(p_ctr.x, p_max.y)),
            self.new_node(index, p_ctr, p_max),
            self.new_node(index, Vec2::new(p_ctr.x, p_min.y), Vec2::new(p_max.x, p_ctr.y)),
        ];
        self.nodes[index].set_children(children);

        let items = self.nodes[index].take_items();
        trace!(
            "Subdividing node {} into {:?}, redistributing {} items",
            index,
            children,
            items.len()
        );
        for item in items {
            let child = self.nodes[index].child_index_containing_point(item.position());
            self.nodes[child].add_item_direct(item);
        }
    }
}
