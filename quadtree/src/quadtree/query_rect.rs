use super::*;

impl<T: Positioned<C>, C: Scalar> Quadtree<T, C> {
    /// Appends every item whose position lies in `[min_pos, max_pos)`.
    /// No ordering is guaranteed.
    pub fn find_items(&self, min_pos: Vec2<C>, max_pos: Vec2<C>, out_items: &mut Vec<T>)
    where
        T: Clone,
    {
        self.for_each_item_in(min_pos, max_pos, |item| out_items.push(item.clone()));
    }

    pub fn for_each_item_in<F>(&self, min_pos: Vec2<C>, max_pos: Vec2<C>, mut f: F)
    where
        F: FnMut(&T),
    {
        let mut stack: NodeStack = smallvec![ROOT];
        while let Some(index) = stack.pop() {
            let node = &self.nodes[index];
            if !node.intersects_region(min_pos, max_pos) {
                continue;
            }

            // Children are pruned when popped, not before they are pushed.
            if node.has_children() {
                stack.extend_from_slice(node.children());
                continue;
            }

            for item in node.items() {
                let pos = item.position();
                if pos.x >= min_pos.x && pos.x < max_pos.x && pos.y >= min_pos.y && pos.y < max_pos.y {
                    f(item);
                }
            }
        }
    }

    /// First item stored at exactly `pos`.
    pub fn get_item_at_exact(&self, pos: Vec2<C>) -> Option<&T> {
        let leaf = self.leaf_containing_point(pos);
        if leaf == NO_NODE {
            return None;
        }
        self.nodes[leaf].items().iter().find(|item| item.position() == pos)
    }

    /// Appends every item held anywhere below node `index`.
    pub fn get_items_under(&self, index: NodeIndex, out_items: &mut Vec<T>)
    where
        T: Clone,
    {
        if !self.is_live_node(index) {
            return;
        }
        let mut stack: NodeStack = smallvec![index];
        while let Some(current) = stack.pop() {
            let node = &self.nodes[current];
            if node.has_children() {
                stack.extend_from_slice(node.children());
            } else {
                out_items.extend(node.items().iter().cloned());
            }
        }
    }

    pub(crate) fn count_items_under(&self, index: NodeIndex) -> usize {
        let mut count = 0;
        let mut stack: NodeStack = smallvec![index];
        while let Some(current) = stack.pop() {
            let node = &self.nodes[current];
            if node.has_children() {
                stack.extend_from_slice(node.children());
            } else {
                count += node.items().len();
            }
        }
        count
    }

    /// Leaf whose bounds cover `pos`, or `NO_NODE` outside the tree.
    pub fn leaf_containing_point(&self, pos: Vec2<C>) -> NodeIndex {
        if !self.nodes[ROOT].contains_point(pos) {
            return NO_NODE;
        }
        self.descend_to_leaf(ROOT, pos)
    }

    /// All stored items, leaf by leaf in arena order.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.nodes
            .iter()
            .filter(|node| node.is_alive() && node.is_leaf())
            .flat_map(|node| node.items().iter())
    }
}
