use super::*;

impl<T: Positioned<C> + PartialEq, C: Scalar> Quadtree<T, C> {
    pub fn remove_item(&mut self, item: &T) -> bool {
        self.remove_item_from(ROOT, item)
    }

    /// Removes the first stored item equal to `item` from the leaf below
    /// `start` that covers `item.position()`.
    pub fn remove_item_from(&mut self, start: NodeIndex, item: &T) -> bool {
        let pos = item.position();
        if !self.is_live_node(start) || !self.nodes[start].contains_point(pos) {
            return false;
        }

        let leaf = self.descend_to_leaf(start, pos);
        if !self.nodes[leaf].remove_item_direct(item) {
            return false;
        }
        self.item_count -= 1;
        if self.config.collapse_on_remove {
            self.collapse_upwards(leaf);
        }
        true
    }

    /// Updates the tree after `item`'s position changed from `old_position`.
    ///
    /// If the leaf that held the item still covers its new position the stored
    /// copy is replaced in place. Otherwise the item is removed and reinserted
    /// from the root. Returns the leaf now holding the item, or `NO_NODE` if no
    /// equal item was stored at `old_position` or the new position lies outside
    /// the tree (in which case the item is dropped).
    pub fn item_moved(&mut self, item: T, old_position: Vec2<C>) -> NodeIndex {
        let leaf = self.leaf_containing_point(old_position);
        if leaf == NO_NODE {
            return NO_NODE;
        }
        let idx = match self.nodes[leaf].position_of(&item) {
            Some(idx) => idx,
            None => return NO_NODE,
        };

        if self.nodes[leaf].contains_point(item.position()) {
            self.nodes[leaf].replace_item_direct(idx, item);
            return leaf;
        }

        self.nodes[leaf].remove_item_at(idx);
        self.item_count -= 1;
        if self.config.collapse_on_remove {
            self.collapse_upwards(leaf);
        }
        self.add_item(item)
    }
}

impl<T: Positioned<C>, C: Scalar> Quadtree<T, C> {
    /// Drops every item but keeps the node structure, unless collapsing is
    /// enabled, in which case the tree shrinks back to a single root leaf.
    pub fn clear_items(&mut self) {
        for node in self.nodes.iter_mut() {
            node.clear_items_direct();
        }
        self.item_count = 0;
        if self.config.collapse_on_remove {
            self.attempt_to_collapse_node(ROOT);
        }
    }

    /// Merges the subtree below branch `index` back into a single leaf if it
    /// holds at most `max_node_items` items in total.
    pub fn attempt_to_collapse_node(&mut self, index: NodeIndex) -> bool {
        if !self.is_live_node(index) || self.nodes[index].is_leaf() {
            return false;
        }
        let total = self.count_items_under(index);
        if total > self.config.max_node_items {
            return false;
        }

        let mut items = node::NodeItems::with_capacity(total);
        let mut stack: NodeStack = smallvec![index];
        while let Some(current) = stack.pop() {
            let node = &mut self.nodes[current];
            if node.has_children() {
                stack.extend_from_slice(node.children());
            } else {
                items.extend(node.take_items());
            }
        }

        let children = *self.nodes[index].children();
        for child in children {
            self.delete_subtree(child);
        }
        let node = &mut self.nodes[index];
        node.clear_children();
        node.set_items(items);
        trace!("Collapsed node {} into a leaf holding {} items", index, total);
        true
    }

    /// Walks up from `leaf`, collapsing ancestors for as long as they qualify.
    pub(crate) fn collapse_upwards(&mut self, leaf: NodeIndex) {
        let mut parent = self.nodes[leaf].parent();
        while parent != NO_NODE && self.attempt_to_collapse_node(parent) {
            parent = self.nodes[parent].parent();
        }
    }

    /// Frees `index` and all of its descendants. Items still held by those
    /// nodes are discarded.
    pub(crate) fn delete_subtree(&mut self, index: NodeIndex) {
        debug_assert!(index != ROOT, "the root node is never deleted");
        let mut stack: NodeStack = smallvec![index];
        while let Some(current) = stack.pop() {
            let node = &mut self.nodes[current];
            if node.has_children() {
                stack.extend_from_slice(node.children());
            }
            self.item_count -= node.items().len();
            node.kill();
            self.free_nodes.push(current);
        }
    }
}
