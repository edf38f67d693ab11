use common::Scalar;

#[derive(Debug, Clone)]
pub struct Config<C> {
    /// Item count at which a leaf attempts to subdivide before accepting more.
    pub max_node_items: usize,
    /// Nodes no wider or taller than twice this never subdivide.
    pub min_node_size: C,
    /// Merge underfull subtrees back into a single leaf after removals.
    pub collapse_on_remove: bool,
}

impl<C: Scalar> Default for Config<C> {
    fn default() -> Self {
        Config {
            max_node_items: 16,
            min_node_size: C::from_u8(4),
            collapse_on_remove: true,
        }
    }
}
