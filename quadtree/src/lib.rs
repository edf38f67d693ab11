pub mod error;
pub mod quadtree;

pub use error::{QuadtreeError, QuadtreeResult};
pub use quadtree::{ChildNode, Config, Node, NodeIndex, Positioned, Quadtree, NO_NODE};
