pub mod container;
pub mod tile;

pub use container::Container;
pub use tile::{DefId, Located, Tile};
