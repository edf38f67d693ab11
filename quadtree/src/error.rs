use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuadtreeError {
    InvalidBounds { min: String, max: String },
    BoundsTooLarge { min: String, max: String },
    InvalidMinNodeSize { min_node_size: String },
    InvalidNode { index: usize },
    NodeHasChildren { index: usize },
}

pub type QuadtreeResult<T> = Result<T, QuadtreeError>;

impl fmt::Display for QuadtreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuadtreeError::InvalidBounds { min, max } => {
                write!(
                    f,
                    "quadtree bounds must satisfy min < max on both axes (min: {}, max: {})",
                    min, max
                )
            }
            QuadtreeError::BoundsTooLarge { min, max } => {
                write!(
                    f,
                    "quadtree extent does not fit in the coordinate type (min: {}, max: {})",
                    min, max
                )
            }
            QuadtreeError::InvalidMinNodeSize { min_node_size } => {
                write!(
                    f,
                    "minimum node size must be greater than zero (min_node_size: {})",
                    min_node_size
                )
            }
            QuadtreeError::InvalidNode { index } => {
                write!(f, "node index does not refer to a live node (index: {})", index)
            }
            QuadtreeError::NodeHasChildren { index } => {
                write!(f, "node already has children and cannot be subdivided (index: {})", index)
            }
        }
    }
}

impl std::error::Error for QuadtreeError {}
