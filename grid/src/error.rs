use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    NonPositiveSize,
    DimensionTooLarge { dimension: usize, max_dimension: usize },
    TooManyCells { cell_count: usize, max_cell_count: usize },
}

pub type GridResult<T> = Result<T, GridError>;

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::NonPositiveSize => {
                write!(f, "grid width and height must both be greater than zero")
            }
            GridError::DimensionTooLarge {
                dimension,
                max_dimension,
            } => {
                write!(
                    f,
                    "grid dimension exceeds the configured maximum (dimension: {}, max_dimension: {})",
                    dimension, max_dimension
                )
            }
            GridError::TooManyCells {
                cell_count,
                max_cell_count,
            } => {
                write!(
                    f,
                    "grid cell count exceeds the configured maximum (cell_count: {}, max_cell_count: {})",
                    cell_count, max_cell_count
                )
            }
        }
    }
}

impl std::error::Error for GridError {}
