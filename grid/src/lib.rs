pub mod config;
pub mod error;
pub mod grid;

pub use config::GridConfig;
pub use error::{GridError, GridResult};
pub use grid::{Grid, NO_INDEX};
