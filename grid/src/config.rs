#[derive(Debug, Clone)]
pub struct GridConfig {
    pub max_dimension: usize,
    pub max_cell_count: usize,
}

impl Default for GridConfig {
    fn default() -> Self {
        GridConfig {
            max_dimension: 65_536,
            max_cell_count: 1 << 28,
        }
    }
}
