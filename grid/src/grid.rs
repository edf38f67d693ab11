use crate::config::GridConfig;
use crate::error::{GridError, GridResult};
use common::direction::CompassDirection;
use common::{Dir8, Direction, GridCoord, Vec2};
use tracing::debug;

/// Flat index returned by checked lookups for locations outside the grid.
pub const NO_INDEX: usize = usize::MAX;

/// Dense, fixed-size 2D array addressable by location or flat index.
///
/// Cells are stored row-major: `index = x + y * width`. Every lookup comes in a
/// checked form, which returns a sentinel (`NO_INDEX`, [`Grid::no_cell`], a
/// fallback value or `false`) for out-of-range input, and an unchecked form
/// that assumes the caller has already validated the input. Unchecked forms are
/// only guarded by debug assertions.
#[derive(Debug, Clone)]
pub struct Grid<T, C = i32> {
    size: Vec2<C>,
    width: usize,
    height: usize,
    count: usize,
    data: Vec<T>,
    default: T,
}

fn validate_size<C: GridCoord>(size: Vec2<C>, config: &GridConfig) -> GridResult<(usize, usize)> {
    if size.x <= C::ZERO || size.y <= C::ZERO {
        return Err(GridError::NonPositiveSize);
    }
    let too_large = GridError::DimensionTooLarge {
        dimension: usize::MAX,
        max_dimension: config.max_dimension,
    };
    let width = size.x.to_usize().ok_or(too_large)?;
    let height = size.y.to_usize().ok_or(too_large)?;
    for dimension in [width, height] {
        if dimension > config.max_dimension {
            return Err(GridError::DimensionTooLarge {
                dimension,
                max_dimension: config.max_dimension,
            });
        }
    }
    let cell_count = width.checked_mul(height).unwrap_or(usize::MAX);
    if cell_count > config.max_cell_count {
        return Err(GridError::TooManyCells {
            cell_count,
            max_cell_count: config.max_cell_count,
        });
    }
    Ok((width, height))
}

impl<T: Clone, C: GridCoord> Grid<T, C> {
    pub fn new(size: Vec2<C>, fill: T, default: T) -> GridResult<Self> {
        Self::new_with_config(size, fill, default, &GridConfig::default())
    }

    pub fn new_with_config(
        size: Vec2<C>,
        fill: T,
        default: T,
        config: &GridConfig,
    ) -> GridResult<Self> {
        let (width, height) = validate_size(size, config)?;
        let count = width * height;
        debug!("Creating {}x{} grid ({} cells)", width, height, count);
        Ok(Self {
            size,
            width,
            height,
            count,
            data: vec![fill; count],
            default,
        })
    }

    pub fn fill(&mut self, value: T) {
        self.data.fill(value);
    }
}

impl<T, C: GridCoord> Grid<T, C> {
    /// Location returned by checked lookups that fall outside the grid.
    #[inline(always)]
    pub fn no_cell() -> Vec2<C> {
        Vec2::new(C::MAX, C::MAX)
    }

    pub fn size(&self) -> Vec2<C> {
        self.size
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn default_value(&self) -> &T {
        &self.default
    }

    pub fn data(&self) -> &[T] {
        &self.data
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// All valid locations in index order.
    pub fn locations(&self) -> impl Iterator<Item = Vec2<C>> + '_ {
        (0..self.count).map(move |index| self.get_location_unchecked(index))
    }

    #[inline(always)]
    pub fn is_valid_location(&self, location: Vec2<C>) -> bool {
        location.x >= C::ZERO
            && location.x < self.size.x
            && location.y >= C::ZERO
            && location.y < self.size.y
    }

    #[inline(always)]
    pub fn is_valid_index(&self, index: usize) -> bool {
        index < self.count
    }

    // Coordinate translation

    #[inline(always)]
    pub fn get_index(&self, location: Vec2<C>) -> usize {
        if self.is_valid_location(location) {
            self.get_index_unchecked(location)
        } else {
            NO_INDEX
        }
    }

    #[inline(always)]
    pub fn get_index_unchecked(&self, location: Vec2<C>) -> usize {
        debug_assert!(
            self.is_valid_location(location),
            "location {} outside grid of size {}",
            location,
            self.size
        );
        location.x.to_usize_unchecked() + location.y.to_usize_unchecked() * self.width
    }

    #[inline(always)]
    pub fn get_location(&self, index: usize) -> Vec2<C> {
        if self.is_valid_index(index) {
            self.get_location_unchecked(index)
        } else {
            Self::no_cell()
        }
    }

    #[inline(always)]
    pub fn get_location_unchecked(&self, index: usize) -> Vec2<C> {
        debug_assert!(index < self.count, "index {} outside grid", index);
        Vec2::new(
            C::from_usize_unchecked(index % self.width),
            C::from_usize_unchecked(index / self.width),
        )
    }

    // Reads

    #[inline(always)]
    pub fn get(&self, index: usize) -> &T {
        debug_assert!(index < self.count, "index {} outside grid", index);
        &self.data[index]
    }

    #[inline(always)]
    pub fn get_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(index < self.count, "index {} outside grid", index);
        &mut self.data[index]
    }

    #[inline(always)]
    pub fn get_at(&self, location: Vec2<C>) -> &T {
        self.get(self.get_index_unchecked(location))
    }

    pub fn get_or<'a>(&'a self, index: usize, fallback: &'a T) -> &'a T {
        self.data.get(index).unwrap_or(fallback)
    }

    pub fn get_at_or<'a>(&'a self, location: Vec2<C>, fallback: &'a T) -> &'a T {
        self.get_or(self.get_index(location), fallback)
    }

    pub fn get_or_default(&self, index: usize) -> &T {
        self.get_or(index, &self.default)
    }

    pub fn get_at_or_default(&self, location: Vec2<C>) -> &T {
        self.get_at_or(location, &self.default)
    }

    // Writes

    #[inline(always)]
    pub fn set(&mut self, index: usize, value: T) {
        debug_assert!(index < self.count, "index {} outside grid", index);
        self.data[index] = value;
    }

    #[inline(always)]
    pub fn set_at(&mut self, location: Vec2<C>, value: T) {
        let index = self.get_index_unchecked(location);
        self.set(index, value);
    }

    pub fn set_if_valid(&mut self, index: usize, value: T) -> bool {
        match self.data.get_mut(index) {
            Some(cell) => {
                *cell = value;
                true
            }
            None => false,
        }
    }

    pub fn set_at_if_valid(&mut self, location: Vec2<C>, value: T) -> bool {
        let index = self.get_index(location);
        self.set_if_valid(index, value)
    }

    /// Writes `value` and hands back whatever the cell held before.
    #[inline(always)]
    pub fn set_and_return_previous(&mut self, index: usize, value: T) -> T {
        debug_assert!(index < self.count, "index {} outside grid", index);
        std::mem::replace(&mut self.data[index], value)
    }

    #[inline(always)]
    pub fn set_at_and_return_previous(&mut self, location: Vec2<C>, value: T) -> T {
        let index = self.get_index_unchecked(location);
        self.set_and_return_previous(index, value)
    }

    // Edges

    /// True for valid locations in the first or last row or column.
    pub fn is_edge(&self, location: Vec2<C>) -> bool {
        self.is_valid_location(location)
            && (location.x == C::ZERO
                || location.y == C::ZERO
                || location.x == self.size.x - C::ONE
                || location.y == self.size.y - C::ONE)
    }

    pub fn is_edge_index(&self, index: usize) -> bool {
        if !self.is_valid_index(index) {
            return false;
        }
        let x = index % self.width;
        let y = index / self.width;
        x == 0 || y == 0 || x == self.width - 1 || y == self.height - 1
    }

    // Neighbours

    /// Neighbouring location, or [`Grid::no_cell`] if it lies outside the grid.
    pub fn get_neighbour<D: CompassDirection>(&self, location: Vec2<C>, direction: D) -> Vec2<C> {
        let neighbour = Direction::neighbour(location, direction);
        if self.is_valid_location(neighbour) {
            neighbour
        } else {
            Self::no_cell()
        }
    }

    pub fn get_neighbour_opt<D: CompassDirection>(
        &self,
        location: Vec2<C>,
        direction: D,
    ) -> Option<Vec2<C>> {
        let neighbour = Direction::neighbour(location, direction);
        self.is_valid_location(neighbour).then_some(neighbour)
    }

    #[inline(always)]
    pub fn get_neighbour_unchecked<D: CompassDirection>(
        &self,
        location: Vec2<C>,
        direction: D,
    ) -> Vec2<C> {
        Direction::neighbour(location, direction)
    }

    /// Flat index of the next cell in this direction. Assumes that cell exists.
    #[inline(always)]
    pub fn get_neighbour_index_unchecked(&self, index: usize, direction: Dir8) -> usize {
        let w = self.width;
        let neighbour = match direction {
            Dir8::Up => index + w,
            Dir8::UpRight => index + w + 1,
            Dir8::Right => index + 1,
            Dir8::DownRight => index + 1 - w,
            Dir8::Down => index - w,
            Dir8::DownLeft => index - w - 1,
            Dir8::Left => index - 1,
            Dir8::UpLeft => index + w - 1,
        };
        debug_assert!(neighbour < self.count, "neighbour index {} outside grid", neighbour);
        neighbour
    }

    pub fn get_adjacent_or<'a, D: CompassDirection>(
        &'a self,
        location: Vec2<C>,
        direction: D,
        fallback: &'a T,
    ) -> &'a T {
        self.get_at_or(self.get_neighbour(location, direction), fallback)
    }

    pub fn get_adjacent_or_default<D: CompassDirection>(&self, location: Vec2<C>, direction: D) -> &T {
        self.get_adjacent_or(location, direction, &self.default)
    }

    #[inline(always)]
    pub fn get_adjacent_unchecked<D: CompassDirection>(&self, location: Vec2<C>, direction: D) -> &T {
        self.get_at(Direction::neighbour(location, direction))
    }

    // Distances to the boundary

    /// Number of cells between `location` and the grid boundary along
    /// `direction`, not counting the starting cell. Diagonals stop at whichever
    /// axis runs out first. Assumes `location` is valid.
    pub fn get_cell_count_in_direction(&self, location: Vec2<C>, direction: Dir8) -> usize {
        debug_assert!(
            self.is_valid_location(location),
            "location {} outside grid of size {}",
            location,
            self.size
        );
        let x = location.x.to_usize_unchecked();
        let y = location.y.to_usize_unchecked();
        let up = self.height - 1 - y;
        let right = self.width - 1 - x;
        let down = y;
        let left = x;
        match direction {
            Dir8::Up => up,
            Dir8::UpRight => up.min(right),
            Dir8::Right => right,
            Dir8::DownRight => down.min(right),
            Dir8::Down => down,
            Dir8::DownLeft => down.min(left),
            Dir8::Left => left,
            Dir8::UpLeft => up.min(left),
        }
    }

    pub fn get_cell_count_in_direction_index(&self, index: usize, direction: Dir8) -> usize {
        self.get_cell_count_in_direction(self.get_location_unchecked(index), direction)
    }
}
