use crate::tile::{Located, Tile};
use common::{GridCoord, Vec2};
use grid::{Grid, GridConfig, GridResult, NO_INDEX};
use tracing::{debug, trace};

/// Tile store mapping grid cells to slots in a dense payload array.
///
/// The grid holds, for every cell, either `NO_INDEX` or the slot of the
/// payload occupying it. Removing a tile only recycles its slot onto a free
/// list; the stale payload stays in `tiles` until the slot is reused. Readers
/// of [`Container::tiles`] must therefore go through the grid to tell live
/// entries from stale ones.
#[derive(Debug, Clone)]
pub struct Container<P = Tile, C = i32> {
    size: Vec2<C>,
    count: usize,
    grid: Grid<usize, C>,
    tiles: Vec<P>,
    free_tile_indices: Vec<usize>,
}

impl<P: Located<C>, C: GridCoord> Container<P, C> {
    pub fn new(size: Vec2<C>) -> GridResult<Self> {
        Self::new_with_config(size, &GridConfig::default())
    }

    pub fn new_with_config(size: Vec2<C>, config: &GridConfig) -> GridResult<Self> {
        let grid = Grid::new_with_config(size, NO_INDEX, NO_INDEX, config)?;
        Ok(Self {
            size,
            count: grid.count(),
            grid,
            tiles: Vec::new(),
            free_tile_indices: Vec::new(),
        })
    }

    pub fn size(&self) -> Vec2<C> {
        self.size
    }

    /// Number of cells, occupied or not.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Number of occupied cells.
    pub fn len(&self) -> usize {
        self.tiles.len() - self.free_tile_indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn grid(&self) -> &Grid<usize, C> {
        &self.grid
    }

    /// Dense payload storage, stale slots included.
    pub fn tiles(&self) -> &[P] {
        &self.tiles
    }

    /// Slot occupied at `location`, or `NO_INDEX` if empty or out of bounds.
    pub fn slot_index_at(&self, location: Vec2<C>) -> usize {
        *self.grid.get_at_or_default(location)
    }

    pub fn get_tile_at(&self, location: Vec2<C>) -> Option<&P> {
        match self.slot_index_at(location) {
            NO_INDEX => None,
            slot => Some(&self.tiles[slot]),
        }
    }

    pub fn get_tile_at_unchecked(&self, location: Vec2<C>) -> &P {
        let slot = *self.grid.get_at(location);
        debug_assert!(slot != NO_INDEX, "no tile at {}", location);
        &self.tiles[slot]
    }

    /// Stores `tile` at its own location. Returns `false` without touching the
    /// container if that location is outside the grid.
    pub fn add_tile(&mut self, tile: P) -> bool {
        let location = tile.location();
        let cell = self.grid.get_index(location);
        if cell == NO_INDEX {
            debug!("Rejected tile outside container bounds at {}", location);
            return false;
        }
        self.add_tile_at_cell(cell, tile);
        true
    }

    pub fn add_tile_unchecked(&mut self, tile: P) {
        let cell = self.grid.get_index_unchecked(tile.location());
        self.add_tile_at_cell(cell, tile);
    }

    fn add_tile_at_cell(&mut self, cell: usize, tile: P) {
        // An occupied cell keeps its slot and has its payload replaced.
        let existing = *self.grid.get(cell);
        if existing != NO_INDEX {
            self.tiles[existing] = tile;
            return;
        }
        let slot = self.add_tile_at_next_free_index(tile);
        self.grid.set(cell, slot);
    }

    pub(crate) fn add_tile_at_next_free_index(&mut self, tile: P) -> usize {
        if let Some(slot) = self.free_tile_indices.pop() {
            trace!("Reusing tile slot {}", slot);
            self.tiles[slot] = tile;
            return slot;
        }
        let slot = self.tiles.len();
        trace!("Appending tile slot {}", slot);
        self.tiles.push(tile);
        slot
    }

    /// Empties the cell at `location`. Returns `false` if it was already empty
    /// or lies outside the grid.
    pub fn remove_tile_at(&mut self, location: Vec2<C>) -> bool {
        let cell = self.grid.get_index(location);
        if cell == NO_INDEX {
            return false;
        }
        let slot = self.grid.set_and_return_previous(cell, NO_INDEX);
        if slot == NO_INDEX {
            return false;
        }
        self.free_tile_indices.push(slot);
        true
    }

    pub fn remove_tile_at_unchecked(&mut self, location: Vec2<C>) {
        let slot = self.grid.set_at_and_return_previous(location, NO_INDEX);
        debug_assert!(slot != NO_INDEX, "no tile at {}", location);
        self.free_tile_indices.push(slot);
    }

    /// Live payloads in grid order.
    pub fn iter(&self) -> impl Iterator<Item = &P> + '_ {
        self.grid
            .iter()
            .filter(|slot| **slot != NO_INDEX)
            .map(move |slot| &self.tiles[*slot])
    }

    pub fn clear(&mut self) {
        self.grid.fill(NO_INDEX);
        self.tiles.clear();
        self.free_tile_indices.clear();
    }
}
