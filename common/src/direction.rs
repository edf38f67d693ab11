use crate::scalar::GridCoord;
use crate::vec2::Vec2;

/// Cardinal directions. `Up` points towards increasing `y`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Dir4 {
    Up = 0,
    Right = 1,
    Down = 2,
    Left = 3,
}

/// Cardinal and diagonal directions, clockwise from `Up`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Dir8 {
    Up = 0,
    UpRight = 1,
    Right = 2,
    DownRight = 3,
    Down = 4,
    DownLeft = 5,
    Left = 6,
    UpLeft = 7,
}

impl Dir4 {
    pub const ALL: [Dir4; 4] = [Dir4::Up, Dir4::Right, Dir4::Down, Dir4::Left];

    #[inline(always)]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn opposite(self) -> Self {
        Self::ALL[(self.index() + 2) & 3]
    }

    pub fn to_dir8(self) -> Dir8 {
        Direction::convert_dir4_to_dir8(self)
    }
}

impl Dir8 {
    pub const ALL: [Dir8; 8] = [
        Dir8::Up,
        Dir8::UpRight,
        Dir8::Right,
        Dir8::DownRight,
        Dir8::Down,
        Dir8::DownLeft,
        Dir8::Left,
        Dir8::UpLeft,
    ];

    #[inline(always)]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn opposite(self) -> Self {
        Self::ALL[(self.index() + 4) & 7]
    }

    pub fn is_diagonal(self) -> bool {
        self.index() & 1 == 1
    }

    /// Cardinal equivalent, or `None` for diagonals.
    pub fn to_dir4(self) -> Option<Dir4> {
        if self.is_diagonal() {
            None
        } else {
            Some(Dir4::ALL[self.index() / 2])
        }
    }
}

impl From<Dir4> for Dir8 {
    fn from(dir: Dir4) -> Self {
        dir.to_dir8()
    }
}

/// A direction with a fixed unit offset on the grid.
pub trait CompassDirection: Copy {
    fn offset(self) -> Vec2<i8>;
}

impl CompassDirection for Dir4 {
    #[inline(always)]
    fn offset(self) -> Vec2<i8> {
        Direction::OFFSETS_4[self.index()]
    }
}

impl CompassDirection for Dir8 {
    #[inline(always)]
    fn offset(self) -> Vec2<i8> {
        Direction::OFFSETS_8[self.index()]
    }
}

/// Lookup tables mapping directions to coordinate offsets.
pub struct Direction;

impl Direction {
    const OFFSETS_4: [Vec2<i8>; 4] = [
        Vec2::new(0, 1),  // Up
        Vec2::new(1, 0),  // Right
        Vec2::new(0, -1), // Down
        Vec2::new(-1, 0), // Left
    ];

    const OFFSETS_8: [Vec2<i8>; 8] = [
        Vec2::new(0, 1),   // Up
        Vec2::new(1, 1),   // UpRight
        Vec2::new(1, 0),   // Right
        Vec2::new(1, -1),  // DownRight
        Vec2::new(0, -1),  // Down
        Vec2::new(-1, -1), // DownLeft
        Vec2::new(-1, 0),  // Left
        Vec2::new(-1, 1),  // UpLeft
    ];

    const DIR4_TO_DIR8: [Dir8; 4] = [Dir8::Up, Dir8::Right, Dir8::Down, Dir8::Left];

    /// Location one step away in the given direction. No bounds checking.
    #[inline(always)]
    pub fn neighbour<C: GridCoord, D: CompassDirection>(location: Vec2<C>, direction: D) -> Vec2<C> {
        let offset = direction.offset();
        Vec2::new(location.x.step(offset.x), location.y.step(offset.y))
    }

    #[inline(always)]
    pub fn neighbour_xy<C: GridCoord, D: CompassDirection>(x: C, y: C, direction: D) -> Vec2<C> {
        Self::neighbour(Vec2::new(x, y), direction)
    }

    #[inline(always)]
    pub fn offset<D: CompassDirection>(direction: D) -> Vec2<i8> {
        direction.offset()
    }

    #[inline(always)]
    pub fn convert_dir4_to_dir8(direction: Dir4) -> Dir8 {
        Self::DIR4_TO_DIR8[direction.index()]
    }
}
