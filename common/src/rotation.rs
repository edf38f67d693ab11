use crate::direction::Dir4;

/// Quarter-turn rotations, clockwise.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Rot90 {
    #[default]
    Rot0 = 0,
    Rot90 = 1,
    Rot180 = 2,
    Rot270 = 3,
}

impl Rot90 {
    pub const ALL: [Rot90; 4] = [Rot90::Rot0, Rot90::Rot90, Rot90::Rot180, Rot90::Rot270];

    #[inline(always)]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Rotation that undoes this one.
    pub fn inverse(self) -> Self {
        Self::ALL[(4 - self.index()) & 3]
    }

    pub fn then(self, next: Rot90) -> Self {
        Rotation::compose(self, next)
    }
}

/// Table-driven rotation of directions; no trigonometry involved.
pub struct Rotation;

impl Rotation {
    // Indexed by [direction][rotation].
    const DIR4_ROTATION: [[Dir4; 4]; 4] = [
        [Dir4::Up, Dir4::Right, Dir4::Down, Dir4::Left],
        [Dir4::Right, Dir4::Down, Dir4::Left, Dir4::Up],
        [Dir4::Down, Dir4::Left, Dir4::Up, Dir4::Right],
        [Dir4::Left, Dir4::Up, Dir4::Right, Dir4::Down],
    ];

    // Indexed by [first][second].
    const ROT90_COMPOSITION: [[Rot90; 4]; 4] = [
        [Rot90::Rot0, Rot90::Rot90, Rot90::Rot180, Rot90::Rot270],
        [Rot90::Rot90, Rot90::Rot180, Rot90::Rot270, Rot90::Rot0],
        [Rot90::Rot180, Rot90::Rot270, Rot90::Rot0, Rot90::Rot90],
        [Rot90::Rot270, Rot90::Rot0, Rot90::Rot90, Rot90::Rot180],
    ];

    #[inline(always)]
    pub fn rotate(direction: Dir4, rotation: Rot90) -> Dir4 {
        Self::DIR4_ROTATION[direction.index()][rotation.index()]
    }

    #[inline(always)]
    pub fn compose(first: Rot90, second: Rot90) -> Rot90 {
        Self::ROT90_COMPOSITION[first.index()][second.index()]
    }
}
