use common::{Dir4, Vec2};

/// Capability required of payloads stored in a [`Container`](crate::Container):
/// the grid cell the payload occupies.
pub trait Located<C> {
    fn location(&self) -> Vec2<C>;
}

/// Identifier of a tile definition.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DefId(pub u32);

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Tile<C = i32> {
    definition: DefId,
    rotation: Dir4,
    location: Vec2<C>,
}

impl<C: Copy> Tile<C> {
    pub fn new(definition: DefId, rotation: Dir4, location: Vec2<C>) -> Self {
        Self {
            definition,
            rotation,
            location,
        }
    }

    pub fn definition(&self) -> DefId {
        self.definition
    }

    pub fn rotation(&self) -> Dir4 {
        self.rotation
    }
}

impl<C: Copy> Located<C> for Tile<C> {
    fn location(&self) -> Vec2<C> {
        self.location
    }
}
