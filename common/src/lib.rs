pub mod direction;
pub mod rotation;
pub mod scalar;
pub mod vec2;

pub use direction::{Dir4, Dir8, Direction};
pub use rotation::{Rot90, Rotation};
pub use scalar::{GridCoord, Scalar};
pub use vec2::Vec2;
