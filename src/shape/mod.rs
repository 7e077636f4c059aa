//! Shapes supported by jostle.

pub use self::oriented_box::OrientedBox;

mod oriented_box;
