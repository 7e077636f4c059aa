//! Point inclusion and projection.

#[doc(inline)]
pub use self::point_query::PointProjection;

mod point_oriented_box;
mod point_query;
