//! Implementation details of the `intersection_test` function.

pub use self::intersection_test_oriented_box_oriented_box::intersection_test_oriented_box_oriented_box;

mod intersection_test_oriented_box_oriented_box;
