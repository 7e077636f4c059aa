//! Various unsorted geometrical and logical operators.

pub use self::interval::Interval;

mod interval;
