//! Stateless functors usable as [`Mapper`](crate::iterators::Mapper)s.

pub mod transform;

pub use transform::Transform;
