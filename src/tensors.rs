//! Entities the steppers walk
//!
//! - [`DenseTensor`]: contiguous row major storage, walkable both through strides and through indices
//! - [`IndexFn`]: a lazy expression computed from the index, walkable only through indices

pub mod dense;
pub mod index_fn;

pub use dense::DenseTensor;
pub use index_fn::IndexFn;
