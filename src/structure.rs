//! Shapes and concrete indices
//!
//! A [`Shape`] is the ordered list of extents a traversal walks, outermost
//! dimension first. Traversals read it through a [`ShapeHolder`], which either
//! owns the shape ([`OwnedShape`]) or borrows it ([`SharedShape`]).

use thiserror::Error;

pub mod concrete_index;
pub mod shape;

pub use concrete_index::{ConcreteIndex, ExpandedIndex, FlatIndex};
pub use shape::{broadcast_offset, element_count, OwnedShape, Shape, ShapeHolder, SharedShape};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShapeError {
    #[error("Rank {own} exceeds the traversal rank {target}")]
    RankTooLarge { own: usize, target: usize },
    #[error("Data of length {found} does not fill a shape of size {expected}")]
    DataLength { expected: usize, found: usize },
    #[error("Mismatched order: {found} indices, vs order {expected}")]
    MismatchedOrder { expected: usize, found: usize },
    #[error("Index {index} out of bounds for dimension {dim} of size {extent}")]
    IndexOutOfBounds {
        index: ConcreteIndex,
        dim: usize,
        extent: usize,
    },
}
