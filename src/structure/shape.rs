use std::ops::Deref;

use bincode::{Decode, Encode};
use derive_more::{Display, From, Index, Into, IntoIterator};
use log::trace;
use serde::{Deserialize, Serialize};

use super::{
    concrete_index::{ConcreteIndex, FlatIndex},
    ShapeError,
};

/// The extents of an index space, outermost dimension first.
///
/// The last dimension varies fastest during a traversal.
#[derive(
    Debug,
    Clone,
    Default,
    PartialEq,
    Eq,
    Hash,
    Index,
    Serialize,
    Deserialize,
    From,
    Into,
    Display,
    IntoIterator,
    Encode,
    Decode,
)]
#[display(fmt = "{:?}", dims)]
pub struct Shape {
    dims: Vec<usize>,
}

impl Shape {
    pub fn new(dims: impl Into<Vec<usize>>) -> Self {
        Shape { dims: dims.into() }
    }

    /// The shape of a rank-0 tensor
    pub fn scalar() -> Self {
        Shape { dims: vec![] }
    }

    pub fn order(&self) -> usize {
        self.dims.len()
    }

    /// The number of positions in the index space, 1 for a scalar
    pub fn size(&self) -> usize {
        element_count(&self.dims)
    }

    pub fn is_scalar(&self) -> bool {
        self.dims.is_empty()
    }

    /// yields the strides of a contiguous row major layout
    pub fn strides_row_major(&self) -> Vec<usize> {
        let mut strides = vec![1; self.order()];
        if self.order() == 0 {
            return strides;
        }

        for i in (0..self.order() - 1).rev() {
            strides[i] = strides[i + 1] * self.dims[i + 1];
        }
        strides
    }

    /// The storage distance from the last coordinate of each dimension back to its first
    pub fn backstrides(&self, strides: &[usize]) -> Vec<usize> {
        debug_assert_eq!(strides.len(), self.order());
        self.dims
            .iter()
            .zip(strides)
            .map(|(&dim, &stride)| dim.saturating_sub(1) * stride)
            .collect()
    }

    /// Verifies that the list of indices provided addresses a position of this shape
    ///
    /// # Errors
    ///
    /// [`ShapeError::MismatchedOrder`] if the number of indices is not the order,
    ///
    /// [`ShapeError::IndexOutOfBounds`] if an index exceeds its dimension
    pub fn verify_indices(&self, indices: &[ConcreteIndex]) -> Result<(), ShapeError> {
        if indices.len() != self.order() {
            return Err(ShapeError::MismatchedOrder {
                expected: self.order(),
                found: indices.len(),
            });
        }

        for (dim, (&index, &extent)) in indices.iter().zip(&self.dims).enumerate() {
            if index >= extent {
                return Err(ShapeError::IndexOutOfBounds { index, dim, extent });
            }
        }
        Ok(())
    }

    /// yields the row major flat index of the given indices
    ///
    /// # Errors
    ///
    /// Same as [`Self::verify_indices`]
    pub fn flat_index(&self, indices: &[ConcreteIndex]) -> Result<FlatIndex, ShapeError> {
        self.verify_indices(indices)?;
        let idx: usize = indices
            .iter()
            .zip(self.strides_row_major())
            .map(|(index, stride)| index * stride)
            .sum();
        Ok(idx.into())
    }
}

impl Deref for Shape {
    type Target = [usize];

    fn deref(&self) -> &Self::Target {
        &self.dims
    }
}

impl AsRef<[usize]> for Shape {
    fn as_ref(&self) -> &[usize] {
        &self.dims
    }
}

impl FromIterator<usize> for Shape {
    fn from_iter<T: IntoIterator<Item = usize>>(iter: T) -> Self {
        Shape {
            dims: iter.into_iter().collect(),
        }
    }
}

impl From<&[usize]> for Shape {
    fn from(value: &[usize]) -> Self {
        Shape {
            dims: value.to_vec(),
        }
    }
}

impl<const N: usize> From<[usize; N]> for Shape {
    fn from(value: [usize; N]) -> Self {
        Shape {
            dims: value.to_vec(),
        }
    }
}

/// Number of positions in an index space of the given extents (1 for rank 0)
pub fn element_count(shape: &[usize]) -> usize {
    shape.iter().product()
}

/// Number of leading traversal dimensions a rank `own_rank` entity lacks when
/// it is walked along a rank `target_rank` shape.
///
/// # Errors
///
/// [`ShapeError::RankTooLarge`] if the entity has more dimensions than the traversal
pub fn broadcast_offset(own_rank: usize, target_rank: usize) -> Result<usize, ShapeError> {
    let offset = target_rank
        .checked_sub(own_rank)
        .ok_or(ShapeError::RankTooLarge {
            own: own_rank,
            target: target_rank,
        })?;
    trace!("aligning rank {own_rank} against rank {target_rank} with offset {offset}");
    Ok(offset)
}

/// Read access to the shape a traversal is bound to, whoever owns it.
pub trait ShapeHolder {
    fn shape(&self) -> &[usize];

    fn order(&self) -> usize {
        self.shape().len()
    }
}

/// Holds the traversal shape by value
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Encode, Decode)]
pub struct OwnedShape {
    shape: Shape,
}

impl OwnedShape {
    pub fn new(shape: impl Into<Shape>) -> Self {
        OwnedShape {
            shape: shape.into(),
        }
    }

    pub fn into_inner(self) -> Shape {
        self.shape
    }
}

impl ShapeHolder for OwnedShape {
    fn shape(&self) -> &[usize] {
        &self.shape
    }
}

impl From<Shape> for OwnedShape {
    fn from(value: Shape) -> Self {
        OwnedShape { shape: value }
    }
}

impl From<Vec<usize>> for OwnedShape {
    fn from(value: Vec<usize>) -> Self {
        OwnedShape::new(value)
    }
}

impl From<&[usize]> for OwnedShape {
    fn from(value: &[usize]) -> Self {
        OwnedShape::new(value)
    }
}

impl<const N: usize> From<[usize; N]> for OwnedShape {
    fn from(value: [usize; N]) -> Self {
        OwnedShape::new(value)
    }
}

/// Borrows a traversal shape owned elsewhere, typically shared by a begin and an end iterator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SharedShape<'s> {
    shape: &'s [usize],
}

impl<'s> SharedShape<'s> {
    pub fn new(shape: &'s [usize]) -> Self {
        SharedShape { shape }
    }
}

impl ShapeHolder for SharedShape<'_> {
    fn shape(&self) -> &[usize] {
        self.shape
    }
}

impl<'s> From<&'s Shape> for SharedShape<'s> {
    fn from(value: &'s Shape) -> Self {
        SharedShape { shape: value }
    }
}
