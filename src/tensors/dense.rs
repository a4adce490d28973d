use bincode::{Decode, Encode};
use delegate::delegate;
use num::Zero;
use serde::{Deserialize, Serialize};

use crate::{
    iterators::{IndexedExpression, IndexedExpressionMut, StridedContainer, StridedContainerMut},
    structure::{concrete_index::ConcreteIndex, Shape, ShapeError},
};

/// A tensor storing its elements contiguously in row major order
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Encode, Decode)]
pub struct DenseTensor<T> {
    data: Vec<T>,
    shape: Shape,
    strides: Vec<usize>,
    backstrides: Vec<usize>,
}

impl<T> DenseTensor<T> {
    /// Wraps `data`, laid out in row major order, as a tensor of the given shape
    ///
    /// # Errors
    ///
    /// [`ShapeError::DataLength`] if `data` does not hold exactly one element per position
    pub fn from_data(data: Vec<T>, shape: impl Into<Shape>) -> Result<Self, ShapeError> {
        let shape = shape.into();
        if data.len() != shape.size() {
            return Err(ShapeError::DataLength {
                expected: shape.size(),
                found: data.len(),
            });
        }
        let strides = shape.strides_row_major();
        let backstrides = shape.backstrides(&strides);
        Ok(DenseTensor {
            data,
            shape,
            strides,
            backstrides,
        })
    }

    /// A rank-0 tensor holding a single value
    pub fn scalar(value: T) -> Self {
        DenseTensor {
            data: vec![value],
            shape: Shape::scalar(),
            strides: vec![],
            backstrides: vec![],
        }
    }

    pub fn zero(shape: impl Into<Shape>) -> Self
    where
        T: Zero + Clone,
    {
        let shape = shape.into();
        let data = vec![T::zero(); shape.size()];
        let strides = shape.strides_row_major();
        let backstrides = shape.backstrides(&strides);
        DenseTensor {
            data,
            shape,
            strides,
            backstrides,
        }
    }

    delegate! {
        to self.shape {
            pub fn order(&self) -> usize;
            pub fn size(&self) -> usize;
            pub fn is_scalar(&self) -> bool;
        }
    }

    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    pub fn strides(&self) -> &[usize] {
        &self.strides
    }

    pub fn backstrides(&self) -> &[usize] {
        &self.backstrides
    }

    pub fn data(&self) -> &[T] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    pub fn into_data(self) -> Vec<T> {
        self.data
    }

    /// # Errors
    ///
    /// Same as [`Shape::verify_indices`]
    pub fn get(&self, indices: &[ConcreteIndex]) -> Result<&T, ShapeError> {
        let flat = self.shape.flat_index(indices)?;
        Ok(&self.data[usize::from(flat)])
    }

    /// # Errors
    ///
    /// Same as [`Shape::verify_indices`]
    pub fn get_mut(&mut self, indices: &[ConcreteIndex]) -> Result<&mut T, ShapeError> {
        let flat = self.shape.flat_index(indices)?;
        Ok(&mut self.data[usize::from(flat)])
    }

    fn linear(&self, index: &[usize]) -> usize {
        debug_assert_eq!(index.len(), self.order());
        index
            .iter()
            .zip(&self.strides)
            .map(|(index, stride)| index * stride)
            .sum()
    }
}

impl<T> StridedContainer for DenseTensor<T> {
    type Elem = T;

    fn shape(&self) -> &[usize] {
        &self.shape
    }

    fn strides(&self) -> &[usize] {
        &self.strides
    }

    fn backstrides(&self) -> &[usize] {
        &self.backstrides
    }

    fn storage(&self) -> &[T] {
        &self.data
    }
}

impl<T> StridedContainerMut for DenseTensor<T> {
    fn storage_mut(&mut self) -> &mut [T] {
        &mut self.data
    }
}

impl<T> IndexedExpression for DenseTensor<T> {
    type Output<'s>
        = &'s T
    where
        Self: 's;

    fn shape(&self) -> &[usize] {
        &self.shape
    }

    fn element(&self, index: &[usize]) -> &T {
        &self.data[self.linear(index)]
    }
}

impl<T> IndexedExpressionMut for DenseTensor<T> {
    type Elem = T;

    fn element_mut(&mut self, index: &[usize]) -> &mut T {
        let linear = self.linear(index);
        &mut self.data[linear]
    }
}
