use std::{
    fmt::{self, Debug},
    marker::PhantomData,
};

use crate::{iterators::IndexedExpression, structure::Shape};

/// A storage-less expression whose element at each index is computed by a closure.
///
/// It has no strides, so it can only be walked with an indexed stepper. The
/// closure runs again on every dereference.
pub struct IndexFn<F, T> {
    shape: Shape,
    f: F,
    output: PhantomData<fn() -> T>,
}

impl<F, T> IndexFn<F, T>
where
    F: Fn(&[usize]) -> T,
{
    pub fn new(shape: impl Into<Shape>, f: F) -> Self {
        IndexFn {
            shape: shape.into(),
            f,
            output: PhantomData,
        }
    }
}

impl<F: Clone, T> Clone for IndexFn<F, T> {
    fn clone(&self) -> Self {
        IndexFn {
            shape: self.shape.clone(),
            f: self.f.clone(),
            output: PhantomData,
        }
    }
}

impl<F, T> Debug for IndexFn<F, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IndexFn")
            .field("shape", &self.shape)
            .finish_non_exhaustive()
    }
}

impl<F, T> IndexedExpression for IndexFn<F, T>
where
    F: Fn(&[usize]) -> T,
{
    type Output<'s>
        = T
    where
        Self: 's;

    fn shape(&self) -> &[usize] {
        &self.shape
    }

    fn element(&self, index: &[usize]) -> T {
        debug_assert_eq!(index.len(), self.shape.order());
        (self.f)(index)
    }
}
