//! Traits defining steppers and the entities they walk
//!
//! A [`Stepper`] is a cursor that can be moved one dimension at a time. The
//! container side comes in two flavours: [`StridedContainer`]s expose linear
//! storage plus strides and are walked by moving one storage cursor, while
//! [`IndexedExpression`]s only answer `element(index)` and are walked by
//! keeping a full index.

use crate::structure::{broadcast_offset, ShapeError, ShapeHolder};

use super::{
    indexed::{IndexedStepper, IndexedStepperMut},
    shaped::ShapedIterator,
    strided::{StridedStepper, StridedStepperMut},
    traversal::{Traversal, TraversalMut},
};

/// The moves the odometer issues while walking a shape.
///
/// `dim` always refers to a dimension of the traversal shape, which may have
/// more dimensions than the walked entity.
pub trait Stepper {
    /// Advance `n` positions along `dim`
    fn step(&mut self, dim: usize, n: usize);

    /// Go back `n` positions along `dim`
    fn step_back(&mut self, dim: usize, n: usize);

    /// Return `dim` from its last coordinate to its first
    fn reset(&mut self, dim: usize);

    /// Jump to the terminal position
    fn to_end(&mut self);
}

/// A stepper that can be dereferenced through a shared borrow
pub trait ReadStepper: Stepper {
    type Item;

    /// The element at the current position. Must not be called at the end.
    fn current(&self) -> Self::Item;
}

/// A stepper handing out write access to the current element
pub trait WriteStepper: Stepper {
    type Elem: ?Sized;

    /// The element at the current position. Must not be called at the end.
    fn current_mut(&mut self) -> &mut Self::Elem;
}

/// A container whose elements live in linear storage addressed through strides.
///
/// `strides()[i]` is the storage distance between neighbours along dimension
/// `i`, `backstrides()[i]` the distance from the last coordinate of `i` back to
/// the first. Both have the rank of `shape()`.
pub trait StridedContainer {
    type Elem;

    fn shape(&self) -> &[usize];

    fn strides(&self) -> &[usize];

    fn backstrides(&self) -> &[usize];

    fn storage(&self) -> &[Self::Elem];

    /// Storage position of the first element
    fn begin_cursor(&self) -> usize {
        0
    }

    /// Storage position one past the last element, the end of every strided traversal
    fn end_cursor(&self) -> usize {
        self.storage().len()
    }

    /// A stepper at the first element, aligned against a traversal of `shape`
    ///
    /// # Errors
    ///
    /// [`ShapeError::RankTooLarge`] if the container has more dimensions than `shape`
    fn stepper_begin(&self, shape: &[usize]) -> Result<StridedStepper<'_, Self>, ShapeError>
    where
        Self: Sized,
    {
        let offset = broadcast_offset(self.shape().len(), shape.len())?;
        Ok(StridedStepper::begin(self, offset))
    }

    /// A stepper at the end, aligned against a traversal of `shape`
    ///
    /// # Errors
    ///
    /// Same as [`Self::stepper_begin`]
    fn stepper_end(&self, shape: &[usize]) -> Result<StridedStepper<'_, Self>, ShapeError>
    where
        Self: Sized,
    {
        let offset = broadcast_offset(self.shape().len(), shape.len())?;
        Ok(StridedStepper::end(self, offset))
    }

    /// Walks the container along `shape`, broadcasting it over the leading dimensions it lacks
    ///
    /// # Errors
    ///
    /// Same as [`Self::stepper_begin`]
    ///
    /// # Panics
    ///
    /// Only the rank of `shape` is checked. Its trailing extents must equal the
    /// container's own shape, otherwise the cursor can leave the storage mid-walk.
    fn traverse<H>(&self, shape: H) -> Result<Traversal<StridedStepper<'_, Self>, H>, ShapeError>
    where
        Self: Sized,
        H: ShapeHolder + Clone,
    {
        let begin = self.stepper_begin(shape.shape())?;
        let end = self.stepper_end(shape.shape())?;
        Ok(Traversal::new(
            ShapedIterator::new(begin, shape.clone()),
            ShapedIterator::new(end, shape),
        ))
    }
}

pub trait StridedContainerMut: StridedContainer {
    fn storage_mut(&mut self) -> &mut [Self::Elem];

    /// Mutable counterpart of [`StridedContainer::traverse`]
    ///
    /// # Errors
    ///
    /// [`ShapeError::RankTooLarge`] if the container has more dimensions than `shape`
    ///
    /// # Panics
    ///
    /// Only the rank of `shape` is checked. Its trailing extents must equal the
    /// container's own shape, otherwise the cursor can leave the storage mid-walk.
    fn traverse_mut<H>(
        &mut self,
        shape: H,
    ) -> Result<TraversalMut<StridedStepperMut<'_, Self>, H>, ShapeError>
    where
        Self: Sized,
        H: ShapeHolder,
    {
        let offset = broadcast_offset(self.shape().len(), shape.order())?;
        Ok(TraversalMut::new(ShapedIterator::new(
            StridedStepperMut::begin(self, offset),
            shape,
        )))
    }
}

/// An expression that can only be read one index at a time.
///
/// `Output` is a reference for expressions backed by storage and a value for
/// lazily computed ones.
pub trait IndexedExpression {
    type Output<'s>
    where
        Self: 's;

    fn shape(&self) -> &[usize];

    /// The element at `index`, which has one coordinate per dimension of `shape()`
    fn element(&self, index: &[usize]) -> Self::Output<'_>;

    /// An indexed stepper at the origin, aligned against a traversal of `shape`
    ///
    /// # Errors
    ///
    /// [`ShapeError::RankTooLarge`] if the expression has more dimensions than `shape`
    fn indexed_begin(&self, shape: &[usize]) -> Result<IndexedStepper<'_, Self>, ShapeError>
    where
        Self: Sized,
    {
        let offset = broadcast_offset(self.shape().len(), shape.len())?;
        Ok(IndexedStepper::new(self, offset, false))
    }

    /// An indexed stepper at the end, aligned against a traversal of `shape`
    ///
    /// # Errors
    ///
    /// Same as [`Self::indexed_begin`]
    fn indexed_end(&self, shape: &[usize]) -> Result<IndexedStepper<'_, Self>, ShapeError>
    where
        Self: Sized,
    {
        let offset = broadcast_offset(self.shape().len(), shape.len())?;
        Ok(IndexedStepper::new(self, offset, true))
    }

    /// Walks the expression along `shape` through its `element` accessor
    ///
    /// # Errors
    ///
    /// Same as [`Self::indexed_begin`]
    ///
    /// # Panics
    ///
    /// Only the rank of `shape` is checked. Its trailing extents must equal the
    /// expression's own shape, otherwise `element` can be asked for positions outside it.
    fn traverse_indexed<H>(
        &self,
        shape: H,
    ) -> Result<Traversal<IndexedStepper<'_, Self>, H>, ShapeError>
    where
        Self: Sized,
        H: ShapeHolder + Clone,
    {
        let begin = self.indexed_begin(shape.shape())?;
        let end = self.indexed_end(shape.shape())?;
        Ok(Traversal::new(
            ShapedIterator::new(begin, shape.clone()),
            ShapedIterator::new(end, shape),
        ))
    }
}

pub trait IndexedExpressionMut: IndexedExpression {
    type Elem;

    fn element_mut(&mut self, index: &[usize]) -> &mut Self::Elem;

    /// Mutable counterpart of [`IndexedExpression::traverse_indexed`]
    ///
    /// # Errors
    ///
    /// [`ShapeError::RankTooLarge`] if the expression has more dimensions than `shape`
    ///
    /// # Panics
    ///
    /// Only the rank of `shape` is checked. Its trailing extents must equal the
    /// expression's own shape, otherwise `element` can be asked for positions outside it.
    fn traverse_indexed_mut<H>(
        &mut self,
        shape: H,
    ) -> Result<TraversalMut<IndexedStepperMut<'_, Self>, H>, ShapeError>
    where
        Self: Sized,
        H: ShapeHolder,
    {
        let offset = broadcast_offset(self.shape().len(), shape.order())?;
        Ok(TraversalMut::new(ShapedIterator::new(
            IndexedStepperMut::new(self, offset, false),
            shape,
        )))
    }
}
