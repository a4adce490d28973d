//! The shape-driven iterator adaptor

use crate::structure::{ExpandedIndex, OwnedShape, ShapeHolder};

use super::{
    odometer::increment_stepper,
    traits::{ReadStepper, Stepper, WriteStepper},
};

/// Drives a stepper through every position of a shape, last dimension fastest.
///
/// The shape may have more dimensions than the entity behind the stepper; the
/// stepper's offset decides which of them it ignores. Two iterators are equal
/// when their steppers are equal and they walk the same shape, so an iterator
/// can be compared against an end iterator built independently from the same
/// entity.
///
/// The index is allocated once, in [`ShapedIterator::new`].
#[derive(Debug, Clone)]
pub struct ShapedIterator<S, H = OwnedShape> {
    stepper: S,
    shape: H,
    index: ExpandedIndex,
}

impl<S: Stepper, H: ShapeHolder> ShapedIterator<S, H> {
    /// An iterator at the origin of `shape`, starting from wherever `stepper` points
    pub fn new(stepper: S, shape: H) -> Self {
        let index = ExpandedIndex::zeros(shape.order());
        ShapedIterator {
            stepper,
            shape,
            index,
        }
    }

    /// An iterator whose stepper has been moved to its end
    pub fn end(mut stepper: S, shape: H) -> Self {
        stepper.to_end();
        Self::new(stepper, shape)
    }

    /// Moves to the next row major position and returns the advanced iterator
    pub fn advance(&mut self) -> &mut Self {
        increment_stepper(&mut self.stepper, &mut self.index, self.shape.shape());
        self
    }

    /// Moves to the next position and returns the position it left
    pub fn post_advance(&mut self) -> Self
    where
        Self: Clone,
    {
        let previous = self.clone();
        self.advance();
        previous
    }

    pub fn index(&self) -> &[usize] {
        &self.index
    }

    pub fn shape(&self) -> &[usize] {
        self.shape.shape()
    }

    pub fn stepper(&self) -> &S {
        &self.stepper
    }

    pub fn into_stepper(self) -> S {
        self.stepper
    }

    /// The element at the current position. Must not be called at the end.
    #[inline]
    pub fn get(&self) -> S::Item
    where
        S: ReadStepper,
    {
        self.stepper.current()
    }

    /// Write access to the element at the current position. Must not be called at the end.
    #[inline]
    pub fn get_mut(&mut self) -> &mut S::Elem
    where
        S: WriteStepper,
    {
        self.stepper.current_mut()
    }
}

impl<S, H, G> PartialEq<ShapedIterator<S, G>> for ShapedIterator<S, H>
where
    S: PartialEq,
    H: ShapeHolder,
    G: ShapeHolder,
{
    fn eq(&self, other: &ShapedIterator<S, G>) -> bool {
        self.stepper == other.stepper && self.shape.shape() == other.shape.shape()
    }
}

impl<S: Eq, H: ShapeHolder> Eq for ShapedIterator<S, H> {}
