//! Full traversals built from shaped iterators

use std::iter::FusedIterator;

use gat_lending_iterator::LendingIterator;
use log::{debug, trace};

use crate::structure::{element_count, ShapeHolder};

use super::{
    shaped::ShapedIterator,
    traits::{ReadStepper, Stepper, WriteStepper},
};

/// A begin/end pair of [`ShapedIterator`]s, walked as a Rust [`Iterator`].
///
/// The traversal yields exactly one item per position of the shape. It counts
/// them rather than stopping at the end iterator, because a rank 0 indexed
/// stepper starts equal to its own end. Once the count is exhausted the front
/// has carried past the outermost dimension and equals the end.
#[derive(Debug, Clone)]
pub struct Traversal<S, H> {
    front: ShapedIterator<S, H>,
    end: ShapedIterator<S, H>,
    remaining: usize,
}

impl<S, H> Traversal<S, H>
where
    S: Stepper + Clone,
    H: ShapeHolder + Clone,
{
    /// Walks from `begin` until it equals `end`. Both must walk the same shape.
    ///
    /// A shape with an empty extent has no positions, so the traversal starts at `end`.
    pub fn new(begin: ShapedIterator<S, H>, end: ShapedIterator<S, H>) -> Self {
        let remaining = element_count(begin.shape());
        trace!(
            "traversal over shape {:?}: {remaining} positions",
            begin.shape()
        );
        let front = if remaining == 0 {
            debug!(
                "shape {:?} has an empty extent, nothing to traverse",
                begin.shape()
            );
            end.clone()
        } else {
            begin
        };
        Traversal {
            front,
            end,
            remaining,
        }
    }

    /// A traversal ending where a copy of `stepper` ends after [`Stepper::to_end`]
    pub fn from_stepper(stepper: S, shape: H) -> Self {
        let end = ShapedIterator::end(stepper.clone(), shape.clone());
        Self::new(ShapedIterator::new(stepper, shape), end)
    }
}

impl<S, H> Traversal<S, H> {
    /// The position the next call to `next` reads
    pub fn front(&self) -> &ShapedIterator<S, H> {
        &self.front
    }
}

impl<S, H> Iterator for Traversal<S, H>
where
    S: ReadStepper + PartialEq,
    H: ShapeHolder,
{
    type Item = S::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let item = self.front.get();
        self.front.advance();
        self.remaining -= 1;
        debug_assert!(
            self.remaining != 0 || self.front == self.end,
            "traversal of {:?} exhausted its positions away from its end",
            self.front.shape()
        );
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<S: ReadStepper + PartialEq, H: ShapeHolder> ExactSizeIterator for Traversal<S, H> {}

impl<S: ReadStepper + PartialEq, H: ShapeHolder> FusedIterator for Traversal<S, H> {}

/// A mutable traversal, handing out each element of the shape once as a [`LendingIterator`].
///
/// Write steppers hold an exclusive borrow and cannot be copied into an end
/// iterator, so the traversal counts positions instead of comparing.
#[derive(Debug)]
pub struct TraversalMut<S, H> {
    cursor: ShapedIterator<S, H>,
    remaining: usize,
    started: bool,
}

impl<S: Stepper, H: ShapeHolder> TraversalMut<S, H> {
    pub fn new(cursor: ShapedIterator<S, H>) -> Self {
        let remaining = element_count(cursor.shape());
        trace!(
            "mutable traversal over shape {:?}: {remaining} positions",
            cursor.shape()
        );
        TraversalMut {
            cursor,
            remaining,
            started: false,
        }
    }

    pub fn remaining(&self) -> usize {
        self.remaining
    }
}

impl<S: WriteStepper, H: ShapeHolder> LendingIterator for TraversalMut<S, H> {
    type Item<'r>
        = &'r mut S::Elem
    where
        Self: 'r;

    fn next(&mut self) -> Option<Self::Item<'_>> {
        if self.remaining == 0 {
            return None;
        }
        // the previous element may still be borrowed until now, so advance lazily
        if self.started {
            self.cursor.advance();
        } else {
            self.started = true;
        }
        self.remaining -= 1;
        Some(self.cursor.get_mut())
    }
}
