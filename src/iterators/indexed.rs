//! Steppers over index-addressed expressions
//!
//! Expressions without strides are walked by keeping their full index and
//! asking them for `element(index)` on every dereference. The index has the
//! rank of the expression, not of the traversal.

use duplicate::duplicate;

use crate::structure::concrete_index::ExpandedIndex;

use super::traits::{IndexedExpression, IndexedExpressionMut, ReadStepper, Stepper, WriteStepper};

/// Index bookkeeping shared by the read and write steppers
#[derive(Debug, Clone, PartialEq, Eq)]
struct IndexCursor {
    index: ExpandedIndex,
    offset: usize,
}

impl IndexCursor {
    fn new(order: usize, offset: usize) -> Self {
        IndexCursor {
            index: ExpandedIndex::zeros(order),
            offset,
        }
    }

    #[inline]
    fn step(&mut self, dim: usize, n: usize) {
        if dim >= self.offset {
            self.index[dim - self.offset] += n;
        }
    }

    #[inline]
    fn step_back(&mut self, dim: usize, n: usize) {
        if dim >= self.offset {
            self.index[dim - self.offset] -= n;
        }
    }

    #[inline]
    fn reset(&mut self, dim: usize) {
        if dim >= self.offset {
            self.index[dim - self.offset] = 0;
        }
    }

    /// The end is the expression's own shape, one past the last coordinate of every dimension
    #[inline]
    fn to_end(&mut self, shape: &[usize]) {
        self.index.assign(shape);
    }
}

/// Read-only stepper over an [`IndexedExpression`]
#[derive(Debug)]
pub struct IndexedStepper<'a, E> {
    expression: &'a E,
    cursor: IndexCursor,
}

/// Stepper handing out mutable access through [`IndexedExpressionMut::element_mut`]
#[derive(Debug)]
pub struct IndexedStepperMut<'a, E> {
    expression: &'a mut E,
    cursor: IndexCursor,
}

impl<E> Clone for IndexedStepper<'_, E> {
    fn clone(&self) -> Self {
        IndexedStepper {
            expression: self.expression,
            cursor: self.cursor.clone(),
        }
    }
}

duplicate! {
    [
        stepper             expression_ref;
        [IndexedStepper]    [&'a E];
        [IndexedStepperMut] [&'a mut E]
    ]
    impl<'a, E: IndexedExpression> stepper<'a, E> {
        /// A stepper at the origin of the expression, or at its end if `end` is set.
        ///
        /// `offset` is the number of leading traversal dimensions the expression lacks.
        pub fn new(expression: expression_ref, offset: usize, end: bool) -> Self {
            let cursor = IndexCursor::new(expression.shape().len(), offset);
            let mut this = stepper { expression, cursor };
            if end {
                this.to_end();
            }
            this
        }

        /// The current position, in the expression's own dimensions
        pub fn index(&self) -> &[usize] {
            &self.cursor.index
        }

        pub fn offset(&self) -> usize {
            self.cursor.offset
        }
    }

    impl<E: IndexedExpression> Stepper for stepper<'_, E> {
        #[inline]
        fn step(&mut self, dim: usize, n: usize) {
            self.cursor.step(dim, n);
            if dim >= self.cursor.offset {
                let own = dim - self.cursor.offset;
                cursor_assert!(
                    self.cursor.index[own] <= self.expression.shape()[own],
                    "index {} stepped past the extent {} of dimension {own}",
                    self.cursor.index[own],
                    self.expression.shape()[own]
                );
            }
        }

        #[inline]
        fn step_back(&mut self, dim: usize, n: usize) {
            if dim >= self.cursor.offset {
                let own = dim - self.cursor.offset;
                cursor_assert!(
                    n <= self.cursor.index[own],
                    "index {} stepped back {n} below zero in dimension {own}",
                    self.cursor.index[own]
                );
            }
            self.cursor.step_back(dim, n);
        }

        #[inline]
        fn reset(&mut self, dim: usize) {
            self.cursor.reset(dim);
        }

        #[inline]
        fn to_end(&mut self) {
            self.cursor.to_end(self.expression.shape());
        }
    }

    impl<E> PartialEq for stepper<'_, E> {
        fn eq(&self, other: &Self) -> bool {
            std::ptr::eq(&*self.expression, &*other.expression) && self.cursor == other.cursor
        }
    }

    impl<E> Eq for stepper<'_, E> {}
}

impl<'a, E: IndexedExpression> ReadStepper for IndexedStepper<'a, E> {
    type Item = E::Output<'a>;

    /// Evaluates the expression at the current index, every time
    #[inline]
    fn current(&self) -> E::Output<'a> {
        let expression: &'a E = self.expression;
        expression.element(&self.cursor.index)
    }
}

impl<E: IndexedExpression> IndexedStepperMut<'_, E> {
    /// Reads the current element without taking write access
    pub fn get(&self) -> E::Output<'_> {
        self.expression.element(&self.cursor.index)
    }
}

impl<E: IndexedExpressionMut> WriteStepper for IndexedStepperMut<'_, E> {
    type Elem = E::Elem;

    #[inline]
    fn current_mut(&mut self) -> &mut E::Elem {
        let IndexedStepperMut { expression, cursor } = self;
        expression.element_mut(&cursor.index)
    }
}
