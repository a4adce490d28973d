//! Steppers and shape-driven iterators
//!
//! This module provides the traversal machinery, organized as:
//!
//! - `traits`: the stepper contract and the contracts a container or expression exposes to be walked
//! - `odometer`: the row major multidimensional counter shared by every traversal
//! - `strided`: steppers moving a single storage cursor using strides and backstrides
//! - `indexed`: steppers keeping an explicit index and calling `element` on dereference
//! - `shaped`: the iterator adaptor binding a stepper to a traversal shape
//! - `traversal`: begin/end pairs exposed as [`Iterator`] and [`LendingIterator`](gat_lending_iterator::LendingIterator)
//!
//! A stepper never knows the traversal shape. It only learns which dimension to
//! step or reset, and ignores dimensions below its rank-alignment offset: those
//! are the leading dimensions the walked entity lacks, along which its values
//! are broadcast.

macro_rules! cursor_assert {
    ($($arg:tt)*) => {
        if cfg!(any(debug_assertions, feature = "strict-bounds")) {
            assert!($($arg)*);
        }
    };
}

mod indexed;
mod odometer;
mod shaped;
mod strided;
mod traits;
mod traversal;

#[cfg(test)]
mod tests;

pub use indexed::{IndexedStepper, IndexedStepperMut};
pub use odometer::increment_stepper;
pub use shaped::ShapedIterator;
pub use strided::{StridedStepper, StridedStepperMut};
pub use traits::{
    IndexedExpression, IndexedExpressionMut, ReadStepper, Stepper, StridedContainer,
    StridedContainerMut, WriteStepper,
};
pub use traversal::{Traversal, TraversalMut};
