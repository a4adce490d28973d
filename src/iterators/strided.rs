//! Steppers over strided storage
//!
//! A strided stepper keeps one cursor into the linear storage of a
//! [`StridedContainer`]. Stepping along a dimension adds that dimension's
//! stride, resetting it subtracts its backstride, so every move is O(1)
//! whatever the rank.

use duplicate::duplicate;

use crate::structure::concrete_index::FlatIndex;

use super::traits::{ReadStepper, Stepper, StridedContainer, StridedContainerMut, WriteStepper};

/// Read-only stepper over a [`StridedContainer`]
///
/// Copies are independent positions over the same container.
#[derive(Debug)]
pub struct StridedStepper<'a, C> {
    container: &'a C,
    cursor: usize,
    offset: usize,
}

/// Stepper handing out mutable access to the elements of a [`StridedContainerMut`]
#[derive(Debug)]
pub struct StridedStepperMut<'a, C> {
    container: &'a mut C,
    cursor: usize,
    offset: usize,
}

impl<C> Clone for StridedStepper<'_, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C> Copy for StridedStepper<'_, C> {}

duplicate! {
    [
        stepper     container_ref;
        [StridedStepper]    [&'a C];
        [StridedStepperMut] [&'a mut C]
    ]
    impl<'a, C: StridedContainer> stepper<'a, C> {
        /// A stepper at `cursor`, skipping the first `offset` traversal dimensions
        pub fn new(container: container_ref, cursor: usize, offset: usize) -> Self {
            stepper {
                container,
                cursor,
                offset,
            }
        }

        /// A stepper at the first element of the container
        pub fn begin(container: container_ref, offset: usize) -> Self {
            let cursor = container.begin_cursor();
            Self::new(container, cursor, offset)
        }

        /// A stepper at the end of the container
        pub fn end(container: container_ref, offset: usize) -> Self {
            let cursor = container.end_cursor();
            Self::new(container, cursor, offset)
        }

        pub fn cursor(&self) -> FlatIndex {
            self.cursor.into()
        }

        pub fn offset(&self) -> usize {
            self.offset
        }
    }

    impl<C: StridedContainer> Stepper for stepper<'_, C> {
        #[inline]
        fn step(&mut self, dim: usize, n: usize) {
            if dim >= self.offset {
                self.cursor += n * self.container.strides()[dim - self.offset];
                cursor_assert!(
                    self.cursor <= self.container.end_cursor(),
                    "cursor {} stepped past the end {} along dimension {dim}",
                    self.cursor,
                    self.container.end_cursor()
                );
            }
        }

        #[inline]
        fn step_back(&mut self, dim: usize, n: usize) {
            if dim >= self.offset {
                let distance = n * self.container.strides()[dim - self.offset];
                cursor_assert!(
                    distance <= self.cursor - self.container.begin_cursor(),
                    "cursor {} stepped back before the start along dimension {dim}",
                    self.cursor
                );
                self.cursor -= distance;
            }
        }

        #[inline]
        fn reset(&mut self, dim: usize) {
            if dim >= self.offset {
                let backstride = self.container.backstrides()[dim - self.offset];
                cursor_assert!(
                    backstride <= self.cursor - self.container.begin_cursor(),
                    "cursor {} reset before the start along dimension {dim}",
                    self.cursor
                );
                self.cursor -= backstride;
            }
        }

        #[inline]
        fn to_end(&mut self) {
            self.cursor = self.container.end_cursor();
        }
    }

    impl<C> PartialEq for stepper<'_, C> {
        fn eq(&self, other: &Self) -> bool {
            std::ptr::eq(&*self.container, &*other.container)
                && self.cursor == other.cursor
                && self.offset == other.offset
        }
    }

    impl<C> Eq for stepper<'_, C> {}
}

impl<'a, C: StridedContainer> ReadStepper for StridedStepper<'a, C> {
    type Item = &'a C::Elem;

    #[inline]
    fn current(&self) -> &'a C::Elem {
        let container: &'a C = self.container;
        &container.storage()[self.cursor]
    }
}

impl<C: StridedContainer> StridedStepperMut<'_, C> {
    /// Shared view of the current element
    pub fn get(&self) -> &C::Elem {
        &self.container.storage()[self.cursor]
    }
}

impl<C: StridedContainerMut> WriteStepper for StridedStepperMut<'_, C> {
    type Elem = C::Elem;

    #[inline]
    fn current_mut(&mut self) -> &mut C::Elem {
        let cursor = self.cursor;
        &mut self.container.storage_mut()[cursor]
    }
}
