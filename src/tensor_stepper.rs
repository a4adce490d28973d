/*!

Shape-driven traversal of tensors and tensor expressions.

Any array-like entity can be walked element by element along a traversal
shape, including shapes with more dimensions than the entity itself: the
entity is then broadcast over the leading dimensions it lacks.

Two kinds of entities are supported:
- [`StridedContainer`]s expose linear storage with strides and backstrides, and are walked by a
  [`StridedStepper`] moving a single storage cursor.
- [`IndexedExpression`]s only expose `element(index)`, and are walked by an [`IndexedStepper`]
  keeping a full index.

Both steppers are driven by the same multidimensional counter,
[`increment_stepper`], usually through a [`ShapedIterator`]. A [`Traversal`]
pairs a begin and an end iterator into a Rust [`Iterator`]; [`TraversalMut`]
is its writable, lending counterpart.

```
use tensor_stepper::{DenseTensor, OwnedShape, StridedContainer};

let row = DenseTensor::from_data(vec![1, 2, 3], [3]).unwrap();
let broadcast: Vec<i32> = row.traverse(OwnedShape::from([2, 3])).unwrap().copied().collect();
assert_eq!(broadcast, [1, 2, 3, 1, 2, 3]);
```

*/

pub mod iterators;
pub mod structure;
pub mod tensors;

pub use iterators::{
    increment_stepper, IndexedExpression, IndexedExpressionMut, IndexedStepper,
    IndexedStepperMut, ReadStepper, ShapedIterator, Stepper, StridedContainer,
    StridedContainerMut, StridedStepper, StridedStepperMut, Traversal, TraversalMut,
    WriteStepper,
};
pub use structure::{
    broadcast_offset, element_count, ConcreteIndex, ExpandedIndex, FlatIndex, OwnedShape, Shape,
    ShapeError, ShapeHolder, SharedShape,
};
pub use tensors::{DenseTensor, IndexFn};
