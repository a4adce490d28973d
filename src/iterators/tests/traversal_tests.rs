//! Tests for full traversals, read-only and mutable

use gat_lending_iterator::LendingIterator;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoroshiro64Star;

use super::{init_logging, iota};
use crate::iterators::{
    IndexedExpression, IndexedExpressionMut, StridedContainer, StridedContainerMut,
    StridedStepper, Traversal,
};
use crate::structure::{OwnedShape, Shape, ShapeError, SharedShape};
use crate::tensors::{DenseTensor, IndexFn};

#[test]
fn collects_in_row_major_order() -> anyhow::Result<()> {
    init_logging();
    let tensor = iota(&[2, 3]);
    let traversal = tensor.traverse(OwnedShape::from([2, 3]))?;
    assert_eq!(traversal.len(), 6);
    let values: Vec<usize> = traversal.copied().collect();
    assert_eq!(values, [0, 1, 2, 3, 4, 5]);
    Ok(())
}

#[test]
fn broadcasts_over_missing_leading_dimensions() -> anyhow::Result<()> {
    init_logging();
    let row = DenseTensor::from_data(vec![1, 2, 3], [3])?;
    let values: Vec<i32> = row.traverse(OwnedShape::from([2, 2, 3]))?.copied().collect();
    assert_eq!(values, [1, 2, 3, 1, 2, 3, 1, 2, 3, 1, 2, 3]);

    let scalar = DenseTensor::scalar(7);
    let values: Vec<i32> = scalar.traverse(OwnedShape::from([2, 2]))?.copied().collect();
    assert_eq!(values, [7; 4]);
    Ok(())
}

#[test]
fn rejects_a_shape_of_lower_rank() {
    let tensor = iota(&[2, 3]);
    assert_eq!(
        tensor.traverse(OwnedShape::from([3])).err(),
        Some(ShapeError::RankTooLarge { own: 2, target: 1 })
    );
    assert_eq!(
        tensor.traverse_indexed(OwnedShape::from([3])).err(),
        Some(ShapeError::RankTooLarge { own: 2, target: 1 })
    );
}

#[test]
fn empty_extent_yields_nothing() -> anyhow::Result<()> {
    init_logging();
    let empty = iota(&[0, 3]);
    let mut strided = empty.traverse(OwnedShape::from([0, 3]))?;
    assert_eq!(strided.len(), 0);
    assert_eq!(strided.next(), None);
    assert_eq!(strided.next(), None);

    let expr = IndexFn::new([0, 3], |index: &[usize]| index[1]);
    assert_eq!(expr.traverse_indexed(OwnedShape::from([0, 3]))?.count(), 0);

    let row = iota(&[3]);
    assert_eq!(row.traverse(OwnedShape::from([4, 0, 3]))?.count(), 0);
    Ok(())
}

#[test]
fn indexed_traversal_agrees_with_strided() -> anyhow::Result<()> {
    let tensor = iota(&[2, 3]);
    let shape = [4, 2, 3];
    let strided: Vec<&usize> = tensor.traverse(SharedShape::new(&shape))?.collect();
    let indexed: Vec<&usize> = tensor.traverse_indexed(SharedShape::new(&shape))?.collect();
    assert_eq!(strided, indexed);
    assert_eq!(strided.len(), 24);
    Ok(())
}

#[test]
fn lazy_expression_is_evaluated_along_the_shape() -> anyhow::Result<()> {
    let expr = IndexFn::new([3, 2], |index: &[usize]| {
        index[0] as f64 - 0.5 * index[1] as f64
    });
    let values: Vec<f64> = expr.traverse_indexed(OwnedShape::from([2, 3, 2]))?.collect();
    let row = [0.0, -0.5, 1.0, 0.5, 2.0, 1.5];
    assert_eq!(values[..6], row);
    assert_eq!(values[6..], row);
    Ok(())
}

#[test]
fn random_broadcasts_match_the_flat_reference() -> anyhow::Result<()> {
    init_logging();
    let mut rng = Xoroshiro64Star::seed_from_u64(19);

    for _ in 0..64 {
        let rank = rng.gen_range(0..=4);
        let shape: Vec<usize> = (0..rank).map(|_| rng.gen_range(1..=4)).collect();
        let own_rank = rng.gen_range(0..=rank);
        let tensor = iota(&shape[rank - own_rank..]);
        let size = tensor.size();

        let strided: Vec<usize> = tensor
            .traverse(SharedShape::new(&shape))?
            .copied()
            .collect();
        let expected: Vec<usize> = (0..shape.iter().product::<usize>())
            .map(|position| position % size)
            .collect();
        assert_eq!(strided, expected, "shape {shape:?}, own rank {own_rank}");

        let own_shape = tensor.shape().to_vec();
        let lazy = IndexFn::new(own_shape.as_slice(), |index: &[usize]| {
            index
                .iter()
                .zip(tensor.strides())
                .map(|(i, s)| i * s)
                .sum::<usize>()
        });
        let indexed: Vec<usize> = lazy.traverse_indexed(SharedShape::new(&shape))?.collect();
        assert_eq!(indexed, expected, "shape {shape:?}, own rank {own_rank}");
    }
    Ok(())
}

#[test]
fn rank_zero_expression_yields_once_per_position() -> anyhow::Result<()> {
    init_logging();
    let seven = IndexFn::new(Shape::scalar(), |_: &[usize]| 7);

    let alone = seven.traverse_indexed(OwnedShape::from(Shape::scalar()))?;
    assert_eq!(alone.len(), 1);
    assert_eq!(alone.collect::<Vec<_>>(), [7]);

    let broadcast = seven.traverse_indexed(OwnedShape::from([2, 2]))?;
    assert_eq!(broadcast.len(), 4);
    assert_eq!(broadcast.collect::<Vec<_>>(), [7; 4]);

    let scalar = DenseTensor::scalar(7);
    let strided: Vec<i32> = scalar.traverse(OwnedShape::from([2, 2]))?.copied().collect();
    let indexed: Vec<i32> = scalar
        .traverse_indexed(OwnedShape::from([2, 2]))?
        .copied()
        .collect();
    assert_eq!(strided, indexed);
    Ok(())
}

#[test]
fn length_matches_the_items_yielded() -> anyhow::Result<()> {
    let tensor = iota(&[2, 3]);
    let mut traversal = tensor.traverse_indexed(OwnedShape::from([2, 2, 3]))?;
    let mut yielded = 0;
    while traversal.len() > 0 {
        assert!(traversal.next().is_some());
        yielded += 1;
    }
    assert_eq!(yielded, 12);
    assert_eq!(traversal.next(), None);
    Ok(())
}

#[test]
#[should_panic]
fn mismatched_trailing_extents_panic_while_walking() {
    let row = iota(&[3]);
    if let Ok(traversal) = row.traverse(OwnedShape::from([2, 2])) {
        let _ = traversal.count();
    }
}

#[test]
fn clones_resume_independently() -> anyhow::Result<()> {
    let tensor = iota(&[2, 2]);
    let mut first = tensor.traverse(OwnedShape::from([2, 2]))?;
    first.next();

    let second = first.clone();
    assert_eq!(first.front().index(), &[0, 1]);
    assert_eq!(first.copied().collect::<Vec<_>>(), [1, 2, 3]);
    assert_eq!(second.len(), 3);
    assert_eq!(second.copied().collect::<Vec<_>>(), [1, 2, 3]);
    Ok(())
}

#[test]
fn built_from_a_single_stepper() {
    let tensor = iota(&[3]);
    let shape = [2, 3];
    let traversal =
        Traversal::from_stepper(StridedStepper::begin(&tensor, 1), SharedShape::new(&shape));
    let values: Vec<usize> = traversal.copied().collect();
    assert_eq!(values, [0, 1, 2, 0, 1, 2]);
}

#[test]
fn mutable_traversal_writes_every_position() -> anyhow::Result<()> {
    init_logging();
    let mut tensor = DenseTensor::<u32>::zero([2, 3]);
    let mut traversal = tensor.traverse_mut(OwnedShape::from([2, 3]))?;
    assert_eq!(traversal.remaining(), 6);

    let mut next = 1;
    while let Some(element) = traversal.next() {
        *element = next;
        next += 1;
    }
    assert_eq!(traversal.remaining(), 0);
    assert!(traversal.next().is_none());
    assert_eq!(tensor.data(), &[1, 2, 3, 4, 5, 6]);
    Ok(())
}

#[test]
fn broadcast_mutable_traversal_revisits_elements() -> anyhow::Result<()> {
    let mut row = DenseTensor::<u32>::zero([3]);
    let mut traversal = row.traverse_mut(OwnedShape::from([2, 3]))?;
    while let Some(element) = traversal.next() {
        *element += 1;
    }
    assert_eq!(row.data(), &[2, 2, 2]);
    Ok(())
}

#[test]
fn mutable_traversal_over_an_empty_extent_does_nothing() -> anyhow::Result<()> {
    let mut tensor = DenseTensor::<u32>::zero([2, 0]);
    let mut traversal = tensor.traverse_mut(OwnedShape::from([2, 0]))?;
    assert!(traversal.next().is_none());
    Ok(())
}

#[test]
fn indexed_mutable_traversal_writes_through_element_mut() -> anyhow::Result<()> {
    let mut tensor = DenseTensor::<i64>::zero([2, 2]);
    {
        let mut traversal = tensor.traverse_indexed_mut(OwnedShape::from([3, 2, 2]))?;
        while let Some(element) = traversal.next() {
            *element -= 1;
        }
    }
    assert_eq!(tensor.data(), &[-3; 4]);
    assert_eq!(
        tensor.traverse_indexed_mut(OwnedShape::from([2])).err(),
        Some(ShapeError::RankTooLarge { own: 2, target: 1 })
    );
    Ok(())
}
