//! The multidimensional counter driving every traversal

use super::traits::Stepper;

/// Advances `index` by one row major position within `shape`, mirroring the move on `stepper`.
///
/// Coordinates carry from the last dimension outwards like the digits of an
/// odometer whose digit `i` has base `shape[i]`. A dimension that wraps is
/// reset on the stepper instead of being walked back, and carrying past
/// dimension 0 moves the stepper to its end. Once that happens `index[0]`
/// equals `shape[0]`.
///
/// For a rank-0 shape the first increment ends the traversal, which models the
/// single element of a scalar.
///
/// `index` and `shape` must have the same length and `index` must be a valid
/// position of `shape`.
pub fn increment_stepper<S>(stepper: &mut S, index: &mut [usize], shape: &[usize])
where
    S: Stepper + ?Sized,
{
    debug_assert_eq!(
        index.len(),
        shape.len(),
        "index of order {} cannot walk a shape of order {}",
        index.len(),
        shape.len()
    );

    let mut i = index.len();
    while i != 0 {
        i -= 1;
        index[i] += 1;
        if index[i] != shape[i] {
            stepper.step(i, 1);
            return;
        } else if i != 0 {
            index[i] = 0;
            stepper.reset(i);
        }
    }
    stepper.to_end();
}
