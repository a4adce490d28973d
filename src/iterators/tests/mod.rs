//! Tests for steppers, the odometer and the iterators built on them

mod traversal_tests;

use crate::tensors::DenseTensor;

pub(crate) fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A row major tensor holding `0..size` over `shape`
pub(crate) fn iota(shape: &[usize]) -> DenseTensor<usize> {
    let size: usize = shape.iter().product();
    DenseTensor::from_data((0..size).collect(), shape).unwrap()
}
