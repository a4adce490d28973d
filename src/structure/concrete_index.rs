use std::ops::{Deref, DerefMut};

use bincode::Decode;
use bincode::Encode;
use derive_more::Add;
use derive_more::AddAssign;
use derive_more::Display;
use derive_more::From;
use derive_more::Index;
use derive_more::IndexMut;
use derive_more::Into;
use derive_more::IntoIterator;
use derive_more::Sub;
use derive_more::SubAssign;

use serde::{Deserialize, Serialize};

/// A concrete coordinate along a single dimension
pub type ConcreteIndex = usize;

/// A full multidimensional position, one coordinate per dimension, outermost first.
///
/// Steppers and iterators allocate one of these when they are built and only
/// ever mutate it in place afterwards.
#[derive(
    Debug,
    Clone,
    Default,
    Ord,
    PartialOrd,
    Eq,
    PartialEq,
    Hash,
    Index,
    IndexMut,
    Serialize,
    Deserialize,
    From,
    Into,
    Display,
    IntoIterator,
    Encode,
    Decode,
)]
#[display(fmt = "{:?}", indices)]
pub struct ExpandedIndex {
    indices: Vec<ConcreteIndex>,
}

impl ExpandedIndex {
    /// The origin of a rank `order` index space
    pub fn zeros(order: usize) -> Self {
        ExpandedIndex {
            indices: vec![0; order],
        }
    }

    /// Sets every coordinate back to zero without reallocating
    pub fn clear(&mut self) {
        self.indices.fill(0);
    }

    /// Overwrites the coordinates with `other`, which must have the same order
    pub fn assign(&mut self, other: &[ConcreteIndex]) {
        self.indices.copy_from_slice(other);
    }
}

impl AsRef<[ConcreteIndex]> for ExpandedIndex {
    fn as_ref(&self) -> &[ConcreteIndex] {
        &self.indices
    }
}

impl Deref for ExpandedIndex {
    type Target = [ConcreteIndex];

    fn deref(&self) -> &Self::Target {
        &self.indices
    }
}

impl DerefMut for ExpandedIndex {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.indices
    }
}

impl FromIterator<ConcreteIndex> for ExpandedIndex {
    fn from_iter<T: IntoIterator<Item = ConcreteIndex>>(iter: T) -> Self {
        ExpandedIndex {
            indices: iter.into_iter().collect(),
        }
    }
}

impl From<&[ConcreteIndex]> for ExpandedIndex {
    fn from(value: &[ConcreteIndex]) -> Self {
        ExpandedIndex {
            indices: value.to_vec(),
        }
    }
}

/// A position in the linear storage of a container
#[derive(
    Debug,
    Copy,
    Clone,
    Default,
    Ord,
    PartialOrd,
    Eq,
    PartialEq,
    Hash,
    Serialize,
    Deserialize,
    From,
    Into,
    Display,
    Add,
    AddAssign,
    Sub,
    SubAssign,
    Encode,
    Decode,
)]
#[display(fmt = "{}", index)]
pub struct FlatIndex {
    index: usize,
}
