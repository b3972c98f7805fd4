use std::error::Error;
use std::fmt::{self, Display, Formatter};

use derive_more::{Display, Error, From, IsVariant, TryInto};

/// Returned when an index doesn't address an existing element of a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexOutOfBounds {
    pub index: usize,
    pub len: usize,
}

impl Display for IndexOutOfBounds {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.len == 0 {
            write!(f, "Empty collection does not contain element at index {}!", self.index)
        } else {
            write!(
                f,
                "Index {} out of bounds for collection with {} elements!",
                self.index, self.len
            )
        }
    }
}

impl Error for IndexOutOfBounds {}

/// Returned when the first or last element of an empty collection is requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("collection is empty")]
pub struct NoSuchElement;

/// Either of the errors produced by an ordered collection, for callers that want to propagate both
/// with `?`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From, TryInto, IsVariant)]
pub enum CollectionError {
    IndexOutOfBounds(IndexOutOfBounds),
    NoSuchElement(NoSuchElement),
}
