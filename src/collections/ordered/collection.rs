use std::borrow::Borrow;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::ops::Index;
use std::slice;

use crate::collections::traits::OrderedCollection;
use crate::util::result::ResultExtension;

pub use crate::util::error::{CollectionError, IndexOutOfBounds, NoSuchElement};

/// An ordered, fixed-size collection backed by a boxed slice.
///
/// A Collection is built once, from a finite sequence of elements, and never changes afterwards.
/// All queries borrow it immutably and all transformations (see
/// [`filter`](OrderedCollection::filter) and [`map`](OrderedCollection::map)) allocate a new,
/// independent Collection. Most of its behaviour comes from the [`OrderedCollection`] trait, which
/// needs to be in scope.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the Collection.
/// - `m`: The number of items passed to `contains_all`.
///
/// | Method | Complexity |
/// |-|-|
/// | `size` | `O(1)` |
/// | `element_at` | `O(1)` |
/// | `first` / `last` | `O(1)` |
/// | `contains` | `O(n)` |
/// | `contains_all` | `O(n*m)` |
/// | `index_of` | `O(n)` |
/// | `find` | `O(n)` |
/// | `for_each` | `O(n)` |
/// | `filter` | `O(n)` |
/// | `map` | `O(n)` |
///
/// # Examples
/// ```
/// # use ordered_collection::collection;
/// # use ordered_collection::collections::traits::OrderedCollection;
/// let numbers = collection![1, 2, 3, 4];
/// let evens = numbers.filter(|x| x % 2 == 0);
/// assert_eq!(evens.as_slice(), &[2, 4]);
/// assert_eq!(numbers.size(), 4);
/// ```
pub struct Collection<T> {
    pub(crate) elements: Box<[T]>,
    pub(crate) size: usize,
}

impl<T> Collection<T> {
    /// Creates a new, empty Collection.
    ///
    /// # Examples
    /// ```
    /// # use ordered_collection::collections::ordered::Collection;
    /// # use ordered_collection::collections::traits::OrderedCollection;
    /// let empty: Collection<u8> = Collection::new();
    /// assert!(empty.is_empty());
    /// ```
    pub fn new() -> Collection<T> {
        Collection::from(Vec::new())
    }

    /// Returns the contents of the Collection as a slice.
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    /// Returns a reference to the element at the provided `index`, panicking on a failure.
    ///
    /// The same functionality can be achieved using the [`Index`] operator.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the Collection.
    pub fn get(&self, index: usize) -> &T {
        self.element_at(index).throw()
    }

    /// Converts the Collection back into a boxed slice of its elements.
    pub fn into_boxed_slice(self) -> Box<[T]> {
        self.elements
    }
}

impl<T> OrderedCollection<T> for Collection<T> {
    type Iter<'a> = slice::Iter<'a, T> where T: 'a;

    type Mapped<R> = Collection<R>;

    fn size(&self) -> usize {
        self.size
    }

    fn iter<'a>(&'a self) -> Self::Iter<'a> {
        self.elements.iter()
    }

    fn element_at_or_none(&self, index: usize) -> Option<&T> {
        self.elements.get(index)
    }
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Box<[T]>> for Collection<T> {
    fn from(elements: Box<[T]>) -> Self {
        Collection {
            size: elements.len(),
            elements,
        }
    }
}

impl<T> From<Vec<T>> for Collection<T> {
    fn from(elements: Vec<T>) -> Self {
        Collection::from(elements.into_boxed_slice())
    }
}

impl<T, const N: usize> From<[T; N]> for Collection<T> {
    /// Creates a Collection from an array, preserving the order of its elements.
    ///
    /// # Examples
    /// ```
    /// # use ordered_collection::collections::ordered::Collection;
    /// let chars = Collection::from(["a", "b", "c"]);
    /// assert_eq!(chars.as_slice(), &["a", "b", "c"]);
    /// ```
    fn from(elements: [T; N]) -> Self {
        Collection::from(Vec::from(elements))
    }
}

impl<T> FromIterator<T> for Collection<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Collection::from(iter.into_iter().collect::<Vec<T>>())
    }
}

impl<T> Index<usize> for Collection<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        self.get(index)
    }
}

impl<T> AsRef<[T]> for Collection<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> Borrow<[T]> for Collection<T> {
    fn borrow(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T: Clone> Clone for Collection<T> {
    fn clone(&self) -> Self {
        Collection::from(self.elements.clone())
    }
}

impl<T: PartialEq> PartialEq for Collection<T> {
    fn eq(&self, other: &Self) -> bool {
        self.elements == other.elements
    }
}

impl<T: Eq> Eq for Collection<T> {}

impl<T: Hash> Hash for Collection<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Must match the hash of [T] to uphold Borrow<[T]>.
        self.as_slice().hash(state);
    }
}

impl<T: Debug> Debug for Collection<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Collection")
            .field("contents", &self.as_slice())
            .field("size", &self.size)
            .finish()
    }
}

impl<T: Debug> Display for Collection<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
