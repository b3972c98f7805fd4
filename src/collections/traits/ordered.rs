use crate::util::error::{IndexOutOfBounds, NoSuchElement};

/// The read-only query and transform surface of an ordered collection: a finite sequence of `T`
/// that preserves insertion order, allows duplicates and never changes after construction.
///
/// Implementors only need to provide [`size`](OrderedCollection::size),
/// [`iter`](OrderedCollection::iter) and
/// [`element_at_or_none`](OrderedCollection::element_at_or_none); every other operation is
/// expressed in terms of those. Transformations build their results through [`FromIterator`], so
/// the returned collections never share storage with the receiver.
///
/// # Absence and errors
/// Misses (`find`, `index_of`, the `_or_none` accessors and `for_each`) are reported as [`None`].
/// Only two operations produce errors:
/// - [`element_at`](OrderedCollection::element_at), with [`IndexOutOfBounds`].
/// - [`first`](OrderedCollection::first) and [`last`](OrderedCollection::last), with
///   [`NoSuchElement`].
///
/// Panics raised by caller-provided closures are never caught and propagate to the caller of the
/// operation.
pub trait OrderedCollection<T>: FromIterator<T> + IntoIterator<Item = T> + Sized {
    /// A borrowed, in-order iterator over the collection's elements.
    type Iter<'a>: Iterator<Item = &'a T> where Self: 'a, T: 'a;

    /// The collection produced by mapping every element to an `R`.
    type Mapped<R>: OrderedCollection<R>;

    /// Returns the number of elements in the collection.
    fn size(&self) -> usize;

    /// Returns a borrowed iterator over all elements, in order.
    fn iter<'a>(&'a self) -> Self::Iter<'a>;

    /// Returns the element at `index`, or [`None`] if `index` doesn't address an element.
    fn element_at_or_none(&self, index: usize) -> Option<&T>;

    /// Returns true if the collection contains no elements.
    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Returns true if the collection contains at least one element.
    fn is_not_empty(&self) -> bool {
        !self.is_empty()
    }

    /// Returns true if any element is equal to `item`.
    fn contains(&self, item: &T) -> bool
    where
        T: PartialEq,
    {
        for element in self.iter() {
            if element == item {
                return true;
            }
        }
        false
    }

    /// Returns true if every one of `items` is contained in the collection.
    ///
    /// An empty collection always returns false, even when `items` is empty too. This differs from
    /// the vacuous truth returned by [`Iterator::all`] and is relied on by existing callers.
    fn contains_all(&self, items: &[T]) -> bool
    where
        T: PartialEq,
    {
        if self.is_empty() {
            return false;
        }

        for item in items {
            if !self.contains(item) {
                return false;
            }
        }
        true
    }

    /// Returns the element at `index`.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if the collection is empty or `index >= size`.
    fn element_at(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        self.element_at_or_none(index).ok_or(IndexOutOfBounds {
            index,
            len: self.size(),
        })
    }

    /// Returns the first element for which `predicate` returns true, scanning in order.
    fn find<F>(&self, mut predicate: F) -> Option<&T>
    where
        F: FnMut(&T) -> bool,
    {
        self.iter().find(|element| predicate(*element))
    }

    /// Creates a new collection holding clones of the elements for which `predicate` returns true,
    /// in their original order. The receiver is left untouched.
    fn filter<F>(&self, mut predicate: F) -> Self
    where
        T: Clone,
        F: FnMut(&T) -> bool,
    {
        self.iter()
            .filter(|element| predicate(*element))
            .cloned()
            .collect()
    }

    /// Consumes the collection, keeping only the elements for which `predicate` returns true.
    /// Elements are moved rather than cloned.
    fn into_filter<F>(self, mut predicate: F) -> Self
    where
        F: FnMut(&T) -> bool,
    {
        self.into_iter()
            .filter(|element| predicate(element))
            .collect()
    }

    /// Returns the first element.
    ///
    /// # Errors
    /// Returns [`NoSuchElement`] if the collection is empty.
    fn first(&self) -> Result<&T, NoSuchElement> {
        self.first_or_none().ok_or(NoSuchElement)
    }

    /// Returns the first element, or [`None`] if the collection is empty.
    fn first_or_none(&self) -> Option<&T> {
        self.element_at_or_none(0)
    }

    /// Returns the last element.
    ///
    /// # Errors
    /// Returns [`NoSuchElement`] if the collection is empty.
    fn last(&self) -> Result<&T, NoSuchElement> {
        self.last_or_none().ok_or(NoSuchElement)
    }

    /// Returns the last element, or [`None`] if the collection is empty.
    fn last_or_none(&self) -> Option<&T> {
        self.element_at_or_none(self.last_index()?)
    }

    /// Returns the index of the last element, or [`None`] if the collection is empty.
    fn last_index(&self) -> Option<usize> {
        self.size().checked_sub(1)
    }

    /// Calls `block` on each element in order, stopping at the first element for which it returns
    /// [`Some`] and returning that value.
    ///
    /// A closure that always returns [`None`] visits every element, so this serves both as plain
    /// iteration for side effects and as a combined search and map.
    fn for_each<R, F>(&self, mut block: F) -> Option<R>
    where
        F: FnMut(&T) -> Option<R>,
    {
        for element in self.iter() {
            if let Some(result) = block(element) {
                return Some(result);
            }
        }
        None
    }

    /// Returns the index of the first element equal to `item`, or [`None`] if there isn't one.
    fn index_of(&self, item: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        for (index, element) in self.iter().enumerate() {
            if element == item {
                return Some(index);
            }
        }
        None
    }

    /// Creates a new collection by applying `transform` to each element, in order. The result has
    /// the same size as the receiver.
    fn map<R, F>(&self, transform: F) -> Self::Mapped<R>
    where
        F: FnMut(&T) -> R,
    {
        self.iter().map(transform).collect()
    }

    /// Like [`map`](OrderedCollection::map), but for a fallible `transform`. The first [`Err`] is
    /// returned unchanged and no further elements are visited.
    ///
    /// # Errors
    /// Returns the first error produced by `transform`.
    fn try_map<R, E, F>(&self, transform: F) -> Result<Self::Mapped<R>, E>
    where
        F: FnMut(&T) -> Result<R, E>,
    {
        self.iter().map(transform).collect()
    }

    /// Consumes the collection, moving each element through `transform`.
    fn into_map<R, F>(self, transform: F) -> Self::Mapped<R>
    where
        F: FnMut(T) -> R,
    {
        self.into_iter().map(transform).collect()
    }
}
