//! A module containing [`Collection`], the fixed-size implementation of
//! [`OrderedCollection`](crate::collections::traits::OrderedCollection), and associated types.
//!
//! The only other included type is [`IntoIter`] for owned iteration over a Collection.
//! [`Iter`](std::slice::Iter) from [`std::slice`] is used for borrowed iteration.
//!
//! [`Collection`] is also re-exported under the parent module.

mod collection;
mod iter;

pub use collection::*;
pub use iter::*;

/// Creates a [`Collection`] containing the provided elements, in order.
///
/// # Examples
/// ```
/// # use ordered_collection::collection;
/// # use ordered_collection::collections::ordered::Collection;
/// # use ordered_collection::collections::traits::OrderedCollection;
/// let words = collection!["a", "b", "c"];
/// assert_eq!(words.size(), 3);
///
/// let empty: Collection<u8> = collection![];
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! collection {
    () => {
        $crate::collections::ordered::Collection::new()
    };
    ($($element:expr),+ $(,)?) => {
        $crate::collections::ordered::Collection::from([$($element),+])
    };
}
