//! This crate provides an ordered collection type with a functional query and transform API, in the
//! style of the list types found in Kotlin or Scala, layered over a plain boxed slice.
//!
//! # Purpose
//! A bare slice answers "what is at index `i`" by panicking or returning an [`Option`], and leaves
//! everything else to iterator chains. [`Collection`] instead offers a fixed, chainable surface
//! (`contains`, `element_at`, `find`, `filter`, `map`, `first`, `last`, `for_each` and friends)
//! where every operation has a single, documented answer to the question "what happens when the
//! element isn't there?".
//!
//! # Method
//! The surface is defined by the [`OrderedCollection`] trait, and [`Collection`] is its only
//! implementation. Collections never change after construction: `filter` and `map` build new,
//! independent collections, and nothing else allocates.
//!
//! # Error Handling
//! Absence is the normal case for most lookups, so most of them return [`Option`]s. Only two
//! conditions are treated as errors, each with its own type:
//! - [`IndexOutOfBounds`], from [`element_at`](OrderedCollection::element_at) when the index
//!   doesn't address an element.
//! - [`NoSuchElement`], from [`first`](OrderedCollection::first) and
//!   [`last`](OrderedCollection::last) on an empty collection.
//!
//! Both are strongly typed structs that implement [`Error`](std::error::Error), and can be combined
//! through [`CollectionError`] when a caller wants to propagate either with `?`. For the cases where
//! a panic is more ergonomic, [`Collection::get`] and the [`Index`](std::ops::Index) operator panic
//! with the same message that [`IndexOutOfBounds`] displays.
//!
//! Panics raised inside closures passed to `find`, `filter`, `map` or `for_each` are never caught.
//!
//! # Dependencies
//! This crate depends on `derive_more` for its error types, because the derives remove the need for
//! some very repetitive programming.
//!
//! # Examples
//! ```
//! use ordered_collection::{collection, NoSuchElement, OrderedCollection};
//!
//! let numbers = collection![5, 3, 5, 8];
//! assert_eq!(numbers.index_of(&5), Some(0));
//! assert!(numbers.contains(&3));
//! assert_eq!(numbers.map(|x| x * 2).as_slice(), &[10, 6, 10, 16]);
//!
//! let empty = numbers.filter(|x| *x > 100);
//! assert_eq!(empty.first(), Err(NoSuchElement));
//! assert_eq!(empty.first_or_none(), None);
//! ```

#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]

pub mod collections;

pub(crate) mod util;

#[doc(inline)]
pub use collections::ordered::{Collection, CollectionError, IndexOutOfBounds, NoSuchElement};
#[doc(inline)]
pub use collections::traits::OrderedCollection;
