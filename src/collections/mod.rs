//! Collection types and the traits that describe them.
//!
//! # Purpose
//! [`OrderedCollection`](traits::OrderedCollection) gives application code a richer alternative to
//! a bare slice: null-safe accessors, searching, filtering and mapping, with a consistent rule for
//! which operations fail and which report absence as [`None`].
//!
//! # Method
//! The contract lives in [`traits`] and is kept separate from the storage in [`ordered`], so that
//! another backing strategy can implement the same trait without callers changing.

pub mod ordered;
pub mod traits;

#[doc(inline)]
pub use ordered::Collection;
#[doc(inline)]
pub use traits::OrderedCollection;
