//! Traits describing the behaviour shared by collection types, independent of how their elements
//! are stored.

pub mod ordered;

#[doc(inline)]
pub use ordered::OrderedCollection;
