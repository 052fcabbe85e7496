//! A module containing [`Sequence`] and associated types.
//!
//! [`Sequence`] is an ordered collection offering the convenience methods of a JavaScript Array,
//! while [`Nested`] models values nested to an arbitrary depth so that they can be flattened with
//! [`Sequence::flat`]. Owned and borrowed iteration use the iterators of [`Vec`] and
//! [`slice`](std::slice), apart from [`Entries`] for index/element pairs.

mod error;
mod iter;
mod nested;
mod sequence;

pub use error::*;
pub use iter::*;
pub use nested::*;
pub use sequence::*;
