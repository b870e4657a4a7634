//! A module containing [`Path`] and associated types.
//!
//! [`Path`] models a directory path as a plain string held in canonical form. [`Segments`]
//! provides lazy forwards and backwards iteration over a path's segments, while [`Cursor`]
//! walks them with the freedom to change direction and reports positions. Fallible operations
//! return the error types defined here, all of which are also combined in [`PathError`].
#![warn(missing_docs)]

mod display;
mod error;
mod iter;
mod normalize;
mod path;

pub use error::*;
pub use iter::*;
pub use path::*;
