//! Small teaching helpers: selection sort with min/max finders, and a palindrome check.
//!
//! - [`algo`] sorts and scans any `IntoIterator`, never touching the caller's collection.
//! - [`selection`] has the in-place sorts behind it, in two swap strategies.
//! - [`srel`] holds string relations, currently [`srel::is_palindrome`].
//!
//! None of this is meant to be fast. The sorts are quadratic by construction.

pub mod algo;
pub mod error;
pub mod selection;
pub mod srel;

pub use error::{Result, SequenceError};
