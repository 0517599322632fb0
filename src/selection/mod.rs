//! In-place selection sort variants over `&mut [T]`.
//!
//! Both variants do the same number of comparisons and produce the same ascending order. They
//! differ only in how many swaps they perform, which is visible through `sort_with_swap_count`.

// Swap on every improving comparison. This is what `algo::sel_sort` uses.
pub mod swap_on_improve;

// At most one swap per outer iteration.
pub mod swap_once;
