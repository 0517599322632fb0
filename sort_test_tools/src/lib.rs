//! Test harness shared by every in-place sort of the crate.
//!
//! A sort gets wrapped in a type implementing [`Sort`] and handed to
//! [`instantiate_sort_tests!`], which generates one `#[test]` per function in [`tests`].

pub trait Sort {
    fn name() -> String;

    fn sort<T>(arr: &mut [T])
    where
        T: Ord;

    fn sort_by<T, F>(arr: &mut [T], compare: F)
    where
        F: FnMut(&T, &T) -> std::cmp::Ordering;
}

pub mod patterns;
