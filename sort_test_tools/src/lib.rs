//! Shared test support for the sort strategies: the [`Sort`] trait every strategy implements,
//! input patterns and generic test bodies instantiated per strategy by [`instantiate_sort_tests`].

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

#[doc(hidden)]
pub use paste;
