//! Switches the pairwise loops between rayon and a plain sequential iterator
//! depending on the `rayon` cargo feature.

use cfg_if::*;

cfg_if! {
    if #[cfg(feature = "rayon")] {
        pub use rayon::prelude::*;

        /// `true` if pair computations are spread across the rayon thread pool
        pub const PARALLEL: bool = true;

        pub fn opt_par_iter<'a, T: Sync>(items: &'a [T]) -> rayon::slice::Iter<'a, T> {
            items.par_iter()
        }
    } else {
        pub const PARALLEL: bool = false;

        pub fn opt_par_iter<'a, T>(items: &'a [T]) -> std::slice::Iter<'a, T> {
            items.iter()
        }
    }
}
