//! # Common Types and Traits
use core::{
    fmt::{Debug, Display},
    hash::Hash,
};

use ndarray::{Array2, Array3};
use num_traits::{FromPrimitive, PrimInt, ToPrimitive, Unsigned};

/// A type that can be used as a cell of an [`IndexTensor`].
///
/// These are constrained to be unsigned primitive integers;
/// the alphabet size must fit in the type.
pub trait IndexType:
    'static
    + PrimInt
    + FromPrimitive
    + ToPrimitive
    + Unsigned
    + Hash
    + Default
    + Debug
    + Display
    + Send
    + Sync
{
}

impl<T> IndexType for T where
    T: 'static
        + PrimInt
        + FromPrimitive
        + ToPrimitive
        + Unsigned
        + Hash
        + Default
        + Debug
        + Display
        + Send
        + Sync
{
}

/// Per-position alphabet indices, shape ``(max_len, batch_size)``.
///
/// Column ``j`` holds the indices of the ``j``-th padded string.
pub type IndexTensor<T> = Array2<T>;

/// Per-position categorical distribution, shape ``(max_len, batch_size, alphabet_size)``.
pub type ProbTensor = Array3<f32>;

/// One-hot encoding, shape ``(max_len, batch_size, alphabet_size)``.
pub type OneHotTensor = Array3<f32>;

cfg_if::cfg_if! {
    if #[cfg(feature = "ahash")] {
        /// Type Alias for hash maps in this crate.
        pub type PCHashMap<K, V> = ahash::AHashMap<K, V>;

        /// Create a new hash map with the given capacity.
        pub fn hash_map_with_capacity<K, V>(capacity: usize) -> PCHashMap<K, V> {
            PCHashMap::with_capacity(capacity)
        }

    } else {
        /// Type Alias for hash maps in this crate.
        pub type PCHashMap<K, V> = std::collections::HashMap<K, V>;

        /// Create a new hash map with the given capacity.
        pub fn hash_map_with_capacity<K, V>(capacity: usize) -> PCHashMap<K, V> {
            PCHashMap::with_capacity(capacity)
        }
    }
}

/// Static check that a type is `Send` and `Sync`.
pub fn static_is_send_sync_check<S: Send + Sync>(_: &S) {}
