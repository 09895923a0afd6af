//! Hash states used by the `objkit` containers.
//!
//! - [`FixedHashState`]: `foldhash` with a constant seed, so that two runs
//!   of the same program hash (and iterate) identically.
//! - [`NoOpHashState`]: passes an already well-distributed `u64` through,
//!   used for `TypeId` keys.

use core::hash::{BuildHasher, Hasher};

use foldhash::fast::{FixedState, FoldHasher};

// -----------------------------------------------------------------------------
// FixedHasher

const OBJKIT_SEED: FixedState = FixedState::with_seed(0x6F62_6A6B_6974_2D31);

/// The hasher built by [`FixedHashState`].
pub type FixedHasher = FoldHasher<'static>;

/// Deterministic hash state over `foldhash`.
///
/// # Examples
///
/// ```
/// use core::hash::BuildHasher;
/// use objkit_utils::hash::FixedHashState;
///
/// let a = FixedHashState.hash_one("name");
/// let b = FixedHashState.hash_one("name");
/// assert_eq!(a, b);
/// ```
#[derive(Copy, Clone, Default, Debug)]
pub struct FixedHashState;

impl BuildHasher for FixedHashState {
    type Hasher = FixedHasher;

    #[inline(always)]
    fn build_hasher(&self) -> Self::Hasher {
        OBJKIT_SEED.build_hasher()
    }
}

// -----------------------------------------------------------------------------
// NoOpHasher

/// A hasher whose state is the last `u64` written to it.
///
/// `TypeId` hashes itself by writing a `u64` that is already a hash, so
/// running it through another hash function is wasted work.
#[derive(Copy, Clone, Default, Debug)]
pub struct NoOpHasher {
    hash: u64,
}

impl Hasher for NoOpHasher {
    #[inline]
    fn finish(&self) -> u64 {
        self.hash
    }

    fn write(&mut self, bytes: &[u8]) {
        // Fallback for keys that do not write a single `u64`.
        for byte in bytes {
            self.hash = self.hash.rotate_left(8) ^ u64::from(*byte);
        }
    }

    #[inline]
    fn write_u64(&mut self, i: u64) {
        self.hash = i;
    }
}

/// Builds [`NoOpHasher`]s.
///
/// # Examples
///
/// ```
/// use core::hash::{BuildHasher, Hasher};
/// use objkit_utils::hash::NoOpHashState;
///
/// let mut hasher = NoOpHashState.build_hasher();
/// hasher.write_u64(42);
/// assert_eq!(hasher.finish(), 42);
/// ```
#[derive(Copy, Clone, Default, Debug)]
pub struct NoOpHashState;

impl BuildHasher for NoOpHashState {
    type Hasher = NoOpHasher;

    #[inline(always)]
    fn build_hasher(&self) -> Self::Hasher {
        NoOpHasher { hash: 0 }
    }
}

#[cfg(test)]
mod tests {
    use core::hash::{BuildHasher, Hasher};

    use super::{FixedHashState, NoOpHashState};

    #[test]
    fn fixed_state_is_deterministic() {
        assert_eq!(
            FixedHashState.hash_one("age"),
            FixedHashState.hash_one("age")
        );
        assert_ne!(
            FixedHashState.hash_one("age"),
            FixedHashState.hash_one("name")
        );
    }

    #[test]
    fn noop_keeps_last_u64() {
        let mut hasher = NoOpHashState.build_hasher();
        hasher.write_u64(7);
        hasher.write_u64(9);
        assert_eq!(hasher.finish(), 9);
    }
}
