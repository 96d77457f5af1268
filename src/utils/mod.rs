//! Various unsorted geometrical and logical operators.

pub use self::sorted_pair::SortedPair;

/// A hash-set using [`hashbrown`]'s default hasher.
pub type HashSet<T> = hashbrown::HashSet<T>;

mod sorted_pair;
