//! The container abstraction every operation is written against.
//!
//! A [`Collection`] is an ordered or keyed container that is never mutated by this crate: it can
//! be counted, iterated as `(key, value)` entries, mapped into a same-shaped container with the
//! same keys, and handed to a function through [`Collection::update`]. The last one is what lets
//! configured operations sit inside a chain:
//!
//! ```rust
//! use immutable_math::collection::Collection;
//! use immutable_math::processing::{percent, sum};
//!
//! let shares = vec![1.0, 1.0, 2.0].update(percent());
//! assert_eq!(shares.update(sum()), 1.0);
//! ```

use std::collections::{BTreeMap, HashMap, VecDeque};
use std::hash::{BuildHasher, Hash};

use crate::types::{DataSet, Value};

/// Element types the base (selector-free) operations can read directly.
pub trait Numeric: Copy {
    /// Widen to `f64`.
    fn to_f64(self) -> f64;
}

macro_rules! impl_numeric {
    ($($t:ty),* $(,)?) => {
        $(
            impl Numeric for $t {
                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

impl_numeric!(f32, f64, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// Read-only ordered or keyed container.
///
/// Keys are the container's native key: the index for sequences, the map key for maps, the row
/// index for a [`DataSet`].
pub trait Collection {
    /// Native key type.
    type Key: Clone;
    /// Element type.
    type Value;
    /// The same container shape holding `U` under the same keys.
    type Mapped<U>: Collection<Key = Self::Key, Value = U>;

    /// Number of elements.
    fn count(&self) -> usize;

    /// Whether the container holds no elements.
    fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// Iterate `(key, value)` pairs in the container's native order.
    fn entries(&self) -> impl Iterator<Item = (Self::Key, &Self::Value)>;

    /// Iterate values in the container's native order.
    fn values(&self) -> impl Iterator<Item = &Self::Value> {
        self.entries().map(|(_, value)| value)
    }

    /// Build a new container by applying `mapper` to every `(value, key, self)`.
    ///
    /// Elements are visited in the same order as [`Collection::entries`].
    fn map<U, F>(&self, mapper: F) -> Self::Mapped<U>
    where
        F: FnMut(&Self::Value, &Self::Key, &Self) -> U;

    /// Hand the whole container to `f` and return whatever it produces.
    fn update<R, F>(&self, f: F) -> R
    where
        F: FnOnce(&Self) -> R,
    {
        f(self)
    }
}

impl<T> Collection for Vec<T> {
    type Key = usize;
    type Value = T;
    type Mapped<U> = Vec<U>;

    fn count(&self) -> usize {
        self.len()
    }

    fn entries(&self) -> impl Iterator<Item = (usize, &T)> {
        self.iter().enumerate()
    }

    fn map<U, F>(&self, mut mapper: F) -> Vec<U>
    where
        F: FnMut(&T, &usize, &Self) -> U,
    {
        self.iter()
            .enumerate()
            .map(|(idx, value)| mapper(value, &idx, self))
            .collect()
    }
}

impl<T> Collection for VecDeque<T> {
    type Key = usize;
    type Value = T;
    type Mapped<U> = VecDeque<U>;

    fn count(&self) -> usize {
        self.len()
    }

    fn entries(&self) -> impl Iterator<Item = (usize, &T)> {
        self.iter().enumerate()
    }

    fn map<U, F>(&self, mut mapper: F) -> VecDeque<U>
    where
        F: FnMut(&T, &usize, &Self) -> U,
    {
        self.iter()
            .enumerate()
            .map(|(idx, value)| mapper(value, &idx, self))
            .collect()
    }
}

impl<K, V> Collection for BTreeMap<K, V>
where
    K: Ord + Clone,
{
    type Key = K;
    type Value = V;
    type Mapped<U> = BTreeMap<K, U>;

    fn count(&self) -> usize {
        self.len()
    }

    fn entries(&self) -> impl Iterator<Item = (K, &V)> {
        self.iter().map(|(key, value)| (key.clone(), value))
    }

    fn map<U, F>(&self, mut mapper: F) -> BTreeMap<K, U>
    where
        F: FnMut(&V, &K, &Self) -> U,
    {
        self.iter()
            .map(|(key, value)| (key.clone(), mapper(value, key, self)))
            .collect()
    }
}

impl<K, V, S> Collection for HashMap<K, V, S>
where
    K: Eq + Hash + Clone,
    S: BuildHasher + Default,
{
    type Key = K;
    type Value = V;
    type Mapped<U> = HashMap<K, U, S>;

    fn count(&self) -> usize {
        self.len()
    }

    fn entries(&self) -> impl Iterator<Item = (K, &V)> {
        self.iter().map(|(key, value)| (key.clone(), value))
    }

    fn map<U, F>(&self, mut mapper: F) -> HashMap<K, U, S>
    where
        F: FnMut(&V, &K, &Self) -> U,
    {
        self.iter()
            .map(|(key, value)| (key.clone(), mapper(value, key, self)))
            .collect()
    }
}

/// Rows are the elements; mapping yields one `U` per row in row order.
impl Collection for DataSet {
    type Key = usize;
    type Value = Vec<Value>;
    type Mapped<U> = Vec<U>;

    fn count(&self) -> usize {
        self.row_count()
    }

    fn entries(&self) -> impl Iterator<Item = (usize, &Vec<Value>)> {
        self.rows.iter().enumerate()
    }

    fn map<U, F>(&self, mut mapper: F) -> Vec<U>
    where
        F: FnMut(&Vec<Value>, &usize, &Self) -> U,
    {
        self.rows
            .iter()
            .enumerate()
            .map(|(idx, row)| mapper(row, &idx, self))
            .collect()
    }
}
