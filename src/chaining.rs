// MIT License
//
// Copyright (c) 2019 Gregory Meyer
//
// Permission is hereby granted, free of charge, to any person
// obtaining a copy of this software and associated documentation files
// (the "Software"), to deal in the Software without restriction,
// including without limitation the rights to use, copy, modify, merge,
// publish, distribute, sublicense, and/or sell copies of the Software,
// and to permit persons to whom the Software is furnished to do so,
// subject to the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS
// BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN
// ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN
// CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

//! A hash table that resolves collisions with separate chaining.


use std::{fmt, mem};

use crate::{
    error::{Error, Result},
    hash::{KeyHasher, RollingHash},
    table::Table,
};

/// Bucket count used by [`ChainingTable::new`].
pub const DEFAULT_TABLE_SIZE: usize = 17;

/// Smallest bucket count a `ChainingTable` will be created with.
pub const MIN_CAPACITY: usize = 1;

type Chain<V> = Vec<(String, V)>;

/// A string-keyed hash table with a fixed array of buckets, each holding a
/// chain of the entries that hash to it.
///
/// The bucket array never grows; chains absorb every collision, so the table
/// has no upper bound on the number of entries. Operations are `O(1)` expected
/// while chains stay short and `O(n)` if every key lands in one bucket.
///
/// Iteration visits buckets in index order and each chain in insertion order.
pub struct ChainingTable<V, H: KeyHasher = RollingHash> {
    buckets: Box<[Option<Chain<V>>]>,
    len: usize,
    hasher: H,
}

impl<V> ChainingTable<V, RollingHash> {
    /// Creates an empty table with [`DEFAULT_TABLE_SIZE`] buckets.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_TABLE_SIZE)
    }

    /// Creates an empty table with `capacity` buckets, or [`MIN_CAPACITY`] if
    /// that is larger.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, RollingHash::primary())
    }
}

impl<V> Default for ChainingTable<V, RollingHash> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V, H: KeyHasher> ChainingTable<V, H> {
    pub fn with_hasher(hasher: H) -> Self {
        Self::with_capacity_and_hasher(DEFAULT_TABLE_SIZE, hasher)
    }

    pub fn with_capacity_and_hasher(capacity: usize, hasher: H) -> Self {
        let buckets = (0..capacity.max(MIN_CAPACITY))
            .map(|_| None)
            .collect::<Vec<_>>()
            .into_boxed_slice();

        Self {
            buckets,
            len: 0,
            hasher,
        }
    }

    /// Returns the number of entries chained in `key`'s bucket.
    pub fn chain_len(&self, key: &str) -> usize {
        self.buckets[self.bucket_index(key)]
            .as_ref()
            .map_or(0, Vec::len)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> + '_ {
        self.buckets
            .iter()
            .flatten()
            .flat_map(|chain| chain.iter())
            .map(|(key, value)| (key.as_str(), value))
    }

    fn bucket_index(&self, key: &str) -> usize {
        self.hasher.hash(key, self.buckets.len())
    }
}

impl<V, H: KeyHasher> Table<V> for ChainingTable<V, H> {
    fn set(&mut self, key: String, value: V) -> Result<Option<V>> {
        let index = self.bucket_index(&key);
        let chain = self.buckets[index].get_or_insert_with(Vec::new);

        if let Some((_, existing)) = chain.iter_mut().find(|(k, _)| *k == key) {
            return Ok(Some(mem::replace(existing, value)));
        }

        chain.push((key, value));
        self.len += 1;

        Ok(None)
    }

    fn get(&self, key: &str) -> Result<&V> {
        self.buckets[self.bucket_index(key)]
            .as_ref()
            .and_then(|chain| chain.iter().find(|(k, _)| k == key))
            .map(|(_, value)| value)
            .ok_or_else(|| Error::NotFound(key.to_owned()))
    }

    fn get_mut(&mut self, key: &str) -> Result<&mut V> {
        let index = self.bucket_index(key);

        self.buckets[index]
            .as_mut()
            .and_then(|chain| chain.iter_mut().find(|(k, _)| k == key))
            .map(|(_, value)| value)
            .ok_or_else(|| Error::NotFound(key.to_owned()))
    }

    fn delete(&mut self, key: &str) -> Result<V> {
        let index = self.bucket_index(key);
        let not_found = || Error::NotFound(key.to_owned());

        let chain = self.buckets[index].as_mut().ok_or_else(not_found)?;
        let position = chain
            .iter()
            .position(|(k, _)| k == key)
            .ok_or_else(not_found)?;

        let (_, value) = chain.remove(position);

        if chain.is_empty() {
            self.buckets[index] = None;
        }

        self.len -= 1;

        Ok(value)
    }

    fn len(&self) -> usize {
        self.len
    }

    fn capacity(&self) -> usize {
        self.buckets.len()
    }

    fn keys(&self) -> Vec<&str> {
        self.iter().map(|(key, _)| key).collect()
    }

    fn values(&self) -> Vec<&V> {
        self.iter().map(|(_, value)| value).collect()
    }
}

impl<V: fmt::Display, H: KeyHasher> fmt::Display for ChainingTable<V, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for chain in self.buckets.iter().flatten() {
            for (i, (key, value)) in chain.iter().enumerate() {
                if i > 0 {
                    f.write_str(" -> ")?;
                }

                write!(f, "({},{})", key, value)?;
            }

            writeln!(f)?;
        }

        Ok(())
    }
}

impl<V: fmt::Debug, H: KeyHasher> fmt::Debug for ChainingTable<V, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
