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

//! An open-addressing hash table with double hashing, growth through a fixed
//! sequence of prime sizes, and tombstone deletion with cluster repair.

mod probe_loop;
mod rehash;
mod remove;
mod slot;


use probe_loop::{Action as ProbeLoopAction, Vacancy as ProbeLoopVacancy};
use slot::Slot;

use std::fmt;

use crate::{
    error::{Error, Result},
    hash::{KeyHasher, RollingHash},
    table::Table,
};

/// Sizes a [`StepTable`] grows through by default. Each is prime, so every
/// step size in `[1, size)` visits every slot.
pub const TABLE_SIZES: [usize; 19] = [
    5, 13, 29, 53, 97, 193, 389, 769, 1543, 3079, 6151, 12289, 24593, 49157, 98317, 196613,
    393241, 786433, 1572869,
];

/// A string-keyed hash table using open addressing with double hashing.
///
/// A key's probe sequence starts at [`hash`](#method.hash) and advances by
/// [`hash2`](#method.hash2), which is never zero. Inserts reuse the first
/// tombstone on the sequence once the key is known to be absent; lookups skip
/// tombstones and stop at the first slot that has never been filled.
///
/// After an insert pushes the load factor above 2/3, every entry is rehashed
/// into the next size in the table's size sequence. Capacity never shrinks.
/// Once the last size is reached the table keeps accepting keys until no slot
/// is left, at which point [`set`](Table::set) fails with [`Error::Full`].
///
/// Iteration visits slots in index order.
pub struct StepTable<V, H: KeyHasher = RollingHash, S: KeyHasher = RollingHash> {
    slots: Box<[Slot<V>]>,
    sizes: Box<[usize]>,
    size_index: usize,
    len: usize,
    tombstones: usize,
    hasher: H,
    step_hasher: S,
}

impl<V> StepTable<V, RollingHash, RollingHash> {
    /// Creates an empty table that grows through [`TABLE_SIZES`].
    pub fn new() -> Self {
        Self::with_hashers(RollingHash::primary(), RollingHash::step())
    }

    /// Creates an empty table that grows through `sizes`.
    ///
    /// `sizes` must be non-empty, strictly ascending and contain only primes.
    pub fn with_sizes(sizes: impl Into<Vec<usize>>) -> Result<Self> {
        Self::with_sizes_and_hashers(sizes, RollingHash::primary(), RollingHash::step())
    }
}

impl<V> Default for StepTable<V, RollingHash, RollingHash> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V, H: KeyHasher, S: KeyHasher> StepTable<V, H, S> {
    /// Creates an empty table that grows through [`TABLE_SIZES`], hashing
    /// home slots with `hasher` and step sizes with `step_hasher`.
    pub fn with_hashers(hasher: H, step_hasher: S) -> Self {
        Self::from_parts(TABLE_SIZES.into(), hasher, step_hasher)
    }

    pub fn with_sizes_and_hashers(
        sizes: impl Into<Vec<usize>>,
        hasher: H,
        step_hasher: S,
    ) -> Result<Self> {
        let sizes = sizes.into();
        validate_sizes(&sizes)?;

        Ok(Self::from_parts(sizes.into_boxed_slice(), hasher, step_hasher))
    }

    fn from_parts(sizes: Box<[usize]>, hasher: H, step_hasher: S) -> Self {
        Self {
            slots: slot::empty_slots(sizes[0]),
            sizes,
            size_index: 0,
            len: 0,
            tombstones: 0,
            hasher,
            step_hasher,
        }
    }

    /// Returns the home slot of `key` at the current capacity.
    pub fn hash(&self, key: &str) -> usize {
        self.hasher.hash(key, self.slots.len()) % self.slots.len()
    }

    /// Returns the probe step of `key` at the current capacity, in
    /// `[1, capacity)`.
    pub fn hash2(&self, key: &str) -> usize {
        let modulus = self.slots.len() - 1;

        1 + self.step_hasher.hash(key, modulus) % modulus
    }

    /// Returns the size sequence this table grows through.
    pub fn sizes(&self) -> &[usize] {
        &self.sizes
    }

    /// Returns the number of slots currently marked as deleted.
    pub fn tombstones(&self) -> usize {
        self.tombstones
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> + '_ {
        self.slots.iter().filter_map(Slot::entry)
    }

    fn fill(&mut self, index: usize, key: String, value: V) {
        if self.slots[index].is_tombstone() {
            self.tombstones -= 1;
        }

        self.slots[index] = Slot::Filled(key, value);
        self.len += 1;
    }
}

impl<V, H: KeyHasher, S: KeyHasher> Table<V> for StepTable<V, H, S> {
    fn set(&mut self, key: String, value: V) -> Result<Option<V>> {
        match self.probe_for_insert(&key)? {
            ProbeLoopVacancy::Occupied(index) => Ok(self.slots[index].with_value(value)),
            ProbeLoopVacancy::Vacant(index) => {
                self.fill(index, key, value);
                self.grow_if_needed();

                Ok(None)
            }
        }
    }

    fn get(&self, key: &str) -> Result<&V> {
        self.find(key)
            .and_then(|index| self.slots[index].entry())
            .map(|(_, value)| value)
            .ok_or_else(|| Error::NotFound(key.to_owned()))
    }

    fn get_mut(&mut self, key: &str) -> Result<&mut V> {
        let not_found = || Error::NotFound(key.to_owned());
        let index = self.find(key).ok_or_else(not_found)?;

        self.slots[index].value_mut().ok_or_else(not_found)
    }

    fn delete(&mut self, key: &str) -> Result<V> {
        self.remove(key)
    }

    fn len(&self) -> usize {
        self.len
    }

    fn capacity(&self) -> usize {
        self.slots.len()
    }

    fn keys(&self) -> Vec<&str> {
        self.iter().map(|(key, _)| key).collect()
    }

    fn values(&self) -> Vec<&V> {
        self.iter().map(|(_, value)| value).collect()
    }
}

impl<V: fmt::Display, H: KeyHasher, S: KeyHasher> fmt::Display for StepTable<V, H, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (key, value) in self.iter() {
            writeln!(f, "({},{})", key, value)?;
        }

        Ok(())
    }
}

impl<V: fmt::Debug, H: KeyHasher, S: KeyHasher> fmt::Debug for StepTable<V, H, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

fn validate_sizes(sizes: &[usize]) -> Result<()> {
    if sizes.is_empty() {
        return Err(Error::InvalidSizes("no sizes given".to_string()));
    }

    if let Some(&size) = sizes.iter().find(|&&size| !is_prime(size)) {
        return Err(Error::InvalidSizes(format!("{} is not prime", size)));
    }

    if let Some(pair) = sizes.windows(2).find(|pair| pair[0] >= pair[1]) {
        return Err(Error::InvalidSizes(format!(
            "{} is not larger than {}",
            pair[1], pair[0]
        )));
    }

    Ok(())
}

fn is_prime(n: usize) -> bool {
    n >= 2 && (2..).take_while(|&d| d <= n / d).all(|d| n % d != 0)
}
