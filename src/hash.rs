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

//! Key hashing for the tables in this crate.
//!
//! Tables never cache hash values; every probe hashes the key again against
//! the table's current capacity, so a resize implicitly rehashes every key.

/// Maps a string key to an index in `[0, modulus)`.
///
/// Implementations must be deterministic for a fixed `key` and `modulus`.
/// Any `Fn(&str, usize) -> usize` closure is a `KeyHasher`, which makes it
/// easy to force collisions when testing probe sequences.
pub trait KeyHasher {
    fn hash(&self, key: &str, modulus: usize) -> usize;
}

impl<F: Fn(&str, usize) -> usize> KeyHasher for F {
    fn hash(&self, key: &str, modulus: usize) -> usize {
        self(key, modulus)
    }
}

/// Rolling multiplicative hash over the characters of a key.
///
/// The multiplier starts at `seed` and is advanced by `base` after every
/// character, so similar prefixes spread out rather than clustering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RollingHash {
    pub seed: u64,
    pub base: u64,
}

impl RollingHash {
    pub const fn new(seed: u64, base: u64) -> Self {
        Self { seed, base }
    }

    /// Parameters used to pick a key's home slot.
    pub const fn primary() -> Self {
        Self::new(31415, 31)
    }

    /// Independent parameters used to pick a key's probe step.
    pub const fn step() -> Self {
        Self::new(27183, 37)
    }
}

impl Default for RollingHash {
    fn default() -> Self {
        Self::primary()
    }
}

impl KeyHasher for RollingHash {
    fn hash(&self, key: &str, modulus: usize) -> usize {
        if modulus <= 1 {
            return 0;
        }

        let m = modulus as u128;
        let mut value: u128 = 0;
        let mut a = self.seed as u128;

        for c in key.chars() {
            value = (c as u128 + a * value) % m;
            a = a * self.base as u128 % (m - 1);
        }

        value as usize
    }
}

/// Slot count of a [`PerfectTable`](crate::PerfectTable).
pub const PERFECT_TABLE_SIZE: usize = 13;

/// Weighted byte hash that is collision free over the statistic names in
/// [`stats`](crate::stats) when taken modulo [`PERFECT_TABLE_SIZE`].
///
/// `(length_weight * len + first_weight * b[0] + last_weight * b[len - 1]
/// + second_weight * b[1]) mod modulus`, where missing bytes count as zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PerfectHasher {
    pub length_weight: usize,
    pub first_weight: usize,
    pub last_weight: usize,
    pub second_weight: usize,
}

impl Default for PerfectHasher {
    fn default() -> Self {
        Self {
            length_weight: 4,
            first_weight: 5,
            last_weight: 3,
            second_weight: 2,
        }
    }
}

impl KeyHasher for PerfectHasher {
    fn hash(&self, key: &str, modulus: usize) -> usize {
        if modulus <= 1 {
            return 0;
        }

        let bytes = key.as_bytes();
        let byte = |i: Option<usize>| i.and_then(|i| bytes.get(i)).map_or(0, |&b| b as usize);

        let sum = self.length_weight * bytes.len()
            + self.first_weight * byte(Some(0))
            + self.last_weight * byte(bytes.len().checked_sub(1))
            + self.second_weight * byte(Some(1));

        sum % modulus
    }
}
