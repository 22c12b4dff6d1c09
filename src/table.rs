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

use crate::error::Result;

/// The capability set shared by every string-keyed table in this crate.
///
/// Callers that only store and retrieve named values can hold a
/// `Box<dyn Table<V>>` and stay ignorant of the collision strategy behind it.
pub trait Table<V> {
    /// Associates `value` with `key`.
    ///
    /// If `key` was already present its value is replaced in place and the
    /// previous value is returned; the length is unchanged in that case.
    ///
    /// Only open-addressing tables can fail, with [`Error::Full`], once they
    /// have exhausted every configured size.
    ///
    /// [`Error::Full`]: crate::Error::Full
    fn set(&mut self, key: String, value: V) -> Result<Option<V>>;

    /// Returns a reference to the value associated with `key`, or
    /// [`Error::NotFound`](crate::Error::NotFound).
    fn get(&self, key: &str) -> Result<&V>;

    fn get_mut(&mut self, key: &str) -> Result<&mut V>;

    /// Removes `key` and returns its value, or
    /// [`Error::NotFound`](crate::Error::NotFound).
    fn delete(&mut self, key: &str) -> Result<V>;

    fn contains(&self, key: &str) -> bool {
        self.get(key).is_ok()
    }

    /// Returns the number of live entries.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of addressable slots or buckets.
    fn capacity(&self) -> usize;

    fn is_full(&self) -> bool {
        self.len() == self.capacity()
    }

    /// Returns every key. The order is defined by each implementation and is
    /// never key order.
    fn keys(&self) -> Vec<&str>;

    /// Returns every value, in the same order as [`keys`](Table::keys).
    fn values(&self) -> Vec<&V>;
}
