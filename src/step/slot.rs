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

use std::mem;

#[derive(Debug)]
pub(crate) enum Slot<V> {
    Null, // never held an entry since the last rehash; ends lookups
    Filled(String, V),
    Tombstone, // held an entry that was removed; lookups probe past it
}

impl<V> Default for Slot<V> {
    fn default() -> Self {
        Slot::Null
    }
}

impl<V> Slot<V> {
    pub(crate) fn is_tombstone(&self) -> bool {
        matches!(self, Slot::Tombstone)
    }

    pub(crate) fn entry(&self) -> Option<(&str, &V)> {
        match self {
            Slot::Filled(key, value) => Some((key.as_str(), value)),
            Slot::Null | Slot::Tombstone => None,
        }
    }

    pub(crate) fn value_mut(&mut self) -> Option<&mut V> {
        match self {
            Slot::Filled(_, value) => Some(value),
            Slot::Null | Slot::Tombstone => None,
        }
    }

    pub(crate) fn with_value(&mut self, value: V) -> Option<V> {
        self.value_mut()
            .map(|existing| mem::replace(existing, value))
    }

    /// Moves the entry out, leaving a tombstone behind.
    pub(crate) fn to_tombstone(&mut self) -> Option<(String, V)> {
        match mem::replace(self, Slot::Tombstone) {
            Slot::Filled(key, value) => Some((key, value)),
            other => {
                *self = other;

                None
            }
        }
    }
}

pub(crate) fn empty_slots<V>(capacity: usize) -> Box<[Slot<V>]> {
    (0..capacity).map(|_| Slot::Null).collect()
}
