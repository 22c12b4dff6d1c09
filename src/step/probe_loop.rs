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

use super::{Slot, StepTable};

use crate::{
    error::{Error, Result as TableResult},
    hash::KeyHasher,
};

pub(super) enum Action<T> {
    Continue,
    Return(T),
}

pub(super) enum Result<T> {
    LoopEnded,
    Returned(T),
}

/// Where a key would be written by an insert.
pub(super) enum Vacancy {
    Occupied(usize),
    Vacant(usize),
}

impl<V, H: KeyHasher, S: KeyHasher> StepTable<V, H, S> {
    /// Visits `key`'s probe sequence, `hash(key) + i * hash2(key)` for
    /// `i = 0, 1, ...`, until `f` returns or every slot has been visited once.
    pub(super) fn probe_loop<F: FnMut(usize, &Slot<V>) -> Action<T>, T>(
        &self,
        key: &str,
        mut f: F,
    ) -> Result<T> {
        let capacity = self.slots.len();
        let step = self.hash2(key);
        let mut index = self.hash(key);

        for _ in 0..capacity {
            match f(index, &self.slots[index]) {
                Action::Continue => (),
                Action::Return(t) => return Result::Returned(t),
            }

            index = (index + step) % capacity;
        }

        Result::LoopEnded
    }

    pub(super) fn find(&self, key: &str) -> Option<usize> {
        let loop_result = self.probe_loop(key, |index, slot| match slot {
            Slot::Null => Action::Return(None),
            Slot::Filled(this_key, _) if this_key == key => Action::Return(Some(index)),
            Slot::Filled(_, _) | Slot::Tombstone => Action::Continue,
        });

        match loop_result {
            Result::Returned(maybe_index) => maybe_index,
            Result::LoopEnded => None,
        }
    }

    /// Finds the slot holding `key`, or else the first tombstone or null slot
    /// on its probe sequence. Every slot before a null one is checked for the
    /// key first, so a key is never stored twice.
    pub(super) fn probe_for_insert(&self, key: &str) -> TableResult<Vacancy> {
        let mut first_tombstone = None;

        let loop_result = self.probe_loop(key, |index, slot| match slot {
            Slot::Filled(this_key, _) if this_key == key => {
                Action::Return(Vacancy::Occupied(index))
            }
            Slot::Filled(_, _) => Action::Continue,
            Slot::Tombstone => {
                first_tombstone.get_or_insert(index);

                Action::Continue
            }
            Slot::Null => Action::Return(Vacancy::Vacant(first_tombstone.unwrap_or(index))),
        });

        match loop_result {
            Result::Returned(vacancy) => Ok(vacancy),
            Result::LoopEnded => first_tombstone.map(Vacancy::Vacant).ok_or(Error::Full {
                capacity: self.slots.len(),
            }),
        }
    }
}
