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

use super::{
    slot::{self, Slot},
    ProbeLoopVacancy, StepTable,
};

use crate::hash::KeyHasher;

use std::mem;

use log::{debug, warn};

impl<V, H: KeyHasher, S: KeyHasher> StepTable<V, H, S> {
    pub(super) fn exceeds_max_load(&self) -> bool {
        self.len * 3 > self.slots.len() * 2
    }

    /// Moves to the next configured size while the load factor is above 2/3.
    pub(super) fn grow_if_needed(&mut self) {
        while self.exceeds_max_load() {
            let next_index = self.size_index + 1;

            let Some(&next_capacity) = self.sizes.get(next_index) else {
                warn!(
                    "step table holds {} entries in {} slots and has no larger size to grow into",
                    self.len,
                    self.slots.len()
                );

                return;
            };

            self.size_index = next_index;
            self.rehash(next_capacity);
        }
    }

    /// Rehashes in place at the current capacity, clearing every tombstone.
    pub(super) fn rebuild(&mut self) {
        self.rehash(self.slots.len());
    }

    /// Reinserts every live entry, in old slot order, into a fresh array of
    /// `capacity` slots. Keys are hashed against the new capacity.
    fn rehash(&mut self, capacity: usize) {
        debug!(
            "rehashing step table from {} to {} slots ({} entries, {} tombstones)",
            self.slots.len(),
            capacity,
            self.len,
            self.tombstones
        );

        let old_slots = mem::replace(&mut self.slots, slot::empty_slots(capacity));
        self.len = 0;
        self.tombstones = 0;

        for old_slot in old_slots.into_vec() {
            if let Slot::Filled(key, value) = old_slot {
                match self.probe_for_insert(&key) {
                    Ok(ProbeLoopVacancy::Vacant(index)) => self.fill(index, key, value),
                    Ok(ProbeLoopVacancy::Occupied(_)) | Err(_) => {
                        unreachable!("rehash target has room for every live entry")
                    }
                }
            }
        }
    }
}
