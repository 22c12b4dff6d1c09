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

use super::{ProbeLoopAction, ProbeLoopVacancy, Slot, StepTable};

use crate::{
    error::{Error, Result},
    hash::KeyHasher,
};

use log::trace;

impl<V, H: KeyHasher, S: KeyHasher> StepTable<V, H, S> {
    /// Removes `key`, then repairs the cluster behind it.
    ///
    /// The removed slot becomes a tombstone. Every live entry further along
    /// the removed key's probe sequence, up to the first null slot, is taken
    /// out and reinserted, which lets it settle into the freed slot or an
    /// earlier tombstone on its own sequence. Vacated slots stay tombstones, so
    /// no key that probes through them becomes unreachable.
    ///
    /// Once tombstones make up more than a third of the slots the table is
    /// rebuilt at the same capacity.
    pub(super) fn remove(&mut self, key: &str) -> Result<V> {
        let mut found = None;
        let mut cluster = Vec::new();

        self.probe_loop(key, |index, slot| match (found, slot) {
            (_, Slot::Null) => ProbeLoopAction::Return(()),
            (None, Slot::Filled(this_key, _)) if this_key == key => {
                found = Some(index);

                ProbeLoopAction::Continue
            }
            (Some(_), Slot::Filled(_, _)) => {
                cluster.push(index);

                ProbeLoopAction::Continue
            }
            (_, Slot::Filled(_, _)) | (_, Slot::Tombstone) => ProbeLoopAction::Continue,
        });

        let index = found.ok_or_else(|| Error::NotFound(key.to_owned()))?;
        let (_, value) = self
            .vacate(index)
            .ok_or_else(|| Error::NotFound(key.to_owned()))?;

        trace!(
            "removed {:?} from slot {}; reinserting {} clustered entries",
            key,
            index,
            cluster.len()
        );

        for clustered_index in cluster {
            self.resettle(clustered_index);
        }

        if self.tombstones * 3 > self.slots.len() {
            self.rebuild();
        }

        Ok(value)
    }

    fn vacate(&mut self, index: usize) -> Option<(String, V)> {
        let entry = self.slots[index].to_tombstone()?;
        self.len -= 1;
        self.tombstones += 1;

        Some(entry)
    }

    /// Reinserts the entry at `index` through the normal insert probe. Its
    /// own slot is a tombstone on its probe sequence by then, so the entry can
    /// only move toward the start of the sequence.
    fn resettle(&mut self, index: usize) {
        let Some((key, value)) = self.vacate(index) else {
            return;
        };

        let target = match self.probe_for_insert(&key) {
            Ok(ProbeLoopVacancy::Vacant(target)) => target,
            Ok(ProbeLoopVacancy::Occupied(_)) | Err(_) => index,
        };

        self.fill(target, key, value);
    }
}
