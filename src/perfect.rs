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

//! A direct-addressed table for a small, closed set of keys.

use std::{fmt, mem};

use log::warn;

use crate::{
    error::{Error, Result},
    hash::{KeyHasher, PerfectHasher, PERFECT_TABLE_SIZE},
    table::Table,
};

/// A table with [`PERFECT_TABLE_SIZE`] slots whose hasher maps every key of a
/// known domain to a distinct slot.
///
/// There is no probing and no growth: every operation hashes the key once and
/// touches exactly one slot. The default [`PerfectHasher`] is perfect over the
/// names in [`PlayerStat`] and [`TeamStat`].
///
/// Keys outside the domain may share a slot with a domain key. Lookups compare
/// the stored key and report [`Error::NotFound`] on a mismatch, but a `set`
/// of such a key replaces whatever occupies its slot.
///
/// [`PlayerStat`]: crate::stats::PlayerStat
/// [`TeamStat`]: crate::stats::TeamStat
pub struct PerfectTable<V, H: KeyHasher = PerfectHasher> {
    slots: Box<[Option<(String, V)>]>,
    len: usize,
    hasher: H,
}

impl<V> PerfectTable<V, PerfectHasher> {
    pub fn new() -> Self {
        Self::with_hasher(PerfectHasher::default())
    }
}

impl<V> Default for PerfectTable<V, PerfectHasher> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V, H: KeyHasher> PerfectTable<V, H> {
    pub fn with_hasher(hasher: H) -> Self {
        let slots = (0..PERFECT_TABLE_SIZE)
            .map(|_| None)
            .collect::<Vec<_>>()
            .into_boxed_slice();

        Self {
            slots,
            len: 0,
            hasher,
        }
    }

    /// Returns the slot `key` is stored in.
    pub fn slot_of(&self, key: &str) -> usize {
        self.hasher.hash(key, self.slots.len())
    }

    /// Entries in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> + '_ {
        self.slots
            .iter()
            .flatten()
            .map(|(key, value)| (key.as_str(), value))
    }
}

impl<V, H: KeyHasher> Table<V> for PerfectTable<V, H> {
    fn set(&mut self, key: String, value: V) -> Result<Option<V>> {
        let index = self.slot_of(&key);
        let slot = &mut self.slots[index];

        match slot {
            Some((existing_key, existing)) if *existing_key == key => {
                return Ok(Some(mem::replace(existing, value)));
            }
            Some((existing_key, _)) => warn!(
                "{:?} displaced {:?} from perfect table slot {}",
                key, existing_key, index
            ),
            None => self.len += 1,
        }

        *slot = Some((key, value));

        Ok(None)
    }

    fn get(&self, key: &str) -> Result<&V> {
        match &self.slots[self.slot_of(key)] {
            Some((k, value)) if k == key => Ok(value),
            _ => Err(Error::NotFound(key.to_owned())),
        }
    }

    fn get_mut(&mut self, key: &str) -> Result<&mut V> {
        let index = self.slot_of(key);

        match &mut self.slots[index] {
            Some((k, value)) if k == key => Ok(value),
            _ => Err(Error::NotFound(key.to_owned())),
        }
    }

    fn delete(&mut self, key: &str) -> Result<V> {
        let index = self.slot_of(key);

        match self.slots[index].take() {
            Some((k, value)) if k == key => {
                self.len -= 1;

                Ok(value)
            }
            other => {
                self.slots[index] = other;

                Err(Error::NotFound(key.to_owned()))
            }
        }
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

impl<V: fmt::Display, H: KeyHasher> fmt::Display for PerfectTable<V, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (key, value) in self.iter() {
            writeln!(f, "({},{})", key, value)?;
        }

        Ok(())
    }
}

impl<V: fmt::Debug, H: KeyHasher> fmt::Debug for PerfectTable<V, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::{
        stats::{PlayerStat, TeamStat},
        test_util::{init_logger, noisy},
    };

    #[test]
    fn player_stats_fill_distinct_slots() {
        let mut table = PerfectTable::new();

        for (i, stat) in PlayerStat::ALL.iter().enumerate() {
            assert_eq!(table.set(stat.to_string(), i), Ok(None));
            assert_eq!(table.get(stat.as_str()), Ok(&i));
        }

        assert_eq!(table.len(), PlayerStat::ALL.len());

        for (i, stat) in PlayerStat::ALL.iter().enumerate() {
            assert_eq!(table.get(stat.as_str()), Ok(&i));
        }
    }

    #[test]
    fn team_stats_fill_distinct_slots() {
        let mut table = PerfectTable::new();

        for (i, stat) in TeamStat::ALL.iter().enumerate() {
            assert_eq!(table.set(stat.to_string(), i), Ok(None));
        }

        assert_eq!(table.len(), TeamStat::ALL.len());

        for (i, stat) in TeamStat::ALL.iter().enumerate() {
            assert_eq!(table.get(stat.as_str()), Ok(&i));
        }
    }

    #[test]
    fn goals_scenario() {
        let mut table = PerfectTable::new();

        table.set("Games Played".to_string(), 0).unwrap();
        table.set("Goals".to_string(), 1).unwrap();
        table.set("Assists".to_string(), 2).unwrap();

        assert_eq!(table.get("Goals"), Ok(&1));
        assert_eq!(table.delete("Goals"), Ok(1));
        assert_eq!(table.get("Goals"), Err(Error::NotFound("Goals".to_string())));
        assert!(!table.contains("Goals"));
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn unknown_keys_are_not_found() {
        let table: PerfectTable<i32> = PerfectTable::new();

        for key in ["A", "B", "C"] {
            assert_eq!(table.get(key), Err(Error::NotFound(key.to_string())));
        }
    }

    #[test]
    fn lookup_checks_stored_key() {
        let mut table = PerfectTable::new();

        // "C" hashes to the same slot as "Interceptions"
        assert_eq!(table.slot_of("C"), table.slot_of("Interceptions"));

        table.set("Interceptions".to_string(), 4).unwrap();

        assert_eq!(table.get("C"), Err(Error::NotFound("C".to_string())));
        assert_eq!(table.delete("C"), Err(Error::NotFound("C".to_string())));
        assert_eq!(table.get("Interceptions"), Ok(&4));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn displacing_set_keeps_length() {
        init_logger();

        let mut table = PerfectTable::new();

        table.set("Interceptions".to_string(), 4).unwrap();
        assert_eq!(table.set("C".to_string(), 5), Ok(None));

        assert_eq!(table.len(), 1);
        assert_eq!(table.get("C"), Ok(&5));
        assert!(!table.contains("Interceptions"));
    }

    #[test]
    fn delete_every_stat() {
        let mut table = PerfectTable::new();

        for (i, stat) in PlayerStat::ALL.iter().enumerate() {
            table.set(stat.to_string(), i).unwrap();
        }

        for (i, stat) in PlayerStat::ALL.iter().enumerate() {
            assert_eq!(table.delete(stat.as_str()), Ok(i));
            assert!(table.get(stat.as_str()).is_err());
            assert_eq!(table.len(), PlayerStat::ALL.len() - i - 1);
        }

        assert_eq!(
            table.delete("Goals"),
            Err(Error::NotFound("Goals".to_string()))
        );
    }

    #[test]
    fn keys_in_slot_order() {
        let mut table = PerfectTable::new();

        table.set("Height".to_string(), 11).unwrap();
        table.set("Goals".to_string(), 6).unwrap();
        table.set("Games Played".to_string(), 0).unwrap();
        table.set("Weak Foot Ability".to_string(), 2).unwrap();

        assert_eq!(
            table.keys(),
            vec!["Games Played", "Weak Foot Ability", "Goals", "Height"]
        );
        assert_eq!(table.values(), vec![&0, &2, &6, &11]);
        assert_eq!(
            table.to_string(),
            "(Games Played,0)\n(Weak Foot Ability,2)\n(Goals,6)\n(Height,11)\n"
        );
    }

    #[test]
    fn update_in_place() {
        let mut table = PerfectTable::new();

        for stat in TeamStat::ALL {
            table.set(stat.to_string(), 0).unwrap();
        }

        *table.get_mut(TeamStat::Wins.as_str()).unwrap() += 1;
        *table.get_mut(TeamStat::Points.as_str()).unwrap() += 3;

        assert_eq!(table.get("Wins"), Ok(&1));
        assert_eq!(table.get("Points"), Ok(&3));
        assert_eq!(table.set("Wins".to_string(), 2), Ok(Some(1)));
        assert_eq!(table.len(), TeamStat::ALL.len());
        assert!(!table.is_full());
    }

    #[test]
    fn deleted_values_are_dropped_once() {
        let mut table = PerfectTable::new();
        let (notifier, value) = noisy("stat");

        table.set("Goals".to_string(), value).unwrap();
        assert!(!notifier.was_dropped());

        let removed = table.delete("Goals").unwrap();
        assert_eq!(*removed, "stat");
        drop(removed);

        assert!(notifier.was_dropped());
        assert!(table.is_empty());
    }
}
