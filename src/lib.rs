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

//! String-keyed hash tables with interchangeable collision strategies.
//!
//! - [`ChainingTable`] keeps a chain of entries per bucket and never resizes.
//! - [`PerfectTable`] addresses a fixed array directly and is collision free
//!   over the statistic names in [`stats`].
//! - [`StepTable`] uses open addressing with double hashing, grows through a
//!   fixed sequence of prime sizes and repairs probe clusters on deletion.
//!
//! All three implement [`Table`], so callers can choose one at construction
//! time through [`TableKind`] and use it behind a `Box<dyn Table<V>>`.

pub mod chaining;
pub mod error;
pub mod hash;
pub mod perfect;
pub mod stats;
pub mod step;
pub mod table;

#[cfg(test)]
mod test_util;

pub use chaining::ChainingTable;
pub use error::{Error, Result};
pub use hash::{KeyHasher, PerfectHasher, RollingHash};
pub use perfect::PerfectTable;
pub use step::{StepTable, TABLE_SIZES};
pub use table::Table;

/// Selects a table implementation at construction time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableKind {
    /// Separate chaining; suits an open-ended key set.
    Chaining,
    /// Direct addressing; only for keys from a known perfect-hash domain.
    Perfect,
    /// Double-hashed open addressing; suits an open-ended key set.
    Step,
}

impl TableKind {
    pub const ALL: [TableKind; 3] = [TableKind::Chaining, TableKind::Perfect, TableKind::Step];

    /// Creates an empty table of this kind with its default configuration.
    pub fn build<V: 'static>(self) -> Box<dyn Table<V>> {
        match self {
            TableKind::Chaining => Box::new(ChainingTable::new()),
            TableKind::Perfect => Box::new(PerfectTable::new()),
            TableKind::Step => Box::new(StepTable::new()),
        }
    }
}
