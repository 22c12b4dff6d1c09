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

use thiserror::Error;

/// Failure outcomes shared by every table variant.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The key is not present in the table.
    #[error("key {0:?} not found")]
    NotFound(String),
    /// An open-addressing table found no usable slot for a new key. Tables
    /// grow before this can happen, so it is only reported once the largest
    /// configured size is exhausted.
    #[error("no free slot in table of capacity {capacity}")]
    Full { capacity: usize },
    /// A size sequence passed to a constructor was rejected.
    #[error("invalid table sizes: {0}")]
    InvalidSizes(String),
}

pub type Result<T> = std::result::Result<T, Error>;
