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

use std::{
    ops::Deref,
    rc::Rc,
    sync::Once,
    cell::Cell,
};

use env_logger::Builder;
use log::LevelFilter;

static INIT: Once = Once::new();

pub(crate) fn init_logger() {
    INIT.call_once_force(|_| {
        let mut builder = Builder::new();

        builder
            .filter_level(LevelFilter::Warn)
            .filter_module("hashy", LevelFilter::Debug)
            .is_test(true)
            .parse_default_env();

        let _ = builder.try_init();
    });
}

/// A value that records when it is dropped and panics if dropped twice.
#[derive(Debug)]
pub(crate) struct NoisyDropper<T> {
    parent: Rc<DropNotifier>,
    pub elem: T,
}

impl<T> NoisyDropper<T> {
    pub(crate) fn new(parent: Rc<DropNotifier>, elem: T) -> Self {
        Self { parent, elem }
    }
}

impl<T> Drop for NoisyDropper<T> {
    fn drop(&mut self) {
        assert!(!self.parent.dropped.replace(true));
    }
}

impl<T: PartialEq> PartialEq<T> for NoisyDropper<T> {
    fn eq(&self, other: &T) -> bool {
        &self.elem == other
    }
}

impl<T> Deref for NoisyDropper<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.elem
    }
}

#[derive(Debug, Default)]
pub(crate) struct DropNotifier {
    dropped: Cell<bool>,
}

impl DropNotifier {
    pub(crate) fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub(crate) fn was_dropped(&self) -> bool {
        self.dropped.get()
    }
}

/// Creates a tracked value together with the notifier that observes it.
pub(crate) fn noisy<T>(elem: T) -> (Rc<DropNotifier>, NoisyDropper<T>) {
    let notifier = DropNotifier::new();
    let value = NoisyDropper::new(notifier.clone(), elem);

    (notifier, value)
}
