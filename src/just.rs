use std::marker::PhantomData;

use failure::Error;

use {Entry, Sequence};

/// A fallible sequence over an iterator which never fails, see [`just`](fn.just.html).
#[derive(Debug)]
pub struct Just<I, E = Error> {
    iter: I,
    _marker: PhantomData<fn() -> E>,
}

impl<I, E> Just<I, E> {
    /// Wraps `iter`, reporting errors (of which there are none) as `E`.
    pub fn new(iter: I) -> Self {
        Just {
            iter,
            _marker: PhantomData::default(),
        }
    }
}

impl<I: Clone, E> Clone for Just<I, E> {
    fn clone(&self) -> Self {
        Just::new(self.iter.clone())
    }
}

/// Wraps an existing sequence; every element becomes a value entry.
pub fn just<I: IntoIterator>(iter: I) -> Just<I::IntoIter> {
    Just::new(iter.into_iter())
}

/// Wraps an existing sequence of key/value pairs.
pub fn just2<I, K, V>(iter: I) -> Just<I::IntoIter>
    where I: IntoIterator<Item = (K, V)>
{
    Just::new(iter.into_iter())
}

impl<I: Iterator, E> Sequence for Just<I, E> {
    type Item = Entry<I::Item, E>;

    fn drive<F>(self, mut step: F)
        where F: FnMut(Self::Item) -> bool
    {
        for value in self.iter {
            if !step(Entry::ok(value)) {
                return;
            }
        }
    }
}
