use failure::Error;

use {Entry, Entry2};

/// A sequence which drives a step function over its elements.
///
/// `drive` hands each element to `step` in order, and returns once `step` returns `false` or the
/// elements are exhausted. Sequences are consumed by driving them; a fresh sequence (or a clone)
/// is a fresh pass.
pub trait Sequence: Sized {
    type Item;

    fn drive<F>(self, step: F)
        where F: FnMut(Self::Item) -> bool;

    /// Calls `f` on every element.
    fn for_each<F>(self, mut f: F)
        where F: FnMut(Self::Item)
    {
        self.drive(|item| {
            f(item);
            true
        })
    }

    /// Extends a default container with every element, e.g. a `Vec`, a `String`, or a `HashMap`
    /// for sequences of pairs.
    fn collect<C>(self) -> C
        where C: Default + Extend<Self::Item>
    {
        let mut collection = C::default();
        self.drive(|item| {
            collection.extend(Some(item));
            true
        });
        collection
    }

    fn map<U, F>(self, f: F) -> Map<Self, F>
        where F: FnMut(Self::Item) -> U
    {
        Map { seq: self, f }
    }

    fn filter<P>(self, predicate: P) -> Filter<Self, P>
        where P: FnMut(&Self::Item) -> bool
    {
        Filter { seq: self, predicate }
    }

    /// Stops the underlying sequence after at most `n` elements.
    fn take(self, n: usize) -> Take<Self> {
        Take { seq: self, n }
    }

    /// Converts a fallible sequence into a sequence of its values.
    ///
    /// Iteration stops at the first error, which is stored into `err`. If the consumer stops
    /// before an error is reached, `err` is left untouched. Check it once iteration is done, the
    /// same way a database cursor's status is checked after the last row.
    fn unwrap<T, E>(self, err: &mut Option<E>) -> Unwrap<Self, E>
        where Self: Sequence<Item = Entry<T, E>>
    {
        Unwrap { seq: self, err }
    }

    /// Collects the values of a fallible sequence, or returns its error.
    fn try_collect<T, E, C>(self) -> Result<C, E>
        where Self: Sequence<Item = Entry<T, E>>,
              C: Default + Extend<T>
    {
        let mut err = None;
        let collection = self.unwrap(&mut err).collect();
        match err {
            Some(err) => Err(err),
            None => Ok(collection),
        }
    }
}

/// A `Seq` is a sequence of values that may report an error.
pub trait Seq<T, E = Error>: Sequence<Item = Entry<T, E>> {}

impl<S, T, E> Seq<T, E> for S
    where S: Sequence<Item = Entry<T, E>> {}

/// A `Seq2` is a sequence of key/value pairs that may report an error.
pub trait Seq2<K, V, E = Error>: Sequence<Item = Entry2<K, V, E>> {}

impl<S, K, V, E> Seq2<K, V, E> for S
    where S: Sequence<Item = Entry2<K, V, E>> {}

/// Drives a std iterator as a `Sequence`, see [`iter`](fn.iter.html).
#[derive(Debug, Clone)]
pub struct Iter<I> {
    iter: I,
}

/// Lifts a plain iterator into a `Sequence` without wrapping its elements.
pub fn iter<I: IntoIterator>(iter: I) -> Iter<I::IntoIter> {
    Iter { iter: iter.into_iter() }
}

impl<I: Iterator> Sequence for Iter<I> {
    type Item = I::Item;

    fn drive<F>(self, mut step: F)
        where F: FnMut(I::Item) -> bool
    {
        for item in self.iter {
            if !step(item) {
                return;
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct Map<S, F> {
    seq: S,
    f: F,
}

impl<S, F, U> Sequence for Map<S, F>
    where S: Sequence,
          F: FnMut(S::Item) -> U
{
    type Item = U;

    fn drive<G>(self, mut step: G)
        where G: FnMut(U) -> bool
    {
        let mut f = self.f;
        self.seq.drive(|item| step(f(item)))
    }
}

#[derive(Debug, Clone)]
pub struct Filter<S, P> {
    seq: S,
    predicate: P,
}

impl<S, P> Sequence for Filter<S, P>
    where S: Sequence,
          P: FnMut(&S::Item) -> bool
{
    type Item = S::Item;

    fn drive<G>(self, mut step: G)
        where G: FnMut(S::Item) -> bool
    {
        let mut predicate = self.predicate;
        self.seq.drive(|item| if predicate(&item) { step(item) } else { true })
    }
}

#[derive(Debug, Clone)]
pub struct Take<S> {
    seq: S,
    n: usize,
}

impl<S: Sequence> Sequence for Take<S> {
    type Item = S::Item;

    fn drive<G>(self, mut step: G)
        where G: FnMut(S::Item) -> bool
    {
        let mut remaining = self.n;
        if remaining == 0 {
            return;
        }
        self.seq.drive(|item| {
            remaining -= 1;
            step(item) && remaining > 0
        })
    }
}

/// The values of a fallible sequence, see [`Sequence::unwrap`](trait.Sequence.html#method.unwrap).
#[derive(Debug)]
pub struct Unwrap<'e, S, E: 'e> {
    seq: S,
    err: &'e mut Option<E>,
}

impl<'e, S, T, E> Sequence for Unwrap<'e, S, E>
    where S: Sequence<Item = Entry<T, E>>
{
    type Item = T;

    fn drive<F>(self, mut step: F)
        where F: FnMut(T) -> bool
    {
        let err = self.err;
        self.seq.drive(|entry| match entry.into_result() {
            Ok(value) => step(value),
            Err(e) => {
                trace!("unwrap captured the terminal error");
                *err = Some(e);
                false
            }
        })
    }
}
