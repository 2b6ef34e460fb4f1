use std::marker::PhantomData;

use {Entry, Sequence, Terminal};

/// A push-style producer: drives `step` with each value it produces and reports how it ended.
///
/// `step` returns `false` once the consumer wants no more values; a well behaved generator then
/// returns promptly. Returning `Ok(())` or an error recognized as [`Stop`](struct.Stop.html) means
/// the generator finished successfully; any other error is a failure.
pub trait Generator<T> {
    type Error;

    fn generate(self, step: &mut dyn FnMut(T) -> bool) -> Result<(), Self::Error>;
}

/// Adapts a closure to [`Generator`](trait.Generator.html), see [`of`](fn.of.html).
#[derive(Debug, Clone)]
pub struct FnGenerator<F>(F);

impl<F, T, E> Generator<T> for FnGenerator<F>
    where F: FnOnce(&mut dyn FnMut(T) -> bool) -> Result<(), E>
{
    type Error = E;

    fn generate(self, step: &mut dyn FnMut(T) -> bool) -> Result<(), E> {
        (self.0)(step)
    }
}

/// Adapts a closure over key/value pairs to [`Generator`](trait.Generator.html), see
/// [`of2`](fn.of2.html).
#[derive(Debug, Clone)]
pub struct FnGenerator2<F>(F);

impl<F, K, V, E> Generator<(K, V)> for FnGenerator2<F>
    where F: FnOnce(&mut dyn FnMut(K, V) -> bool) -> Result<(), E>
{
    type Error = E;

    fn generate(self, step: &mut dyn FnMut((K, V)) -> bool) -> Result<(), E> {
        (self.0)(&mut |key: K, value: V| step((key, value)))
    }
}

/// A fallible sequence driven by a [`Generator`](trait.Generator.html).
#[derive(Debug)]
pub struct Of<G, T> {
    generator: G,
    _marker: PhantomData<fn(T)>,
}

/// A fallible sequence of key/value pairs driven by a generator.
pub type Of2<G, K, V> = Of<G, (K, V)>;

impl<G, T> Of<G, T>
    where G: Generator<T>
{
    pub fn new(generator: G) -> Self {
        Of {
            generator,
            _marker: PhantomData::default(),
        }
    }
}

impl<G: Clone, T> Clone for Of<G, T> {
    fn clone(&self) -> Self {
        Of {
            generator: self.generator.clone(),
            _marker: PhantomData::default(),
        }
    }
}

/// Constructs a fallible sequence from a generator function that may return an error.
///
/// The generator may return `Ok(())` or [`Stop`](struct.Stop.html) to indicate successful
/// termination; any other error becomes the last entry of the sequence. The error type must
/// implement [`Terminal`](trait.Terminal.html), which every `failure::Fail` type and
/// `failure::Error` already do.
///
/// # Example
///
/// ```rust
/// extern crate failure;
/// extern crate fallible_seq;
///
/// use fallible_seq::{of, Sequence};
///
/// fn main() {
///     let lines: Vec<String> = of(|step| {
///         for i in 0..3u32 {
///             if !step(i) {
///                 return Ok(());
///             }
///         }
///         Err(failure::err_msg("Error World!"))
///     })
///     .map(|entry| entry.to_string())
///     .collect();
///     assert_eq!(lines, vec!["0", "1", "2", "Error World!"]);
/// }
/// ```
pub fn of<T, E, F>(generator: F) -> Of<FnGenerator<F>, T>
    where F: FnOnce(&mut dyn FnMut(T) -> bool) -> Result<(), E>
{
    Of::new(FnGenerator(generator))
}

/// Constructs a fallible sequence of key/value pairs from a generator function that may return
/// an error.
pub fn of2<K, V, E, F>(generator: F) -> Of2<FnGenerator2<F>, K, V>
    where F: FnOnce(&mut dyn FnMut(K, V) -> bool) -> Result<(), E>
{
    Of::new(FnGenerator2(generator))
}

impl<G, T> Sequence for Of<G, T>
    where G: Generator<T>,
          G::Error: Terminal
{
    type Item = Entry<T, G::Error>;

    fn drive<F>(self, mut step: F)
        where F: FnMut(Self::Item) -> bool
    {
        let mut delivered = 0usize;
        let mut stopped = false;
        let status = self.generator.generate(&mut |value: T| {
            // the generator may ignore a stop; nothing reaches the consumer after one
            if stopped {
                return false;
            }
            delivered += 1;
            stopped = !step(Entry::ok(value));
            !stopped
        });
        match status {
            Ok(()) => trace!(delivered, stopped, "generator finished"),
            Err(ref err) if err.is_stop() => trace!(delivered, stopped, "generator returned the stop sentinel"),
            Err(_) if stopped => trace!(delivered, "generator failed after the consumer stopped"),
            Err(err) => {
                trace!(delivered, "generator failed");
                step(Entry::fail(err));
            }
        }
    }
}
