//! Sequences that may fail.
//!
//! A [`Seq`](trait.Seq.html) is a sequence of [`Entry`](struct.Entry.html) values, each carrying
//! either a value or the error which ended the sequence. Plain sequences are lifted with
//! [`just`](fn.just.html), and push-style generators which report failure through their return
//! value are lifted with [`of`](fn.of.html). [`Sequence::unwrap`](trait.Sequence.html#method.unwrap)
//! goes the other way, moving the error into a slot that is checked once iteration is over.
//!
//! # Example
//!
//! ```rust
//! extern crate failure;
//! extern crate fallible_seq;
//!
//! use fallible_seq::{of, Seq, Sequence};
//!
//! fn counter(n: usize) -> impl Seq<usize> {
//!     of(move |step| {
//!         for i in 0..n {
//!             if !step(i) {
//!                 return Ok(());
//!             }
//!         }
//!         Err(failure::err_msg("Error World!"))
//!     })
//! }
//!
//! fn main() {
//!     let mut err = None;
//!     let values: Vec<usize> = counter(3).unwrap(&mut err).collect();
//!     assert_eq!(values, vec![0, 1, 2]);
//!     assert_eq!(err.map(|e| e.to_string()), Some("Error World!".to_string()));
//! }
//! ```

extern crate scroll;
#[macro_use]
extern crate failure;
#[macro_use]
extern crate tracing;

use failure::AsFail;

/// The sentinel recognized by [`of`](fn.of.html) and [`of2`](fn.of2.html).
///
/// A generator returning `Stop`, or any error whose cause chain contains it, has finished
/// successfully. This lets a generator built over some other callback API bail out of that API
/// once the consumer has asked it to stop, without the bail-out being reported as a failure.
#[derive(Fail, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[fail(display = "stop")]
pub struct Stop;

/// The kind of errors produced by the [`Records`](struct.Records.html) generator
#[derive(Fail, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    #[fail(display = "Too many elements (size = {} * {}) requested from src of size: {}", nelements, sizeof_element, src_size)]
    ElementOverflow { nelements: usize, sizeof_element: usize, src_size: usize },
    #[fail(display = "{} trailing bytes after {} elements of size {}", remaining, nelements, sizeof_element)]
    TrailingBytes { remaining: usize, nelements: usize, sizeof_element: usize },
}

/// Classifies the terminal status of a generator.
///
/// Every `failure` error implements this already: `failure::Error`, `Context`, and any type that
/// implements `Fail` (including a `#[derive(Fail)]` type or a std error), by looking for
/// [`Stop`](struct.Stop.html) in its cause chain. Any other error type a generator returns
/// directly needs its own impl to say which of its values mean "stopped".
///
/// # Example
///
/// ```rust
/// extern crate fallible_seq;
///
/// use fallible_seq::{of, Entry, Sequence, Terminal};
///
/// #[derive(Debug, PartialEq)]
/// enum Halt {
///     Done,
///     Broken(&'static str),
/// }
///
/// impl Terminal for Halt {
///     fn is_stop(&self) -> bool {
///         *self == Halt::Done
///     }
/// }
///
/// fn main() {
///     let done: Vec<Entry<u8, Halt>> = of(|step| {
///         step(1);
///         Err(Halt::Done)
///     }).collect();
///     assert_eq!(done.len(), 1);
///
///     let broken: Vec<Entry<u8, Halt>> = of(|step| {
///         step(1);
///         Err(Halt::Broken("disk"))
///     }).collect();
///     assert_eq!(broken[1].err(), Some(&Halt::Broken("disk")));
/// }
/// ```
pub trait Terminal {
    /// Whether this error is, or wraps, the [`Stop`](struct.Stop.html) sentinel.
    fn is_stop(&self) -> bool;
}

impl<F> Terminal for F
    where F: AsFail + ?Sized
{
    fn is_stop(&self) -> bool {
        self.as_fail().iter_chain().any(|cause| cause.downcast_ref::<Stop>().is_some())
    }
}

mod entry;
mod seq;
mod just;
mod of;
mod builder;

pub use entry::*;
pub use seq::*;
pub use just::*;
pub use of::*;
pub use builder::*;
