use std::marker::PhantomData;

use scroll::{self, ctx, Pread};
use scroll::ctx::SizeWith;
use failure::{Error, Fail};

use {Generator, Of, RecordError};

/// A builder for a generator of fixed-size records read out of a byte slice with `scroll`.
///
/// Records are parsed lazily, one per step; the sequence ends with an error entry when the input
/// is short, has trailing bytes, or a record fails to parse.
///
/// # Example
///
/// ```rust
/// extern crate scroll;
/// extern crate fallible_seq;
///
/// use fallible_seq::{Records, Sequence};
///
/// fn main() {
///     let bytes = [0, 0, 0, 1, 0, 0, 0, 2, 0xde, 0xad];
///     let mut err = None;
///     let numbers: Vec<u32> = Records::<u32>::new(&bytes[..])
///         .parse_with(scroll::BE)
///         .unwrap(&mut err)
///         .collect();
///     assert_eq!(numbers, vec![1, 2]);
///     // two trailing bytes do not make up another record
///     assert!(err.is_some());
/// }
/// ```
pub struct Records<'a, Output>
    where Output: 'a
{
    input: &'a [u8],
    count: Option<usize>,
    _marker: PhantomData<fn() -> Output>,
}

impl<'a, Output> Records<'a, Output>
    where Output: 'a
{
    /// Creates a builder over `input`; without a [`count`](#method.count) every whole record in
    /// the input is read, and leftover bytes are an error.
    pub fn new(input: &'a [u8]) -> Self {
        Records {
            input,
            count: None,
            _marker: PhantomData::default(),
        }
    }
    /// Set (or reset) the input.
    pub fn input(mut self, input: &'a [u8]) -> Self {
        self.input = input;
        self
    }
    /// Set the exact number of records the input must hold.
    pub fn count(mut self, count: usize) -> Self {
        self.count = Some(count);
        self
    }
    /// Finish building, returning the fallible sequence of records parsed with `ctx`.
    pub fn parse_with<Ctx, E>(self, ctx: Ctx) -> Of<ScrollRecords<'a, Output, Ctx>, Output>
        where Ctx: Copy,
              E: From<scroll::Error> + Fail,
              Output: ctx::TryFromCtx<'a, Ctx, Error = E> + SizeWith<Ctx>
    {
        Of::new(ScrollRecords {
            input: self.input,
            count: self.count,
            ctx,
            _marker: PhantomData::default(),
        })
    }
}

/// The generator behind [`Records::parse_with`](struct.Records.html#method.parse_with).
pub struct ScrollRecords<'a, Output, Ctx> {
    input: &'a [u8],
    count: Option<usize>,
    ctx: Ctx,
    _marker: PhantomData<fn() -> Output>,
}

impl<'a, Output, Ctx: Copy> Clone for ScrollRecords<'a, Output, Ctx> {
    fn clone(&self) -> Self {
        ScrollRecords {
            input: self.input,
            count: self.count,
            ctx: self.ctx,
            _marker: PhantomData::default(),
        }
    }
}

impl<'a, Output, Ctx, E> Generator<Output> for ScrollRecords<'a, Output, Ctx>
    where Ctx: Copy,
          E: From<scroll::Error> + Fail,
          Output: 'a + ctx::TryFromCtx<'a, Ctx, Error = E> + SizeWith<Ctx>
{
    type Error = Error;

    fn generate(self, step: &mut dyn FnMut(Output) -> bool) -> Result<(), Error> {
        let sizeof_element = Output::size_with(&self.ctx);
        if sizeof_element == 0 {
            // zero-sized records take no input; only an explicit count produces any
            for _ in 0..self.count.unwrap_or(0) {
                let (record, _) = Output::try_from_ctx(self.input, self.ctx)?;
                if !step(record) {
                    return Ok(());
                }
            }
            return Ok(());
        }
        let src_size = self.input.len();
        let available = src_size / sizeof_element;
        let nelements = self.count.unwrap_or(available);
        for idx in 0..nelements.min(available) {
            let record: Output = self.input.pread_with(idx * sizeof_element, self.ctx)?;
            if !step(record) {
                return Ok(());
            }
        }
        if nelements > available {
            debug!(nelements, sizeof_element, src_size, "input too short for requested records");
            return Err(RecordError::ElementOverflow { nelements, sizeof_element, src_size }.into());
        }
        let remaining = src_size - nelements * sizeof_element;
        if self.count.is_none() && remaining != 0 {
            debug!(remaining, nelements, sizeof_element, "trailing bytes after last record");
            return Err(RecordError::TrailingBytes { remaining, nelements, sizeof_element }.into());
        }
        Ok(())
    }
}
