use std::fmt::{self, Display};

use failure::Error;

/// An `Entry` contains either a value or the error which ended its sequence.
///
/// Entries are only created by the adapters in this crate, so a consumer can rely on exactly one
/// of [`err`](#method.err) and [`value`](#method.value) being present.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Entry<T, E = Error> {
    inner: Result<T, E>,
}

/// An `Entry2` contains either a key/value pair or an error.
pub type Entry2<K, V, E = Error> = Entry<(K, V), E>;

impl<T, E> Entry<T, E> {
    #[inline]
    pub(crate) fn ok(value: T) -> Self {
        Entry { inner: Ok(value) }
    }
    #[inline]
    pub(crate) fn fail(err: E) -> Self {
        Entry { inner: Err(err) }
    }
    /// The error carried by this entry, if any; check this before reading the value.
    #[inline]
    pub fn err(&self) -> Option<&E> {
        self.inner.as_ref().err()
    }
    #[inline]
    pub fn value(&self) -> Option<&T> {
        self.inner.as_ref().ok()
    }
    #[inline]
    pub fn is_err(&self) -> bool {
        self.inner.is_err()
    }
    pub fn as_result(&self) -> Result<&T, &E> {
        self.inner.as_ref()
    }
    pub fn into_result(self) -> Result<T, E> {
        self.inner
    }
    /// Transforms the value, leaving an error untouched.
    pub fn map<U, F>(self, f: F) -> Entry<U, E>
        where F: FnOnce(T) -> U
    {
        Entry { inner: self.inner.map(f) }
    }
}

impl<K, V, E> Entry<(K, V), E> {
    #[inline]
    pub fn key(&self) -> Option<&K> {
        self.value().map(|&(ref key, _)| key)
    }
    /// The value half of the pair, without its key.
    #[inline]
    pub fn val(&self) -> Option<&V> {
        self.value().map(|&(_, ref value)| value)
    }
    #[inline]
    pub fn pair(&self) -> Option<(&K, &V)> {
        self.value().map(|&(ref key, ref value)| (key, value))
    }
}

impl<T, E> From<Entry<T, E>> for Result<T, E> {
    fn from(entry: Entry<T, E>) -> Self {
        entry.inner
    }
}

impl<T: Display, E: Display> Display for Entry<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.inner {
            Ok(ref value) => Display::fmt(value, f),
            Err(ref err) => Display::fmt(err, f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use failure::err_msg;

    #[test]
    fn value_entry() {
        let entry: Entry<u32> = Entry::ok(7);
        assert!(entry.err().is_none());
        assert!(!entry.is_err());
        assert_eq!(entry.value(), Some(&7));
        assert_eq!(entry.to_string(), "7");
        let result: Result<u32, Error> = entry.into();
        assert_eq!(result.ok(), Some(7));
    }

    #[test]
    fn error_entry_has_no_value() {
        let entry: Entry<u32> = Entry::fail(err_msg("Error World!"));
        assert!(entry.is_err());
        assert!(entry.value().is_none());
        assert_eq!(entry.to_string(), "Error World!");
        let mapped = entry.map(|v| v + 1);
        assert_eq!(mapped.err().map(|e| e.to_string()), Some("Error World!".to_string()));
    }

    #[test]
    fn pair_accessors() {
        let entry: Entry2<usize, &str, ()> = Entry::ok((1, "one"));
        assert_eq!(entry.key(), Some(&1));
        assert_eq!(entry.val(), Some(&"one"));
        assert_eq!(entry.pair(), Some((&1, &"one")));
        let failed: Entry2<usize, &str, ()> = Entry::fail(());
        assert_eq!(failed.key(), None);
        assert_eq!(failed.val(), None);
        assert_eq!(failed.pair(), None);
        assert_eq!(failed.err(), Some(&()));
    }
}
