//! Typed builder offsets.

use std::fmt;
use std::marker::PhantomData;

/// A position inside a [`Builder`](crate::Builder), counted from the end of
/// the buffer.
///
/// Because the builder grows towards lower addresses, an offset stays valid
/// across reallocations. Resolve it against the finished bytes with
/// [`Offset::position_in`].
pub struct Offset<T> {
    value: usize,
    marker: PhantomData<fn() -> T>,
}

impl<T> Offset<T> {
    pub const fn new(value: usize) -> Self {
        Self {
            value,
            marker: PhantomData,
        }
    }

    /// Distance from the end of the buffer.
    pub const fn value(self) -> usize {
        self.value
    }

    /// Absolute position of this offset inside `finished` builder data.
    pub fn position_in(self, finished: &[u8]) -> usize {
        finished.len() - self.value
    }
}

impl<T> Clone for Offset<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Offset<T> {}

impl<T> PartialEq for Offset<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> Eq for Offset<T> {}

impl<T> fmt::Debug for Offset<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Offset").field(&self.value).finish()
    }
}
