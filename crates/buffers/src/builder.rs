//! Tail-growing binary builder.

use tracing::debug;

use crate::endian::EndianScalar;
use crate::{BufferError, BuilderOptions, Offset};

/// A binary builder that fills its buffer from the end towards the start.
///
/// Bytes `[head, capacity)` hold the data written so far. Every write moves
/// `head` down, so values pushed later end up at lower addresses. Positions
/// handed out by the builder are therefore measured from the end of the
/// buffer (see [`Builder::offset`]) and survive reallocation.
///
/// Writers must reserve space with [`Builder::prep`] before calling
/// [`Builder::put`]; `put` itself never grows the buffer.
///
/// # Example
///
/// ```
/// use flatbuf_buffers::Builder;
///
/// let mut builder = Builder::with_capacity(4);
/// builder.prep(4, 8).unwrap();
/// builder.put(2.0f32);
/// builder.put(1.0f32);
/// assert_eq!(builder.offset(), 8);
/// assert_eq!(builder.finished_data().len(), 8);
/// ```
pub struct Builder {
    buf: Vec<u8>,
    head: usize,
    min_align: usize,
    max_size: usize,
}

impl Default for Builder {
    fn default() -> Self {
        Self::new()
    }
}

impl Builder {
    /// Creates a builder with default options.
    pub fn new() -> Self {
        Self::with_options(BuilderOptions::default())
    }

    /// Creates a builder with the given initial capacity.
    pub fn with_capacity(initial_capacity: usize) -> Self {
        Self::with_options(BuilderOptions {
            initial_capacity,
            ..BuilderOptions::default()
        })
    }

    /// Creates a builder from `options`. The initial capacity is clamped to
    /// `max_size`.
    pub fn with_options(options: BuilderOptions) -> Self {
        let capacity = options.initial_capacity.min(options.max_size);
        Self {
            buf: vec![0; capacity],
            head: capacity,
            min_align: 1,
            max_size: options.max_size,
        }
    }

    /// Discards all written data, keeping the allocation.
    pub fn reset(&mut self) {
        self.head = self.buf.len();
        self.min_align = 1;
    }

    /// Number of bytes written so far.
    ///
    /// This is the offset of the most recently written value, measured from
    /// the end of the buffer.
    #[inline]
    pub fn offset(&self) -> usize {
        self.buf.len() - self.head
    }

    /// Size of the current allocation.
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Largest alignment requested so far.
    pub fn min_align(&self) -> usize {
        self.min_align
    }

    /// Reserves `len` bytes, padding first so that the cursor is a multiple
    /// of `alignment` once those bytes are written.
    ///
    /// The buffer grows as needed. Fails before touching the buffer if the
    /// padding plus `len` would take it past the maximum size.
    pub fn prep(&mut self, alignment: usize, len: usize) -> Result<(), BufferError> {
        debug_assert!(alignment.is_power_of_two(), "alignment must be a power of two");
        if alignment > self.min_align {
            self.min_align = alignment;
        }
        let align_size = self.offset().wrapping_add(len).wrapping_neg() & (alignment - 1);
        let needed = align_size + len;
        if self.head < needed {
            let requested = self.offset() + needed;
            if requested > self.max_size {
                return Err(BufferError::BufferTooLarge {
                    requested,
                    max: self.max_size,
                });
            }
            while self.head < needed {
                self.grow();
            }
        }
        self.pad(align_size);
        Ok(())
    }

    /// Doubles the allocation, moving written bytes to the new tail.
    fn grow(&mut self) {
        let old_capacity = self.buf.len();
        let new_capacity = if old_capacity == 0 {
            1
        } else {
            old_capacity.saturating_mul(2)
        }
        .min(self.max_size);
        let used = self.offset();
        let mut grown = vec![0u8; new_capacity];
        grown[new_capacity - used..].copy_from_slice(&self.buf[self.head..]);
        self.buf = grown;
        self.head = new_capacity - used;
        debug!(old_capacity, new_capacity, used, "builder buffer grown");
    }

    /// Writes `n` zero bytes into space already reserved by `prep`.
    fn pad(&mut self, n: usize) {
        let start = self.head - n;
        self.buf[start..self.head].fill(0);
        self.head = start;
    }

    /// Writes a scalar into space previously reserved with [`Builder::prep`].
    ///
    /// # Panics
    ///
    /// Panics if fewer than `T::SIZE` bytes are free.
    #[inline]
    pub fn put<T: EndianScalar>(&mut self, value: T) {
        self.head -= T::SIZE;
        value.write_le(&mut self.buf[self.head..]);
    }

    /// Writes a 32-bit float into reserved space.
    #[inline]
    pub fn put_f32(&mut self, value: f32) {
        self.put(value);
    }

    /// Aligns, reserves and writes a single scalar, returning its offset.
    pub fn push<T: EndianScalar>(&mut self, value: T) -> Result<Offset<T>, BufferError> {
        self.prep(T::SIZE, T::SIZE)?;
        self.put(value);
        Ok(Offset::new(self.offset()))
    }

    /// Pads the front of the buffer so its length is a multiple of the
    /// largest alignment used, then returns the finished bytes.
    pub fn finish(&mut self) -> Result<&[u8], BufferError> {
        let min_align = self.min_align;
        self.prep(min_align, 0)?;
        Ok(self.finished_data())
    }

    /// The bytes written so far.
    pub fn finished_data(&self) -> &[u8] {
        &self.buf[self.head..]
    }

    /// Absolute position of `offset` inside [`Builder::finished_data`].
    pub fn position_of<T>(&self, offset: Offset<T>) -> usize {
        self.offset() - offset.value()
    }

    /// Consumes the builder and returns the written bytes.
    pub fn into_vec(mut self) -> Vec<u8> {
        self.buf.split_off(self.head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_empty() {
        let builder = Builder::new();
        assert_eq!(builder.offset(), 0);
        assert_eq!(builder.capacity(), 1024);
        assert!(builder.finished_data().is_empty());
    }

    #[test]
    fn test_tail_growth_order() {
        let mut builder = Builder::new();
        builder.prep(4, 8).unwrap();
        builder.put(2u32);
        builder.put(1u32);
        assert_eq!(builder.finished_data(), &[1, 0, 0, 0, 2, 0, 0, 0]);
    }

    #[test]
    fn test_prep_pads_to_alignment() {
        let mut builder = Builder::new();
        builder.push(7u8).unwrap();
        builder.prep(4, 8).unwrap();
        // One data byte plus three padding bytes.
        assert_eq!(builder.offset(), 4);
        assert_eq!(builder.finished_data(), &[0, 0, 0, 7]);
    }

    #[test]
    fn test_grow_from_zero_capacity() {
        let mut builder = Builder::with_capacity(0);
        builder.prep(4, 8).unwrap();
        builder.put(1.0f32);
        builder.put(2.0f32);
        assert!(builder.capacity() >= 8);
        assert_eq!(builder.offset(), 8);
    }

    #[test]
    fn test_grow_keeps_written_bytes() {
        let mut builder = Builder::with_capacity(2);
        builder.push(0xAABBu16).unwrap();
        builder.push(0x11223344u32).unwrap();
        // The u32 is aligned to 4, so two padding bytes sit between the values.
        assert_eq!(
            builder.finished_data(),
            &[0x44, 0x33, 0x22, 0x11, 0, 0, 0xBB, 0xAA]
        );
    }

    #[test]
    fn test_max_size_exceeded() {
        let mut builder = Builder::with_options(BuilderOptions {
            initial_capacity: 4,
            max_size: 12,
        });
        builder.prep(4, 8).unwrap();
        builder.put(0f32);
        builder.put(0f32);
        let err = builder.prep(4, 8).unwrap_err();
        assert_eq!(
            err,
            BufferError::BufferTooLarge {
                requested: 16,
                max: 12
            }
        );
        assert_eq!(builder.offset(), 8);
    }

    #[test]
    fn test_exact_fit_at_max_size() {
        let mut builder = Builder::with_options(BuilderOptions {
            initial_capacity: 0,
            max_size: 8,
        });
        builder.prep(4, 8).unwrap();
        builder.put(1.0f32);
        builder.put(2.0f32);
        assert_eq!(builder.offset(), 8);
        assert_eq!(builder.capacity(), 8);
        assert_eq!(builder.finish().unwrap().len(), 8);
    }

    #[test]
    fn test_finish_only_reserves_padding() {
        let mut builder = Builder::with_options(BuilderOptions {
            initial_capacity: 0,
            max_size: 8,
        });
        builder.push(1u32).unwrap();
        builder.push(2u8).unwrap();
        assert_eq!(builder.offset(), 5);
        assert_eq!(builder.finish().unwrap().len(), 8);
        assert_eq!(builder.capacity(), 8);
    }

    #[test]
    fn test_position_of_typed_offset() {
        let mut builder = Builder::new();
        let first = builder.push(0x0102u16).unwrap();
        builder.push(9u8).unwrap();
        let pos = builder.position_of(first);
        assert_eq!(&builder.finished_data()[pos..pos + 2], &[0x02, 0x01]);
    }

    #[test]
    fn test_finish_pads_to_min_align() {
        let mut builder = Builder::new();
        builder.push(1u32).unwrap();
        builder.push(9u8).unwrap();
        assert_eq!(builder.min_align(), 4);
        let data = builder.finish().unwrap();
        assert_eq!(data.len(), 8);
    }

    #[test]
    fn test_reset_and_into_vec() {
        let mut builder = Builder::new();
        builder.push(5u8).unwrap();
        builder.reset();
        assert_eq!(builder.offset(), 0);
        builder.push(6u8).unwrap();
        assert_eq!(builder.into_vec(), vec![6]);
    }
}
