//! Binary buffer utilities for fixed-layout structs.
//!
//! All scalars are stored little-endian. This is the single byte order used by
//! every struct accessor built on top of this crate.
//!
//! # Overview
//!
//! - [`read_scalar_at`] / [`write_scalar_at`] - caller-trusted random access
//! - [`try_read_scalar_at`] / [`try_write_scalar_at`] - bounds-checked random access
//! - [`Builder`] - a buffer that grows from its tail towards its head
//! - [`Offset`] - a typed position inside a [`Builder`], counted from the end
//!
//! # Example
//!
//! ```
//! use flatbuf_buffers::{read_scalar_at, Builder};
//!
//! let mut builder = Builder::new();
//! builder.prep(4, 8).unwrap();
//! builder.put(-2.25f32);
//! builder.put(1.5f32);
//! let end = builder.offset();
//!
//! let data = builder.finished_data();
//! let pos = data.len() - end;
//! assert_eq!(read_scalar_at::<f32>(data, pos), 1.5);
//! assert_eq!(read_scalar_at::<f32>(data, pos + 4), -2.25);
//! ```

mod builder;
mod endian;
mod offset;
mod options;

pub use builder::Builder;
pub use endian::{
    check_range, read_scalar_at, try_read_scalar_at, try_write_scalar_at, write_scalar_at,
    EndianScalar,
};
pub use offset::Offset;
pub use options::{BuilderOptions, MAX_BUFFER_SIZE};

use thiserror::Error;

/// Error type for buffer operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BufferError {
    /// Attempted to access bytes outside of the buffer.
    #[error("access of {size} bytes at {pos} is out of bounds for buffer of length {len}")]
    OutOfBounds { pos: usize, size: usize, len: usize },
    /// The builder cannot grow enough to satisfy a reservation.
    #[error("cannot grow buffer to {requested} bytes, maximum is {max}")]
    BufferTooLarge { requested: usize, max: usize },
}
