//! Fixed-layout struct accessors.
//!
//! A struct is a record whose fields sit at byte offsets known at compile
//! time, with no length prefix or indirection. Accessors in this crate are
//! views: a borrowed byte slice plus the position where the struct begins.
//! They never allocate and never own the bytes they read.
//!
//! Every struct kind comes in three shapes:
//!
//! - a read-only view (`PolarPoint`) implementing [`Struct`]
//! - a mutable view (`PolarPointMut`) for in-place field updates
//! - an owned value (`PolarPointT`) for building and serde
//!
//! # Example
//!
//! ```
//! use flatbuf_buffers::Builder;
//! use flatbuf_structs::my_game::{create_polar_point, PolarPoint};
//! use flatbuf_structs::Struct;
//!
//! let mut builder = Builder::new();
//! let offset = create_polar_point(&mut builder, 1.5, -2.25).unwrap();
//!
//! let point = PolarPoint::follow(builder.finished_data(), offset);
//! assert_eq!(point.mag(), 1.5);
//! assert_eq!(point.arg(), -2.25);
//! ```

pub mod my_game;

use flatbuf_buffers::{check_range, BufferError, Offset};

pub use flatbuf_buffers::{Builder, BuilderOptions};

/// Capability shared by read-only struct views.
pub trait Struct<'a>: Sized + Copy {
    /// Encoded size in bytes.
    const SIZE: usize;
    /// Required alignment of the struct's base position.
    const ALIGNMENT: usize;

    /// Binds a view to `buf` at `pos` without any validation.
    fn init(buf: &'a [u8], pos: usize) -> Self;

    /// Binds a view after checking that the whole struct lies inside `buf`.
    fn try_init(buf: &'a [u8], pos: usize) -> Result<Self, BufferError> {
        check_range(buf.len(), pos, Self::SIZE)?;
        Ok(Self::init(buf, pos))
    }

    /// Binds a view to a struct created by a [`Builder`], given its finished
    /// bytes.
    fn follow(buf: &'a [u8], offset: Offset<Self>) -> Self {
        Self::init(buf, offset.position_in(buf))
    }
}
