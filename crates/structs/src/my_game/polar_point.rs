//! `MyGame.PolarPoint`: magnitude and argument as two little-endian `f32`s.
//!
//! ```text
//! offset  size  field
//! 0       4     mag
//! 4       4     arg
//! ```

use std::fmt;

use flatbuf_buffers::{
    check_range, read_scalar_at, write_scalar_at, BufferError, Builder, Offset,
};
use serde::{Deserialize, Serialize};

use crate::Struct;

const SIZE: usize = 8;
const ALIGNMENT: usize = 4;
const MAG: usize = 0;
const ARG: usize = 4;

/// Read-only view of a `PolarPoint` inside a byte buffer.
#[derive(Clone, Copy)]
pub struct PolarPoint<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> PolarPoint<'a> {
    /// Rebinds this view to another position and buffer.
    pub fn assign(&mut self, pos: usize, buf: &'a [u8]) {
        self.pos = pos;
        self.buf = buf;
    }

    /// Base position of the struct inside its buffer.
    pub fn pos(&self) -> usize {
        self.pos
    }

    #[inline]
    pub fn mag(&self) -> f32 {
        read_scalar_at(self.buf, self.pos + MAG)
    }

    #[inline]
    pub fn arg(&self) -> f32 {
        read_scalar_at(self.buf, self.pos + ARG)
    }

    /// Copies the fields out into an owned value.
    pub fn unpack(&self) -> PolarPointT {
        PolarPointT {
            mag: self.mag(),
            arg: self.arg(),
        }
    }
}

impl<'a> Struct<'a> for PolarPoint<'a> {
    const SIZE: usize = SIZE;
    const ALIGNMENT: usize = ALIGNMENT;

    fn init(buf: &'a [u8], pos: usize) -> Self {
        Self { buf, pos }
    }
}

impl fmt::Debug for PolarPoint<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PolarPoint")
            .field("mag", &self.mag())
            .field("arg", &self.arg())
            .finish()
    }
}

/// Mutable view of a `PolarPoint`; the only way to change fields in place.
pub struct PolarPointMut<'a> {
    buf: &'a mut [u8],
    pos: usize,
}

impl<'a> PolarPointMut<'a> {
    pub fn init(buf: &'a mut [u8], pos: usize) -> Self {
        Self { buf, pos }
    }

    pub fn try_init(buf: &'a mut [u8], pos: usize) -> Result<Self, BufferError> {
        check_range(buf.len(), pos, SIZE)?;
        Ok(Self::init(buf, pos))
    }

    pub fn assign(&mut self, pos: usize, buf: &'a mut [u8]) {
        self.pos = pos;
        self.buf = buf;
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn mag(&self) -> f32 {
        read_scalar_at(self.buf, self.pos + MAG)
    }

    pub fn arg(&self) -> f32 {
        read_scalar_at(self.buf, self.pos + ARG)
    }

    pub fn mutate_mag(&mut self, mag: f32) {
        write_scalar_at(self.buf, self.pos + MAG, mag);
    }

    pub fn mutate_arg(&mut self, arg: f32) {
        write_scalar_at(self.buf, self.pos + ARG, arg);
    }

    /// Borrows a read-only view of the same struct.
    pub fn as_view(&self) -> PolarPoint<'_> {
        PolarPoint::init(self.buf, self.pos)
    }
}

/// Appends a `PolarPoint` to `builder` and returns its offset.
///
/// The builder grows towards lower addresses, so `arg` is written before
/// `mag` to leave them in declaration order in the finished bytes. Space is
/// reserved before the first write; a failed reservation leaves the builder
/// untouched.
pub fn create_polar_point<'b>(
    builder: &mut Builder,
    mag: f32,
    arg: f32,
) -> Result<Offset<PolarPoint<'b>>, BufferError> {
    builder.prep(ALIGNMENT, SIZE)?;
    builder.put_f32(arg);
    builder.put_f32(mag);
    Ok(Offset::new(builder.offset()))
}

/// Owned `PolarPoint` value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PolarPointT {
    pub mag: f32,
    pub arg: f32,
}

impl PolarPointT {
    pub fn pack<'b>(&self, builder: &mut Builder) -> Result<Offset<PolarPoint<'b>>, BufferError> {
        create_polar_point(builder, self.mag, self.arg)
    }
}
