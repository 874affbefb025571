//! `MyGame.Transformation`: a uniform scale followed by a rotation angle.
//!
//! Same shape as [`PolarPoint`](super::PolarPoint): `scale` at offset 0 and
//! `angle` at offset 4, both little-endian `f32`, 8 bytes, 4-aligned.

use std::fmt;

use flatbuf_buffers::{
    check_range, read_scalar_at, write_scalar_at, BufferError, Builder, Offset,
};
use serde::{Deserialize, Serialize};

use crate::Struct;

const SIZE: usize = 8;
const ALIGNMENT: usize = 4;
const SCALE: usize = 0;
const ANGLE: usize = 4;

#[derive(Clone, Copy)]
pub struct Transformation<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Transformation<'a> {
    pub fn assign(&mut self, pos: usize, buf: &'a [u8]) {
        self.pos = pos;
        self.buf = buf;
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    #[inline]
    pub fn scale(&self) -> f32 {
        read_scalar_at(self.buf, self.pos + SCALE)
    }

    #[inline]
    pub fn angle(&self) -> f32 {
        read_scalar_at(self.buf, self.pos + ANGLE)
    }

    pub fn unpack(&self) -> TransformationT {
        TransformationT {
            scale: self.scale(),
            angle: self.angle(),
        }
    }
}

impl<'a> Struct<'a> for Transformation<'a> {
    const SIZE: usize = SIZE;
    const ALIGNMENT: usize = ALIGNMENT;

    fn init(buf: &'a [u8], pos: usize) -> Self {
        Self { buf, pos }
    }
}

impl fmt::Debug for Transformation<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transformation")
            .field("scale", &self.scale())
            .field("angle", &self.angle())
            .finish()
    }
}

pub struct TransformationMut<'a> {
    buf: &'a mut [u8],
    pos: usize,
}

impl<'a> TransformationMut<'a> {
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

    pub fn scale(&self) -> f32 {
        read_scalar_at(self.buf, self.pos + SCALE)
    }

    pub fn angle(&self) -> f32 {
        read_scalar_at(self.buf, self.pos + ANGLE)
    }

    pub fn mutate_scale(&mut self, scale: f32) {
        write_scalar_at(self.buf, self.pos + SCALE, scale);
    }

    pub fn mutate_angle(&mut self, angle: f32) {
        write_scalar_at(self.buf, self.pos + ANGLE, angle);
    }

    pub fn as_view(&self) -> Transformation<'_> {
        Transformation::init(self.buf, self.pos)
    }
}

/// Appends a `Transformation` to `builder`, `angle` first.
pub fn create_transformation<'b>(
    builder: &mut Builder,
    scale: f32,
    angle: f32,
) -> Result<Offset<Transformation<'b>>, BufferError> {
    builder.prep(ALIGNMENT, SIZE)?;
    builder.put_f32(angle);
    builder.put_f32(scale);
    Ok(Offset::new(builder.offset()))
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TransformationT {
    pub scale: f32,
    pub angle: f32,
}

impl TransformationT {
    pub fn pack<'b>(
        &self,
        builder: &mut Builder,
    ) -> Result<Offset<Transformation<'b>>, BufferError> {
        create_transformation(builder, self.scale, self.angle)
    }
}
