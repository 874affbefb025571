//! Little-endian scalar access at absolute byte positions.

use crate::BufferError;

/// A fixed-width scalar with a little-endian wire representation.
///
/// Floats go through their bit pattern, so NaN payloads and signed zeros
/// survive a write/read cycle unchanged.
pub trait EndianScalar: Copy {
    /// Encoded width in bytes.
    const SIZE: usize;

    /// Writes `self` into the first [`Self::SIZE`] bytes of `dst`.
    fn write_le(self, dst: &mut [u8]);

    /// Reads a value from the first [`Self::SIZE`] bytes of `src`.
    fn read_le(src: &[u8]) -> Self;
}

macro_rules! impl_endian_scalar {
    ($($ty:ty),* $(,)?) => {
        $(
            impl EndianScalar for $ty {
                const SIZE: usize = std::mem::size_of::<$ty>();

                #[inline]
                fn write_le(self, dst: &mut [u8]) {
                    dst[..Self::SIZE].copy_from_slice(&self.to_le_bytes());
                }

                #[inline]
                fn read_le(src: &[u8]) -> Self {
                    let mut bytes = [0u8; std::mem::size_of::<$ty>()];
                    bytes.copy_from_slice(&src[..Self::SIZE]);
                    <$ty>::from_le_bytes(bytes)
                }
            }
        )*
    };
}

impl_endian_scalar!(u8, i8, u16, i16, u32, i32, u64, i64, f32, f64);

/// Checks that `size` bytes starting at `pos` fit into a buffer of `len` bytes.
pub fn check_range(len: usize, pos: usize, size: usize) -> Result<(), BufferError> {
    match pos.checked_add(size) {
        Some(end) if end <= len => Ok(()),
        _ => Err(BufferError::OutOfBounds { pos, size, len }),
    }
}

/// Reads a scalar at `pos`.
///
/// # Panics
///
/// Panics if `pos + T::SIZE` exceeds `buf.len()`.
#[inline]
pub fn read_scalar_at<T: EndianScalar>(buf: &[u8], pos: usize) -> T {
    T::read_le(&buf[pos..pos + T::SIZE])
}

/// Writes a scalar at `pos`.
///
/// # Panics
///
/// Panics if `pos + T::SIZE` exceeds `buf.len()`.
#[inline]
pub fn write_scalar_at<T: EndianScalar>(buf: &mut [u8], pos: usize, value: T) {
    value.write_le(&mut buf[pos..pos + T::SIZE]);
}

/// Reads a scalar at `pos`, reporting out-of-range access as an error.
pub fn try_read_scalar_at<T: EndianScalar>(buf: &[u8], pos: usize) -> Result<T, BufferError> {
    check_range(buf.len(), pos, T::SIZE)?;
    Ok(read_scalar_at(buf, pos))
}

/// Writes a scalar at `pos`, reporting out-of-range access as an error.
pub fn try_write_scalar_at<T: EndianScalar>(
    buf: &mut [u8],
    pos: usize,
    value: T,
) -> Result<(), BufferError> {
    check_range(buf.len(), pos, T::SIZE)?;
    write_scalar_at(buf, pos, value);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_u32_is_little_endian() {
        let mut buf = [0u8; 4];
        write_scalar_at(&mut buf, 0, 0x0102_0304u32);
        assert_eq!(buf, [0x04, 0x03, 0x02, 0x01]);
        assert_eq!(read_scalar_at::<u32>(&buf, 0), 0x0102_0304);
    }

    #[test]
    fn test_f32_layout() {
        let mut buf = [0u8; 4];
        write_scalar_at(&mut buf, 0, 1.5f32);
        assert_eq!(buf, [0x00, 0x00, 0xC0, 0x3F]);
    }

    #[test]
    fn test_nan_payload_preserved() {
        let nan = f32::from_bits(0x7FC0_1234);
        let mut buf = [0u8; 8];
        write_scalar_at(&mut buf, 4, nan);
        assert_eq!(read_scalar_at::<f32>(&buf, 4).to_bits(), 0x7FC0_1234);
    }

    #[test]
    fn test_unaligned_position() {
        let mut buf = [0u8; 7];
        write_scalar_at(&mut buf, 3, -1i32);
        assert_eq!(buf, [0, 0, 0, 0xFF, 0xFF, 0xFF, 0xFF]);
        assert_eq!(read_scalar_at::<i32>(&buf, 3), -1);
    }

    #[test]
    #[should_panic]
    fn test_unchecked_read_out_of_bounds_panics() {
        let buf = [0u8; 6];
        let _ = read_scalar_at::<f32>(&buf, 4);
    }

    #[test]
    fn test_checked_out_of_bounds() {
        let mut buf = [0u8; 6];
        assert_eq!(
            try_read_scalar_at::<f32>(&buf, 4),
            Err(BufferError::OutOfBounds {
                pos: 4,
                size: 4,
                len: 6
            })
        );
        assert!(try_write_scalar_at(&mut buf, 3, 0u16).is_ok());
        assert!(try_write_scalar_at(&mut buf, 5, 0u16).is_err());
        assert_eq!(buf, [0u8; 6]);
    }

    #[test]
    fn test_check_range_overflow() {
        assert!(check_range(8, usize::MAX, 4).is_err());
        assert!(check_range(8, 0, 8).is_ok());
        assert!(check_range(8, 8, 0).is_ok());
    }
}
