use super::error::WindowError;
use super::reader::{ByteOrder, WindowReader};

/// Largest value representable in 24 bits.
pub const UINT24_MAX: u32 = 0x00FF_FFFF;
const INT24_SIGN_BIT: u32 = 0x0080_0000;

/// Read an unsigned 24-bit integer from the first three bytes of `window`.
///
/// # Examples
/// ```
/// use hexlens_core::{ByteOrder, read_uint24};
///
/// assert_eq!(read_uint24(&[0x01, 0x02, 0x03], ByteOrder::Little)?, 0x030201);
/// assert_eq!(read_uint24(&[0x01, 0x02, 0x03], ByteOrder::Big)?, 0x010203);
/// # Ok::<(), hexlens_core::WindowError>(())
/// ```
pub fn read_uint24(window: &[u8], order: ByteOrder) -> Result<u32, WindowError> {
    let [b0, b1, b2] = WindowReader::new(window).read_array::<3>()?;
    let (b0, b1, b2) = (u32::from(b0), u32::from(b1), u32::from(b2));
    Ok(match order {
        ByteOrder::Little => b0 | (b1 << 8) | (b2 << 16),
        ByteOrder::Big => (b0 << 16) | (b1 << 8) | b2,
    })
}

/// Reinterpret a raw 24-bit value as two's complement.
///
/// Bits above bit 23 are ignored.
///
/// # Examples
/// ```
/// use hexlens_core::int24_from_raw;
///
/// assert_eq!(int24_from_raw(0xFFFFFF), -1);
/// assert_eq!(int24_from_raw(0x7FFFFF), 8_388_607);
/// ```
pub fn int24_from_raw(raw: u32) -> i32 {
    let raw = raw & UINT24_MAX;
    if raw & INT24_SIGN_BIT != 0 {
        -((UINT24_MAX - raw + 1) as i32)
    } else {
        raw as i32
    }
}
