use serde::{Deserialize, Serialize};

use super::error::WindowError;

/// Byte order applied to multi-byte reads.
///
/// # Examples
/// ```
/// use hexlens_core::ByteOrder;
///
/// assert_eq!(ByteOrder::from_little_endian(true), ByteOrder::Little);
/// assert!(!ByteOrder::Big.is_little());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ByteOrder {
    #[default]
    Little,
    Big,
}

impl ByteOrder {
    pub fn from_little_endian(little_endian: bool) -> Self {
        if little_endian {
            ByteOrder::Little
        } else {
            ByteOrder::Big
        }
    }

    pub fn is_little(self) -> bool {
        self == ByteOrder::Little
    }
}

/// Bounds-checked reads over a caller-provided byte window.
///
/// All reads start at offset 0 of the window; a read past the end returns
/// `WindowError::TooShort` instead of panicking.
pub struct WindowReader<'a> {
    window: &'a [u8],
}

impl<'a> WindowReader<'a> {
    pub fn new(window: &'a [u8]) -> Self {
        Self { window }
    }

    pub fn bytes(&self) -> &'a [u8] {
        self.window
    }

    pub fn require_len(&self, needed: usize) -> Result<(), WindowError> {
        if self.window.len() < needed {
            return Err(WindowError::TooShort {
                needed,
                actual: self.window.len(),
            });
        }
        Ok(())
    }

    pub fn read_array<const N: usize>(&self) -> Result<[u8; N], WindowError> {
        let bytes = self.window.get(..N).ok_or(WindowError::TooShort {
            needed: N,
            actual: self.window.len(),
        })?;
        let mut out = [0u8; N];
        out.copy_from_slice(bytes);
        Ok(out)
    }

    pub fn read_u8(&self) -> Result<u8, WindowError> {
        self.window.first().copied().ok_or(WindowError::TooShort {
            needed: 1,
            actual: 0,
        })
    }

    pub fn read_i8(&self) -> Result<i8, WindowError> {
        Ok(i8::from_ne_bytes([self.read_u8()?]))
    }

    pub fn read_u16(&self, order: ByteOrder) -> Result<u16, WindowError> {
        let bytes = self.read_array::<2>()?;
        Ok(match order {
            ByteOrder::Little => u16::from_le_bytes(bytes),
            ByteOrder::Big => u16::from_be_bytes(bytes),
        })
    }

    pub fn read_i16(&self, order: ByteOrder) -> Result<i16, WindowError> {
        let bytes = self.read_array::<2>()?;
        Ok(match order {
            ByteOrder::Little => i16::from_le_bytes(bytes),
            ByteOrder::Big => i16::from_be_bytes(bytes),
        })
    }

    pub fn read_u32(&self, order: ByteOrder) -> Result<u32, WindowError> {
        let bytes = self.read_array::<4>()?;
        Ok(match order {
            ByteOrder::Little => u32::from_le_bytes(bytes),
            ByteOrder::Big => u32::from_be_bytes(bytes),
        })
    }

    pub fn read_i32(&self, order: ByteOrder) -> Result<i32, WindowError> {
        let bytes = self.read_array::<4>()?;
        Ok(match order {
            ByteOrder::Little => i32::from_le_bytes(bytes),
            ByteOrder::Big => i32::from_be_bytes(bytes),
        })
    }

    pub fn read_u64(&self, order: ByteOrder) -> Result<u64, WindowError> {
        let bytes = self.read_array::<8>()?;
        Ok(match order {
            ByteOrder::Little => u64::from_le_bytes(bytes),
            ByteOrder::Big => u64::from_be_bytes(bytes),
        })
    }

    pub fn read_i64(&self, order: ByteOrder) -> Result<i64, WindowError> {
        let bytes = self.read_array::<8>()?;
        Ok(match order {
            ByteOrder::Little => i64::from_le_bytes(bytes),
            ByteOrder::Big => i64::from_be_bytes(bytes),
        })
    }

    pub fn read_f32(&self, order: ByteOrder) -> Result<f32, WindowError> {
        Ok(f32::from_bits(self.read_u32(order)?))
    }

    pub fn read_f64(&self, order: ByteOrder) -> Result<f64, WindowError> {
        Ok(f64::from_bits(self.read_u64(order)?))
    }
}

#[cfg(test)]
mod tests {
    use super::{ByteOrder, WindowReader};
    use crate::codecs::error::WindowError;

    #[test]
    fn read_u16_honours_order() {
        let reader = WindowReader::new(&[0x12, 0x34]);
        assert_eq!(reader.read_u16(ByteOrder::Little).unwrap(), 0x3412);
        assert_eq!(reader.read_u16(ByteOrder::Big).unwrap(), 0x1234);
    }

    #[test]
    fn read_ignores_trailing_bytes() {
        let reader = WindowReader::new(&[0xFF, 0xFF, 0x00, 0x01]);
        assert_eq!(reader.read_i16(ByteOrder::Big).unwrap(), -1);
    }

    #[test]
    fn read_past_end_is_too_short() {
        let reader = WindowReader::new(&[1, 2, 3]);
        let err = reader.read_u32(ByteOrder::Little).unwrap_err();
        assert_eq!(
            err,
            WindowError::TooShort {
                needed: 4,
                actual: 3
            }
        );
    }

    #[test]
    fn read_u8_on_empty_window() {
        let reader = WindowReader::new(&[]);
        assert_eq!(
            reader.read_u8().unwrap_err(),
            WindowError::TooShort {
                needed: 1,
                actual: 0
            }
        );
    }

    #[test]
    fn require_len_reports_sizes() {
        let reader = WindowReader::new(&[0u8; 2]);
        assert!(reader.require_len(2).is_ok());
        let msg = reader.require_len(8).unwrap_err().to_string();
        assert!(msg.contains("need 8 bytes, got 2"));
    }

    #[test]
    fn byte_order_serializes_lowercase() {
        let json = serde_json::to_string(&ByteOrder::Big).expect("json");
        assert_eq!(json, "\"big\"");
    }
}
