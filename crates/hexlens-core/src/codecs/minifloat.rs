//! Reduced-precision binary floating point.
//!
//! A `MiniFloat` describes a 16-bit layout with a sign bit at bit 15, an
//! exponent field of `exponent_width` bits and a significand field of
//! `significand_width` bits in the low bits. Decoding follows IEEE-754
//! rules generalised to the given split: a zero exponent field is subnormal,
//! an all-ones exponent field is infinity or NaN.

use super::error::{MiniFloatError, WindowError};
use super::reader::{ByteOrder, WindowReader};

const SIGN_BIT: u16 = 0x8000;
const MAX_FIELD_BITS: u32 = 15;

/// IEEE-754 binary16 (half precision).
pub const FLOAT16: MiniFloat = MiniFloat::new(5, 10);
/// bfloat16: the upper half of an IEEE-754 binary32.
pub const BFLOAT16: MiniFloat = MiniFloat::new(8, 7);

/// Precomputed masks for one reduced-precision layout.
///
/// # Examples
/// ```
/// use hexlens_core::{BFLOAT16, ByteOrder, FLOAT16, MiniFloat};
///
/// assert_eq!(BFLOAT16.decode_window(&[0x3F, 0x80], ByteOrder::Big)?, 1.0);
/// assert!(FLOAT16.decode(0x7C00).is_infinite());
///
/// let e4m3 = MiniFloat::try_new(4, 3)?;
/// assert_eq!(e4m3.decode(0x38), 1.0);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MiniFloat {
    exponent_width: u32,
    significand_width: u32,
    exponent_mask: u16,
    fraction_mask: u16,
    exponent_all_ones: u16,
    exponent_bias: i32,
    exponent_min: i32,
}

impl MiniFloat {
    /// Build a layout usable in constant context.
    ///
    /// # Panics
    /// Panics when either width is zero or the widths sum past 15 bits. In a
    /// `const` item this is reported at compile time; use [`MiniFloat::try_new`]
    /// for widths known only at run time.
    pub const fn new(exponent_width: u32, significand_width: u32) -> Self {
        match Self::try_new(exponent_width, significand_width) {
            Ok(layout) => layout,
            Err(_) => panic!("invalid minifloat widths"),
        }
    }

    pub const fn try_new(
        exponent_width: u32,
        significand_width: u32,
    ) -> Result<Self, MiniFloatError> {
        if exponent_width == 0
            || significand_width == 0
            || exponent_width > MAX_FIELD_BITS
            || significand_width > MAX_FIELD_BITS
            || exponent_width + significand_width > MAX_FIELD_BITS
        {
            return Err(MiniFloatError::InvalidWidths {
                exponent_width,
                significand_width,
            });
        }
        let exponent_all_ones = ((1u32 << exponent_width) - 1) as u16;
        let exponent_bias = (1i32 << (exponent_width - 1)) - 1;
        Ok(Self {
            exponent_width,
            significand_width,
            exponent_mask: exponent_all_ones << significand_width,
            fraction_mask: ((1u32 << significand_width) - 1) as u16,
            exponent_all_ones,
            exponent_bias,
            exponent_min: 1 - exponent_bias,
        })
    }

    pub fn exponent_width(&self) -> u32 {
        self.exponent_width
    }

    pub fn significand_width(&self) -> u32 {
        self.significand_width
    }

    pub fn exponent_bias(&self) -> i32 {
        self.exponent_bias
    }

    /// Decode a raw 16-bit pattern.
    pub fn decode(&self, raw: u16) -> f64 {
        let sign = if raw & SIGN_BIT != 0 { -1.0 } else { 1.0 };
        let exponent = (raw & self.exponent_mask) >> self.significand_width;
        let fraction =
            f64::from(raw & self.fraction_mask) / f64::from(1u32 << self.significand_width);

        if exponent == 0 {
            sign * 2f64.powi(self.exponent_min) * fraction
        } else if exponent == self.exponent_all_ones {
            if fraction != 0.0 {
                f64::NAN
            } else {
                sign * f64::INFINITY
            }
        } else {
            sign * 2f64.powi(i32::from(exponent) - self.exponent_bias) * (1.0 + fraction)
        }
    }

    /// Decode the first two bytes of `window`.
    pub fn decode_window(&self, window: &[u8], order: ByteOrder) -> Result<f64, WindowError> {
        let raw = WindowReader::new(window).read_u16(order)?;
        Ok(self.decode(raw))
    }

    /// Return a decoder closure over byte windows that captures this layout.
    pub fn decoder(self) -> impl Fn(&[u8], ByteOrder) -> Result<f64, WindowError> + Copy {
        move |window, order| self.decode_window(window, order)
    }
}

#[cfg(test)]
mod tests {
    use super::{BFLOAT16, FLOAT16, MiniFloat};
    use crate::codecs::reader::ByteOrder;

    #[test]
    fn half_precision_constants() {
        assert_eq!(FLOAT16.exponent_bias(), 15);
        assert_eq!(FLOAT16.decode(0x3C00), 1.0);
        assert_eq!(FLOAT16.decode(0xC000), -2.0);
        assert_eq!(FLOAT16.decode(0x7BFF), 65504.0);
        assert_eq!(FLOAT16.decode(0x0000), 0.0);
    }

    #[test]
    fn half_precision_subnormal() {
        assert_eq!(FLOAT16.decode(0x0001), 2f64.powi(-24));
        assert_eq!(FLOAT16.decode(0x03FF), 2f64.powi(-14) * (1023.0 / 1024.0));
    }

    #[test]
    fn half_precision_specials() {
        assert_eq!(FLOAT16.decode(0x7C00), f64::INFINITY);
        assert_eq!(FLOAT16.decode(0xFC00), f64::NEG_INFINITY);
        assert!(FLOAT16.decode(0x7C01).is_nan());
    }

    #[test]
    fn half_precision_window_order() {
        let decode = FLOAT16.decoder();
        assert_eq!(decode(&[0x00, 0x3C][..], ByteOrder::Little).unwrap(), 1.0);
        assert_eq!(decode(&[0x3C, 0x00][..], ByteOrder::Big).unwrap(), 1.0);
        assert!(decode(&[0x3C][..], ByteOrder::Big).is_err());
    }

    #[test]
    fn bfloat16_matches_f32_upper_half() {
        for value in [1.0f32, -3.5, 0.15625, 1.0e10] {
            let upper = (value.to_bits() >> 16) as u16;
            let expected = f64::from(f32::from_bits(u32::from(upper) << 16));
            assert_eq!(BFLOAT16.decode(upper), expected);
        }
        assert_eq!(
            BFLOAT16.decode_window(&[0x3F, 0x80], ByteOrder::Big).unwrap(),
            1.0
        );
    }

    #[test]
    fn rejects_invalid_widths() {
        assert!(MiniFloat::try_new(0, 10).is_err());
        assert!(MiniFloat::try_new(5, 0).is_err());
        assert!(MiniFloat::try_new(8, 8).is_err());
        assert!(MiniFloat::try_new(u32::MAX, 1).is_err());
        assert!(MiniFloat::try_new(1, u32::MAX).is_err());
        assert!(MiniFloat::try_new(u32::MAX, u32::MAX).is_err());
        assert!(MiniFloat::try_new(8, 7).is_ok());
    }
}
