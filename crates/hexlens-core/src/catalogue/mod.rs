//! The byte interpretation catalogue.
//!
//! A fixed, ordered table of descriptors. Each descriptor names one encoding,
//! the minimum window length it needs, and a pure conversion from a byte
//! window to a display string. The order of `CATALOGUE` is display order.
//!
//! Conversions never fail on a window of at least `min_bytes` bytes; shorter
//! windows are rejected with `WindowError::TooShort` before any byte is read.

mod entries;

use crate::codecs::error::WindowError;
use crate::codecs::reader::{ByteOrder, WindowReader};

type Converter = fn(&WindowReader<'_>, ByteOrder) -> Result<String, WindowError>;

/// One entry of the catalogue.
///
/// # Examples
/// ```
/// use hexlens_core::{ByteOrder, find_descriptor};
///
/// let binary = find_descriptor("binary").expect("binary descriptor");
/// assert_eq!(binary.min_bytes, 1);
/// assert_eq!(binary.convert(&[0x05], ByteOrder::Little)?, "00000101");
/// # Ok::<(), hexlens_core::WindowError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Descriptor {
    /// Display name, unique within the catalogue.
    pub label: &'static str,
    /// Minimum window length accepted by `convert`.
    pub min_bytes: usize,
    converter: Converter,
}

impl Descriptor {
    const fn new(label: &'static str, min_bytes: usize, converter: Converter) -> Self {
        Self {
            label,
            min_bytes,
            converter,
        }
    }

    /// Render `window` under this encoding.
    ///
    /// Endian-insensitive encodings ignore `order`.
    pub fn convert(&self, window: &[u8], order: ByteOrder) -> Result<String, WindowError> {
        let reader = WindowReader::new(window);
        reader.require_len(self.min_bytes)?;
        let value = (self.converter)(&reader, order)?;
        tracing::trace!(label = self.label, ?order, %value, "converted window");
        Ok(value)
    }

    /// Whether a window of `len` bytes satisfies this descriptor.
    pub fn accepts(&self, len: usize) -> bool {
        len >= self.min_bytes
    }
}

/// Number of descriptors in the catalogue.
pub const CATALOGUE_LEN: usize = 19;

/// Every descriptor, in display order.
pub static CATALOGUE: [Descriptor; CATALOGUE_LEN] = [
    Descriptor::new("binary", 1, entries::binary),
    Descriptor::new("octal", 1, entries::octal),
    Descriptor::new("uint8", 1, entries::uint8),
    Descriptor::new("int8", 1, entries::int8),
    Descriptor::new("uint16", 2, entries::uint16),
    Descriptor::new("int16", 2, entries::int16),
    Descriptor::new("uint24", 3, entries::uint24),
    Descriptor::new("int24", 3, entries::int24),
    Descriptor::new("uint32", 4, entries::uint32),
    Descriptor::new("int32", 4, entries::int32),
    Descriptor::new("int64", 8, entries::int64),
    Descriptor::new("uint64", 8, entries::uint64),
    Descriptor::new("float16", 2, entries::float16),
    Descriptor::new("bfloat16", 2, entries::bfloat16),
    Descriptor::new("float32", 4, entries::float32),
    Descriptor::new("float64", 8, entries::float64),
    Descriptor::new("UTF-8", 1, entries::utf8),
    Descriptor::new("UTF-16", 2, entries::utf16),
    Descriptor::new("Pokemon Char", 1, entries::pokemon),
];

/// The catalogue as a slice.
pub fn catalogue() -> &'static [Descriptor] {
    &CATALOGUE
}

/// Find a descriptor by its exact label.
pub fn find_descriptor(label: &str) -> Option<&'static Descriptor> {
    CATALOGUE.iter().find(|descriptor| descriptor.label == label)
}
