//! hexlens core library: byte window interpretation for hex inspectors.
//!
//! Given a small byte window, the crate renders it under a fixed, ordered
//! catalogue of encodings: integers of 8 to 64 bits, IEEE-754 half, bfloat16,
//! single and double precision, first-character UTF-8 and UTF-16, and the
//! Generation I Pokémon character table. Conversions are pure functions of
//! the window and a byte order; the catalogue is a read-only `static` shared
//! by all callers.
//!
//! The crate is split into `codecs` (bounds-checked readers and one module per
//! encoding family), `catalogue` (the descriptor table) and `inspect` (one
//! window through the whole catalogue, as a serializable report).
//!
//! Invariants:
//! - Every descriptor converts any window of at least `min_bytes` bytes.
//! - Shorter windows are rejected with an explicit error, never read past.
//! - Inspection output is deterministic and keeps catalogue order.
//!
//! # Examples
//! ```
//! use hexlens_core::{ByteOrder, catalogue};
//!
//! let window = [0x00, 0x3C, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00];
//! for descriptor in catalogue() {
//!     let value = descriptor.convert(&window, ByteOrder::Little)?;
//!     println!("{:>12}: {}", descriptor.label, value);
//! }
//! # Ok::<(), hexlens_core::WindowError>(())
//! ```

use serde::{Deserialize, Serialize};

mod catalogue;
mod codecs;
mod inspect;

pub use catalogue::{CATALOGUE, CATALOGUE_LEN, Descriptor, catalogue, find_descriptor};
pub use codecs::error::{MiniFloatError, WindowError};
pub use codecs::integer::{UINT24_MAX, int24_from_raw, read_uint24};
pub use codecs::minifloat::{BFLOAT16, FLOAT16, MiniFloat};
pub use codecs::number::format_number;
pub use codecs::pokemon::pokemon_glyph;
pub use codecs::reader::ByteOrder;
pub use codecs::text::{first_utf8_char, first_utf16_char};
pub use inspect::{InspectError, InspectOptions, inspect};

/// Current inspection report schema version.
pub const REPORT_VERSION: u32 = 1;

/// One window rendered through the catalogue.
///
/// # Examples
/// ```
/// use hexlens_core::{ByteOrder, InspectOptions, inspect};
///
/// let options = InspectOptions {
///     byte_order: ByteOrder::Big,
///     labels: None,
/// };
/// let inspection = inspect(&[0x3F, 0x80], &options)?;
/// assert_eq!(inspection.report_version, hexlens_core::REPORT_VERSION);
/// assert_eq!(inspection.window, "3F 80");
/// assert_eq!(inspection.value("bfloat16"), Some("1"));
/// # Ok::<(), hexlens_core::InspectError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Inspection {
    /// Report schema version (not the crate version).
    pub report_version: u32,
    /// Tool identification metadata.
    pub tool: ToolInfo,
    /// Byte order used for multi-byte encodings.
    pub byte_order: ByteOrder,
    /// Inspected bytes as uppercase hex pairs separated by spaces.
    pub window: String,
    /// Results in catalogue (or requested) order.
    pub interpretations: Vec<Interpretation>,
}

impl Inspection {
    /// Rendered value for `label`, when present and computed.
    pub fn value(&self, label: &str) -> Option<&str> {
        self.interpretations
            .iter()
            .find(|entry| entry.label == label)
            .and_then(|entry| entry.value.as_deref())
    }
}

/// Tool metadata embedded in reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolInfo {
    /// Tool name ("hexlens").
    pub name: String,
    /// Tool version (semver).
    pub version: String,
}

/// A single descriptor applied to the window.
///
/// # Examples
/// ```
/// use hexlens_core::Interpretation;
///
/// let entry = Interpretation {
///     label: "uint64".to_string(),
///     min_bytes: 8,
///     value: None,
/// };
/// let json = serde_json::to_string(&entry)?;
/// assert_eq!(json, r#"{"label":"uint64","min_bytes":8}"#);
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interpretation {
    /// Descriptor label.
    pub label: String,
    /// Minimum window length the descriptor needs.
    pub min_bytes: usize,
    /// Rendered value; absent when the window is shorter than `min_bytes`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inspection_round_trips_through_json() {
        let inspection = Inspection {
            report_version: REPORT_VERSION,
            tool: ToolInfo {
                name: "hexlens".to_string(),
                version: "0.1.0".to_string(),
            },
            byte_order: ByteOrder::Little,
            window: "41".to_string(),
            interpretations: vec![
                Interpretation {
                    label: "uint8".to_string(),
                    min_bytes: 1,
                    value: Some("65".to_string()),
                },
                Interpretation {
                    label: "uint16".to_string(),
                    min_bytes: 2,
                    value: None,
                },
            ],
        };

        let value = serde_json::to_value(&inspection).expect("inspection json");
        assert_eq!(value["byte_order"], "little");
        assert!(value["interpretations"][1].get("value").is_none());

        let back: Inspection = serde_json::from_value(value).expect("parse inspection");
        assert_eq!(back, inspection);
        assert_eq!(back.value("uint8"), Some("65"));
        assert_eq!(back.value("uint16"), None);
        assert_eq!(back.value("missing"), None);
    }
}
