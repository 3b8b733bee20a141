use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalogue::{CATALOGUE, Descriptor, find_descriptor};
use crate::codecs::error::WindowError;
use crate::codecs::reader::ByteOrder;
use crate::{Inspection, Interpretation, REPORT_VERSION, ToolInfo};

#[derive(Debug, Error)]
pub enum InspectError {
    #[error("unknown interpretation label: {label}")]
    UnknownLabel { label: String },
    #[error("window error: {0}")]
    Window(#[from] WindowError),
}

/// Per-call inspection settings.
///
/// All fields are optional in serialized form.
///
/// # Examples
/// ```
/// use hexlens_core::{ByteOrder, InspectOptions};
///
/// let options: InspectOptions = serde_json::from_str(r#"{"byte_order":"big"}"#)?;
/// assert_eq!(options.byte_order, ByteOrder::Big);
/// assert!(options.labels.is_none());
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InspectOptions {
    /// Byte order for multi-byte encodings.
    pub byte_order: ByteOrder,
    /// Restrict (and order) the interpretations by label; all when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<String>>,
}

/// Apply the catalogue to `window` and collect the results.
///
/// Descriptors that need more bytes than the window holds are kept in the
/// report without a value.
///
/// # Examples
/// ```
/// use hexlens_core::{InspectOptions, inspect};
///
/// let inspection = inspect(&[0x41], &InspectOptions::default())?;
/// assert_eq!(inspection.value("UTF-8"), Some("A"));
/// assert_eq!(inspection.value("uint16"), None);
/// # Ok::<(), hexlens_core::InspectError>(())
/// ```
pub fn inspect(window: &[u8], options: &InspectOptions) -> Result<Inspection, InspectError> {
    let descriptors = select_descriptors(options.labels.as_deref())?;
    let mut interpretations = Vec::with_capacity(descriptors.len());

    for descriptor in descriptors {
        let value = if descriptor.accepts(window.len()) {
            Some(descriptor.convert(window, options.byte_order)?)
        } else {
            tracing::debug!(
                label = descriptor.label,
                needed = descriptor.min_bytes,
                actual = window.len(),
                "window too short, skipping"
            );
            None
        };
        interpretations.push(Interpretation {
            label: descriptor.label.to_string(),
            min_bytes: descriptor.min_bytes,
            value,
        });
    }

    Ok(Inspection {
        report_version: REPORT_VERSION,
        tool: ToolInfo {
            name: "hexlens".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        byte_order: options.byte_order,
        window: format_window(window),
        interpretations,
    })
}

fn select_descriptors(labels: Option<&[String]>) -> Result<Vec<&'static Descriptor>, InspectError> {
    let Some(labels) = labels else {
        return Ok(CATALOGUE.iter().collect());
    };
    labels
        .iter()
        .map(|label| {
            find_descriptor(label).ok_or_else(|| InspectError::UnknownLabel {
                label: label.clone(),
            })
        })
        .collect()
}

fn format_window(window: &[u8]) -> String {
    window
        .iter()
        .map(|b| format!("{:02X}", b))
        .collect::<Vec<_>>()
        .join(" ")
}
