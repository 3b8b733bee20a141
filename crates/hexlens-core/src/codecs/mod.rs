//! Byte-level codecs used by the catalogue.
//!
//! - `reader`: bounds-checked, byte-order-aware reads (no direct indexing)
//! - `error`: explicit, actionable errors
//! - `integer`, `minifloat`, `text`, `pokemon`: one encoding family each
//! - `number`: display rendering of floating values
//!
//! Everything here is pure; no state survives a call.

pub mod error;
pub mod integer;
pub mod minifloat;
pub mod number;
pub mod pokemon;
pub mod reader;
pub mod text;
