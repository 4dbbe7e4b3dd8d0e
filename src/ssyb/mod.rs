//! Decoder for the SSYB subcode packets of a raw DV file header.
//!
//! The [decode_header] function can be used to extract the recording
//! date and time from the first [HEADER_LEN] bytes of a DV file.

mod consts;
mod decode;

pub use consts::{HEADER_LEN, MIN_HEADER_LEN};
pub use decode::*;
