//! Core JAM message base reader module.
//!
//! - [`format`]: byte-level decoders for the base and data files
//! - [`iter`]: pull-based message iteration
//! - [`stream`]: background producer with channel-based delivery
//! - [`reader`]: path-level entry point

pub mod format;
pub mod iter;
pub mod layout;
pub mod path;
pub mod reader;
pub mod stream;
pub mod types;
mod utils;

use std::io::{Read, Seek};

use types::error::Result;
use types::models::{FixedHeaderInfo, MessageHeader};

/// Decodes the 1024-byte fixed header from a source positioned at offset 0.
pub fn decode_fixed_header<R: Read>(header_src: &mut R) -> Result<FixedHeaderInfo> {
    format::fixed_header::decode(header_src)
}

/// Decodes one message record, leaving the source positioned at the next one.
pub fn decode_message_header<R: Read>(
    header_src: &mut R,
    options: &reader::ReadOptions,
) -> Result<MessageHeader> {
    format::message_header::decode(header_src, options)
}

/// Reads and normalizes the body addressed by `header` from the data source.
pub fn read_message_text<R: Read + Seek>(
    data_src: &mut R,
    header: &MessageHeader,
    options: &reader::ReadOptions,
) -> Result<String> {
    format::text::read(data_src, header, options)
}
