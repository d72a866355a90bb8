//! Message body extraction from the data file.

use std::io::{Read, Seek, SeekFrom};

use log::trace;

use crate::jam::reader::ReadOptions;
use crate::jam::types::error::Result;
use crate::jam::types::models::MessageHeader;
use crate::jam::utils;

/// Seeks the data source to the header's text offset and reads its body.
///
/// Fails with `LimitExceeded` if the declared length is above
/// `options.max_text_len`, and with `ShortRead` if the region extends past
/// the end of the source.
///
/// Every `\r` is rewritten to `\n`; the bytes are then decoded as UTF-8, with
/// invalid sequences replaced by U+FFFD.
pub fn read<R: Read + Seek>(
    data: &mut R,
    header: &MessageHeader,
    options: &ReadOptions,
) -> Result<String> {
    trace!(
        "Reading text for message #{}: offset={}, length={}",
        header.message_number, header.text_offset, header.text_length
    );
    utils::check_limit("text length", header.text_length, options.max_text_len)?;
    data.seek(SeekFrom::Start(u64::from(header.text_offset)))?;
    let raw = utils::read_vec(data, u64::from(header.text_length), "message text")?;
    Ok(normalize(raw))
}

/// Converts CR line endings to LF and decodes the result.
pub fn normalize(mut raw: Vec<u8>) -> String {
    for byte in raw.iter_mut().filter(|b| **b == b'\r') {
        *byte = b'\n';
    }
    match String::from_utf8(raw) {
        Ok(text) => text,
        Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
    }
}
