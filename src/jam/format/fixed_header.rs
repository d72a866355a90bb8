//! JAM base file fixed header parsing.
//!
//! ```text
//! [4 bytes]  Signature "JAM\0"
//! [4 bytes]  Creation date (unix seconds)
//! [4 bytes]  Update counter
//! [4 bytes]  Active message count
//! [4 bytes]  Password CRC (not decoded)
//! [4 bytes]  Base message number
//! [1000 bytes] Reserved
//! ```

use std::io::Read;

use log::{debug, trace};

use crate::jam::layout::{self, fixed};
use crate::jam::types::error::{JamError, Result};
use crate::jam::types::models::FixedHeaderInfo;
use crate::jam::utils;

/// Decodes the 1024-byte fixed header from a reader positioned at offset 0.
///
/// Consumes exactly 1024 bytes on success.
///
/// # Errors
/// - `ShortRead` if fewer than 1024 bytes are available
/// - `MissingSignature` if the block does not start with `JAM\0`
pub fn decode<R: Read>(reader: &mut R) -> Result<FixedHeaderInfo> {
    let mut block = [0u8; fixed::SIZE];
    utils::read_full(reader, &mut block, "fixed header")?;

    if block[fixed::SIGNATURE..fixed::SIGNATURE + 4] != layout::SIGNATURE {
        return Err(JamError::MissingSignature {
            context: "fixed header",
        });
    }

    let raw_date = utils::u32_at(&block, fixed::DATE_CREATED);
    trace!("Fixed header raw creation date: {}", raw_date);

    let info = FixedHeaderInfo {
        date_created: utils::timestamp(raw_date),
        update_counter: utils::u32_at(&block, fixed::UPDATE_COUNTER),
        active_messages: utils::u32_at(&block, fixed::ACTIVE_MESSAGES),
        base_message_number: utils::u32_at(&block, fixed::BASE_MESSAGE_NUMBER),
    };

    debug!(
        "Fixed header: created={}, updates={}, active={}, base={}",
        info.date_created, info.update_counter, info.active_messages, info.base_message_number
    );
    Ok(info)
}
