//! JAM message record parsing.
//!
//! Each record is a 76-byte fixed block followed by a variable-length
//! subfield block whose size is declared inside the fixed block. Subfields
//! are skipped, not interpreted: the declared length alone positions the
//! reader for the next record.

use std::io::Read;

use log::{debug, trace};

use crate::jam::layout::{self, record};
use crate::jam::reader::ReadOptions;
use crate::jam::types::error::{JamError, Result};
use crate::jam::types::models::{MessageAttributes, MessageHeader};
use crate::jam::utils;

/// Decodes one message record from a reader positioned at its first byte.
///
/// On success the reader is left immediately after the record's subfield
/// block. Validation happens in this order, all before the subfield block is
/// touched:
/// 1. 76 bytes are read (`ShortRead` otherwise)
/// 2. signature (`MissingSignature`)
/// 3. revision (`UnsupportedRevision`)
/// 4. subfield block length against `options` (`LimitExceeded`)
///
/// So a failing record leaves the reader exactly 76 bytes past its start.
pub fn decode<R: Read>(reader: &mut R, options: &ReadOptions) -> Result<MessageHeader> {
    let mut block = [0u8; record::SIZE];
    utils::read_full(reader, &mut block, "message header")?;

    if block[record::SIGNATURE..record::SIGNATURE + 4] != layout::SIGNATURE {
        return Err(JamError::MissingSignature {
            context: "message header",
        });
    }

    let revision = utils::u16_at(&block, record::REVISION);
    if revision != layout::REVISION_ONE {
        return Err(JamError::UnsupportedRevision(revision));
    }

    let header = parse_fixed_fields(&block, revision);
    trace!(
        "Message record #{}: subfields={} bytes, text at {}+{}",
        header.message_number, header.subfield_len, header.text_offset, header.text_length
    );

    utils::check_limit("subfield block length", header.subfield_len, options.max_subfield_len)?;

    utils::skip_exact(reader, u64::from(header.subfield_len), "subfield block")?;

    debug!("Decoded message header #{}", header.message_number);
    Ok(header)
}

fn parse_fixed_fields(block: &[u8; record::SIZE], revision: u16) -> MessageHeader {
    let field = |offset| utils::u32_at(block, offset);
    MessageHeader {
        revision,
        subfield_len: field(record::SUBFIELD_LEN),
        times_read: field(record::TIMES_READ),
        msgid_crc: field(record::MSGID_CRC),
        reply_crc: field(record::REPLY_CRC),
        reply_to: field(record::REPLY_TO),
        reply_first: field(record::REPLY_FIRST),
        reply_next: field(record::REPLY_NEXT),
        date_written: utils::optional_timestamp(field(record::DATE_WRITTEN)),
        date_received: utils::optional_timestamp(field(record::DATE_RECEIVED)),
        date_processed: utils::optional_timestamp(field(record::DATE_PROCESSED)),
        message_number: field(record::MESSAGE_NUMBER),
        attribute: MessageAttributes(field(record::ATTRIBUTE)),
        attribute2: field(record::ATTRIBUTE2),
        text_offset: field(record::TEXT_OFFSET),
        text_length: field(record::TEXT_LENGTH),
        password_crc: field(record::PASSWORD_CRC),
        cost: field(record::COST),
        num_subfields: 0,
        sub_fields: Vec::new(),
    }
}
