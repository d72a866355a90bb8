//! Core data structures for JAM message base components.
//!
//! This module defines the value types produced by the decoders:
//! - The fixed header summary of a base file
//! - Per-message metadata and its attribute bitmask
//! - Fully assembled messages (metadata + body text)

use std::fmt;

use chrono::{DateTime, Utc};

/// Summary of a JAM base file, decoded from its 1024-byte fixed header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedHeaderInfo {
    /// When the base was created (UTC).
    pub date_created: DateTime<Utc>,
    /// Incremented every time the base is updated.
    pub update_counter: u32,
    /// Number of active (non-purged) messages; bounds a streaming pass.
    pub active_messages: u32,
    /// Lowest message number in use.
    pub base_message_number: u32,
}

/// A single subfield attached to a message record.
///
/// Subfield blocks are skipped by the record decoder, so headers produced by
/// this crate never carry any; the type exists so callers can model them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageHeaderSubfield {
    pub field_id: u16,
    pub field_value: String,
}

/// Message attribute word (`Attribute` in the record layout).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct MessageAttributes(pub u32);

impl MessageAttributes {
    pub const LOCAL: u32 = 0x0000_0001;
    pub const IN_TRANSIT: u32 = 0x0000_0002;
    pub const PRIVATE: u32 = 0x0000_0004;
    pub const READ: u32 = 0x0000_0008;
    pub const SENT: u32 = 0x0000_0010;
    pub const KILL_SENT: u32 = 0x0000_0020;
    pub const ARCHIVE_SENT: u32 = 0x0000_0040;
    pub const HOLD: u32 = 0x0000_0080;
    pub const CRASH: u32 = 0x0000_0100;
    pub const IMMEDIATE: u32 = 0x0000_0200;
    pub const DIRECT: u32 = 0x0000_0400;
    pub const GATE: u32 = 0x0000_0800;
    pub const FILE_REQUEST: u32 = 0x0000_1000;
    pub const FILE_ATTACH: u32 = 0x0000_2000;
    pub const TRUNCATE_FILE: u32 = 0x0000_4000;
    pub const KILL_FILE: u32 = 0x0000_8000;
    pub const RECEIPT_REQUEST: u32 = 0x0001_0000;
    pub const CONFIRM_REQUEST: u32 = 0x0002_0000;
    pub const ORPHAN: u32 = 0x0004_0000;
    pub const ENCRYPT: u32 = 0x0008_0000;
    pub const COMPRESS: u32 = 0x0010_0000;
    pub const ESCAPED: u32 = 0x0020_0000;
    pub const FORCE_PICKUP: u32 = 0x0040_0000;
    pub const TYPE_LOCAL: u32 = 0x0080_0000;
    pub const TYPE_ECHO: u32 = 0x0100_0000;
    pub const TYPE_NET: u32 = 0x0200_0000;
    pub const NO_DISPLAY: u32 = 0x2000_0000;
    pub const LOCKED: u32 = 0x4000_0000;
    pub const DELETED: u32 = 0x8000_0000;

    const NAMES: &'static [(u32, &'static str)] = &[
        (Self::LOCAL, "local"),
        (Self::IN_TRANSIT, "in-transit"),
        (Self::PRIVATE, "private"),
        (Self::READ, "read"),
        (Self::SENT, "sent"),
        (Self::KILL_SENT, "kill-sent"),
        (Self::ARCHIVE_SENT, "archive-sent"),
        (Self::HOLD, "hold"),
        (Self::CRASH, "crash"),
        (Self::IMMEDIATE, "immediate"),
        (Self::DIRECT, "direct"),
        (Self::GATE, "gate"),
        (Self::FILE_REQUEST, "file-request"),
        (Self::FILE_ATTACH, "file-attach"),
        (Self::TRUNCATE_FILE, "truncate-file"),
        (Self::KILL_FILE, "kill-file"),
        (Self::RECEIPT_REQUEST, "receipt-request"),
        (Self::CONFIRM_REQUEST, "confirm-request"),
        (Self::ORPHAN, "orphan"),
        (Self::ENCRYPT, "encrypt"),
        (Self::COMPRESS, "compress"),
        (Self::ESCAPED, "escaped"),
        (Self::FORCE_PICKUP, "force-pickup"),
        (Self::TYPE_LOCAL, "type-local"),
        (Self::TYPE_ECHO, "type-echo"),
        (Self::TYPE_NET, "type-net"),
        (Self::NO_DISPLAY, "no-display"),
        (Self::LOCKED, "locked"),
        (Self::DELETED, "deleted"),
    ];

    /// Returns `true` if every bit in `flags` is set.
    pub fn contains(&self, flags: u32) -> bool {
        self.0 & flags == flags
    }

    pub fn is_deleted(&self) -> bool {
        self.contains(Self::DELETED)
    }
}

impl fmt::Display for MessageAttributes {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let names: Vec<&str> = Self::NAMES
            .iter()
            .filter(|(bit, _)| self.contains(*bit))
            .map(|(_, name)| *name)
            .collect();
        if names.is_empty() {
            write!(f, "none")
        } else {
            write!(f, "{}", names.join(","))
        }
    }
}

/// Metadata for one message, decoded from a 76-byte record plus its
/// (skipped) subfield block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageHeader {
    pub revision: u16,
    /// Declared byte length of the subfield block that follows the record.
    pub subfield_len: u32,
    pub times_read: u32,
    pub msgid_crc: u32,
    pub reply_crc: u32,
    /// Message this one replies to; 0 means none.
    pub reply_to: u32,
    /// First reply to this message; 0 means none.
    pub reply_first: u32,
    /// Next message in the reply chain; 0 means none.
    pub reply_next: u32,
    pub date_written: Option<DateTime<Utc>>,
    pub date_received: Option<DateTime<Utc>>,
    pub date_processed: Option<DateTime<Utc>>,
    /// 1-based message number.
    pub message_number: u32,
    pub attribute: MessageAttributes,
    pub attribute2: u32,
    /// Absolute byte offset of the body in the data file.
    pub text_offset: u32,
    /// Byte length of the body in the data file.
    pub text_length: u32,
    pub password_crc: u32,
    pub cost: u32,
    pub num_subfields: u32,
    pub sub_fields: Vec<MessageHeaderSubfield>,
}

/// A message header paired with its decoded body text.
///
/// Body line endings are normalized from `\r` to `\n`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub header: MessageHeader,
    pub text: String,
}
