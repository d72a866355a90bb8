//! On-disk layout of JAM base files.
//!
//! ```text
//! Base file (.jhr):
//! ┌──────────────────────┐
//! │  Fixed header        │ 1024 bytes
//! ├──────────────────────┤
//! │  Message record      │ 76 bytes
//! │  Subfield block      │ subfield_len bytes
//! ├──────────────────────┤
//! │  ...                 │
//! └──────────────────────┘
//!
//! Data file (.jdt): raw bodies, addressed by (text_offset, text_length).
//! ```
//!
//! All integers are little-endian.

/// Magic shared by the fixed header and every message record.
pub const SIGNATURE: [u8; 4] = *b"JAM\0";

/// The only message record revision this crate decodes.
pub const REVISION_ONE: u16 = 1;

/// Fixed header field offsets.
pub mod fixed {
    pub const SIZE: usize = 1024;

    pub const SIGNATURE: usize = 0;
    pub const DATE_CREATED: usize = 4;
    pub const UPDATE_COUNTER: usize = 8;
    pub const ACTIVE_MESSAGES: usize = 12;
    // 16..20 holds the password CRC, which is not decoded.
    pub const BASE_MESSAGE_NUMBER: usize = 20;
}

/// Message record field offsets.
pub mod record {
    pub const SIZE: usize = 76;

    pub const SIGNATURE: usize = 0;
    pub const REVISION: usize = 4;
    // 6..8 is a reserved word.
    pub const SUBFIELD_LEN: usize = 8;
    pub const TIMES_READ: usize = 12;
    pub const MSGID_CRC: usize = 16;
    pub const REPLY_CRC: usize = 20;
    pub const REPLY_TO: usize = 24;
    pub const REPLY_FIRST: usize = 28;
    pub const REPLY_NEXT: usize = 32;
    pub const DATE_WRITTEN: usize = 36;
    pub const DATE_RECEIVED: usize = 40;
    pub const DATE_PROCESSED: usize = 44;
    pub const MESSAGE_NUMBER: usize = 48;
    pub const ATTRIBUTE: usize = 52;
    pub const ATTRIBUTE2: usize = 56;
    pub const TEXT_OFFSET: usize = 60;
    pub const TEXT_LENGTH: usize = 64;
    pub const PASSWORD_CRC: usize = 68;
    pub const COST: usize = 72;
}
