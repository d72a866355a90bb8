//! Low-level byte reading utilities

use std::io::{self, ErrorKind, Read};

use byteorder::{ByteOrder, LittleEndian};
use chrono::{DateTime, Utc};

use super::types::error::{JamError, Result};

/// Fill `buf` completely, or fail with `ShortRead` reporting how many bytes
/// were actually available.
///
/// Unlike `read_exact`, a truncated source is a format error rather than an
/// I/O error, and the number of bytes found is preserved.
pub fn read_full(reader: &mut impl Read, buf: &mut [u8], context: &'static str) -> Result<()> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        }
    }
    if filled != buf.len() {
        return Err(JamError::ShortRead {
            context,
            expected: buf.len() as u64,
            found: filled as u64,
        });
    }
    Ok(())
}

/// Read exactly `len` bytes into a fresh buffer.
///
/// The buffer grows as data arrives, so a bogus `len` on a short source
/// never allocates more than the source actually holds.
pub fn read_vec(reader: &mut impl Read, len: u64, context: &'static str) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let found = reader.by_ref().take(len).read_to_end(&mut buf)? as u64;
    if found != len {
        return Err(JamError::ShortRead {
            context,
            expected: len,
            found,
        });
    }
    Ok(buf)
}

/// Consume and discard exactly `len` bytes.
pub fn skip_exact(reader: &mut impl Read, len: u64, context: &'static str) -> Result<()> {
    let found = io::copy(&mut reader.by_ref().take(len), &mut io::sink())?;
    if found != len {
        return Err(JamError::ShortRead {
            context,
            expected: len,
            found,
        });
    }
    Ok(())
}

/// Reject a declared length larger than the configured limit.
pub fn check_limit(field: &'static str, declared: u32, limit: u32) -> Result<()> {
    if declared > limit {
        return Err(JamError::LimitExceeded {
            field,
            declared: u64::from(declared),
            limit: u64::from(limit),
        });
    }
    Ok(())
}

/// Read a little-endian u32 at `offset` within a decoded block.
pub fn u32_at(block: &[u8], offset: usize) -> u32 {
    LittleEndian::read_u32(&block[offset..offset + 4])
}

/// Read a little-endian u16 at `offset` within a decoded block.
pub fn u16_at(block: &[u8], offset: usize) -> u16 {
    LittleEndian::read_u16(&block[offset..offset + 2])
}

/// Convert a unix timestamp field to UTC.
pub fn timestamp(secs: u32) -> DateTime<Utc> {
    DateTime::from_timestamp(i64::from(secs), 0).unwrap_or_default()
}

/// Like [`timestamp`], but 0 means "never set".
pub fn optional_timestamp(secs: u32) -> Option<DateTime<Utc>> {
    (secs != 0).then(|| timestamp(secs))
}
