//! File format parsing layer for JAM message bases.
//!
//! This module provides the decoding layer that bridges between raw byte
//! sources and the message iterators.
//!
//! # Module Organization
//!
//! - [`fixed_header`]: Decodes the 1024-byte base file header
//! - [`message_header`]: Decodes one message record and skips its subfields
//! - [`text`]: Extracts and normalizes message bodies from the data file
//!
//! # Architecture
//!
//! ```text
//! Base file (.jhr)            Data file (.jdt)
//! ┌─────────────────┐
//! │  Fixed header   │ ← fixed_header::decode()
//! ├─────────────────┤
//! │  Record         │ ← message_header::decode()
//! │  + subfields    │ ──(offset, length)──→ text::read()
//! ├─────────────────┤
//! │  Record ...     │
//! └─────────────────┘
//! ```

pub mod fixed_header;
pub mod message_header;
pub mod text;
