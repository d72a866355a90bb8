//! # jambase
//!
//! A reader for JAM message bases, the FidoNet-era format that stores message
//! metadata in a `.jhr` header file and bodies in a companion `.jdt` file.
//!
//! Messages can be consumed through a pull-based iterator
//! ([`JamBase::messages`]) or from a background producer thread
//! ([`JamBase::stream`]). Both stop at the first error.
pub mod jam;

// Re-export the main types for convenience
pub use jam::{
    decode_fixed_header,
    decode_message_header,
    iter::MessageIter,
    path::related_path,
    read_message_text,
    reader::{DATA_EXTENSION, JamBase, ReadOptions},
    stream::{MessageStream, stream_messages, stream_messages_with},
    types::{
        error::{JamError, Result},
        models::{FixedHeaderInfo, Message, MessageAttributes, MessageHeader, MessageHeaderSubfield},
    },
};
