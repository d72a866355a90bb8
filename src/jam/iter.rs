//! Pull-based sequential access to the messages of a base.
//!
//! # Example
//! ```no_run
//! # use jambase::JamBase;
//! let base = JamBase::new("general.jhr").unwrap();
//! for result in base.messages().unwrap() {
//!     let message = result.unwrap();
//!     println!("#{}: {}", message.header.message_number, message.text);
//! }
//! ```

use std::io::{Read, Seek};

use log::{debug, info};

use super::format::{fixed_header, message_header, text};
use super::reader::ReadOptions;
use super::types::error::Result;
use super::types::models::{FixedHeaderInfo, Message};

/// Iterator over the messages of a base, in on-disk record order.
///
/// Yields at most `active_messages` items. The first error is yielded once
/// and ends the iteration; there is no attempt to resynchronize after a bad
/// record. Not restartable: a new pass needs fresh sources.
pub struct MessageIter<H, D> {
    header_src: H,
    data_src: D,
    options: ReadOptions,
    fixed_header: FixedHeaderInfo,
    emitted: u32,
    finished: bool,
}

impl<H: Read, D: Read + Seek> MessageIter<H, D> {
    /// Decodes the fixed header from `header_src` and prepares to read
    /// records from the position right after it.
    pub fn new(mut header_src: H, data_src: D, options: ReadOptions) -> Result<Self> {
        let fixed_header = fixed_header::decode(&mut header_src)?;
        info!(
            "Reading {} active messages (base number {})",
            fixed_header.active_messages, fixed_header.base_message_number
        );
        Ok(Self {
            header_src,
            data_src,
            options,
            fixed_header,
            emitted: 0,
            finished: false,
        })
    }

    /// The fixed header decoded when the iterator was created.
    pub fn fixed_header(&self) -> &FixedHeaderInfo {
        &self.fixed_header
    }

    /// Number of messages successfully yielded so far.
    pub fn emitted(&self) -> u32 {
        self.emitted
    }

    fn read_next(&mut self) -> Result<Message> {
        let header = message_header::decode(&mut self.header_src, &self.options)?;
        let text = text::read(&mut self.data_src, &header, &self.options)?;
        Ok(Message { header, text })
    }
}

impl<H: Read, D: Read + Seek> Iterator for MessageIter<H, D> {
    type Item = Result<Message>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        if self.emitted >= self.fixed_header.active_messages {
            self.finished = true;
            info!("Finished reading {} messages", self.emitted);
            return None;
        }

        match self.read_next() {
            Ok(message) => {
                self.emitted += 1;
                Some(Ok(message))
            }
            Err(e) => {
                debug!("Stopping after {} messages: {}", self.emitted, e);
                self.finished = true;
                Some(Err(e))
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.finished {
            return (0, Some(0));
        }
        let remaining = (self.fixed_header.active_messages - self.emitted) as usize;
        (0, Some(remaining))
    }
}
