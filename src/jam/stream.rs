//! Background message producer.
//!
//! A producer thread owns both byte sources for the duration of one pass and
//! talks to the consumer over two single-slot channels:
//!
//! ```text
//! producer thread ──Message──→ [cap 1] ──→ MessageStream::messages()
//!                 ──JamError─→ [cap 1] ──→ MessageStream::errors()
//!                 ←─cancel────  (disconnect-only channel)
//! ```
//!
//! At most one error is ever sent, after which both channels are closed.
//! Closure with no error is a clean end of stream. Cancelling (or dropping)
//! the [`MessageStream`] disconnects the cancel channel, which wakes a
//! producer blocked on a full message slot and makes it stop.

use std::io::{Read, Seek};
use std::thread::{self, JoinHandle};

use crossbeam_channel::{Receiver, Sender, TryRecvError, bounded, select};
use log::{info, warn};

use super::iter::MessageIter;
use super::reader::ReadOptions;
use super::types::error::{JamError, Result};
use super::types::models::Message;

/// Consumer side of a background decoding pass.
///
/// Iterating yields every message the producer emitted, in record order,
/// followed by the terminal error if the pass failed.
pub struct MessageStream {
    messages: Receiver<Message>,
    errors: Receiver<JamError>,
    cancel: Option<Sender<()>>,
    handle: Option<JoinHandle<()>>,
    pending_error: Option<JamError>,
    done: bool,
}

/// Starts a background pass over already-opened sources with default options.
///
/// `header_src` must be positioned at the start of the base file.
pub fn stream_messages<H, D>(header_src: H, data_src: D) -> MessageStream
where
    H: Read + Send + 'static,
    D: Read + Seek + Send + 'static,
{
    stream_messages_with(header_src, data_src, ReadOptions::default())
}

/// Like [`stream_messages`], with explicit options.
pub fn stream_messages_with<H, D>(header_src: H, data_src: D, options: ReadOptions) -> MessageStream
where
    H: Read + Send + 'static,
    D: Read + Seek + Send + 'static,
{
    spawn(move || Ok((header_src, data_src)), options)
}

/// Spawns the producer. `open` runs on the producer thread, so failures to
/// acquire the sources are reported through the error channel.
pub(crate) fn spawn<F, H, D>(open: F, options: ReadOptions) -> MessageStream
where
    F: FnOnce() -> Result<(H, D)> + Send + 'static,
    H: Read + Send + 'static,
    D: Read + Seek + Send + 'static,
{
    let (message_tx, message_rx) = bounded(1);
    let (error_tx, error_rx) = bounded(1);
    let (cancel_tx, cancel_rx) = bounded::<()>(0);

    let handle = thread::spawn(move || {
        match produce(open, options, message_tx, cancel_rx) {
            Ok(Pass::Completed(count)) => info!("Producer finished after {} messages", count),
            Ok(Pass::Cancelled(count)) => warn!("Producer cancelled after {} messages", count),
            Err(e) => {
                warn!("Producer failed: {}", e);
                // Capacity 1 and a single send: never blocks.
                let _ = error_tx.send(e);
            }
        }
    });

    MessageStream {
        messages: message_rx,
        errors: error_rx,
        cancel: Some(cancel_tx),
        handle: Some(handle),
        pending_error: None,
        done: false,
    }
}

enum Pass {
    Completed(u32),
    Cancelled(u32),
}

fn produce<F, H, D>(
    open: F,
    options: ReadOptions,
    message_tx: Sender<Message>,
    cancel_rx: Receiver<()>,
) -> Result<Pass>
where
    F: FnOnce() -> Result<(H, D)>,
    H: Read,
    D: Read + Seek,
{
    let (header_src, data_src) = open()?;
    let mut iter = MessageIter::new(header_src, data_src, options)?;

    loop {
        if let Err(TryRecvError::Disconnected) = cancel_rx.try_recv() {
            return Ok(Pass::Cancelled(iter.emitted()));
        }
        let message = match iter.next() {
            Some(item) => item?,
            None => return Ok(Pass::Completed(iter.emitted())),
        };
        select! {
            send(message_tx, message) -> sent => {
                if sent.is_err() {
                    return Ok(Pass::Cancelled(iter.emitted()));
                }
            }
            recv(cancel_rx) -> _ => return Ok(Pass::Cancelled(iter.emitted())),
        }
    }
}

impl MessageStream {
    /// The message channel. Closes when the producer stops for any reason.
    pub fn messages(&self) -> &Receiver<Message> {
        &self.messages
    }

    /// The error channel. Carries at most one error, then closes.
    pub fn errors(&self) -> &Receiver<JamError> {
        &self.errors
    }

    /// Asks the producer to stop. Messages already buffered stay readable.
    pub fn cancel(&mut self) {
        self.cancel.take();
    }

    fn finish(&mut self) -> Option<JamError> {
        self.done = true;
        match self.handle.take().map(JoinHandle::join) {
            Some(Err(_)) => Some(JamError::ProducerPanicked),
            _ => None,
        }
    }

    /// Yields a buffered message ahead of a received error, if one is left.
    fn drain_before(&mut self, error: JamError) -> Option<Result<Message>> {
        match self.messages.try_recv() {
            Ok(message) => {
                self.pending_error = Some(error);
                Some(Ok(message))
            }
            Err(_) => {
                self.finish();
                Some(Err(error))
            }
        }
    }
}

impl Iterator for MessageStream {
    type Item = Result<Message>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        if let Some(error) = self.pending_error.take() {
            return self.drain_before(error);
        }

        let (messages, errors) = (self.messages.clone(), self.errors.clone());
        select! {
            recv(messages) -> message => match message {
                Ok(message) => Some(Ok(message)),
                Err(_) => {
                    let error = errors.recv().ok();
                    let panicked = self.finish();
                    error.or(panicked).map(Err)
                }
            },
            recv(errors) -> error => match error {
                Ok(error) => self.drain_before(error),
                Err(_) => match messages.recv() {
                    Ok(message) => Some(Ok(message)),
                    Err(_) => self.finish().map(Err),
                },
            },
        }
    }
}

impl Drop for MessageStream {
    fn drop(&mut self) {
        self.cancel();
    }
}
