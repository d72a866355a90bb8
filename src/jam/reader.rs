//! Path-level entry point: opens a base's files and configures decoding.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use log::info;

use super::format::fixed_header;
use super::iter::MessageIter;
use super::path::related_path;
use super::stream::{self, MessageStream};
use super::types::error::Result;
use super::types::models::FixedHeaderInfo;

/// Extension of the text data file, relative to a `.jhr` header file.
pub const DATA_EXTENSION: &str = "jdt";

/// Tunables for decoding a base.
#[derive(Debug, Clone)]
pub struct ReadOptions {
    /// Largest subfield block a record may declare before decoding fails
    /// with `LimitExceeded`.
    pub max_subfield_len: u32,
    /// Largest message body a record may declare.
    pub max_text_len: u32,
    /// Extension used to derive the data file path.
    pub data_extension: String,
}

impl Default for ReadOptions {
    fn default() -> Self {
        Self {
            max_subfield_len: 1024 * 1024,
            max_text_len: 16 * 1024 * 1024,
            data_extension: DATA_EXTENSION.to_string(),
        }
    }
}

/// File handle pair used by path-based passes.
pub type FileSources = (BufReader<File>, File);

/// A JAM message base on disk, identified by its header file path.
///
/// Construction only derives the companion data path; files are opened
/// fresh by every operation, so each pass starts at the beginning.
#[derive(Debug, Clone)]
pub struct JamBase {
    header_path: PathBuf,
    data_path: PathBuf,
    options: ReadOptions,
}

impl JamBase {
    /// Creates a base for `header_path` (`*.jhr` or `*.JHR`) with default options.
    ///
    /// # Errors
    /// Returns `UnsupportedExtension` if the companion path cannot be derived.
    pub fn new(header_path: impl AsRef<Path>) -> Result<Self> {
        Self::with_options(header_path, ReadOptions::default())
    }

    pub fn with_options(header_path: impl AsRef<Path>, options: ReadOptions) -> Result<Self> {
        let header_path = header_path.as_ref().to_path_buf();
        let data_path = related_path(&header_path, &options.data_extension)?;
        Ok(Self {
            header_path,
            data_path,
            options,
        })
    }

    pub fn header_path(&self) -> &Path {
        &self.header_path
    }

    pub fn data_path(&self) -> &Path {
        &self.data_path
    }

    pub fn options(&self) -> &ReadOptions {
        &self.options
    }

    /// Reads only the fixed header. The data file is not touched.
    pub fn read_fixed_header(&self) -> Result<FixedHeaderInfo> {
        info!("Reading JAM fixed header: {}", self.header_path.display());
        let mut file = File::open(&self.header_path)?;
        fixed_header::decode(&mut file)
    }

    /// Opens both files and returns a pull-based iterator over the messages.
    pub fn messages(&self) -> Result<MessageIter<BufReader<File>, File>> {
        let (header_src, data_src) = self.open()?;
        MessageIter::new(header_src, data_src, self.options.clone())
    }

    /// Starts a background pass. Files are opened on the producer thread, so
    /// open failures arrive on the error channel like any other failure.
    pub fn stream(&self) -> MessageStream {
        let base = self.clone();
        stream::spawn(move || base.open(), self.options.clone())
    }

    fn open(&self) -> Result<FileSources> {
        info!(
            "Opening JAM base: header={}, data={}",
            self.header_path.display(),
            self.data_path.display()
        );
        let header_src = BufReader::new(File::open(&self.header_path)?);
        let data_src = File::open(&self.data_path)?;
        Ok((header_src, data_src))
    }
}
