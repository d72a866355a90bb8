//! Byte-level builders for synthetic JAM bases.
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

pub const CREATED: u32 = 1_600_000_000;

pub fn fixed_header(active_messages: u32, update_counter: u32, base_message_number: u32) -> Vec<u8> {
    let mut block = vec![0u8; 1024];
    block[0..4].copy_from_slice(b"JAM\0");
    block[4..8].copy_from_slice(&CREATED.to_le_bytes());
    block[8..12].copy_from_slice(&update_counter.to_le_bytes());
    block[12..16].copy_from_slice(&active_messages.to_le_bytes());
    block[16..20].copy_from_slice(&0xDEAD_BEEFu32.to_le_bytes());
    block[20..24].copy_from_slice(&base_message_number.to_le_bytes());
    block
}

/// Field values for one message record.
#[derive(Debug, Clone)]
pub struct Record {
    pub revision: u16,
    pub message_number: u32,
    pub reply_to: u32,
    pub reply_first: u32,
    pub reply_next: u32,
    pub date_written: u32,
    pub attribute: u32,
    pub text_offset: u32,
    pub text_length: u32,
    pub subfields: Vec<u8>,
}

impl Record {
    pub fn new(message_number: u32, text_offset: u32, text_length: u32) -> Self {
        Self {
            revision: 1,
            message_number,
            reply_to: 0,
            reply_first: 0,
            reply_next: 0,
            date_written: CREATED + message_number,
            attribute: 0,
            text_offset,
            text_length,
            subfields: sample_subfields(message_number),
        }
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut block = vec![0u8; 76];
        let mut put = |offset: usize, value: u32| {
            block[offset..offset + 4].copy_from_slice(&value.to_le_bytes());
        };
        put(8, self.subfields.len() as u32);
        put(12, 3);
        put(24, self.reply_to);
        put(28, self.reply_first);
        put(32, self.reply_next);
        put(36, self.date_written);
        put(48, self.message_number);
        put(52, self.attribute);
        put(60, self.text_offset);
        put(64, self.text_length);
        put(72, 42);
        block[0..4].copy_from_slice(b"JAM\0");
        block[4..6].copy_from_slice(&self.revision.to_le_bytes());
        block.extend_from_slice(&self.subfields);
        block
    }
}

/// A subfield block shaped like the real thing: (LoID, HiID, datlen, data).
pub fn sample_subfields(seed: u32) -> Vec<u8> {
    let text = format!("1:2/{} 5f3a{:04x}", seed, seed);
    let mut block = Vec::new();
    block.extend_from_slice(&4u16.to_le_bytes());
    block.extend_from_slice(&0u16.to_le_bytes());
    block.extend_from_slice(&(text.len() as u32).to_le_bytes());
    block.extend_from_slice(text.as_bytes());
    block
}

/// An in-memory base: header file bytes plus data file bytes.
pub struct Base {
    pub header: Vec<u8>,
    pub data: Vec<u8>,
    pub records: Vec<Record>,
}

impl Base {
    /// Builds a base whose records point at `bodies` laid out back to back.
    pub fn with_bodies(bodies: &[&str]) -> Self {
        let mut data = Vec::new();
        let mut records = Vec::new();
        for (i, body) in bodies.iter().enumerate() {
            let record = Record::new(i as u32 + 1, data.len() as u32, body.len() as u32);
            data.extend_from_slice(body.as_bytes());
            records.push(record);
        }
        Self::from_records(records, data)
    }

    pub fn from_records(records: Vec<Record>, data: Vec<u8>) -> Self {
        let mut header = fixed_header(records.len() as u32, 7, 1);
        for record in &records {
            header.extend_from_slice(&record.to_bytes());
        }
        Self {
            header,
            data,
            records,
        }
    }

    /// Writes `<dir>/<stem>.jhr` and `<dir>/<stem>.jdt`, returning the header path.
    pub fn write_to(&self, dir: &Path, stem: &str) -> PathBuf {
        let header_path = dir.join(format!("{}.jhr", stem));
        fs::write(&header_path, &self.header).expect("write header file");
        fs::write(dir.join(format!("{}.jdt", stem)), &self.data).expect("write data file");
        header_path
    }
}
