//! Shared helpers for watermark-studio-fonts integration tests.
//!
//! Builds small but structurally valid TrueType files in memory so tests
//! don't depend on fonts installed on the machine.

#![allow(dead_code)]

use std::fs;
use std::path::Path;

pub const UNITS_PER_EM: u16 = 1000;
pub const ADVANCE: u16 = 600;
pub const ASCENDER: i16 = 800;
pub const DESCENDER: i16 = -200;

/// One `name` table record.
#[derive(Clone)]
pub struct NameEntry {
    pub platform_id: u16,
    pub encoding_id: u16,
    pub language_id: u16,
    pub name_id: u16,
    pub bytes: Vec<u8>,
}

impl NameEntry {
    /// Windows Unicode BMP record (3, 1, en-US).
    pub fn windows(name_id: u16, text: &str) -> Self {
        Self {
            platform_id: 3,
            encoding_id: 1,
            language_id: 0x0409,
            name_id,
            bytes: text.encode_utf16().flat_map(|u| u.to_be_bytes()).collect(),
        }
    }

    /// Macintosh Roman record (1, 0, English). `bytes` are raw Mac Roman.
    pub fn mac(name_id: u16, bytes: &[u8]) -> Self {
        Self {
            platform_id: 1,
            encoding_id: 0,
            language_id: 0,
            name_id,
            bytes: bytes.to_vec(),
        }
    }
}

/// A font whose full name (ID 4) is `full_name`.
pub fn font_with_full_name(full_name: &str) -> Vec<u8> {
    build_font(&[NameEntry::windows(4, full_name)])
}

/// Build a single-glyph TrueType font with the given name records.
///
/// Tables: head, hhea, hmtx, maxp, name. Glyph 0 advances [`ADVANCE`] units.
pub fn build_font(names: &[NameEntry]) -> Vec<u8> {
    build_font_with_h_metrics(names, 1)
}

/// Like [`build_font`] but with `hhea.numberOfHMetrics` set to `h_metrics`.
/// The font still has one glyph and one long metric.
pub fn build_font_with_h_metrics(names: &[NameEntry], h_metrics: u16) -> Vec<u8> {
    build_font_with_name_table(name_table(names), h_metrics)
}

/// Build a font around raw `name` table bytes, e.g. from [`name_table`].
pub fn build_font_with_name_table(name: Vec<u8>, h_metrics: u16) -> Vec<u8> {
    let mut tables: Vec<([u8; 4], Vec<u8>)> = vec![
        (*b"head", head_table()),
        (*b"hhea", hhea_table(h_metrics)),
        (*b"hmtx", hmtx_table()),
        (*b"maxp", maxp_table()),
        (*b"name", name),
    ];
    // Table records must be sorted by tag.
    tables.sort_by(|a, b| a.0.cmp(&b.0));
    write_sfnt(&tables)
}

/// Write `data` to `dir/file_name`.
pub fn write_font(dir: &Path, file_name: &str, data: &[u8]) {
    fs::write(dir.join(file_name), data).expect("Failed to write font fixture");
}

fn head_table() -> Vec<u8> {
    let mut t = vec![0u8; 54];
    put_u32(&mut t, 0, 0x0001_0000); // version
    put_u32(&mut t, 4, 0x0001_0000); // fontRevision
    put_u32(&mut t, 12, 0x5F0F_3CF5); // magicNumber
    put_u16(&mut t, 18, UNITS_PER_EM);
    put_i16(&mut t, 40, 0); // xMin
    put_i16(&mut t, 42, DESCENDER); // yMin
    put_i16(&mut t, 44, ADVANCE as i16); // xMax
    put_i16(&mut t, 46, ASCENDER); // yMax
    put_u16(&mut t, 50, 0); // indexToLocFormat
    t
}

fn hhea_table(h_metrics: u16) -> Vec<u8> {
    let mut t = vec![0u8; 36];
    put_u32(&mut t, 0, 0x0001_0000);
    put_i16(&mut t, 4, ASCENDER);
    put_i16(&mut t, 6, DESCENDER);
    put_i16(&mut t, 8, 0); // lineGap
    put_u16(&mut t, 10, ADVANCE); // advanceWidthMax
    put_u16(&mut t, 34, h_metrics); // numberOfHMetrics
    t
}

fn hmtx_table() -> Vec<u8> {
    let mut t = vec![0u8; 4];
    put_u16(&mut t, 0, ADVANCE);
    t
}

fn maxp_table() -> Vec<u8> {
    let mut t = vec![0u8; 6];
    put_u32(&mut t, 0, 0x0000_5000); // version 0.5
    put_u16(&mut t, 4, 1); // numGlyphs
    t
}

/// Raw `name` table (format 0). Record `i` starts at byte `6 + 12 * i`.
pub fn name_table(names: &[NameEntry]) -> Vec<u8> {
    let header_len = 6 + 12 * names.len();
    let mut t = Vec::new();
    t.extend_from_slice(&0u16.to_be_bytes()); // format
    t.extend_from_slice(&(names.len() as u16).to_be_bytes());
    t.extend_from_slice(&(header_len as u16).to_be_bytes()); // stringOffset

    let mut storage = Vec::new();
    for entry in names {
        t.extend_from_slice(&entry.platform_id.to_be_bytes());
        t.extend_from_slice(&entry.encoding_id.to_be_bytes());
        t.extend_from_slice(&entry.language_id.to_be_bytes());
        t.extend_from_slice(&entry.name_id.to_be_bytes());
        t.extend_from_slice(&(entry.bytes.len() as u16).to_be_bytes());
        t.extend_from_slice(&(storage.len() as u16).to_be_bytes());
        storage.extend_from_slice(&entry.bytes);
    }
    t.extend_from_slice(&storage);
    t
}

fn write_sfnt(tables: &[([u8; 4], Vec<u8>)]) -> Vec<u8> {
    let num_tables = tables.len() as u16;
    let entry_selector = 15 - num_tables.leading_zeros() as u16;
    let search_range = (1u16 << entry_selector) * 16;
    let range_shift = num_tables * 16 - search_range;

    let mut out = Vec::new();
    out.extend_from_slice(&0x0001_0000u32.to_be_bytes());
    out.extend_from_slice(&num_tables.to_be_bytes());
    out.extend_from_slice(&search_range.to_be_bytes());
    out.extend_from_slice(&entry_selector.to_be_bytes());
    out.extend_from_slice(&range_shift.to_be_bytes());

    let mut offset = 12 + 16 * tables.len();
    let mut body = Vec::new();
    for (tag, data) in tables {
        out.extend_from_slice(tag);
        out.extend_from_slice(&0u32.to_be_bytes()); // checksum (unchecked)
        out.extend_from_slice(&(offset as u32).to_be_bytes());
        out.extend_from_slice(&(data.len() as u32).to_be_bytes());

        body.extend_from_slice(data);
        let padded = data.len().div_ceil(4) * 4;
        body.resize(body.len() + (padded - data.len()), 0);
        offset += padded;
    }
    out.extend_from_slice(&body);
    out
}

fn put_u16(buf: &mut [u8], at: usize, value: u16) {
    buf[at..at + 2].copy_from_slice(&value.to_be_bytes());
}

fn put_i16(buf: &mut [u8], at: usize, value: i16) {
    buf[at..at + 2].copy_from_slice(&value.to_be_bytes());
}

fn put_u32(buf: &mut [u8], at: usize, value: u32) {
    buf[at..at + 4].copy_from_slice(&value.to_be_bytes());
}
