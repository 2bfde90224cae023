//! Name-record selection policy.
//!
//! The policy is kept as static tables so it can be exercised without any
//! font parsing library:
//! - [`PURPOSE_PRIORITY`]: which name IDs to look at, best first
//! - [`ENCODING_PRIORITY`]: which (platform, encoding) pairs to try first
//! - [`DECODE_SCHEMES`]: how each platform's bytes are decoded

use crate::mac_roman;

/// Name ID of the family name record.
pub const FAMILY_NAME_ID: u16 = 1;
/// Name ID of the full font name record.
pub const FULL_NAME_ID: u16 = 4;

/// Platform of a name record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Unicode,
    Macintosh,
    Iso,
    Windows,
    Custom,
}

impl Platform {
    /// Map a raw `platformID` to a platform. Unknown IDs are treated as custom.
    pub fn from_id(id: u16) -> Self {
        match id {
            0 => Platform::Unicode,
            1 => Platform::Macintosh,
            2 => Platform::Iso,
            3 => Platform::Windows,
            _ => Platform::Custom,
        }
    }
}

/// Text encoding used to turn record bytes into a string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameEncoding {
    Utf16Be,
    MacRoman,
    Utf8,
}

/// Name IDs in order of preference.
pub const PURPOSE_PRIORITY: &[u16] = &[FULL_NAME_ID, FAMILY_NAME_ID];

/// (platform, encoding) pairs tried before any other record of the same purpose:
/// Windows Unicode BMP, Windows UCS-4, Macintosh Roman.
pub const ENCODING_PRIORITY: &[(Platform, u16)] = &[
    (Platform::Windows, 1),
    (Platform::Windows, 10),
    (Platform::Macintosh, 0),
];

/// Decoding per platform. Platforms not listed decode as UTF-8.
pub const DECODE_SCHEMES: &[(Platform, NameEncoding)] = &[
    (Platform::Windows, NameEncoding::Utf16Be),
    (Platform::Unicode, NameEncoding::Utf16Be),
    (Platform::Macintosh, NameEncoding::MacRoman),
];

/// A library-independent view of one `name` table record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NameRecord<'a> {
    pub platform: Platform,
    pub encoding_id: u16,
    pub name_id: u16,
    pub bytes: &'a [u8],
}

/// Rank of a name ID, lower is better. `None` if the ID isn't a display name.
pub fn purpose_rank(name_id: u16) -> Option<usize> {
    PURPOSE_PRIORITY.iter().position(|&id| id == name_id)
}

/// Rank of a (platform, encoding) pair. Unlisted pairs share the last rank.
pub fn encoding_rank(platform: Platform, encoding_id: u16) -> usize {
    ENCODING_PRIORITY
        .iter()
        .position(|&(p, e)| p == platform && e == encoding_id)
        .unwrap_or(ENCODING_PRIORITY.len())
}

/// Decoding scheme for records of `platform`.
pub fn decode_scheme(platform: Platform) -> NameEncoding {
    DECODE_SCHEMES
        .iter()
        .find(|(p, _)| *p == platform)
        .map(|&(_, scheme)| scheme)
        .unwrap_or(NameEncoding::Utf8)
}

/// Decode record bytes with the given scheme. Malformed input is decoded lossily.
pub fn decode(bytes: &[u8], scheme: NameEncoding) -> String {
    match scheme {
        NameEncoding::Utf16Be => {
            let units = bytes
                .chunks_exact(2)
                .map(|pair| u16::from_be_bytes([pair[0], pair[1]]));
            char::decode_utf16(units)
                .filter_map(Result::ok)
                .collect()
        }
        NameEncoding::MacRoman => mac_roman::decode(bytes),
        NameEncoding::Utf8 => String::from_utf8_lossy(bytes).into_owned(),
    }
}

/// Decode a record and trim it. Empty results count as no name.
pub fn record_text(record: &NameRecord<'_>) -> Option<String> {
    let text = decode(record.bytes, decode_scheme(record.platform));
    let text = text.trim();
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

/// Pick the display name from a set of name records.
///
/// Purposes are tried in [`PURPOSE_PRIORITY`] order. Within one purpose the
/// preferred encodings come first and everything else follows in table order.
pub fn select_display_name(records: &[NameRecord<'_>]) -> Option<String> {
    for &purpose in PURPOSE_PRIORITY {
        let mut candidates: Vec<&NameRecord<'_>> =
            records.iter().filter(|r| r.name_id == purpose).collect();
        // Stable sort keeps table order among equally ranked records.
        candidates.sort_by_key(|r| encoding_rank(r.platform, r.encoding_id));

        if let Some(name) = candidates.into_iter().find_map(record_text) {
            return Some(name);
        }
    }
    None
}
