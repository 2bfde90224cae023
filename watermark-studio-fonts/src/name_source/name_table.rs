//! Name-table tier backed by `ttf-parser`.

use ttf_parser::name::Table;
use ttf_parser::{PlatformId, RawFace, Tag};

use super::records::{NameRecord, Platform, select_display_name};
use super::{FontFile, NameSource};

/// Reads the full name (or family name) straight from the `name` table.
///
/// Only the table directory and the `name` table are parsed, so fonts with
/// broken outlines or metrics still get their proper name.
#[derive(Debug, Clone, Copy, Default)]
pub struct NameTableSource;

impl NameSource for NameTableSource {
    fn label(&self) -> &str {
        "name-table"
    }

    fn display_name(&self, font: &FontFile) -> Option<String> {
        let data = font.data()?;
        let face = match RawFace::parse(data, 0) {
            Ok(face) => face,
            Err(e) => {
                log::trace!("{:?}: not a font face ({})", font.path(), e);
                return None;
            }
        };
        let table = Table::parse(face.table(Tag::from_bytes(b"name"))?)?;

        let records: Vec<NameRecord<'_>> = table
            .names
            .into_iter()
            .map(|name| NameRecord {
                platform: platform_of(name.platform_id),
                encoding_id: name.encoding_id,
                name_id: name.name_id,
                bytes: name.name,
            })
            .collect();

        select_display_name(&records)
    }
}

fn platform_of(id: PlatformId) -> Platform {
    match id {
        PlatformId::Unicode => Platform::Unicode,
        PlatformId::Macintosh => Platform::Macintosh,
        PlatformId::Iso => Platform::Iso,
        PlatformId::Windows => Platform::Windows,
        PlatformId::Custom => Platform::Custom,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn garbage_bytes_yield_nothing() {
        let font = FontFile::from_bytes("bad.ttf", b"definitely not a font".to_vec());
        assert_eq!(NameTableSource.display_name(&font), None);
    }

    #[test]
    fn empty_and_missing_data_yield_nothing() {
        let font = FontFile::from_bytes("empty.ttf", Vec::new());
        assert_eq!(NameTableSource.display_name(&font), None);

        let missing = FontFile::open("/no/such/dir/missing.ttf");
        assert_eq!(NameTableSource.display_name(&missing), None);
    }
}
