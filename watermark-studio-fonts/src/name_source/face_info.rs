//! Face-info tier backed by `swash`.

use swash::{FontRef, StringId};

use super::{FontFile, NameSource};

/// Builds a name from the face's family and style strings.
#[derive(Debug, Clone, Copy, Default)]
pub struct FaceInfoSource;

impl NameSource for FaceInfoSource {
    fn label(&self) -> &str {
        "face-info"
    }

    fn display_name(&self, font: &FontFile) -> Option<String> {
        let face = FontRef::from_index(font.data()?, 0)?;
        let family = localized(&face, StringId::Family);
        let style = localized(&face, StringId::SubFamily);
        combine_family_style(family.as_deref(), style.as_deref())
    }
}

fn localized(face: &FontRef<'_>, id: StringId) -> Option<String> {
    face.localized_strings()
        .find_by_id(id, None)
        .map(|s| s.chars().collect())
}

/// `"Family Style"` unless the style is "Regular", otherwise just the family.
pub fn combine_family_style(family: Option<&str>, style: Option<&str>) -> Option<String> {
    let family = family.map(str::trim).unwrap_or_default();
    let style = style.map(str::trim).unwrap_or_default();

    if family.is_empty() {
        return None;
    }
    if !style.is_empty() && !style.eq_ignore_ascii_case("regular") {
        return Some(format!("{family} {style}"));
    }
    Some(family.to_string())
}
