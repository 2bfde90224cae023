//! Display-name de-duplication.

use std::collections::HashMap;

/// Hands out unique names within one catalog build.
///
/// The first occurrence of a base name is returned unchanged, the k-th
/// occurrence becomes `"Name (k)"`.
#[derive(Debug, Default)]
pub struct NameDeduper {
    seen: HashMap<String, usize>,
}

impl NameDeduper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register one more occurrence of `name` and return its unique form.
    pub fn unique(&mut self, name: &str) -> String {
        let count = self.seen.entry(name.to_string()).or_insert(0);
        *count += 1;
        if *count == 1 {
            name.to_string()
        } else {
            format!("{name} ({count})")
        }
    }
}
