use std::{collections::BTreeMap, path::Path};

use crate::{
    Res, TuneNestError,
    types::{CatalogEntry, CatalogGroups, CatalogIssue},
    warning,
};

/// Separator between category and display name in catalog labels.
pub const CATEGORY_SEPARATOR: &str = " : ";

/// Splits a `"Category : Display Name"` label.
///
/// # Errors
///
/// Returns a `Configuration` error naming the playlist id when the separator is
/// missing or either side is empty.
pub fn parse_entry(id: &str, label: &str) -> Res<CatalogEntry> {
    let malformed = || {
        TuneNestError::Configuration(format!(
            "playlist {id} has malformed name {label:?}, expected \"Category : Name\""
        ))
    };

    let (category, name) = label.split_once(CATEGORY_SEPARATOR).ok_or_else(malformed)?;
    let (category, name) = (category.trim(), name.trim());
    if category.is_empty() || name.is_empty() {
        return Err(malformed());
    }

    Ok(CatalogEntry {
        id: id.to_string(),
        category: category.to_string(),
        name: name.to_string(),
    })
}

/// The configured playlist catalog: playlist id -> `"Category : Name"`.
///
/// Labels are kept as written and only parsed when an entry is used, so one
/// bad line shows up as an error on that playlist instead of stopping the
/// server.
#[derive(Debug, Clone, Default)]
pub struct CatalogManager {
    labels: BTreeMap<String, String>,
}

impl CatalogManager {
    pub fn new(labels: BTreeMap<String, String>) -> Self {
        Self { labels }
    }

    /// Reads the catalog file. A missing file yields an empty catalog.
    ///
    /// # Errors
    ///
    /// Returns a `Configuration` error when the file exists but cannot be read
    /// or is not a JSON object of strings.
    pub async fn load(path: &Path) -> Res<Self> {
        if !path.exists() {
            warning!(
                "Playlist catalog {} not found, starting with an empty catalog",
                path.display()
            );
            return Ok(Self::default());
        }

        let content = async_fs::read_to_string(path)
            .await
            .map_err(|e| TuneNestError::Configuration(format!("{}: {e}", path.display())))?;

        Self::from_json(&content)
            .map_err(|e| TuneNestError::Configuration(format!("{}: {e}", path.display())))
    }

    pub fn from_json(content: &str) -> Result<Self, serde_json::Error> {
        let labels: BTreeMap<String, String> = serde_json::from_str(content)?;
        Ok(Self::new(labels))
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// The parsed entry for a playlist id, `None` if the id is not listed.
    pub fn entry(&self, id: &str) -> Option<Res<CatalogEntry>> {
        self.labels.get(id).map(|label| parse_entry(id, label))
    }

    /// All entries grouped by category, plus one issue per malformed label.
    pub fn groups(&self) -> CatalogGroups {
        let mut catalog = CatalogGroups::default();

        for (id, label) in &self.labels {
            match parse_entry(id, label) {
                Ok(entry) => catalog
                    .groups
                    .entry(entry.category.clone())
                    .or_default()
                    .push(entry),
                Err(e) => {
                    warning!("{}", e);
                    catalog.errors.push(CatalogIssue {
                        id: id.clone(),
                        message: e.to_string(),
                    });
                }
            }
        }

        for entries in catalog.groups.values_mut() {
            entries.sort_by(|a, b| a.name.cmp(&b.name));
        }

        catalog
    }
}
