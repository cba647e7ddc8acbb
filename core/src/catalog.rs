use crate::error::{ThemeError, ThemeResult};
use crate::source::ThemeSource;
use crate::types::{CatalogEntry, ThemeHeader};
use crate::validation::{ThemeNameValidator, Validator};

/// Ordered list of the themes found in a set of sources.
///
/// Sources are scanned in order, and each source lists its files sorted by
/// path. A theme's id is its position in this list. When a later source
/// provides a theme with the same display name as an earlier one, the later
/// file replaces the earlier entry in place, so user themes can override
/// bundled ones without shifting ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThemeCatalog {
    entries: Vec<CatalogEntry>,
}

impl ThemeCatalog {
    /// Scan every source. Files that cannot be read, parsed or validated are
    /// logged and skipped.
    pub fn build(sources: &[Box<dyn ThemeSource>]) -> Self {
        let name_validator = ThemeNameValidator;
        let mut entries: Vec<CatalogEntry> = Vec::new();

        for (index, source) in sources.iter().enumerate() {
            let paths = match source.entries() {
                Ok(paths) => paths,
                Err(e) => {
                    log::warn!("Skipping theme source '{}': {e}", source.label());
                    continue;
                }
            };

            for path in paths {
                let name = match read_display_name(source.as_ref(), &path, &name_validator) {
                    Ok(name) => name,
                    Err(e) => {
                        log::warn!("{e}");
                        continue;
                    }
                };

                let entry = CatalogEntry {
                    name,
                    path,
                    source: index,
                };

                match entries.iter_mut().find(|e| e.name == entry.name) {
                    Some(existing) => {
                        log::info!(
                            "Theme '{}' from '{}' overrides '{}'",
                            entry.name,
                            entry.path,
                            existing.path
                        );
                        *existing = entry;
                    }
                    None => entries.push(entry),
                }
            }
        }

        log::debug!("Theme catalog built with {} entries", entries.len());
        Self { entries }
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn get(&self, id: usize) -> Option<&CatalogEntry> {
        self.entries.get(id)
    }

    /// Display names in id order.
    pub fn names(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.name.clone()).collect()
    }

    /// Id of the theme with the given display name.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.name == name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn read_display_name(
    source: &dyn ThemeSource,
    path: &str,
    validator: &ThemeNameValidator,
) -> ThemeResult<String> {
    let invalid = |reason: String| ThemeError::CatalogEntryInvalid {
        path: path.to_string(),
        reason,
    };

    let contents = source.read(path).map_err(|e| invalid(e.to_string()))?;
    let header: ThemeHeader =
        serde_json::from_str(&contents).map_err(|e| invalid(e.to_string()))?;
    validator
        .validate(&header.name)
        .map_err(|e| invalid(e.to_string()))?;

    Ok(header.name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::EmbeddedSource;

    fn source(files: &[(&str, &str)]) -> Box<dyn ThemeSource> {
        Box::new(EmbeddedSource::new(
            files
                .iter()
                .map(|(path, contents)| (path.to_string(), contents.to_string())),
        ))
    }

    #[test]
    fn test_catalog_orders_and_skips_invalid_entries() {
        let sources = vec![source(&[
            ("b.json", r#"{ "name": "Beta" }"#),
            ("a.json", r#"{ "name": "Alpha", "colors": {} }"#),
            ("broken.json", "{ not json"),
            ("nameless.json", r#"{ "colors": {} }"#),
            ("blank.json", r#"{ "name": "" }"#),
        ])];

        let catalog = ThemeCatalog::build(&sources);
        assert_eq!(catalog.names(), vec!["Alpha", "Beta"]);
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.position("Beta"), Some(1));
        assert_eq!(catalog.position("Gamma"), None);
        assert_eq!(catalog.get(0).map(|e| e.path.as_str()), Some("a.json"));
        assert!(catalog.get(2).is_none());
    }

    #[test]
    fn test_later_source_overrides_by_name() {
        let sources = vec![
            source(&[
                ("builtin/a.json", r#"{ "name": "Alpha" }"#),
                ("builtin/b.json", r#"{ "name": "Beta" }"#),
            ]),
            source(&[
                ("user/beta.json", r#"{ "name": "Beta" }"#),
                ("user/c.json", r#"{ "name": "Gamma" }"#),
            ]),
        ];

        let catalog = ThemeCatalog::build(&sources);
        assert_eq!(catalog.names(), vec!["Alpha", "Beta", "Gamma"]);

        let beta = catalog.get(1).unwrap();
        assert_eq!(beta.path, "user/beta.json");
        assert_eq!(beta.source, 1);
    }

    #[test]
    fn test_empty_sources() {
        let catalog = ThemeCatalog::build(&[]);
        assert!(catalog.is_empty());
        assert!(catalog.names().is_empty());
    }
}
