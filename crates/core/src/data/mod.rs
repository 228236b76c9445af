//! File-backed agent data with built-in fallbacks.
//!
//! Every loader returns usable data. A missing, unreadable or corrupt file is
//! logged and replaced by the built-in set; the error never reaches the caller.

pub mod builtin;

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::config::DataConfig;
use crate::domain::faq::FaqBook;
use crate::domain::product::ProductCatalog;
use crate::errors::DataError;
use crate::templates::TemplateStore;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "origin", rename_all = "snake_case")]
pub enum DataOrigin {
    File { path: PathBuf },
    Builtin { reason: String },
}

impl DataOrigin {
    pub fn is_builtin(&self) -> bool {
        matches!(self, Self::Builtin { .. })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Loaded<T> {
    pub value: T,
    pub origin: DataOrigin,
}

pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, DataError> {
    let raw = fs::read_to_string(path)
        .map_err(|source| DataError::Read { path: path.to_path_buf(), source })?;
    serde_json::from_str(&raw)
        .map_err(|source| DataError::Parse { path: path.to_path_buf(), source })
}

fn load_or_builtin<T: DeserializeOwned>(
    dataset: &'static str,
    path: &Path,
    builtin: impl FnOnce() -> T,
) -> Loaded<T> {
    match read_json(path) {
        Ok(value) => {
            debug!(
                event_name = "data.load.file",
                dataset,
                path = %path.display(),
                "loaded data file"
            );
            Loaded { value, origin: DataOrigin::File { path: path.to_path_buf() } }
        }
        Err(error) => {
            warn!(
                event_name = "data.load.fallback",
                dataset,
                path = %path.display(),
                reason = error.reason_code(),
                error = %error,
                "falling back to built-in data"
            );
            Loaded {
                value: builtin(),
                origin: DataOrigin::Builtin { reason: error.reason_code().to_string() },
            }
        }
    }
}

pub fn load_faqs(path: &Path) -> Loaded<FaqBook> {
    load_or_builtin("faqs", path, builtin::faq_book)
}

pub fn load_catalog(path: &Path) -> Loaded<ProductCatalog> {
    load_or_builtin("products", path, builtin::product_catalog)
}

pub fn load_templates(path: &Path) -> Loaded<TemplateStore> {
    load_or_builtin("social_templates", path, TemplateStore::builtin)
}

/// All static agent data, loaded once at startup.
#[derive(Clone, Debug, PartialEq)]
pub struct DataSet {
    pub faqs: Loaded<FaqBook>,
    pub catalog: Loaded<ProductCatalog>,
    pub templates: Loaded<TemplateStore>,
}

impl DataSet {
    pub fn load(config: &DataConfig) -> Self {
        Self {
            faqs: load_faqs(&config.faqs_path),
            catalog: load_catalog(&config.products_path),
            templates: load_templates(&config.templates_path),
        }
    }

    pub fn builtin() -> Self {
        let origin = DataOrigin::Builtin { reason: "requested".to_string() };
        Self {
            faqs: Loaded { value: builtin::faq_book(), origin: origin.clone() },
            catalog: Loaded { value: builtin::product_catalog(), origin: origin.clone() },
            templates: Loaded { value: TemplateStore::builtin(), origin },
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;

    use tempfile::TempDir;

    use super::{load_catalog, load_faqs, load_templates, read_json, DataOrigin, DataSet};
    use crate::config::DataConfig;
    use crate::errors::DataError;

    #[test]
    fn missing_file_falls_back_to_builtin() {
        let loaded = load_faqs(&PathBuf::from("/definitely/not/here/faqs.json"));
        assert_eq!(loaded.origin, DataOrigin::Builtin { reason: "missing".to_string() });
        assert!(!loaded.value.is_empty());
    }

    #[test]
    fn corrupt_file_falls_back_to_builtin() -> Result<(), std::io::Error> {
        let dir = TempDir::new()?;
        let path = dir.path().join("products.json");
        fs::write(&path, "{ not json")?;

        let loaded = load_catalog(&path);
        assert_eq!(loaded.origin, DataOrigin::Builtin { reason: "corrupt".to_string() });
        assert!(!loaded.value.is_empty());
        Ok(())
    }

    #[test]
    fn valid_file_is_used_verbatim() -> Result<(), std::io::Error> {
        let dir = TempDir::new()?;
        let path = dir.path().join("social_templates.json");
        fs::write(
            &path,
            r#"{"contest": [{"platform": "X", "content": "Enter now", "type": "Contest"}]}"#,
        )?;

        let loaded = load_templates(&path);
        assert_eq!(loaded.origin, DataOrigin::File { path: path.clone() });
        assert_eq!(loaded.value.categories().collect::<Vec<_>>(), vec!["contest"]);
        Ok(())
    }

    #[test]
    fn read_json_reports_parse_errors() -> Result<(), std::io::Error> {
        let dir = TempDir::new()?;
        let path = dir.path().join("faqs.json");
        fs::write(&path, "[1, 2")?;

        let result = read_json::<serde_json::Value>(&path);
        assert!(matches!(result, Err(DataError::Parse { .. })));
        Ok(())
    }

    #[test]
    fn dataset_load_mixes_file_and_builtin_origins() -> Result<(), std::io::Error> {
        let dir = TempDir::new()?;
        let faqs_path = dir.path().join("faqs.json");
        fs::write(
            &faqs_path,
            r#"{"hours": {"keywords": ["open"], "category": "hours", "answer": "9 to 5"}}"#,
        )?;

        let data = DataSet::load(&DataConfig {
            faqs_path,
            products_path: dir.path().join("missing-products.json"),
            templates_path: dir.path().join("missing-templates.json"),
        });

        assert!(!data.faqs.origin.is_builtin());
        assert_eq!(data.faqs.value.len(), 1);
        assert!(data.catalog.origin.is_builtin());
        assert!(data.templates.origin.is_builtin());
        Ok(())
    }
}
