//! Social post templates and the lookup fallback chain.
//!
//! Resolution order for a category: the category itself, then each configured
//! fallback category, then the built-in set for that category, then built-in
//! `general`. The last step is never empty.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::data::builtin;
use crate::domain::social::SocialTemplate;

pub const DEFAULT_FALLBACKS: &[&str] = &["general", "launch"];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateSource {
    Requested,
    Fallback,
    Builtin,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedTemplates {
    /// Category the items actually came from.
    pub category: String,
    pub source: TemplateSource,
    pub items: Vec<SocialTemplate>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TemplateStore {
    sets: IndexMap<String, Vec<SocialTemplate>>,
    #[serde(skip, default = "default_fallbacks")]
    fallbacks: Vec<String>,
}

fn default_fallbacks() -> Vec<String> {
    DEFAULT_FALLBACKS.iter().map(|category| category.to_string()).collect()
}

impl Default for TemplateStore {
    fn default() -> Self {
        Self::new(IndexMap::new())
    }
}

impl TemplateStore {
    pub fn new(sets: IndexMap<String, Vec<SocialTemplate>>) -> Self {
        Self { sets, fallbacks: default_fallbacks() }
    }

    pub fn builtin() -> Self {
        Self::new(builtin::social_templates())
    }

    pub fn with_fallbacks(mut self, fallbacks: &[&str]) -> Self {
        self.fallbacks = fallbacks.iter().map(|category| category.to_string()).collect();
        self
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.sets.keys().map(String::as_str)
    }

    pub fn get(&self, category: &str) -> Option<&[SocialTemplate]> {
        self.sets.get(category).map(Vec::as_slice).filter(|items| !items.is_empty())
    }

    /// Up to `limit` items for `category`, walking the fallback chain.
    pub fn resolve(&self, category: &str, limit: usize) -> ResolvedTemplates {
        if let Some(items) = self.get(category) {
            return resolved(category, TemplateSource::Requested, items, limit);
        }

        for fallback in self.fallbacks.iter().filter(|fallback| fallback.as_str() != category) {
            if let Some(items) = self.get(fallback) {
                return resolved(fallback, TemplateSource::Fallback, items, limit);
            }
        }

        let mut builtin = builtin::social_templates();
        let (category, items) = match builtin.shift_remove(category) {
            Some(items) if !items.is_empty() => (category.to_string(), items),
            _ => ("general".to_string(), builtin.shift_remove("general").unwrap_or_default()),
        };
        resolved(&category, TemplateSource::Builtin, &items, limit)
    }
}

fn resolved(
    category: &str,
    source: TemplateSource,
    items: &[SocialTemplate],
    limit: usize,
) -> ResolvedTemplates {
    ResolvedTemplates {
        category: category.to_string(),
        source,
        items: items.iter().take(limit).cloned().collect(),
    }
}
